use bizdesk_core::{ServiceError, coerce_f64, now_rfc3339};
use bizdesk_records::{HasLineItems, LineItem, RecordManager, RecordModel, TotalFormula};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Sent => "SENT",
            Self::Paid => "PAID",
            Self::Overdue => "OVERDUE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "DRAFT" => Some(Self::Draft),
            "SENT" => Some(Self::Sent),
            "PAID" => Some(Self::Paid),
            "OVERDUE" => Some(Self::Overdue),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer invoice. Total = `subtotal + tax`; no document discount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub notes: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RecordModel for Invoice {
    const CODE_PREFIX: &'static str = "INV";

    fn kind() -> &'static str {
        "invoice"
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn set_identity(&mut self, id: u32, code: String) {
        self.id = id;
        self.code = code;
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.code, &self.customer, &self.notes]
    }

    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }

    fn doc_date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn apply_field(&mut self, name: &str, raw: &str) -> bool {
        match name {
            "customer" => self.customer = raw.to_string(),
            "date" => self.date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
            "dueDate" => self.due_date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
            "status" => {
                if let Some(status) = InvoiceStatus::from_str(raw) {
                    self.status = status;
                }
            }
            "tax" => self.tax = coerce_f64(raw),
            "notes" => self.notes = raw.to_string(),
            _ => return false,
        }
        true
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if self.customer.trim().is_empty() {
            return Err(ServiceError::Validation("customer is required".into()));
        }
        if self.date.is_none() {
            return Err(ServiceError::Validation("date is required".into()));
        }
        Ok(())
    }

    fn before_create(&mut self) {
        let now = now_rfc3339();
        self.created_at = Some(now.clone());
        self.updated_at = Some(now);
    }

    fn before_update(&mut self) {
        self.updated_at = Some(now_rfc3339());
    }
}

impl HasLineItems for Invoice {
    const FORMULA: TotalFormula = TotalFormula::AddTax;

    fn items(&self) -> &[LineItem] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Vec<LineItem> {
        &mut self.items
    }

    fn tax(&self) -> f64 {
        self.tax
    }
}

/// Sample dataset for the invoices page.
pub fn seed() -> Vec<Invoice> {
    let mut records = vec![
        Invoice {
            customer: "Acme Traders".into(),
            date: NaiveDate::from_ymd_opt(2026, 1, 8),
            due_date: NaiveDate::from_ymd_opt(2026, 2, 7),
            status: InvoiceStatus::Paid,
            items: vec![LineItem::new("January service fee", 1.0, 15000.0)],
            tax: 2700.0,
            ..Invoice::default()
        },
        Invoice {
            customer: "Globex Retail".into(),
            date: NaiveDate::from_ymd_opt(2026, 1, 21),
            due_date: NaiveDate::from_ymd_opt(2026, 2, 20),
            status: InvoiceStatus::Sent,
            items: vec![
                LineItem::new("Display stand", 4.0, 3200.0),
                LineItem::new("Delivery", 1.0, 900.0),
            ],
            tax: 2466.0,
            ..Invoice::default()
        },
        Invoice {
            customer: "Stark Industrial".into(),
            date: NaiveDate::from_ymd_opt(2026, 2, 3),
            status: InvoiceStatus::Draft,
            items: vec![],
            ..Invoice::default()
        },
    ];
    for (i, r) in records.iter_mut().enumerate() {
        r.set_identity((i + 1) as u32, bizdesk_core::format_code("INV", (i + 1) as u32));
    }
    records
}

/// A manager over the page's sample dataset.
pub fn manager() -> RecordManager<Invoice> {
    RecordManager::with_records(seed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_total_is_subtotal_plus_tax() {
        let invoice = Invoice {
            items: vec![LineItem::new("Service", 4.0, 2000.0)],
            tax: 0.0,
            ..Invoice::default()
        };
        assert_eq!(invoice.total(), 8000.0);
    }

    #[test]
    fn draft_invoice_with_no_items_is_valid() {
        let mut mgr = manager();
        mgr.start_create().unwrap();
        mgr.set_draft_field("customer", "Wayne Logistics");
        mgr.set_draft_field("date", "2026-02-10");
        let saved = mgr.confirm_save().unwrap();
        assert_eq!(saved.code, "INV-004");
        assert_eq!(saved.total(), 0.0);
    }

    #[test]
    fn edit_replaces_items_wholesale() {
        let mut mgr = manager();
        mgr.start_edit(2).unwrap();
        // Remove both lines, add a single new one.
        mgr.remove_draft_item(1);
        mgr.remove_draft_item(0);
        mgr.add_draft_item();
        mgr.set_draft_item(0, "description", "Restock");
        mgr.set_draft_item(0, "quantity", "3");
        mgr.set_draft_item(0, "unitPrice", "1000");
        mgr.set_draft_field("tax", "0");

        let saved = mgr.confirm_save().unwrap();
        assert_eq!(saved.items.len(), 1);
        assert_eq!(saved.total(), 3000.0);
    }

    #[test]
    fn date_range_filter_on_seed() {
        let mut mgr = manager();
        mgr.set_filter("dateFrom", "2026-01-10");
        mgr.set_filter("dateTo", "2026-01-31");
        let view = mgr.visible();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].customer, "Globex Retail");
    }

    #[test]
    fn search_hits_invoice_code() {
        let mut mgr = manager();
        mgr.set_filter("search", "inv-001");
        assert_eq!(mgr.visible().len(), 1);
    }
}
