use bizdesk_core::{ServiceError, coerce_f64, now_rfc3339};
use bizdesk_records::{HasLineItems, LineItem, RecordManager, RecordModel, TotalFormula};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseOrderStatus {
    #[default]
    Pending,
    Approved,
    Received,
    Cancelled,
}

impl PurchaseOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Received => "RECEIVED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "APPROVED" => Some(Self::Approved),
            "RECEIVED" => Some(Self::Received),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for PurchaseOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchase order raised against a supplier. Total = `subtotal + tax`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: PurchaseOrderStatus,
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

impl RecordModel for PurchaseOrder {
    const CODE_PREFIX: &'static str = "PO";

    fn kind() -> &'static str {
        "purchase_order"
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
        vec![&self.code, &self.supplier, &self.notes]
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
            "supplier" => self.supplier = raw.to_string(),
            "date" => self.date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
            "status" => {
                if let Some(status) = PurchaseOrderStatus::from_str(raw) {
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
        if self.supplier.trim().is_empty() {
            return Err(ServiceError::Validation("supplier is required".into()));
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

impl HasLineItems for PurchaseOrder {
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

/// Sample dataset for the purchase orders page.
pub fn seed() -> Vec<PurchaseOrder> {
    let mut records = vec![
        PurchaseOrder {
            supplier: "Northside Metals".into(),
            date: NaiveDate::from_ymd_opt(2026, 1, 9),
            status: PurchaseOrderStatus::Received,
            items: vec![LineItem::new("Sheet steel 2mm", 50.0, 320.0)],
            tax: 2880.0,
            ..PurchaseOrder::default()
        },
        PurchaseOrder {
            supplier: "Delta Packaging".into(),
            date: NaiveDate::from_ymd_opt(2026, 1, 27),
            status: PurchaseOrderStatus::Approved,
            items: vec![
                LineItem::new("Carton L", 200.0, 18.0),
                LineItem::new("Strapping roll", 10.0, 95.0),
            ],
            tax: 0.0,
            notes: "Deliver to rear dock".into(),
            ..PurchaseOrder::default()
        },
        PurchaseOrder {
            supplier: "Northside Metals".into(),
            date: NaiveDate::from_ymd_opt(2026, 2, 6),
            status: PurchaseOrderStatus::Pending,
            items: vec![LineItem::new("Angle bar", 30.0, 210.0)],
            tax: 1134.0,
            ..PurchaseOrder::default()
        },
    ];
    for (i, r) in records.iter_mut().enumerate() {
        r.set_identity((i + 1) as u32, bizdesk_core::format_code("PO", (i + 1) as u32));
    }
    records
}

/// A manager over the page's sample dataset.
pub fn manager() -> RecordManager<PurchaseOrder> {
    RecordManager::with_records(seed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_adds_tax_only() {
        let po = &seed()[0];
        assert_eq!(po.total(), 50.0 * 320.0 + 2880.0);
    }

    #[test]
    fn supplier_is_mandatory() {
        let mut mgr = manager();
        mgr.start_create().unwrap();
        mgr.set_draft_field("date", "2026-02-20");
        let err = mgr.confirm_save().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
        assert_eq!(mgr.store().len(), 3);
    }

    #[test]
    fn search_and_status_compose() {
        let mut mgr = manager();
        mgr.set_filter("search", "northside");
        assert_eq!(mgr.visible().len(), 2);
        mgr.set_filter("status", "PENDING");
        let view = mgr.visible();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].code, "PO-003");
    }
}
