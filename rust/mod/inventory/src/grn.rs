use bizdesk_core::{ServiceError, coerce_f64, now_rfc3339};
use bizdesk_records::{HasLineItems, LineItem, RecordManager, RecordModel, TotalFormula};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrnStatus {
    #[default]
    Pending,
    Inspected,
    Accepted,
}

impl GrnStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Inspected => "INSPECTED",
            Self::Accepted => "ACCEPTED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "INSPECTED" => Some(Self::Inspected),
            "ACCEPTED" => Some(Self::Accepted),
            _ => None,
        }
    }
}

impl std::fmt::Display for GrnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A goods received note. Unlike orders, every received line must say
/// what it is — an item row with an empty description fails validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grn {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Code of the purchase order being received, if any.
    #[serde(default)]
    pub po_code: String,
    #[serde(default)]
    pub status: GrnStatus,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub tax: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RecordModel for Grn {
    const CODE_PREFIX: &'static str = "GRN";

    fn kind() -> &'static str {
        "grn"
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
        vec![&self.code, &self.supplier, &self.po_code]
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
            "poCode" => self.po_code = raw.to_string(),
            "status" => {
                if let Some(status) = GrnStatus::from_str(raw) {
                    self.status = status;
                }
            }
            "tax" => self.tax = coerce_f64(raw),
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
        if self.items.iter().any(|i| i.description.trim().is_empty()) {
            return Err(ServiceError::Validation(
                "every item needs a description".into(),
            ));
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

impl HasLineItems for Grn {
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

/// Sample dataset for the GRN page.
pub fn seed() -> Vec<Grn> {
    let mut records = vec![
        Grn {
            supplier: "Northside Metals".into(),
            date: NaiveDate::from_ymd_opt(2026, 1, 16),
            po_code: "PO-001".into(),
            status: GrnStatus::Accepted,
            items: vec![LineItem::new("Sheet steel 2mm", 50.0, 320.0)],
            ..Grn::default()
        },
        Grn {
            supplier: "Delta Packaging".into(),
            date: NaiveDate::from_ymd_opt(2026, 2, 4),
            po_code: "PO-002".into(),
            status: GrnStatus::Pending,
            items: vec![LineItem::new("Carton L", 180.0, 18.0)],
            ..Grn::default()
        },
    ];
    for (i, r) in records.iter_mut().enumerate() {
        r.set_identity((i + 1) as u32, bizdesk_core::format_code("GRN", (i + 1) as u32));
    }
    records
}

/// A manager over the page's sample dataset.
pub fn manager() -> RecordManager<Grn> {
    RecordManager::with_records(seed())
}
