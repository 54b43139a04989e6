use bizdesk_core::{ServiceError, coerce_f64, now_rfc3339};
use bizdesk_records::{HasLineItems, LineItem, RecordManager, RecordModel, TotalFormula};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sales order status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sales order: customer, date, line items, discount and tax.
///
/// Total = `subtotal - discount + tax`, derived at read time via
/// [`HasLineItems::total`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub notes: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RecordModel for SalesOrder {
    const CODE_PREFIX: &'static str = "SO";

    fn kind() -> &'static str {
        "sales_order"
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
            "status" => {
                if let Some(status) = OrderStatus::from_str(raw) {
                    self.status = status;
                }
            }
            "discount" => self.discount = coerce_f64(raw),
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

impl HasLineItems for SalesOrder {
    const FORMULA: TotalFormula = TotalFormula::SubtractDiscountAddTax;

    fn items(&self) -> &[LineItem] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Vec<LineItem> {
        &mut self.items
    }

    fn discount(&self) -> f64 {
        self.discount
    }

    fn tax(&self) -> f64 {
        self.tax
    }
}

/// Sample dataset for the sales orders page.
pub fn seed() -> Vec<SalesOrder> {
    let mut records = vec![
        SalesOrder {
            customer: "Acme Traders".into(),
            date: NaiveDate::from_ymd_opt(2026, 1, 5),
            status: OrderStatus::Completed,
            items: vec![
                LineItem::new("Steel brackets", 10.0, 450.0),
                LineItem::new("Mounting kit", 2.0, 1200.0),
            ],
            discount: 400.0,
            tax: 690.0,
            notes: "Repeat customer".into(),
            ..SalesOrder::default()
        },
        SalesOrder {
            customer: "Globex Retail".into(),
            date: NaiveDate::from_ymd_opt(2026, 1, 18),
            status: OrderStatus::Pending,
            items: vec![LineItem::new("Display stand", 4.0, 3200.0)],
            tax: 1280.0,
            ..SalesOrder::default()
        },
        SalesOrder {
            customer: "Initech Supplies".into(),
            date: NaiveDate::from_ymd_opt(2026, 2, 2),
            status: OrderStatus::Pending,
            items: vec![LineItem::new("Cable drum", 6.0, 850.0)],
            discount: 100.0,
            tax: 500.0,
            ..SalesOrder::default()
        },
    ];
    for (i, r) in records.iter_mut().enumerate() {
        r.set_identity((i + 1) as u32, bizdesk_core::format_code("SO", (i + 1) as u32));
    }
    records
}

/// A manager over the page's sample dataset.
pub fn manager() -> RecordManager<SalesOrder> {
    RecordManager::with_records(seed())
}
