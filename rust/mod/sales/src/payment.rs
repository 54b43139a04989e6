use bizdesk_core::{ServiceError, coerce_f64, now_rfc3339};
use bizdesk_records::{RecordManager, RecordModel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "COMPLETED" => Some(Self::Completed),
            "FAILED" => Some(Self::Failed),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A received payment. No line items — just an amount against a customer,
/// optionally referencing the invoice it settles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub amount: f64,
    /// Payment method as entered ("Cash", "Bank transfer", ...).
    #[serde(default)]
    pub method: String,
    /// Code of the invoice this payment settles, if any.
    #[serde(default)]
    pub invoice_code: String,
    #[serde(default)]
    pub status: PaymentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RecordModel for Payment {
    const CODE_PREFIX: &'static str = "PAY";

    fn kind() -> &'static str {
        "payment"
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
        vec![&self.code, &self.customer, &self.invoice_code, &self.method]
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
            "amount" => self.amount = coerce_f64(raw),
            "method" => self.method = raw.to_string(),
            "invoiceCode" => self.invoice_code = raw.to_string(),
            "status" => {
                if let Some(status) = PaymentStatus::from_str(raw) {
                    self.status = status;
                }
            }
            _ => return false,
        }
        true
    }

    fn validate(&self) -> Result<(), ServiceError> {
        // Coercion turns an empty amount field into 0, so "amount entered"
        // means "amount > 0" here.
        if self.amount <= 0.0 {
            return Err(ServiceError::Validation("amount is required".into()));
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

/// Sample dataset for the payments page.
pub fn seed() -> Vec<Payment> {
    let mut records = vec![
        Payment {
            customer: "Acme Traders".into(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15),
            amount: 17700.0,
            method: "Bank transfer".into(),
            invoice_code: "INV-001".into(),
            status: PaymentStatus::Completed,
            ..Payment::default()
        },
        Payment {
            customer: "Globex Retail".into(),
            date: NaiveDate::from_ymd_opt(2026, 2, 1),
            amount: 5000.0,
            method: "Cash".into(),
            invoice_code: "INV-002".into(),
            status: PaymentStatus::Pending,
            ..Payment::default()
        },
    ];
    for (i, r) in records.iter_mut().enumerate() {
        r.set_identity((i + 1) as u32, bizdesk_core::format_code("PAY", (i + 1) as u32));
    }
    records
}

/// A manager over the page's sample dataset.
pub fn manager() -> RecordManager<Payment> {
    RecordManager::with_records(seed())
}
