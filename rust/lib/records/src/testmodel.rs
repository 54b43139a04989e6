//! Minimal record kind used by the unit tests in this crate.
//!
//! Hand-built the same way the business modules build theirs; kept out of
//! the public API.

use bizdesk_core::{ServiceError, coerce_f64};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::items::{LineItem, TotalFormula};
use crate::model::{HasLineItems, RecordModel};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TestDoc {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub tax: f64,
}

impl RecordModel for TestDoc {
    const CODE_PREFIX: &'static str = "DOC";

    fn kind() -> &'static str {
        "test_doc"
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
        vec![&self.code, &self.customer]
    }

    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.clone()),
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
            "status" => self.status = raw.to_string(),
            "discount" => self.discount = coerce_f64(raw),
            "tax" => self.tax = coerce_f64(raw),
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
}

impl HasLineItems for TestDoc {
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

/// Build a valid draft with the given customer / date / status.
pub(crate) fn doc(customer: &str, date: &str, status: &str) -> TestDoc {
    TestDoc {
        customer: customer.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
        status: status.to_string(),
        ..TestDoc::default()
    }
}
