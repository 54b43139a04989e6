use bizdesk_core::{ServiceError, now_rfc3339};
use bizdesk_records::{RecordManager, RecordModel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "INACTIVE" => Some(Self::Inactive),
            _ => None,
        }
    }
}

impl std::fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer master record. No document date — the date-range filter
/// does not apply to this page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub status: CustomerStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RecordModel for Customer {
    const CODE_PREFIX: &'static str = "CUST";

    fn kind() -> &'static str {
        "customer"
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
        vec![&self.code, &self.name, &self.email, &self.city]
    }

    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }

    fn apply_field(&mut self, name: &str, raw: &str) -> bool {
        match name {
            "name" => self.name = raw.to_string(),
            "email" => self.email = raw.to_string(),
            "phone" => self.phone = raw.to_string(),
            "city" => self.city = raw.to_string(),
            "status" => {
                if let Some(status) = CustomerStatus::from_str(raw) {
                    self.status = status;
                }
            }
            _ => return false,
        }
        true
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::Validation("name is required".into()));
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

/// Sample dataset for the customers page.
pub fn seed() -> Vec<Customer> {
    let mut records = vec![
        Customer {
            name: "Acme Traders".into(),
            email: "orders@acmetraders.example".into(),
            phone: "+1 555 0101".into(),
            city: "Springfield".into(),
            status: CustomerStatus::Active,
            ..Customer::default()
        },
        Customer {
            name: "Globex Retail".into(),
            email: "purchasing@globex.example".into(),
            phone: "+1 555 0144".into(),
            city: "Ogdenville".into(),
            status: CustomerStatus::Active,
            ..Customer::default()
        },
        Customer {
            name: "Initech Supplies".into(),
            email: "accounts@initech.example".into(),
            city: "Springfield".into(),
            status: CustomerStatus::Inactive,
            ..Customer::default()
        },
    ];
    for (i, r) in records.iter_mut().enumerate() {
        r.set_identity((i + 1) as u32, bizdesk_core::format_code("CUST", (i + 1) as u32));
    }
    records
}

/// A manager over the page's sample dataset.
pub fn manager() -> RecordManager<Customer> {
    RecordManager::with_records(seed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_the_only_mandatory_field() {
        let mut mgr = manager();
        mgr.start_create().unwrap();
        let err = mgr.confirm_save().unwrap_err();
        assert_eq!(err.to_string(), "name is required");

        mgr.set_draft_field("name", "Wayne Logistics");
        let saved = mgr.confirm_save().unwrap();
        assert_eq!(saved.code, "CUST-004");
    }

    #[test]
    fn date_filter_excludes_dateless_records() {
        let mut mgr = manager();
        mgr.set_filter("dateFrom", "2026-01-01");
        assert!(mgr.visible().is_empty());
    }

    #[test]
    fn search_spans_name_email_and_city() {
        let mut mgr = manager();
        mgr.set_filter("search", "springfield");
        assert_eq!(mgr.visible().len(), 2);
        mgr.set_filter("search", "globex.example");
        assert_eq!(mgr.visible().len(), 1);
    }
}
