use bizdesk_core::{ServiceError, coerce_f64, now_rfc3339};
use bizdesk_records::{RecordManager, RecordModel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Planned,
    Active,
    OnHold,
    Done,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "PLANNED",
            Self::Active => "ACTIVE",
            Self::OnHold => "ON_HOLD",
            Self::Done => "DONE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PLANNED" => Some(Self::Planned),
            "ACTIVE" => Some(Self::Active),
            "ON_HOLD" => Some(Self::OnHold),
            "DONE" => Some(Self::Done),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer project with a budget. Date-range filtering keys on the
/// start date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub status: ProjectStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RecordModel for Project {
    const CODE_PREFIX: &'static str = "PRJ";

    fn kind() -> &'static str {
        "project"
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
        vec![&self.code, &self.name, &self.customer]
    }

    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }

    fn doc_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    fn apply_field(&mut self, name: &str, raw: &str) -> bool {
        match name {
            "name" => self.name = raw.to_string(),
            "customer" => self.customer = raw.to_string(),
            "startDate" => self.start_date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
            "budget" => self.budget = coerce_f64(raw),
            "status" => {
                if let Some(status) = ProjectStatus::from_str(raw) {
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
        if self.customer.trim().is_empty() {
            return Err(ServiceError::Validation("customer is required".into()));
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

/// Sample dataset for the projects page.
pub fn seed() -> Vec<Project> {
    let mut records = vec![
        Project {
            name: "Warehouse shelving refit".into(),
            customer: "Acme Traders".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 12),
            budget: 48_000.0,
            status: ProjectStatus::Active,
            ..Project::default()
        },
        Project {
            name: "Storefront displays".into(),
            customer: "Globex Retail".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 1),
            budget: 21_500.0,
            status: ProjectStatus::Planned,
            ..Project::default()
        },
    ];
    for (i, r) in records.iter_mut().enumerate() {
        r.set_identity((i + 1) as u32, bizdesk_core::format_code("PRJ", (i + 1) as u32));
    }
    records
}

/// A manager over the page's sample dataset.
pub fn manager() -> RecordManager<Project> {
    RecordManager::with_records(seed())
}
