use bizdesk_core::{ServiceError, now_rfc3339};
use bizdesk_records::{RecordManager, RecordModel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "OPEN" => Some(Self::Open),
            "IN_PROGRESS" => Some(Self::InProgress),
            "RESOLVED" => Some(Self::Resolved),
            "CLOSED" => Some(Self::Closed),
            _ => None,
        }
    }

    /// Whether the ticket no longer needs attention.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A support ticket, filterable by status and priority.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub opened: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RecordModel for Ticket {
    const CODE_PREFIX: &'static str = "T";

    fn kind() -> &'static str {
        "ticket"
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
        vec![&self.code, &self.subject, &self.customer, &self.description]
    }

    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.as_str().to_string()),
            "priority" => Some(self.priority.as_str().to_string()),
            _ => None,
        }
    }

    fn doc_date(&self) -> Option<NaiveDate> {
        self.opened
    }

    fn apply_field(&mut self, name: &str, raw: &str) -> bool {
        match name {
            "subject" => self.subject = raw.to_string(),
            "customer" => self.customer = raw.to_string(),
            "priority" => {
                if let Some(priority) = Priority::from_str(raw) {
                    self.priority = priority;
                }
            }
            "status" => {
                if let Some(status) = TicketStatus::from_str(raw) {
                    self.status = status;
                }
            }
            "opened" => self.opened = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
            "description" => self.description = raw.to_string(),
            _ => return false,
        }
        true
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if self.subject.trim().is_empty() {
            return Err(ServiceError::Validation("subject is required".into()));
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

/// Sample dataset for the tickets page.
pub fn seed() -> Vec<Ticket> {
    let mut records = vec![
        Ticket {
            subject: "Damaged delivery".into(),
            customer: "Acme Traders".into(),
            priority: Priority::High,
            status: TicketStatus::InProgress,
            opened: NaiveDate::from_ymd_opt(2026, 1, 20),
            description: "Two brackets bent in transit".into(),
            ..Ticket::default()
        },
        Ticket {
            subject: "Invoice copy request".into(),
            customer: "Globex Retail".into(),
            priority: Priority::Low,
            status: TicketStatus::Resolved,
            opened: NaiveDate::from_ymd_opt(2026, 1, 25),
            ..Ticket::default()
        },
        Ticket {
            subject: "Wrong quantity billed".into(),
            customer: "Initech Supplies".into(),
            priority: Priority::Medium,
            status: TicketStatus::Open,
            opened: NaiveDate::from_ymd_opt(2026, 2, 8),
            ..Ticket::default()
        },
    ];
    for (i, r) in records.iter_mut().enumerate() {
        r.set_identity((i + 1) as u32, bizdesk_core::format_code("T", (i + 1) as u32));
    }
    records
}

/// A manager over the page's sample dataset.
pub fn manager() -> RecordManager<Ticket> {
    RecordManager::with_records(seed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_and_status_filters() {
        let mut mgr = manager();
        mgr.set_filter("priority", "HIGH");
        assert_eq!(mgr.visible().len(), 1);

        mgr.set_filter("priority", "All");
        mgr.set_filter("status", "OPEN");
        let view = mgr.visible();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].code, "T-003");
    }

    #[test]
    fn subject_and_customer_are_mandatory() {
        let mut mgr = manager();
        mgr.start_create().unwrap();
        mgr.set_draft_field("subject", "Printer on fire");
        let err = mgr.confirm_save().unwrap_err();
        assert_eq!(err.to_string(), "customer is required");

        mgr.set_draft_field("customer", "Acme Traders");
        let saved = mgr.confirm_save().unwrap();
        assert_eq!(saved.code, "T-004");
        assert_eq!(saved.status, TicketStatus::Open);
    }

    #[test]
    fn terminal_states() {
        assert!(TicketStatus::Resolved.is_terminal());
        assert!(TicketStatus::Closed.is_terminal());
        assert!(!TicketStatus::Open.is_terminal());
        assert!(!TicketStatus::InProgress.is_terminal());
    }
}
