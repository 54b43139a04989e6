use bizdesk_core::{ServiceError, coerce_f64, now_rfc3339};
use bizdesk_records::{RecordManager, RecordModel};
use serde::{Deserialize, Serialize};

/// Ledger account category. Exposed to the UI as the `"type"` filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Asset,
    Liability,
    Income,
    Expense,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asset => "ASSET",
            Self::Liability => "LIABILITY",
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ASSET" => Some(Self::Asset),
            "LIABILITY" => Some(Self::Liability),
            "INCOME" => Some(Self::Income),
            "EXPENSE" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    #[default]
    Active,
    Archived,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Archived => "ARCHIVED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "ARCHIVED" => Some(Self::Archived),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ledger account with a running balance. The balance is plain data
/// here — double-entry rules live outside this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub account_type: AccountType,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub status: AccountStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RecordModel for Account {
    const CODE_PREFIX: &'static str = "ACC";

    fn kind() -> &'static str {
        "account"
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
        vec![&self.code, &self.name]
    }

    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.as_str().to_string()),
            "type" => Some(self.account_type.as_str().to_string()),
            _ => None,
        }
    }

    fn apply_field(&mut self, name: &str, raw: &str) -> bool {
        match name {
            "name" => self.name = raw.to_string(),
            "type" => {
                if let Some(account_type) = AccountType::from_str(raw) {
                    self.account_type = account_type;
                }
            }
            "balance" => self.balance = coerce_f64(raw),
            "status" => {
                if let Some(status) = AccountStatus::from_str(raw) {
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

/// Sample dataset for the accounts page.
pub fn seed() -> Vec<Account> {
    let mut records = vec![
        Account {
            name: "Cash at bank".into(),
            account_type: AccountType::Asset,
            balance: 182_500.0,
            ..Account::default()
        },
        Account {
            name: "Accounts payable".into(),
            account_type: AccountType::Liability,
            balance: 46_000.0,
            ..Account::default()
        },
        Account {
            name: "Sales revenue".into(),
            account_type: AccountType::Income,
            balance: 231_400.0,
            ..Account::default()
        },
        Account {
            name: "Office rent".into(),
            account_type: AccountType::Expense,
            balance: 18_000.0,
            status: AccountStatus::Archived,
            ..Account::default()
        },
    ];
    for (i, r) in records.iter_mut().enumerate() {
        r.set_identity((i + 1) as u32, bizdesk_core::format_code("ACC", (i + 1) as u32));
    }
    records
}

/// A manager over the page's sample dataset.
pub fn manager() -> RecordManager<Account> {
    RecordManager::with_records(seed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_filter_uses_the_type_key() {
        let mut mgr = manager();
        mgr.set_filter("type", "ASSET");
        assert_eq!(mgr.visible().len(), 1);

        mgr.set_filter("type", "all");
        mgr.set_filter("status", "ACTIVE");
        assert_eq!(mgr.visible().len(), 3);
    }

    #[test]
    fn balance_coercion() {
        let mut account = Account::default();
        assert!(account.apply_field("balance", "1000.50"));
        assert_eq!(account.balance, 1000.50);
        assert!(account.apply_field("balance", ""));
        assert_eq!(account.balance, 0.0);
    }

    #[test]
    fn archived_account_can_be_edited_back_to_active() {
        let mut mgr = manager();
        mgr.start_edit(4).unwrap();
        mgr.set_draft_field("status", "ACTIVE");
        let saved = mgr.confirm_save().unwrap();
        assert_eq!(saved.status, AccountStatus::Active);
        assert_eq!(saved.code, "ACC-004");
    }
}
