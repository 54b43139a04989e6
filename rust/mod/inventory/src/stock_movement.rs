use bizdesk_core::{ServiceError, coerce_f64, now_rfc3339};
use bizdesk_records::{RecordManager, RecordModel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which way stock moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    #[default]
    Inbound,
    Outbound,
    Transfer,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inbound => "INBOUND",
            Self::Outbound => "OUTBOUND",
            Self::Transfer => "TRANSFER",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "INBOUND" => Some(Self::Inbound),
            "OUTBOUND" => Some(Self::Outbound),
            "TRANSFER" => Some(Self::Transfer),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementStatus {
    #[default]
    Pending,
    Posted,
}

impl MovementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Posted => "POSTED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "POSTED" => Some(Self::Posted),
            _ => None,
        }
    }
}

impl std::fmt::Display for MovementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stock movement line: an item quantity entering, leaving or moving
/// between warehouses. Filterable by status and by direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub warehouse: String,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: MovementStatus,
    #[serde(default)]
    pub reference: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RecordModel for StockMovement {
    const CODE_PREFIX: &'static str = "SM";

    fn kind() -> &'static str {
        "stock_movement"
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
        vec![&self.code, &self.item_name, &self.warehouse, &self.reference]
    }

    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.as_str().to_string()),
            "direction" => Some(self.direction.as_str().to_string()),
            _ => None,
        }
    }

    fn doc_date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn apply_field(&mut self, name: &str, raw: &str) -> bool {
        match name {
            "itemName" => self.item_name = raw.to_string(),
            "warehouse" => self.warehouse = raw.to_string(),
            "direction" => {
                if let Some(direction) = Direction::from_str(raw) {
                    self.direction = direction;
                }
            }
            "quantity" => self.quantity = coerce_f64(raw),
            "date" => self.date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
            "status" => {
                if let Some(status) = MovementStatus::from_str(raw) {
                    self.status = status;
                }
            }
            "reference" => self.reference = raw.to_string(),
            _ => return false,
        }
        true
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if self.item_name.trim().is_empty() {
            return Err(ServiceError::Validation("item name is required".into()));
        }
        if self.warehouse.trim().is_empty() {
            return Err(ServiceError::Validation("warehouse is required".into()));
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

/// Sample dataset for the stock movements page.
pub fn seed() -> Vec<StockMovement> {
    let mut records = vec![
        StockMovement {
            item_name: "Sheet steel 2mm".into(),
            warehouse: "Main".into(),
            direction: Direction::Inbound,
            quantity: 50.0,
            date: NaiveDate::from_ymd_opt(2026, 1, 16),
            status: MovementStatus::Posted,
            reference: "GRN-001".into(),
            ..StockMovement::default()
        },
        StockMovement {
            item_name: "Display stand".into(),
            warehouse: "Main".into(),
            direction: Direction::Outbound,
            quantity: 4.0,
            date: NaiveDate::from_ymd_opt(2026, 1, 22),
            status: MovementStatus::Posted,
            reference: "SO-002".into(),
            ..StockMovement::default()
        },
        StockMovement {
            item_name: "Carton L".into(),
            warehouse: "Annex".into(),
            direction: Direction::Transfer,
            quantity: 100.0,
            date: NaiveDate::from_ymd_opt(2026, 2, 7),
            status: MovementStatus::Pending,
            ..StockMovement::default()
        },
    ];
    for (i, r) in records.iter_mut().enumerate() {
        r.set_identity((i + 1) as u32, bizdesk_core::format_code("SM", (i + 1) as u32));
    }
    records
}

/// A manager over the page's sample dataset.
pub fn manager() -> RecordManager<StockMovement> {
    RecordManager::with_records(seed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_and_status_filter_independently() {
        let mut mgr = manager();
        mgr.set_filter("direction", "OUTBOUND");
        assert_eq!(mgr.visible().len(), 1);

        mgr.set_filter("direction", "All");
        mgr.set_filter("status", "POSTED");
        assert_eq!(mgr.visible().len(), 2);

        mgr.set_filter("direction", "TRANSFER");
        assert!(mgr.visible().is_empty()); // no posted transfers
    }

    #[test]
    fn warehouse_is_mandatory() {
        let mut mgr = manager();
        mgr.start_create().unwrap();
        mgr.set_draft_field("itemName", "Angle bar");
        mgr.set_draft_field("date", "2026-02-21");
        let err = mgr.confirm_save().unwrap_err();
        assert_eq!(err.to_string(), "warehouse is required");
    }

    #[test]
    fn quantity_coerces_bad_input_to_zero() {
        let mut mgr = manager();
        mgr.start_create().unwrap();
        mgr.set_draft_field("itemName", "Angle bar");
        mgr.set_draft_field("warehouse", "Main");
        mgr.set_draft_field("date", "2026-02-21");
        mgr.set_draft_field("quantity", "thirty");
        let saved = mgr.confirm_save().unwrap();
        assert_eq!(saved.quantity, 0.0);
    }
}
