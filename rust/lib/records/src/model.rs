//! RecordModel trait — per-kind configuration for the generic manager.
//!
//! A model impls `RecordModel` to declare its code prefix, searchable
//! fields, categorical filter fields, date key, form-field routing and
//! validation. `RecordStore<T>` / `RecordManager<T>` provide the actual
//! CRUD and session machinery on top.

use bizdesk_core::{ServiceError, coerce_f64};
use chrono::NaiveDate;
use serde::{Serialize, de::DeserializeOwned};

use crate::items::{LineItem, TotalFormula};

/// Trait implemented by record kinds managed by the generic record manager.
///
/// `Default` is the kind's create-form template.
pub trait RecordModel:
    Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Code prefix: `"SO"` → codes `SO-001`, `SO-002`, ...
    const CODE_PREFIX: &'static str;

    /// Kind name, used for logging and error messages.
    fn kind() -> &'static str;

    /// Store-assigned integer id. 0 means "not yet stored" (a draft).
    fn id(&self) -> u32;

    /// Store-assigned human-readable code. Immutable after creation.
    fn code(&self) -> &str;

    /// Assign identity. Called only by the store, at creation and to
    /// reassert identity on update.
    fn set_identity(&mut self, id: u32, code: String);

    /// String fields matched by the free-text search filter.
    fn search_text(&self) -> Vec<&str>;

    /// Current value of a categorical filter field (`"status"`, `"type"`,
    /// ...), or `None` if the kind has no such field.
    fn filter_value(&self, name: &str) -> Option<String>;

    /// The document date used by the date-range filter, if any.
    fn doc_date(&self) -> Option<NaiveDate> {
        None
    }

    /// Route one raw form input into the draft. Numeric fields coerce
    /// invalid input to 0 and never fail; returns `false` only for an
    /// unknown field name.
    fn apply_field(&mut self, name: &str, raw: &str) -> bool;

    /// Check the kind's mandatory fields before a save is committed.
    fn validate(&self) -> Result<(), ServiceError>;

    /// Called before a new record is inserted. Use for timestamps.
    fn before_create(&mut self) {}

    /// Called before an existing record is replaced.
    fn before_update(&mut self) {}
}

/// Implemented by document kinds carrying line items.
///
/// Gives the draft its item-editing operations and the derived total.
pub trait HasLineItems {
    /// Total formula for this kind.
    const FORMULA: TotalFormula;

    fn items(&self) -> &[LineItem];
    fn items_mut(&mut self) -> &mut Vec<LineItem>;

    /// Document-level discount. Kinds without one keep the default 0.
    fn discount(&self) -> f64 {
        0.0
    }

    /// Document-level tax. Kinds without one keep the default 0.
    fn tax(&self) -> f64 {
        0.0
    }

    /// Derived total, computed at read time — never stored.
    fn total(&self) -> f64 {
        Self::FORMULA.total(self.items(), self.discount(), self.tax())
    }

    /// Append an empty line for the form to fill in.
    fn add_item(&mut self) {
        self.items_mut().push(LineItem::default());
    }

    /// Remove a line; out-of-range indexes are ignored.
    fn remove_item(&mut self, index: usize) {
        let items = self.items_mut();
        if index < items.len() {
            items.remove(index);
        }
    }

    /// Route one raw form input into a line item. Returns `false` for an
    /// out-of-range index or unknown field name.
    fn set_item(&mut self, index: usize, field: &str, raw: &str) -> bool {
        let Some(item) = self.items_mut().get_mut(index) else {
            return false;
        };
        match field {
            "description" => item.description = raw.to_string(),
            "quantity" => item.quantity = coerce_f64(raw),
            "unitPrice" => item.unit_price = coerce_f64(raw),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testmodel::TestDoc;

    #[test]
    fn set_item_routes_fields_with_coercion() {
        let mut doc = TestDoc::default();
        doc.add_item();

        assert!(doc.set_item(0, "description", "Widget"));
        assert!(doc.set_item(0, "quantity", "2"));
        assert!(doc.set_item(0, "unitPrice", "2000"));
        assert_eq!(doc.items()[0], LineItem::new("Widget", 2.0, 2000.0));

        // Non-numeric input is treated as 0, never an error.
        assert!(doc.set_item(0, "quantity", "two"));
        assert_eq!(doc.items()[0].quantity, 0.0);

        assert!(!doc.set_item(0, "color", "red"));
        assert!(!doc.set_item(5, "quantity", "1"));
    }

    #[test]
    fn remove_item_ignores_out_of_range() {
        let mut doc = TestDoc::default();
        doc.add_item();
        doc.remove_item(9);
        assert_eq!(doc.items().len(), 1);
        doc.remove_item(0);
        assert!(doc.items().is_empty());
        // An empty item list stays legal; the document just totals to 0.
        assert_eq!(doc.total(), 0.0);
    }
}
