//! FilterSet — pure, order-stable view computation.
//!
//! A record passes iff it passes the logical AND of every active filter.
//! Inactive filters (empty search, `"All"` sentinel, absent date bound)
//! pass vacuously.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::RecordModel;

/// The sentinel the UI sends for "no categorical filter".
fn is_all_sentinel(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("all")
}

/// Current filter configuration for one list page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    /// Free-text search, matched case-insensitively as a substring
    /// against the record's `search_text()` fields.
    pub search: String,
    /// Exact-match categorical filters, keyed by filter name
    /// (`"status"`, `"type"`, ...).
    pub exact: BTreeMap<String, String>,
    /// Inclusive lower date bound; absent means unconstrained.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound; absent means unconstrained.
    pub date_to: Option<NaiveDate>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one filter input by name, the way the UI raises them:
    /// `"search"`, `"dateFrom"`, `"dateTo"` are recognized directly;
    /// everything else is an exact-match filter. Setting a categorical
    /// filter to the `"All"` sentinel (or empty) deactivates it; an
    /// unparseable date clears that bound.
    pub fn set(&mut self, name: &str, raw: &str) {
        match name {
            "search" => self.search = raw.to_string(),
            "dateFrom" => self.date_from = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
            "dateTo" => self.date_to = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
            _ => {
                if is_all_sentinel(raw) {
                    self.exact.remove(name);
                } else {
                    self.exact.insert(name.to_string(), raw.to_string());
                }
            }
        }
    }

    /// Whether any filter is currently active.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || !self.exact.is_empty()
            || self.date_from.is_some()
            || self.date_to.is_some()
    }

    /// Deactivate everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether one record passes the whole filter set.
    pub fn matches<T: RecordModel>(&self, record: &T) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = record
                .search_text()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        for (name, want) in &self.exact {
            match record.filter_value(name) {
                Some(have) if have == *want => {}
                _ => return false,
            }
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            // A record with no document date cannot satisfy a date filter.
            let Some(date) = record.doc_date() else {
                return false;
            };
            if let Some(from) = self.date_from
                && date < from
            {
                return false;
            }
            if let Some(to) = self.date_to
                && date > to
            {
                return false;
            }
        }

        true
    }

    /// Compute the visible view: a subset of `records` preserving the
    /// original relative order. Never re-sorts.
    pub fn apply<'a, T: RecordModel>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testmodel::{TestDoc, doc};

    fn dataset() -> Vec<TestDoc> {
        let mut records = vec![
            doc("Acme Traders", "2026-01-05", "PENDING"),
            doc("Globex", "2026-01-12", "COMPLETED"),
            doc("Initech", "2026-02-01", "PENDING"),
            doc("acme supplies", "2026-02-14", "COMPLETED"),
        ];
        for (i, r) in records.iter_mut().enumerate() {
            r.id = (i + 1) as u32;
            r.code = format!("DOC-{:03}", i + 1);
        }
        records
    }

    #[test]
    fn empty_filter_passes_everything() {
        let records = dataset();
        let filters = FilterSet::new();
        assert!(!filters.is_active());
        assert_eq!(filters.apply(&records).len(), 4);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = dataset();
        let mut filters = FilterSet::new();
        filters.set("search", "ACME");

        let view = filters.apply(&records);
        let names: Vec<&str> = view.iter().map(|r| r.customer.as_str()).collect();
        assert_eq!(names, ["Acme Traders", "acme supplies"]);
    }

    #[test]
    fn search_matches_code_field() {
        let records = dataset();
        let mut filters = FilterSet::new();
        filters.set("search", "doc-003");
        let view = filters.apply(&records);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].customer, "Initech");
    }

    #[test]
    fn status_filter_with_all_sentinel() {
        let records = dataset();
        let mut filters = FilterSet::new();

        filters.set("status", "COMPLETED");
        assert_eq!(filters.apply(&records).len(), 2);

        filters.set("status", "All");
        assert!(!filters.is_active());
        assert_eq!(filters.apply(&records).len(), 4);

        filters.set("status", "all");
        assert_eq!(filters.apply(&records).len(), 4);
    }

    #[test]
    fn unknown_categorical_field_fails_the_record() {
        let records = dataset();
        let mut filters = FilterSet::new();
        filters.set("warehouse", "Main");
        assert!(filters.apply(&records).is_empty());
    }

    #[test]
    fn date_range_is_inclusive_and_one_sided() {
        let records = dataset();
        let mut filters = FilterSet::new();

        filters.set("dateFrom", "2026-01-12");
        let view = filters.apply(&records);
        assert_eq!(view.len(), 3); // inclusive lower bound

        filters.set("dateTo", "2026-02-01");
        let view = filters.apply(&records);
        assert_eq!(view.len(), 2);

        filters.set("dateFrom", ""); // cleared — upper bound only
        let view = filters.apply(&records);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn record_without_date_fails_active_date_filter() {
        let mut records = dataset();
        records[0].date = None;
        let mut filters = FilterSet::new();
        filters.set("dateFrom", "2026-01-01");
        let view = filters.apply(&records);
        assert!(view.iter().all(|r| r.customer != "Acme Traders"));
    }

    #[test]
    fn filters_and_together_preserving_order() {
        let records = dataset();
        let mut filters = FilterSet::new();
        filters.set("search", "e");
        filters.set("status", "COMPLETED");
        filters.set("dateFrom", "2026-01-01");
        filters.set("dateTo", "2026-12-31");

        let view = filters.apply(&records);
        let ids: Vec<u32> = view.iter().map(|r| r.id).collect();
        // Subset of the input, original relative order.
        assert_eq!(ids, [2, 4]);
    }

    #[test]
    fn clear_resets_to_vacuous() {
        let mut filters = FilterSet::new();
        filters.set("search", "x");
        filters.set("status", "PENDING");
        filters.set("dateFrom", "2026-01-01");
        filters.clear();
        assert_eq!(filters, FilterSet::default());
    }
}
