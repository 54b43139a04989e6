//! RecordStore — the canonical ordered collection for one record kind.
//!
//! Owns the records and identity generation. Insertion order is display
//! order; filtering (see `filter`) never re-sorts.

use bizdesk_core::{ServiceError, format_code};

use crate::model::RecordModel;

/// In-memory store for one record kind.
///
/// Identity policy: `next_id` is a monotone high-water counter, seeded at
/// `max(id) + 1` over the initial dataset (1 when empty) and only ever
/// incremented. A delete-then-add sequence therefore never reuses any
/// previously issued id — including a deleted maximum.
#[derive(Debug, Clone)]
pub struct RecordStore<T: RecordModel> {
    records: Vec<T>,
    next_id: u32,
}

impl<T: RecordModel> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RecordModel> RecordStore<T> {
    /// Create an empty store. The first id issued will be 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store over an existing dataset (sample/seed data that
    /// already carries ids and codes).
    pub fn with_records(records: Vec<T>) -> Self {
        let next_id = records.iter().map(T::id).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    /// Insert a draft as a new record.
    ///
    /// Assigns the next id, derives the code from the kind prefix, runs
    /// the `before_create` hook and appends to the end of the collection.
    pub fn add(&mut self, mut draft: T) -> &T {
        let id = self.next_id;
        self.next_id += 1;

        draft.set_identity(id, format_code(T::CODE_PREFIX, id));
        draft.before_create();

        tracing::debug!(kind = T::kind(), id, code = draft.code(), "record created");
        self.records.push(draft);
        &self.records[self.records.len() - 1]
    }

    /// Replace all fields of the record matching `id` with `patch`.
    ///
    /// Full overwrite — line items are wholesale replaced, not merged.
    /// The stored identity (`id`/`code`) is reasserted onto the patch;
    /// identity is immutable no matter what the patch carries.
    pub fn update(&mut self, id: u32, mut patch: T) -> Result<&T, ServiceError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| ServiceError::NotFound(format!("{} {} not found", T::kind(), id)))?;

        let code = self.records[pos].code().to_string();
        patch.set_identity(id, code);
        patch.before_update();

        tracing::debug!(kind = T::kind(), id, "record updated");
        self.records[pos] = patch;
        Ok(&self.records[pos])
    }

    /// Remove the record matching `id`.
    ///
    /// Removing a missing id is an error, not a silent no-op — the store
    /// is also the seam a future remote backend plugs into, and there a
    /// dangling delete must surface.
    pub fn remove(&mut self, id: u32) -> Result<(), ServiceError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| ServiceError::NotFound(format!("{} {} not found", T::kind(), id)))?;

        self.records.remove(pos);
        tracing::debug!(kind = T::kind(), id, "record removed");
        Ok(())
    }

    /// Get a record by id. Returns None if not found.
    pub fn get(&self, id: u32) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Get a record or return a NotFound error.
    pub fn get_or_err(&self, id: u32) -> Result<&T, ServiceError> {
        self.get(id)
            .ok_or_else(|| ServiceError::NotFound(format!("{} {} not found", T::kind(), id)))
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // -----------------------------------------------------------------------
    // Persistence seam
    // -----------------------------------------------------------------------
    //
    // The UI layer keeps everything in memory, but the store is designed as
    // the substitution point for a real backend. The JSON snapshot is that
    // seam: a round-trip restores both the collection and the id high-water
    // mark.

    /// Serialize the full collection to JSON.
    pub fn export_json(&self) -> Result<String, ServiceError> {
        serde_json::to_string(&self.records)
            .map_err(|e| ServiceError::Internal(format!("serialize {}: {e}", T::kind())))
    }

    /// Rebuild a store from a JSON snapshot produced by `export_json`.
    pub fn import_json(json: &str) -> Result<Self, ServiceError> {
        let records: Vec<T> = serde_json::from_str(json)
            .map_err(|e| ServiceError::Internal(format!("deserialize {}: {e}", T::kind())))?;
        Ok(Self::with_records(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testmodel::{TestDoc, doc};

    #[test]
    fn sequential_ids_and_codes() {
        let mut store = RecordStore::<TestDoc>::new();
        for i in 0..3 {
            let rec = store.add(doc(&format!("Customer {i}"), "2026-01-10", "PENDING"));
            assert_eq!(rec.id, i + 1);
        }
        let codes: Vec<&str> = store.records().iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["DOC-001", "DOC-002", "DOC-003"]);
    }

    #[test]
    fn update_replaces_fields_but_not_identity() {
        let mut store = RecordStore::<TestDoc>::new();
        store.add(doc("Acme", "2026-01-10", "PENDING"));

        let mut patch = doc("Acme Ltd", "2026-02-01", "COMPLETED");
        patch.id = 999;
        patch.code = "HACKED".into();

        let updated = store.update(1, patch).unwrap();
        assert_eq!(updated.customer, "Acme Ltd");
        assert_eq!(updated.status, "COMPLETED");
        assert_eq!(updated.id, 1);
        assert_eq!(updated.code, "DOC-001");
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = RecordStore::<TestDoc>::new();
        let err = store.update(7, doc("X", "2026-01-01", "PENDING")).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn remove_then_get_is_absent() {
        let mut store = RecordStore::<TestDoc>::new();
        store.add(doc("A", "2026-01-01", "PENDING"));
        store.add(doc("B", "2026-01-02", "PENDING"));

        store.remove(1).unwrap();
        assert!(store.get(1).is_none());
        assert_eq!(store.len(), 1);

        let err = store.remove(1).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn deleted_ids_are_never_reissued() {
        let mut store = RecordStore::<TestDoc>::new();
        store.add(doc("A", "2026-01-01", "PENDING"));
        store.add(doc("B", "2026-01-02", "PENDING"));
        store.add(doc("C", "2026-01-03", "PENDING"));

        // Delete the maximum — the naive max(id)+1 policy would hand id 3
        // right back out.
        store.remove(3).unwrap();
        let rec = store.add(doc("D", "2026-01-04", "PENDING"));
        assert_eq!(rec.id, 4);

        store.remove(2).unwrap();
        let rec = store.add(doc("E", "2026-01-05", "PENDING"));
        assert_eq!(rec.id, 5);
    }

    #[test]
    fn with_records_seeds_high_water_mark() {
        let mut seeded = vec![doc("A", "2026-01-01", "PENDING"), doc("B", "2026-01-02", "PENDING")];
        seeded[0].id = 1;
        seeded[0].code = "DOC-001".into();
        seeded[1].id = 5;
        seeded[1].code = "DOC-005".into();

        let mut store = RecordStore::with_records(seeded);
        let rec = store.add(doc("C", "2026-01-03", "PENDING"));
        assert_eq!(rec.id, 6);
        assert_eq!(rec.code, "DOC-006");
    }

    #[test]
    fn json_snapshot_roundtrip() {
        let mut store = RecordStore::<TestDoc>::new();
        store.add(doc("Acme", "2026-01-10", "PENDING"));
        store.add(doc("Globex", "2026-01-11", "COMPLETED"));

        let json = store.export_json().unwrap();
        let mut restored = RecordStore::<TestDoc>::import_json(&json).unwrap();
        assert_eq!(restored.records(), store.records());

        // High-water mark survives the round-trip.
        let rec = restored.add(doc("Initech", "2026-01-12", "PENDING"));
        assert_eq!(rec.id, 3);
    }

    #[test]
    fn import_rejects_garbage() {
        let err = RecordStore::<TestDoc>::import_json("not json").unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL");
    }
}
