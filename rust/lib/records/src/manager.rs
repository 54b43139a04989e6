//! RecordManager — the facade one list page talks to.
//!
//! Owns the store, the filter configuration and the form session; every
//! UI event maps onto one method here. All mutations are synchronous and
//! visible to the next `visible()` call.

use bizdesk_core::ServiceError;

use crate::filter::FilterSet;
use crate::model::{HasLineItems, RecordModel};
use crate::session::Session;
use crate::store::RecordStore;

pub struct RecordManager<T: RecordModel> {
    store: RecordStore<T>,
    session: Session<T>,
    filters: FilterSet,
}

impl<T: RecordModel> Default for RecordManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RecordModel> RecordManager<T> {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            session: Session::Closed,
            filters: FilterSet::new(),
        }
    }

    /// Start over a seeded dataset (each page seeds its own sample data).
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            store: RecordStore::with_records(records),
            session: Session::Closed,
            filters: FilterSet::new(),
        }
    }

    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    // -----------------------------------------------------------------------
    // Filtering (read-only view)
    // -----------------------------------------------------------------------

    /// Route one filter input by name (`"search"`, `"dateFrom"`,
    /// `"dateTo"`, or a categorical filter name).
    pub fn set_filter(&mut self, name: &str, raw: &str) {
        self.filters.set(name, raw);
    }

    /// The currently visible records: the stored collection run through
    /// the filter set, insertion order preserved.
    pub fn visible(&self) -> Vec<&T> {
        self.filters.apply(self.store.records())
    }

    // -----------------------------------------------------------------------
    // Session transitions
    // -----------------------------------------------------------------------

    fn ensure_closed(&self) -> Result<(), ServiceError> {
        if self.session.is_closed() {
            Ok(())
        } else {
            Err(ServiceError::Conflict(format!(
                "a {} form session is already open",
                T::kind()
            )))
        }
    }

    /// Open the create form with the kind's template draft.
    pub fn start_create(&mut self) -> Result<(), ServiceError> {
        self.ensure_closed()?;
        self.session = Session::Creating(T::default());
        Ok(())
    }

    /// Open the edit form over a copy of the stored record. The copy is
    /// disconnected from the store until the save is confirmed.
    pub fn start_edit(&mut self, id: u32) -> Result<(), ServiceError> {
        self.ensure_closed()?;
        let draft = self.store.get_or_err(id)?.clone();
        self.session = Session::Editing { id, draft };
        Ok(())
    }

    /// Open the delete confirmation for an existing record.
    pub fn start_delete(&mut self, id: u32) -> Result<(), ServiceError> {
        self.ensure_closed()?;
        self.store.get_or_err(id)?;
        self.session = Session::ConfirmingDelete(id);
        Ok(())
    }

    /// Discard the draft and close whichever session is active. Never
    /// touches the store.
    pub fn cancel(&mut self) {
        self.session = Session::Closed;
    }

    // -----------------------------------------------------------------------
    // Draft mutation
    // -----------------------------------------------------------------------

    /// Route one raw form input into the active draft. Without an active
    /// draft session this is a no-op — the UI cannot raise the event then.
    pub fn set_draft_field(&mut self, name: &str, raw: &str) {
        if let Some(draft) = self.session.draft_mut()
            && !draft.apply_field(name, raw)
        {
            tracing::debug!(kind = T::kind(), field = name, "ignored unknown draft field");
        }
    }

    // -----------------------------------------------------------------------
    // Commit
    // -----------------------------------------------------------------------

    /// Validate and commit the active draft.
    ///
    /// A validation failure surfaces as an error and leaves the session
    /// open with the draft intact, so the form can show the message and
    /// let the user fix the field. On success the session closes and the
    /// committed record is returned.
    pub fn confirm_save(&mut self) -> Result<&T, ServiceError> {
        match std::mem::take(&mut self.session) {
            Session::Creating(draft) => {
                if let Err(err) = draft.validate() {
                    tracing::warn!(kind = T::kind(), %err, "create rejected");
                    self.session = Session::Creating(draft);
                    return Err(err);
                }
                Ok(self.store.add(draft))
            }
            Session::Editing { id, draft } => {
                if let Err(err) = draft.validate() {
                    tracing::warn!(kind = T::kind(), id, %err, "edit rejected");
                    self.session = Session::Editing { id, draft };
                    return Err(err);
                }
                self.store.update(id, draft)
            }
            other => {
                self.session = other;
                Err(ServiceError::Conflict(format!(
                    "no {} draft session is active",
                    T::kind()
                )))
            }
        }
    }

    /// Perform the confirmed deletion. Only legal in `ConfirmingDelete`;
    /// no further validation beyond the id lookup.
    pub fn confirm_delete(&mut self) -> Result<(), ServiceError> {
        match self.session {
            Session::ConfirmingDelete(id) => {
                self.session = Session::Closed;
                self.store.remove(id)
            }
            _ => Err(ServiceError::Conflict(format!(
                "no {} delete confirmation is active",
                T::kind()
            ))),
        }
    }
}

// Line-item drafting, only for document kinds that carry items.
impl<T: RecordModel + HasLineItems> RecordManager<T> {
    /// Append an empty line item to the active draft.
    pub fn add_draft_item(&mut self) {
        if let Some(draft) = self.session.draft_mut() {
            draft.add_item();
        }
    }

    /// Remove a line item from the active draft.
    pub fn remove_draft_item(&mut self, index: usize) {
        if let Some(draft) = self.session.draft_mut() {
            draft.remove_item(index);
        }
    }

    /// Route one raw form input into a line item of the active draft.
    pub fn set_draft_item(&mut self, index: usize, field: &str, raw: &str) {
        if let Some(draft) = self.session.draft_mut()
            && !draft.set_item(index, field, raw)
        {
            tracing::debug!(kind = T::kind(), index, field, "ignored line item input");
        }
    }
}
