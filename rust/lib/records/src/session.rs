//! Form session state.
//!
//! One tagged union instead of a pile of booleans: it is structurally
//! impossible for the create and edit modals to be open at once, or for
//! a delete confirmation to carry a draft.

/// Lifecycle state of the modal form for one list page.
///
/// ```text
/// Closed → Creating(draft)        ("add" action)
/// Closed → Editing{id, draft}     ("edit" action; draft = copy of record)
/// Closed → ConfirmingDelete(id)   ("delete" action)
/// any    → Closed                 (cancel, or successful commit)
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session<T> {
    #[default]
    Closed,
    Creating(T),
    Editing {
        id: u32,
        draft: T,
    },
    ConfirmingDelete(u32),
}

impl<T> Session<T> {
    pub fn is_closed(&self) -> bool {
        matches!(self, Session::Closed)
    }

    /// The active draft, if this is a Creating or Editing session.
    pub fn draft(&self) -> Option<&T> {
        match self {
            Session::Creating(draft) | Session::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut T> {
        match self {
            Session::Creating(draft) | Session::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// The record id this session targets (Editing / ConfirmingDelete).
    pub fn target_id(&self) -> Option<u32> {
        match self {
            Session::Editing { id, .. } | Session::ConfirmingDelete(id) => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_per_state() {
        let closed: Session<String> = Session::Closed;
        assert!(closed.is_closed());
        assert!(closed.draft().is_none());
        assert!(closed.target_id().is_none());

        let creating = Session::Creating("draft".to_string());
        assert_eq!(creating.draft().map(String::as_str), Some("draft"));
        assert!(creating.target_id().is_none());

        let editing = Session::Editing {
            id: 3,
            draft: "copy".to_string(),
        };
        assert_eq!(editing.draft().map(String::as_str), Some("copy"));
        assert_eq!(editing.target_id(), Some(3));

        let deleting: Session<String> = Session::ConfirmingDelete(9);
        assert!(deleting.draft().is_none());
        assert_eq!(deleting.target_id(), Some(9));
    }
}
