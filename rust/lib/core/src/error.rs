use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Callers match on these —
// never on the human-readable message string.

/// Stable error code constants.
///
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const CONFLICT: &str = "CONFLICT";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const INTERNAL: &str = "INTERNAL";
}

// ── ServiceError ────────────────────────────────────────────────────

/// Unified error type used across all modules.
///
/// Every record operation is a synchronous in-memory mutation, so the
/// taxonomy is small: a referenced record is missing, an operation is
/// illegal in the current session state, a draft fails validation, or
/// something unexpected broke (serialization at the persistence seam).
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Operation conflicts with the current state (e.g. a form session
    /// is already open).
    #[error("{0}")]
    Conflict(String),

    /// Draft data is invalid — a mandatory field is missing or empty.
    #[error("{0}")]
    Validation(String),

    /// Unexpected internal error.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => error_code::NOT_FOUND,
            ServiceError::Conflict(_) => error_code::CONFLICT,
            ServiceError::Validation(_) => error_code::VALIDATION_FAILED,
            ServiceError::Internal(_) => error_code::INTERNAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_mapping() {
        assert_eq!(ServiceError::NotFound("x".into()).error_code(), "NOT_FOUND");
        assert_eq!(ServiceError::Conflict("x".into()).error_code(), "CONFLICT");
        assert_eq!(
            ServiceError::Validation("x".into()).error_code(),
            "VALIDATION_FAILED"
        );
        assert_eq!(ServiceError::Internal("x".into()).error_code(), "INTERNAL");
    }

    #[test]
    fn error_display_is_just_message() {
        assert_eq!(
            ServiceError::NotFound("order 123 not found".into()).to_string(),
            "order 123 not found"
        );
        assert_eq!(
            ServiceError::Validation("customer is required".into()).to_string(),
            "customer is required"
        );
    }
}
