//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // State errors
    SessionNotInitialized,
    MissingPrerequisite,

    // Infrastructure errors
    PersistenceError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::SessionNotInitialized => "SESSION_NOT_INITIALIZED",
            ErrorCode::MissingPrerequisite => "MISSING_PREREQUISITE",
            ErrorCode::PersistenceError => "PERSISTENCE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// Gating denials are deliberately NOT errors; `can_advance_to` returns a
/// plain boolean. `DomainError` is reserved for operations that cannot
/// proceed at all, such as generating an artifact whose prerequisite is
/// missing.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a missing-prerequisite error for artifact generation.
    pub fn missing_prerequisite(what: impl Into<String>) -> Self {
        let what = what.into();
        Self::new(
            ErrorCode::MissingPrerequisite,
            format!("Unable to generate: {} is missing", what),
        )
        .with_detail("prerequisite", what)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::SessionNotInitialized, "No session");
        assert_eq!(format!("{}", err), "[SESSION_NOT_INITIALIZED] No session");
    }

    #[test]
    fn missing_prerequisite_records_detail() {
        let err = DomainError::missing_prerequisite("problem brief");
        assert_eq!(err.code, ErrorCode::MissingPrerequisite);
        assert_eq!(
            err.details.get("prerequisite"),
            Some(&"problem brief".to_string())
        );
        assert!(err.message.contains("Unable to generate"));
    }

    #[test]
    fn with_detail_accumulates() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "title")
            .with_detail("reason", "empty");
        assert_eq!(err.details.len(), 2);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(
            format!("{}", ErrorCode::MissingPrerequisite),
            "MISSING_PREREQUISITE"
        );
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
