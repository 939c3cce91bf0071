//! Error types for the intake form engine
//!
//! This module defines two failure channels:
//! - `Error`: genuinely fatal problems (a configuration blob that cannot be
//!   parsed at all)
//! - `SchemaIssue`: recoverable schema defects (bad references, cycles,
//!   duplicate identifiers) that the evaluator tolerates and reports so the
//!   caller can log them
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use thiserror::Error;

/// Result type alias for intake operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal error types for the intake form engine
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration blob could not be parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

/// A recoverable defect in the form schema
///
/// Issues are collected while the dependency forest is built and exposed to
/// the caller for logging or configuration-error reporting. They never abort
/// an evaluation: a field with an unknown controller renders as a root, and
/// fields caught in a dependency cycle simply stay invisible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaIssue {
    /// A field references a controlling field that is not in the schema
    #[error("field {field:?} references unknown controlling field {controller:?}")]
    UnknownController {
        /// Identifier of the field carrying the bad reference
        field: String,
        /// The missing controlling-field identifier
        controller: String,
    },

    /// A field participates in a controlling-field cycle
    #[error("field {field:?} is part of a controlling-field cycle")]
    CycleDetected {
        /// Identifier of a field on the cycle
        field: String,
    },

    /// Two schema entries share the same identifier
    #[error("duplicate field id {field:?}")]
    DuplicateId {
        /// The identifier that occurs more than once
        field: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("unexpected end of input".to_string());
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("unexpected end of input"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_issue_display_unknown_controller() {
        let issue = SchemaIssue::UnknownController {
            field: "impact".to_string(),
            controller: "severity".to_string(),
        };
        let msg = issue.to_string();
        assert!(msg.contains("impact"));
        assert!(msg.contains("severity"));
        assert!(msg.contains("unknown controlling field"));
    }

    #[test]
    fn test_issue_display_cycle() {
        let issue = SchemaIssue::CycleDetected {
            field: "a".to_string(),
        };
        assert!(issue.to_string().contains("cycle"));
    }

    #[test]
    fn test_issue_display_duplicate() {
        let issue = SchemaIssue::DuplicateId {
            field: "a".to_string(),
        };
        assert!(issue.to_string().contains("duplicate field id"));
    }
}
