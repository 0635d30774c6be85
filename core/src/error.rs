//! Error types for the Wortschatz client.
//!
//! # Design
//! One error type covers every failure the core can report, split by who can
//! act on it. `ContractViolation` and `UnknownOperation` are programming
//! errors on the caller's side, `UserError` is a correctable argument
//! problem, `NotImplemented` marks capabilities that do not exist for this
//! client, and `External` collects everything that went wrong on the far side
//! of the transport. An empty answer from the service is not an error at all;
//! it is `Ok(None)`.

use thiserror::Error;

use crate::transport::TransportError;

/// Result alias used throughout the crate.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by `WortschatzClient` and `Wortschatz`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Wrong number of arguments for the operation's signature.
    #[error("{operation} expects {}, got {actual}", arity_range(.min, .max))]
    ContractViolation {
        operation: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    /// Right number of arguments, wrong type at `position` (1-based).
    #[error("{operation}: argument {position} must be {expected}, got {value}")]
    UserError {
        operation: &'static str,
        position: usize,
        value: String,
        expected: &'static str,
    },

    /// The operation name is not in the catalogue.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The operation exists in the catalogue but is permanently disabled.
    #[error("{operation} is not available for this client")]
    NotImplemented { operation: &'static str },

    /// Any failure originating beyond the core: transport, HTTP status,
    /// SOAP fault or an envelope that could not be read.
    #[error("external service error: {class}: {message}")]
    External { class: String, message: String },

    /// The request envelope could not be written.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    pub(crate) fn external(class: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::External {
            class: class.into(),
            message: message.into(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        ApiError::External {
            class: e.class,
            message: e.message,
        }
    }
}

fn arity_range(min: &usize, max: &usize) -> String {
    match (*min, *max) {
        (1, 1) => "1 argument".to_string(),
        (min, max) if min == max => format!("{min} arguments"),
        (min, max) => format!("{min} to {max} arguments"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_violation_message_names_range() {
        let err = ApiError::ContractViolation {
            operation: "synonyms",
            min: 1,
            max: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "synonyms expects 1 to 2 arguments, got 3");
    }

    #[test]
    fn contract_violation_message_single_argument() {
        let err = ApiError::ContractViolation {
            operation: "baseform",
            min: 1,
            max: 1,
            actual: 0,
        };
        assert_eq!(err.to_string(), "baseform expects 1 argument, got 0");
    }

    #[test]
    fn user_error_message_names_operation_value_and_type() {
        let err = ApiError::UserError {
            operation: "frequencies",
            position: 1,
            value: "1 (integer)".to_string(),
            expected: "text",
        };
        let msg = err.to_string();
        assert!(msg.contains("frequencies"));
        assert!(msg.contains("1 (integer)"));
        assert!(msg.contains("text"));
    }

    #[test]
    fn transport_error_becomes_external() {
        let err: ApiError = TransportError::new("Timeout", "timed out after 30s").into();
        match err {
            ApiError::External { class, message } => {
                assert_eq!(class, "Timeout");
                assert_eq!(message, "timed out after 30s");
            }
            other => panic!("expected External, got {other:?}"),
        }
    }
}
