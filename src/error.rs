//! Error types for lgtm.
//!
//! Uses thiserror for derive macros. Every load failure is terminal for that
//! load; callers decide whether to abort or fall back to a previous config.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for lgtm operations.
#[derive(Error, Debug)]
pub enum LgtmError {
    /// A config or deployment document is not valid UTF-8 TOML.
    #[error("failed to decode {document}: {message}")]
    DecodeError { document: String, message: String },

    /// The effective approval pattern is not a valid regular expression.
    #[error("invalid approval pattern '{pattern}': {message}")]
    PatternError { pattern: String, message: String },

    /// A process default setting could not be parsed.
    #[error("invalid value '{value}' for {name}")]
    InvalidDefault { name: String, value: String },

    /// User provided invalid arguments or input could not be read.
    #[error("{0}")]
    UserError(String),
}

impl LgtmError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LgtmError::DecodeError { .. } => exit_codes::DECODE_FAILURE,
            LgtmError::PatternError { .. } => exit_codes::PATTERN_FAILURE,
            LgtmError::InvalidDefault { .. } => exit_codes::USER_ERROR,
            LgtmError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for lgtm operations.
pub type Result<T> = std::result::Result<T, LgtmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_has_correct_exit_code() {
        let err = LgtmError::DecodeError {
            document: ".lgtm".to_string(),
            message: "expected `=`".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::DECODE_FAILURE);
    }

    #[test]
    fn pattern_error_has_correct_exit_code() {
        let err = LgtmError::PatternError {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::PATTERN_FAILURE);
    }

    #[test]
    fn invalid_default_and_user_error_are_user_errors() {
        let err = LgtmError::InvalidDefault {
            name: "LGTM_APPROVALS".to_string(),
            value: "two".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);

        let err = LgtmError::UserError("missing file".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = LgtmError::DecodeError {
            document: "DEPLOYMENTS".to_string(),
            message: "bad table".to_string(),
        };
        assert_eq!(err.to_string(), "failed to decode DEPLOYMENTS: bad table");

        let err = LgtmError::InvalidDefault {
            name: "LGTM_SELF_APPROVAL_OFF".to_string(),
            value: "maybe".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value 'maybe' for LGTM_SELF_APPROVAL_OFF"
        );
    }
}
