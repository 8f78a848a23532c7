//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every `BookError` is recoverable: the command layer turns it into a reply and
//! the session carries on.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address book operations and command handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field failed validation; the message is shown verbatim
    #[error("{0}")]
    InvalidFormat(#[from] ValidationError),

    /// No record exists under the given name
    #[error("Contact not found")]
    ContactNotFound(String),

    /// The record has no phone equal to the given value
    #[error("Phone number not found")]
    PhoneNotFound(String),

    /// The record exists but has no birthday set
    #[error("Birthday not found")]
    BirthdayNotSet(String),

    /// The command received the wrong number of arguments
    #[error("{}", arity_message(*.expected, *.got))]
    WrongArity { expected: usize, got: usize },
}

fn arity_message(expected: usize, got: usize) -> &'static str {
    if got < expected {
        "Not enough arguments provided"
    } else {
        "Too many arguments provided"
    }
}

impl BookError {
    /// Whether this is one of the lookup failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ContactNotFound(_) | Self::PhoneNotFound(_) | Self::BirthdayNotSet(_)
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::ContactNotFound("alice".to_string());
        assert_eq!(err.to_string(), "Contact not found");

        let err = BookError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Phone number not found");

        let err = BookError::BirthdayNotSet("alice".to_string());
        assert_eq!(err.to_string(), "Birthday not found");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a number"
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err: BookError = ValidationError::InvalidPhone("1".to_string()).into();
        assert_eq!(err.to_string(), "Phone must contain 10 digits");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_arity_variants() {
        let err = BookError::WrongArity { expected: 2, got: 1 };
        assert_eq!(err.to_string(), "Not enough arguments provided");

        let err = BookError::WrongArity { expected: 1, got: 3 };
        assert_eq!(err.to_string(), "Too many arguments provided");
    }

    #[test]
    fn test_not_found_family() {
        assert!(BookError::ContactNotFound("x".into()).is_not_found());
        assert!(BookError::PhoneNotFound("x".into()).is_not_found());
        assert!(BookError::BirthdayNotSet("x".into()).is_not_found());
        assert!(!BookError::WrongArity { expected: 1, got: 0 }.is_not_found());
    }
}
