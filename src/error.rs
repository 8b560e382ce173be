//! Error types for the contact manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::models::ContactField;
use thiserror::Error;

/// Errors raised when adding a contact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A required field was absent or blank
    #[error("Missing required field: {0}")]
    MissingRequiredField(ContactField),
}

/// Errors that can occur while importing contacts from a CSV file.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file could not be opened or parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row failed contact validation
    #[error("Invalid record at row {row}: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: ContactError,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised by the test-execution harness.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Argument file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Inline or file CSV arguments could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An argument row carried no values
    #[error("Argument row {0} is empty")]
    EmptyRow(usize),

    /// A repeated test must run at least once
    #[error("Repetition count must be at least 1, got {0}")]
    InvalidRepetitionCount(u32),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ImportError
pub type ImportResult<T> = Result<T, ImportError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with HarnessError
pub type HarnessResult<T> = Result<T, HarnessError>;
