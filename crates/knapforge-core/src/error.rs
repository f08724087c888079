//! Error types for KnapForge

use thiserror::Error;

/// Main error type for KnapForge operations
#[derive(Debug, Error)]
pub enum KnapForgeError {
    /// The item database could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited reader failed on a record
    #[error("Delimited record error: {0}")]
    Csv(#[from] csv::Error),

    /// A record had the wrong number of fields
    #[error("Invalid field count at line {line}; want {expected} but got {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// An item failed validation
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Too many items for exhaustive enumeration
    #[error("Exhaustive search supports at most {max} items, got {count}")]
    TooManyItems { count: usize, max: usize },

    /// Error in selection configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for KnapForge operations
pub type Result<T> = std::result::Result<T, KnapForgeError>;
