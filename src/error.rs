//! Error types for the eset library.
//!
//! Only the producer-facing construction paths can fail. Reading an
//! [`ExpansionSet`](crate::expansion::ExpansionSet) or stepping a cursor never
//! returns an error: misuse there is a caller contract violation, documented on
//! the individual methods.
//!
//! # Examples
//!
//! ```
//! use eset::error::{EsetError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(EsetError::invalid_config("max_terms out of range"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for eset operations.
#[derive(Error, Debug)]
pub enum EsetError {
    /// Invalid configuration values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The producer handed over terms that break the ordering or bound contract.
    #[error("Producer contract violated: {0}")]
    ProducerContract(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with EsetError.
pub type Result<T> = std::result::Result<T, EsetError>;

impl EsetError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        EsetError::InvalidConfig(msg.into())
    }

    /// Create a new producer contract error.
    pub fn producer_contract<S: Into<String>>(msg: S) -> Self {
        EsetError::ProducerContract(msg.into())
    }
}
