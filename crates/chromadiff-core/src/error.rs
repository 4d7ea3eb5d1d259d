//! Error types for chromadiff

use thiserror::Error;

/// Result type for chromadiff operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chromadiff operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input could not be interpreted as a color
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A textual name did not match any known variant
    #[error("Unknown {kind}: {name:?}")]
    UnknownName { kind: &'static str, name: String },
}

impl Error {
    pub(crate) fn unknown(kind: &'static str, name: &str) -> Self {
        Self::UnknownName {
            kind,
            name: name.to_string(),
        }
    }
}
