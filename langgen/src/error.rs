//! All error types for the langgen crate.
//!
//! These are returned from all fallible operations (loading, validation,
//! rendering, file output).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing key `{key}` in `{section}`")]
    MissingKey { section: &'static str, key: String },

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("invalid data: {0}")]
    DataMismatch(String),
}

impl Error {
    /// Creates a schema error for a canonical key absent from a sub-mapping.
    pub fn missing_key(section: &'static str, key: impl Into<String>) -> Self {
        Error::MissingKey {
            section,
            key: key.into(),
        }
    }

    /// Creates an error for a document that does not have the expected shape.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Error::InvalidDocument(message.into())
    }

    /// Creates an error for a value of an unexpected type.
    pub fn data_mismatch(message: impl Into<String>) -> Self {
        Error::DataMismatch(message.into())
    }
}
