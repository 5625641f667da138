//! Error types for loading resolved schemas.

use thiserror::Error;

/// Error type for schema interchange operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// IO error while reading a schema document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field type points past the end of an arena.
    #[error("field '{field}' of '{owner}' references missing {kind} #{index}")]
    DanglingReference {
        /// Definition owning the field.
        owner: String,
        /// Field name.
        field: String,
        /// Kind of the missing definition (struct, table, enum).
        kind: &'static str,
        /// Out-of-range arena index.
        index: usize,
    },

    /// An enum has no values, or its values are not strictly ascending.
    #[error("invalid enum '{name}': {message}")]
    InvalidEnum {
        /// Enum name.
        name: String,
        /// Error message.
        message: String,
    },

    /// The root type is missing or is not a table.
    #[error("invalid root type: {message}")]
    InvalidRoot {
        /// Error message.
        message: String,
    },
}

impl SchemaError {
    /// Creates a dangling reference error.
    pub fn dangling(
        owner: impl Into<String>,
        field: impl Into<String>,
        kind: &'static str,
        index: usize,
    ) -> Self {
        Self::DanglingReference {
            owner: owner.into(),
            field: field.into(),
            kind,
            index,
        }
    }

    /// Creates an invalid enum error.
    pub fn invalid_enum(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEnum {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid root error.
    pub fn invalid_root(message: impl Into<String>) -> Self {
        Self::InvalidRoot {
            message: message.into(),
        }
    }
}
