//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Malformed layout metadata is not an error here: the schema is trusted to
/// be validated, and violations abort generation.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema error: {0}")]
    Schema(#[from] flatgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
