//! # flatgen Codegen
//!
//! C++ code generation from resolved FlatBuffers schemas.
//!
//! This crate provides:
//! - Enum declarations with dense name lookup tables
//! - Fixed-size struct declarations with explicit padding and alignment
//! - Table accessors, builders and factory functions
//! - Module assembly and header file packaging

pub mod cpp;
pub mod error;
pub mod generator;
pub mod header;

pub use error::CodegenError;
pub use generator::Generator;
pub use header::{generate_file, generate_header, header_guard};

use flatgen_schema::Schema;

/// Generates the C++ module for a schema.
///
/// Definitions are marked as generated; see [`Generator`].
#[must_use]
pub fn generate_cpp(schema: &mut Schema) -> String {
    Generator::new(schema).generate()
}

/// Generates C++ code from a resolved schema in JSON form.
///
/// # Arguments
/// * `json` - JSON schema content
///
/// # Returns
/// Generated C++ code as a string.
///
/// # Errors
/// Returns `CodegenError` if the schema cannot be loaded.
pub fn generate_from_json(json: &str) -> Result<String, CodegenError> {
    let mut schema = flatgen_schema::parse_schema_json(json)?;
    Ok(generate_cpp(&mut schema))
}

/// Generates C++ code from a resolved schema JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON schema file
///
/// # Returns
/// Generated C++ code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading or loading fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json)
}
