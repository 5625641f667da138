//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use flatgen::prelude::*;
//! ```

// Schema model
pub use flatgen_schema::{
    EnumDef, EnumId, EnumVal, Field, Namespace, ScalarType, Schema, SchemaError, StructDef,
    StructId, Type,
};

// Code generation
pub use flatgen_codegen::{
    CodegenError, Generator, generate_cpp, generate_file, generate_from_file, generate_from_json,
    generate_header, header_guard,
};
