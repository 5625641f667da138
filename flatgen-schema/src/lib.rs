//! # flatgen Schema
//!
//! Resolved FlatBuffers schema model.
//!
//! This crate provides:
//! - Type definitions for enums, structs, tables and fields
//! - Arena storage with stable ids for cyclic type graphs
//! - JSON interchange for schemas resolved by an external IDL front end
//! - Reference integrity checks for loaded schemas

pub mod error;
pub mod interchange;
pub mod types;
pub mod validation;

pub use error::SchemaError;
pub use interchange::parse_schema_json;
pub use types::{
    EnumDef, EnumId, EnumVal, Field, LARGEST_SCALAR_SIZE, Namespace, OFFSET_SIZE, ScalarType,
    Schema, StructDef, StructId, Type,
};
pub use validation::validate_references;
