//! # flatgen
//!
//! FlatBuffers C++ code generator for resolved schemas.
//!
//! flatgen takes a schema that an IDL front end has already parsed and laid
//! out (field slots, struct padding and alignment are all decided) and emits
//! a self-contained C++ header on top of the FlatBuffers runtime.
//!
//! ## Features
//!
//! - **Enums** - Declarations plus dense `EnumName<Enum>()` lookup tables
//! - **Structs** - Byte-exact fixed layouts with explicit padding members
//! - **Tables** - Read accessors, incremental builders and `create_<Table>` factories
//! - **JSON interchange** - Load resolved schemas produced by another tool
//!
//! ## Quick Start
//!
//! ```
//! use flatgen::prelude::*;
//!
//! let mut schema = Schema::new(Namespace::parse("game"));
//! let monster = schema.add_struct(
//!     StructDef::table("Monster")
//!         .with_field(Field::new("hp", ScalarType::Int16).with_offset(4).with_default("100")),
//! );
//! schema.root = Some(monster);
//!
//! let header = generate_header(&mut schema, "monster");
//! assert!(header.contains("int16_t hp() const { return GetField<int16_t>(4, 100); }"));
//! assert!(header.contains("inline const Monster *get_Monster(const void *buf) {"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Resolved schema model and JSON interchange
//! - [`codegen`] - C++ code generation and header packaging

pub mod prelude;

/// Resolved schema model and JSON interchange.
pub mod schema {
    pub use flatgen_schema::*;
}

/// C++ code generation from resolved schemas.
pub mod codegen {
    pub use flatgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use flatgen_codegen::{
    CodegenError, Generator, generate_cpp, generate_file, generate_from_file, generate_from_json,
    generate_header,
};
pub use flatgen_schema::{Schema, SchemaError};
