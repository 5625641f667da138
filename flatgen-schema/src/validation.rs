//! Reference integrity checks for schemas loaded from an interchange document.
//!
//! Layout metadata (offsets, padding, alignment) is trusted as produced by the
//! parser. What is checked here is what the generator indexes by: every arena
//! id resolves, and enum values are non-empty and strictly ascending, so that
//! a hand-edited or truncated document cannot abort generation.

use crate::error::SchemaError;
use crate::types::{EnumDef, Schema, Type};

/// Validates that every struct, table, enum and root reference resolves,
/// and that every enum is usable for a name table.
///
/// # Errors
/// Returns `SchemaError` on the first dangling id, on an empty or unsorted
/// enum, or on a root that is not a table.
pub fn validate_references(schema: &Schema) -> Result<(), SchemaError> {
    for enum_def in &schema.enums {
        check_enum(enum_def)?;
    }

    for struct_def in &schema.structs {
        for field in &struct_def.fields {
            check_type(schema, &struct_def.name, &field.name, &field.ty)?;
        }
    }

    if let Some(root) = schema.root {
        let Some(root_def) = schema.structs.get(root.0) else {
            return Err(SchemaError::invalid_root(format!(
                "root #{} does not exist",
                root.0
            )));
        };
        if root_def.fixed {
            return Err(SchemaError::invalid_root(format!(
                "root '{}' is a struct, not a table",
                root_def.name
            )));
        }
    }

    Ok(())
}

fn check_enum(enum_def: &EnumDef) -> Result<(), SchemaError> {
    if enum_def.values.is_empty() {
        return Err(SchemaError::invalid_enum(&enum_def.name, "no values"));
    }
    for pair in enum_def.values.windows(2) {
        if pair[1].value <= pair[0].value {
            return Err(SchemaError::invalid_enum(
                &enum_def.name,
                format!(
                    "value {} = {} does not follow {} = {}",
                    pair[1].name, pair[1].value, pair[0].name, pair[0].value
                ),
            ));
        }
    }
    Ok(())
}

fn check_type(schema: &Schema, owner: &str, field: &str, ty: &Type) -> Result<(), SchemaError> {
    match ty {
        Type::Scalar(_) | Type::String => Ok(()),
        Type::Vector(element) => check_type(schema, owner, field, element),
        Type::Struct(id) if id.0 >= schema.structs.len() => {
            Err(SchemaError::dangling(owner, field, "struct", id.0))
        }
        Type::Table(id) if id.0 >= schema.structs.len() => {
            Err(SchemaError::dangling(owner, field, "table", id.0))
        }
        Type::Union(id) if id.0 >= schema.enums.len() => {
            Err(SchemaError::dangling(owner, field, "enum", id.0))
        }
        Type::Struct(_) | Type::Table(_) | Type::Union(_) => Ok(()),
    }
}
