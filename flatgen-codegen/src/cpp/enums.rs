//! Enum declaration and name table generation.

use super::push_doc_comment;
use flatgen_schema::{EnumDef, EnumId, Schema};

/// Average distance between values above which an enum is too sparse for a
/// dense name table.
pub const MAX_SPARSENESS: i128 = 5;

/// Dense value-to-name table for an enum.
///
/// Mirrors the generated `EnumNames<Name>()` array: index `i` holds the name
/// of value `first + i`, or `""` if the schema declares no such value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTable<'a> {
    /// Value stored at index 0.
    pub first: i64,
    /// Names, one per value in `first..=last`.
    pub names: Vec<&'a str>,
}

impl<'a> NameTable<'a> {
    /// Builds the name table for an enum, or `None` if it is too sparse.
    ///
    /// # Panics
    /// Panics if the enum has no values.
    #[must_use]
    pub fn build(enum_def: &'a EnumDef) -> Option<Self> {
        let (first, last) = match (enum_def.values.first(), enum_def.values.last()) {
            (Some(first), Some(last)) => (first.value, last.value),
            _ => panic!("enum '{}' has no values", enum_def.name),
        };

        let range = i128::from(last) - i128::from(first) + 1;
        let count = enum_def.values.len() as i128;
        let dense = range / count < MAX_SPARSENESS;
        tracing::trace!(
            "Enum {} spans {} values with {} declared, name table {}",
            enum_def.name,
            range,
            count,
            if dense { "emitted" } else { "skipped" }
        );
        if !dense {
            return None;
        }

        let mut names = vec![""; range as usize];
        for value in &enum_def.values {
            names[(i128::from(value.value) - i128::from(first)) as usize] = &value.name;
        }
        Some(Self { first, names })
    }

    /// Looks up the name of a value, as the generated `EnumName<Name>()` does.
    ///
    /// Returns `None` outside `first..=last`, where the generated function
    /// has undefined behavior.
    #[must_use]
    pub fn name(&self, value: i64) -> Option<&'a str> {
        let index = usize::try_from(i128::from(value) - i128::from(self.first)).ok()?;
        self.names.get(index).copied()
    }
}

/// Generator for enum declarations and name lookup functions.
pub struct EnumGenerator<'a> {
    schema: &'a Schema,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Generates the declaration and, for dense enums, the name lookup.
    ///
    /// # Panics
    /// Panics if the enum has no values.
    #[must_use]
    pub fn generate(&self, id: EnumId) -> String {
        let enum_def = self.schema.enum_def(id);
        let mut output = self.generate_declaration(enum_def);
        if let Some(table) = NameTable::build(enum_def) {
            output.push_str(&self.generate_names(enum_def, &table));
        }
        output
    }

    /// Generates the enum declaration with the exact stored values.
    fn generate_declaration(&self, enum_def: &EnumDef) -> String {
        let mut output = String::new();

        push_doc_comment(&mut output, enum_def.doc_comment.as_deref(), "");
        output.push_str(&format!("enum {} {{\n", enum_def.name));
        for value in &enum_def.values {
            push_doc_comment(&mut output, value.doc_comment.as_deref(), "  ");
            output.push_str(&format!(
                "  {}_{} = {},\n",
                enum_def.name, value.name, value.value
            ));
        }
        output.push_str("};\n\n");

        output
    }

    /// Generates `EnumNames<Name>()` and `EnumName<Name>(int)`.
    fn generate_names(&self, enum_def: &EnumDef, table: &NameTable<'_>) -> String {
        let mut output = String::new();
        let name = &enum_def.name;

        output.push_str(&format!("inline const char **EnumNames{}() {{\n", name));
        output.push_str("  static const char *names[] = { ");
        for entry in &table.names {
            output.push_str(&format!("\"{}\", ", entry));
        }
        output.push_str("nullptr };\n");
        output.push_str("  return names;\n");
        output.push_str("}\n\n");

        output.push_str(&format!("inline const char *EnumName{}(int e) {{\n", name));
        output.push_str(&format!("  return EnumNames{}()[e", name));
        if table.first != 0 {
            // Written against the enumerator so negative bases read naturally.
            let first = &enum_def.values[0];
            output.push_str(&format!(" - {}_{}", name, first.name));
        }
        output.push_str("];\n");
        output.push_str("}\n\n");

        output
    }
}
