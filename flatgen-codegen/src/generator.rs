//! Module assembly.
//!
//! Walks every definition of a schema once and stitches the generated
//! fragments into a single C++ unit: enums, forward declarations, structs,
//! tables and the root accessor, wrapped in the schema's namespace.

use crate::cpp::{EnumGenerator, StructGenerator, TableGenerator};
use flatgen_schema::{Namespace, Schema};

/// Include and alias macros every generated unit starts with.
pub const RUNTIME_PRELUDE: &str = "\
#include \"flatbuffers/flatbuffers.h\"

namespace fb = flatbuffers;

#define fb_offset                 fb::Offset
#define fb_string                 fb::String
#define fb_vector                 fb::Vector
#define fb_table                  fb::Table
#define fb_builder                fb::FlatBufferBuilder
#define fb_create_string(b, ...)  (b).CreateString(__VA_ARGS__)
#define fb_create_vector(b, ...)  (b).CreateVector(__VA_ARGS__)
#define fb_vector_size(v)         (unsigned)(*(v)).Length()
#define fb_vector_length(v)       (unsigned)(*(v)).Length()
#define fb_vector_at(v, i)        (*(v)).Get(i)
#define fb_get_buf(b)             (b).GetBufferPointer()
#define fb_get_size(b)            (unsigned)(b).GetSize()
#define fb_clear(b)               (b).Clear()
#define fb_finish(b, buf)         (b).Finish(buf)
";

/// Main C++ code generator.
///
/// Generation flips each emitted definition's `generated` flag, so running
/// it a second time over the same schema emits nothing.
pub struct Generator<'a> {
    schema: &'a mut Schema,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the given schema.
    #[must_use]
    pub fn new(schema: &'a mut Schema) -> Self {
        Self { schema }
    }

    /// Generates the complete module.
    ///
    /// Returns an empty string when there is nothing left to emit and the
    /// schema has no root type.
    ///
    /// # Panics
    /// Panics on malformed layout metadata (an enum without values, or a
    /// padding bitmask out of range).
    #[must_use]
    pub fn generate(&mut self) -> String {
        let enum_code = self.generate_enums();
        let forward_decl_code = self.generate_forward_declarations();
        let mut decl_code = self.generate_structs();
        decl_code.push_str(&self.generate_tables());
        let root_code = self.generate_root_accessor();

        if enum_code.is_empty()
            && forward_decl_code.is_empty()
            && decl_code.is_empty()
            && root_code.is_empty()
        {
            tracing::debug!("Nothing to generate");
            return String::new();
        }

        let namespace = &self.schema.namespace;
        let mut output = String::new();
        output.push('\n');
        output.push_str(RUNTIME_PRELUDE);
        output.push('\n');
        output.push_str(&open_namespace(namespace));
        output.push_str(&enum_code);
        output.push_str(&forward_decl_code);
        output.push('\n');
        output.push_str(&decl_code);
        output.push_str(&root_code);
        output.push_str(&close_namespace(namespace));

        output
    }

    /// Generates every enum not generated yet.
    fn generate_enums(&mut self) -> String {
        let mut output = String::new();

        for id in self.schema.enum_ids() {
            if self.schema[id].generated {
                tracing::debug!("Skipping enum {} (already generated)", self.schema[id].name);
                continue;
            }
            output.push_str(&EnumGenerator::new(self.schema).generate(id));
            self.schema[id].generated = true;
            tracing::debug!("Generated enum {}", self.schema[id].name);
        }

        output
    }

    /// Declares every struct and table up front; definitions may refer to
    /// each other in any order, including cycles.
    fn generate_forward_declarations(&self) -> String {
        self.schema
            .structs
            .iter()
            .filter(|s| !s.generated)
            .map(|s| format!("struct {};\n", s.name))
            .collect()
    }

    /// Generates every fixed-size struct not generated yet.
    fn generate_structs(&mut self) -> String {
        let mut output = String::new();

        for id in self.schema.struct_ids() {
            if !self.schema[id].fixed {
                continue;
            }
            if self.schema[id].generated {
                tracing::debug!("Skipping struct {} (already generated)", self.schema[id].name);
                continue;
            }
            output.push_str(&StructGenerator::new(self.schema).generate(id));
            self.schema[id].generated = true;
            tracing::debug!("Generated struct {}", self.schema[id].name);
        }

        output
    }

    /// Generates every table not generated yet.
    fn generate_tables(&mut self) -> String {
        let mut output = String::new();

        for id in self.schema.struct_ids() {
            if self.schema[id].fixed {
                continue;
            }
            if self.schema[id].generated {
                tracing::debug!("Skipping table {} (already generated)", self.schema[id].name);
                continue;
            }
            output.push_str(&TableGenerator::new(self.schema).generate(id));
            self.schema[id].generated = true;
            tracing::debug!("Generated table {}", self.schema[id].name);
        }

        output
    }

    /// Generates `get_<Root>()` when the schema has a root type.
    fn generate_root_accessor(&self) -> String {
        let Some(root) = self.schema.root else {
            return String::new();
        };
        let name = &self.schema[root].name;

        let mut output = String::new();
        output.push_str(&format!(
            "inline const {} *get_{}(const void *buf) {{\n",
            name, name
        ));
        output.push_str(&format!("  return fb::GetRoot<{}>(buf);\n", name));
        output.push_str("}\n");

        output
    }
}

/// Opens one C++ namespace per component, outermost first.
fn open_namespace(namespace: &Namespace) -> String {
    let mut output: String = namespace
        .components
        .iter()
        .map(|c| format!("namespace {} {{\n", c))
        .collect();
    if !namespace.is_empty() {
        output.push('\n');
    }
    output
}

/// Closes the namespaces opened by [`open_namespace`], innermost first.
fn close_namespace(namespace: &Namespace) -> String {
    namespace
        .components
        .iter()
        .rev()
        .map(|c| format!("\n}}  // namespace {}\n", c))
        .collect()
}
