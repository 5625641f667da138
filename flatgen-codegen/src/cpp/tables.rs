//! Table accessor, builder and factory generation.

use super::{TypeMapper, push_doc_comment};
use flatgen_schema::{Field, LARGEST_SCALAR_SIZE, Schema, StructDef, StructId, Type};

/// Returns the order in which the factory function adds fields.
///
/// The buffer is built back to front, so fields are added in reverse
/// declaration order. With `sortbysize`, fields are additionally grouped in
/// passes of descending slot size (8, 4, 2, 1) to keep padding low.
#[must_use]
pub fn factory_order(struct_def: &StructDef) -> Vec<&Field> {
    if !struct_def.sortbysize {
        return struct_def.live_fields().rev().collect();
    }

    let mut order = Vec::with_capacity(struct_def.fields.len());
    let mut size = LARGEST_SCALAR_SIZE;
    while size > 0 {
        order.extend(
            struct_def
                .live_fields()
                .rev()
                .filter(|field| field.ty.slot_size() == size),
        );
        size /= 2;
    }
    order
}

/// Generator for table accessors, builders and factory functions.
pub struct TableGenerator<'a> {
    schema: &'a Schema,
    types: TypeMapper<'a>,
}

impl<'a> TableGenerator<'a> {
    /// Creates a new table generator.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            types: TypeMapper::new(schema),
        }
    }

    /// Generates the accessor struct, builder struct and factory function.
    #[must_use]
    pub fn generate(&self, id: StructId) -> String {
        let struct_def = self.schema.struct_def(id);
        let mut output = self.generate_accessor(struct_def);
        output.push_str(&self.generate_builder(struct_def));
        output.push_str(&self.generate_factory(struct_def));
        output
    }

    /// Generates the read-only accessor struct.
    fn generate_accessor(&self, struct_def: &StructDef) -> String {
        let mut output = String::new();

        push_doc_comment(&mut output, struct_def.doc_comment.as_deref(), "");
        output.push_str(&format!("struct {} : private fb_table {{\n", struct_def.name));
        for field in struct_def.live_fields() {
            output.push_str(&self.generate_getter(field));
        }
        output.push_str("};\n\n");

        output
    }

    /// Generates one getter reading through the field slot.
    fn generate_getter(&self, field: &Field) -> String {
        let mut output = String::new();
        let value_type = self.types.get(&field.ty, "", "const ", " *");

        let lookup = match &field.ty {
            Type::Scalar(_) => format!(
                "GetField<{}>({}, {})",
                value_type, field.offset, field.default_value
            ),
            Type::Struct(_) => format!("GetStruct<{}>({})", value_type, field.offset),
            Type::String | Type::Vector(_) | Type::Table(_) | Type::Union(_) => {
                format!("GetPointer<{}>({})", value_type, field.offset)
            }
        };

        push_doc_comment(&mut output, field.doc_comment.as_deref(), "  ");
        output.push_str(&format!(
            "  {}{}() const {{ return {}; }}\n",
            self.types.get(&field.ty, " ", "const ", " *"),
            field.name,
            lookup
        ));

        output
    }

    /// Generates the builder struct.
    fn generate_builder(&self, struct_def: &StructDef) -> String {
        let mut output = String::new();
        let name = &struct_def.name;

        output.push_str(&format!("struct {}_builder {{\n", name));
        output.push_str("  fb_builder &fbb_;\n");
        output.push_str("  fb::uoffset_t start_;\n\n");

        for field in struct_def.live_fields() {
            output.push_str(&self.generate_adder(field));
        }

        output.push_str(&format!(
            "\n  explicit {}_builder(fb_builder &_fbb) : fbb_(_fbb) {{\n",
            name
        ));
        output.push_str("    start_ = fbb_.StartTable();\n");
        output.push_str("  }\n\n");

        // Deprecated fields keep their slot, so the index covers all of them.
        output.push_str(&format!("  fb_offset<{}> Finish() {{\n", name));
        output.push_str(&format!(
            "    return fb_offset<{}>(fbb_.EndTable(start_, {}));\n",
            name,
            struct_def.fields.len()
        ));
        output.push_str("  }\n");
        output.push_str("};\n\n");

        output
    }

    /// Generates one `add_<field>` mutator.
    fn generate_adder(&self, field: &Field) -> String {
        let write = match &field.ty {
            Type::Scalar(_) => format!(
                "fbb_.AddElement<{}>({}, {}, {})",
                self.types.wire(&field.ty, ""),
                field.offset,
                field.name,
                field.default_value
            ),
            Type::Struct(_) => format!("fbb_.AddStruct({}, {})", field.offset, field.name),
            Type::String | Type::Vector(_) | Type::Table(_) | Type::Union(_) => {
                format!("fbb_.AddOffset({}, {})", field.offset, field.name)
            }
        };

        format!(
            "  void add_{}({}{}) {{ {}; }}\n",
            field.name,
            self.types.wire(&field.ty, " "),
            field.name,
            write
        )
    }

    /// Generates the `create_<Name>` convenience function.
    fn generate_factory(&self, struct_def: &StructDef) -> String {
        let mut output = String::new();
        let name = &struct_def.name;

        output.push_str(&format!(
            "inline fb_offset<{}> create_{}(fb_builder &_fbb",
            name, name
        ));
        for field in struct_def.live_fields() {
            output.push_str(&format!(
                ",\n    {}{}",
                self.types.wire(&field.ty, " "),
                field.name
            ));
        }
        output.push_str(") {\n");

        output.push_str(&format!("  {}_builder builder_(_fbb);\n", name));
        for field in factory_order(struct_def) {
            output.push_str(&format!("  builder_.add_{}({});\n", field.name, field.name));
        }
        output.push_str("  return builder_.Finish();\n");
        output.push_str("}\n\n");

        output
    }
}
