//! Fixed-size struct generation.
//!
//! Structs are emitted with explicit alignment, explicit filler members and
//! private little-endian storage, so that their layout is identical on every
//! compiler and host byte order.

use super::{TypeMapper, push_doc_comment};
use flatgen_schema::{Field, Schema, StructDef, StructId};

/// Number of filler sizes a padding bitmask can describe (8, 16, 32, 64 bits).
pub const MAX_PADDING_BITS: u32 = 4;

const PADDING_MASK: u8 = (1 << MAX_PADDING_BITS) - 1;

/// Filler member inserted after a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filler {
    /// Member name, unique within the struct.
    pub name: String,
    /// Width of the member in bits.
    pub bits: usize,
}

impl Filler {
    /// Returns the size of the member in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.bits / 8
    }
}

/// Expands a field's padding bitmask into filler members.
///
/// `next_id` numbers fillers across one struct; callers start it at 0 for
/// every struct they emit.
///
/// # Panics
/// Panics if the bitmask sets a bit above [`MAX_PADDING_BITS`].
#[must_use]
pub fn fillers(field: &Field, next_id: &mut usize) -> Vec<Filler> {
    assert!(
        field.padding & !PADDING_MASK == 0,
        "padding bitmask {:#06b} of field '{}' sets bits above {}",
        field.padding,
        field.name,
        MAX_PADDING_BITS - 1
    );

    (0..MAX_PADDING_BITS)
        .filter(|bit| field.padding & (1 << bit) != 0)
        .map(|bit| {
            let filler = Filler {
                name: format!("__padding{}", next_id),
                bits: 8 << bit,
            };
            *next_id += 1;
            filler
        })
        .collect()
}

/// Generator for fixed-size struct declarations.
pub struct StructGenerator<'a> {
    schema: &'a Schema,
    types: TypeMapper<'a>,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            types: TypeMapper::new(schema),
        }
    }

    /// Generates the struct declaration with storage, constructor and accessors.
    ///
    /// # Panics
    /// Panics if a field's padding bitmask is out of range.
    #[must_use]
    pub fn generate(&self, id: StructId) -> String {
        let struct_def = self.schema.struct_def(id);
        let mut next_id = 0;
        let layout: Vec<(&Field, Vec<Filler>)> = struct_def
            .fields
            .iter()
            .map(|field| (field, fillers(field, &mut next_id)))
            .collect();
        let filler_bytes: usize = layout
            .iter()
            .flat_map(|(_, fillers)| fillers)
            .map(Filler::size)
            .sum();
        tracing::trace!(
            "Struct {} pads {} of {} bytes with fillers",
            struct_def.name,
            filler_bytes,
            struct_def.bytesize
        );

        let mut output = String::new();
        push_doc_comment(&mut output, struct_def.doc_comment.as_deref(), "");
        output.push_str(&format!(
            "MANUALLY_ALIGNED_STRUCT({}) {} {{\n",
            struct_def.minalign, struct_def.name
        ));

        output.push_str(" private:\n");
        for (field, fillers) in &layout {
            output.push_str(&format!(
                "  {}{}_;\n",
                self.types.get(&field.ty, " ", "", " "),
                field.name
            ));
            for filler in fillers {
                output.push_str(&format!("  int{}_t {};\n", filler.bits, filler.name));
            }
        }

        output.push_str("\n public:\n");
        output.push_str(&self.generate_constructor(struct_def, &layout));
        for field in &struct_def.fields {
            output.push_str(&self.generate_accessor(field));
        }

        output.push_str("};\n");
        output.push_str(&format!(
            "STRUCT_END({}, {});\n\n",
            struct_def.name, struct_def.bytesize
        ));

        output
    }

    /// Generates the all-fields constructor.
    fn generate_constructor(
        &self,
        struct_def: &StructDef,
        layout: &[(&Field, Vec<Filler>)],
    ) -> String {
        let mut output = String::new();

        let params: Vec<String> = struct_def
            .fields
            .iter()
            .map(|field| {
                format!(
                    "{}{}",
                    self.types.get(&field.ty, " ", "const ", " &"),
                    field.name
                )
            })
            .collect();
        output.push_str(&format!("  {}({})", struct_def.name, params.join(", ")));

        let mut inits = Vec::new();
        for (field, fillers) in layout {
            if field.ty.is_scalar() {
                inits.push(format!("{}_(fb::EndianScalar({}))", field.name, field.name));
            } else {
                inits.push(format!("{}_({})", field.name, field.name));
            }
            inits.extend(fillers.iter().map(|filler| format!("{}(0)", filler.name)));
        }
        if !inits.is_empty() {
            output.push_str(&format!("\n    : {}", inits.join(", ")));
        }
        output.push_str(" {\n  }\n\n");

        output
    }

    /// Generates one accessor; scalars are converted back to host order.
    fn generate_accessor(&self, field: &Field) -> String {
        let mut output = String::new();

        push_doc_comment(&mut output, field.doc_comment.as_deref(), "  ");
        let value = if field.ty.is_scalar() {
            format!("fb::EndianScalar({}_)", field.name)
        } else {
            format!("{}_", field.name)
        };
        output.push_str(&format!(
            "  {}{}() const {{ return {}; }}\n",
            self.types.get(&field.ty, " ", "const ", " &"),
            field.name,
            value
        ));

        output
    }
}
