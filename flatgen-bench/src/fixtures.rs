//! Synthetic schemas for generation benchmarks.

use flatgen_schema::{EnumDef, Field, Namespace, ScalarType, Schema, StructDef, StructId, Type};

const TABLE_SCALARS: [ScalarType; 4] = [
    ScalarType::Int64,
    ScalarType::Int32,
    ScalarType::Int16,
    ScalarType::UInt8,
];

/// Builds a dense enum with `count` consecutive values.
#[must_use]
pub fn dense_enum(name: &str, count: i64) -> EnumDef {
    (0..count).fold(EnumDef::new(name), |def, i| def.with_value(format!("V{}", i), i))
}

/// Builds an enum whose values are `stride` apart.
#[must_use]
pub fn sparse_enum(name: &str, count: i64, stride: i64) -> EnumDef {
    (0..count).fold(EnumDef::new(name), |def, i| {
        def.with_value(format!("V{}", i), i * stride)
    })
}

/// Builds a fixed struct of `pairs` `(int8, int32)` pairs, each byte padded
/// up to the next int.
#[must_use]
pub fn padded_struct(name: &str, pairs: usize) -> StructDef {
    let mut def = StructDef::fixed(name, 4, pairs * 8);
    for i in 0..pairs {
        def = def
            .with_field(
                Field::new(format!("tag{}", i), ScalarType::Int8)
                    .with_offset(i * 8)
                    .with_padding(0b0011),
            )
            .with_field(
                Field::new(format!("value{}", i), ScalarType::Int32).with_offset(i * 8 + 4),
            );
    }
    def
}

/// Builds a table with `fields` scalar fields of mixed sizes plus one
/// reference field pointing at `link`.
#[must_use]
pub fn mixed_table(name: &str, fields: usize, link: Option<StructId>) -> StructDef {
    let mut def = StructDef::table(name);
    for i in 0..fields {
        let scalar = TABLE_SCALARS[i % TABLE_SCALARS.len()];
        def = def.with_field(
            Field::new(format!("f{}", i), scalar)
                .with_offset(4 + 2 * i)
                .with_default(i.to_string()),
        );
    }
    if let Some(link) = link {
        def = def.with_field(
            Field::new("next", Type::vector_of(Type::Table(link))).with_offset(4 + 2 * fields),
        );
    }
    def
}

/// Builds a schema of `tables` linked tables, each with `fields` scalar
/// fields, plus a handful of enums and structs.
#[must_use]
pub fn synthetic_schema(tables: usize, fields: usize) -> Schema {
    let mut schema = Schema::new(Namespace::parse("bench.synthetic"));
    schema.add_enum(dense_enum("Dense", 16));
    schema.add_enum(sparse_enum("Sparse", 16, 100));
    schema.add_struct(padded_struct("Packed", 4));

    let first = schema.structs.len();
    for i in 0..tables {
        // Each table links to the next; the last one closes the cycle.
        let link = StructId(first + (i + 1) % tables);
        schema.add_struct(mixed_table(&format!("Table{}", i), fields, Some(link)));
    }
    if tables > 0 {
        schema.root = Some(StructId(first));
    }
    schema
}
