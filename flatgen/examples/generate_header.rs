//! Builds a small game schema in code and writes its C++ header.
//!
//! Run with: `RUST_LOG=debug cargo run --example generate_header [OUT_DIR]`
//!
//! The header is written to `OUT_DIR/monster.fb.h` (default: the current
//! directory).

use flatgen::prelude::*;
use std::path::PathBuf;

/// Builds the schema an IDL front end would resolve from:
///
/// ```text
/// namespace my_game.sample;
/// enum Color : byte { Red, Green, Blue = 2 }
/// struct Vec3 { x: float; y: float; z: float; }
/// table Monster { pos: Vec3; mana: short = 150; hp: short = 100;
///                 name: string; friendly: bool (deprecated);
///                 inventory: [ubyte]; color: Color = Blue; }
/// root_type Monster;
/// ```
fn build_schema() -> Schema {
    let mut schema = Schema::new(Namespace::parse("my_game.sample"));

    schema.add_enum(
        EnumDef::new("Color")
            .with_value("Red", 0)
            .with_value("Green", 1)
            .with_value("Blue", 2)
            .with_doc("Paint applied to a monster."),
    );

    let vec3 = schema.add_struct(
        StructDef::fixed("Vec3", 4, 12)
            .with_field(Field::new("x", ScalarType::Float32))
            .with_field(Field::new("y", ScalarType::Float32).with_offset(4))
            .with_field(Field::new("z", ScalarType::Float32).with_offset(8)),
    );

    let monster = schema.add_struct(
        StructDef::table("Monster")
            .with_doc("A creature in the world.")
            .with_field(Field::new("pos", Type::Struct(vec3)).with_offset(4))
            .with_field(
                Field::new("mana", ScalarType::Int16)
                    .with_offset(6)
                    .with_default("150"),
            )
            .with_field(
                Field::new("hp", ScalarType::Int16)
                    .with_offset(8)
                    .with_default("100"),
            )
            .with_field(Field::new("name", Type::String).with_offset(10))
            .with_field(
                Field::new("friendly", ScalarType::Bool)
                    .with_offset(12)
                    .deprecated(),
            )
            .with_field(
                Field::new("inventory", Type::vector_of(ScalarType::UInt8.into()))
                    .with_offset(14),
            )
            .with_field(
                Field::new("color", ScalarType::Int8)
                    .with_offset(16)
                    .with_default("2"),
            ),
    );
    schema.root = Some(monster);

    schema
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut schema = build_schema();
    println!("Generating header for namespace {}", schema.namespace.dotted());

    let path = generate_file(&mut schema, &out_dir, "monster")?;
    println!("Wrote {}", path.display());

    // Everything is marked generated now; a second pass only re-emits the
    // root accessor.
    let again = generate_cpp(&mut schema);
    println!("Second pass produced {} bytes", again.len());

    Ok(())
}
