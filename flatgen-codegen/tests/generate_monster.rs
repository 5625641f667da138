//! End-to-end generation from a resolved JSON schema.

use flatgen_codegen::cpp::NameTable;
use flatgen_codegen::{CodegenError, generate_cpp, generate_file, generate_from_file};
use flatgen_schema::{Schema, SchemaError};
use std::path::Path;

const MONSTER_JSON: &str = include_str!("fixtures/monster.json");

fn load() -> Schema {
    Schema::from_json(MONSTER_JSON).expect("Failed to load fixture")
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("missing {:?}", needle))
}

#[test]
fn test_module_layout() {
    let mut schema = load();
    let output = generate_cpp(&mut schema);

    let ns = position(&output, "namespace my_game {\nnamespace sample {\n");
    let color = position(&output, "/// Paint applied to a monster.\nenum Color {");
    let forward = position(&output, "struct Monster;\nstruct Vec3;\nstruct Weapon;\n");
    let vec3 = position(&output, "MANUALLY_ALIGNED_STRUCT(4) Vec3 {");
    let monster = position(&output, "/// A creature in the world.\nstruct Monster : private fb_table {");
    let weapon = position(&output, "struct Weapon : private fb_table {");
    let root = position(&output, "inline const Monster *get_Monster(const void *buf) {");

    assert!(ns < color);
    assert!(color < forward);
    assert!(forward < vec3);
    assert!(vec3 < monster);
    assert!(monster < weapon);
    assert!(weapon < root);
    assert!(output.ends_with("}  // namespace sample\n\n}  // namespace my_game\n"));
}

#[test]
fn test_enum_name_tables() {
    let mut schema = load();
    let output = generate_cpp(&mut schema);

    assert!(output.contains("{ \"Red\", \"Green\", \"Blue\", nullptr }"));
    assert!(output.contains("inline const char *EnumNameColor(int e) {"));
    assert!(output.contains("  Sparse_B = 100,\n"));
    assert!(!output.contains("EnumNamesSparse"));

    let schema = load();
    let color = schema.enum_def(schema.find_enum("Color").unwrap());
    let table = NameTable::build(color).expect("Color is dense");
    assert_eq!(table.name(1), Some("Green"));
    for value in &color.values {
        assert_eq!(table.name(value.value), Some(value.name.as_str()));
    }
}

#[test]
fn test_fixed_struct_layout() {
    let mut schema = load();
    let output = generate_cpp(&mut schema);

    assert!(output.contains(" private:\n  float x_;\n  float y_;\n  float z_;\n\n public:\n"));
    assert!(!output.contains("__padding"));
    assert!(output.contains("STRUCT_END(Vec3, 12);"));
}

#[test]
fn test_monster_table_surfaces() {
    let mut schema = load();
    let output = generate_cpp(&mut schema);

    assert!(!output.contains("friendly"));
    assert!(output.contains("  int8_t color() const { return GetField<int8_t>(16, 2); }\n"));
    assert!(output.contains(
        "  void add_color(int8_t color) { fbb_.AddElement<int8_t>(16, color, 2); }\n"
    ));
    assert!(output.contains(
        "  const fb_vector<fb_offset<Weapon>> *weapons() const \
         { return GetPointer<const fb_vector<fb_offset<Weapon>> *>(18); }\n"
    ));
    assert!(output.contains(
        "  const fb_vector<const Vec3 *> *path() const \
         { return GetPointer<const fb_vector<const Vec3 *> *>(24); }\n"
    ));
    assert!(output.contains("  const void *equipped() const { return GetPointer<const void *>(22); }\n"));
    assert!(output.contains("    return fb_offset<Monster>(fbb_.EndTable(start_, 11));\n"));
}

#[test]
fn test_factory_emission_order() {
    let mut schema = load();
    let output = generate_cpp(&mut schema);

    let monster_body = &output[position(&output, "  Monster_builder builder_(_fbb);\n")..];
    let expected: String = [
        "path",
        "equipped",
        "weapons",
        "inventory",
        "name",
        "pos",
        "hp",
        "mana",
        "equipped_type",
        "color",
    ]
    .iter()
    .map(|f| format!("  builder_.add_{}({});\n", f, f))
    .collect();
    assert!(monster_body.contains(&expected));

    assert!(output.contains(
        "  Weapon_builder builder_(_fbb);\n  builder_.add_owner(owner);\n  \
         builder_.add_damage(damage);\n  builder_.add_name(name);\n  return builder_.Finish();\n"
    ));
}

#[test]
fn test_generate_twice_emits_each_definition_once() {
    let mut schema = load();
    let first = generate_cpp(&mut schema);
    let second = generate_cpp(&mut schema);

    assert_eq!(first.matches("enum Color {").count(), 1);
    assert_eq!(first.matches("MANUALLY_ALIGNED_STRUCT(4) Vec3 {").count(), 1);
    assert_eq!(first.matches("struct Weapon : private fb_table {").count(), 1);

    // Only the root accessor remains once everything is generated.
    assert!(!second.contains("enum Color"));
    assert!(!second.contains("struct "));
    assert!(second.contains("inline const Monster *get_Monster(const void *buf) {"));
}

#[test]
fn test_generate_file_and_from_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let json_path = dir.path().join("monster.json");
    std::fs::write(&json_path, MONSTER_JSON).expect("Failed to write fixture");

    let from_file = generate_from_file(&json_path).expect("Failed to generate");
    assert!(from_file.contains("struct Monster : private fb_table {"));

    let mut schema = load();
    let header = generate_file(&mut schema, dir.path(), "monster").expect("Failed to write");
    let written = std::fs::read_to_string(header).expect("Failed to read back");
    assert!(written.starts_with("// automatically generated, do not modify\n"));
    assert!(written.contains("#ifndef __MONSTER_FLATBUFFERS_H__\n"));
    assert!(written.contains(&from_file));
}

#[test]
fn test_generate_from_missing_file() {
    let result = generate_from_file(Path::new("/nonexistent/monster.json"));
    assert!(matches!(result, Err(CodegenError::Io(_))));
}

#[test]
fn test_generate_from_dangling_json() {
    let json = r#"{ "structs": [ { "name": "T", "fixed": false,
        "fields": [ { "name": "t", "type": { "table": 5 } } ] } ] }"#;
    assert!(matches!(
        flatgen_codegen::generate_from_json(json),
        Err(CodegenError::Schema(_))
    ));
}

#[test]
fn test_generate_from_json_rejects_unusable_enums() {
    let empty = r#"{ "enums": [ { "name": "Nothing", "values": [] } ] }"#;
    assert!(matches!(
        flatgen_codegen::generate_from_json(empty),
        Err(CodegenError::Schema(SchemaError::InvalidEnum { .. }))
    ));

    let unsorted = r#"{ "enums": [ { "name": "Color", "values": [
        { "name": "Blue", "value": 9223372036854775807 },
        { "name": "Red", "value": -9223372036854775808 }
    ] } ] }"#;
    assert!(matches!(
        flatgen_codegen::generate_from_json(unsorted),
        Err(CodegenError::Schema(SchemaError::InvalidEnum { .. }))
    ));
}
