//! JSON interchange for resolved schemas.
//!
//! The IDL front end hands its resolved graph over as JSON: arenas of enums
//! and structs/tables, with field types pointing into those arenas by index.
//! Loading checks that every index resolves and nothing more.

use crate::error::SchemaError;
use crate::types::Schema;
use crate::validation::validate_references;
use std::path::Path;

/// Parses a resolved schema from a JSON document.
///
/// # Arguments
/// * `json` - JSON schema content
///
/// # Returns
/// Loaded schema or error.
///
/// # Errors
/// Returns `SchemaError` if the JSON is malformed or references a missing
/// definition.
pub fn parse_schema_json(json: &str) -> Result<Schema, SchemaError> {
    let schema: Schema = serde_json::from_str(json)?;
    validate_references(&schema)?;
    Ok(schema)
}

impl Schema {
    /// Parses a resolved schema from a JSON document.
    ///
    /// # Errors
    /// See [`parse_schema_json`].
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        parse_schema_json(json)
    }

    /// Reads and parses a resolved schema from a JSON file.
    ///
    /// # Errors
    /// Returns `SchemaError::Io` if the file cannot be read, otherwise see
    /// [`parse_schema_json`].
    pub fn from_json_file(path: &Path) -> Result<Self, SchemaError> {
        let json = std::fs::read_to_string(path)?;
        parse_schema_json(&json)
    }

    /// Serializes the schema graph as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns `SchemaError::Json` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ScalarType, StructId, Type};
    use std::io::Write;

    const MONSTER_JSON: &str = r#"{
        "namespace": ["game", "units"],
        "enums": [
            { "name": "Color", "values": [
                { "name": "Red", "value": 0 },
                { "name": "Green", "value": 1 }
            ] }
        ],
        "structs": [
            { "name": "Vec3", "fixed": true, "minalign": 4, "bytesize": 12,
              "fields": [
                { "name": "x", "type": { "scalar": "float32" }, "offset": 0 },
                { "name": "y", "type": { "scalar": "float32" }, "offset": 4 },
                { "name": "z", "type": { "scalar": "float32" }, "offset": 8 }
              ] },
            { "name": "Monster", "fixed": false,
              "fields": [
                { "name": "pos", "type": { "struct": 0 }, "offset": 0 },
                { "name": "hp", "type": { "scalar": "int16" }, "offset": 1,
                  "default_value": "100" },
                { "name": "name", "type": "string", "offset": 2 },
                { "name": "friends", "type": { "vector": { "table": 1 } }, "offset": 3,
                  "deprecated": true }
              ] }
        ],
        "root": 1
    }"#;

    #[test]
    fn test_parse_schema_json() {
        let schema = parse_schema_json(MONSTER_JSON).expect("Failed to parse");

        assert_eq!(schema.namespace.dotted(), "game.units");
        assert_eq!(schema.enums.len(), 1);
        assert_eq!(schema.enums[0].values[1].name, "Green");
        assert_eq!(schema.structs.len(), 2);
        assert_eq!(schema.root, Some(StructId(1)));

        let vec3 = &schema.structs[0];
        assert!(vec3.fixed);
        assert_eq!(vec3.bytesize, 12);
        assert_eq!(vec3.fields[2].ty, Type::Scalar(ScalarType::Float32));

        let monster = &schema.structs[1];
        assert!(!monster.fixed);
        assert!(monster.sortbysize);
        assert!(!monster.generated);
        assert_eq!(monster.fields[0].ty, Type::Struct(StructId(0)));
        assert_eq!(monster.fields[1].default_value, "100");
        assert_eq!(monster.fields[2].default_value, "0");
        assert_eq!(monster.fields[2].ty, Type::String);
        assert_eq!(
            monster.fields[3].ty,
            Type::vector_of(Type::Table(StructId(1)))
        );
        assert!(monster.fields[3].deprecated);
    }

    #[test]
    fn test_parse_schema_json_round_trip() {
        let schema = parse_schema_json(MONSTER_JSON).expect("Failed to parse");
        let json = schema.to_json_pretty().expect("Failed to serialize");
        let reparsed = Schema::from_json(&json).expect("Failed to reparse");

        assert_eq!(reparsed.structs, schema.structs);
        assert_eq!(reparsed.enums, schema.enums);
        assert_eq!(reparsed.namespace, schema.namespace);
    }

    #[test]
    fn test_parse_schema_json_malformed() {
        assert!(matches!(
            parse_schema_json("{ \"structs\": [ "),
            Err(SchemaError::Json(_))
        ));
    }

    #[test]
    fn test_parse_schema_json_dangling() {
        let json = r#"{ "structs": [
            { "name": "Monster", "fixed": false,
              "fields": [ { "name": "pos", "type": { "struct": 4 } } ] }
        ] }"#;

        assert!(matches!(
            parse_schema_json(json),
            Err(SchemaError::DanglingReference { index: 4, .. })
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(MONSTER_JSON.as_bytes())
            .expect("Failed to write schema");

        let schema = Schema::from_json_file(file.path()).expect("Failed to load");
        assert_eq!(schema.structs[1].name, "Monster");
    }

    #[test]
    fn test_from_json_file_missing() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("missing.json");

        assert!(matches!(
            Schema::from_json_file(&missing),
            Err(SchemaError::Io(_))
        ));
    }
}
