//! Mapping from schema types to C++ type names.

use flatgen_schema::{ScalarType, Schema, Type};

/// Maps schema types to the C++ spellings used by generated code.
///
/// The mapper only reads the schema to name referenced structs and tables.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    schema: &'a Schema,
}

impl<'a> TypeMapper<'a> {
    /// Creates a new type mapper.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Returns the C++ type of a scalar.
    ///
    /// Booleans are stored as a byte.
    #[must_use]
    pub const fn basic(scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::Bool | ScalarType::UInt8 => "uint8_t",
            ScalarType::Int8 => "int8_t",
            ScalarType::Int16 => "int16_t",
            ScalarType::UInt16 => "uint16_t",
            ScalarType::Int32 => "int32_t",
            ScalarType::UInt32 => "uint32_t",
            ScalarType::Int64 => "int64_t",
            ScalarType::UInt64 => "uint64_t",
            ScalarType::Float32 => "float",
            ScalarType::Float64 => "double",
        }
    }

    /// Returns the pointee type for indirect and inline struct types.
    #[must_use]
    pub fn pointer(&self, ty: &Type) -> String {
        match ty {
            Type::String => "fb_string".to_string(),
            Type::Vector(element) => format!("fb_vector<{}>", self.wire(element, "")),
            Type::Struct(id) | Type::Table(id) => self.schema.struct_def(*id).name.clone(),
            Type::Union(_) | Type::Scalar(_) => "void".to_string(),
        }
    }

    /// Returns the type used when building a buffer.
    ///
    /// `postfix` is appended to scalar and offset types; struct pointers
    /// already end in `*`.
    #[must_use]
    pub fn wire(&self, ty: &Type, postfix: &str) -> String {
        match ty {
            Type::Scalar(scalar) => format!("{}{}", Self::basic(*scalar), postfix),
            Type::Struct(_) => format!("const {} *", self.pointer(ty)),
            Type::String | Type::Vector(_) | Type::Table(_) | Type::Union(_) => {
                format!("fb_offset<{}>{}", self.pointer(ty), postfix)
            }
        }
    }

    /// Returns the type used when reading a buffer.
    ///
    /// Scalars get `after_basic` appended; everything else is wrapped in
    /// `before_ptr` and `after_ptr`.
    #[must_use]
    pub fn get(&self, ty: &Type, after_basic: &str, before_ptr: &str, after_ptr: &str) -> String {
        match ty {
            Type::Scalar(scalar) => format!("{}{}", Self::basic(*scalar), after_basic),
            _ => format!("{}{}{}", before_ptr, self.pointer(ty), after_ptr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatgen_schema::{EnumDef, StructDef};

    fn create_test_schema() -> Schema {
        let mut schema = Schema::default();
        schema.add_struct(StructDef::fixed("Vec3", 4, 12));
        schema.add_struct(StructDef::table("Monster"));
        schema.add_enum(EnumDef::new("Equipment").with_value("NONE", 0));
        schema
    }

    #[test]
    fn test_basic_types() {
        assert_eq!(TypeMapper::basic(ScalarType::Bool), "uint8_t");
        assert_eq!(TypeMapper::basic(ScalarType::Int8), "int8_t");
        assert_eq!(TypeMapper::basic(ScalarType::UInt16), "uint16_t");
        assert_eq!(TypeMapper::basic(ScalarType::Int64), "int64_t");
        assert_eq!(TypeMapper::basic(ScalarType::Float32), "float");
        assert_eq!(TypeMapper::basic(ScalarType::Float64), "double");
    }

    #[test]
    fn test_pointer_types() {
        let schema = create_test_schema();
        let vec3 = schema.find_struct("Vec3").unwrap();
        let monster = schema.find_struct("Monster").unwrap();
        let equipment = schema.find_enum("Equipment").unwrap();
        let mapper = TypeMapper::new(&schema);

        assert_eq!(mapper.pointer(&Type::String), "fb_string");
        assert_eq!(mapper.pointer(&Type::Struct(vec3)), "Vec3");
        assert_eq!(mapper.pointer(&Type::Table(monster)), "Monster");
        assert_eq!(mapper.pointer(&Type::Union(equipment)), "void");
        assert_eq!(
            mapper.pointer(&Type::vector_of(ScalarType::UInt8.into())),
            "fb_vector<uint8_t>"
        );
        assert_eq!(
            mapper.pointer(&Type::vector_of(Type::Table(monster))),
            "fb_vector<fb_offset<Monster>>"
        );
        assert_eq!(
            mapper.pointer(&Type::vector_of(Type::Struct(vec3))),
            "fb_vector<const Vec3 *>"
        );
    }

    #[test]
    fn test_wire_types() {
        let schema = create_test_schema();
        let vec3 = schema.find_struct("Vec3").unwrap();
        let monster = schema.find_struct("Monster").unwrap();
        let mapper = TypeMapper::new(&schema);

        assert_eq!(mapper.wire(&ScalarType::Int16.into(), " "), "int16_t ");
        assert_eq!(mapper.wire(&Type::Struct(vec3), " "), "const Vec3 *");
        assert_eq!(mapper.wire(&Type::Table(monster), ""), "fb_offset<Monster>");
        assert_eq!(mapper.wire(&Type::String, " "), "fb_offset<fb_string> ");
    }

    #[test]
    fn test_get_types() {
        let schema = create_test_schema();
        let vec3 = schema.find_struct("Vec3").unwrap();
        let mapper = TypeMapper::new(&schema);

        assert_eq!(
            mapper.get(&ScalarType::Float32.into(), " ", "const ", " *"),
            "float "
        );
        assert_eq!(
            mapper.get(&Type::Struct(vec3), " ", "const ", " &"),
            "const Vec3 &"
        );
        assert_eq!(
            mapper.get(&Type::String, "", "const ", " *"),
            "const fb_string *"
        );
    }
}
