//! Schema type definitions.
//!
//! This module contains the resolved schema graph handed over by the IDL
//! parser: scalar and compound field types, fields, structs and tables,
//! enums, and the namespace of the module. Structs and tables live in an
//! arena inside [`Schema`] and reference each other by [`StructId`], so
//! mutually recursive and self-referential definitions are plain data.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Size in bytes of an offset into a buffer (`uoffset_t`).
pub const OFFSET_SIZE: usize = 4;

/// Size in bytes of the largest scalar type.
pub const LARGEST_SCALAR_SIZE: usize = 8;

/// Stable identifier of a struct or table inside a [`Schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructId(pub usize);

/// Stable identifier of an enum (or union) inside a [`Schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnumId(pub usize);

/// Complete resolved schema for one module.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Namespace wrapping every generated declaration.
    #[serde(default)]
    pub namespace: Namespace,
    /// Enum arena, indexed by [`EnumId`].
    #[serde(default)]
    pub enums: Vec<EnumDef>,
    /// Struct and table arena, indexed by [`StructId`].
    #[serde(default)]
    pub structs: Vec<StructDef>,
    /// Root table of the module, if any.
    #[serde(default)]
    pub root: Option<StructId>,
}

impl Schema {
    /// Creates a new empty schema in the given namespace.
    #[must_use]
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            ..Self::default()
        }
    }

    /// Adds an enum definition and returns its id.
    pub fn add_enum(&mut self, enum_def: EnumDef) -> EnumId {
        self.enums.push(enum_def);
        EnumId(self.enums.len() - 1)
    }

    /// Adds a struct or table definition and returns its id.
    ///
    /// Definitions may be added with an empty field list and filled in
    /// afterwards through [`Schema::struct_def_mut`], which is how cyclic
    /// references are built.
    pub fn add_struct(&mut self, struct_def: StructDef) -> StructId {
        self.structs.push(struct_def);
        StructId(self.structs.len() - 1)
    }

    /// Returns the struct or table with the given id.
    #[must_use]
    pub fn struct_def(&self, id: StructId) -> &StructDef {
        &self.structs[id.0]
    }

    /// Returns the struct or table with the given id, mutably.
    pub fn struct_def_mut(&mut self, id: StructId) -> &mut StructDef {
        &mut self.structs[id.0]
    }

    /// Returns the enum with the given id.
    #[must_use]
    pub fn enum_def(&self, id: EnumId) -> &EnumDef {
        &self.enums[id.0]
    }

    /// Returns the enum with the given id, mutably.
    pub fn enum_def_mut(&mut self, id: EnumId) -> &mut EnumDef {
        &mut self.enums[id.0]
    }

    /// Iterates over all struct/table ids in declaration order.
    pub fn struct_ids(&self) -> impl Iterator<Item = StructId> + use<> {
        (0..self.structs.len()).map(StructId)
    }

    /// Iterates over all enum ids in declaration order.
    pub fn enum_ids(&self) -> impl Iterator<Item = EnumId> + use<> {
        (0..self.enums.len()).map(EnumId)
    }

    /// Looks up a struct or table by name.
    #[must_use]
    pub fn find_struct(&self, name: &str) -> Option<StructId> {
        self.structs.iter().position(|s| s.name == name).map(StructId)
    }

    /// Looks up an enum by name.
    #[must_use]
    pub fn find_enum(&self, name: &str) -> Option<EnumId> {
        self.enums.iter().position(|e| e.name == name).map(EnumId)
    }

    /// Marks every definition as already generated.
    ///
    /// Used for schemas pulled in from another module: their declarations
    /// live in that module's output and must not be emitted again.
    pub fn mark_imported(&mut self) {
        self.enums.iter_mut().for_each(|e| e.generated = true);
        self.structs.iter_mut().for_each(|s| s.generated = true);
    }
}

impl Index<StructId> for Schema {
    type Output = StructDef;

    fn index(&self, id: StructId) -> &StructDef {
        self.struct_def(id)
    }
}

impl IndexMut<StructId> for Schema {
    fn index_mut(&mut self, id: StructId) -> &mut StructDef {
        self.struct_def_mut(id)
    }
}

impl Index<EnumId> for Schema {
    type Output = EnumDef;

    fn index(&self, id: EnumId) -> &EnumDef {
        self.enum_def(id)
    }
}

impl IndexMut<EnumId> for Schema {
    fn index_mut(&mut self, id: EnumId) -> &mut EnumDef {
        self.enum_def_mut(id)
    }
}

/// Dot-separated scope path applied to the whole generated unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace {
    /// Scope components, outermost first.
    pub components: Vec<String>,
}

impl Namespace {
    /// Parses a namespace from its dotted form, e.g. `"game.units"`.
    ///
    /// Empty components are dropped, so `""` yields the global namespace.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Self {
            components: s
                .split('.')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Returns true for the global namespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the dotted form of the namespace.
    #[must_use]
    pub fn dotted(&self) -> String {
        self.components.join(".")
    }
}

/// Scalar types that are stored inline in structs and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// Boolean, stored as one byte.
    Bool,
    /// Signed 8-bit integer.
    Int8,
    /// Unsigned 8-bit integer.
    UInt8,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    UInt64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
}

impl ScalarType {
    /// Returns the size of the scalar in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::Bool | Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 => 8,
        }
    }

    /// Returns the IDL spelling of the scalar.
    #[must_use]
    pub const fn idl_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "byte",
            Self::UInt8 => "ubyte",
            Self::Int16 => "short",
            Self::UInt16 => "ushort",
            Self::Int32 => "int",
            Self::UInt32 => "uint",
            Self::Int64 => "long",
            Self::UInt64 => "ulong",
            Self::Float32 => "float",
            Self::Float64 => "double",
        }
    }

    /// Returns true if this is a floating point type.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

/// Type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// Inline scalar.
    Scalar(ScalarType),
    /// Offset to a string.
    String,
    /// Offset to a vector of the element type.
    Vector(Box<Type>),
    /// Fixed-size struct, stored inline.
    Struct(StructId),
    /// Offset to a table.
    Table(StructId),
    /// Offset to a union member; the enum lists the member types.
    Union(EnumId),
}

impl Type {
    /// Returns true for scalar types.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns true for inline fixed-size structs.
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// Returns the size class used when grouping table fields by size.
    ///
    /// Scalars report their own size. Everything else, including inline
    /// structs, is grouped with the offsets.
    #[must_use]
    pub const fn slot_size(&self) -> usize {
        match self {
            Self::Scalar(scalar) => scalar.size(),
            Self::String | Self::Vector(_) | Self::Struct(_) | Self::Table(_) | Self::Union(_) => {
                OFFSET_SIZE
            }
        }
    }

    /// Shorthand for `Type::Vector(Box::new(element))`.
    #[must_use]
    pub fn vector_of(element: Type) -> Self {
        Self::Vector(Box::new(element))
    }
}

impl From<ScalarType> for Type {
    fn from(scalar: ScalarType) -> Self {
        Self::Scalar(scalar)
    }
}

fn default_constant() -> String {
    "0".to_string()
}

/// Field of a struct or table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field type.
    #[serde(rename = "type")]
    pub ty: Type,
    /// Default value in source form; only meaningful for scalars.
    #[serde(default = "default_constant")]
    pub default_value: String,
    /// Table: field slot id. Struct: byte position inside the struct.
    #[serde(default)]
    pub offset: usize,
    /// Bit `i` set means an `8 << i` bit filler member follows the field.
    #[serde(default)]
    pub padding: u8,
    /// Deprecated fields keep their slot but are never accessible.
    #[serde(default)]
    pub deprecated: bool,
    /// Documentation comment.
    #[serde(default)]
    pub doc_comment: Option<String>,
}

impl Field {
    /// Creates a new field with a zero default, offset and padding.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default_value: default_constant(),
            offset: 0,
            padding: 0,
            deprecated: false,
            doc_comment: None,
        }
    }

    /// Sets the slot id (tables) or byte position (structs).
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Sets the padding bitmask.
    #[must_use]
    pub fn with_padding(mut self, padding: u8) -> Self {
        self.padding = padding;
        self
    }

    /// Marks the field deprecated.
    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Attaches a documentation comment.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }
}

const fn default_true() -> bool {
    true
}

/// Struct (fixed layout) or table (slot-indexed) definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDef {
    /// Definition name.
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// True for fixed-size structs, false for tables.
    pub fixed: bool,
    /// Required alignment of a struct.
    #[serde(default = "default_minalign")]
    pub minalign: usize,
    /// Total size of a struct including filler.
    #[serde(default)]
    pub bytesize: usize,
    /// Tables only: emit factory fields grouped by size.
    #[serde(default = "default_true")]
    pub sortbysize: bool,
    /// Set once the definition has been emitted (or was imported).
    #[serde(default)]
    pub generated: bool,
    /// Documentation comment.
    #[serde(default)]
    pub doc_comment: Option<String>,
}

const fn default_minalign() -> usize {
    1
}

impl StructDef {
    /// Creates an empty fixed-size struct.
    #[must_use]
    pub fn fixed(name: impl Into<String>, minalign: usize, bytesize: usize) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            fixed: true,
            minalign,
            bytesize,
            sortbysize: false,
            generated: false,
            doc_comment: None,
        }
    }

    /// Creates an empty table.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            fixed: false,
            minalign: 1,
            bytesize: 0,
            sortbysize: true,
            generated: false,
            doc_comment: None,
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Keeps declared order in the factory function.
    #[must_use]
    pub fn original_order(mut self) -> Self {
        self.sortbysize = false;
        self
    }

    /// Attaches a documentation comment.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    /// Iterates over the fields that still have an accessor.
    pub fn live_fields(&self) -> impl DoubleEndedIterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.deprecated)
    }
}

/// Enum definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
    /// Values in ascending order.
    pub values: Vec<EnumVal>,
    /// Set once the definition has been emitted (or was imported).
    #[serde(default)]
    pub generated: bool,
    /// Documentation comment.
    #[serde(default)]
    pub doc_comment: Option<String>,
}

impl EnumDef {
    /// Creates a new enum with no values.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            generated: false,
            doc_comment: None,
        }
    }

    /// Appends a value.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.push(EnumVal::new(name, value));
        self
    }

    /// Attaches a documentation comment.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    /// Looks up a value by name.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&EnumVal> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// Named enum value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumVal {
    /// Value name.
    pub name: String,
    /// Stored integer.
    pub value: i64,
    /// Documentation comment.
    #[serde(default)]
    pub doc_comment: Option<String>,
}

impl EnumVal {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            doc_comment: None,
        }
    }
}
