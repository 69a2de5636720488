//! Normalized type-introspection feed consumed by discovery.
//!
//! A [`TypeFeed`] produces a fully materialized list of [`SourcePackage`]s.
//! Each package lists its named type definitions in declaration order; struct
//! shaped definitions carry their fields as [`SourceField`]s whose type has
//! already been classified into a closed [`TypeKind`].

use crate::error::FeedError;

/// Shape of a field type as seen through the introspection boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Builtin scalar such as `int`, `string` or `float64`.
    Primitive,
    /// Reference to another type (`*T`).
    Pointer,
    /// Ordered homogeneous repetition (`[]T`).
    Slice,
    /// Named record type used by value.
    StructRef,
    /// Anything else (maps, channels, functions, ...).
    Unknown,
}

/// One field of a struct-shaped source type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceField {
    pub name: String,
    pub exported: bool,
    pub kind: TypeKind,
    /// Raw type description, e.g. `[]*example/in.EventField`.
    pub raw_type: String,
    /// Raw annotation text (struct tag), if any.
    pub annotation: Option<String>,
}

impl SourceField {
    pub fn new(
        name: impl Into<String>,
        exported: bool,
        kind: TypeKind,
        raw_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            exported,
            kind,
            raw_type: raw_type.into(),
            annotation: None,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}

/// Underlying shape of a named type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// Record of fields in declaration order.
    Struct(Vec<SourceField>),
    /// Any non-record underlying type.
    Other,
}

/// A named type definition declared by a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub name: String,
    pub exported: bool,
    pub shape: TypeShape,
}

impl TypeDef {
    pub fn new_struct(name: impl Into<String>, exported: bool, fields: Vec<SourceField>) -> Self {
        Self {
            name: name.into(),
            exported,
            shape: TypeShape::Struct(fields),
        }
    }

    pub fn new_other(name: impl Into<String>, exported: bool) -> Self {
        Self {
            name: name.into(),
            exported,
            shape: TypeShape::Other,
        }
    }

    /// Fields of a struct-shaped definition, `None` otherwise.
    pub fn struct_fields(&self) -> Option<&[SourceField]> {
        match &self.shape {
            TypeShape::Struct(fields) => Some(fields),
            TypeShape::Other => None,
        }
    }
}

/// Type definitions of one package.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourcePackage {
    /// Package identifier used in diagnostics (usually its path).
    pub path: String,
    pub types: Vec<TypeDef>,
}

impl SourcePackage {
    pub fn new(path: impl Into<String>, types: Vec<TypeDef>) -> Self {
        Self {
            path: path.into(),
            types,
        }
    }
}

/// Supplier of the normalized type feed.
///
/// Implementations load every requested package up front; any package that
/// fails to load must be reported through [`FeedError`] instead of being
/// silently dropped.
pub trait TypeFeed {
    fn load(&self) -> Result<Vec<SourcePackage>, FeedError>;
}

impl TypeFeed for Vec<SourcePackage> {
    fn load(&self) -> Result<Vec<SourcePackage>, FeedError> {
        Ok(self.clone())
    }
}
