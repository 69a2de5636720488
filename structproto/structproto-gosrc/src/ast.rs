//! AST for the subset of Go declarations the loader understands.

/// A type expression as written in a field or type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoType {
    /// Unqualified identifier: builtin (`int`) or package-local (`EventField`).
    Named(String),
    /// Identifier from an imported package, e.g. `time.Time`.
    Qualified { package: String, name: String },
    Pointer(Box<GoType>),
    Slice(Box<GoType>),
    /// Fixed-length array `[N]T`.
    Array { len: String, elem: Box<GoType> },
    /// Maps, channels, functions and interfaces, kept as written.
    Opaque(String),
}

/// One field of a struct declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoField {
    /// Embedded fields are named after their bare type name.
    pub name: String,
    pub ty: GoType,
    /// Struct tag with quotes removed.
    pub tag: Option<String>,
}

/// Right-hand side of a `type` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoTypeBody {
    Struct(Vec<GoField>),
    /// `type A B` or `type A = B`.
    Defined(GoType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoTypeDecl {
    pub name: String,
    pub body: GoTypeBody,
}

/// Declarations extracted from one `.go` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoFile {
    pub package: String,
    pub types: Vec<GoTypeDecl>,
}
