//! Package-level resolution: turns parsed declarations into a [`SourcePackage`].
//!
//! Field types are classified by their underlying type, the way Go's type
//! checker reports them:
//!
//! 1. **Builtin** names are primitives described by their own spelling.
//! 2. **Local** names are followed through their declarations until a struct,
//!    builtin, slice, pointer or opaque type is reached.
//! 3. **Qualified** names (`time.Time`) cannot be inspected and are assumed
//!    to be struct references.
//! 4. Anything unresolved is reported as [`TypeKind::Unknown`].

use std::collections::HashMap;

use structproto_core::{SourceField, SourcePackage, TypeDef, TypeKind};

use crate::{
    ast::{GoField, GoType, GoTypeBody, GoTypeDecl},
    lex::is_exported,
};

const MAX_DEFINITION_DEPTH: usize = 32;

const BUILTIN_TYPES: &[&str] = &[
    "bool",
    "string",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "float32",
    "float64",
    "complex64",
    "complex128",
    "byte",
    "rune",
];

struct PackageScope<'a> {
    name: &'a str,
    decls: HashMap<&'a str, &'a GoTypeBody>,
}

/// Resolve the declarations of one Go package (all files merged, in file order).
///
/// `path` identifies the package in diagnostics; `name` is its `package` clause.
pub fn resolve_package(path: &str, name: &str, decls: &[GoTypeDecl]) -> SourcePackage {
    let mut scope = PackageScope {
        name,
        decls: HashMap::new(),
    };
    for decl in decls {
        scope.decls.entry(decl.name.as_str()).or_insert(&decl.body);
    }

    let types = decls
        .iter()
        .map(|decl| {
            let exported = is_exported(&decl.name);
            match scope.underlying_struct(&decl.body, 0) {
                Some(fields) => TypeDef::new_struct(
                    decl.name.clone(),
                    exported,
                    fields.iter().map(|f| scope.source_field(f)).collect(),
                ),
                None => TypeDef::new_other(decl.name.clone(), exported),
            }
        })
        .collect();

    SourcePackage::new(path, types)
}

impl<'a> PackageScope<'a> {
    /// Fields of the struct `body` ultimately denotes, if any.
    fn underlying_struct(&self, body: &'a GoTypeBody, depth: usize) -> Option<&'a [GoField]> {
        if depth > MAX_DEFINITION_DEPTH {
            return None;
        }
        match body {
            GoTypeBody::Struct(fields) => Some(fields.as_slice()),
            GoTypeBody::Defined(GoType::Named(name)) => {
                let next = self.decls.get(name.as_str()).copied()?;
                self.underlying_struct(next, depth + 1)
            }
            GoTypeBody::Defined(_) => None,
        }
    }

    fn source_field(&self, field: &GoField) -> SourceField {
        let (kind, raw) = self.classify(&field.ty, 0);
        let source = SourceField::new(field.name.clone(), is_exported(&field.name), kind, raw);
        match &field.tag {
            Some(tag) => source.with_annotation(tag.clone()),
            None => source,
        }
    }

    /// Canonical text of `ty`; package-local names are qualified with the
    /// package name, builtins and unresolved names are left bare.
    fn describe(&self, ty: &GoType) -> String {
        match ty {
            GoType::Named(name) if self.decls.contains_key(name.as_str()) => {
                format!("{}.{name}", self.name)
            }
            GoType::Named(name) => name.clone(),
            GoType::Qualified { package, name } => format!("{package}.{name}"),
            GoType::Pointer(inner) => format!("*{}", self.describe(inner)),
            GoType::Slice(inner) => format!("[]{}", self.describe(inner)),
            GoType::Array { len, elem } => format!("[{len}]{}", self.describe(elem)),
            GoType::Opaque(text) => text.clone(),
        }
    }

    fn classify(&self, ty: &GoType, depth: usize) -> (TypeKind, String) {
        if depth > MAX_DEFINITION_DEPTH {
            return (TypeKind::Unknown, self.describe(ty));
        }
        match ty {
            GoType::Pointer(_) => (TypeKind::Pointer, self.describe(ty)),
            GoType::Slice(_) => (TypeKind::Slice, self.describe(ty)),
            GoType::Array { .. } | GoType::Opaque(_) => {
                (TypeKind::Unknown, self.describe(ty))
            }
            GoType::Qualified { .. } => (TypeKind::StructRef, self.describe(ty)),
            GoType::Named(name) if BUILTIN_TYPES.contains(&name.as_str()) => {
                (TypeKind::Primitive, name.clone())
            }
            GoType::Named(name) => match self.decls.get(name.as_str()) {
                Some(GoTypeBody::Struct(_)) => (TypeKind::StructRef, self.describe(ty)),
                Some(GoTypeBody::Defined(inner)) => self.classify(inner, depth + 1),
                None => (TypeKind::Unknown, name.clone()),
            },
        }
    }
}
