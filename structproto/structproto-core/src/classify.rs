//! Field type classification.
//!
//! This is the only place that looks inside raw type descriptions. Everything
//! downstream works with the bare schema type name returned here.

use crate::feed::{SourceField, TypeKind};

/// Map a source field to its schema type name and repetition flag.
pub fn classify(field: &SourceField) -> (String, bool) {
    let raw = field.raw_type.as_str();
    match field.kind {
        TypeKind::Primitive => (normalize_primitive(raw).to_string(), false),
        TypeKind::Slice => {
            let elem = raw.trim_start_matches(['[', ']']);
            (bare_type_name(elem, raw), true)
        }
        TypeKind::Pointer | TypeKind::StructRef => (bare_type_name(raw, raw), false),
        TypeKind::Unknown => (raw.to_string(), false),
    }
}

/// Map host-language scalar spellings onto proto3 scalar names.
pub fn normalize_primitive(name: &str) -> &str {
    match name {
        "int" => "int64",
        "float32" => "float",
        "float64" => "double",
        other => other,
    }
}

/// `*example/in.EventField` -> `EventField`.
///
/// Falls back to `raw` when nothing is left after stripping.
fn bare_type_name(desc: &str, raw: &str) -> String {
    let last = desc.rsplit('.').next().unwrap_or(desc);
    let name = last.strip_prefix('*').unwrap_or(last);
    if name.is_empty() {
        return raw.to_string();
    }
    normalize_primitive(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: TypeKind, raw: &str) -> SourceField {
        SourceField::new("F", true, kind, raw)
    }

    #[test]
    fn bare_name_keeps_raw_when_empty() {
        assert_eq!(bare_type_name("pkg.", "pkg."), "pkg.");
        assert_eq!(bare_type_name("*", "*"), "*");
    }

    #[test]
    fn slice_of_slices_strips_all_markers() {
        assert_eq!(
            classify(&field(TypeKind::Slice, "[][]float64")),
            ("double".to_string(), true)
        );
    }
}
