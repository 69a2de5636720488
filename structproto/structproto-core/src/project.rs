//! Projection of source fields onto schema fields.

use crate::{classify::classify, feed::SourceField, schema::SchemaField};

/// Build the schema field for `field`, numbered `order`.
///
/// Returns `None` for unexported fields; they must not consume an order slot.
pub fn project_field(field: &SourceField, order: u32) -> Option<SchemaField> {
    if !field.exported {
        return None;
    }
    let (type_name, is_repeated) = classify(field);
    Some(SchemaField {
        name: schema_field_name(&field.name),
        type_name,
        order,
        is_repeated,
        annotation: field.annotation.clone().unwrap_or_default(),
    })
}

/// Lower-camel-case a source field name.
///
/// Two-character names are lower-cased entirely (`ID` -> `id`); otherwise only
/// the first character is (`EventFieldItemID` -> `eventFieldItemID`).
pub fn schema_field_name(name: &str) -> String {
    if name.chars().count() == 2 {
        return name.to_lowercase();
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
