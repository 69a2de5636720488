use std::{
    fmt::{Error, Result, Write as _},
    fs,
    path::Path,
};

use super::{SchemaDocument, SchemaField, SchemaMessage};
use crate::error::RenderError;

/// Import directive emitted when annotated fields are rendered.
pub const TAGGER_IMPORT: &str = "tagger/tagger.proto";

/// Render a document as proto3 text.
///
/// With `annotations` enabled, non-empty field annotations are emitted as
/// `[(tagger.tags) = "..."]` options and the tagger import is added when at
/// least one such option exists.
pub fn render_proto(
    document: &SchemaDocument,
    annotations: bool,
) -> std::result::Result<String, Error> {
    let mut out = String::new();
    write_proto(document, annotations, &mut out)?;
    Ok(out)
}

/// Render `document` and write it to `path`.
///
/// The text is fully rendered before the file is created.
pub fn write_proto_file(
    document: &SchemaDocument,
    annotations: bool,
    path: &Path,
) -> std::result::Result<(), RenderError> {
    let text = render_proto(document, annotations)?;
    fs::write(path, text).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_proto(document: &SchemaDocument, annotations: bool, out: &mut String) -> Result {
    writeln!(out, "syntax = \"proto3\";")?;
    writeln!(out, "package proto;")?;
    if annotations && document.has_annotations() {
        writeln!(out, "import \"{TAGGER_IMPORT}\";")?;
    }

    for message in document.iter() {
        writeln!(out)?;
        write_message(message, annotations, out)?;
    }
    Ok(())
}

fn write_message(message: &SchemaMessage, annotations: bool, out: &mut String) -> Result {
    writeln!(out, "message {} {{", message.name)?;
    for field in &message.fields {
        write_field(field, annotations, out)?;
    }
    writeln!(out, "}}")
}

fn write_field(field: &SchemaField, annotations: bool, out: &mut String) -> Result {
    out.push_str("  ");
    if field.is_repeated {
        out.push_str("repeated ");
    }
    write!(out, "{} {} = {}", field.type_name, field.name, field.order)?;
    if annotations && !field.annotation.is_empty() {
        write!(
            out,
            " [(tagger.tags) = \"{}\"]",
            escape_quotes(&field.annotation)
        )?;
    }
    writeln!(out, ";")
}

fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}
