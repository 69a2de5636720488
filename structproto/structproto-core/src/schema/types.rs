use std::ops::Deref;

/// One field of a proto message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    pub type_name: String,
    /// 1-based field number.
    pub order: u32,
    pub is_repeated: bool,
    /// Raw annotation text, empty when the source field had none.
    pub annotation: String,
}

/// A proto message projected from one source struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaMessage {
    pub name: String,
    pub fields: Vec<SchemaField>,
}

impl SchemaMessage {
    pub fn new(name: impl Into<String>, fields: Vec<SchemaField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// Messages sorted by name, ready for rendering.
///
/// The only constructor is [`SchemaDocument::assemble`], so a document is
/// always in render order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaDocument(Vec<SchemaMessage>);

impl SchemaDocument {
    /// Sort messages by name (ordinal, case-sensitive). Field order inside
    /// each message is left untouched.
    pub fn assemble(mut messages: Vec<SchemaMessage>) -> Self {
        messages.sort_by(|a, b| a.name.cmp(&b.name));
        Self(messages)
    }

    pub fn messages(&self) -> &[SchemaMessage] {
        &self.0
    }

    /// Whether any field in the document carries a non-empty annotation.
    pub fn has_annotations(&self) -> bool {
        self.0
            .iter()
            .flat_map(|m| m.fields.iter())
            .any(|f| !f.annotation.is_empty())
    }
}

impl Deref for SchemaDocument {
    type Target = [SchemaMessage];

    fn deref(&self) -> &Self::Target {
        self.messages()
    }
}

impl From<SchemaDocument> for Vec<SchemaMessage> {
    fn from(value: SchemaDocument) -> Self {
        value.0
    }
}
