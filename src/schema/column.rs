use serde::{Deserialize, Serialize};

/// One column of a table schema.
///
/// A bare tag (`name: string`) or a descriptor carrying explicit flags
/// (`id: { type: number, primary: true }`). Tags are kept as written and
/// checked when the statement is built.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ColumnSchema {
    Tag(String),
    Descriptor(ColumnDescriptor),
}

impl ColumnSchema {
    pub fn tag(tag: impl Into<String>) -> Self {
        ColumnSchema::Tag(tag.into())
    }
}

impl From<ColumnDescriptor> for ColumnSchema {
    fn from(descriptor: ColumnDescriptor) -> Self {
        ColumnSchema::Descriptor(descriptor)
    }
}

impl From<&str> for ColumnSchema {
    fn from(tag: &str) -> Self {
        ColumnSchema::Tag(tag.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ColumnDescriptor {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub array: bool,
    /// Kept as a float so fractional sizes can be reported instead of
    /// failing deserialization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl ColumnDescriptor {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }
}

/// Normalized per-column flags handed to the converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnOptions {
    pub nullable: bool,
    pub primary: bool,
    pub array: bool,
    pub size: Option<i64>,
}

impl ColumnOptions {
    /// The size, when it is large enough to be rendered.
    pub fn rendered_size(&self) -> Option<i64> {
        self.size.filter(|size| *size > 1)
    }
}
