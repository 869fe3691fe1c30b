//! CREATE TABLE statements built from a declarative column schema

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::column::convert_type_to_sql;
use crate::error::{Result, SchemaError};
use crate::schema::{ColumnDescriptor, ColumnOptions, ColumnSchema, Kind, TableSchema};

/// Rendered between `CREATE TABLE ` and the table name. The trailing double
/// space is part of the output format consumers already depend on.
const IF_NOT_EXISTS: &str = "IF NOT EXISTS  ";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreateTableOptions {
    /// Emit `IF NOT EXISTS`.
    #[serde(default = "default_exists")]
    pub exists: bool,
    #[serde(default)]
    pub schema: TableSchema,
}

fn default_exists() -> bool {
    true
}

impl Default for CreateTableOptions {
    fn default() -> Self {
        Self {
            exists: default_exists(),
            schema: TableSchema::default(),
        }
    }
}

impl CreateTableOptions {
    pub fn new(schema: TableSchema) -> Self {
        Self {
            schema,
            ..Self::default()
        }
    }

    pub fn without_exists_check(mut self) -> Self {
        self.exists = false;
        self
    }
}

/// A CREATE TABLE statement for one table.
///
/// Nothing is validated up front: [`CreateTable::get_sql`] checks the schema
/// and renders from scratch on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    table: String,
    options: CreateTableOptions,
}

impl CreateTable {
    pub fn new(table: impl Into<String>, options: CreateTableOptions) -> Self {
        Self {
            table: table.into(),
            options,
        }
    }

    /// Identifies the statement; this is the table name as given.
    pub fn id(&self) -> &str {
        &self.table
    }

    pub fn options(&self) -> &CreateTableOptions {
        &self.options
    }

    /// Render the statement, failing on the first invalid column.
    pub fn get_sql(&self) -> Result<String> {
        let mut column_definitions = Vec::with_capacity(self.options.schema.len());

        for (name, entry) in &self.options.schema {
            let col_def = match entry {
                ColumnSchema::Descriptor(descriptor) => render_descriptor(name, descriptor)?,
                ColumnSchema::Tag(tag) => render_tag(name, tag)?,
            };
            column_definitions.push(col_def);
        }

        let exists = if self.options.exists { IF_NOT_EXISTS } else { "" };
        let columns = if column_definitions.is_empty() {
            String::new()
        } else {
            format!(" ({})", column_definitions.join(", "))
        };

        let sql = format!("CREATE TABLE {}{}{};", exists, self.table, columns);
        debug!("Rendered table {}: {}", self.table, sql);
        Ok(sql)
    }
}

fn render_descriptor(name: &str, descriptor: &ColumnDescriptor) -> Result<String> {
    let raw_kind = descriptor
        .kind
        .as_deref()
        .ok_or_else(|| SchemaError::MissingType {
            column: name.to_string(),
        })?;

    let kind = parse_column_type(raw_kind).ok_or_else(|| SchemaError::UnsupportedType {
        column: name.to_string(),
        kind: raw_kind.to_string(),
    })?;

    let mut options = ColumnOptions {
        nullable: descriptor.nullable,
        primary: descriptor.primary,
        array: descriptor.array,
        size: None,
    };

    if let Some(size) = descriptor.size {
        if kind != Kind::String && !descriptor.array {
            return Err(SchemaError::SizeNotAllowed {
                column: name.to_string(),
                kind: raw_kind.to_string(),
            });
        }
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if !size.is_finite()
            || size.fract() != 0.0
            || size >= i64::MAX as f64
            || size < i64::MIN as f64
        {
            return Err(SchemaError::InvalidSize {
                column: name.to_string(),
                size,
            });
        }
        options.size = Some(size as i64);
    }

    convert_type_to_sql(name, kind, &options)
}

fn render_tag(name: &str, tag: &str) -> Result<String> {
    let kind = parse_column_type(tag).ok_or_else(|| SchemaError::InvalidType {
        column: name.to_string(),
        kind: tag.to_string(),
    })?;

    convert_type_to_sql(name, kind, &ColumnOptions::default())
}

fn parse_column_type(raw: &str) -> Option<Kind> {
    raw.parse::<Kind>().ok().filter(Kind::is_column_type)
}
