use thiserror::Error;

/// Reasons a column schema cannot be turned into SQL.
///
/// Every variant names the offending column so a caller can point the user
/// at the entry that needs fixing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("column \"{column}\" is missing a type")]
    MissingType { column: String },

    #[error("column \"{column}\" has unsupported type \"{kind}\"")]
    UnsupportedType { column: String, kind: String },

    #[error("column \"{column}\" has invalid type \"{kind}\"")]
    InvalidType { column: String, kind: String },

    #[error("column \"{column}\" of type \"{kind}\" does not accept a size")]
    SizeNotAllowed { column: String, kind: String },

    #[error("column \"{column}\" has invalid size {size}, expected a whole number within the 64-bit integer range")]
    InvalidSize { column: String, size: f64 },

    #[error("column \"{column}\": arrays are not supported for boolean columns")]
    BooleanArray { column: String },

    #[error("column \"{column}\": a primary key cannot be an array")]
    PrimaryKeyArray { column: String },

    #[error("column \"{column}\": a primary key cannot be nullable")]
    PrimaryKeyNullable { column: String },
}

impl SchemaError {
    /// Name of the column the error was raised for.
    pub fn column(&self) -> &str {
        match self {
            SchemaError::MissingType { column }
            | SchemaError::UnsupportedType { column, .. }
            | SchemaError::InvalidType { column, .. }
            | SchemaError::SizeNotAllowed { column, .. }
            | SchemaError::InvalidSize { column, .. }
            | SchemaError::BooleanArray { column }
            | SchemaError::PrimaryKeyArray { column }
            | SchemaError::PrimaryKeyNullable { column } => column,
        }
    }
}

pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
