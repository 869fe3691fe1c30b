//! Type tags shared by column declarations and value classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A type tag.
///
/// Covers both the tags a column may be declared with and the tags
/// [`kind_of`](crate::render::value::kind_of) can report for a value, so that
/// the converter can reject the ones that have no column representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Number,
    Float,
    Date,
    Array,
    Undefined,
    Null,
    Function,
    Class,
    Symbol,
    Object,
    String,
    Boolean,
    BigInt,
}

/// Tags a column may be declared with.
pub const COLUMN_TYPES: [Kind; 7] = [
    Kind::String,
    Kind::Float,
    Kind::Number,
    Kind::Boolean,
    Kind::BigInt,
    Kind::Object,
    Kind::Date,
];

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Number => "number",
            Kind::Float => "float",
            Kind::Date => "date",
            Kind::Array => "array",
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Function => "function",
            Kind::Class => "class",
            Kind::Symbol => "symbol",
            Kind::Object => "object",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::BigInt => "bigint",
        }
    }

    /// Whether a column can be declared with this tag.
    pub fn is_column_type(&self) -> bool {
        COLUMN_TYPES.contains(self)
    }

    /// Tags that never map to a column type.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Kind::Function | Kind::Class | Kind::Symbol | Kind::Undefined | Kind::Null
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type tag \"{0}\"")]
pub struct ParseKindError(pub String);

impl FromStr for Kind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "number" => Kind::Number,
            "float" => Kind::Float,
            "date" => Kind::Date,
            "array" => Kind::Array,
            "undefined" => Kind::Undefined,
            "null" => Kind::Null,
            "function" => Kind::Function,
            "class" => Kind::Class,
            "symbol" => Kind::Symbol,
            "object" => Kind::Object,
            "string" => Kind::String,
            "boolean" => Kind::Boolean,
            "bigint" => Kind::BigInt,
            other => return Err(ParseKindError(other.to_string())),
        };
        Ok(kind)
    }
}
