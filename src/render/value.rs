//! SQL literal rendering for in-memory values

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde_json::{Map, Value};

use crate::schema::Kind;

/// Format used for date literals, e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.
pub const UTC_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Integer(i64),
    BigInt(i128),
    Float(f64),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<SqlValue>),
    Object(Map<String, Value>),
}

impl From<Value> for SqlValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SqlValue::Null,
            Value::Bool(b) => SqlValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SqlValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    SqlValue::BigInt(i128::from(u))
                } else {
                    SqlValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => SqlValue::String(s),
            Value::Array(items) => SqlValue::Array(items.into_iter().map(SqlValue::from).collect()),
            Value::Object(map) => SqlValue::Object(map),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::String(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::String(s)
    }
}

impl From<i64> for SqlValue {
    fn from(i: i64) -> Self {
        SqlValue::Integer(i)
    }
}

impl From<i128> for SqlValue {
    fn from(i: i128) -> Self {
        SqlValue::BigInt(i)
    }
}

impl From<f64> for SqlValue {
    fn from(f: f64) -> Self {
        SqlValue::Float(f)
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(date: DateTime<Utc>) -> Self {
        SqlValue::Date(date)
    }
}

impl<T: Into<SqlValue>> From<Vec<T>> for SqlValue {
    fn from(items: Vec<T>) -> Self {
        SqlValue::Array(items.into_iter().map(Into::into).collect())
    }
}

/// Wrap text in single quotes.
///
/// Embedded quotes are passed through untouched, so the result is only safe
/// for trusted input.
pub fn quote_literal(s: &str) -> String {
    format!("'{}'", s)
}

/// Render a value as a SQL literal.
pub fn escape(value: &SqlValue) -> String {
    match value {
        SqlValue::String(s) => quote_literal(s),
        // A string-keyed map always serializes
        SqlValue::Object(map) => quote_literal(&serde_json::to_string(map).unwrap_or_default()),
        SqlValue::Date(date) => quote_literal(&date.format(UTC_DATE_FORMAT).to_string()),
        SqlValue::Array(items) => convert_array_to_sql(items),
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Bool(b) => b.to_string(),
        SqlValue::Integer(i) => i.to_string(),
        SqlValue::BigInt(i) => i.to_string(),
        SqlValue::Float(f) => format_float(*f),
    }
}

/// Plain `f64` formatting, except infinities. Very large and very small
/// magnitudes are written out in full (`1e21` renders as
/// `1000000000000000000000`, `1e-7` as `0.0000001`) rather than in exponent
/// notation; PostgreSQL reads both forms.
fn format_float(f: f64) -> String {
    if f.is_infinite() {
        if f.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        f.to_string()
    }
}

/// Render values as a PostgreSQL array constructor: `ARRAY[1, 2, 3]`.
pub fn convert_array_to_sql(values: &[SqlValue]) -> String {
    format!("ARRAY[{}]", values.iter().map(escape).join(", "))
}

/// Classify a value into the tag a column holding it would be declared with.
///
/// Whole floats count as `number`, mirroring how integers and integral
/// floating point values are indistinguishable once serialized.
pub fn kind_of(value: &SqlValue) -> Kind {
    match value {
        SqlValue::Null => Kind::Null,
        SqlValue::Bool(_) => Kind::Boolean,
        SqlValue::Integer(_) => Kind::Number,
        SqlValue::BigInt(_) => Kind::BigInt,
        SqlValue::Float(f) if f.is_finite() && f.fract() == 0.0 => Kind::Number,
        SqlValue::Float(_) => Kind::Float,
        SqlValue::String(_) => Kind::String,
        SqlValue::Date(_) => Kind::Date,
        SqlValue::Array(_) => Kind::Array,
        SqlValue::Object(_) => Kind::Object,
    }
}
