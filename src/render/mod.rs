pub mod sql;
pub mod value;

pub use value::{SqlValue, convert_array_to_sql, escape, kind_of, quote_literal};
