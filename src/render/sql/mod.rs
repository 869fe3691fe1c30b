//! Shared SQL rendering functions
//!
//! Column fragments and the statements assembled from them.

pub mod column;
pub mod table;

// Re-export commonly used functions
pub use column::convert_type_to_sql;
pub use table::{CreateTable, CreateTableOptions};
