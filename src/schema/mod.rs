//! Declarative table schemas: type tags, column entries and ordered tables

pub mod column;
pub mod kind;
pub mod table;

pub use column::{ColumnDescriptor, ColumnOptions, ColumnSchema};
pub use kind::{COLUMN_TYPES, Kind, ParseKindError};
pub use table::TableSchema;
