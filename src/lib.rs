//! Generate PostgreSQL `CREATE TABLE` statements from declarative column schemas.
//!
//! ```
//! use tabledef::render::sql::{CreateTable, CreateTableOptions};
//! use tabledef::schema::{ColumnDescriptor, TableSchema};
//!
//! let schema = TableSchema::new()
//!     .with_column("id", ColumnDescriptor::new("number").primary())
//!     .with_column("name", "string");
//! let sql = CreateTable::new("users", CreateTableOptions::new(schema))
//!     .get_sql()
//!     .unwrap();
//! assert_eq!(
//!     sql,
//!     "CREATE TABLE IF NOT EXISTS  users (id INTEGER PRIMARY KEY, name VARCHAR);"
//! );
//! ```

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod render;
pub mod schema;

pub use error::SchemaError;
pub use render::sql::{CreateTable, CreateTableOptions};
