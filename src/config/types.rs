use clap::Args;
use serde::{Deserialize, Serialize};

use crate::render::sql::{CreateTable, CreateTableOptions};
use crate::schema::TableSchema;

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigInput {
    pub tables: Option<Vec<TableInput>>,
    pub output: Option<OutputInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub tables: Vec<TableDefinition>,
    pub output: Output,
}

// Table configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TableInput {
    pub name: String,
    pub exists: Option<bool>,
    pub schema: Option<TableSchema>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub options: CreateTableOptions,
}

impl TableDefinition {
    pub fn create_table(&self) -> CreateTable {
        CreateTable::new(self.name.clone(), self.options.clone())
    }
}

// Output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputInput {
    pub file: Option<String>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Output {
    pub file: Option<String>,
    pub format: OutputFormat,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One statement per line
    #[default]
    Sql,
    /// JSON array of {table, sql} objects
    Json,
}

#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    #[arg(long, value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Save SQL output to file")]
    pub output_sql: Option<String>,
}

impl From<OutputArgs> for OutputInput {
    fn from(args: OutputArgs) -> Self {
        Self {
            file: args.output_sql,
            format: args.format,
        }
    }
}
