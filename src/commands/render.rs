//! tabledef render - Print CREATE TABLE statements for configured tables

use crate::config::{Config, OutputFormat, TableDefinition};
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTable {
    pub table: String,
    pub sql: String,
}

/// Pick the tables to render, keeping config order.
pub fn select_tables<'a>(
    config: &'a Config,
    table: Option<&str>,
) -> Result<Vec<&'a TableDefinition>> {
    match table {
        Some(name) => {
            let found = config
                .tables
                .iter()
                .find(|t| t.name == name)
                .ok_or_else(|| anyhow!("Table '{}' is not defined in the configuration", name))?;
            Ok(vec![found])
        }
        None => Ok(config.tables.iter().collect()),
    }
}

pub fn render_tables(config: &Config, table: Option<&str>) -> Result<Vec<RenderedTable>> {
    select_tables(config, table)?
        .into_iter()
        .map(|definition| -> Result<RenderedTable> {
            let sql = definition
                .create_table()
                .get_sql()
                .with_context(|| format!("Failed to render table '{}'", definition.name))?;
            Ok(RenderedTable {
                table: definition.name.clone(),
                sql,
            })
        })
        .collect()
}

pub fn format_output(rendered: &[RenderedTable], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Sql => Ok(rendered
            .iter()
            .map(|r| r.sql.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rendered)?),
    }
}

pub fn cmd_render(config: &Config, table: Option<&str>) -> Result<()> {
    let rendered = render_tables(config, table)?;
    if rendered.is_empty() {
        eprintln!("No tables configured.");
    }

    let output = format_output(&rendered, config.output.format)?;

    match &config.output.file {
        Some(path) => {
            std::fs::write(path, format!("{}\n", output))
                .with_context(|| format!("Failed to write SQL output to {}", path))?;
            info!("Wrote {} statement(s) to {}", rendered.len(), path);
        }
        None => println!("{}", output),
    }

    Ok(())
}
