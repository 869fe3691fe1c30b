use crate::config::{merge::Merge, types::*};
use crate::constants::OUTPUT_FILE_ENV;
use crate::render::sql::CreateTableOptions;
use anyhow::{Result, anyhow};
use std::collections::HashSet;

pub struct ConfigBuilder {
    config_input: ConfigInput,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            tables: self.resolve_tables()?,
            output: self.resolve_output(&defaults.output),
        })
    }

    fn resolve_tables(&self) -> Result<Vec<TableDefinition>> {
        let table_inputs = self.config_input.tables.as_deref().unwrap_or_default();
        let defaults = CreateTableOptions::default();

        let mut seen = HashSet::new();
        let mut tables = Vec::with_capacity(table_inputs.len());

        for input in table_inputs {
            if input.name.trim().is_empty() {
                return Err(anyhow!("Table definitions must have a non-empty name"));
            }
            if !seen.insert(input.name.as_str()) {
                return Err(anyhow!(
                    "Table '{}' is defined more than once",
                    input.name
                ));
            }

            tables.push(TableDefinition {
                name: input.name.clone(),
                options: CreateTableOptions {
                    exists: input.exists.unwrap_or(defaults.exists),
                    schema: input.schema.clone().unwrap_or_default(),
                },
            });
        }

        Ok(tables)
    }

    fn resolve_output(&self, defaults: &Output) -> Output {
        let output_input = self.config_input.output.as_ref();

        Output {
            file: output_input
                .and_then(|o| o.file.as_ref())
                .cloned()
                .or_else(|| std::env::var(OUTPUT_FILE_ENV).ok())
                .or_else(|| defaults.file.clone()),
            format: output_input
                .and_then(|o| o.format)
                .unwrap_or(defaults.format),
        }
    }
}
