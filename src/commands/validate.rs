use crate::config::Config;
use crate::error::SchemaError;
use anyhow::{Result, anyhow};

/// Outcome of checking every configured table
#[derive(Debug)]
pub struct ValidationResult {
    pub checked: usize,
    pub failures: Vec<(String, SchemaError)>,
}

impl ValidationResult {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render every table and collect the failures instead of stopping at the first.
pub fn validate_tables(config: &Config) -> ValidationResult {
    let failures = config
        .tables
        .iter()
        .filter_map(|definition| {
            definition
                .create_table()
                .get_sql()
                .err()
                .map(|err| (definition.name.clone(), err))
        })
        .collect();

    ValidationResult {
        checked: config.tables.len(),
        failures,
    }
}

pub fn cmd_validate(config: &Config) -> Result<()> {
    println!("🔍 Validating {} table definition(s)...", config.tables.len());

    let result = validate_tables(config);

    if result.passed() {
        println!("✅ All table definitions are valid.");
        Ok(())
    } else {
        for (table, err) in &result.failures {
            println!("❌ {}: {}", table, err);
        }
        Err(anyhow!(
            "Schema validation failed: {} of {} table(s) invalid",
            result.failures.len(),
            result.checked
        ))
    }
}
