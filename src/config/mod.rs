pub mod builder;
pub mod merge;
pub mod types;


pub use builder::ConfigBuilder;
pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Main configuration loading function
pub fn load_config(config_file: &str) -> Result<ConfigInput> {
    let config_input = if Path::new(config_file).exists() {
        info!("Loading configuration from {}", config_file);
        let contents = std::fs::read_to_string(config_file)
            .with_context(|| format!("Failed to read config file {}", config_file))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", config_file))?
    } else {
        info!("No config file at {}, using defaults", config_file);
        ConfigInput::default()
    };

    Ok(config_input)
}
