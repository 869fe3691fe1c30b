//! CLI error handling tests
//!
//! What happens when the config or the schema it describes is wrong.

use crate::helpers::cli::with_cli_helper;
use anyhow::Result;
use predicates::prelude::*;

/// Running without tabledef.yaml renders nothing and succeeds
#[test]
fn test_missing_config_file() -> Result<()> {
    with_cli_helper(|helper| {
        helper
            .command()
            .args(["render"])
            .assert()
            .success()
            .stderr(predicate::str::contains("No tables configured"));

        Ok(())
    })
}

#[test]
fn test_invalid_config_yaml_error() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_config("invalid: yaml: content: [unbalanced")?;

        helper
            .command()
            .args(["render"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid config file"));

        Ok(())
    })
}

#[test]
fn test_render_fails_on_invalid_schema() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_config(
            "tables:\n  - name: flags\n    schema:\n      enabled: { type: boolean, array: true }\n",
        )?;

        helper
            .command()
            .args(["render"])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Failed to render table 'flags'"))
            .stderr(predicate::str::contains("boolean"));

        Ok(())
    })
}

#[test]
fn test_unknown_table_error() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_config("tables:\n  - name: users\n")?;

        helper
            .command()
            .args(["render", "--table", "orders"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Table 'orders' is not defined"));

        Ok(())
    })
}

#[test]
fn test_duplicate_table_error() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_config("tables:\n  - name: users\n  - name: users\n")?;

        helper
            .command()
            .args(["validate"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("defined more than once"));

        Ok(())
    })
}
