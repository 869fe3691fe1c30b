use crate::helpers::cli::{USERS_CONFIG, with_cli_helper};
use anyhow::Result;
use predicates::prelude::*;

#[test]
fn test_validate_passes() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_config(USERS_CONFIG)?;

        helper
            .command()
            .args(["validate"])
            .assert()
            .success()
            .stdout(predicate::str::contains("All table definitions are valid"));

        Ok(())
    })
}

#[test]
fn test_validate_reports_each_invalid_table() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_config(
            r#"tables:
  - name: keys
    schema:
      id: { type: number, primary: true, array: true }
  - name: ok
    schema:
      id: number
  - name: sizes
    schema:
      name: { type: string, size: 2.5 }
"#,
        )?;

        helper
            .command()
            .args(["validate"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("keys: column \"id\": a primary key cannot be an array"))
            .stdout(predicate::str::contains("sizes: column \"name\" has invalid size 2.5"))
            .stdout(predicate::str::contains("ok:").not())
            .stderr(predicate::str::contains("2 of 3 table(s) invalid"));

        Ok(())
    })
}
