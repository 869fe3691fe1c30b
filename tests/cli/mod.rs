/// CLI integration tests that exercise the actual binary through assert_cmd.
///
/// Use `CliTestHelper::command()` and point it at a config written with
/// `CliTestHelper::write_config()`:
/// ```rust
/// helper.command()
///     .args(["render"])
///     .assert()
///     .success()
///     .stdout(predicate::str::contains("CREATE TABLE"));
/// ```
pub mod error_handling;
pub mod validate;
