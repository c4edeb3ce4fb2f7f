//! Integration tests for the forkful binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const STROGANOFF: &str = r#"{"idMeal":"52874","strMeal":"Beef Stroganoff","strCategory":"Beef"}"#;
const PANCAKES: &str = r#"{"idMeal":"52854","strMeal":"Pancakes","strCategory":"Dessert"}"#;

/// A forkful command isolated from the user's home and config.
fn forkful(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("forkful"));
    cmd.env("HOME", temp.path())
        .env_remove("FORKFUL_DATA_DIR")
        .env("NO_COLOR", "1")
        .arg("--data-dir")
        .arg(temp.path().join("data"));
    cmd
}

fn stored(temp: &TempDir) -> String {
    fs::read_to_string(temp.path().join("data").join("favoriteRecipes.json")).unwrap()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("forkful"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("favorite recipes"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("forkful"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_shows_empty_message() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    forkful(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("You haven't added any favorites yet."));
    Ok(())
}

#[test]
fn cli_add_then_list() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    forkful(&temp)
        .args(["add", STROGANOFF])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Beef Stroganoff' to favorites"));
    forkful(&temp).args(["add", PANCAKES]).assert().success();

    forkful(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Favorite Recipes"))
        .stdout(predicate::str::contains("Beef Stroganoff [Beef]"))
        .stdout(predicate::str::contains("Pancakes [Dessert]"));
    Ok(())
}

#[test]
fn cli_add_persists_compact_array() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    forkful(&temp)
        .args(["add", r#"{"strMeal":"A","idMeal":"1"}"#])
        .assert()
        .success();

    assert_eq!(stored(&temp), r#"[{"idMeal":"1","strMeal":"A"}]"#);
    Ok(())
}

#[test]
fn cli_add_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    forkful(&temp)
        .args(["add", "-"])
        .write_stdin(STROGANOFF)
        .assert()
        .success();

    forkful(&temp).args(["check", "52874"]).assert().success();
    Ok(())
}

#[test]
fn cli_add_duplicate_keeps_one_entry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    forkful(&temp).args(["add", STROGANOFF]).assert().success();
    forkful(&temp)
        .args(["add", STROGANOFF])
        .assert()
        .success()
        .stderr(predicate::str::contains("already a favorite"));

    let value: serde_json::Value = serde_json::from_str(&stored(&temp))?;
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[test]
fn cli_add_without_id_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    forkful(&temp)
        .args(["add", r#"{"strMeal":"No Id"}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
    Ok(())
}

#[test]
fn cli_add_invalid_json_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    forkful(&temp)
        .args(["add", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
    Ok(())
}

#[test]
fn cli_remove_favorite() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    forkful(&temp).args(["add", STROGANOFF]).assert().success();
    forkful(&temp).args(["add", PANCAKES]).assert().success();

    forkful(&temp)
        .args(["remove", "52874"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'Beef Stroganoff' from favorites"));

    forkful(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pancakes"))
        .stdout(predicate::str::contains("Beef Stroganoff").not());
    Ok(())
}

#[test]
fn cli_check_exit_codes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    forkful(&temp).args(["add", STROGANOFF]).assert().success();

    forkful(&temp)
        .args(["check", "52874"])
        .assert()
        .success()
        .stdout(predicate::str::contains("52874 is a favorite"));
    forkful(&temp)
        .args(["check", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 is not a favorite"));
    Ok(())
}

#[test]
fn cli_clear_removes_all() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    forkful(&temp).args(["add", STROGANOFF]).assert().success();
    forkful(&temp).args(["add", PANCAKES]).assert().success();

    forkful(&temp)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 favorites"));

    assert!(!temp.path().join("data").join("favoriteRecipes.json").exists());
    forkful(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("You haven't added any favorites yet."));
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    forkful(&temp).args(["add", STROGANOFF]).assert().success();

    let output = forkful(&temp).args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value[0]["idMeal"], "52874");
    assert_eq!(value[0]["strCategory"], "Beef");
    Ok(())
}

#[test]
fn cli_corrupt_data_lists_as_empty() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let data = temp.path().join("data");
    fs::create_dir_all(&data)?;
    fs::write(data.join("favoriteRecipes.json"), "{broken")?;

    forkful(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("You haven't added any favorites yet."));
    Ok(())
}

#[test]
fn cli_quiet_suppresses_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    forkful(&temp)
        .args(["add", STROGANOFF, "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_data_dir_from_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("forkful.yml");
    let data = temp.path().join("configured");
    fs::write(&config, format!("data_dir: {}\n", data.display()))?;

    let mut cmd = Command::new(cargo_bin("forkful"));
    cmd.env("HOME", temp.path())
        .env_remove("FORKFUL_DATA_DIR")
        .arg("--config")
        .arg(&config)
        .args(["add", STROGANOFF]);
    cmd.assert().success();

    assert!(data.join("favoriteRecipes.json").exists());
    Ok(())
}

#[test]
fn cli_missing_config_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    forkful(&temp)
        .arg("--config")
        .arg(temp.path().join("missing.yml"))
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn cli_watch_stops_after_max_polls() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    forkful(&temp).args(["add", STROGANOFF]).assert().success();

    forkful(&temp)
        .args(["watch", "--interval", "1", "--max-polls", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beef Stroganoff"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("forkful"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("forkful"));
    Ok(())
}
