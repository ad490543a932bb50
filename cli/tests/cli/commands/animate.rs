use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

use crate::CMD_NAME;

#[test]
fn animate_requires_a_field_or_a_mode() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.arg("animate").arg("-d").arg(dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--field").and(predicate::str::contains("required")));

    Ok(())
}

#[test]
fn animate_fails_on_missing_data_directory() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.args(["animate", "-d", "/no/such/dumps", "-f", "sss"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:").and(predicate::str::contains("/no/such/dumps")));

    Ok(())
}

#[test]
fn animate_fails_on_an_empty_data_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.arg("animate")
        .arg("-d")
        .arg(dir.path())
        .args(["-f", "sss"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no dump files"));

    Ok(())
}

#[test]
fn animate_rejects_field_and_mode_together() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.arg("animate")
        .arg("-d")
        .arg(dir.path())
        .args(["-f", "sss", "-m", "quiver"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    Ok(())
}
