use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

use crate::{utils, CMD_NAME};

#[test]
fn render_requires_a_field_or_a_mode() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = utils::write_scalar_dump(dir.path(), "sst_01_Nov_2004.txt", utils::SCALAR_ROWS);

    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.arg("render").arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--field").and(predicate::str::contains("required")));

    Ok(())
}

#[test]
fn render_rejects_unknown_field_ids() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.args(["render", "-f", "sla", "whatever.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown field `sla`"));

    Ok(())
}

#[test]
fn render_mode_requires_the_meridional_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.args(["render", "-m", "quiver", "u.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--meridional"));

    Ok(())
}

#[test]
fn render_rejects_malformed_frame_sizes() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.args(["render", "-f", "sst", "-s", "huge", "whatever.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("WIDTHxHEIGHT"));

    Ok(())
}

#[test]
fn render_fails_on_missing_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.args(["render", "-f", "sst", "no_such_file.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no_such_file.txt"));

    Ok(())
}
