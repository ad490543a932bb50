use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

use crate::CMD_NAME;

#[test]
fn completions_for_bash_mention_the_binary() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("seaviz"));

    Ok(())
}

#[test]
fn completions_reject_unknown_shells() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.args(["completions", "tcsh"]);
    cmd.assert().failure();

    Ok(())
}
