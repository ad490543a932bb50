use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

use crate::{utils, CMD_NAME};

#[test]
fn info_reports_flags_and_grid_shape() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = utils::write_scalar_dump(dir.path(), "sst_01_Nov_2004.txt", utils::SCALAR_ROWS);

    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.arg("info").arg(&path);
    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains("Kind:                      scalar")
                .and(predicate::str::contains("Time stamp:                01-NOV-2004 00:00"))
                .and(predicate::str::contains("Date:                      2004-11-01"))
                .and(predicate::str::contains("Value bad flag:            -1.E+34"))
                .and(predicate::str::contains("Data rows:                 4"))
                .and(predicate::str::contains("Valid samples:             3"))
                .and(predicate::str::contains("Grid size:                 2 x 2"))
                .and(predicate::str::contains("Missing cells:             1")),
        )
        .stderr(predicate::str::is_empty());

    Ok(())
}

#[test]
fn info_reads_vector_dumps_with_the_flag() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = utils::write_vector_dump(
        dir.path(),
        "u_01_Nov_2004.txt",
        &["\"01-NOV-2004 00:00\", 1, 65.5, -10.5, 5.0, 0.25"],
    );

    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.arg("info").arg("--vector").arg(&path);
    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains("Kind:                      vector (current component)")
                .and(predicate::str::contains("Depth bad flag:            -1.E+34"))
                // parsed values carry the dataset's flipped sign
                .and(predicate::str::contains("Value range:               -0.25 .. -0.25")),
        );

    Ok(())
}

#[test]
fn info_fails_on_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.arg("info").arg("no_such_file.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:").and(predicate::str::contains("no_such_file.txt")));

    Ok(())
}

#[test]
fn info_fails_on_truncated_header() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.txt");
    std::fs::write(&path, "just\ntwo lines\n")?;

    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.arg("info").arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("the file is truncated"));

    Ok(())
}

#[test]
fn info_reports_empty_grid_when_all_rows_are_flagged() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = utils::write_scalar_dump(
        dir.path(),
        "sst_02_Nov_2004.txt",
        &["\"02-NOV-2004 00:00\", 1, 65.5, -10.5, -1.E+34"],
    );

    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.arg("info").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("empty (all rows flagged bad)"));

    Ok(())
}
