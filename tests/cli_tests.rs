//! CLI surface tests that never enter the interactive session

use predicates::prelude::*;

mod common;
use common::journali_cmd;

#[test]
fn test_help_mentions_subcommands() {
    journali_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal journaling application"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--no-splash"));
}

#[test]
fn test_version_flag() {
    journali_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("journali"));
}

#[test]
fn test_unknown_flag_fails() {
    journali_cmd().arg("--bogus").assert().failure();
}

#[test]
fn test_unknown_subcommand_fails() {
    journali_cmd().arg("export").assert().failure();
}
