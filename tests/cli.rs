//
//  apim-cli
//  tests/cli.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! CLI argument smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn apim() -> Command {
    Command::cargo_bin("apim").expect("binary builds")
}

#[test]
fn help_lists_commands() {
    apim()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn version_prints_crate_version() {
    apim()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn extract_help_shows_policy_flags() {
    apim()
        .args(["extract", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--policy-xml-base-url"))
        .stdout(predicate::str::contains("--api-name"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn sas_token_requires_base_url() {
    apim()
        .args(["extract", "--policy-xml-sas-token", "?sv=abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--policy-xml-base-url"));
}

#[test]
fn unknown_command_fails() {
    apim()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn config_get_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    apim()
        .args(["config", "get", "frobnicate"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown configuration key"));
}

#[test]
fn browse_print_requires_parameters() {
    // without subscription/resource group/service there is nothing to browse
    let home = tempfile::tempdir().unwrap();
    apim()
        .args(["browse", "--print"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("APIM_SUBSCRIPTION_ID")
        .env_remove("APIM_RESOURCE_GROUP")
        .env_remove("APIM_SERVICE_NAME")
        .assert()
        .failure()
        .stderr(predicate::str::contains("subscription"));
}
