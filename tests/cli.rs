use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/summary.json";

fn cmd() -> Command {
    Command::cargo_bin("txscope").unwrap()
}

#[test]
fn renders_fixture_to_stdout() {
    cmd()
        .args(["--input", FIXTURE])
        .assert()
        .success()
        .stdout(contains("<!DOCTYPE html>"))
        .stdout(contains("Balance Changes"))
        .stdout(contains("-0.00249788 SUI"))
        .stdout(contains("+0.00125 USDC"))
        .stdout(contains("Show All 7 Objects"))
        .stdout(contains(">Updated<"))
        .stdout(contains(">Transfer<"))
        .stdout(contains(">Shared</a>"));
}

#[test]
fn expand_all_shows_every_object() {
    cmd()
        .args(["--input", FIXTURE, "--expand-all"])
        .assert()
        .success()
        .stdout(contains("Show Less"))
        .stdout(contains(r#"href="/object/0x07""#))
        .stdout(contains("Show All").not());
}

#[test]
fn collapsed_lists_hide_overflow() {
    cmd()
        .args(["--input", FIXTURE])
        .assert()
        .success()
        .stdout(contains(r#"href="/object/0x05""#))
        .stdout(contains(r#"href="/object/0x06""#).not());
}

#[test]
fn network_flag_carries_into_links() {
    cmd()
        .args(["-i", FIXTURE, "-n", "testnet", "--items-to-show", "10"])
        .assert()
        .success()
        .stdout(contains(r#"href="/address/0xcc?network=testnet""#))
        .stdout(contains("Show All").not());
}

#[test]
fn writes_output_file() {
    let tmp = TempDir::new().expect("create temp dir");
    let out = tmp.path().join("tx.html");
    cmd()
        .args(["--input", FIXTURE, "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let page = fs::read_to_string(&out).expect("read page");
    assert!(page.contains("8Qm2vZrK1nT6yHkS3fWc9pLxGd4bA7eJ5uVoN2iRtXqE"));
}

#[test]
fn rejects_missing_input() {
    cmd()
        .args(["--input", "tests/fixtures/nope.json"])
        .assert()
        .failure()
        .stderr(contains("Input file does not exist"));
}

#[test]
fn rejects_malformed_summary() {
    let tmp = TempDir::new().expect("create temp dir");
    let bad = tmp.path().join("bad.json");
    fs::write(&bad, "{ not json").expect("write fixture");
    cmd()
        .arg("--input")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(contains("failed to decode transaction summary"));
}

#[test]
fn rejects_unknown_network() {
    cmd()
        .args(["--input", FIXTURE, "--network", "regtest"])
        .assert()
        .failure()
        .stderr(contains("invalid value for --network"));
}
