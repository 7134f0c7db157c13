use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixture dataset present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("airhop-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("AIRHOP_DATA_DIR");
    cmd
}

fn prepare_command() -> Command {
    let mut cmd = cli();
    cmd.arg("--data-dir").arg(fixture_dir());
    cmd
}

#[test]
fn shortest_route_over_flights() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "TLL", "--to", "OSL"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Route from TLL to OSL:"))
        .stdout(predicate::str::contains("TLL -> HEL -> ARN -> OSL"))
        .stdout(predicate::str::contains("Total distance: 884 km"));
}

#[test]
fn ground_flag_enables_transfers() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "TLL", "--to", "KUN", "--ground"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("TLL -> RIX -> VNO => KUN"))
        .stdout(predicate::str::contains("Flights: 2, ground transfers: 1"));
}

#[test]
fn narrow_ground_radius_finds_nothing() {
    let mut cmd = prepare_command();
    cmd.args([
        "route",
        "--from",
        "TLL",
        "--to",
        "KUN",
        "--ground",
        "--max-ground-km",
        "50",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No route found between TLL and KUN."));
}

#[test]
fn no_route_is_not_a_failure() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "TLL", "--to", "KUN"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No route found"));
}

#[test]
fn hop_budget_is_applied() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "TLL", "--to", "OSL", "--hops", "3"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No route found"));
}

#[test]
fn json_format_outputs_route() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "route", "--from", "EETN", "--to", "RIX"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["as_string"], "TLL -> RIX");
    assert_eq!(value["path"], serde_json::json!(["TLL", "RIX"]));
    assert_eq!(value["found"], true);
}

#[test]
fn unknown_airport_error_is_friendly() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "TLL", "--to", "XXX"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown airport 'XXX'"));
}

#[test]
fn missing_dataset_is_reported() {
    let temp = tempdir().expect("create temp dir");
    let mut cmd = cli();
    cmd.arg("--data-dir")
        .arg(temp.path())
        .args(["route", "--from", "TLL", "--to", "HEL"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to locate the dataset"));
}

#[test]
fn data_dir_from_environment() {
    let mut cmd = cli();
    cmd.env("AIRHOP_DATA_DIR", fixture_dir())
        .args(["airports", "--code", "EEKE"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Kuressaare Airport"))
        .stdout(predicate::str::contains("id: 6134"));
}

#[test]
fn airport_lookup_as_json() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "airports", "--code", "3953"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["iata"], "RIX");
    assert_eq!(value["icao"], "EVRA");
}
