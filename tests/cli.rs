#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn cli(fleet: &Path) -> Command {
    let mut cmd = Command::cargo_bin("relache-cli").unwrap();
    cmd.arg("--fleet").arg(fleet);
    cmd
}

#[test]
fn add_agents_then_generate() {
    let dir = tempdir().unwrap();
    let fleet = dir.path().join("fleet.json");

    for (name, category) in [("Juan", "van"), ("Maria", "van"), ("Carlos", "van")] {
        cli(&fleet)
            .args(["add-agent", "--name", name, "--category", category])
            .assert()
            .success();
    }
    cli(&fleet)
        .args(["set-needs", "--needs", "2,2,2,2,2,2,2"])
        .assert()
        .success();

    let out_json = dir.path().join("schedule.json");
    cli(&fleet)
        .arg("generate")
        .arg("--out-json")
        .arg(&out_json)
        .assert()
        .success()
        .stdout(predicate::str::contains("per day: 1 1 1 1 1 1 1"))
        .stdout(predicate::str::contains("Maria (Van)"));

    let raw = std::fs::read_to_string(&out_json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.len(), 3);
    for week in map.values() {
        assert_eq!(week.as_array().unwrap().len(), 7);
    }

    cli(&fleet)
        .arg("check")
        .arg("--schedule")
        .arg(&out_json)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn check_flags_stale_schedule() {
    let dir = tempdir().unwrap();
    let fleet = dir.path().join("fleet.json");

    for name in ["Juan", "Maria"] {
        cli(&fleet)
            .args(["add-agent", "--name", name, "--category", "car"])
            .assert()
            .success();
    }
    cli(&fleet)
        .args(["set-needs", "--needs", "1"])
        .assert()
        .success();

    let out_json = dir.path().join("schedule.json");
    cli(&fleet)
        .arg("generate")
        .arg("--seed")
        .arg("3")
        .arg("--out-json")
        .arg(&out_json)
        .assert()
        .success();

    cli(&fleet)
        .args(["set-needs", "--needs", "0,0,0,0,0,0,0"])
        .assert()
        .success();
    cli(&fleet)
        .arg("check")
        .arg("--schedule")
        .arg(&out_json)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected 2 resting"));
}

#[test]
fn unknown_agent_fails() {
    let dir = tempdir().unwrap();
    let fleet = dir.path().join("fleet.json");
    cli(&fleet)
        .args(["toggle-priority", "--agent", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown agent: ghost"));
}

#[test]
fn seed_and_roster_order_conflict() {
    let dir = tempdir().unwrap();
    let fleet = dir.path().join("fleet.json");
    cli(&fleet)
        .args(["generate", "--seed", "1", "--roster-order"])
        .assert()
        .failure();
}
