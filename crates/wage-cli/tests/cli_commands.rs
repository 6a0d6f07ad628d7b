//! Integration tests for the `wage` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TEST_WORLD: &str = r#"{
    "name": "Test Manor",
    "player": "Hero",
    "scenes": [
        {"name": "Hall", "x": 0, "y": 0, "description": "A long hall."},
        {"name": "Yard", "x": 1, "y": 0, "description": "A muddy yard."}
    ],
    "objects": [
        {"name": "Coin", "home": "Hall"},
        {"name": "Sword", "kind": "regular_weapon", "verb": "slash", "damage": 3,
         "uses": 5, "home": "Hero"}
    ],
    "characters": [
        {"name": "Hero", "proper_noun": true, "initial_scene": "Hall",
         "stats": {"physical_hp": 10}},
        {"name": "Rat", "initial_scene": "STORAGE@"}
    ]
}"#;

/// Write a world file into a fresh temp directory.
fn world_file(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("world.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

fn wage() -> Command {
    let mut cmd = Command::cargo_bin("wage").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn demo_world() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/manor.json")
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_valid_world() {
    let (_dir, path) = world_file(TEST_WORLD);
    wage()
        .args(["check", "--world"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed for 'Test Manor'"))
        .stdout(predicate::str::contains(
            "2 scenes, 2 characters, 2 objects, 0 sounds",
        ));
}

#[test]
fn check_warns_about_unresolved_placements() {
    let (_dir, path) = world_file(
        r#"{"name": "Lost", "player": "Hero",
            "scenes": [{"name": "Hall"}],
            "objects": [{"name": "Key", "home": "Attic"}],
            "characters": [{"name": "Hero", "initial_scene": "Hall"}]}"#,
    );
    wage()
        .args(["check", "--world"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("unknown home \"Attic\""))
        .stdout(predicate::str::contains("1 unresolved placements"));
}

#[test]
fn check_rejects_world_without_player() {
    let (_dir, path) = world_file(r#"{"name": "Nobody"}"#);
    wage()
        .args(["check", "--world"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("no player"));
}

#[test]
fn check_rejects_malformed_json() {
    let (_dir, path) = world_file("{ not json");
    wage()
        .args(["check", "--world"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed world definition"));
}

#[test]
fn check_missing_file() {
    wage()
        .args(["check", "--world", "/nonexistent/world.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn check_demo_world() {
    wage()
        .args(["check", "--world"])
        .arg(demo_world())
        .assert()
        .success()
        .stdout(predicate::str::contains("The Abandoned Manor"));
}

// ---------------------------------------------------------------------------
// info
// ---------------------------------------------------------------------------

#[test]
fn info_shows_initial_placement() {
    let (_dir, path) = world_file(TEST_WORLD);
    wage()
        .args(["info", "--world"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Manor"))
        .stdout(predicate::str::contains("Hero (player)"))
        .stdout(predicate::str::contains("carried by Hero"))
        .stdout(predicate::str::contains("STORAGE@"))
        .stdout(predicate::str::contains("(1, 0)"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_reads_turns_from_stdin() {
    let (_dir, path) = world_file(TEST_WORLD);
    wage()
        .args(["play", "--world"])
        .arg(&path)
        .write_stdin("look\ntake coin\ninventory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A long hall."))
        .stdout(predicate::str::contains("You see: Coin."))
        .stdout(predicate::str::contains("You now have the Coin."))
        .stdout(predicate::str::contains("You have: Coin, Sword."));
}

#[test]
fn play_stops_at_quit() {
    let (_dir, path) = world_file(TEST_WORLD);
    wage()
        .args(["play", "--world"])
        .arg(&path)
        .write_stdin("quit\ntake coin\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You now have").not());
}

#[test]
fn play_walks_between_scenes() {
    let (_dir, path) = world_file(TEST_WORLD);
    wage()
        .args(["play", "--world"])
        .arg(&path)
        .write_stdin("east\nwest\nwest\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A muddy yard."))
        .stdout(predicate::str::contains("You can't go that way."));
}

#[test]
fn play_is_deterministic_for_a_seed() {
    let run = || {
        let output = wage()
            .args(["play", "--seed", "7", "--world"])
            .arg(demo_world())
            .write_stdin("take short sword\neast\nsouth\nattack keeper with short sword\nstatus\n")
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };
    let first = run();
    assert!(first.contains("You now have the Short Sword."));
    assert!(first.contains("You encounter the Keeper."));
    assert_eq!(first, run());
}

#[test]
fn play_ends_when_player_starts_off_the_map() {
    let (_dir, path) = world_file(
        r#"{"name": "Void", "player": "Hero",
            "characters": [{"name": "Hero"}]}"#,
    );
    wage()
        .args(["play", "--world"])
        .arg(&path)
        .write_stdin("look\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The game is over."));
}
