//! Basic CLI E2E tests.
//!
//! Every test points POMODORO_CONFIG at a fresh temp file so the user's
//! real configuration is never read or written.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomodoro(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomodoro").unwrap();
    cmd.env("POMODORO_CONFIG", dir.path().join("config.toml"))
        .env("POMODORO_LOG", "off");
    cmd
}

fn json_lines(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect()
}

#[test]
fn simulate_flips_to_break_on_tick_after_zero() {
    let dir = TempDir::new().unwrap();
    let out = pomodoro(&dir)
        .args(["simulate", "--ticks", "1501", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let events = json_lines(&out);
    assert_eq!(events[0]["type"], "timer_started");
    assert_eq!(events[0]["remaining_secs"], 1500);

    let transitions: Vec<_> = events
        .iter()
        .filter(|e| e["type"] == "session_transitioned")
        .collect();
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0]["from"], "focusing");
    assert_eq!(transitions[0]["to"], "on_break");

    let snapshot = events.last().unwrap();
    assert_eq!(snapshot["type"], "state_snapshot");
    assert_eq!(snapshot["mode"], "on_break");
    assert_eq!(snapshot["remaining_secs"], 300);
    assert_eq!(snapshot["running"], true);
}

#[test]
fn simulate_stays_at_zero_for_one_tick() {
    let dir = TempDir::new().unwrap();
    let out = pomodoro(&dir)
        .args(["simulate", "--ticks", "1500", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let snapshot = json_lines(&out).pop().unwrap();
    assert_eq!(snapshot["mode"], "focusing");
    assert_eq!(snapshot["remaining_secs"], 0);
    assert_eq!(snapshot["progress_pct"], 100.0);
}

#[test]
fn simulate_pause_freezes_remaining_time() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["simulate", "--ticks", "100", "--pause-at", "10", "--focus", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("paused at 04:50"))
        .stdout(predicate::str::contains("Focusing 04:50 [3%] paused"));
}

#[test]
fn simulate_uses_configured_durations() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["config", "set", "durations.break_minutes", "10"])
        .assert()
        .success();

    pomodoro(&dir)
        .args(["simulate", "--ticks", "301", "--focus", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tick 301: Focusing -> On Break (10:00)"))
        .stdout(predicate::str::contains("alerts: 1"));
}

#[test]
fn simulate_rejects_out_of_range_focus() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["simulate", "--focus", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("durations.focus_minutes"));
}

#[test]
fn config_set_then_get() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["config", "set", "durations.focus_minutes", "45"])
        .assert()
        .success()
        .stdout("ok\n");

    pomodoro(&dir)
        .args(["config", "get", "durations.focus_minutes"])
        .assert()
        .success()
        .stdout("45\n");
}

#[test]
fn config_get_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["config", "get", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown key: nope"));
}

#[test]
fn config_set_rejects_invalid_duration() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["config", "set", "durations.break_minutes", "30"])
        .assert()
        .failure();
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn config_set_rejects_empty_log_level() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["config", "set", "log.level", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("value cannot be empty"));
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn config_set_validates_log_filter() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["config", "set", "log.level", "pomodoro=loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid log level"));
    assert!(!dir.path().join("config.toml").exists());

    pomodoro(&dir)
        .args(["config", "set", "log.level", "debug"])
        .assert()
        .success();
    pomodoro(&dir)
        .args(["config", "get", "log.level"])
        .assert()
        .success()
        .stdout("debug\n");
}

#[test]
fn config_path_honors_override() {
    let dir = TempDir::new().unwrap();
    pomodoro(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_list_prints_defaults() {
    let dir = TempDir::new().unwrap();
    let out = pomodoro(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["durations"]["focus_minutes"], 25);
    assert_eq!(json["alert"]["bell"], true);
}
