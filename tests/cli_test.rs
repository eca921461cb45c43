//! Integration tests for the CLI surface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup_root(steps: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("steps");
    fs::create_dir_all(&root).unwrap();
    for (file, body) in steps {
        write_step(&root, file, body);
    }
    temp
}

fn write_step(dir: &Path, file: &str, body: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(file), format!("#!/usr/bin/env bash\n{body}\n")).unwrap();
}

fn rigup(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("rigup"));
    cmd.current_dir(temp.path());
    cmd.env_remove("RIGUP_ROOT");
    cmd.env_remove("RIGUP_DEVICE");
    cmd.arg("--log-file").arg(temp.path().join("run.log"));
    cmd
}

#[test]
fn default_run_executes_steps_in_numeric_order() -> Result<(), Box<dyn std::error::Error>> {
    // Scenario: 010-env-info before 020-docker, no overrides.
    let temp = setup_root(&[]);
    let order = temp.path().join("order.txt");
    let root = temp.path().join("steps");
    write_step(&root, "020-docker.sh", &format!("echo docker >> {}", order.display()));
    write_step(&root, "010-env-info.sh", &format!("echo env-info >> {}", order.display()));

    rigup(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Provisioning complete"));

    let contents = fs::read_to_string(&order)?;
    assert_eq!(contents.lines().collect::<Vec<_>>(), vec!["env-info", "docker"]);
    Ok(())
}

#[test]
fn platform_scope_overrides_generic() -> Result<(), Box<dyn std::error::Error>> {
    // Scenario: steps/<platform>/010-homebrew wins over the root one.
    let temp = setup_root(&[]);
    let marker = temp.path().join("which.txt");
    let root = temp.path().join("steps");
    write_step(&root, "010-homebrew.sh", &format!("echo generic >> {}", marker.display()));
    write_step(
        &root.join(std::env::consts::OS),
        "010-homebrew.sh",
        &format!("echo scoped >> {}", marker.display()),
    );

    rigup(&temp).assert().success();

    let contents = fs::read_to_string(&marker)?;
    assert_eq!(contents.trim(), "scoped");
    Ok(())
}

#[test]
fn device_scope_wins_over_everything() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_root(&[]);
    let marker = temp.path().join("which.txt");
    let root = temp.path().join("steps");
    write_step(&root, "010-tool.sh", &format!("echo generic >> {}", marker.display()));
    write_step(
        &root.join(std::env::consts::OS),
        "010-tool.sh",
        &format!("echo platform >> {}", marker.display()),
    );
    write_step(
        &root.join("devices/test-rig"),
        "010-tool.sh",
        &format!("echo device >> {}", marker.display()),
    );

    rigup(&temp).args(["--device", "test-rig"]).assert().success();

    let contents = fs::read_to_string(&marker)?;
    assert_eq!(contents.trim(), "device");
    Ok(())
}

#[test]
fn steps_flag_runs_in_caller_order() -> Result<(), Box<dyn std::error::Error>> {
    // Scenario: --steps docker env-info ignores numeric prefixes.
    let temp = setup_root(&[]);
    let order = temp.path().join("order.txt");
    let root = temp.path().join("steps");
    write_step(&root, "010-env-info.sh", &format!("echo env-info >> {}", order.display()));
    write_step(&root, "020-docker.sh", &format!("echo docker >> {}", order.display()));

    rigup(&temp)
        .args(["--steps", "docker", "env-info"])
        .assert()
        .success();

    let contents = fs::read_to_string(&order)?;
    assert_eq!(contents.lines().collect::<Vec<_>>(), vec!["docker", "env-info"]);
    Ok(())
}

#[test]
fn list_empty_root_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    // Scenario: --list on an existing-but-empty root exits 0 silently.
    let temp = setup_root(&[]);

    rigup(&temp)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn list_prints_name_and_resolved_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_root(&[("010-env-info.sh", "true"), ("020-docker.sh", "true")]);

    rigup(&temp)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("env-info\t010-env-info.sh"))
        .stdout(predicate::str::contains("docker\t020-docker.sh"));
    Ok(())
}

#[test]
fn list_shows_overriding_tier_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_root(&[("010-homebrew.sh", "true")]);
    let scoped = temp.path().join("steps").join(std::env::consts::OS);
    write_step(&scoped, "010-homebrew.sh", "true");

    let expected = format!("homebrew\t{}/010-homebrew.sh", std::env::consts::OS);
    rigup(&temp)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
    Ok(())
}

#[test]
fn list_executes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_root(&[]);
    let marker = temp.path().join("ran.txt");
    let root = temp.path().join("steps");
    write_step(&root, "010-touchy.sh", &format!("touch {}", marker.display()));

    rigup(&temp).arg("--list").assert().success();

    assert!(!marker.exists());
    Ok(())
}

#[test]
fn list_json_outputs_entries() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_root(&[("010-env-info.sh", "true")]);

    rigup(&temp)
        .args(["--list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"env-info\""))
        .stdout(predicate::str::contains("\"tier\": \"generic\""));
    Ok(())
}

#[test]
fn failing_step_stops_the_run() -> Result<(), Box<dyn std::error::Error>> {
    // Scenario: exit 1 in the first step, second step never runs.
    let temp = setup_root(&[]);
    let marker = temp.path().join("after.txt");
    let root = temp.path().join("steps");
    write_step(&root, "010-bad.sh", "exit 1");
    write_step(&root, "020-after.sh", &format!("touch {}", marker.display()));

    rigup(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'bad' failed"));

    assert!(!marker.exists());
    Ok(())
}

#[test]
fn unknown_step_name_fails_without_running_anything() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_root(&[]);
    let marker = temp.path().join("ran.txt");
    let root = temp.path().join("steps");
    write_step(&root, "010-real.sh", &format!("touch {}", marker.display()));

    rigup(&temp)
        .args(["--steps", "missing-step"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing-step"));

    assert!(!marker.exists());
    Ok(())
}

#[test]
fn missing_root_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    rigup(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Steps root not found"));
    Ok(())
}

#[test]
fn empty_registry_run_is_a_noop_success() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_root(&[]);

    rigup(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to do"));
    Ok(())
}

#[test]
fn unknown_flag_is_a_hard_failure() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_root(&[("010-env-info.sh", "true")]);

    rigup(&temp).arg("--frobnicate").assert().failure();
    Ok(())
}

#[test]
fn bare_positional_step_names_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_root(&[("010-env-info.sh", "true")]);

    rigup(&temp).arg("env-info").assert().failure();
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("rigup"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("provisioning step runner"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("rigup"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn debug_flag_does_not_pollute_list_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_root(&[("010-env-info.sh", "true")]);

    rigup(&temp)
        .args(["--list", "--debug"])
        .assert()
        .success()
        .stdout(predicate::str::diff("env-info\t010-env-info.sh\n"));
    Ok(())
}

#[test]
fn steps_receive_environment_contract() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_root(&[]);
    let out = temp.path().join("env.txt");
    let root = temp.path().join("steps");
    write_step(
        &root,
        "010-env.sh",
        &format!(
            "echo \"$RIGUP_STEP/$RIGUP_PLATFORM/$RIGUP_DEVICE/$RIGUP_DEBUG\" >> {}",
            out.display()
        ),
    );

    rigup(&temp)
        .args(["--device", "test-rig", "--debug"])
        .assert()
        .success();

    let contents = fs::read_to_string(&out)?;
    assert_eq!(
        contents.trim(),
        format!("env/{}/test-rig/1", std::env::consts::OS)
    );
    Ok(())
}

#[test]
fn run_log_contains_header_and_delimiters() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_root(&[("010-env-info.sh", "echo from-step >> \"$RIGUP_LOG_FILE\"")]);

    rigup(&temp).assert().success();

    let log = fs::read_to_string(temp.path().join("run.log"))?;
    assert!(log.contains("==== rigup run"));
    assert!(log.contains("start env-info"));
    assert!(log.contains("from-step"));
    assert!(log.contains("end env-info"));
    Ok(())
}

#[test]
fn dry_run_prints_plan_and_executes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_root(&[]);
    let marker = temp.path().join("ran.txt");
    let root = temp.path().join("steps");
    write_step(&root, "010-touchy.sh", &format!("touch {}", marker.display()));

    rigup(&temp)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("would run: touchy"));

    assert!(!marker.exists());
    assert!(!temp.path().join("run.log").exists());
    Ok(())
}
