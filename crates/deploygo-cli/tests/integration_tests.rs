//! Integration tests for the `deploygo` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `deploygo` command isolated from the user's config and environment.
fn deploygo(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("deploygo").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("DEPLOYGO_DEFAULTS__PORT")
        .env_remove("DEPLOYGO_DEFAULTS__TEMPLATE")
        .env_remove("DEPLOYGO_TEMPLATES__STRICT");
    cmd
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    deploygo(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("rollback"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    deploygo(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_init_command_help() {
    let temp = TempDir::new().unwrap();
    deploygo(temp.path())
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--overwrite"));
}

#[test]
fn test_init_go_project() {
    let temp = TempDir::new().unwrap();

    deploygo(temp.path())
        .args(["init", "demo", "--port", "9090"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created: demo/Dockerfile"))
        .stdout(predicate::str::contains("Successfully created project: demo"))
        .stdout(predicate::str::contains("cd demo"))
        .stdout(predicate::str::contains("deploygo deploy staging"));

    let project = temp.path().join("demo");
    for file in [
        "Dockerfile",
        "docker-compose.yml",
        ".deploygo.yml",
        "go.mod",
        "main.go",
        ".dockerignore",
    ] {
        assert!(project.join(file).is_file(), "missing {file}");
    }
    let compose = fs::read_to_string(project.join("docker-compose.yml")).unwrap();
    assert!(compose.contains("9090:9090"));
    let go_mod = fs::read_to_string(project.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module demo"));
}

#[test]
fn test_init_nodejs_project() {
    let temp = TempDir::new().unwrap();

    deploygo(temp.path())
        .args(["init", "web", "-t", "nodejs", "-p", "3000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Node.js"));

    let project = temp.path().join("web");
    let manifest = fs::read_to_string(project.join("package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"web\""));
    assert!(project.join("app.js").is_file());
    assert!(!project.join("go.mod").exists());
}

#[test]
fn test_init_into_output_dir() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("projects")).unwrap();

    deploygo(temp.path())
        .args(["init", "api", "-t", "python", "-o", "projects"])
        .assert()
        .success();

    assert!(temp.path().join("projects/api/app.py").is_file());
}

#[test]
fn test_init_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    deploygo(temp.path())
        .args(["init", "demo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("go.mod"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn test_init_overwrite_replaces_directory() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("demo");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("stale.txt"), "old").unwrap();

    deploygo(temp.path())
        .args(["init", "demo", "--overwrite", "--yes"])
        .assert()
        .success();

    assert!(!project.join("stale.txt").exists());
    assert!(project.join("main.go").is_file());
}

#[test]
fn test_config_file_supplies_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("deploygo.toml");
    fs::write(&config, "[defaults]\ntemplate = \"python\"\nport = 7000\n").unwrap();

    deploygo(temp.path())
        .args(["-c", "deploygo.toml", "init", "svc"])
        .assert()
        .success();

    let compose = fs::read_to_string(temp.path().join("svc/docker-compose.yml")).unwrap();
    assert!(compose.contains("7000:7000"));
    assert!(temp.path().join("svc/requirements.txt").is_file());
}

#[test]
fn test_env_overrides_config() {
    let temp = TempDir::new().unwrap();

    deploygo(temp.path())
        .env("DEPLOYGO_DEFAULTS__PORT", "9000")
        .args(["config", "get", "defaults.port"])
        .assert()
        .success()
        .stdout(predicate::str::diff("9000\n"));
}

#[test]
fn test_config_init_writes_defaults() {
    let temp = TempDir::new().unwrap();

    deploygo(temp.path())
        .args(["-c", "conf/deploygo.toml", "config", "init"])
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join("conf/deploygo.toml")).unwrap();
    assert!(written.contains("[defaults]"));
    assert!(written.contains("port = 8080"));
}

#[test]
fn test_list_command() {
    let temp = TempDir::new().unwrap();
    deploygo(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Templates"))
        .stdout(predicate::str::contains("nodejs"))
        .stdout(predicate::str::contains("python"));
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    let output = deploygo(temp.path())
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let selectors: Vec<_> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["selector"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(selectors, ["go", "nodejs", "python"]);
}

#[test]
fn test_placeholder_commands() {
    let temp = TempDir::new().unwrap();
    for name in ["environment", "logs", "rollback"] {
        deploygo(temp.path())
            .arg(name)
            .assert()
            .success()
            .stdout(predicate::str::contains("not implemented yet"));
    }
}

#[test]
fn test_verbose_flag() {
    let temp = TempDir::new().unwrap();
    deploygo(temp.path())
        .args(["-v", "init", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

#[test]
fn test_quiet_flag() {
    let temp = TempDir::new().unwrap();
    deploygo(temp.path())
        .args(["-q", "init", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("demo/Dockerfile").is_file());
}

#[test]
fn test_quiet_progress_goes_to_the_log() {
    let temp = TempDir::new().unwrap();
    deploygo(temp.path())
        .env("RUST_LOG", "deploygo_adapters=info")
        .args(["-q", "init", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Created file"))
        .stderr(predicate::str::contains("Dockerfile"));
}

#[test]
fn test_shell_completions() {
    let temp = TempDir::new().unwrap();
    deploygo(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deploygo"));
}
