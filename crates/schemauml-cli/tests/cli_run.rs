//! End-to-end tests for the schemauml binary
//!
//! Runs the built executable with a clean environment for the
//! credential and logging variables.

use std::path::Path;
use std::process::{Command, Output};

const ENV_VARS: &[&str] = &[
    "SCHEMAUML_APP_ID",
    "SCHEMAUML_MASTER_KEY",
    "SCHEMAUML_SERVER_URL",
    "SCHEMAUML_LOG_LEVEL",
    "SCHEMAUML_LOG_FORMAT",
    "RUST_LOG",
];

fn run_cli(args: &[&str], cwd: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_schemauml"));
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.args(args).current_dir(cwd).output().unwrap()
}

const USER_TEAM: &str = r#"[{"className": "User", "fields": {
    "name": {"type": "String"},
    "team": {"type": "Pointer", "targetClass": "Team"}
}}]"#;

#[test]
fn test_no_source_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(&[], dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please specify a file to read the schema from"));
    assert!(stdout.contains("--in-file"));
    assert!(!dir.path().join("plantuml.txt").exists());
}

#[test]
fn test_partial_server_details_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(&["-a", "app", "-s", "http://127.0.0.1:9/schemas"], dir.path());

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn test_file_to_default_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("schema.json"), USER_TEAM).unwrap();

    let output = run_cli(&["-i", "schema.json"], dir.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let uml = std::fs::read_to_string(dir.path().join("plantuml.txt")).unwrap();
    assert_eq!(
        uml,
        "@startuml\nUser <|-- Team\nclass User {\n\tString name\n\tTeam team\n}\n@enduml\n"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("created uml successfully"));
}

#[test]
fn test_file_to_stdout_with_title() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("schema.json"), r#"[{"className": "A"}]"#).unwrap();

    let output = run_cli(
        &["-i", "schema.json", "-o", "-", "--title", "Model", "--log-level", "error"],
        dir.path(),
    );
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "@startuml\ntitle Model\nclass A {\n}\n@enduml\n"
    );
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(&["-i", "nope.json"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.json"));
    assert!(!dir.path().join("plantuml.txt").exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("schema.json"), USER_TEAM).unwrap();

    let output = run_cli(&["-i", "schema.json", "-o", "missing-dir/out.txt"], dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write output"));
}

#[test]
fn test_results_object_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let body = serde_json::json!({
        "results": [{"className": "Team", "fields": {"title": {"type": "String"}}}]
    });
    std::fs::write(dir.path().join("schema.json"), body.to_string()).unwrap();

    let output = run_cli(&["-i", "schema.json", "-o", "team.puml"], dir.path());
    assert!(output.status.success());

    let uml = std::fs::read_to_string(dir.path().join("team.puml")).unwrap();
    assert!(uml.contains("class Team {\n\tString title\n}\n"));
}
