use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a test command isolated from the caller's environment
fn rdsctl() -> Command {
    let mut cmd = Command::cargo_bin("rdsctl").unwrap();
    cmd.env_remove("RDSCTL_PROFILE")
        .env_remove("RDSCTL_CONFIG_FILE")
        .env_remove("RDSCTL_AUTH_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

/// Command bound to a config file inside `dir`
fn rdsctl_with_config(dir: &Path) -> Command {
    let mut cmd = rdsctl();
    cmd.arg("--config-file").arg(config_file(dir));
    cmd
}

fn config_file(dir: &Path) -> PathBuf {
    dir.join("config.toml")
}

fn write_config(dir: &Path, content: &str) {
    std::fs::write(config_file(dir), content).unwrap();
}

#[test]
fn test_help_flag() {
    rdsctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("RDS v3 management API"))
        .stdout(predicate::str::contains("EXAMPLES:"));
}

#[test]
fn test_version_flag() {
    rdsctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rdsctl"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_command_json() {
    rdsctl()
        .args(["version", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_args_shows_help() {
    rdsctl()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    rdsctl()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_profile_help() {
    rdsctl()
        .args(["profile", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile management"));
}

#[test]
fn test_completions_bash() {
    rdsctl()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rdsctl"));
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[test]
fn test_profile_list_empty() {
    let temp = TempDir::new().unwrap();
    rdsctl_with_config(temp.path())
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles configured"));
}

#[test]
fn test_profile_lifecycle() {
    let temp = TempDir::new().unwrap();

    rdsctl_with_config(temp.path())
        .args([
            "profile",
            "set",
            "prod",
            "--region",
            "cn-north-4",
            "--project-id",
            "p-1",
            "--auth-token",
            "token-abcdef123456",
            "--language",
            "zh-cn",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile 'prod' saved"))
        .stdout(predicate::str::contains("default profile"));

    let saved = std::fs::read_to_string(config_file(temp.path())).unwrap();
    assert!(saved.contains("default_profile = \"prod\""));
    assert!(saved.contains("zh-cn"));

    rdsctl_with_config(temp.path())
        .args(["profile", "show", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cn-north-4"))
        .stdout(predicate::str::contains("****3456"))
        .stdout(predicate::str::contains("token-abcdef123456").not());

    rdsctl_with_config(temp.path())
        .args(["profile", "list", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"prod\""));

    rdsctl_with_config(temp.path())
        .args(["profile", "remove", "prod", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed"));

    rdsctl_with_config(temp.path())
        .args(["profile", "show", "prod"])
        .assert()
        .failure();
}

#[test]
fn test_trace_logging_hides_auth_token() {
    let temp = TempDir::new().unwrap();

    rdsctl_with_config(temp.path())
        .env("RUST_LOG", "rdsctl=trace")
        .args([
            "profile",
            "set",
            "prod",
            "--region",
            "cn-north-4",
            "--project-id",
            "p-1",
            "--auth-token",
            "token-never-logged",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Executing command"))
        .stderr(predicate::str::contains("token-never-logged").not());
}

#[test]
fn test_profile_set_unknown_region_needs_endpoint() {
    let temp = TempDir::new().unwrap();

    rdsctl_with_config(temp.path())
        .args([
            "profile",
            "set",
            "lab",
            "--region",
            "moon-base-1",
            "--project-id",
            "p-1",
        ])
        .assert()
        .failure();

    rdsctl_with_config(temp.path())
        .args([
            "profile",
            "set",
            "lab",
            "--region",
            "moon-base-1",
            "--project-id",
            "p-1",
            "--endpoint",
            "http://127.0.0.1:9000",
        ])
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// Catalogs
// ---------------------------------------------------------------------------

#[test]
fn test_ops_list_group() {
    rdsctl()
        .args(["ops", "list", "--group", "backup", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DeleteManualBackup"))
        .stdout(predicate::str::contains("ListInstances\"").not());
}

#[test]
fn test_ops_show() {
    rdsctl()
        .args(["ops", "show", "ListInstances", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/v3/{project_id}/instances"))
        .stdout(predicate::str::contains("GET"));
}

#[test]
fn test_unknown_operation_fails() {
    rdsctl()
        .args(["ops", "show", "MakeCoffee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MakeCoffee"));
}

#[test]
fn test_enums_show() {
    rdsctl()
        .args(["enums", "show", "instancestatus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("InstanceStatus"))
        .stdout(predicate::str::contains("REBOOTING"));
}

#[test]
fn test_enums_check_lenient_and_strict() {
    let temp = TempDir::new().unwrap();

    rdsctl_with_config(temp.path())
        .args(["enums", "check", "InstanceStatus", "HIBERNATING", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"known\": false"));

    rdsctl_with_config(temp.path())
        .args(["enums", "check", "InstanceStatus", "HIBERNATING", "--strict"])
        .assert()
        .failure();

    rdsctl_with_config(temp.path())
        .args(["enums", "check", "InstanceStatus", "ACTIVE", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("registered"));
}

#[test]
fn test_regions() {
    rdsctl()
        .args(["regions", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://rds.cn-north-4.myhuaweicloud.com"));
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

const PROFILE: &str = r#"
default_profile = "prod"

[profiles.prod]
region = "cn-north-4"
project_id = "p-1"
language = "en-us"
"#;

#[test]
fn test_request_dry_run() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), PROFILE);

    rdsctl_with_config(temp.path())
        .args(["request", "ListInstances", "--data", r#"{"limit": 10}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "GET https://rds.cn-north-4.myhuaweicloud.com/v3/p-1/instances?limit=10",
        ))
        .stdout(predicate::str::contains("X-Language: en-us"));
}

#[test]
fn test_request_query_filter() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), PROFILE);

    rdsctl_with_config(temp.path())
        .args([
            "request",
            "DeleteManualBackup",
            "--data",
            r#"{"backup_id": "b-1"}"#,
            "-o",
            "json",
            "-q",
            "method",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("DELETE"));
}

#[test]
fn test_request_invalid_json_fails() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), PROFILE);

    rdsctl_with_config(temp.path())
        .args(["request", "ListInstances", "--data", "{not json"])
        .assert()
        .failure();
}

#[test]
fn test_request_without_profile_fails() {
    let temp = TempDir::new().unwrap();

    rdsctl_with_config(temp.path())
        .args(["request", "ListInstances"])
        .assert()
        .failure();
}

#[test]
fn test_decode_response() {
    rdsctl()
        .args(["decode", "ListInstances", "--data", r#"{"total_count": 1}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"ListInstancesResponse {"total_count":1}"#,
        ));
}

#[test]
fn test_decode_from_file() {
    let temp = TempDir::new().unwrap();
    let body = temp.path().join("body.json");
    std::fs::write(&body, r#"{"backup_id": "b-1"}"#).unwrap();

    rdsctl()
        .args(["decode", "DeleteManualBackup", "--request", "--data"])
        .arg(format!("@{}", body.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("DeleteManualBackupRequest"))
        .stdout(predicate::str::contains("b-1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_call_against_mock_endpoint() {
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/p-1/instances"))
        .and(header("X-Auth-Token", "t-1"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "instances": [],
            "total_count": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        &format!(
            "[profiles.mock]\nregion = \"cn-north-4\"\nproject_id = \"p-1\"\nendpoint = \"{}\"\nauth_token = \"t-1\"\n",
            server.uri()
        ),
    );

    rdsctl_with_config(temp.path())
        .args(["--no-retry", "call", "ListInstances", "-o", "json"])
        .args(["--data", r#"{"limit": 5}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_count\": 0"))
        .stdout(predicate::str::contains("http_status_code").not());
}
