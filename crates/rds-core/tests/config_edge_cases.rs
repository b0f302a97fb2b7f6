//! Edge cases of loading and saving the profile file
//!
//! Everything goes through `load_from_path`/`save_to_path` against a
//! temporary directory so no real user configuration is touched.

use std::fs;
use std::path::PathBuf;

use rds_core::config::{Config, ConfigError, Profile, RetryConfig};
use rds_model::model::common::Language;
use rds_model::ClosedValue;
use tempfile::TempDir;

/// Write `content` to `config.toml` inside a fresh temp dir
fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[cfg(unix)]
fn is_root() -> bool {
    std::process::Command::new("id")
        .arg("-u")
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim() == "0")
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// 1. Missing or empty files
// ---------------------------------------------------------------------------

#[test]
fn missing_file_loads_empty_config() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from_path(&dir.path().join("nope.toml")).unwrap();
    assert!(config.profiles.is_empty());
    assert!(config.default_profile.is_none());
}

#[test]
fn empty_file_loads_empty_config() {
    let (_dir, path) = write_config("");
    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config, Config::default());
}

// ---------------------------------------------------------------------------
// 2. Malformed content
// ---------------------------------------------------------------------------

#[test]
fn corrupt_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[profiles.prod\nregion = ");
    let err = Config::load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)), "got {err:?}");
}

#[test]
fn profile_without_project_id_is_rejected() {
    let (_dir, path) = write_config(
        r#"
[profiles.prod]
region = "cn-north-4"
"#,
    );
    let err = Config::load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("project_id"), "got {err}");
}

#[test]
fn unknown_keys_are_ignored() {
    let (_dir, path) = write_config(
        r#"
default_profile = "prod"
theme = "dark"

[profiles.prod]
region = "cn-north-4"
project_id = "p-1"
colour = "blue"
"#,
    );
    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config.default_profile.as_deref(), Some("prod"));
    assert_eq!(config.profile("prod").unwrap().project_id, "p-1");
}

// ---------------------------------------------------------------------------
// 3. Field values
// ---------------------------------------------------------------------------

#[test]
fn unregistered_language_is_preserved() {
    let (_dir, path) = write_config(
        r#"
[profiles.prod]
region = "cn-north-4"
project_id = "p-1"
language = "fr-fr"
"#,
    );
    let config = Config::load_from_path(&path).unwrap();
    let language = config.profile("prod").unwrap().language.clone().unwrap();
    assert!(!language.is_known());
    assert_eq!(language.value(), "fr-fr");
}

#[test]
fn partial_retry_table_uses_defaults() {
    let (_dir, path) = write_config(
        r#"
[profiles.prod]
region = "cn-north-4"
project_id = "p-1"

[profiles.prod.retry]
max_attempts = 5
"#,
    );
    let config = Config::load_from_path(&path).unwrap();
    let retry = config.profile("prod").unwrap().retry_config();
    assert_eq!(retry.max_attempts, 5);
    assert_eq!(retry.backoff_ms, RetryConfig::default().backoff_ms);
    assert!(retry.enabled);
}

// ---------------------------------------------------------------------------
// 4. Environment expansion
// ---------------------------------------------------------------------------

#[test]
#[serial_test::serial]
fn env_references_expand_on_load() {
    unsafe {
        std::env::set_var("RDSCTL_EDGE_PROJECT", "project-from-env");
        std::env::remove_var("RDSCTL_EDGE_ENDPOINT");
    }

    let (_dir, path) = write_config(
        r#"
[profiles.prod]
region = "cn-north-4"
project_id = "${RDSCTL_EDGE_PROJECT}"
endpoint = "${RDSCTL_EDGE_ENDPOINT:-http://127.0.0.1:9000}"
"#,
    );
    let config = Config::load_from_path(&path).unwrap();
    let prod = config.profile("prod").unwrap();
    assert_eq!(prod.project_id, "project-from-env");
    assert_eq!(prod.endpoint().as_deref(), Some("http://127.0.0.1:9000"));

    unsafe {
        std::env::remove_var("RDSCTL_EDGE_PROJECT");
    }
}

// ---------------------------------------------------------------------------
// 5. Saving
// ---------------------------------------------------------------------------

#[test]
fn save_creates_parent_directories_and_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("config.toml");

    let mut config = Config::default();
    let mut prod = Profile::new("cn-north-4", "p-1");
    prod.language = Some(Language::EnUs);
    prod.strict_enums = true;
    config.set_profile("prod".to_string(), prod);
    config.set_profile("dev".to_string(), Profile::new("cn-east-3", "p-2"));
    config.default_profile = Some("dev".to_string());

    config.save_to_path(&path).unwrap();
    assert!(path.exists());

    let loaded = Config::load_from_path(&path).unwrap();
    pretty_assertions::assert_eq!(loaded, config);
}

// ---------------------------------------------------------------------------
// 6. Permissions (unix only)
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[test]
fn unreadable_file_returns_load_error() {
    use std::os::unix::fs::PermissionsExt;

    if is_root() {
        eprintln!("skipping test: running as root");
        return;
    }

    let (_dir, path) = write_config("[profiles]\n");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

    let err = Config::load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::LoadError { .. }), "got {err:?}");

    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
}

#[cfg(unix)]
#[test]
fn save_into_readonly_directory_returns_save_error() {
    use std::os::unix::fs::PermissionsExt;

    if is_root() {
        eprintln!("skipping test: running as root");
        return;
    }

    let dir = TempDir::new().unwrap();
    let readonly = dir.path().join("readonly");
    fs::create_dir(&readonly).unwrap();
    fs::set_permissions(&readonly, fs::Permissions::from_mode(0o555)).unwrap();

    let err = Config::default()
        .save_to_path(&readonly.join("config.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::SaveError { .. }), "got {err:?}");

    fs::set_permissions(&readonly, fs::Permissions::from_mode(0o755)).unwrap();
}
