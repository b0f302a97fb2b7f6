//! Configuration management for rdsctl
//!
//! Profiles are stored in a TOML file. Each profile names the region and
//! project an RDS client talks to, plus how to find its auth token.

#[cfg(target_os = "macos")]
use directories::BaseDirs;
use directories::ProjectDirs;
use rds_model::model::common::Language;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::credential::CredentialStore;
use super::error::{ConfigError, Result};
use super::retry::RetryConfig;
use crate::region;

/// Environment variable that overrides every profile's auth token
pub const AUTH_TOKEN_ENV: &str = "RDSCTL_AUTH_TOKEN";

/// Environment variable that points at an alternative config file
pub const CONFIG_FILE_ENV: &str = "RDSCTL_CONFIG_FILE";

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Profile used when none is named explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
    /// Map of profile name -> profile configuration
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// Individual profile configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Profile {
    /// Region id such as `cn-north-4`
    pub region: String,
    /// Project the `/v3/{project_id}/...` paths are scoped to
    pub project_id: String,
    /// Overrides the endpoint derived from the region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// IAM token, inline or as a `keyring:` reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    /// Sent as the `X-Language` header when a request does not set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Reject unregistered enum values instead of preserving them
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub strict_enums: bool,
    /// Retry policy for this profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<RetryConfig>,
}

impl Profile {
    /// A profile with only the required fields set
    pub fn new(region: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            project_id: project_id.into(),
            endpoint: None,
            auth_token: None,
            language: None,
            strict_enums: false,
            retry: None,
        }
    }

    /// Explicit endpoint, or the default one for a known region
    pub fn endpoint(&self) -> Option<String> {
        self.endpoint
            .clone()
            .or_else(|| region::default_endpoint(&self.region))
    }

    /// Retry policy, falling back to the defaults
    pub fn retry_config(&self) -> RetryConfig {
        self.retry.clone().unwrap_or_default()
    }

    /// Resolve the auth token
    ///
    /// `RDSCTL_AUTH_TOKEN` wins over the stored value; `keyring:` references
    /// are looked up in the OS keyring.
    pub fn resolve_auth_token(&self) -> Result<String> {
        let store = CredentialStore::new();
        match &self.auth_token {
            Some(token) => store
                .get_credential(token, Some(AUTH_TOKEN_ENV))
                .map_err(|e| ConfigError::CredentialError(e.to_string())),
            None => std::env::var(AUTH_TOKEN_ENV).map_err(|_| ConfigError::MissingAuthToken),
        }
    }
}

impl Config {
    /// Resolve which profile to use
    ///
    /// An explicit name must exist. Otherwise the default profile is used,
    /// then the first profile by name.
    pub fn resolve_profile(&self, explicit_profile: Option<&str>) -> Result<String> {
        if let Some(name) = explicit_profile {
            if self.profiles.contains_key(name) {
                return Ok(name.to_string());
            }
            return Err(ConfigError::ProfileNotFound {
                name: name.to_string(),
            });
        }

        if let Some(ref default) = self.default_profile {
            return Ok(default.clone());
        }

        self.list_profiles()
            .first()
            .map(|(name, _)| (*name).clone())
            .ok_or(ConfigError::NoProfiles)
    }

    /// Look up a profile by name
    pub fn profile(&self, name: &str) -> Result<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound {
                name: name.to_string(),
            })
    }

    /// Load configuration from `RDSCTL_CONFIG_FILE` or the standard location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path; a missing file is empty
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::LoadError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        let expanded_content = Self::expand_env_vars(&content);
        let config: Config = toml::from_str(&expanded_content)?;

        tracing::debug!(
            path = %config_path.display(),
            profiles = config.profiles.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Save configuration to the standard location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::SaveError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| ConfigError::SaveError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// Set or update a profile
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Remove a profile by name, clearing the default if it pointed there
    pub fn remove_profile(&mut self, name: &str) -> Option<Profile> {
        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = None;
        }
        self.profiles.remove(name)
    }

    /// List all profiles sorted by name
    pub fn list_profiles(&self) -> Vec<(&String, &Profile)> {
        let mut profiles: Vec<_> = self.profiles.iter().collect();
        profiles.sort_by_key(|(name, _)| *name);
        profiles
    }

    /// Get the path to the configuration file
    ///
    /// `RDSCTL_CONFIG_FILE` takes precedence. On macOS `~/.config/rdsctl` is
    /// used when it exists, otherwise the platform directory:
    ///
    /// * Linux: `~/.config/rdsctl/config.toml`
    /// * macOS: `~/Library/Application Support/com.rdsctl.rdsctl/config.toml`
    /// * Windows: `%APPDATA%\rdsctl\rdsctl\config\config.toml`
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_FILE_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        #[cfg(target_os = "macos")]
        {
            if let Some(base_dirs) = BaseDirs::new() {
                let linux_style_path = base_dirs
                    .home_dir()
                    .join(".config")
                    .join("rdsctl")
                    .join("config.toml");

                if linux_style_path
                    .parent()
                    .map(|p| p.exists())
                    .unwrap_or(false)
                {
                    return Ok(linux_style_path);
                }
            }
        }

        let proj_dirs =
            ProjectDirs::from("com", "rdsctl", "rdsctl").ok_or(ConfigError::NoConfigDir)?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Expand `${VAR}` and `${VAR:-default}` references
    ///
    /// Unset variables without a default are left as written so that
    /// profiles nobody uses do not break loading.
    ///
    /// ```toml
    /// [profiles.prod]
    /// region = "cn-north-4"
    /// project_id = "${RDS_PROJECT_ID}"
    /// endpoint = "${RDS_ENDPOINT:-https://rds.cn-north-4.myhuaweicloud.com}"
    /// ```
    fn expand_env_vars(content: &str) -> String {
        shellexpand::env_with_context_no_errors(content, |var| std::env::var(var).ok())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(region: &str) -> Profile {
        Profile::new(region, "0549b4a43100d4f32f51c01c2fe4acdb")
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        let mut prod = profile("cn-north-4");
        prod.language = Some(Language::EnUs);
        prod.retry = Some(RetryConfig::disabled());
        config.set_profile("prod".to_string(), prod);
        config.default_profile = Some("prod".to_string());

        let serialized = toml::to_string(&config).unwrap();
        assert!(serialized.contains(r#"language = "en-us""#));
        assert!(!serialized.contains("strict_enums"));

        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_endpoint_from_region() {
        let prod = profile("cn-north-4");
        assert_eq!(
            prod.endpoint().as_deref(),
            Some("https://rds.cn-north-4.myhuaweicloud.com")
        );

        let mut custom = profile("xx-nowhere-1");
        assert_eq!(custom.endpoint(), None);
        custom.endpoint = Some("http://127.0.0.1:8080".to_string());
        assert_eq!(custom.endpoint().as_deref(), Some("http://127.0.0.1:8080"));
    }

    #[test]
    #[serial_test::serial]
    fn test_env_var_expansion() {
        unsafe {
            std::env::set_var("RDSCTL_TEST_PROJECT", "project-from-env");
        }

        let content = r#"
[profiles.test]
region = "cn-north-4"
project_id = "${RDSCTL_TEST_PROJECT}"
"#;

        let expanded = Config::expand_env_vars(content);
        assert!(expanded.contains("project-from-env"));

        unsafe {
            std::env::remove_var("RDSCTL_TEST_PROJECT");
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_env_var_expansion_with_defaults() {
        unsafe {
            std::env::remove_var("RDSCTL_NONEXISTENT_VAR");
        }

        let content = r#"
[profiles.test]
region = "${RDSCTL_NONEXISTENT_VAR:-cn-east-3}"
project_id = "${RDSCTL_NONEXISTENT_VAR}"
"#;

        let expanded = Config::expand_env_vars(content);
        assert!(expanded.contains(r#"region = "cn-east-3""#));
        assert!(expanded.contains("${RDSCTL_NONEXISTENT_VAR}"));
    }

    #[test]
    fn test_profile_resolution() {
        let mut config = Config::default();
        config.set_profile("staging".to_string(), profile("cn-east-3"));
        config.set_profile("prod".to_string(), profile("cn-north-4"));

        // first by name when no default
        assert_eq!(config.resolve_profile(None).unwrap(), "prod");

        config.default_profile = Some("staging".to_string());
        assert_eq!(config.resolve_profile(None).unwrap(), "staging");
        assert_eq!(config.resolve_profile(Some("prod")).unwrap(), "prod");

        let err = config.resolve_profile(Some("missing")).unwrap_err();
        assert!(matches!(err, ConfigError::ProfileNotFound { .. }));
    }

    #[test]
    fn test_no_profile_errors() {
        let config = Config::default();
        let err = config.resolve_profile(None).unwrap_err();
        assert!(err.to_string().contains("rdsctl profile set"));
    }

    #[test]
    fn test_remove_clears_default() {
        let mut config = Config::default();
        config.set_profile("prod".to_string(), profile("cn-north-4"));
        config.default_profile = Some("prod".to_string());

        assert!(config.remove_profile("prod").is_some());
        assert_eq!(config.default_profile, None);
        assert!(config.remove_profile("prod").is_none());
    }

    #[test]
    #[serial_test::serial]
    fn test_auth_token_resolution() {
        unsafe {
            std::env::remove_var(AUTH_TOKEN_ENV);
        }

        let mut prod = profile("cn-north-4");
        assert!(prod.resolve_auth_token().is_err());

        prod.auth_token = Some("inline-token".to_string());
        assert_eq!(prod.resolve_auth_token().unwrap(), "inline-token");

        unsafe {
            std::env::set_var(AUTH_TOKEN_ENV, "env-token");
        }
        assert_eq!(prod.resolve_auth_token().unwrap(), "env-token");
        prod.auth_token = None;
        assert_eq!(prod.resolve_auth_token().unwrap(), "env-token");

        unsafe {
            std::env::remove_var(AUTH_TOKEN_ENV);
        }
    }
}
