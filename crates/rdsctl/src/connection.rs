//! Profile resolution and client construction

use anyhow::Context;
use rds_core::{Config, Profile, RdsClient, RetryConfig};
use tracing::{debug, info};

use crate::error::Result as CliResult;

/// Loaded configuration plus the global flags that shape a client
#[derive(Clone)]
pub struct ConnectionManager {
    pub config: Config,
    pub config_path: Option<std::path::PathBuf>,
    pub retry_override: Option<RetryConfig>,
}

impl ConnectionManager {
    /// Create a new connection manager with a custom config path
    pub fn with_config_path(config: Config, config_path: Option<std::path::PathBuf>) -> Self {
        Self {
            config,
            config_path,
            retry_override: None,
        }
    }

    /// Use `retry` instead of each profile's retry policy
    pub fn with_retry(mut self, retry: Option<RetryConfig>) -> Self {
        self.retry_override = retry;
        self
    }

    /// Save the configuration to the appropriate location
    pub fn save_config(&self) -> CliResult<()> {
        if let Some(ref path) = self.config_path {
            self.config
                .save_to_path(path)
                .context("Failed to save configuration")?;
        } else {
            self.config.save().context("Failed to save configuration")?;
        }
        Ok(())
    }

    /// Resolve a profile by explicit name, default, or first by name
    pub fn resolve_profile(&self, profile_name: Option<&str>) -> CliResult<(String, &Profile)> {
        let name = self.config.resolve_profile(profile_name)?;
        let profile = self.config.profile(&name)?;
        Ok((name, profile))
    }

    /// Create a client for the resolved profile
    pub fn create_client(&self, profile_name: Option<&str>) -> CliResult<RdsClient> {
        let (name, profile) = self.resolve_profile(profile_name)?;
        info!("Using profile: {}", name);

        let mut profile = profile.clone();
        if let Some(retry) = &self.retry_override {
            debug!(
                max_attempts = retry.attempts(),
                "Overriding profile retry policy"
            );
            profile.retry = Some(retry.clone());
        }

        Ok(RdsClient::from_profile(&profile)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_profile_uses_default() {
        let mut config = Config::default();
        config.set_profile("a".to_string(), Profile::new("cn-north-4", "p-a"));
        config.set_profile("b".to_string(), Profile::new("cn-east-3", "p-b"));
        config.default_profile = Some("b".to_string());

        let conn_mgr = ConnectionManager::with_config_path(config, None);
        let (name, profile) = conn_mgr.resolve_profile(None).unwrap();
        assert_eq!(name, "b");
        assert_eq!(profile.project_id, "p-b");
        assert!(conn_mgr.resolve_profile(Some("c")).is_err());
    }

    #[test]
    fn test_create_client_with_inline_token() {
        let mut profile = Profile::new("cn-north-4", "p-a");
        profile.auth_token = Some("token".to_string());
        let mut config = Config::default();
        config.set_profile("a".to_string(), profile);

        let conn_mgr = ConnectionManager::with_config_path(config, None)
            .with_retry(Some(RetryConfig::disabled()));
        let client = conn_mgr.create_client(None).unwrap();
        assert_eq!(client.endpoint(), "https://rds.cn-north-4.myhuaweicloud.com");
        assert_eq!(client.project_id(), "p-a");
    }
}
