//! Configuration errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("Cannot read {path}: {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file or its directory could not be written
    #[error("Cannot write {path}: {source}")]
    SaveError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Cannot encode config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("No profiles configured. Use 'rdsctl profile set' to create one.")]
    NoProfiles,

    /// Neither the profile nor the environment carries a token
    #[error("No auth token in the profile and RDSCTL_AUTH_TOKEN is not set")]
    MissingAuthToken,

    /// A stored token reference could not be resolved
    #[error("Cannot resolve auth token: {0}")]
    CredentialError(String),

    #[cfg(feature = "secure-storage")]
    #[error("Keyring error: {0}")]
    KeyringError(String),

    #[error("Cannot determine the config directory")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
