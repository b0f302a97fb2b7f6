//! Configuration and profile management
//!
//! - Multiple named profiles, one per region/project pair
//! - Auth tokens inline, from the environment, or from the OS keyring
//! - Environment variable expansion in the config file
//! - Platform-specific config file locations

#![allow(clippy::module_inception)]

pub mod config;
pub mod credential;
pub mod error;
pub mod retry;

pub use config::{AUTH_TOKEN_ENV, CONFIG_FILE_ENV, Config, Profile};
pub use credential::{CredentialStorage, CredentialStore};
pub use error::{ConfigError, Result};
pub use retry::RetryConfig;
