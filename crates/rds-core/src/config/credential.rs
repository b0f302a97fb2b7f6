//! Credential storage with optional keyring support
//!
//! A profile's auth token is either stored inline or as a `keyring:<key>`
//! reference. An environment variable, when set, always wins.

use super::error::{ConfigError, Result};
use std::env;

/// Prefix that indicates a value should be retrieved from the keyring
const KEYRING_PREFIX: &str = "keyring:";

/// Service name for keyring entries
#[cfg(feature = "secure-storage")]
const SERVICE_NAME: &str = "rdsctl";

/// Storage backend for credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStorage {
    /// Store in OS keyring
    #[cfg(feature = "secure-storage")]
    Keyring,
    /// Store as plaintext
    Plaintext,
}

/// Credential store abstraction
#[derive(Debug)]
pub struct CredentialStore {
    storage: CredentialStorage,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore {
    /// Create a credential store, preferring the keyring when it is usable
    pub fn new() -> Self {
        #[cfg(feature = "secure-storage")]
        {
            if Self::is_keyring_available() {
                return Self {
                    storage: CredentialStorage::Keyring,
                };
            }
        }
        Self::plaintext()
    }

    /// A store that never touches the keyring
    pub fn plaintext() -> Self {
        Self {
            storage: CredentialStorage::Plaintext,
        }
    }

    #[cfg(feature = "secure-storage")]
    fn is_keyring_available() -> bool {
        match keyring::Entry::new(SERVICE_NAME, "__availability_check__") {
            Ok(entry) => {
                let _ = entry.get_password();
                true
            }
            Err(_) => false,
        }
    }

    /// Store a credential and return the value to write into the config
    ///
    /// With the keyring backend this is a `keyring:<key>` reference,
    /// otherwise the value itself.
    pub fn store_credential(&self, key: &str, value: &str) -> Result<String> {
        match self.storage {
            #[cfg(feature = "secure-storage")]
            CredentialStorage::Keyring => {
                let entry = keyring::Entry::new(SERVICE_NAME, key)
                    .map_err(|e| ConfigError::KeyringError(e.to_string()))?;
                entry.set_password(value).map_err(|e| {
                    ConfigError::KeyringError(format!(
                        "Failed to store credential in keyring: {e}"
                    ))
                })?;
                Ok(format!("{KEYRING_PREFIX}{key}"))
            }
            CredentialStorage::Plaintext => {
                let _ = key;
                Ok(value.to_string())
            }
        }
    }

    /// Retrieve a credential value
    ///
    /// Resolution order:
    /// 1. The environment variable, if given and set
    /// 2. The keyring, if the value is a `keyring:` reference
    /// 3. The value itself
    pub fn get_credential(&self, value: &str, env_var: Option<&str>) -> Result<String> {
        if let Some(var) = env_var
            && let Ok(env_value) = env::var(var)
        {
            return Ok(env_value);
        }

        let Some(key) = value.strip_prefix(KEYRING_PREFIX) else {
            return Ok(value.to_string());
        };

        #[cfg(feature = "secure-storage")]
        {
            let entry = keyring::Entry::new(SERVICE_NAME, key)
                .map_err(|e| ConfigError::KeyringError(e.to_string()))?;
            entry.get_password().map_err(|e| {
                ConfigError::KeyringError(format!(
                    "Failed to retrieve credential '{key}' from keyring: {e}"
                ))
            })
        }
        #[cfg(not(feature = "secure-storage"))]
        {
            Err(ConfigError::CredentialError(format!(
                "'{key}' references the keyring but the secure-storage feature is not enabled"
            )))
        }
    }

    /// Delete a credential referenced by `value`; plaintext values are a no-op
    pub fn delete_credential(&self, value: &str) -> Result<()> {
        let Some(key) = value.strip_prefix(KEYRING_PREFIX) else {
            return Ok(());
        };

        #[cfg(feature = "secure-storage")]
        {
            let entry = keyring::Entry::new(SERVICE_NAME, key)
                .map_err(|e| ConfigError::KeyringError(e.to_string()))?;
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
                Err(e) => Err(ConfigError::KeyringError(format!(
                    "Failed to delete credential from keyring: {e}"
                ))),
            }
        }
        #[cfg(not(feature = "secure-storage"))]
        {
            let _ = key;
            Ok(())
        }
    }

    /// Check if a value is a keyring reference
    pub fn is_keyring_reference(value: &str) -> bool {
        value.starts_with(KEYRING_PREFIX)
    }

    /// Name of the active backend
    pub fn storage_backend(&self) -> &'static str {
        match self.storage {
            #[cfg(feature = "secure-storage")]
            CredentialStorage::Keyring => "keyring",
            CredentialStorage::Plaintext => "plaintext",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_storage() {
        let store = CredentialStore::plaintext();
        assert_eq!(store.get_credential("token-abc", None).unwrap(), "token-abc");
        assert_eq!(store.store_credential("k", "token-abc").unwrap(), "token-abc");
        assert_eq!(store.storage_backend(), "plaintext");
    }

    #[test]
    #[serial_test::serial]
    fn test_env_var_override() {
        unsafe {
            env::set_var("RDSCTL_TEST_CREDENTIAL", "env-value");
        }

        let store = CredentialStore::plaintext();
        let result = store
            .get_credential("config-value", Some("RDSCTL_TEST_CREDENTIAL"))
            .unwrap();
        assert_eq!(result, "env-value");

        unsafe {
            env::remove_var("RDSCTL_TEST_CREDENTIAL");
        }
    }

    #[test]
    fn test_keyring_reference_detection() {
        assert!(CredentialStore::is_keyring_reference("keyring:prod-token"));
        assert!(!CredentialStore::is_keyring_reference("prod-token"));
        assert!(!CredentialStore::is_keyring_reference(""));
    }

    #[cfg(not(feature = "secure-storage"))]
    #[test]
    fn test_keyring_reference_without_feature() {
        let store = CredentialStore::plaintext();
        let err = store.get_credential("keyring:prod-token", None).unwrap_err();
        assert!(err.to_string().contains("secure-storage"));
        assert!(store.delete_credential("keyring:prod-token").is_ok());
    }

    #[cfg(feature = "secure-storage")]
    #[test]
    #[ignore = "Requires keyring service to be available"]
    fn test_keyring_storage() {
        let store = CredentialStore::new();
        let reference = store.store_credential("rdsctl-test", "secret").unwrap();
        assert!(reference.starts_with(KEYRING_PREFIX));
        assert_eq!(store.get_credential(&reference, None).unwrap(), "secret");
        let _ = store.delete_credential(&reference);
    }
}
