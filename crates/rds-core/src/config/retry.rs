//! Retry settings stored per profile

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry policy for throttled (429) and server-error (5xx) responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Whether retry is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Total attempts including the first one
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Initial backoff in milliseconds
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,

    /// Maximum backoff in milliseconds
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: 3,
            backoff_ms: 100,
            max_backoff_ms: 5000,
        }
    }
}

impl RetryConfig {
    /// A policy that sends every request exactly once
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Number of attempts the client will make, never less than one
    #[must_use]
    pub fn attempts(&self) -> u32 {
        if self.enabled {
            self.max_attempts.max(1)
        } else {
            1
        }
    }

    /// Delay before retry number `retry` (1-based), doubling up to the cap
    #[must_use]
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 1_u64 << retry.saturating_sub(1).min(16);
        Duration::from_millis(
            self.backoff_ms
                .saturating_mul(factor)
                .min(self.max_backoff_ms),
        )
    }
}

fn default_true() -> bool {
    true
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    100
}

fn default_max_backoff_ms() -> u64 {
    5000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_and_caps() {
        let retry = RetryConfig::default();
        assert_eq!(retry.backoff(1), Duration::from_millis(100));
        assert_eq!(retry.backoff(2), Duration::from_millis(200));
        assert_eq!(retry.backoff(3), Duration::from_millis(400));
        assert_eq!(retry.backoff(40), Duration::from_millis(5000));
    }

    #[test]
    fn test_attempts() {
        assert_eq!(RetryConfig::default().attempts(), 3);
        assert_eq!(RetryConfig::disabled().attempts(), 1);

        let zero = RetryConfig {
            max_attempts: 0,
            ..RetryConfig::default()
        };
        assert_eq!(zero.attempts(), 1);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let retry: RetryConfig = toml::from_str("max_attempts = 5").unwrap();
        assert!(retry.enabled);
        assert_eq!(retry.max_attempts, 5);
        assert_eq!(retry.backoff_ms, 100);
    }
}
