//! Unified error handling for rds-core
//!
//! Every fallible operation in the crate returns [`CoreError`]. API failures
//! keep the HTTP status plus the service's own error code so callers can
//! branch on them with the `is_*` helpers.
//!
//! # Example
//!
//! ```rust
//! use rds_core::CoreError;
//!
//! let err = CoreError::Api {
//!     status: 404,
//!     code: Some("DBS.200019".to_string()),
//!     message: "The DB instance does not exist.".to_string(),
//!     request_id: None,
//! };
//! assert!(err.is_not_found());
//! assert!(!err.is_retryable());
//! ```

use std::time::Duration;
use thiserror::Error;

use crate::config::ConfigError;
use crate::operations::HttpMethod;
use rds_model::CodecError;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Profile or config file problem
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Closed-value field could not be decoded
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Request or response JSON did not match the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Query string could not be encoded
    #[error("Query encoding error: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("API error ({status}{}): {message}", code_suffix(.code))]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
        request_id: Option<String>,
    },

    /// A path parameter was absent or empty
    #[error("{operation}: missing required path parameter '{name}'")]
    MissingParameter {
        operation: &'static str,
        name: &'static str,
    },

    /// No operation is registered under the name
    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),

    /// The region has no known endpoint and none was configured
    #[error("Unknown region '{0}'; set an explicit endpoint in the profile")]
    UnknownRegion(String),

    /// Job did not finish in time
    #[error("Job timed out after {0:?}")]
    JobTimeout(Duration),

    /// Job finished in the Failed state
    #[error("Job failed: {0}")]
    JobFailed(String),

    /// Caller-supplied input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// A time field in a response is not in the service format
    #[error("Cannot parse time '{raw}': {source}")]
    TimeFormat {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(", {c}")).unwrap_or_default()
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    fn status(&self) -> Option<u16> {
        match self {
            CoreError::Api { status, .. } => Some(*status),
            CoreError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if this is a "not found" error (404)
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true if this is an authentication/authorization error (401/403)
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Returns true if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }

    /// Returns true if this is a rate limiting error (429)
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    /// Returns true if this is a timeout error
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            CoreError::Http(e) => e.is_timeout(),
            CoreError::JobTimeout(_) => true,
            _ => false,
        }
    }

    /// Returns true if this is a bad request error (400)
    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        match self {
            CoreError::Validation(_) | CoreError::MissingParameter { .. } => true,
            _ => self.status() == Some(400),
        }
    }

    /// Returns true if this error is potentially retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            CoreError::Http(e) if e.is_connect() || e.is_timeout() => true,
            CoreError::JobTimeout(_) => true,
            _ => self.is_rate_limited() || self.is_server_error(),
        }
    }

    /// Whether a request with `method` may be sent again after this error
    ///
    /// A POST is only repeated when it never reached the service: a
    /// connect failure or throttling. Timeouts and 5xx may follow a create
    /// that already happened.
    #[must_use]
    pub fn is_retryable_for(&self, method: HttpMethod) -> bool {
        if method.is_idempotent() {
            return self.is_retryable();
        }
        match self {
            CoreError::Http(e) => e.is_connect(),
            _ => self.is_rate_limited(),
        }
    }

    /// Service error code such as `DBS.200019`, when the API returned one
    #[must_use]
    pub fn api_code(&self) -> Option<&str> {
        match self {
            CoreError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> CoreError {
        CoreError::Api {
            status,
            code: Some("DBS.01010101".to_string()),
            message: "boom".to_string(),
            request_id: Some("req-1".to_string()),
        }
    }

    #[test]
    fn test_status_helpers() {
        assert!(api(404).is_not_found());
        assert!(api(401).is_unauthorized());
        assert!(api(403).is_unauthorized());
        assert!(api(400).is_bad_request());
        assert!(api(503).is_server_error());
        assert!(api(429).is_rate_limited());
        assert!(!api(404).is_unauthorized());
    }

    #[test]
    fn test_retryable() {
        assert!(api(429).is_retryable());
        assert!(api(500).is_retryable());
        assert!(!api(400).is_retryable());
        assert!(!api(404).is_retryable());
    }

    #[test]
    fn test_post_is_not_repeated_after_server_error() {
        assert!(api(502).is_retryable_for(HttpMethod::Get));
        assert!(api(502).is_retryable_for(HttpMethod::Delete));
        assert!(!api(502).is_retryable_for(HttpMethod::Post));
        assert!(api(429).is_retryable_for(HttpMethod::Post));
        assert!(!CoreError::JobTimeout(Duration::from_secs(1)).is_retryable_for(HttpMethod::Post));
    }

    #[test]
    fn test_job_timeout() {
        let err = CoreError::JobTimeout(Duration::from_secs(600));
        assert!(err.is_timeout());
        assert!(err.is_retryable());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_is_bad_request() {
        let err = CoreError::Validation("page size must be between 1 and 100".to_string());
        assert!(err.is_bad_request());
        assert!(!err.is_retryable());

        let missing = CoreError::MissingParameter {
            operation: "DeleteInstance",
            name: "instance_id",
        };
        assert!(missing.is_bad_request());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            api(404).to_string(),
            "API error (404, DBS.01010101): boom"
        );
        let no_code = CoreError::Api {
            status: 502,
            code: None,
            message: "bad gateway".to_string(),
            request_id: None,
        };
        assert_eq!(no_code.to_string(), "API error (502): bad gateway");
        assert_eq!(api(404).api_code(), Some("DBS.01010101"));

        let timeout = CoreError::JobTimeout(Duration::from_secs(60));
        assert!(timeout.to_string().contains("timed out"));
    }
}
