//! Error types for rdsctl
//!
//! Library errors are folded into [`RdsCtlError`], which knows how to print
//! itself as a cargo-style diagnostic with tips.

use colored::Colorize;
use rds_core::{ConfigError, CoreError};
use thiserror::Error;

/// Cargo-style diagnostic formatter for CLI errors.
///
/// ```text
/// error: Profile 'prod' not found
///
///   tip: List available profiles: rdsctl profile list
/// ```
pub struct CliDiagnostic {
    message: String,
    tips: Vec<String>,
}

impl CliDiagnostic {
    /// Start a new error diagnostic with the given message.
    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            tips: Vec::new(),
        }
    }

    pub fn tip(mut self, description: &str) -> Self {
        self.tips.push(description.to_string());
        self
    }

    /// Print the diagnostic to stderr with colored formatting.
    pub fn print(&self) {
        eprint!("{}{}", "error".red().bold(), ": ".bold());
        eprintln!("{}", self.message);

        for tip in &self.tips {
            eprintln!();
            eprint!("  {}{}", "tip".yellow().bold(), ": ".bold());
            eprintln!("{}", tip);
        }
    }
}

/// Main error type for the rdsctl application
#[derive(Error, Debug)]
pub enum RdsCtlError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("No profile configured. Use 'rdsctl profile set' to configure a profile.")]
    NoProfileConfigured,

    #[error("Missing credentials: {message}")]
    MissingCredentials { message: String },

    #[error("Unknown operation '{name}'")]
    UnknownOperation { name: String },

    #[error("Unknown enum '{name}'")]
    UnknownEnum { name: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("API error: {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("File error for '{path}': {message}")]
    FileError { path: String, message: String },

    #[error("Connection error: {message}")]
    ConnectionError { message: String },

    #[error("Timeout: {message}")]
    Timeout { message: String },

    #[error("Output formatting error: {message}")]
    OutputError { message: String },
}

/// Result type for rdsctl operations
pub type Result<T> = std::result::Result<T, RdsCtlError>;

impl RdsCtlError {
    /// Get helpful suggestions for resolving this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            RdsCtlError::ProfileNotFound { name } => vec![
                "List available profiles: rdsctl profile list".to_string(),
                format!(
                    "Create profile '{name}': rdsctl profile set {name} --region <region> --project-id <id>"
                ),
            ],
            RdsCtlError::NoProfileConfigured => vec![
                "Create a profile: rdsctl profile set prod --region cn-north-4 --project-id <id>"
                    .to_string(),
                "View profile documentation: rdsctl profile --help".to_string(),
            ],
            RdsCtlError::MissingCredentials { .. } => vec![
                "Export a token: export RDSCTL_AUTH_TOKEN=<token>".to_string(),
                "Store it in the profile: rdsctl profile set <name> ... --auth-token <token>"
                    .to_string(),
            ],
            RdsCtlError::UnknownOperation { .. } => {
                vec!["List available operations: rdsctl ops list".to_string()]
            }
            RdsCtlError::UnknownEnum { .. } => {
                vec!["List available enums: rdsctl enums list".to_string()]
            }
            RdsCtlError::AuthenticationFailed { .. } => vec![
                "IAM tokens expire after 24 hours; request a new one".to_string(),
                "Check the profile's project id: rdsctl profile show <profile>".to_string(),
            ],
            RdsCtlError::ApiError { status: 404, .. } => vec![
                "Verify the resource ID is correct".to_string(),
                "Check that you're using the correct profile and region".to_string(),
            ],
            RdsCtlError::ConnectionError { .. } => vec![
                "Check network connectivity".to_string(),
                "Verify the endpoint: rdsctl profile show <profile>".to_string(),
            ],
            RdsCtlError::InvalidInput { .. } => vec![
                "Show the operation's request type: rdsctl ops show <operation>".to_string(),
            ],
            RdsCtlError::FileError { path, .. } => vec![
                format!("Check that file exists: {path}"),
                "Verify file permissions are correct".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Print a cargo-style diagnostic to stderr using colored formatting.
    pub fn print_diagnostic(&self) {
        let mut diag = CliDiagnostic::error(&self.to_string());

        for suggestion in self.suggestions() {
            diag = diag.tip(&suggestion);
        }

        diag.print();
    }
}

impl From<ConfigError> for RdsCtlError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound { name } => RdsCtlError::ProfileNotFound { name },
            ConfigError::NoProfiles => RdsCtlError::NoProfileConfigured,
            ConfigError::MissingAuthToken => RdsCtlError::MissingCredentials {
                message: err.to_string(),
            },
            ConfigError::CredentialError(message) => RdsCtlError::MissingCredentials { message },
            other => RdsCtlError::Configuration(other.to_string()),
        }
    }
}

impl From<CoreError> for RdsCtlError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        if err.is_unauthorized() {
            return RdsCtlError::AuthenticationFailed { message };
        }
        match err {
            CoreError::Config(config_err) => RdsCtlError::from(config_err),
            CoreError::UnknownOperation(name) => RdsCtlError::UnknownOperation { name },
            CoreError::JobTimeout(duration) => RdsCtlError::Timeout {
                message: format!("Job did not finish within {} seconds", duration.as_secs()),
            },
            CoreError::Http(http_err) if http_err.is_timeout() => RdsCtlError::Timeout { message },
            CoreError::Http(_) => RdsCtlError::ConnectionError { message },
            CoreError::Api { status, .. } => RdsCtlError::ApiError { status, message },
            other if other.is_bad_request() => RdsCtlError::InvalidInput { message },
            CoreError::Json(_) | CoreError::Codec(_) | CoreError::TimeFormat { .. } => {
                RdsCtlError::InvalidInput { message }
            }
            _ => RdsCtlError::Configuration(message),
        }
    }
}

impl From<rds_model::CodecError> for RdsCtlError {
    fn from(err: rds_model::CodecError) -> Self {
        RdsCtlError::InvalidInput {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RdsCtlError {
    fn from(err: serde_json::Error) -> Self {
        RdsCtlError::InvalidInput {
            message: format!("JSON error: {}", err),
        }
    }
}

impl From<std::io::Error> for RdsCtlError {
    fn from(err: std::io::Error) -> Self {
        RdsCtlError::OutputError {
            message: format!("IO error: {}", err),
        }
    }
}

impl From<anyhow::Error> for RdsCtlError {
    fn from(err: anyhow::Error) -> Self {
        RdsCtlError::OutputError {
            message: format!("{err:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_map_by_status() {
        let unauthorized = RdsCtlError::from(CoreError::Api {
            status: 401,
            code: Some("APIGW.0301".to_string()),
            message: "Incorrect IAM authentication information".to_string(),
            request_id: None,
        });
        assert!(matches!(
            unauthorized,
            RdsCtlError::AuthenticationFailed { .. }
        ));

        let missing = RdsCtlError::from(CoreError::Api {
            status: 404,
            code: None,
            message: "gone".to_string(),
            request_id: None,
        });
        assert!(matches!(missing, RdsCtlError::ApiError { status: 404, .. }));
        assert!(!missing.suggestions().is_empty());
    }

    #[test]
    fn test_config_errors_keep_their_kind() {
        let err = RdsCtlError::from(CoreError::Config(ConfigError::ProfileNotFound {
            name: "prod".to_string(),
        }));
        assert!(matches!(err, RdsCtlError::ProfileNotFound { ref name } if name == "prod"));
        assert!(err.suggestions()[1].contains("rdsctl profile set prod"));
    }

    #[test]
    fn test_missing_parameter_is_invalid_input() {
        let err = RdsCtlError::from(CoreError::MissingParameter {
            operation: "DeleteInstance",
            name: "instance_id",
        });
        assert!(matches!(err, RdsCtlError::InvalidInput { .. }));
        assert!(err.to_string().contains("instance_id"));
    }
}
