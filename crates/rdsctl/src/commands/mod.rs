//! Command implementations

pub mod enums;
pub mod job;
pub mod ops;
pub mod profile;
pub mod region;
pub mod slowlog;

use std::io::Read;

use crate::error::{RdsCtlError, Result as CliResult};

/// Read `--data`: inline text, `@path` for a file, `-` for stdin
///
/// `None` yields `default`, or stdin when `default` is `None`.
pub fn read_input(data: Option<&str>, default: Option<&str>) -> CliResult<String> {
    match (data, default) {
        (Some("-"), _) | (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        (Some(text), _) => match text.strip_prefix('@') {
            Some(path) => std::fs::read_to_string(path).map_err(|e| RdsCtlError::FileError {
                path: path.to_string(),
                message: e.to_string(),
            }),
            None => Ok(text.to_string()),
        },
        (None, Some(default)) => Ok(default.to_string()),
    }
}

/// Parse `--data` as a JSON value, `{}` when omitted
pub fn read_json(data: Option<&str>) -> CliResult<serde_json::Value> {
    let text = read_input(data, Some("{}"))?;
    serde_json::from_str(&text).map_err(|e| RdsCtlError::InvalidInput {
        message: format!("--data is not valid JSON: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_and_default_input() {
        assert_eq!(read_input(Some(r#"{"a":1}"#), None).unwrap(), r#"{"a":1}"#);
        assert_eq!(read_input(None, Some("{}")).unwrap(), "{}");
        assert_eq!(read_json(None).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_file_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.json");
        std::fs::write(&path, r#"{"backup_id":"b-1"}"#).unwrap();

        let arg = format!("@{}", path.display());
        let value = read_json(Some(&arg)).unwrap();
        assert_eq!(value["backup_id"], "b-1");

        let missing = read_input(Some("@/definitely/not/here.json"), None).unwrap_err();
        assert!(matches!(missing, RdsCtlError::FileError { .. }));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = read_json(Some("{not json")).unwrap_err();
        assert!(matches!(err, RdsCtlError::InvalidInput { .. }));
    }
}
