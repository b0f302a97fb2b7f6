//! # rds-model
//!
//! Typed request, response and record definitions for the RDS v3 management
//! API.
//!
//! Every record is a plain serde struct whose field names and optionality
//! mirror one JSON object on the wire. Optional fields are `Option<T>` and are
//! left out of the JSON when absent. Responses additionally carry the HTTP
//! status code of the call they came from; that field never appears in JSON.
//!
//! Fields restricted to a fixed vocabulary are declared with
//! [`closed_enum!`], which generates a Rust enum plus the JSON codec in
//! [`codec`]. Unregistered values from the server are preserved rather than
//! rejected; use [`ClosedValue::decode_strict`] to enforce the closed set.
//!
//! ```rust
//! use rds_model::model::backup::{BackupStatus, ListBackupsResponse};
//! use rds_model::{ApiResponse, Describe};
//!
//! let mut response: ListBackupsResponse = serde_json::from_str(
//!     r#"{"backups":[{"id":"b1","name":"nightly","status":"COMPLETED"}],"total_count":1}"#,
//! )
//! .unwrap();
//! response.set_http_status_code(200);
//!
//! let backups = response.backups.as_ref().unwrap();
//! assert_eq!(backups[0].status, Some(BackupStatus::Completed));
//! assert!(!response.describe().contains("http_status_code"));
//! ```

pub mod catalog;
pub mod codec;
pub mod describe;
pub mod error;
pub mod model;
pub mod params;
pub mod time;

pub use codec::{ClosedValue, Scalar, ScalarKind};
pub use describe::{ApiResponse, Describe};
pub use error::{CodecError, Result};
pub use params::QueryParameter;
