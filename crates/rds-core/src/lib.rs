//! # rds-core
//!
//! Everything between the typed model in `rds-model` and the wire:
//!
//! - [`operations`] binds every request type to its method and URI template
//! - [`request`] renders a request into URL, headers and JSON body
//! - [`client`] sends it with `reqwest`, retrying throttled calls
//! - [`jobs`] and [`slowlog`] build longer workflows on top of single calls
//! - [`config`] stores named profiles in a TOML file
//!
//! ```rust,no_run
//! use rds_core::{Config, RdsClient};
//! use rds_model::model::instance::ListInstancesRequest;
//!
//! # async fn run() -> rds_core::Result<()> {
//! let config = Config::load()?;
//! let name = config.resolve_profile(None)?;
//! let client = RdsClient::from_profile(config.profile(&name)?)?;
//!
//! let request = ListInstancesRequest::builder().limit(10).build();
//! let response = client.call(&request).await?;
//! for instance in response.instances.unwrap_or_default() {
//!     println!("{} {:?}", instance.name, instance.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod jobs;
pub mod operations;
pub mod region;
pub mod request;
pub mod slowlog;

pub use client::RdsClient;
pub use config::{Config, ConfigError, Profile, RetryConfig};
pub use error::{CoreError, Result};
pub use jobs::{ProgressCallback, ProgressEvent, wait_for_job};
pub use operations::{HttpMethod, Operation, OperationEntry, RequestDef};
pub use request::PreparedRequest;
pub use slowlog::{SlowLogWindow, collect_slow_logs};
