//! Operation catalog
//!
//! Each request type from `rds-model` is bound to one HTTP operation: a
//! name, a method and a URI template. The template's `{project_id}`
//! placeholder comes from the client; every other placeholder is a field of
//! the request. Query parameters and the `X-Language` header are also read
//! from request fields, and a `body` field, when present, is the JSON body.
//!
//! [`catalog`] exposes every operation without its Rust types so the CLI can
//! drive them from JSON.

use futures::future::BoxFuture;
use rds_model::{ApiResponse, Describe};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::RdsClient;
use crate::error::Result;
use crate::request::{self, PreparedRequest};

/// Binds a request type to its operation
///
/// ```text
/// operation! {
///     ListInstancesRequest => ListInstancesResponse,
///     "ListInstances", Get "/v3/{project_id}/instances",
///     path: [],
///     query: [id, instance_type => "type", limit],
///     body: none,
/// }
/// ```
///
/// `body` is `none`, `required` (a `body` field) or `optional` (an
/// `Option` `body` field, omitted when `None`).
macro_rules! operation {
    (
        $request:ident => $response:ident,
        $name:literal, $method:ident $path:literal,
        path: [$($pfield:ident),* $(,)?],
        query: [$($qfield:ident $(=> $qkey:literal)?),* $(,)?],
        body: $body:ident $(,)?
    ) => {
        impl $crate::operations::Operation for $request {
            type Response = $response;

            const DEF: $crate::operations::RequestDef = $crate::operations::RequestDef {
                name: $name,
                method: $crate::operations::HttpMethod::$method,
                path: $path,
            };

            fn path_params(&self) -> Vec<(&'static str, Option<String>)> {
                vec![$(
                    (
                        stringify!($pfield),
                        ::rds_model::QueryParameter::to_query_value(&self.$pfield),
                    )
                ),*]
            }

            fn query_params(&self) -> Vec<(&'static str, Option<String>)> {
                vec![$(
                    (
                        query_key!($qfield $(, $qkey)?),
                        ::rds_model::QueryParameter::to_query_value(&self.$qfield),
                    )
                ),*]
            }

            fn header_params(&self) -> Vec<(&'static str, Option<String>)> {
                vec![(
                    "X-Language",
                    ::rds_model::QueryParameter::to_query_value(&self.x_language),
                )]
            }

            fn body(&self) -> $crate::error::Result<Option<::serde_json::Value>> {
                operation_body!(self, $body)
            }
        }
    };
}

macro_rules! query_key {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $key:literal) => {
        $key
    };
}

macro_rules! operation_body {
    ($this:ident, none) => {
        Ok(None)
    };
    ($this:ident, required) => {
        Ok(Some(::serde_json::to_value(&$this.body)?))
    };
    ($this:ident, optional) => {
        Ok($this.body.as_ref().map(::serde_json::to_value).transpose()?)
    };
}

pub mod backup;
pub mod configuration;
pub mod diagnosis;
pub mod instance;
pub mod job;
pub mod log;
pub mod mysql;
pub mod postgresql;
pub mod proxy;
pub mod sqlserver;
pub mod tag;

/// HTTP method of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether sending the request twice has the same effect as once
    #[must_use]
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, HttpMethod::Post)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequestDef {
    /// Operation name, e.g. `ListInstances`
    pub name: &'static str,
    pub method: HttpMethod,
    /// URI template with `{placeholder}` segments
    pub path: &'static str,
}

/// A request type bound to an operation
pub trait Operation: Describe + DeserializeOwned + Send + Sync + 'static {
    /// Typed response of the operation
    type Response: ApiResponse + Describe + DeserializeOwned + Send + 'static;

    const DEF: RequestDef;

    /// Path placeholders in template order, `None` when the field is empty
    fn path_params(&self) -> Vec<(&'static str, Option<String>)>;

    /// Query parameters in declaration order, `None` when absent
    fn query_params(&self) -> Vec<(&'static str, Option<String>)>;

    /// Header parameters, `None` when absent
    fn header_params(&self) -> Vec<(&'static str, Option<String>)>;

    /// JSON body, if the operation sends one
    fn body(&self) -> Result<Option<Value>>;
}

/// Outcome of a type-erased call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallOutput {
    pub http_status_code: u16,
    pub body: Value,
}

type PrepareFn = fn(&str, &str, Value) -> Result<PreparedRequest>;
type DescribeFn = fn(&[u8]) -> Result<String>;
type InvokeFn = for<'a> fn(&'a RdsClient, Value) -> BoxFuture<'a, Result<CallOutput>>;

/// An operation, type-erased
#[derive(Clone, Copy)]
pub struct OperationEntry {
    pub def: RequestDef,
    /// API area the operation belongs to, e.g. `backup`
    pub group: &'static str,
    /// Rust type name of the request
    pub request_type: &'static str,
    /// Rust type name of the response
    pub response_type: &'static str,
    prepare: PrepareFn,
    describe_request: DescribeFn,
    describe_response: DescribeFn,
    invoke: InvokeFn,
}

impl OperationEntry {
    pub(crate) fn of<O: Operation>(group: &'static str) -> Self {
        Self {
            def: O::DEF,
            group,
            request_type: <O as Describe>::TYPE_NAME,
            response_type: <O::Response as Describe>::TYPE_NAME,
            prepare: prepare_json::<O>,
            describe_request: describe_json::<O>,
            describe_response: describe_json::<O::Response>,
            invoke: invoke_json::<O>,
        }
    }

    /// Builds the HTTP request for a JSON-encoded request record
    pub fn prepare_json(
        &self,
        endpoint: &str,
        project_id: &str,
        input: Value,
    ) -> Result<PreparedRequest> {
        (self.prepare)(endpoint, project_id, input)
    }

    /// Decodes a request record and renders it with `describe`
    pub fn decode_request(&self, raw: &[u8]) -> Result<String> {
        (self.describe_request)(raw)
    }

    /// Decodes a response body and renders it with `describe`
    pub fn decode_response(&self, raw: &[u8]) -> Result<String> {
        (self.describe_response)(raw)
    }

    /// Sends a JSON-encoded request record and returns the decoded response
    pub fn invoke_json<'a>(
        &self,
        client: &'a RdsClient,
        input: Value,
    ) -> BoxFuture<'a, Result<CallOutput>> {
        (self.invoke)(client, input)
    }
}

impl std::fmt::Debug for OperationEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationEntry")
            .field("def", &self.def)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}

fn prepare_json<O: Operation>(
    endpoint: &str,
    project_id: &str,
    input: Value,
) -> Result<PreparedRequest> {
    let op: O = serde_json::from_value(input)?;
    request::prepare(endpoint, project_id, &op)
}

fn describe_json<T: Describe + DeserializeOwned>(raw: &[u8]) -> Result<String> {
    let raw = if raw.iter().all(u8::is_ascii_whitespace) {
        b"{}".as_slice()
    } else {
        raw
    };
    let value: T = serde_json::from_slice(raw)?;
    Ok(value.describe())
}

fn invoke_json<O: Operation>(client: &RdsClient, input: Value) -> BoxFuture<'_, Result<CallOutput>> {
    Box::pin(async move {
        let op: O = serde_json::from_value(input)?;
        let response = client.call(&op).await?;
        Ok(CallOutput {
            http_status_code: response.http_status_code(),
            body: serde_json::to_value(&response)?,
        })
    })
}

/// Every operation, sorted by name
#[must_use]
pub fn catalog() -> Vec<OperationEntry> {
    let mut entries = Vec::new();
    entries.extend(instance::entries());
    entries.extend(backup::entries());
    entries.extend(configuration::entries());
    entries.extend(mysql::entries());
    entries.extend(postgresql::entries());
    entries.extend(sqlserver::entries());
    entries.extend(proxy::entries());
    entries.extend(log::entries());
    entries.extend(tag::entries());
    entries.extend(diagnosis::entries());
    entries.extend(job::entries());
    entries.sort_by_key(|entry| entry.def.name);
    entries
}

/// Looks an operation up by its exact name
#[must_use]
pub fn find(name: &str) -> Option<OperationEntry> {
    catalog().into_iter().find(|entry| entry.def.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        let entries = catalog();
        assert_eq!(entries.len(), 117);
        let names: HashSet<_> = entries.iter().map(|e| e.def.name).collect();
        assert_eq!(names.len(), entries.len());
    }

    #[test]
    fn test_names_match_request_types() {
        for entry in catalog() {
            assert_eq!(
                format!("{}Request", entry.def.name),
                entry.request_type,
                "{}",
                entry.def.name
            );
            assert_eq!(format!("{}Response", entry.def.name), entry.response_type);
        }
    }

    #[test]
    fn test_templates_are_project_scoped() {
        for entry in catalog() {
            let path = entry.def.path;
            assert!(
                path.starts_with("/v3/{project_id}/") || path.starts_with("/v3.1/{project_id}/"),
                "{path}"
            );
        }
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let entry = find("ListBackups").unwrap();
        assert_eq!(entry.def.method, HttpMethod::Get);
        assert_eq!(entry.group, "backup");
        assert!(find("listbackups").is_none());
    }

    #[test]
    fn test_decode_response_accepts_empty_body() {
        let entry = find("DeleteManualBackup").unwrap();
        assert_eq!(
            entry.decode_response(b"").unwrap(),
            "DeleteManualBackupResponse {}"
        );
        assert!(entry.decode_request(b"{}").is_err());
    }
}
