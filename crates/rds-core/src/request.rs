//! Turning a typed request into an HTTP request
//!
//! Preparation is pure: it renders the URI template, query string, headers
//! and body without touching the network. The client sends the result, and
//! `rdsctl request` prints it as a dry run.

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::error::{CoreError, Result};
use crate::operations::{HttpMethod, Operation};

/// Content type sent with every JSON body
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// A fully rendered HTTP request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedRequest {
    /// Operation name
    pub operation: &'static str,
    pub method: HttpMethod,
    pub url: String,
    /// Headers in the order they are sent; the auth token is not included
    pub headers: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl PreparedRequest {
    /// Value of a header, ignoring ASCII case in the name
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Prepares `op` against `endpoint` for `project_id`
///
/// Fails with [`CoreError::MissingParameter`] when `project_id` or any path
/// parameter is empty.
pub fn prepare<O: Operation>(endpoint: &str, project_id: &str, op: &O) -> Result<PreparedRequest> {
    let def = O::DEF;
    let mut path = def.path.to_string();

    let project_id = Some(project_id.to_string());
    for (name, value) in std::iter::once(("project_id", project_id)).chain(op.path_params()) {
        let value = value
            .filter(|v| !v.is_empty())
            .ok_or(CoreError::MissingParameter {
                operation: def.name,
                name,
            })?;
        path = path.replace(&format!("{{{name}}}"), &urlencoding::encode(&value));
    }

    let mut url = format!("{}{}", endpoint.trim_end_matches('/'), path);

    let query: Vec<(&str, String)> = op
        .query_params()
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&serde_urlencoded::to_string(&query)?);
    }

    let body = op.body()?;

    let mut headers: Vec<(String, String)> = op
        .header_params()
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
        .collect();
    if body.is_some() {
        headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
    }

    trace!(operation = def.name, method = %def.method, %url, "Prepared request");

    Ok(PreparedRequest {
        operation: def.name,
        method: def.method,
        url,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rds_model::model::backup::{BackupType, ListBackupsRequest};
    use rds_model::model::common::{DatastoreName, Language};
    use rds_model::model::instance::{
        DeleteInstanceRequest, InstanceType, ListFlavorsRequest, ListInstancesRequest,
        RestartInstanceRequest, RestartInstanceRequestBody,
    };
    use rds_model::model::mysql::DeleteDatabaseRequest;
    use serde_json::json;

    const ENDPOINT: &str = "https://rds.cn-north-4.myhuaweicloud.com";
    const PROJECT: &str = "0549b4a43100d4f32f51c01c2fe4acdb";

    #[test]
    fn test_query_in_declaration_order() {
        let request = ListInstancesRequest::builder()
            .limit(10)
            .instance_type(InstanceType::Single)
            .name("orders")
            .build();
        let prepared = prepare(ENDPOINT, PROJECT, &request).unwrap();
        assert_eq!(prepared.method, HttpMethod::Get);
        assert_eq!(
            prepared.url,
            format!("{ENDPOINT}/v3/{PROJECT}/instances?name=orders&type=Single&limit=10")
        );
        assert!(prepared.headers.is_empty());
        assert_eq!(prepared.body, None);
    }

    #[test]
    fn test_path_parameters_are_encoded() {
        let request = DeleteDatabaseRequest::builder()
            .instance_id("i-1")
            .db_name("sales db/2024")
            .build();
        let prepared = prepare(ENDPOINT, PROJECT, &request).unwrap();
        assert_eq!(
            prepared.url,
            format!("{ENDPOINT}/v3/{PROJECT}/instances/i-1/database/sales%20db%2F2024")
        );
        assert_eq!(prepared.method, HttpMethod::Delete);
    }

    #[test]
    fn test_enum_path_parameter() {
        let request = ListFlavorsRequest::builder()
            .database_name(DatastoreName::PostgreSql)
            .version_name("14")
            .build();
        let prepared = prepare(ENDPOINT, PROJECT, &request).unwrap();
        assert_eq!(
            prepared.url,
            format!("{ENDPOINT}/v3/{PROJECT}/flavors/postgresql?version_name=14")
        );
    }

    #[test]
    fn test_query_values_are_form_encoded() {
        let request = ListBackupsRequest::builder()
            .instance_id("i-1")
            .backup_type(BackupType::Manual)
            .begin_time("2024-03-01T08:00:00+0800")
            .build();
        let prepared = prepare(ENDPOINT, PROJECT, &request).unwrap();
        assert!(prepared.url.ends_with(
            "/backups?instance_id=i-1&backup_type=manual&begin_time=2024-03-01T08%3A00%3A00%2B0800"
        ));
    }

    #[test]
    fn test_missing_path_parameter() {
        let request = DeleteInstanceRequest::builder().instance_id("").build();
        let err = prepare(ENDPOINT, PROJECT, &request).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingParameter {
                operation: "DeleteInstance",
                name: "instance_id"
            }
        ));

        let request = DeleteInstanceRequest::builder().instance_id("i-1").build();
        let err = prepare(ENDPOINT, "", &request).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingParameter {
                name: "project_id",
                ..
            }
        ));
    }

    #[test]
    fn test_language_header_and_optional_body() {
        let without_body = RestartInstanceRequest::builder()
            .instance_id("i-1")
            .x_language(Language::EnUs)
            .build();
        let prepared = prepare(ENDPOINT, PROJECT, &without_body).unwrap();
        assert_eq!(prepared.header("x-language"), Some("en-us"));
        assert_eq!(prepared.header("Content-Type"), None);
        assert_eq!(prepared.body, None);

        let with_body = RestartInstanceRequest::builder()
            .instance_id("i-1")
            .body(RestartInstanceRequestBody::default())
            .build();
        let prepared = prepare(format!("{ENDPOINT}/").as_str(), PROJECT, &with_body).unwrap();
        assert_eq!(
            prepared.url,
            format!("{ENDPOINT}/v3/{PROJECT}/instances/i-1/action")
        );
        assert_eq!(prepared.header("Content-Type"), Some(JSON_CONTENT_TYPE));
        assert_eq!(prepared.body, Some(json!({"restart": {}})));
    }
}
