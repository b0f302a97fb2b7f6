//! HTTP client for the RDS v3 API
//!
//! [`RdsClient`] is bound to one endpoint and project and authenticates every
//! request with an `X-Auth-Token` header. Throttled and server-error
//! responses are retried according to the profile's [`RetryConfig`].

use std::time::Duration;

use rds_model::ApiResponse;
use rds_model::QueryParameter;
use rds_model::model::common::Language;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{Profile, RetryConfig};
use crate::error::{CoreError, Result};
use crate::operations::{HttpMethod, Operation};
use crate::request::{self, PreparedRequest};

/// Header carrying the IAM token
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Header the service uses to identify a request in error reports
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Status, request id and body of a response, before decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub request_id: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Throttling is always retryable; a 5xx only for idempotent methods
    fn is_retryable(&self, method: HttpMethod) -> bool {
        self.status == 429 || (method.is_idempotent() && (500..600).contains(&self.status))
    }
}

/// Client bound to one endpoint and project
#[derive(Debug, Clone)]
pub struct RdsClient {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
    auth_token: String,
    language: Option<Language>,
    retry: RetryConfig,
}

/// Builder for [`RdsClient`]
#[derive(Debug, Clone)]
pub struct RdsClientBuilder {
    endpoint: String,
    project_id: String,
    auth_token: String,
    language: Option<Language>,
    retry: RetryConfig,
    timeout: Duration,
}

impl RdsClientBuilder {
    /// `X-Language` sent when a request does not set one
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    #[must_use]
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<RdsClient> {
        if self.endpoint.is_empty() {
            return Err(CoreError::Validation("endpoint must not be empty".to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("rdsctl/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(RdsClient {
            http,
            endpoint: self.endpoint.trim_end_matches('/').to_string(),
            project_id: self.project_id,
            auth_token: self.auth_token,
            language: self.language,
            retry: self.retry,
        })
    }
}

impl RdsClient {
    /// Start building a client
    pub fn builder(
        endpoint: impl Into<String>,
        project_id: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> RdsClientBuilder {
        RdsClientBuilder {
            endpoint: endpoint.into(),
            project_id: project_id.into(),
            auth_token: auth_token.into(),
            language: None,
            retry: RetryConfig::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build a client from a profile, resolving its endpoint and token
    pub fn from_profile(profile: &Profile) -> Result<Self> {
        let endpoint = profile
            .endpoint()
            .ok_or_else(|| CoreError::UnknownRegion(profile.region.clone()))?;
        let token = profile.resolve_auth_token()?;

        let mut builder = Self::builder(endpoint, profile.project_id.clone(), token)
            .retry(profile.retry_config());
        if let Some(language) = &profile.language {
            builder = builder.language(language.clone());
        }
        builder.build()
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Render `op` without sending it
    pub fn prepare<O: Operation>(&self, op: &O) -> Result<PreparedRequest> {
        let mut prepared = request::prepare(&self.endpoint, &self.project_id, op)?;
        if prepared.header("X-Language").is_none()
            && let Some(language) = self.language.to_query_value()
        {
            prepared.headers.insert(0, ("X-Language".to_string(), language));
        }
        Ok(prepared)
    }

    /// Send `op` and decode its typed response
    pub async fn call<O: Operation>(&self, op: &O) -> Result<O::Response> {
        let prepared = self.prepare(op)?;
        let raw = self.send(&prepared).await?;
        decode_response(raw)
    }

    /// Send a prepared request, retrying throttled and 5xx responses
    pub async fn send(&self, prepared: &PreparedRequest) -> Result<RawResponse> {
        let attempts = self.retry.attempts();
        let mut attempt = 1;
        loop {
            let result = self.send_once(prepared).await;
            let retryable = match &result {
                Ok(raw) => raw.is_retryable(prepared.method),
                Err(e) => e.is_retryable_for(prepared.method),
            };
            if !retryable || attempt >= attempts {
                return result;
            }

            let delay = self.retry.backoff(attempt);
            warn!(
                operation = prepared.operation,
                attempt,
                max_attempts = attempts,
                delay_ms = delay.as_millis() as u64,
                "Retrying request"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn send_once(&self, prepared: &PreparedRequest) -> Result<RawResponse> {
        debug!(
            operation = prepared.operation,
            method = %prepared.method,
            url = %prepared.url,
            "Sending request"
        );

        let mut builder = self
            .http
            .request(method(prepared.method), &prepared.url)
            .header(AUTH_TOKEN_HEADER, &self.auth_token);
        for (name, value) in &prepared.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &prepared.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        debug!(
            operation = prepared.operation,
            status,
            request_id = request_id.as_deref().unwrap_or("-"),
            bytes = body.len(),
            "Received response"
        );

        Ok(RawResponse {
            status,
            request_id,
            body,
        })
    }
}

fn method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

/// Decode a raw response into `R`
///
/// An empty body decodes as `{}`. The HTTP status is stored on the
/// response; non-2xx statuses become [`CoreError::Api`].
pub fn decode_response<R>(raw: RawResponse) -> Result<R>
where
    R: ApiResponse + DeserializeOwned,
{
    if !raw.is_success() {
        return Err(api_error(&raw));
    }

    let body: &[u8] = if raw.body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        &raw.body
    };
    let mut response: R = serde_json::from_slice(body)?;
    response.set_http_status_code(raw.status);
    Ok(response)
}

#[derive(Deserialize)]
struct ErrorBody {
    error_code: Option<String>,
    error_msg: Option<String>,
    error: Option<NestedError>,
}

#[derive(Deserialize)]
struct NestedError {
    code: Option<String>,
    message: Option<String>,
}

/// Build [`CoreError::Api`] from an error response
///
/// Understands `{"error_code", "error_msg"}` and `{"error": {"code",
/// "message"}}`; anything else keeps the raw body as the message.
#[must_use]
pub fn api_error(raw: &RawResponse) -> CoreError {
    let text = String::from_utf8_lossy(&raw.body).trim().to_string();
    let (code, message) = match serde_json::from_slice::<ErrorBody>(&raw.body) {
        Ok(ErrorBody {
            error_code: Some(code),
            error_msg,
            ..
        }) => (Some(code), error_msg),
        Ok(ErrorBody {
            error: Some(nested),
            ..
        }) => (nested.code, nested.message),
        Ok(ErrorBody { error_msg, .. }) => (None, error_msg),
        Err(_) => (None, None),
    };

    let message = message
        .or_else(|| (!text.is_empty()).then_some(text))
        .unwrap_or_else(|| format!("HTTP {}", raw.status));

    CoreError::Api {
        status: raw.status,
        code,
        message,
        request_id: raw.request_id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rds_model::model::backup::DeleteManualBackupResponse;
    use rds_model::model::instance::ListInstancesResponse;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            request_id: Some("req-42".to_string()),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_empty_body_decodes_as_empty_object() {
        let response: DeleteManualBackupResponse = decode_response(raw(200, "")).unwrap();
        assert_eq!(response.http_status_code, 200);
    }

    #[test]
    fn test_status_is_recorded() {
        let response: ListInstancesResponse =
            decode_response(raw(202, r#"{"instances":[],"total_count":0}"#)).unwrap();
        assert_eq!(response.http_status_code(), 202);
        assert_eq!(response.total_count, Some(0));
    }

    #[test]
    fn test_api_error_flat_shape() {
        let err = api_error(&raw(
            404,
            r#"{"error_code":"DBS.200019","error_msg":"The DB instance does not exist."}"#,
        ));
        match err {
            CoreError::Api {
                status,
                code,
                message,
                request_id,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code.as_deref(), Some("DBS.200019"));
                assert_eq!(message, "The DB instance does not exist.");
                assert_eq!(request_id.as_deref(), Some("req-42"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_nested_and_plain() {
        let nested = api_error(&raw(
            401,
            r#"{"error":{"code":"APIGW.0301","message":"Incorrect IAM authentication information"}}"#,
        ));
        assert!(nested.is_unauthorized());
        assert_eq!(nested.api_code(), Some("APIGW.0301"));

        let plain = api_error(&raw(502, "Bad Gateway"));
        assert!(plain.to_string().contains("Bad Gateway"));

        let empty = api_error(&raw(503, ""));
        assert!(empty.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_builder_rejects_empty_endpoint() {
        let err = RdsClient::builder("", "p", "t").build().unwrap_err();
        assert!(err.is_bad_request());
    }

    #[test]
    fn test_from_profile_unknown_region() {
        let mut profile = Profile::new("moon-base-1", "p");
        profile.auth_token = Some("t".to_string());
        let err = RdsClient::from_profile(&profile).unwrap_err();
        assert!(matches!(err, CoreError::UnknownRegion(region) if region == "moon-base-1"));
    }
}
