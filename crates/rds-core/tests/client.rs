//! Client behaviour against a mock RDS endpoint

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{FixedOffset, TimeZone};
use pretty_assertions::assert_eq;
use rds_core::jobs::{ProgressEvent, wait_for_job};
use rds_core::operations;
use rds_core::slowlog::{SlowLogWindow, collect_slow_logs};
use rds_core::{CoreError, RdsClient, RetryConfig};
use rds_model::model::backup::{CreateManualBackupRequest, CreateManualBackupRequestBody};
use rds_model::model::common::Language;
use rds_model::model::instance::{InstanceStatus, ListInstancesRequest};
use rds_model::model::job::JobStatus;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROJECT: &str = "0549b4a43100d4f32f51c01c2fe4acdb";
const TOKEN: &str = "test-token";

fn fast_retry() -> RetryConfig {
    RetryConfig {
        enabled: true,
        max_attempts: 3,
        backoff_ms: 1,
        max_backoff_ms: 5,
    }
}

fn client(server: &MockServer) -> RdsClient {
    RdsClient::builder(server.uri(), PROJECT, TOKEN)
        .retry(fast_retry())
        .build()
        .unwrap()
}

fn instances_path() -> String {
    format!("/v3/{PROJECT}/instances")
}

#[tokio::test]
async fn call_sends_token_and_decodes_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(instances_path()))
        .and(header("X-Auth-Token", TOKEN))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instances": [
                {"id": "i-1", "name": "orders", "status": "ACTIVE"},
                {"id": "i-2", "name": "billing", "status": "REBOOTING"}
            ],
            "total_count": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ListInstancesRequest::builder().limit(10).build();
    let response = client(&server).call(&request).await.unwrap();

    assert_eq!(response.http_status_code, 200);
    assert_eq!(response.total_count, Some(2));
    let instances = response.instances.unwrap();
    assert_eq!(instances[0].name, "orders");
    assert_eq!(instances[1].status, Some(InstanceStatus::Rebooting));
}

#[tokio::test]
async fn default_language_header_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(instances_path()))
        .and(header("X-Language", "en-us"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"instances": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RdsClient::builder(server.uri(), PROJECT, TOKEN)
        .language(Language::EnUs)
        .build()
        .unwrap();
    let response = client
        .call(&ListInstancesRequest::builder().build())
        .await
        .unwrap();
    assert_eq!(response.instances, Some(vec![]));
}

#[tokio::test]
async fn server_errors_are_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(instances_path()))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(instances_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_count": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .call(&ListInstancesRequest::builder().build())
        .await
        .unwrap();
    assert_eq!(response.total_count, Some(0));
}

#[tokio::test]
async fn retries_stop_at_max_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(instances_path()))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error_code": "APIGW.0308",
            "error_msg": "The throttling threshold has been reached"
        })))
        .expect(3)
        .mount(&server)
        .await;

    let err = client(&server)
        .call(&ListInstancesRequest::builder().build())
        .await
        .unwrap_err();
    assert!(err.is_rate_limited());
    assert_eq!(err.api_code(), Some("APIGW.0308"));
}

#[tokio::test]
async fn create_is_sent_once_after_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/v3/{PROJECT}/backups")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error_code": "DBS.200001",
            "error_msg": "Internal error"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateManualBackupRequest::builder()
        .body(
            CreateManualBackupRequestBody::builder()
                .instance_id("i-1")
                .name("before-upgrade")
                .build(),
        )
        .build();
    let err = client(&server).call(&request).await.unwrap_err();

    assert!(err.is_server_error());
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
}

#[tokio::test]
async fn throttled_create_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/v3/{PROJECT}/backups")))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/v3/{PROJECT}/backups")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "backup": {"id": "b-9", "instance_id": "i-1", "name": "nightly"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateManualBackupRequest::builder()
        .body(
            CreateManualBackupRequestBody::builder()
                .instance_id("i-1")
                .name("nightly")
                .build(),
        )
        .build();
    let response = client(&server).call(&request).await.unwrap();
    assert_eq!(response.http_status_code, 200);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(instances_path()))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "req-7")
                .set_body_json(json!({
                    "error_code": "DBS.200019",
                    "error_msg": "The DB instance does not exist."
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .call(&ListInstancesRequest::builder().id("gone").build())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
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
            assert_eq!(request_id.as_deref(), Some("req-7"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn catalog_entry_invokes_from_json() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/v3/{PROJECT}/backups/b-1")))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let entry = operations::find("DeleteManualBackup").unwrap();
    let output = entry
        .invoke_json(&client(&server), json!({"backup_id": "b-1"}))
        .await
        .unwrap();
    assert_eq!(output.http_status_code, 202);
    assert_eq!(output.body, json!({}));
}

#[tokio::test]
async fn wait_for_job_polls_until_completed() {
    let server = MockServer::start().await;
    let jobs = format!("/v3/{PROJECT}/jobs");

    Mock::given(method("GET"))
        .and(path(jobs.as_str()))
        .and(query_param("id", "job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job": {"id": "job-1", "name": "CreateMysqlInstance", "status": "Running", "process": "40%"}
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(jobs.as_str()))
        .and(query_param("id", "job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job": {"id": "job-1", "name": "CreateMysqlInstance", "status": "Completed", "process": "100%"}
        })))
        .mount(&server)
        .await;

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let job = wait_for_job(
        &client(&server),
        "job-1",
        Duration::from_secs(5),
        Duration::from_millis(10),
        Some(Box::new(move |event| sink.lock().unwrap().push(event))),
    )
    .await
    .unwrap();

    assert_eq!(job.status, Some(JobStatus::Completed));

    let events = events.lock().unwrap();
    assert!(matches!(events.first(), Some(ProgressEvent::Started { .. })));
    assert!(matches!(events.last(), Some(ProgressEvent::Completed { .. })));
    let polled: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            ProgressEvent::Polling { status, .. } => Some(status.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(polled, vec!["Running", "Completed"]);
}

#[tokio::test]
async fn wait_for_job_reports_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v3/{PROJECT}/jobs")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job": {"id": "job-2", "status": "Failed", "fail_reason": "insufficient quota"}
        })))
        .mount(&server)
        .await;

    let err = wait_for_job(
        &client(&server),
        "job-2",
        Duration::from_secs(5),
        Duration::from_millis(10),
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CoreError::JobFailed(reason) if reason == "insufficient quota"));
}

#[tokio::test]
async fn wait_for_job_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v3/{PROJECT}/jobs")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = wait_for_job(
        &client(&server),
        "job-3",
        Duration::from_millis(50),
        Duration::from_millis(20),
        None,
    )
    .await
    .unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn slow_logs_are_collected_across_pages() {
    let server = MockServer::start().await;
    let slowlog = format!("/v3/{PROJECT}/instances/i-1/slowlog");

    Mock::given(method("GET"))
        .and(path(slowlog.as_str()))
        .and(query_param("offset", "1"))
        .and(query_param("limit", "2"))
        .and(query_param("start_date", "2024-03-01T08:00:00+0800"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slow_log_list": [
                {"query_sample": "select 0", "start_time": "2024-03-01T08:00:00"},
                {"query_sample": "select 1", "start_time": "2024-03-01T08:05:00"}
            ],
            "total_record": 3
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(slowlog.as_str()))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slow_log_list": [
                {"query_sample": "select 2", "start_time": "2024-03-01T08:30:00"}
            ],
            "total_record": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tz = FixedOffset::east_opt(8 * 3600).unwrap();
    let mut window = SlowLogWindow::new(
        tz.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        tz.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    );
    window.page_size = 2;

    let logs = collect_slow_logs(&client(&server), "i-1", &window)
        .await
        .unwrap();
    let samples: Vec<_> = logs.iter().map(|l| l.query_sample.as_str()).collect();
    assert_eq!(samples, vec!["select 1", "select 2"]);
}

#[tokio::test]
async fn slow_log_with_bad_start_time_fails_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v3/{PROJECT}/instances/i-1/slowlog")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slow_log_list": [
                {"query_sample": "select 1", "start_time": "2024-03-01T08:05:00"},
                {"query_sample": "select 2", "start_time": "yesterday"}
            ],
            "total_record": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tz = FixedOffset::east_opt(8 * 3600).unwrap();
    let window = SlowLogWindow::new(
        tz.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        tz.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    );

    let err = collect_slow_logs(&client(&server), "i-1", &window)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::TimeFormat { ref raw, .. } if raw == "yesterday"));
}
