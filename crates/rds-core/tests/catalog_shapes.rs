//! Every catalog entry decodes its request and response records from JSON

use pretty_assertions::assert_eq;
use rds_core::operations::{self, OperationEntry};

/// Operations whose response body is a bare JSON array
const ARRAY_RESPONSES: &[&str] = &["ListPostgresqlHbaInfo"];

fn entry(name: &str) -> OperationEntry {
    operations::find(name).unwrap_or_else(|| panic!("{name} is not in the catalog"))
}

fn empty_body(entry: &OperationEntry) -> &'static [u8] {
    if ARRAY_RESPONSES.contains(&entry.def.name) {
        b"[]"
    } else {
        b"{}"
    }
}

#[test]
fn every_response_decodes_from_an_empty_body() {
    for entry in operations::catalog() {
        let rendered = entry
            .decode_response(empty_body(&entry))
            .unwrap_or_else(|e| panic!("{}: {e}", entry.def.name));
        assert!(
            rendered.starts_with(&format!("{} ", entry.response_type)),
            "{rendered}"
        );
    }
}

#[test]
fn every_response_ignores_unknown_fields_and_status() {
    for entry in operations::catalog() {
        if ARRAY_RESPONSES.contains(&entry.def.name) {
            continue;
        }
        let rendered = entry
            .decode_response(br#"{"http_status_code": 500, "added_by_a_newer_api": [1, 2]}"#)
            .unwrap_or_else(|e| panic!("{}: {e}", entry.def.name));
        assert_eq!(rendered, format!("{} {{}}", entry.response_type));
    }
}

#[test]
fn every_request_decode_returns_instead_of_panicking() {
    for entry in operations::catalog() {
        // Requests with required fields reject `{}`; the rest decode to an empty record
        if let Ok(rendered) = entry.decode_request(b"{}") {
            assert!(
                rendered.starts_with(&format!("{} ", entry.request_type)),
                "{rendered}"
            );
        }
        assert!(
            entry.decode_request(br#""not a record""#).is_err(),
            "{}",
            entry.def.name
        );
    }
}

#[test]
fn requests_without_required_fields_accept_an_empty_object() {
    for name in ["ListConfigurations", "ShowQuotas", "ListProjectTags"] {
        let entry = entry(name);
        assert_eq!(
            entry.decode_request(b"{}").unwrap(),
            format!("{name}Request {{}}")
        );
    }
}

/// Populated response bodies and a fragment each rendering must contain
const RESPONSE_FIXTURES: &[(&str, &str, &str)] = &[
    (
        "StopInstance",
        r#"{"job_id": "j-1"}"#,
        r#"StopInstanceResponse {"job_id":"j-1"}"#,
    ),
    (
        "StartupInstance",
        r#"{"job_id": "j-2"}"#,
        r#"StartupInstanceResponse {"job_id":"j-2"}"#,
    ),
    (
        "UpdatePort",
        r#"{"workflowId": "w-1"}"#,
        r#"UpdatePortResponse {"workflowId":"w-1"}"#,
    ),
    (
        "SetReadOnlySwitch",
        r#"{"job_id": "j-3"}"#,
        r#"{"job_id":"j-3"}"#,
    ),
    (
        "ShowReplicationStatus",
        r#"{"replication_status": "abnormal", "abnormal_reason": "network"}"#,
        r#""replication_status":"abnormal""#,
    ),
    (
        "RestoreTables",
        r#"{"jobId": "j-4"}"#,
        r#"RestoreTablesResponse {"jobId":"j-4"}"#,
    ),
    (
        "ListAuthorizedDatabases",
        r#"{"databases": [{"name": "shop", "readonly": true}], "total_count": 1}"#,
        r#""databases":[{"name":"shop","readonly":true}]"#,
    ),
    (
        "ListAuthorizedDbUsers",
        r#"{"users": [{"name": "app", "readonly": false}], "total_count": 1}"#,
        r#""users":[{"name":"app","readonly":false}]"#,
    ),
    (
        "Revoke",
        r#"{"resp": "successful"}"#,
        r#"RevokeResponse {"resp":"successful"}"#,
    ),
    (
        "AddPostgresqlHbaConf",
        r#"{"code": 0, "message": "ok"}"#,
        r#"{"code":0,"message":"ok"}"#,
    ),
    (
        "ListPostgresqlExtension",
        r#"{"extensions": [{"name": "pg_trgm", "database_name": "shop", "created": true}], "total_count": 1}"#,
        r#""name":"pg_trgm""#,
    ),
    (
        "DeletePostgresqlExtension",
        r#"{"deleted": true}"#,
        r#"DeletePostgresqlExtensionResponse {"deleted":true}"#,
    ),
    (
        "ListAuthorizedSqlserverDbUsers",
        r#"{"users": [{"name": "rdsuser"}], "total_count": 1}"#,
        r#""users":[{"name":"rdsuser"}]"#,
    ),
    (
        "BatchDeleteManualBackup",
        r#"{"backup_ids": ["b-1", "b-2"]}"#,
        r#"{"backup_ids":["b-1","b-2"]}"#,
    ),
    (
        "CopyConfiguration",
        r#"{"configuration_id": "c-2"}"#,
        r#"{"configuration_id":"c-2"}"#,
    ),
    (
        "EnableConfiguration",
        r#"{"configuration_id": "c-1", "apply_results": [{"instance_id": "i-1", "instance_name": "db", "restart_required": true, "success": true}], "success": true}"#,
        r#""restart_required":true"#,
    ),
    (
        "ListPostgresqlHbaInfo",
        r#"[{"type": "host", "database": "all", "user": "all", "address": "0.0.0.0/0", "method": "md5", "priority": 0}]"#,
        r#"ListPostgresqlHbaInfoResponse [{"type":"host""#,
    ),
    (
        "ListJobInfo",
        r#"{"job": {"id": "j-1", "name": "RestartInstance", "status": "Running", "created": "2024-03-01T08:00:00+0800"}}"#,
        r#""status":"Running""#,
    ),
];

#[test]
fn populated_responses_render_their_fields() {
    for (name, body, expected) in RESPONSE_FIXTURES {
        let rendered = entry(name)
            .decode_response(body.as_bytes())
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(rendered.contains(expected), "{name}: {rendered}");
    }
}

/// Populated request records and the URI each must prepare to
const REQUEST_FIXTURES: &[(&str, &str, &str)] = &[
    (
        "StopInstance",
        r#"{"instance_id": "i-1"}"#,
        "POST https://rds.test/v3/p-1/instances/i-1/action/shutdown",
    ),
    (
        "UpdateInstanceName",
        r#"{"instance_id": "i-1", "body": {"name": "orders"}}"#,
        "PUT https://rds.test/v3/p-1/instances/i-1/name",
    ),
    (
        "ResetPwd",
        r#"{"instance_id": "i-1", "body": {"db_user_pwd": "S3cret!pass"}}"#,
        "POST https://rds.test/v3/p-1/instances/i-1/password",
    ),
    (
        "SwitchSsl",
        r#"{"instance_id": "i-1", "body": {"ssl_option": true}}"#,
        "PUT https://rds.test/v3/p-1/instances/i-1/ssl",
    ),
    (
        "RestoreToExistingInstance",
        r#"{"body": {"source": {"instance_id": "i-1", "type": "backup", "backup_id": "b-1"}, "target": {"instance_id": "i-2"}}}"#,
        "POST https://rds.test/v3/p-1/instances/recovery",
    ),
    (
        "UpdateDbUserComment",
        r#"{"instance_id": "i-1", "user_name": "app", "body": {"comment": "reporting"}}"#,
        "PUT https://rds.test/v3/p-1/instances/i-1/db-users/app/comment",
    ),
    (
        "ListAuthorizedDatabases",
        r#"{"instance_id": "i-1", "user_name": "app", "page": 1, "limit": 10}"#,
        "GET https://rds.test/v3/p-1/instances/i-1/db_user/database?user-name=app&page=1&limit=10",
    ),
    (
        "DeletePostgresqlDatabase",
        r#"{"instance_id": "i-1", "db_name": "shop"}"#,
        "DELETE https://rds.test/v3/p-1/instances/i-1/database/shop",
    ),
    (
        "DeleteSqlserverDbUser",
        r#"{"instance_id": "i-1", "user_name": "rdsuser"}"#,
        "DELETE https://rds.test/v3/p-1/instances/i-1/db_user/rdsuser",
    ),
    (
        "ListAuthorizedSqlserverDbUsers",
        r#"{"instance_id": "i-1", "db_name": "shop", "page": 1, "limit": 5}"#,
        "GET https://rds.test/v3/p-1/instances/i-1/database/db_user?db-name=shop&page=1&limit=5",
    ),
    (
        "CopyConfiguration",
        r#"{"config_id": "c-1", "body": {"name": "copy"}}"#,
        "POST https://rds.test/v3/p-1/configurations/c-1/copy",
    ),
    (
        "DeleteJob",
        r#"{"id": "j-1"}"#,
        "DELETE https://rds.test/v3/p-1/jobs?id=j-1",
    ),
];

#[test]
fn populated_requests_prepare_their_uri() {
    for (name, input, expected) in REQUEST_FIXTURES {
        let entry = entry(name);
        let input: serde_json::Value = serde_json::from_str(input).unwrap();

        let rendered = entry.decode_request(input.to_string().as_bytes()).unwrap();
        assert!(
            rendered.starts_with(&format!("{name}Request ")),
            "{rendered}"
        );

        let prepared = entry.prepare_json("https://rds.test", "p-1", input).unwrap();
        assert_eq!(
            format!("{} {}", prepared.method, prepared.url),
            *expected,
            "{name}"
        );
    }
}

#[test]
fn bodies_are_sent_on_delete_operations() {
    let input = serde_json::json!({
        "instance_id": "i-1",
        "body": {"db_name": "shop", "users": [{"name": "app"}]}
    });
    let prepared = entry("Revoke")
        .prepare_json("https://rds.test", "p-1", input)
        .unwrap();
    assert_eq!(prepared.method.as_str(), "DELETE");
    assert_eq!(
        prepared.body,
        Some(serde_json::json!({"db_name": "shop", "users": [{"name": "app"}]}))
    );
}
