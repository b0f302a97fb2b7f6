//! Wire shape of request and response records

use pretty_assertions::assert_eq;
use rds_model::model::backup::{ListBackupsResponse, SetBackupPolicyRequestBody};
use rds_model::model::common::{
    ChargeInfo, ChargeMode, Datastore, DatastoreType, Ha, HaMode, Language, PeriodType,
    ReplicationMode, Tag, Volume, VolumeType,
};
use rds_model::model::instance::{
    CreateInstanceRequest, CreateInstanceRequestBody, InstanceStatus, ListInstancesRequest,
    ListInstancesResponse, ShowSecondLevelMonitoringResponse,
};
use rds_model::model::job::{JobStatus, ListJobInfoResponse};
use rds_model::model::log::{ListSlowlogStatisticsResponse, SlowLog, SlowLogType};
use rds_model::model::postgresql::{HbaAuthMethod, ListPostgresqlHbaInfoResponse};
use rds_model::model::tag::{BatchTagActionRequestBody, TagAction};
use rds_model::{ApiResponse, Describe};
use serde_json::json;

fn create_body() -> CreateInstanceRequestBody {
    CreateInstanceRequestBody::builder()
        .name("orders-db")
        .datastore(Datastore {
            r#type: DatastoreType::MySql,
            version: "8.0".to_string(),
            complete_version: None,
        })
        .ha(Ha {
            mode: HaMode::Ha,
            replication_mode: Some(ReplicationMode::Semisync),
        })
        .flavor_ref("rds.mysql.n1.large.2.ha")
        .volume(Volume {
            r#type: VolumeType::CloudSsd,
            size: 40,
        })
        .region("cn-north-4")
        .availability_zone("cn-north-4a,cn-north-4b")
        .vpc_id("vpc-1")
        .subnet_id("subnet-1")
        .security_group_id("sg-1")
        .charge_info(ChargeInfo {
            charge_mode: ChargeMode::PrePaid,
            period_type: Some(PeriodType::Month),
            period_num: Some(1),
            is_auto_renew: None,
            is_auto_pay: Some(true),
        })
        .tags(vec![Tag::new("team", "payments")])
        .build()
}

#[test]
fn test_create_instance_body_shape() {
    let value = serde_json::to_value(create_body()).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "orders-db",
            "datastore": {"type": "MySQL", "version": "8.0"},
            "ha": {"mode": "Ha", "replication_mode": "semisync"},
            "flavor_ref": "rds.mysql.n1.large.2.ha",
            "volume": {"type": "CLOUDSSD", "size": 40},
            "region": "cn-north-4",
            "availability_zone": "cn-north-4a,cn-north-4b",
            "vpc_id": "vpc-1",
            "subnet_id": "subnet-1",
            "security_group_id": "sg-1",
            "charge_info": {
                "charge_mode": "prePaid",
                "period_type": "month",
                "period_num": 1,
                "is_auto_pay": true
            },
            "tags": [{"key": "team", "value": "payments"}]
        })
    );
}

#[test]
fn test_populated_record_round_trips() {
    let body = create_body();
    let json = serde_json::to_string(&body).unwrap();
    let decoded: CreateInstanceRequestBody = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, body);
}

#[test]
fn test_absent_optionals_stay_absent() {
    let request = ListInstancesRequest::builder().limit(10).build();
    let json = serde_json::to_string(&request).unwrap();
    assert_eq!(json, r#"{"limit":10}"#);

    let decoded: ListInstancesRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.offset, None);
    assert_eq!(decoded.x_language, None);
    assert_eq!(decoded, request);
}

#[test]
fn test_request_wrapper_renames_language_header() {
    let request = CreateInstanceRequest::builder()
        .x_language(Language::EnUs)
        .body(create_body())
        .build();
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["X-Language"], "en-us");
    assert_eq!(value["body"]["name"], "orders-db");
}

#[test]
fn test_http_status_code_never_serialized() {
    let mut response = ShowSecondLevelMonitoringResponse::default();
    response.set_http_status_code(200);
    assert_eq!(response.http_status_code(), 200);

    assert_eq!(serde_json::to_string(&response).unwrap(), "{}");
    assert_eq!(response.describe(), "ShowSecondLevelMonitoringResponse {}");

    let decoded: ShowSecondLevelMonitoringResponse =
        serde_json::from_str(r#"{"switch_option":true,"interval":1,"http_status_code":500}"#)
            .unwrap();
    assert_eq!(decoded.http_status_code, 0);
    assert_eq!(decoded.switch_option, Some(true));
}

#[test]
fn test_list_response_decodes_partial_records() {
    let response: ListInstancesResponse = serde_json::from_value(json!({
        "instances": [{
            "id": "i-1",
            "name": "orders-db",
            "status": "ACTIVE",
            "port": 3306,
            "private_ips": ["192.168.0.10"],
            "datastore": {"type": "MySQL", "version": "8.0", "complete_version": "8.0.28.231003"}
        }],
        "total_count": 1
    }))
    .unwrap();

    let instances = response.instances.unwrap();
    assert_eq!(instances[0].status, Some(InstanceStatus::Active));
    assert_eq!(instances[0].port, 3306);
    assert!(instances[0].nodes.is_empty());
    assert_eq!(instances[0].ha, None);
}

#[test]
fn test_unknown_enum_value_inside_record() {
    let response: ListBackupsResponse = serde_json::from_value(json!({
        "backups": [{"id": "b1", "name": "n", "status": "ARCHIVING", "size": 2048.5}]
    }))
    .unwrap();
    let backups = response.backups.unwrap();
    assert_eq!(backups[0].status.as_ref().unwrap().value(), "ARCHIVING");
    assert_eq!(backups[0].size, 2048.5);
}

#[test]
fn test_job_response() {
    let response: ListJobInfoResponse = serde_json::from_value(json!({
        "job": {
            "id": "job-1",
            "name": "CreateMysqlSingleHAInstance",
            "status": "Completed",
            "created": "2024-03-01T08:00:00+0800",
            "entities": {"instance": {"id": "i-1"}}
        }
    }))
    .unwrap();
    let job = response.job.unwrap();
    assert!(job.status.unwrap().is_terminal());
    assert_eq!(job.entities.unwrap()["instance"]["id"], "i-1");
    assert!(!JobStatus::Running.is_terminal());
}

#[test]
fn test_slow_log_start_time() {
    let log: SlowLog = serde_json::from_value(json!({
        "count": "1",
        "time": "1.04665 s",
        "query_sample": "select sleep(1)",
        "type": "SELECT",
        "start_time": "2024-03-01T08:30:15"
    }))
    .unwrap();
    assert_eq!(log.r#type, Some(SlowLogType::Select));
    assert_eq!(
        log.started_at().unwrap().to_string(),
        "2024-03-01 08:30:15"
    );
}

#[test]
fn test_statistics_use_camel_case() {
    let response: ListSlowlogStatisticsResponse = serde_json::from_value(json!({
        "pageNumber": 1,
        "pageRecord": 10,
        "totalRecord": 1,
        "slowLogList": [{
            "count": "3",
            "lockTime": "0.0001 s",
            "rowsSent": 1,
            "rowsExamined": 1000,
            "querySample": "select 1",
            "clientIP": "10.0.0.8"
        }]
    }))
    .unwrap();
    let stats = response.slow_log_list.unwrap();
    assert_eq!(stats[0].rows_examined, 1000);
    assert_eq!(stats[0].client_ip.as_deref(), Some("10.0.0.8"));
}

#[test]
fn test_hba_response_is_a_bare_array() {
    let response: ListPostgresqlHbaInfoResponse = serde_json::from_str(
        r#"[{"type":"host","database":"all","user":"all","address":"0.0.0.0/0","method":"md5","priority":0}]"#,
    )
    .unwrap();
    assert_eq!(response.body.len(), 1);
    assert_eq!(response.body[0].method, HbaAuthMethod::Md5);
    assert!(serde_json::to_string(&response).unwrap().starts_with('['));
}

#[test]
fn test_tag_actions() {
    let body = BatchTagActionRequestBody::delete(vec![Tag::key_only("team")]);
    assert_eq!(body.action, TagAction::Delete);
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"action": "delete", "tags": [{"key": "team"}]})
    );
}

#[test]
fn test_required_fields_are_required() {
    let err = serde_json::from_value::<SetBackupPolicyRequestBody>(json!({})).unwrap_err();
    assert!(err.to_string().contains("backup_policy"));
}

#[test]
fn test_describe_prefixes_type_name() {
    let body = BatchTagActionRequestBody::create(vec![Tag::new("env", "prod")]);
    assert_eq!(
        body.describe(),
        r#"BatchTagActionRequestBody {"action":"create","tags":[{"key":"env","value":"prod"}]}"#
    );
    assert_eq!(body.to_string(), body.describe());
}
