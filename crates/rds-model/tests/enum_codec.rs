//! Closed-value enums across the whole model

use pretty_assertions::assert_eq;
use rds_model::catalog;
use rds_model::model::backup::{BackupStatus, BackupType, OffSiteBackupType, OffSitePolicyBackupType};
use rds_model::model::common::{
    ChargeMode, DatastoreName, DatastoreType, HaMode, Language, PeriodType, ReplicationMode,
    VolumeType,
};
use rds_model::model::configuration::ParameterType;
use rds_model::model::diagnosis::DiagnosisName;
use rds_model::model::instance::{
    EnlargeTriggerThreshold, FailoverStrategy, InstanceMode, InstanceStatus, InstanceType,
    MonitorInterval, RestoreType,
};
use rds_model::model::job::JobStatus;
use rds_model::model::log::{DownloadStatus, ErrorLogLevel, SlowLogType};
use rds_model::model::postgresql::{HbaAuthMethod, HbaConnectionType};
use rds_model::model::proxy::{ProxyMode, ProxyRouteMode, ProxyStatus};
use rds_model::model::sqlserver::SqlserverDatabaseState;
use rds_model::model::tag::TagAction;
use rds_model::{ClosedValue, ScalarKind};
use serde::Serialize;
use serde::de::DeserializeOwned;

fn assert_registry_round_trips<T>()
where
    T: ClosedValue + Serialize + DeserializeOwned,
{
    assert!(!T::registry().is_empty(), "{} has no values", T::TYPE_NAME);

    for constant in T::registry() {
        assert!(constant.is_known());

        let encoded = constant.encode();
        let decoded = T::decode(encoded.as_bytes()).unwrap();
        assert_eq!(&decoded, constant, "{} via codec", T::TYPE_NAME);

        let json = serde_json::to_string(constant).unwrap();
        assert_eq!(json, encoded, "{} serde and codec disagree", T::TYPE_NAME);
        let parsed: T = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, constant, "{} via serde", T::TYPE_NAME);
    }
}

#[test]
fn test_every_registry_round_trips() {
    assert_registry_round_trips::<Language>();
    assert_registry_round_trips::<DatastoreType>();
    assert_registry_round_trips::<DatastoreName>();
    assert_registry_round_trips::<ChargeMode>();
    assert_registry_round_trips::<PeriodType>();
    assert_registry_round_trips::<HaMode>();
    assert_registry_round_trips::<ReplicationMode>();
    assert_registry_round_trips::<VolumeType>();
    assert_registry_round_trips::<InstanceType>();
    assert_registry_round_trips::<InstanceMode>();
    assert_registry_round_trips::<InstanceStatus>();
    assert_registry_round_trips::<FailoverStrategy>();
    assert_registry_round_trips::<RestoreType>();
    assert_registry_round_trips::<EnlargeTriggerThreshold>();
    assert_registry_round_trips::<MonitorInterval>();
    assert_registry_round_trips::<BackupStatus>();
    assert_registry_round_trips::<BackupType>();
    assert_registry_round_trips::<OffSiteBackupType>();
    assert_registry_round_trips::<OffSitePolicyBackupType>();
    assert_registry_round_trips::<ParameterType>();
    assert_registry_round_trips::<HbaConnectionType>();
    assert_registry_round_trips::<HbaAuthMethod>();
    assert_registry_round_trips::<SqlserverDatabaseState>();
    assert_registry_round_trips::<ProxyStatus>();
    assert_registry_round_trips::<ProxyMode>();
    assert_registry_round_trips::<ProxyRouteMode>();
    assert_registry_round_trips::<SlowLogType>();
    assert_registry_round_trips::<ErrorLogLevel>();
    assert_registry_round_trips::<DownloadStatus>();
    assert_registry_round_trips::<TagAction>();
    assert_registry_round_trips::<DiagnosisName>();
    assert_registry_round_trips::<JobStatus>();
}

#[test]
fn test_catalog_covers_every_enum() {
    assert_eq!(catalog::enums().len(), 32);
    for entry in catalog::enums() {
        for value in entry.values() {
            let raw = match entry.kind {
                ScalarKind::String => serde_json::Value::String(value.clone()).to_string(),
                ScalarKind::Int32 => value.clone(),
            };
            let check = entry.check(raw.as_bytes(), true).unwrap();
            assert!(check.known, "{}: {value}", entry.name);
            assert_eq!(check.value, value);
        }
    }
}

#[test]
fn test_backup_status_completed() {
    assert_eq!(BackupStatus::Completed.encode(), r#""COMPLETED""#);
    assert_eq!(
        BackupStatus::decode(br#""COMPLETED""#).unwrap(),
        BackupStatus::Completed
    );
    assert_eq!(
        BackupStatus::REGISTRY
            .iter()
            .map(BackupStatus::value)
            .collect::<Vec<_>>(),
        vec!["BUILDING", "COMPLETED", "FAILED", "DELETING"]
    );
}

#[test]
fn test_unregistered_values_are_kept_verbatim() {
    let charge = ChargeMode::decode(br#""spot""#).unwrap();
    assert_eq!(charge.value(), "spot");
    assert!(!charge.is_known());
    assert_eq!(charge.encode(), r#""spot""#);

    let interval = MonitorInterval::decode(b"60").unwrap();
    assert_eq!(interval, MonitorInterval::Unknown(60));
    assert_eq!(interval.value(), 60);

    let language: Language = serde_json::from_str(r#""fr-fr""#).unwrap();
    assert_eq!(serde_json::to_string(&language).unwrap(), r#""fr-fr""#);
}

#[test]
fn test_registry_literals_are_case_sensitive() {
    assert_eq!(JobStatus::from_value("Completed"), JobStatus::Completed);
    assert!(!JobStatus::from_value("COMPLETED").is_known());
    assert!(JobStatus::decode_strict(br#""COMPLETED""#).is_err());
}

#[test]
fn test_int_enums_accept_quoted_numbers() {
    let threshold: EnlargeTriggerThreshold = serde_json::from_str(r#""15""#).unwrap();
    assert_eq!(threshold, EnlargeTriggerThreshold::Fifteen);
    assert_eq!(serde_json::to_string(&threshold).unwrap(), "15");

    let state: SqlserverDatabaseState = serde_json::from_str("1").unwrap();
    assert_eq!(state, SqlserverDatabaseState::Normal);
}
