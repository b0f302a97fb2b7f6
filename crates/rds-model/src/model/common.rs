//! Types shared across the API surface

use serde::{Deserialize, Serialize};

use crate::{closed_enum, describe};

closed_enum! {
    /// Language of error and description text in responses
    pub enum Language: string {
        ZhCn = "zh-cn",
        EnUs = "en-us",
    }
}

closed_enum! {
    /// Database engine as spelled in request and response bodies
    pub enum DatastoreType: string {
        MySql = "MySQL",
        PostgreSql = "PostgreSQL",
        SqlServer = "SQLServer",
        MariaDb = "MariaDB",
    }
}

closed_enum! {
    /// Database engine as spelled in URI paths
    pub enum DatastoreName: string {
        MySql = "mysql",
        PostgreSql = "postgresql",
        SqlServer = "sqlserver",
        MariaDb = "mariadb",
    }
}

closed_enum! {
    pub enum ChargeMode: string {
        PrePaid = "prePaid",
        PostPaid = "postPaid",
    }
}

closed_enum! {
    pub enum PeriodType: string {
        Month = "month",
        Year = "year",
    }
}

closed_enum! {
    pub enum HaMode: string {
        Ha = "Ha",
    }
}

closed_enum! {
    /// Replication mode between primary and standby
    pub enum ReplicationMode: string {
        Async = "async",
        Semisync = "semisync",
        Sync = "sync",
    }
}

closed_enum! {
    /// Storage class of the data volume
    pub enum VolumeType: string {
        Common = "COMMON",
        High = "HIGH",
        UltraHigh = "ULTRAHIGH",
        UltraHighPro = "ULTRAHIGHPRO",
        NvmeSsd = "NVMESSD",
        CloudSsd = "CLOUDSSD",
        LocalSsd = "LOCALSSD",
        Essd = "ESSD",
        Essd2 = "ESSD2",
    }
}

/// Engine and version of an instance or parameter template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datastore {
    #[serde(rename = "type")]
    pub r#type: DatastoreType,
    pub version: String,
    /// Full patch version, only returned by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete_version: Option<String>,
}

/// High-availability settings for a primary/standby pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ha {
    pub mode: HaMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_mode: Option<ReplicationMode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    #[serde(rename = "type")]
    pub r#type: VolumeType,
    /// Size in GB
    pub size: i32,
}

/// Automated backup window and retention
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupStrategy {
    /// `hh:mm-HH:MM`, UTC
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_days: Option<i32>,
}

/// Billing settings for yearly/monthly instances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeInfo {
    pub charge_mode: ChargeMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_type: Option<PeriodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_renew: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_pay: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeInfoResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_mode: Option<ChargeMode>,
}

/// Resource tag; `value` may be omitted when deleting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Tag reference used by delete actions
    #[must_use]
    pub fn key_only(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

describe!(Datastore, Ha, Volume, BackupStrategy, ChargeInfo, ChargeInfoResponse, Tag);
