//! Fleet-wide instance diagnosis

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::common::{DatastoreName, Language};
use crate::{api_response, closed_enum, describe};

closed_enum! {
    /// Diagnosis item reported across instances of one engine
    pub enum DiagnosisName: string {
        HighPressure = "high_pressure",
        LockWait = "lock_wait",
        InsufficientCapacity = "insufficient_capacity",
        SlowSqlFrequency = "slow_sql_frequency",
        DiskPerformanceCap = "disk_performance_cap",
        MemOverrun = "mem_overrun",
        AgeExceed = "age_exceed",
        ConnectionsExceed = "connections_exceed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListInstanceDiagnosisRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub engine: DatastoreName,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagnosis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<DiagnosisName>,
    /// Number of affected instances
    pub count: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListInstanceDiagnosisResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Vec<Diagnosis>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListInstancesInfoDiagnosisRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub engine: DatastoreName,
    #[builder(setter(into))]
    pub diagnosis: DiagnosisName,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisInstance {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListInstancesInfoDiagnosisResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<DiagnosisName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<DiagnosisInstance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

describe!(
    ListInstanceDiagnosisRequest,
    Diagnosis,
    ListInstanceDiagnosisResponse,
    ListInstancesInfoDiagnosisRequest,
    DiagnosisInstance,
    ListInstancesInfoDiagnosisResponse,
);

api_response!(ListInstanceDiagnosisResponse, ListInstancesInfoDiagnosisResponse);
