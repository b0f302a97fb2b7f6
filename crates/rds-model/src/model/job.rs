//! Asynchronous task status

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::common::Language;
use crate::{api_response, closed_enum, describe};

closed_enum! {
    pub enum JobStatus: string {
        Running = "Running",
        Completed = "Completed",
        Failed = "Failed",
    }
}

impl JobStatus {
    /// Returns true once the job will not change state again
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListJobInfoRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobInstance {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobInfo {
    pub id: String,
    /// Task kind, e.g. `CreateMysqlSingleHAInstance`
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    pub created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended: Option<String>,
    /// Percent complete, as text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<JobInstance>,
    /// Task-specific details, shape varies by task kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListJobInfoResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<JobInfo>,
    #[serde(skip)]
    pub http_status_code: u16,
}

/// Removes a finished task from the task center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeleteJobRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteJobResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

describe!(
    ListJobInfoRequest,
    JobInstance,
    JobInfo,
    ListJobInfoResponse,
    DeleteJobRequest,
    DeleteJobResponse,
);

api_response!(ListJobInfoResponse, DeleteJobResponse);
