//! Error, slow-query, audit and binlog logs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::common::Language;
use crate::time::parse_response_time;
use crate::{api_response, closed_enum, describe};

closed_enum! {
    /// Statement class of a slow query
    pub enum SlowLogType: string {
        Insert = "INSERT",
        Update = "UPDATE",
        Select = "SELECT",
        Delete = "DELETE",
        Create = "CREATE",
    }
}

closed_enum! {
    pub enum ErrorLogLevel: string {
        All = "ALL",
        Info = "INFO",
        Log = "LOG",
        Warning = "WARNING",
        Error = "ERROR",
        Fatal = "FATAL",
        Panic = "PANIC",
        Note = "NOTE",
    }
}

closed_enum! {
    /// State of a prepared log download
    pub enum DownloadStatus: string {
        Finish = "FINISH",
        Creating = "CREATING",
        Failed = "FAILED",
    }
}

// ============================================================================
// Error log
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListErrorLogsRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    /// Request time format, see [`crate::time`]
    #[builder(setter(into))]
    pub start_date: String,
    #[builder(setter(into))]
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub level: Option<ErrorLogLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorLog {
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<ErrorLogLevel>,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListErrorLogsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_log_list: Option<Vec<ErrorLog>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_record: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Slow log
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListSlowLogsRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub start_date: String,
    #[builder(setter(into))]
    pub end_date: String,
    /// Page number, starting at 1
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub offset: Option<i32>,
    /// Page size, at most 100
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub limit: Option<i32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub slow_log_type: Option<SlowLogType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub database: Option<String>,
}

/// One slow query; numeric columns come back as text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlowLog {
    pub count: String,
    /// Execution time, e.g. `1.04665 s`
    pub time: String,
    pub lock_time: String,
    pub rows_sent: String,
    pub rows_examined: String,
    pub database: String,
    pub users: String,
    pub query_sample: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<SlowLogType>,
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
}

impl SlowLog {
    /// Parses `start_time`
    pub fn started_at(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        parse_response_time(&self.start_time)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSlowLogsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slow_log_list: Option<Vec<SlowLog>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_record: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListSlowLogFileRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlowLogFile {
    pub file_name: String,
    /// Size in bytes, as text
    pub file_size: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSlowLogFileResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<SlowLogFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DownloadSlowlogRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(default)]
    pub body: SlowlogDownloadRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlowlogDownloadRequest {
    /// SQL Server only; the latest file when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlowlogDownloadInfo {
    pub workflow_id: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DownloadStatus>,
    pub file_size: String,
    pub file_link: String,
    /// Milliseconds since the epoch
    pub create_at: i64,
    pub update_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownloadSlowlogResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<SlowlogDownloadInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DownloadStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListSlowlogStatisticsRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub cur_page: i32,
    pub per_page: i32,
    #[builder(setter(into))]
    pub start_date: String,
    #[builder(setter(into))]
    pub end_date: String,
    #[serde(rename = "type")]
    #[builder(setter(into))]
    pub slow_log_type: SlowLogType,
    /// `executeTime` or `lockTime`, descending
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub sort: Option<String>,
}

/// Slow queries aggregated by statement template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlowLogStatistics {
    pub count: String,
    pub time: String,
    pub lock_time: String,
    pub rows_sent: i64,
    pub rows_examined: i64,
    pub database: String,
    pub users: String,
    pub query_sample: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<SlowLogType>,
    #[serde(rename = "clientIP", skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSlowlogStatisticsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_record: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slow_log_list: Option<Vec<SlowLogStatistics>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_record: Option<i32>,
    /// Milliseconds since the epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Audit log
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListAuditlogsRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub start_time: String,
    #[builder(setter(into))]
    pub end_time: String,
    pub offset: i32,
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Auditlog {
    pub id: String,
    pub name: String,
    /// Size in KB
    pub size: f64,
    pub begin_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListAuditlogsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auditlogs: Option<Vec<Auditlog>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_record: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ShowAuditlogPolicyRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowAuditlogPolicyResponse {
    /// `0` means auditing is off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_types: Option<Vec<String>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SetAuditlogPolicyRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: SetAuditlogPolicyRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAuditlogPolicyRequestBody {
    pub keep_days: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_auditlogs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetAuditlogPolicyResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ShowAuditlogDownloadLinkRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: GenerateAuditlogDownloadLinkRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateAuditlogDownloadLinkRequest {
    /// At most 50 ids
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowAuditlogDownloadLinkResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Binlog retention
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ShowBinlogClearPolicyRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowBinlogClearPolicyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binlog_retention_hours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binlog_clear_type: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SetBinlogClearPolicyRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: BinlogClearPolicyRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinlogClearPolicyRequestBody {
    /// `0` clears binlogs as soon as they are backed up
    pub binlog_retention_hours: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetBinlogClearPolicyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

describe!(
    ListErrorLogsRequest,
    ErrorLog,
    ListErrorLogsResponse,
    ListSlowLogsRequest,
    SlowLog,
    ListSlowLogsResponse,
    ListSlowLogFileRequest,
    SlowLogFile,
    ListSlowLogFileResponse,
    DownloadSlowlogRequest,
    SlowlogDownloadRequest,
    SlowlogDownloadInfo,
    DownloadSlowlogResponse,
    ListSlowlogStatisticsRequest,
    SlowLogStatistics,
    ListSlowlogStatisticsResponse,
    ListAuditlogsRequest,
    Auditlog,
    ListAuditlogsResponse,
    ShowAuditlogPolicyRequest,
    ShowAuditlogPolicyResponse,
    SetAuditlogPolicyRequest,
    SetAuditlogPolicyRequestBody,
    SetAuditlogPolicyResponse,
    ShowAuditlogDownloadLinkRequest,
    GenerateAuditlogDownloadLinkRequest,
    ShowAuditlogDownloadLinkResponse,
    ShowBinlogClearPolicyRequest,
    ShowBinlogClearPolicyResponse,
    SetBinlogClearPolicyRequest,
    BinlogClearPolicyRequestBody,
    SetBinlogClearPolicyResponse,
);

api_response!(
    ListErrorLogsResponse,
    ListSlowLogsResponse,
    ListSlowLogFileResponse,
    DownloadSlowlogResponse,
    ListSlowlogStatisticsResponse,
    ListAuditlogsResponse,
    ShowAuditlogPolicyResponse,
    SetAuditlogPolicyResponse,
    ShowAuditlogDownloadLinkResponse,
    ShowBinlogClearPolicyResponse,
    SetBinlogClearPolicyResponse,
);
