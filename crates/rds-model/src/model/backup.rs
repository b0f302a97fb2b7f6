//! Backups and backup policies, including cross-region copies

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::common::{Datastore, Language};
use crate::{api_response, closed_enum, describe};

closed_enum! {
    pub enum BackupStatus: string {
        Building = "BUILDING",
        Completed = "COMPLETED",
        Failed = "FAILED",
        Deleting = "DELETING",
    }
}

closed_enum! {
    pub enum BackupType: string {
        Auto = "auto",
        Manual = "manual",
        /// Differential full backup
        Fragment = "fragment",
        Incremental = "incremental",
    }
}

closed_enum! {
    /// Kind of a backup stored in another region
    pub enum OffSiteBackupType: string {
        Auto = "auto",
        Incremental = "incremental",
    }
}

closed_enum! {
    /// Which backups a cross-region policy copies
    pub enum OffSitePolicyBackupType: string {
        Auto = "auto",
        All = "all",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupDatabase {
    pub name: String,
}

// ============================================================================
// ListBackups
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListBackupsRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub backup_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub backup_type: Option<BackupType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub limit: Option<i32>,
    /// Request time format, see [`crate::time`]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub begin_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupForList {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<BackupType>,
    /// Size in KB
    pub size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BackupStatus>,
    pub begin_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore: Option<Datastore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<BackupDatabase>>,
    pub instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_with_ddm: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListBackupsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<Vec<BackupForList>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Manual backups
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreateManualBackupRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    pub body: CreateManualBackupRequestBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreateManualBackupRequestBody {
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    /// SQL Server only; all databases when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub databases: Option<Vec<BackupDatabase>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupInfo {
    pub id: String,
    pub instance_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<BackupDatabase>>,
    pub begin_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BackupStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<BackupType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateManualBackupResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<BackupInfo>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeleteManualBackupRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub backup_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteManualBackupResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Automated backup policy
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ShowBackupPolicyRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

/// Automated backup policy; `keep_days = 0` disables automated backups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupPolicy {
    pub keep_days: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Weekdays as `1,2,...,7`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowBackupPolicyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_policy: Option<BackupPolicy>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SetBackupPolicyRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: SetBackupPolicyRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetBackupPolicyRequestBody {
    pub backup_policy: BackupPolicy,
    /// Keep existing automated backups when disabling the policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_backups: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetBackupPolicyResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Cross-region backups
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ShowOffSiteBackupPolicyRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetOffSiteBackupPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<OffSitePolicyBackupType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_project_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowOffSiteBackupPolicyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_para: Option<Vec<GetOffSiteBackupPolicy>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SetOffSiteBackupPolicyRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: SetOffSiteBackupPolicyRequestBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetOffSiteBackupPolicyRequestBody {
    pub policy_para: OffSiteBackupPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffSiteBackupPolicy {
    pub backup_type: OffSitePolicyBackupType,
    /// `0` disables copying
    pub keep_days: i32,
    pub destination_region: String,
    pub destination_project_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetOffSiteBackupPolicyResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListOffSiteBackupsRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub backup_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub backup_type: Option<OffSiteBackupType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub begin_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffSiteBackupForList {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<OffSiteBackupType>,
    pub size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BackupStatus>,
    pub begin_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore: Option<Datastore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<BackupDatabase>>,
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListOffSiteBackupsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<Vec<OffSiteBackupForList>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Download links
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ShowBackupDownloadLinkRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub backup_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupFile {
    pub name: String,
    /// Size in KB
    pub size: i64,
    pub download_link: String,
    pub link_expired_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowBackupDownloadLinkResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<BackupFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Batch deletion
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct BatchDeleteManualBackupRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    pub body: BatchDeleteBackupRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchDeleteBackupRequestBody {
    /// At most 50 manual backups per call
    pub backup_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchDeleteManualBackupResponse {
    /// Backups whose deletion started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_ids: Option<Vec<String>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

describe!(
    BackupDatabase,
    ListBackupsRequest,
    BackupForList,
    ListBackupsResponse,
    CreateManualBackupRequest,
    CreateManualBackupRequestBody,
    BackupInfo,
    CreateManualBackupResponse,
    DeleteManualBackupRequest,
    DeleteManualBackupResponse,
    ShowBackupPolicyRequest,
    BackupPolicy,
    ShowBackupPolicyResponse,
    SetBackupPolicyRequest,
    SetBackupPolicyRequestBody,
    SetBackupPolicyResponse,
    ShowOffSiteBackupPolicyRequest,
    GetOffSiteBackupPolicy,
    ShowOffSiteBackupPolicyResponse,
    SetOffSiteBackupPolicyRequest,
    SetOffSiteBackupPolicyRequestBody,
    OffSiteBackupPolicy,
    SetOffSiteBackupPolicyResponse,
    ListOffSiteBackupsRequest,
    OffSiteBackupForList,
    ListOffSiteBackupsResponse,
    ShowBackupDownloadLinkRequest,
    BackupFile,
    ShowBackupDownloadLinkResponse,
    BatchDeleteManualBackupRequest,
    BatchDeleteBackupRequestBody,
    BatchDeleteManualBackupResponse,
);

api_response!(
    ListBackupsResponse,
    CreateManualBackupResponse,
    DeleteManualBackupResponse,
    ShowBackupPolicyResponse,
    SetBackupPolicyResponse,
    ShowOffSiteBackupPolicyResponse,
    SetOffSiteBackupPolicyResponse,
    ListOffSiteBackupsResponse,
    ShowBackupDownloadLinkResponse,
    BatchDeleteManualBackupResponse,
);
