//! Instance lifecycle, flavors and storage

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::common::{
    BackupStrategy, ChargeInfo, ChargeInfoResponse, Datastore, DatastoreName, DatastoreType, Ha,
    Language, ReplicationMode, Tag, Volume, VolumeType,
};
use crate::{api_response, closed_enum, describe};

closed_enum! {
    /// Instance topology as reported by list calls
    pub enum InstanceType: string {
        Single = "Single",
        Ha = "Ha",
        Replica = "Replica",
        Enterprise = "Enterprise",
    }
}

closed_enum! {
    /// Topology a flavor or storage class applies to
    pub enum InstanceMode: string {
        Single = "single",
        Ha = "ha",
        Replica = "replica",
    }
}

closed_enum! {
    pub enum InstanceStatus: string {
        Build = "BUILD",
        Active = "ACTIVE",
        Failed = "FAILED",
        Frozen = "FROZEN",
        ModifyingInstanceType = "MODIFYING INSTANCE TYPE",
        Rebooting = "REBOOTING",
        Restoring = "RESTORING",
        ModifyingDatabasePort = "MODIFYING DATABASE PORT",
        Switchover = "SWITCHOVER",
        Storagefull = "STORAGE FULL",
        Backing = "BACKING UP",
        Shutdown = "SHUTDOWN",
    }
}

closed_enum! {
    /// Priority when promoting a standby
    pub enum FailoverStrategy: string {
        Reliability = "reliability",
        Availability = "availability",
    }
}

closed_enum! {
    pub enum RestoreType: string {
        Backup = "backup",
        Timestamp = "timestamp",
    }
}

closed_enum! {
    /// Free-space percentage that triggers automatic expansion
    pub enum EnlargeTriggerThreshold: int32 {
        Ten = 10,
        Fifteen = 15,
        Twenty = 20,
    }
}

closed_enum! {
    /// Sampling period of second-level monitoring, in seconds
    pub enum MonitorInterval: int32 {
        OneSecond = 1,
        FiveSeconds = 5,
    }
}

// ============================================================================
// CreateInstance
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreateInstanceRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    pub body: CreateInstanceRequestBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreateInstanceRequestBody {
    #[builder(setter(into))]
    pub name: String,
    pub datastore: Datastore,
    /// Required for primary/standby instances
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub ha: Option<Ha>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub configuration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub backup_strategy: Option<BackupStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub enterprise_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub disk_encryption_id: Option<String>,
    #[builder(setter(into))]
    pub flavor_ref: String,
    pub volume: Volume,
    #[builder(setter(into))]
    pub region: String,
    /// Comma-separated for multi-AZ deployments
    #[builder(setter(into))]
    pub availability_zone: String,
    #[builder(setter(into))]
    pub vpc_id: String,
    #[builder(setter(into))]
    pub subnet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub data_vip: Option<String>,
    #[builder(setter(into))]
    pub security_group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub charge_info: Option<ChargeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub tags: Option<Vec<Tag>>,
    /// SQL Server collation
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub collation: Option<String>,
}

/// Instance summary returned by create and restore-to-new calls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateInstanceRespItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore: Option<Datastore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ha: Option<Ha>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_strategy: Option<BackupStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_encryption_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Volume>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_info: Option<ChargeInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateInstanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<CreateInstanceRespItem>,
    /// Set for pay-per-use instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// Set for yearly/monthly instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// ListInstances
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListInstancesRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub id: Option<String>,
    /// Prefix match
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub instance_type: Option<InstanceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub datastore_type: Option<DatastoreType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub enterprise_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub limit: Option<i32>,
    /// `key=value` pairs separated by commas
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HaResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_mode: Option<ReplicationMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeResponse {
    pub id: String,
    pub name: String,
    /// `master`, `slave` or `readreplica`
    pub role: String,
    pub status: String,
    pub availability_zone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedInstance {
    pub id: String,
    #[serde(rename = "type")]
    pub r#type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InstanceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub private_ips: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_dns_names: Option<Vec<String>>,
    pub public_ips: Vec<String>,
    pub port: i32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<InstanceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ha: Option<HaResponse>,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore: Option<Datastore>,
    /// `yyyy-mm-ddThh:mm:ssZ`
    pub created: String,
    pub updated: String,
    pub db_user_name: String,
    pub vpc_id: String,
    pub subnet_id: String,
    pub security_group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Volume>,
    pub nodes: Vec<NodeResponse>,
    pub related_instance: Vec<RelatedInstance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_encryption_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_project_id: Option<String>,
    pub time_zone: String,
    pub flavor_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_strategy: Option<BackupStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_info: Option<ChargeInfoResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_used_space: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListInstancesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<InstanceResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// DeleteInstance / RestartInstance
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeleteInstanceRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteInstanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct RestartInstanceRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub body: Option<RestartInstanceRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestartInstanceRequestBody {
    pub restart: RestartOptions,
}

/// Options of the `restart` action; an empty object restarts immediately
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestartOptions {
    /// Restart during the maintenance window instead of now
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<bool>,
    /// Reboot the host as well as the database process
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_server: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forcible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestartInstanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// ResizeFlavor / EnlargeVolume
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ResizeFlavorRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: ResizeFlavorRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResizeFlavorRequestBody {
    pub resize_flavor: ResizeFlavorObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResizeFlavorObject {
    pub spec_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_pay: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResizeFlavorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct EnlargeVolumeRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: EnlargeVolumeRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnlargeVolumeRequestBody {
    pub enlarge_volume: EnlargeVolumeObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnlargeVolumeObject {
    /// Target size in GB, a multiple of 10 above the current size
    pub size: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_pay: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnlargeVolumeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Failover and maintenance settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct StartFailoverRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub body: Option<StartFailoverRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartFailoverRequestBody {
    /// Fail over even when replication is not in sync
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartFailoverResponse {
    #[serde(rename = "workflowId", skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ChangeFailoverModeRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: ChangeFailoverModeRequestBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeFailoverModeRequestBody {
    pub mode: ReplicationMode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeFailoverModeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_mode: Option<ReplicationMode>,
    #[serde(rename = "workflowId", skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ChangeFailoverStrategyRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: ChangeFailoverStrategyRequestBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeFailoverStrategyRequestBody {
    #[serde(rename = "repairStrategy")]
    pub repair_strategy: FailoverStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeFailoverStrategyResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ChangeOpsWindowRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: OpsWindowRequest,
}

/// Maintenance window, `hh:00` UTC at whole hours
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpsWindowRequest {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeOpsWindowResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct AttachEipRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: BindEipRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BindEipRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip_id: Option<String>,
    /// `false` unbinds the current address
    pub is_bind: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachEipResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SetSecurityGroupRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: SecurityGroupRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroupRequest {
    pub security_group_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetSecurityGroupResponse {
    #[serde(rename = "workflowId", skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Restore
// ============================================================================

/// Where a restore reads its data from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestorePoint {
    pub instance_id: String,
    #[serde(rename = "type")]
    pub r#type: RestoreType,
    /// Required when restoring from a backup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_id: Option<String>,
    /// Milliseconds since the epoch, required for point-in-time restores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_time: Option<i64>,
    /// Old name to new name, for table-level restores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreateRestoreInstanceRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    pub body: CreateRestoreInstanceRequestBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreateRestoreInstanceRequestBody {
    #[builder(setter(into))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub ha: Option<Ha>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub configuration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub backup_strategy: Option<BackupStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub enterprise_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub disk_encryption_id: Option<String>,
    #[builder(setter(into))]
    pub flavor_ref: String,
    pub volume: Volume,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub data_vip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub security_group_id: Option<String>,
    pub restore_point: RestorePoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub charge_info: Option<ChargeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRestoreInstanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<CreateInstanceRespItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct RestoreExistInstanceRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    pub body: RestoreExistInstanceRequestBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestoreExistInstanceRequestBody {
    pub source: RestorePoint,
    pub target: RestoreTarget,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestoreTarget {
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestoreExistInstanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListRestoreTimesRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    /// `yyyy-mm-dd`; defaults to every restorable range
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub date: Option<String>,
}

/// Restorable range in milliseconds since the epoch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreTimeRange {
    pub start_time: i64,
    pub end_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRestoreTimesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_time: Option<Vec<RestoreTimeRange>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Flavors, engines, storage and quotas
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListFlavorsRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub database_name: DatastoreName,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub spec_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flavor {
    pub id: String,
    pub vcpus: String,
    /// Memory in GB
    pub ram: i32,
    pub spec_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_mode: Option<InstanceMode>,
    /// Availability zone to `normal` / `unsupported` / `sellout`
    pub az_status: BTreeMap<String, String>,
    pub version_name: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFlavorsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavors: Option<Vec<Flavor>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListDatastoresRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub database_name: DatastoreName,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryDatastore {
    pub id: String,
    /// Engine version, e.g. `8.0`
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDatastoresResponse {
    #[serde(rename = "dataStores", skip_serializing_if = "Option::is_none")]
    pub data_stores: Option<Vec<LibraryDatastore>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListStorageTypesRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub database_name: DatastoreName,
    #[builder(setter(into))]
    pub version_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub ha_mode: Option<InstanceMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<VolumeType>,
    pub az_status: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_compute_group_type: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListStorageTypesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<Vec<StorageType>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ShowQuotasRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Only `instance` is reported today
    #[serde(rename = "type")]
    pub r#type: String,
    pub used: i32,
    pub quota: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotas {
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowQuotasResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotas: Option<Quotas>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Storage auto-expansion and second-level monitoring
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ShowAutoEnlargePolicyRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowAutoEnlargePolicyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_option: Option<bool>,
    /// Upper bound in GB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_threshold: Option<EnlargeTriggerThreshold>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SetAutoEnlargePolicyRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: CustomerModifyAutoEnlargePolicyReq,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerModifyAutoEnlargePolicyReq {
    pub switch_option: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_threshold: Option<EnlargeTriggerThreshold>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetAutoEnlargePolicyResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ShowSecondLevelMonitoringRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowSecondLevelMonitoringResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_option: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<MonitorInterval>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SetSecondLevelMonitorRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: SecondLevelMonitoringRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecondLevelMonitoringRequest {
    pub switch_option: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<MonitorInterval>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetSecondLevelMonitorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_option: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<MonitorInterval>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Power state
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct StopInstanceRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopInstanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct StartupInstanceRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartupInstanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Identity, access and connectivity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct UpdateInstanceNameRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: UpdateInstanceNameRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInstanceNameRequestBody {
    /// 4 to 64 characters, starting with a letter
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateInstanceNameResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct UpdatePortRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: UpdatePortRequestBody,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePortRequestBody {
    pub port: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePortResponse {
    #[serde(rename = "workflowId", skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ResetPwdRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: PwdResetRequest,
}

/// New password of the administrator account (`root`, `rdsuser` or `rduser`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwdResetRequest {
    pub db_user_pwd: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResetPwdResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SetReadOnlySwitchRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: ReadOnlySwitchRequest,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadOnlySwitchRequest {
    pub readonly: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetReadOnlySwitchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SwitchSslRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: SslOptionRequest,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslOptionRequest {
    pub ssl_option: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwitchSslResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct UpdateDataIpRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: DataIpRequest,
}

/// Must be an unused address in the instance's subnet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataIpRequest {
    pub new_ip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDataIpResponse {
    #[serde(rename = "workflowId", skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Replication
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ShowReplicationStatusRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowReplicationStatusResponse {
    /// `normal` or `abnormal`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abnormal_reason: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct MigrateFollowerRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: FollowerMigrateRequest,
}

/// Moves the standby node to another availability zone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerMigrateRequest {
    #[serde(rename = "nodeId")]
    pub node_id: String,
    pub az_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrateFollowerResponse {
    #[serde(rename = "workflowId", skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Table-level and in-place restore
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct RestoreTablesRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: RestoreTablesRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreTablesRequestBody {
    /// Milliseconds since the epoch
    #[serde(rename = "restoreTime")]
    pub restore_time: i64,
    #[serde(rename = "restoreTables")]
    pub restore_tables: Vec<RestoreDatabaseInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreDatabaseInfo {
    pub database: String,
    pub tables: Vec<RestoreTableInfo>,
}

/// A table is restored next to the original under `new_name`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreTableInfo {
    #[serde(rename = "oldName")]
    pub old_name: String,
    #[serde(rename = "newName")]
    pub new_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestoreTablesResponse {
    #[serde(rename = "jobId", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

/// Restore into an existing instance through the v3 endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct RestoreToExistingInstanceRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    pub body: RestoreExistInstanceRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestoreToExistingInstanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

describe!(
    CreateInstanceRequest,
    CreateInstanceRequestBody,
    CreateInstanceRespItem,
    CreateInstanceResponse,
    ListInstancesRequest,
    HaResponse,
    NodeResponse,
    RelatedInstance,
    InstanceResponse,
    ListInstancesResponse,
    DeleteInstanceRequest,
    DeleteInstanceResponse,
    RestartInstanceRequest,
    RestartInstanceRequestBody,
    RestartOptions,
    RestartInstanceResponse,
    ResizeFlavorRequest,
    ResizeFlavorRequestBody,
    ResizeFlavorObject,
    ResizeFlavorResponse,
    EnlargeVolumeRequest,
    EnlargeVolumeRequestBody,
    EnlargeVolumeObject,
    EnlargeVolumeResponse,
    StartFailoverRequest,
    StartFailoverRequestBody,
    StartFailoverResponse,
    ChangeFailoverModeRequest,
    ChangeFailoverModeRequestBody,
    ChangeFailoverModeResponse,
    ChangeFailoverStrategyRequest,
    ChangeFailoverStrategyRequestBody,
    ChangeFailoverStrategyResponse,
    ChangeOpsWindowRequest,
    OpsWindowRequest,
    ChangeOpsWindowResponse,
    AttachEipRequest,
    BindEipRequest,
    AttachEipResponse,
    SetSecurityGroupRequest,
    SecurityGroupRequest,
    SetSecurityGroupResponse,
    RestorePoint,
    CreateRestoreInstanceRequest,
    CreateRestoreInstanceRequestBody,
    CreateRestoreInstanceResponse,
    RestoreExistInstanceRequest,
    RestoreExistInstanceRequestBody,
    RestoreTarget,
    RestoreExistInstanceResponse,
    ListRestoreTimesRequest,
    RestoreTimeRange,
    ListRestoreTimesResponse,
    ListFlavorsRequest,
    Flavor,
    ListFlavorsResponse,
    ListDatastoresRequest,
    LibraryDatastore,
    ListDatastoresResponse,
    ListStorageTypesRequest,
    StorageType,
    ListStorageTypesResponse,
    ShowQuotasRequest,
    Resource,
    Quotas,
    ShowQuotasResponse,
    ShowAutoEnlargePolicyRequest,
    ShowAutoEnlargePolicyResponse,
    SetAutoEnlargePolicyRequest,
    CustomerModifyAutoEnlargePolicyReq,
    SetAutoEnlargePolicyResponse,
    ShowSecondLevelMonitoringRequest,
    ShowSecondLevelMonitoringResponse,
    SetSecondLevelMonitorRequest,
    SecondLevelMonitoringRequest,
    SetSecondLevelMonitorResponse,
    StopInstanceRequest,
    StopInstanceResponse,
    StartupInstanceRequest,
    StartupInstanceResponse,
    UpdateInstanceNameRequest,
    UpdateInstanceNameRequestBody,
    UpdateInstanceNameResponse,
    UpdatePortRequest,
    UpdatePortRequestBody,
    UpdatePortResponse,
    ResetPwdRequest,
    PwdResetRequest,
    ResetPwdResponse,
    SetReadOnlySwitchRequest,
    ReadOnlySwitchRequest,
    SetReadOnlySwitchResponse,
    SwitchSslRequest,
    SslOptionRequest,
    SwitchSslResponse,
    UpdateDataIpRequest,
    DataIpRequest,
    UpdateDataIpResponse,
    ShowReplicationStatusRequest,
    ShowReplicationStatusResponse,
    MigrateFollowerRequest,
    FollowerMigrateRequest,
    MigrateFollowerResponse,
    RestoreTablesRequest,
    RestoreTablesRequestBody,
    RestoreDatabaseInfo,
    RestoreTableInfo,
    RestoreTablesResponse,
    RestoreToExistingInstanceRequest,
    RestoreToExistingInstanceResponse,
);

api_response!(
    CreateInstanceResponse,
    ListInstancesResponse,
    DeleteInstanceResponse,
    RestartInstanceResponse,
    ResizeFlavorResponse,
    EnlargeVolumeResponse,
    StartFailoverResponse,
    ChangeFailoverModeResponse,
    ChangeFailoverStrategyResponse,
    ChangeOpsWindowResponse,
    AttachEipResponse,
    SetSecurityGroupResponse,
    CreateRestoreInstanceResponse,
    RestoreExistInstanceResponse,
    ListRestoreTimesResponse,
    ListFlavorsResponse,
    ListDatastoresResponse,
    ListStorageTypesResponse,
    ShowQuotasResponse,
    ShowAutoEnlargePolicyResponse,
    SetAutoEnlargePolicyResponse,
    ShowSecondLevelMonitoringResponse,
    SetSecondLevelMonitorResponse,
    StopInstanceResponse,
    StartupInstanceResponse,
    UpdateInstanceNameResponse,
    UpdatePortResponse,
    ResetPwdResponse,
    SetReadOnlySwitchResponse,
    SwitchSslResponse,
    UpdateDataIpResponse,
    ShowReplicationStatusResponse,
    MigrateFollowerResponse,
    RestoreTablesResponse,
    RestoreToExistingInstanceResponse,
);
