//! Instance lifecycle, specifications, failover, networking and restore

use rds_model::model::instance::*;

use super::OperationEntry;

operation! {
    CreateInstanceRequest => CreateInstanceResponse,
    "CreateInstance", Post "/v3/{project_id}/instances",
    path: [],
    query: [],
    body: required,
}

operation! {
    ListInstancesRequest => ListInstancesResponse,
    "ListInstances", Get "/v3/{project_id}/instances",
    path: [],
    query: [
        id,
        name,
        instance_type => "type",
        datastore_type,
        enterprise_project_id,
        vpc_id,
        subnet_id,
        offset,
        limit,
        tags,
    ],
    body: none,
}

operation! {
    DeleteInstanceRequest => DeleteInstanceResponse,
    "DeleteInstance", Delete "/v3/{project_id}/instances/{instance_id}",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    RestartInstanceRequest => RestartInstanceResponse,
    "RestartInstance", Post "/v3/{project_id}/instances/{instance_id}/action",
    path: [instance_id],
    query: [],
    body: optional,
}

operation! {
    ResizeFlavorRequest => ResizeFlavorResponse,
    "ResizeFlavor", Post "/v3/{project_id}/instances/{instance_id}/action",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    EnlargeVolumeRequest => EnlargeVolumeResponse,
    "EnlargeVolume", Post "/v3/{project_id}/instances/{instance_id}/action",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    StartFailoverRequest => StartFailoverResponse,
    "StartFailover", Put "/v3/{project_id}/instances/{instance_id}/failover",
    path: [instance_id],
    query: [],
    body: optional,
}

operation! {
    ChangeFailoverModeRequest => ChangeFailoverModeResponse,
    "ChangeFailoverMode", Put "/v3/{project_id}/instances/{instance_id}/failover/mode",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ChangeFailoverStrategyRequest => ChangeFailoverStrategyResponse,
    "ChangeFailoverStrategy", Put "/v3/{project_id}/instances/{instance_id}/failover/strategy",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ChangeOpsWindowRequest => ChangeOpsWindowResponse,
    "ChangeOpsWindow", Put "/v3/{project_id}/instances/{instance_id}/ops-window",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    AttachEipRequest => AttachEipResponse,
    "AttachEip", Put "/v3/{project_id}/instances/{instance_id}/public-ip",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    SetSecurityGroupRequest => SetSecurityGroupResponse,
    "SetSecurityGroup", Put "/v3/{project_id}/instances/{instance_id}/security-group",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    CreateRestoreInstanceRequest => CreateRestoreInstanceResponse,
    "CreateRestoreInstance", Post "/v3/{project_id}/instances",
    path: [],
    query: [],
    body: required,
}

operation! {
    RestoreExistInstanceRequest => RestoreExistInstanceResponse,
    "RestoreExistInstance", Post "/v3.1/{project_id}/instances/recovery",
    path: [],
    query: [],
    body: required,
}

operation! {
    ListRestoreTimesRequest => ListRestoreTimesResponse,
    "ListRestoreTimes", Get "/v3/{project_id}/instances/{instance_id}/restore-time",
    path: [instance_id],
    query: [date],
    body: none,
}

operation! {
    ListFlavorsRequest => ListFlavorsResponse,
    "ListFlavors", Get "/v3/{project_id}/flavors/{database_name}",
    path: [database_name],
    query: [version_name, spec_code],
    body: none,
}

operation! {
    ListDatastoresRequest => ListDatastoresResponse,
    "ListDatastores", Get "/v3/{project_id}/datastores/{database_name}",
    path: [database_name],
    query: [],
    body: none,
}

operation! {
    ListStorageTypesRequest => ListStorageTypesResponse,
    "ListStorageTypes", Get "/v3/{project_id}/storage-type/{database_name}",
    path: [database_name],
    query: [version_name, ha_mode],
    body: none,
}

operation! {
    ShowQuotasRequest => ShowQuotasResponse,
    "ShowQuotas", Get "/v3/{project_id}/quotas",
    path: [],
    query: [],
    body: none,
}

operation! {
    ShowAutoEnlargePolicyRequest => ShowAutoEnlargePolicyResponse,
    "ShowAutoEnlargePolicy", Get "/v3/{project_id}/instances/{instance_id}/disk-auto-expansion",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    SetAutoEnlargePolicyRequest => SetAutoEnlargePolicyResponse,
    "SetAutoEnlargePolicy", Put "/v3/{project_id}/instances/{instance_id}/disk-auto-expansion",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ShowSecondLevelMonitoringRequest => ShowSecondLevelMonitoringResponse,
    "ShowSecondLevelMonitoring", Get "/v3/{project_id}/instances/{instance_id}/second-level-monitor",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    SetSecondLevelMonitorRequest => SetSecondLevelMonitorResponse,
    "SetSecondLevelMonitor", Put "/v3/{project_id}/instances/{instance_id}/second-level-monitor",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    StopInstanceRequest => StopInstanceResponse,
    "StopInstance", Post "/v3/{project_id}/instances/{instance_id}/action/shutdown",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    StartupInstanceRequest => StartupInstanceResponse,
    "StartupInstance", Post "/v3/{project_id}/instances/{instance_id}/action/startup",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    UpdateInstanceNameRequest => UpdateInstanceNameResponse,
    "UpdateInstanceName", Put "/v3/{project_id}/instances/{instance_id}/name",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    UpdatePortRequest => UpdatePortResponse,
    "UpdatePort", Put "/v3/{project_id}/instances/{instance_id}/port",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ResetPwdRequest => ResetPwdResponse,
    "ResetPwd", Post "/v3/{project_id}/instances/{instance_id}/password",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    SetReadOnlySwitchRequest => SetReadOnlySwitchResponse,
    "SetReadOnlySwitch", Put "/v3/{project_id}/instances/{instance_id}/readonly-status",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    SwitchSslRequest => SwitchSslResponse,
    "SwitchSsl", Put "/v3/{project_id}/instances/{instance_id}/ssl",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    UpdateDataIpRequest => UpdateDataIpResponse,
    "UpdateDataIp", Put "/v3/{project_id}/instances/{instance_id}/ip",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ShowReplicationStatusRequest => ShowReplicationStatusResponse,
    "ShowReplicationStatus", Get "/v3/{project_id}/instances/{instance_id}/replication/status",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    MigrateFollowerRequest => MigrateFollowerResponse,
    "MigrateFollower", Post "/v3/{project_id}/instances/{instance_id}/migrateslave",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    RestoreTablesRequest => RestoreTablesResponse,
    "RestoreTables", Post "/v3/{project_id}/instances/{instance_id}/restore/tables",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    RestoreToExistingInstanceRequest => RestoreToExistingInstanceResponse,
    "RestoreToExistingInstance", Post "/v3/{project_id}/instances/recovery",
    path: [],
    query: [],
    body: required,
}

pub(super) fn entries() -> Vec<OperationEntry> {
    const GROUP: &str = "instance";
    vec![
        OperationEntry::of::<CreateInstanceRequest>(GROUP),
        OperationEntry::of::<ListInstancesRequest>(GROUP),
        OperationEntry::of::<DeleteInstanceRequest>(GROUP),
        OperationEntry::of::<RestartInstanceRequest>(GROUP),
        OperationEntry::of::<ResizeFlavorRequest>(GROUP),
        OperationEntry::of::<EnlargeVolumeRequest>(GROUP),
        OperationEntry::of::<StartFailoverRequest>(GROUP),
        OperationEntry::of::<ChangeFailoverModeRequest>(GROUP),
        OperationEntry::of::<ChangeFailoverStrategyRequest>(GROUP),
        OperationEntry::of::<ChangeOpsWindowRequest>(GROUP),
        OperationEntry::of::<AttachEipRequest>(GROUP),
        OperationEntry::of::<SetSecurityGroupRequest>(GROUP),
        OperationEntry::of::<CreateRestoreInstanceRequest>(GROUP),
        OperationEntry::of::<RestoreExistInstanceRequest>(GROUP),
        OperationEntry::of::<ListRestoreTimesRequest>(GROUP),
        OperationEntry::of::<ListFlavorsRequest>(GROUP),
        OperationEntry::of::<ListDatastoresRequest>(GROUP),
        OperationEntry::of::<ListStorageTypesRequest>(GROUP),
        OperationEntry::of::<ShowQuotasRequest>(GROUP),
        OperationEntry::of::<ShowAutoEnlargePolicyRequest>(GROUP),
        OperationEntry::of::<SetAutoEnlargePolicyRequest>(GROUP),
        OperationEntry::of::<ShowSecondLevelMonitoringRequest>(GROUP),
        OperationEntry::of::<SetSecondLevelMonitorRequest>(GROUP),
        OperationEntry::of::<StopInstanceRequest>(GROUP),
        OperationEntry::of::<StartupInstanceRequest>(GROUP),
        OperationEntry::of::<UpdateInstanceNameRequest>(GROUP),
        OperationEntry::of::<UpdatePortRequest>(GROUP),
        OperationEntry::of::<ResetPwdRequest>(GROUP),
        OperationEntry::of::<SetReadOnlySwitchRequest>(GROUP),
        OperationEntry::of::<SwitchSslRequest>(GROUP),
        OperationEntry::of::<UpdateDataIpRequest>(GROUP),
        OperationEntry::of::<ShowReplicationStatusRequest>(GROUP),
        OperationEntry::of::<MigrateFollowerRequest>(GROUP),
        OperationEntry::of::<RestoreTablesRequest>(GROUP),
        OperationEntry::of::<RestoreToExistingInstanceRequest>(GROUP),
    ]
}
