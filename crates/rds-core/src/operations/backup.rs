//! Full backups, backup policies and off-site copies

use rds_model::model::backup::*;

use super::OperationEntry;

operation! {
    ListBackupsRequest => ListBackupsResponse,
    "ListBackups", Get "/v3/{project_id}/backups",
    path: [],
    query: [
        instance_id,
        backup_id,
        backup_type,
        offset,
        limit,
        begin_time,
        end_time,
    ],
    body: none,
}

operation! {
    CreateManualBackupRequest => CreateManualBackupResponse,
    "CreateManualBackup", Post "/v3/{project_id}/backups",
    path: [],
    query: [],
    body: required,
}

operation! {
    DeleteManualBackupRequest => DeleteManualBackupResponse,
    "DeleteManualBackup", Delete "/v3/{project_id}/backups/{backup_id}",
    path: [backup_id],
    query: [],
    body: none,
}

operation! {
    ShowBackupPolicyRequest => ShowBackupPolicyResponse,
    "ShowBackupPolicy", Get "/v3/{project_id}/instances/{instance_id}/backups/policy",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    SetBackupPolicyRequest => SetBackupPolicyResponse,
    "SetBackupPolicy", Put "/v3/{project_id}/instances/{instance_id}/backups/policy",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ShowOffSiteBackupPolicyRequest => ShowOffSiteBackupPolicyResponse,
    "ShowOffSiteBackupPolicy", Get "/v3/{project_id}/instances/{instance_id}/backups/offsite-policy",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    SetOffSiteBackupPolicyRequest => SetOffSiteBackupPolicyResponse,
    "SetOffSiteBackupPolicy", Put "/v3/{project_id}/instances/{instance_id}/backups/offsite-policy",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ListOffSiteBackupsRequest => ListOffSiteBackupsResponse,
    "ListOffSiteBackups", Get "/v3/{project_id}/offsite-backups",
    path: [],
    query: [
        instance_id,
        backup_id,
        backup_type,
        offset,
        limit,
        begin_time,
        end_time,
    ],
    body: none,
}

operation! {
    ShowBackupDownloadLinkRequest => ShowBackupDownloadLinkResponse,
    "ShowBackupDownloadLink", Get "/v3/{project_id}/backup-files",
    path: [],
    query: [backup_id],
    body: none,
}

operation! {
    BatchDeleteManualBackupRequest => BatchDeleteManualBackupResponse,
    "BatchDeleteManualBackup", Post "/v3/{project_id}/backups/batch-delete",
    path: [],
    query: [],
    body: required,
}

pub(super) fn entries() -> Vec<OperationEntry> {
    const GROUP: &str = "backup";
    vec![
        OperationEntry::of::<ListBackupsRequest>(GROUP),
        OperationEntry::of::<CreateManualBackupRequest>(GROUP),
        OperationEntry::of::<DeleteManualBackupRequest>(GROUP),
        OperationEntry::of::<ShowBackupPolicyRequest>(GROUP),
        OperationEntry::of::<SetBackupPolicyRequest>(GROUP),
        OperationEntry::of::<ShowOffSiteBackupPolicyRequest>(GROUP),
        OperationEntry::of::<SetOffSiteBackupPolicyRequest>(GROUP),
        OperationEntry::of::<ListOffSiteBackupsRequest>(GROUP),
        OperationEntry::of::<ShowBackupDownloadLinkRequest>(GROUP),
        OperationEntry::of::<BatchDeleteManualBackupRequest>(GROUP),
    ]
}
