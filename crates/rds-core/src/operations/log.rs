//! Error, slow, audit and binlog logs

use rds_model::model::log::*;

use super::OperationEntry;

operation! {
    ListErrorLogsRequest => ListErrorLogsResponse,
    "ListErrorLogs", Get "/v3/{project_id}/instances/{instance_id}/errorlog",
    path: [instance_id],
    query: [start_date, end_date, offset, limit, level],
    body: none,
}

operation! {
    ListSlowLogsRequest => ListSlowLogsResponse,
    "ListSlowLogs", Get "/v3/{project_id}/instances/{instance_id}/slowlog",
    path: [instance_id],
    query: [
        start_date,
        end_date,
        offset,
        limit,
        slow_log_type => "type",
        database,
    ],
    body: none,
}

operation! {
    ListSlowLogFileRequest => ListSlowLogFileResponse,
    "ListSlowLogFile", Get "/v3/{project_id}/instances/{instance_id}/slowlog-files",
    path: [instance_id],
    query: [offset, limit],
    body: none,
}

operation! {
    DownloadSlowlogRequest => DownloadSlowlogResponse,
    "DownloadSlowlog", Post "/v3/{project_id}/instances/{instance_id}/slowlog-download",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ListSlowlogStatisticsRequest => ListSlowlogStatisticsResponse,
    "ListSlowlogStatistics", Get "/v3/{project_id}/instances/{instance_id}/slowlog/statistics",
    path: [instance_id],
    query: [
        cur_page,
        per_page,
        start_date,
        end_date,
        slow_log_type => "type",
        sort,
    ],
    body: none,
}

operation! {
    ListAuditlogsRequest => ListAuditlogsResponse,
    "ListAuditlogs", Get "/v3/{project_id}/instances/{instance_id}/auditlog",
    path: [instance_id],
    query: [start_time, end_time, offset, limit],
    body: none,
}

operation! {
    ShowAuditlogPolicyRequest => ShowAuditlogPolicyResponse,
    "ShowAuditlogPolicy", Get "/v3/{project_id}/instances/{instance_id}/auditlog-policy",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    SetAuditlogPolicyRequest => SetAuditlogPolicyResponse,
    "SetAuditlogPolicy", Put "/v3/{project_id}/instances/{instance_id}/auditlog-policy",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ShowAuditlogDownloadLinkRequest => ShowAuditlogDownloadLinkResponse,
    "ShowAuditlogDownloadLink", Post "/v3/{project_id}/instances/{instance_id}/auditlog-links",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ShowBinlogClearPolicyRequest => ShowBinlogClearPolicyResponse,
    "ShowBinlogClearPolicy", Get "/v3/{project_id}/instances/{instance_id}/binlog/clear-policy",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    SetBinlogClearPolicyRequest => SetBinlogClearPolicyResponse,
    "SetBinlogClearPolicy", Put "/v3/{project_id}/instances/{instance_id}/binlog/clear-policy",
    path: [instance_id],
    query: [],
    body: required,
}

pub(super) fn entries() -> Vec<OperationEntry> {
    const GROUP: &str = "log";
    vec![
        OperationEntry::of::<ListErrorLogsRequest>(GROUP),
        OperationEntry::of::<ListSlowLogsRequest>(GROUP),
        OperationEntry::of::<ListSlowLogFileRequest>(GROUP),
        OperationEntry::of::<DownloadSlowlogRequest>(GROUP),
        OperationEntry::of::<ListSlowlogStatisticsRequest>(GROUP),
        OperationEntry::of::<ListAuditlogsRequest>(GROUP),
        OperationEntry::of::<ShowAuditlogPolicyRequest>(GROUP),
        OperationEntry::of::<SetAuditlogPolicyRequest>(GROUP),
        OperationEntry::of::<ShowAuditlogDownloadLinkRequest>(GROUP),
        OperationEntry::of::<ShowBinlogClearPolicyRequest>(GROUP),
        OperationEntry::of::<SetBinlogClearPolicyRequest>(GROUP),
    ]
}
