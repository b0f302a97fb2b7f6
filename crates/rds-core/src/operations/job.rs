//! Asynchronous job status

use rds_model::model::job::*;

use super::OperationEntry;

operation! {
    ListJobInfoRequest => ListJobInfoResponse,
    "ListJobInfo", Get "/v3/{project_id}/jobs",
    path: [],
    query: [id],
    body: none,
}

operation! {
    DeleteJobRequest => DeleteJobResponse,
    "DeleteJob", Delete "/v3/{project_id}/jobs",
    path: [],
    query: [id],
    body: none,
}

pub(super) fn entries() -> Vec<OperationEntry> {
    const GROUP: &str = "job";
    vec![
        OperationEntry::of::<ListJobInfoRequest>(GROUP),
        OperationEntry::of::<DeleteJobRequest>(GROUP),
    ]
}
