//! Instance diagnosis

use rds_model::model::diagnosis::*;

use super::OperationEntry;

operation! {
    ListInstanceDiagnosisRequest => ListInstanceDiagnosisResponse,
    "ListInstanceDiagnosis", Get "/v3/{project_id}/instances/diagnosis",
    path: [],
    query: [engine],
    body: none,
}

operation! {
    ListInstancesInfoDiagnosisRequest => ListInstancesInfoDiagnosisResponse,
    "ListInstancesInfoDiagnosis", Get "/v3/{project_id}/instances/diagnosis/info",
    path: [],
    query: [engine, diagnosis, offset, limit],
    body: none,
}

pub(super) fn entries() -> Vec<OperationEntry> {
    const GROUP: &str = "diagnosis";
    vec![
        OperationEntry::of::<ListInstanceDiagnosisRequest>(GROUP),
        OperationEntry::of::<ListInstancesInfoDiagnosisRequest>(GROUP),
    ]
}
