//! Database proxy

use rds_model::model::proxy::*;

use super::OperationEntry;

operation! {
    ListProxiesRequest => ListProxiesResponse,
    "ListProxies", Get "/v3/{project_id}/instances/{instance_id}/proxies",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    StartDatabaseProxyRequest => StartDatabaseProxyResponse,
    "StartDatabaseProxy", Post "/v3/{project_id}/instances/{instance_id}/proxy",
    path: [instance_id],
    query: [],
    body: optional,
}

operation! {
    StopDatabaseProxyRequest => StopDatabaseProxyResponse,
    "StopDatabaseProxy", Delete "/v3/{project_id}/instances/{instance_id}/proxy",
    path: [instance_id],
    query: [],
    body: optional,
}

operation! {
    ChangeProxyScaleRequest => ChangeProxyScaleResponse,
    "ChangeProxyScale", Post "/v3/{project_id}/instances/{instance_id}/proxy/{proxy_id}/scale",
    path: [instance_id, proxy_id],
    query: [],
    body: required,
}

operation! {
    UpdateReadWeightRequest => UpdateReadWeightResponse,
    "UpdateReadWeight", Put "/v3/{project_id}/instances/{instance_id}/proxy/{proxy_id}/weight",
    path: [instance_id, proxy_id],
    query: [],
    body: required,
}

pub(super) fn entries() -> Vec<OperationEntry> {
    const GROUP: &str = "proxy";
    vec![
        OperationEntry::of::<ListProxiesRequest>(GROUP),
        OperationEntry::of::<StartDatabaseProxyRequest>(GROUP),
        OperationEntry::of::<StopDatabaseProxyRequest>(GROUP),
        OperationEntry::of::<ChangeProxyScaleRequest>(GROUP),
        OperationEntry::of::<UpdateReadWeightRequest>(GROUP),
    ]
}
