//! Parameter templates and per-instance parameters

use rds_model::model::configuration::*;

use super::OperationEntry;

operation! {
    ListConfigurationsRequest => ListConfigurationsResponse,
    "ListConfigurations", Get "/v3/{project_id}/configurations",
    path: [],
    query: [],
    body: none,
}

operation! {
    CreateConfigurationRequest => CreateConfigurationResponse,
    "CreateConfiguration", Post "/v3/{project_id}/configurations",
    path: [],
    query: [],
    body: required,
}

operation! {
    ShowConfigurationRequest => ShowConfigurationResponse,
    "ShowConfiguration", Get "/v3/{project_id}/configurations/{config_id}",
    path: [config_id],
    query: [],
    body: none,
}

operation! {
    UpdateConfigurationRequest => UpdateConfigurationResponse,
    "UpdateConfiguration", Put "/v3/{project_id}/configurations/{config_id}",
    path: [config_id],
    query: [],
    body: required,
}

operation! {
    DeleteConfigurationRequest => DeleteConfigurationResponse,
    "DeleteConfiguration", Delete "/v3/{project_id}/configurations/{config_id}",
    path: [config_id],
    query: [],
    body: none,
}

operation! {
    ApplyConfigurationAsyncRequest => ApplyConfigurationAsyncResponse,
    "ApplyConfigurationAsync", Put "/v3/{project_id}/configurations/{config_id}/apply",
    path: [config_id],
    query: [],
    body: required,
}

operation! {
    ShowInstanceConfigurationRequest => ShowInstanceConfigurationResponse,
    "ShowInstanceConfiguration", Get "/v3/{project_id}/instances/{instance_id}/configurations",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    UpdateInstanceConfigurationRequest => UpdateInstanceConfigurationResponse,
    "UpdateInstanceConfiguration", Put "/v3/{project_id}/instances/{instance_id}/configurations",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    CopyConfigurationRequest => CopyConfigurationResponse,
    "CopyConfiguration", Post "/v3/{project_id}/configurations/{config_id}/copy",
    path: [config_id],
    query: [],
    body: required,
}

operation! {
    EnableConfigurationRequest => EnableConfigurationResponse,
    "EnableConfiguration", Put "/v3/{project_id}/configurations/{config_id}/apply",
    path: [config_id],
    query: [],
    body: required,
}

pub(super) fn entries() -> Vec<OperationEntry> {
    const GROUP: &str = "configuration";
    vec![
        OperationEntry::of::<ListConfigurationsRequest>(GROUP),
        OperationEntry::of::<CreateConfigurationRequest>(GROUP),
        OperationEntry::of::<ShowConfigurationRequest>(GROUP),
        OperationEntry::of::<UpdateConfigurationRequest>(GROUP),
        OperationEntry::of::<DeleteConfigurationRequest>(GROUP),
        OperationEntry::of::<ApplyConfigurationAsyncRequest>(GROUP),
        OperationEntry::of::<ShowInstanceConfigurationRequest>(GROUP),
        OperationEntry::of::<UpdateInstanceConfigurationRequest>(GROUP),
        OperationEntry::of::<CopyConfigurationRequest>(GROUP),
        OperationEntry::of::<EnableConfigurationRequest>(GROUP),
    ]
}
