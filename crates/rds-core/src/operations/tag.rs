//! Instance and project tags

use rds_model::model::tag::*;

use super::OperationEntry;

operation! {
    BatchTagAddActionRequest => BatchTagAddActionResponse,
    "BatchTagAddAction", Post "/v3/{project_id}/instances/{instance_id}/tags/action",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    BatchTagDelActionRequest => BatchTagDelActionResponse,
    "BatchTagDelAction", Delete "/v3/{project_id}/instances/{instance_id}/tags/action",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ListInstanceTagsRequest => ListInstanceTagsResponse,
    "ListInstanceTags", Get "/v3/{project_id}/instances/{instance_id}/tags",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    ListProjectTagsRequest => ListProjectTagsResponse,
    "ListProjectTags", Get "/v3/{project_id}/tags",
    path: [],
    query: [],
    body: none,
}

pub(super) fn entries() -> Vec<OperationEntry> {
    const GROUP: &str = "tag";
    vec![
        OperationEntry::of::<BatchTagAddActionRequest>(GROUP),
        OperationEntry::of::<BatchTagDelActionRequest>(GROUP),
        OperationEntry::of::<ListInstanceTagsRequest>(GROUP),
        OperationEntry::of::<ListProjectTagsRequest>(GROUP),
    ]
}
