//! PostgreSQL databases, accounts and pg_hba.conf

use rds_model::model::postgresql::*;

use super::OperationEntry;

operation! {
    CreatePostgresqlDatabaseRequest => CreatePostgresqlDatabaseResponse,
    "CreatePostgresqlDatabase", Post "/v3/{project_id}/instances/{instance_id}/database",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ListPostgresqlDatabasesRequest => ListPostgresqlDatabasesResponse,
    "ListPostgresqlDatabases", Get "/v3/{project_id}/instances/{instance_id}/database/detail",
    path: [instance_id],
    query: [page, limit],
    body: none,
}

operation! {
    CreatePostgresqlDbUserRequest => CreatePostgresqlDbUserResponse,
    "CreatePostgresqlDbUser", Post "/v3/{project_id}/instances/{instance_id}/db_user",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ListPostgresqlDbUserPaginatedRequest => ListPostgresqlDbUserPaginatedResponse,
    "ListPostgresqlDbUserPaginated", Get "/v3/{project_id}/instances/{instance_id}/db_user/detail",
    path: [instance_id],
    query: [page, limit],
    body: none,
}

operation! {
    ListPostgresqlHbaInfoRequest => ListPostgresqlHbaInfoResponse,
    "ListPostgresqlHbaInfo", Get "/v3/{project_id}/instances/{instance_id}/hba-info",
    path: [instance_id],
    query: [],
    body: none,
}

operation! {
    ModifyPostgresqlHbaConfRequest => ModifyPostgresqlHbaConfResponse,
    "ModifyPostgresqlHbaConf", Put "/v3/{project_id}/instances/{instance_id}/hba-info",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    DeletePostgresqlDatabaseRequest => DeletePostgresqlDatabaseResponse,
    "DeletePostgresqlDatabase", Delete "/v3/{project_id}/instances/{instance_id}/database/{db_name}",
    path: [instance_id, db_name],
    query: [],
    body: none,
}

operation! {
    UpdatePostgresqlDatabaseRequest => UpdatePostgresqlDatabaseResponse,
    "UpdatePostgresqlDatabase", Put "/v3/{project_id}/instances/{instance_id}/database/update",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    DeletePostgresqlDbUserRequest => DeletePostgresqlDbUserResponse,
    "DeletePostgresqlDbUser", Delete "/v3/{project_id}/instances/{instance_id}/db_user/{user_name}",
    path: [instance_id, user_name],
    query: [],
    body: none,
}

operation! {
    SetPostgresqlDbUserPwdRequest => SetPostgresqlDbUserPwdResponse,
    "SetPostgresqlDbUserPwd", Post "/v3/{project_id}/instances/{instance_id}/db_user/resetpwd",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    UpdatePostgresqlDbUserCommentRequest => UpdatePostgresqlDbUserCommentResponse,
    "UpdatePostgresqlDbUserComment", Put "/v3/{project_id}/instances/{instance_id}/db-users/{user_name}/comment",
    path: [instance_id, user_name],
    query: [],
    body: required,
}

operation! {
    AddPostgresqlHbaConfRequest => AddPostgresqlHbaConfResponse,
    "AddPostgresqlHbaConf", Post "/v3/{project_id}/instances/{instance_id}/hba-info",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    DeletePostgresqlHbaConfRequest => DeletePostgresqlHbaConfResponse,
    "DeletePostgresqlHbaConf", Delete "/v3/{project_id}/instances/{instance_id}/hba-info",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ListPostgresqlExtensionRequest => ListPostgresqlExtensionResponse,
    "ListPostgresqlExtension", Get "/v3/{project_id}/instances/{instance_id}/extensions",
    path: [instance_id],
    query: [database_name, offset, limit],
    body: none,
}

operation! {
    CreatePostgresqlExtensionRequest => CreatePostgresqlExtensionResponse,
    "CreatePostgresqlExtension", Post "/v3/{project_id}/instances/{instance_id}/extensions",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    DeletePostgresqlExtensionRequest => DeletePostgresqlExtensionResponse,
    "DeletePostgresqlExtension", Delete "/v3/{project_id}/instances/{instance_id}/extensions",
    path: [instance_id],
    query: [],
    body: required,
}

pub(super) fn entries() -> Vec<OperationEntry> {
    const GROUP: &str = "postgresql";
    vec![
        OperationEntry::of::<CreatePostgresqlDatabaseRequest>(GROUP),
        OperationEntry::of::<ListPostgresqlDatabasesRequest>(GROUP),
        OperationEntry::of::<CreatePostgresqlDbUserRequest>(GROUP),
        OperationEntry::of::<ListPostgresqlDbUserPaginatedRequest>(GROUP),
        OperationEntry::of::<ListPostgresqlHbaInfoRequest>(GROUP),
        OperationEntry::of::<ModifyPostgresqlHbaConfRequest>(GROUP),
        OperationEntry::of::<DeletePostgresqlDatabaseRequest>(GROUP),
        OperationEntry::of::<UpdatePostgresqlDatabaseRequest>(GROUP),
        OperationEntry::of::<DeletePostgresqlDbUserRequest>(GROUP),
        OperationEntry::of::<SetPostgresqlDbUserPwdRequest>(GROUP),
        OperationEntry::of::<UpdatePostgresqlDbUserCommentRequest>(GROUP),
        OperationEntry::of::<AddPostgresqlHbaConfRequest>(GROUP),
        OperationEntry::of::<DeletePostgresqlHbaConfRequest>(GROUP),
        OperationEntry::of::<ListPostgresqlExtensionRequest>(GROUP),
        OperationEntry::of::<CreatePostgresqlExtensionRequest>(GROUP),
        OperationEntry::of::<DeletePostgresqlExtensionRequest>(GROUP),
    ]
}
