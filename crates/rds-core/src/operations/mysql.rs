//! MySQL databases, accounts and privileges

use rds_model::model::mysql::*;

use super::OperationEntry;

operation! {
    CreateDatabaseRequest => CreateDatabaseResponse,
    "CreateDatabase", Post "/v3/{project_id}/instances/{instance_id}/database",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ListDatabasesRequest => ListDatabasesResponse,
    "ListDatabases", Get "/v3/{project_id}/instances/{instance_id}/database/detail",
    path: [instance_id],
    query: [page, limit],
    body: none,
}

operation! {
    DeleteDatabaseRequest => DeleteDatabaseResponse,
    "DeleteDatabase", Delete "/v3/{project_id}/instances/{instance_id}/database/{db_name}",
    path: [instance_id, db_name],
    query: [],
    body: none,
}

operation! {
    CreateDbUserRequest => CreateDbUserResponse,
    "CreateDbUser", Post "/v3/{project_id}/instances/{instance_id}/db_user",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ListDbUsersRequest => ListDbUsersResponse,
    "ListDbUsers", Get "/v3/{project_id}/instances/{instance_id}/db_user/detail",
    path: [instance_id],
    query: [page, limit],
    body: none,
}

operation! {
    DeleteDbUserRequest => DeleteDbUserResponse,
    "DeleteDbUser", Delete "/v3/{project_id}/instances/{instance_id}/db_user/{user_name}",
    path: [instance_id, user_name],
    query: [],
    body: none,
}

operation! {
    SetDbUserPwdRequest => SetDbUserPwdResponse,
    "SetDbUserPwd", Post "/v3/{project_id}/instances/{instance_id}/db_user/resetpwd",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    AllowDbUserPrivilegeRequest => AllowDbUserPrivilegeResponse,
    "AllowDbUserPrivilege", Post "/v3/{project_id}/instances/{instance_id}/db_privilege",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    UpdateDatabaseRequest => UpdateDatabaseResponse,
    "UpdateDatabase", Put "/v3/{project_id}/instances/{instance_id}/database/update",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    UpdateDbUserCommentRequest => UpdateDbUserCommentResponse,
    "UpdateDbUserComment", Put "/v3/{project_id}/instances/{instance_id}/db-users/{user_name}/comment",
    path: [instance_id, user_name],
    query: [],
    body: required,
}

operation! {
    RevokeRequest => RevokeResponse,
    "Revoke", Delete "/v3/{project_id}/instances/{instance_id}/db_privilege",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ListAuthorizedDatabasesRequest => ListAuthorizedDatabasesResponse,
    "ListAuthorizedDatabases", Get "/v3/{project_id}/instances/{instance_id}/db_user/database",
    path: [instance_id],
    query: [user_name => "user-name", page, limit],
    body: none,
}

operation! {
    ListAuthorizedDbUsersRequest => ListAuthorizedDbUsersResponse,
    "ListAuthorizedDbUsers", Get "/v3/{project_id}/instances/{instance_id}/database/db_user",
    path: [instance_id],
    query: [db_name => "db-name", page, limit],
    body: none,
}

pub(super) fn entries() -> Vec<OperationEntry> {
    const GROUP: &str = "mysql";
    vec![
        OperationEntry::of::<CreateDatabaseRequest>(GROUP),
        OperationEntry::of::<ListDatabasesRequest>(GROUP),
        OperationEntry::of::<DeleteDatabaseRequest>(GROUP),
        OperationEntry::of::<CreateDbUserRequest>(GROUP),
        OperationEntry::of::<ListDbUsersRequest>(GROUP),
        OperationEntry::of::<DeleteDbUserRequest>(GROUP),
        OperationEntry::of::<SetDbUserPwdRequest>(GROUP),
        OperationEntry::of::<AllowDbUserPrivilegeRequest>(GROUP),
        OperationEntry::of::<UpdateDatabaseRequest>(GROUP),
        OperationEntry::of::<UpdateDbUserCommentRequest>(GROUP),
        OperationEntry::of::<RevokeRequest>(GROUP),
        OperationEntry::of::<ListAuthorizedDatabasesRequest>(GROUP),
        OperationEntry::of::<ListAuthorizedDbUsersRequest>(GROUP),
    ]
}
