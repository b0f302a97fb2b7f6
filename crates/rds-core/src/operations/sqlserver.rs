//! SQL Server databases and accounts

use rds_model::model::sqlserver::*;

use super::OperationEntry;

operation! {
    CreateSqlserverDatabaseRequest => CreateSqlserverDatabaseResponse,
    "CreateSqlserverDatabase", Post "/v3/{project_id}/instances/{instance_id}/database",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ListSqlserverDatabasesRequest => ListSqlserverDatabasesResponse,
    "ListSqlserverDatabases", Get "/v3/{project_id}/instances/{instance_id}/database/detail",
    path: [instance_id],
    query: [page, limit, db_name],
    body: none,
}

operation! {
    CreateSqlserverDbUserRequest => CreateSqlserverDbUserResponse,
    "CreateSqlserverDbUser", Post "/v3/{project_id}/instances/{instance_id}/db_user",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ListSqlserverDbUsersRequest => ListSqlserverDbUsersResponse,
    "ListSqlserverDbUsers", Get "/v3/{project_id}/instances/{instance_id}/db_user/detail",
    path: [instance_id],
    query: [page, limit],
    body: none,
}

operation! {
    DeleteSqlserverDatabaseRequest => DeleteSqlserverDatabaseResponse,
    "DeleteSqlserverDatabase", Delete "/v3/{project_id}/instances/{instance_id}/database/{db_name}",
    path: [instance_id, db_name],
    query: [],
    body: none,
}

operation! {
    DeleteSqlserverDbUserRequest => DeleteSqlserverDbUserResponse,
    "DeleteSqlserverDbUser", Delete "/v3/{project_id}/instances/{instance_id}/db_user/{user_name}",
    path: [instance_id, user_name],
    query: [],
    body: none,
}

operation! {
    AllowSqlserverDbUserPrivilegeRequest => AllowSqlserverDbUserPrivilegeResponse,
    "AllowSqlserverDbUserPrivilege", Post "/v3/{project_id}/instances/{instance_id}/db_privilege",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    RevokeSqlserverDbUserPrivilegeRequest => RevokeSqlserverDbUserPrivilegeResponse,
    "RevokeSqlserverDbUserPrivilege", Delete "/v3/{project_id}/instances/{instance_id}/db_privilege",
    path: [instance_id],
    query: [],
    body: required,
}

operation! {
    ListAuthorizedSqlserverDbUsersRequest => ListAuthorizedSqlserverDbUsersResponse,
    "ListAuthorizedSqlserverDbUsers", Get "/v3/{project_id}/instances/{instance_id}/database/db_user",
    path: [instance_id],
    query: [db_name => "db-name", page, limit],
    body: none,
}

pub(super) fn entries() -> Vec<OperationEntry> {
    const GROUP: &str = "sqlserver";
    vec![
        OperationEntry::of::<CreateSqlserverDatabaseRequest>(GROUP),
        OperationEntry::of::<ListSqlserverDatabasesRequest>(GROUP),
        OperationEntry::of::<CreateSqlserverDbUserRequest>(GROUP),
        OperationEntry::of::<ListSqlserverDbUsersRequest>(GROUP),
        OperationEntry::of::<DeleteSqlserverDatabaseRequest>(GROUP),
        OperationEntry::of::<DeleteSqlserverDbUserRequest>(GROUP),
        OperationEntry::of::<AllowSqlserverDbUserPrivilegeRequest>(GROUP),
        OperationEntry::of::<RevokeSqlserverDbUserPrivilegeRequest>(GROUP),
        OperationEntry::of::<ListAuthorizedSqlserverDbUsersRequest>(GROUP),
    ]
}
