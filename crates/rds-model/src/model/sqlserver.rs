//! SQL Server databases and logins

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::common::Language;
use crate::{api_response, closed_enum, describe};

closed_enum! {
    pub enum SqlserverDatabaseState: int32 {
        Creating = 0,
        Normal = 1,
        CreateFailed = 2,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreateSqlserverDatabaseRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: SqlserverDatabaseForCreation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlserverDatabaseForCreation {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSqlserverDatabaseResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListSqlserverDatabasesRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub page: i32,
    pub limit: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub db_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqlserverDatabaseForDetail {
    pub name: String,
    pub character_set: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SqlserverDatabaseState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSqlserverDatabasesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<SqlserverDatabaseForDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreateSqlserverDbUserRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: SqlserverUserForCreation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlserverUserForCreation {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSqlserverDbUserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListSqlserverDbUsersRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub page: i32,
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqlserverUserForList {
    pub name: String,
    /// `0` while creating, `1` once usable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSqlserverDbUsersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<SqlserverUserForList>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Deletion and privileges
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeleteSqlserverDatabaseRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub db_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteSqlserverDatabaseResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeleteSqlserverDbUserRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub user_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteSqlserverDbUserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

/// Login with the access level granted on one database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlserverUserWithPrivilege {
    pub name: String,
    /// Read-write when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlserverGrantRequest {
    pub db_name: String,
    pub users: Vec<SqlserverUserWithPrivilege>,
}

/// Login referenced by name only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlserverUserName {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlserverRevokeRequest {
    pub db_name: String,
    pub users: Vec<SqlserverUserName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct AllowSqlserverDbUserPrivilegeRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: SqlserverGrantRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllowSqlserverDbUserPrivilegeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct RevokeSqlserverDbUserPrivilegeRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: SqlserverRevokeRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevokeSqlserverDbUserPrivilegeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListAuthorizedSqlserverDbUsersRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub db_name: String,
    pub page: i32,
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListAuthorizedSqlserverDbUsersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<SqlserverUserName>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

describe!(
    CreateSqlserverDatabaseRequest,
    SqlserverDatabaseForCreation,
    CreateSqlserverDatabaseResponse,
    ListSqlserverDatabasesRequest,
    SqlserverDatabaseForDetail,
    ListSqlserverDatabasesResponse,
    CreateSqlserverDbUserRequest,
    SqlserverUserForCreation,
    CreateSqlserverDbUserResponse,
    ListSqlserverDbUsersRequest,
    SqlserverUserForList,
    ListSqlserverDbUsersResponse,
    DeleteSqlserverDatabaseRequest,
    DeleteSqlserverDatabaseResponse,
    DeleteSqlserverDbUserRequest,
    DeleteSqlserverDbUserResponse,
    SqlserverUserWithPrivilege,
    SqlserverGrantRequest,
    SqlserverUserName,
    SqlserverRevokeRequest,
    AllowSqlserverDbUserPrivilegeRequest,
    AllowSqlserverDbUserPrivilegeResponse,
    RevokeSqlserverDbUserPrivilegeRequest,
    RevokeSqlserverDbUserPrivilegeResponse,
    ListAuthorizedSqlserverDbUsersRequest,
    ListAuthorizedSqlserverDbUsersResponse,
);

api_response!(
    CreateSqlserverDatabaseResponse,
    ListSqlserverDatabasesResponse,
    CreateSqlserverDbUserResponse,
    ListSqlserverDbUsersResponse,
    DeleteSqlserverDatabaseResponse,
    DeleteSqlserverDbUserResponse,
    AllowSqlserverDbUserPrivilegeResponse,
    RevokeSqlserverDbUserPrivilegeResponse,
    ListAuthorizedSqlserverDbUsersResponse,
);
