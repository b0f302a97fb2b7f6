//! MySQL databases, accounts and privileges

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::common::Language;
use crate::{api_response, describe};

/// Database with the access level granted to one account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseWithPrivilege {
    pub name: String,
    pub readonly: bool,
}

/// Account with the access level granted on one database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithPrivilege {
    pub name: String,
    pub readonly: bool,
}

// ============================================================================
// Databases
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreateDatabaseRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: DatabaseForCreation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseForCreation {
    pub name: String,
    /// e.g. `utf8mb4`
    pub character_set: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDatabaseResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListDatabasesRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    /// 1-based
    pub page: i32,
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseForList {
    pub name: String,
    pub character_set: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserWithPrivilege>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDatabasesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<DatabaseForList>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeleteDatabaseRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub db_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteDatabaseResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Accounts
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreateDbUserRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: UserForCreation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserForCreation {
    pub name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Allowed client addresses; `%` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<DatabaseWithPrivilege>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDbUserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListDbUsersRequest {
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
pub struct UserForList {
    pub name: String,
    pub hosts: Vec<String>,
    pub databases: Vec<DatabaseWithPrivilege>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDbUsersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserForList>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeleteDbUserRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub user_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteDbUserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SetDbUserPwdRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: DbUserPwdRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbUserPwdRequest {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDbUserPwdResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct AllowDbUserPrivilegeRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: GrantRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRequest {
    pub db_name: String,
    pub users: Vec<UserWithPrivilege>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllowDbUserPrivilegeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Updates, revocation and authorization listings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct UpdateDatabaseRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: UpdateDatabaseReq,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDatabaseReq {
    pub name: String,
    /// Empty text clears the remark
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDatabaseResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct UpdateDbUserCommentRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub user_name: String,
    pub body: UpdateDbUserReq,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDbUserReq {
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDbUserCommentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct RevokeRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: RevokeRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeRequestBody {
    pub db_name: String,
    pub users: Vec<RevokeUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeUser {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevokeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListAuthorizedDatabasesRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub user_name: String,
    /// 1-based
    pub page: i32,
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListAuthorizedDatabasesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<DatabaseWithPrivilege>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListAuthorizedDbUsersRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub db_name: String,
    /// 1-based
    pub page: i32,
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListAuthorizedDbUsersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserWithPrivilege>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

describe!(
    DatabaseWithPrivilege,
    UserWithPrivilege,
    CreateDatabaseRequest,
    DatabaseForCreation,
    CreateDatabaseResponse,
    ListDatabasesRequest,
    DatabaseForList,
    ListDatabasesResponse,
    DeleteDatabaseRequest,
    DeleteDatabaseResponse,
    CreateDbUserRequest,
    UserForCreation,
    CreateDbUserResponse,
    ListDbUsersRequest,
    UserForList,
    ListDbUsersResponse,
    DeleteDbUserRequest,
    DeleteDbUserResponse,
    SetDbUserPwdRequest,
    DbUserPwdRequest,
    SetDbUserPwdResponse,
    AllowDbUserPrivilegeRequest,
    GrantRequest,
    AllowDbUserPrivilegeResponse,
    UpdateDatabaseRequest,
    UpdateDatabaseReq,
    UpdateDatabaseResponse,
    UpdateDbUserCommentRequest,
    UpdateDbUserReq,
    UpdateDbUserCommentResponse,
    RevokeRequest,
    RevokeRequestBody,
    RevokeUser,
    RevokeResponse,
    ListAuthorizedDatabasesRequest,
    ListAuthorizedDatabasesResponse,
    ListAuthorizedDbUsersRequest,
    ListAuthorizedDbUsersResponse,
);

api_response!(
    CreateDatabaseResponse,
    ListDatabasesResponse,
    DeleteDatabaseResponse,
    CreateDbUserResponse,
    ListDbUsersResponse,
    DeleteDbUserResponse,
    SetDbUserPwdResponse,
    AllowDbUserPrivilegeResponse,
    UpdateDatabaseResponse,
    UpdateDbUserCommentResponse,
    RevokeResponse,
    ListAuthorizedDatabasesResponse,
    ListAuthorizedDbUsersResponse,
);
