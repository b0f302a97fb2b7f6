//! PostgreSQL databases, roles and `pg_hba.conf`

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::common::Language;
use crate::{api_response, closed_enum, describe};

closed_enum! {
    /// Connection type column of a `pg_hba.conf` line
    pub enum HbaConnectionType: string {
        Host = "host",
        HostSsl = "hostssl",
        HostNoSsl = "hostnossl",
    }
}

closed_enum! {
    pub enum HbaAuthMethod: string {
        Md5 = "md5",
        ScramSha256 = "scram-sha-256",
        Reject = "reject",
    }
}

// ============================================================================
// Databases
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreatePostgresqlDatabaseRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: PostgresqlDatabaseForCreation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresqlDatabaseForCreation {
    pub name: String,
    /// Defaults to `root`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lc_collate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lc_ctype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_revoke_public_privilege: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePostgresqlDatabaseResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListPostgresqlDatabasesRequest {
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
pub struct PostgresqlListDatabase {
    pub name: String,
    pub owner: String,
    pub character_set: String,
    pub collate_set: String,
    /// Size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPostgresqlDatabasesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<PostgresqlListDatabase>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Roles
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreatePostgresqlDbUserRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: PostgresqlUserForCreation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresqlUserForCreation {
    pub name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePostgresqlDbUserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListPostgresqlDbUserPaginatedRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub page: i32,
    pub limit: i32,
}

/// Role flags as stored in `pg_roles`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresqlUserAttributes {
    pub rolsuper: bool,
    pub rolinherit: bool,
    pub rolcreaterole: bool,
    pub rolcreatedb: bool,
    pub rolcanlogin: bool,
    /// `-1` means unlimited
    pub rolconnlimit: i32,
    pub rolreplication: bool,
    pub rolbypassrls: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresqlUserForList {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<PostgresqlUserAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memberof: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPostgresqlDbUserPaginatedResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<PostgresqlUserForList>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Host-based authentication
// ============================================================================

/// One line of `pg_hba.conf`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostgresqlHbaConf {
    #[serde(rename = "type")]
    pub r#type: HbaConnectionType,
    pub database: String,
    pub user: String,
    /// Client address, with or without a CIDR suffix
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    pub method: HbaAuthMethod,
    /// Lower values match first
    pub priority: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListPostgresqlHbaInfoRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

/// The service answers with a bare JSON array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListPostgresqlHbaInfoResponse {
    pub body: Vec<PostgresqlHbaConf>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ModifyPostgresqlHbaConfRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    /// Lines to add or replace, matched on type/database/user/address
    pub body: Vec<PostgresqlHbaConf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifyPostgresqlHbaConfResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Database and role maintenance
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeletePostgresqlDatabaseRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub db_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePostgresqlDatabaseResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct UpdatePostgresqlDatabaseRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: PostgresqlDatabaseForUpdate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresqlDatabaseForUpdate {
    pub name: String,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePostgresqlDatabaseResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeletePostgresqlDbUserRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub user_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePostgresqlDbUserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SetPostgresqlDbUserPwdRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: PostgresqlDbUserPwd,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresqlDbUserPwd {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetPostgresqlDbUserPwdResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct UpdatePostgresqlDbUserCommentRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub user_name: String,
    pub body: PostgresqlUserComment,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresqlUserComment {
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePostgresqlDbUserCommentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// pg_hba.conf lines
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct AddPostgresqlHbaConfRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    /// Lines appended to the file
    pub body: Vec<PostgresqlHbaConf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddPostgresqlHbaConfResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeletePostgresqlHbaConfRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    /// Lines removed, matched on type/database/user/address
    pub body: Vec<PostgresqlHbaConf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePostgresqlHbaConfResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Extensions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListPostgresqlExtensionRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub database_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionForList {
    pub name: String,
    pub database_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Library that must be in `shared_preload_libraries` first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_preload_libraries: Option<String>,
    pub created: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPostgresqlExtensionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<ExtensionForList>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRequest {
    pub database_name: String,
    pub extension_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreatePostgresqlExtensionRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: ExtensionRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePostgresqlExtensionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<bool>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeletePostgresqlExtensionRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: ExtensionRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePostgresqlExtensionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip)]
    pub http_status_code: u16,
}

describe!(
    CreatePostgresqlDatabaseRequest,
    PostgresqlDatabaseForCreation,
    CreatePostgresqlDatabaseResponse,
    ListPostgresqlDatabasesRequest,
    PostgresqlListDatabase,
    ListPostgresqlDatabasesResponse,
    CreatePostgresqlDbUserRequest,
    PostgresqlUserForCreation,
    CreatePostgresqlDbUserResponse,
    ListPostgresqlDbUserPaginatedRequest,
    PostgresqlUserAttributes,
    PostgresqlUserForList,
    ListPostgresqlDbUserPaginatedResponse,
    PostgresqlHbaConf,
    ListPostgresqlHbaInfoRequest,
    ListPostgresqlHbaInfoResponse,
    ModifyPostgresqlHbaConfRequest,
    ModifyPostgresqlHbaConfResponse,
    DeletePostgresqlDatabaseRequest,
    DeletePostgresqlDatabaseResponse,
    UpdatePostgresqlDatabaseRequest,
    PostgresqlDatabaseForUpdate,
    UpdatePostgresqlDatabaseResponse,
    DeletePostgresqlDbUserRequest,
    DeletePostgresqlDbUserResponse,
    SetPostgresqlDbUserPwdRequest,
    PostgresqlDbUserPwd,
    SetPostgresqlDbUserPwdResponse,
    UpdatePostgresqlDbUserCommentRequest,
    PostgresqlUserComment,
    UpdatePostgresqlDbUserCommentResponse,
    AddPostgresqlHbaConfRequest,
    AddPostgresqlHbaConfResponse,
    DeletePostgresqlHbaConfRequest,
    DeletePostgresqlHbaConfResponse,
    ListPostgresqlExtensionRequest,
    ExtensionForList,
    ListPostgresqlExtensionResponse,
    ExtensionRequest,
    CreatePostgresqlExtensionRequest,
    CreatePostgresqlExtensionResponse,
    DeletePostgresqlExtensionRequest,
    DeletePostgresqlExtensionResponse,
);

api_response!(
    CreatePostgresqlDatabaseResponse,
    ListPostgresqlDatabasesResponse,
    CreatePostgresqlDbUserResponse,
    ListPostgresqlDbUserPaginatedResponse,
    ListPostgresqlHbaInfoResponse,
    ModifyPostgresqlHbaConfResponse,
    DeletePostgresqlDatabaseResponse,
    UpdatePostgresqlDatabaseResponse,
    DeletePostgresqlDbUserResponse,
    SetPostgresqlDbUserPwdResponse,
    UpdatePostgresqlDbUserCommentResponse,
    AddPostgresqlHbaConfResponse,
    DeletePostgresqlHbaConfResponse,
    ListPostgresqlExtensionResponse,
    CreatePostgresqlExtensionResponse,
    DeletePostgresqlExtensionResponse,
);
