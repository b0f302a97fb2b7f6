//! Parameter templates and per-instance parameters

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::common::{DatastoreType, Language};
use crate::{api_response, closed_enum, describe};

closed_enum! {
    pub enum ParameterType: string {
        String = "string",
        Integer = "integer",
        Boolean = "boolean",
        List = "list",
        Float = "float",
    }
}

/// Template summary as returned by list and create calls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub datastore_version_name: String,
    pub datastore_name: String,
    pub created: String,
    pub updated: String,
    /// `false` for the built-in default templates
    pub user_defined: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationParameter {
    pub name: String,
    pub value: String,
    pub restart_required: bool,
    pub readonly: bool,
    /// e.g. `1-65535` or a comma-separated list
    pub value_range: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ParameterType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationRef {
    pub id: String,
    pub name: String,
}

// ============================================================================
// Template CRUD
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListConfigurationsRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListConfigurationsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Vec<ConfigurationSummary>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CreateConfigurationRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    pub body: ConfigurationForCreation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParaGroupDatastore {
    #[serde(rename = "type")]
    pub r#type: DatastoreType,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ConfigurationForCreation {
    #[builder(setter(into))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    pub datastore: ParaGroupDatastore,
    /// Parameter overrides; everything else keeps the engine default
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub values: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateConfigurationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ConfigurationSummary>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ShowConfigurationRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub config_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowConfigurationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore_version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_parameters: Option<Vec<ConfigurationParameter>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct UpdateConfigurationRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub config_id: String,
    pub body: ConfigurationForUpdate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationForUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateConfigurationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ConfigurationRef>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct DeleteConfigurationRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub config_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteConfigurationResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Applying templates
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ApplyConfigurationAsyncRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub config_id: String,
    pub body: ApplyConfigurationRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyConfigurationRequest {
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplyConfigurationAsyncResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ShowInstanceConfigurationRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowInstanceConfigurationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore_version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_parameters: Option<Vec<ConfigurationParameter>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct UpdateInstanceConfigurationRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: UpdateInstanceConfigurationRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInstanceConfigurationRequestBody {
    pub values: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateInstanceConfigurationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// The new values only take effect after a restart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_required: Option<bool>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Copying and synchronous apply
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct CopyConfigurationRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub config_id: String,
    pub body: ConfigurationCopyRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationCopyRequestBody {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CopyConfigurationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

/// Applies a template and reports the outcome per instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct EnableConfigurationRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub config_id: String,
    pub body: ApplyConfigurationRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplyConfigurationResult {
    pub instance_id: String,
    pub instance_name: String,
    /// The instance needs a restart before the values take effect
    pub restart_required: bool,
    pub success: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnableConfigurationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_results: Option<Vec<ApplyConfigurationResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip)]
    pub http_status_code: u16,
}

describe!(
    ConfigurationSummary,
    ConfigurationParameter,
    ConfigurationRef,
    ListConfigurationsRequest,
    ListConfigurationsResponse,
    CreateConfigurationRequest,
    ParaGroupDatastore,
    ConfigurationForCreation,
    CreateConfigurationResponse,
    ShowConfigurationRequest,
    ShowConfigurationResponse,
    UpdateConfigurationRequest,
    ConfigurationForUpdate,
    UpdateConfigurationResponse,
    DeleteConfigurationRequest,
    DeleteConfigurationResponse,
    ApplyConfigurationAsyncRequest,
    ApplyConfigurationRequest,
    ApplyConfigurationAsyncResponse,
    ShowInstanceConfigurationRequest,
    ShowInstanceConfigurationResponse,
    UpdateInstanceConfigurationRequest,
    UpdateInstanceConfigurationRequestBody,
    UpdateInstanceConfigurationResponse,
    CopyConfigurationRequest,
    ConfigurationCopyRequestBody,
    CopyConfigurationResponse,
    EnableConfigurationRequest,
    ApplyConfigurationResult,
    EnableConfigurationResponse,
);

api_response!(
    ListConfigurationsResponse,
    CreateConfigurationResponse,
    ShowConfigurationResponse,
    UpdateConfigurationResponse,
    DeleteConfigurationResponse,
    ApplyConfigurationAsyncResponse,
    ShowInstanceConfigurationResponse,
    UpdateInstanceConfigurationResponse,
    CopyConfigurationResponse,
    EnableConfigurationResponse,
);
