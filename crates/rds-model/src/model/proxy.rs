//! Read/write splitting proxies

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::common::Language;
use crate::{api_response, closed_enum, describe};

closed_enum! {
    pub enum ProxyStatus: string {
        Active = "ACTIVE",
        Creating = "CREATING",
        Restarting = "RESTARTING",
        Shutdown = "SHUTDOWN",
        Failed = "FAILED",
    }
}

closed_enum! {
    pub enum ProxyMode: string {
        ReadWrite = "readwrite",
        ReadOnly = "readonly",
    }
}

closed_enum! {
    /// How reads are routed across the primary and read replicas
    pub enum ProxyRouteMode: int32 {
        Weighted = 0,
        LoadBalanced = 1,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyInfo {
    pub pool_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProxyStatus>,
    pub address: String,
    pub port: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_threshold_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elb_vip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcpus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    pub node_num: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ProxyMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_mode: Option<ProxyRouteMode>,
}

/// Backend of a proxy and its share of read traffic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyInstance {
    pub id: String,
    pub name: String,
    pub weight: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyQueryInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_instance: Option<ProxyInstance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly_instances: Option<Vec<ProxyInstance>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListProxiesRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListProxiesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_query_info_list: Option<Vec<ProxyQueryInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_proxy_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_proxy_node_num: Option<i32>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Lifecycle
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct StartDatabaseProxyRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub body: Option<StartDatabaseProxyRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartDatabaseProxyRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_mode: Option<ProxyMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_mode: Option<ProxyRouteMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartDatabaseProxyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct StopDatabaseProxyRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub body: Option<StopDatabaseProxyRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopDatabaseProxyRequestBody {
    /// Every proxy of the instance when empty
    pub proxy_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopDatabaseProxyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

// ============================================================================
// Scaling and routing
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ChangeProxyScaleRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub proxy_id: String,
    pub body: ScaleProxyRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleProxyRequestBody {
    pub flavor_ref: String,
    pub node_num: i32,
    /// Apply during the maintenance window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeProxyScaleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct UpdateReadWeightRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    #[builder(setter(into))]
    pub proxy_id: String,
    pub body: ReadWeightRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadonlyInstanceWeight {
    pub id: String,
    /// 0 to 1000
    pub weight: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadWeightRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly_instances: Option<Vec<ReadonlyInstanceWeight>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateReadWeightResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

describe!(
    ProxyInfo,
    ProxyInstance,
    ProxyQueryInfo,
    ListProxiesRequest,
    ListProxiesResponse,
    StartDatabaseProxyRequest,
    StartDatabaseProxyRequestBody,
    StartDatabaseProxyResponse,
    StopDatabaseProxyRequest,
    StopDatabaseProxyRequestBody,
    StopDatabaseProxyResponse,
    ChangeProxyScaleRequest,
    ScaleProxyRequestBody,
    ChangeProxyScaleResponse,
    UpdateReadWeightRequest,
    ReadonlyInstanceWeight,
    ReadWeightRequest,
    UpdateReadWeightResponse,
);

api_response!(
    ListProxiesResponse,
    StartDatabaseProxyResponse,
    StopDatabaseProxyResponse,
    ChangeProxyScaleResponse,
    UpdateReadWeightResponse,
);
