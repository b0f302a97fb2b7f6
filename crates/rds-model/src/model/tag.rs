//! Instance and project tags

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::common::{Language, Tag};
use crate::{api_response, closed_enum, describe};

closed_enum! {
    pub enum TagAction: string {
        Create = "create",
        Delete = "delete",
    }
}

/// Body of the batch tag action, shared by add and delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchTagActionRequestBody {
    pub action: TagAction,
    pub tags: Vec<Tag>,
}

impl BatchTagActionRequestBody {
    #[must_use]
    pub fn create(tags: Vec<Tag>) -> Self {
        Self {
            action: TagAction::Create,
            tags,
        }
    }

    /// Deletes by key; a tag value, when present, must match
    #[must_use]
    pub fn delete(tags: Vec<Tag>) -> Self {
        Self {
            action: TagAction::Delete,
            tags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct BatchTagAddActionRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: BatchTagActionRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchTagAddActionResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct BatchTagDelActionRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
    pub body: BatchTagActionRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchTagDelActionResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListInstanceTagsRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
    #[builder(setter(into))]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListInstanceTagsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ListProjectTagsRequest {
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub x_language: Option<Language>,
}

/// A tag key with every value used across the project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectTag {
    pub key: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListProjectTagsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ProjectTag>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

describe!(
    BatchTagActionRequestBody,
    BatchTagAddActionRequest,
    BatchTagAddActionResponse,
    BatchTagDelActionRequest,
    BatchTagDelActionResponse,
    ListInstanceTagsRequest,
    ListInstanceTagsResponse,
    ListProjectTagsRequest,
    ProjectTag,
    ListProjectTagsResponse,
);

api_response!(
    BatchTagAddActionResponse,
    BatchTagDelActionResponse,
    ListInstanceTagsResponse,
    ListProjectTagsResponse,
);
