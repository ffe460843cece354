use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DatadogError, Result};

/// Property injected by CloudFormation that is not part of the resource.
pub const SERVICE_TOKEN: &str = "ServiceToken";

/// Custom resource request sent by CloudFormation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudFormationEvent {
    pub request_type: String,
    pub resource_type: String,
    #[serde(default)]
    pub resource_properties: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,
    pub request_id: String,
    pub logical_resource_id: String,
    pub stack_id: String,
    #[serde(rename = "ResponseURL")]
    pub response_url: String,
}

impl CloudFormationEvent {
    /// Resource type without the `Custom::` prefix,
    /// e.g. `Custom::DatadogTimeboard` -> `DatadogTimeboard`.
    pub fn resource_name(&self) -> &str {
        self.resource_type
            .strip_prefix("Custom::")
            .unwrap_or(&self.resource_type)
    }

    /// Datadog id carried by the physical resource id.
    ///
    /// Physical ids are built as `<resource name>-<id>`. The resource name
    /// may itself contain `-` (`Custom::Datadog-Monitor`) and dashboard ids
    /// always do, so the known prefix is stripped rather than split on. An
    /// id without that prefix is passed through as is.
    pub fn remote_id(&self) -> Option<&str> {
        let physical = self.physical_resource_id.as_deref()?;
        let prefix = format!("{}-", self.resource_name());
        Some(physical.strip_prefix(prefix.as_str()).unwrap_or(physical))
    }

    pub fn kind(&self) -> Result<RequestType> {
        match self.request_type.as_str() {
            "Create" => Ok(RequestType::Create),
            "Update" => Ok(RequestType::Update),
            "Delete" => Ok(RequestType::Delete),
            other => Err(DatadogError::UnsupportedRequestType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseData {
    pub id: String,
}

/// Body PUT to the event's `ResponseURL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponsePayload {
    pub status: Status,
    pub request_id: String,
    pub logical_resource_id: String,
    pub stack_id: String,
    pub physical_resource_id: String,
    pub data: ResponseData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ResponsePayload {
    pub fn new(event: &CloudFormationEvent, status: Status, id: &str, reason: Option<String>) -> Self {
        Self {
            status,
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            stack_id: event.stack_id.clone(),
            physical_resource_id: format!("{}-{}", event.resource_name(), id),
            data: ResponseData { id: id.to_string() },
            reason,
        }
    }
}
