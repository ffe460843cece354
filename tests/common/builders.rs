// Test data builders for constructing CloudFormation events

use cfn_datadog::CloudFormationEvent;
use serde_json::{Value, json};

/// Builder for CloudFormation custom resource requests
pub struct EventBuilder {
    request_type: String,
    resource_type: String,
    properties: Value,
    physical_resource_id: Option<String>,
    response_url: String,
}

impl EventBuilder {
    pub fn new(request_type: &str, resource_type: &str, response_url: String) -> Self {
        Self {
            request_type: request_type.to_string(),
            resource_type: resource_type.to_string(),
            properties: json!({}),
            physical_resource_id: None,
            response_url,
        }
    }

    pub fn with_properties(mut self, properties: Value) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_physical_id(mut self, id: &str) -> Self {
        self.physical_resource_id = Some(id.to_string());
        self
    }

    pub fn build(self) -> CloudFormationEvent {
        let mut properties = self.properties;
        properties["ServiceToken"] =
            json!("arn:aws:lambda:us-east-1:123456789012:function:datadog-custom-resource");

        let mut event = json!({
            "RequestType": self.request_type,
            "ServiceToken": "arn:aws:lambda:us-east-1:123456789012:function:datadog-custom-resource",
            "ResponseURL": self.response_url,
            "StackId": "arn:aws:cloudformation:us-east-1:123456789012:stack/app/5b6a0e40",
            "RequestId": "3f5a9c1e-request",
            "LogicalResourceId": "CpuMonitor",
            "ResourceType": self.resource_type,
            "ResourceProperties": properties
        });

        if let Some(id) = self.physical_resource_id {
            event["PhysicalResourceId"] = json!(id);
        }

        serde_json::from_value(event).expect("valid CloudFormation event")
    }
}

/// Minimal valid monitor properties
pub fn monitor_properties() -> Value {
    json!({
        "Type": "query alert",
        "Query": "avg(last_5m):avg:system.cpu.user{*} > 90",
        "Name": "cpu",
        "Message": "high cpu"
    })
}

/// Minimal valid timeboard properties
pub fn timeboard_properties() -> Value {
    json!({
        "Title": "Service overview",
        "Description": "Golden signals",
        "IsReadOnly": "true",
        "Widgets": [{
            "Definition": {
                "Type": "timeseries",
                "Title": "CPU",
                "Requests": [{"Q": "avg:system.cpu.user{*}", "DisplayType": "line"}]
            }
        }]
    })
}
