use serde_json::{Map, Value};

use super::event::{CloudFormationEvent, RequestType, SERVICE_TOKEN, Status};
use super::reporter::Reporter;
use crate::error::{DatadogError, Result};
use crate::resources::{CustomResource, FAILURE_SENTINEL};
use crate::schema::ValidationError;

/// Run one CloudFormation lifecycle request against `resource`.
///
/// Exactly one response reaches CloudFormation per call:
/// - invalid properties: FAILED with the validation message, returns `Ok`
/// - lifecycle call succeeded: SUCCESS with the Datadog id
/// - lifecycle call failed: FAILED with the error reason, then the error is
///   returned so the Lambda invocation is recorded as failed too
pub async fn handle<R: CustomResource>(
    resource: &R,
    reporter: &Reporter,
    mut event: CloudFormationEvent,
) -> Result<()> {
    log::debug!(
        "{}",
        serde_json::to_string(&event).unwrap_or_else(|_| format!("{:?}", event))
    );
    log::info!(
        "{} request for {} [{}]",
        event.request_type,
        resource.name(),
        event.logical_resource_id
    );

    event.resource_properties.remove(SERVICE_TOKEN);

    let properties = match resource.validate(&event.resource_properties) {
        Ok(value) => value,
        Err(error) => {
            log::warn!("failed validation: {}", error);
            return reporter
                .respond(&event, Status::Failed, FAILURE_SENTINEL, Some(error.to_string()))
                .await;
        }
    };

    match apply(resource, &event, properties).await {
        Ok(id) => reporter.respond(&event, Status::Success, &id, None).await,
        Err(error) => {
            log::error!(
                "failed to {} Datadog {}: {}",
                event.request_type.to_lowercase(),
                resource.name(),
                error
            );

            if let Err(report_error) = reporter
                .respond(&event, Status::Failed, FAILURE_SENTINEL, Some(error.reason()))
                .await
            {
                log::error!("{}", report_error);
            }

            Err(error)
        }
    }
}

async fn apply<R: CustomResource>(
    resource: &R,
    event: &CloudFormationEvent,
    properties: Map<String, Value>,
) -> Result<String> {
    match event.kind()? {
        RequestType::Create => resource.create(properties).await,
        RequestType::Update => resource.update(remote_id(event)?, properties).await,
        RequestType::Delete => resource.delete(remote_id(event)?).await,
    }
}

fn remote_id(event: &CloudFormationEvent) -> Result<&str> {
    event.remote_id().ok_or_else(|| {
        DatadogError::Validation(ValidationError {
            path: "PhysicalResourceId".to_string(),
            message: format!("is required for {} requests", event.request_type),
        })
    })
}
