pub mod monitor;
pub mod timeboard;

pub use monitor::MonitorResource;
pub use timeboard::TimeboardResource;

use serde_json::{Map, Value};
use std::future::Future;

use crate::error::Result;
use crate::schema::Validated;

/// Identifier reported when a resource was never created.
pub const FAILURE_SENTINEL: &str = "Failure";

/// What a Datadog-backed custom resource must provide to the lifecycle
/// adapter: validation plus the three lifecycle calls.
///
/// `update` and `delete` receive the Datadog id, already taken out of the
/// physical resource id. It is [`FAILURE_SENTINEL`] when creation failed.
pub trait CustomResource {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    fn validate(&self, properties: &Map<String, Value>) -> Validated;

    /// Create the remote resource and return its id.
    fn create(&self, properties: Map<String, Value>) -> impl Future<Output = Result<String>> + Send;

    fn update(
        &self,
        remote_id: &str,
        properties: Map<String, Value>,
    ) -> impl Future<Output = Result<String>> + Send;

    fn delete(&self, remote_id: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Whether `remote_id` marks a resource whose creation failed.
///
/// A physical id whose prefix did not match the resource name reaches the
/// resource whole, so a `-Failure` suffix counts too. Datadog ids are
/// numeric or lowercase, so no real id ends that way.
pub fn never_created(remote_id: &str) -> bool {
    remote_id == FAILURE_SENTINEL
        || remote_id
            .strip_suffix(FAILURE_SENTINEL)
            .is_some_and(|prefix| prefix.ends_with('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_created() {
        assert!(never_created("Failure"));
        assert!(never_created("DatadogMonitor-Failure"));
        assert!(!never_created("42"));
        assert!(!never_created("qc9-tuk-9kv"));
        assert!(!never_created("NoFailure"));
    }
}
