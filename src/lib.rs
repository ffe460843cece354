// Library interface for the Datadog CloudFormation custom resources
// This exposes modules for testing and for the Lambda binary

pub mod config;
pub mod custom_resource;
pub mod datadog;
pub mod error;
pub mod formatter;
pub mod resources;
pub mod router;
pub mod schema;

// Re-export commonly used types
pub use config::Config;
pub use custom_resource::CloudFormationEvent;
pub use datadog::DatadogClient;
pub use error::{DatadogError, Result};
pub use router::Router;
