//! CloudFormation custom resource protocol: the request event, the response
//! callback, and the lifecycle adapter tying them to a [`CustomResource`].
//!
//! [`CustomResource`]: crate::resources::CustomResource

pub mod adapter;
pub mod event;
pub mod reporter;

pub use adapter::handle;
pub use event::{CloudFormationEvent, RequestType, ResponsePayload, Status};
pub use reporter::Reporter;
