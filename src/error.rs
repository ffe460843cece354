use thiserror::Error;

use crate::schema::ValidationError;

#[derive(Error, Debug)]
pub enum DatadogError {
    #[error("API request failed: HTTP {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Authentication failed: HTTP {status}: {body}")]
    AuthError { status: u16, body: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid properties: {0}")]
    Validation(#[from] ValidationError),

    #[error("unexpected RequestType [{0}]")]
    UnsupportedRequestType(String),

    #[error("unexpected ResourceType [{0}]")]
    UnsupportedResourceType(String),

    #[error("Failed to deliver response to {url}: {reason}")]
    ReportError { url: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DatadogError {
    /// Text sent back to CloudFormation as the `Reason` of a FAILED response.
    ///
    /// Remote failures carry the Datadog error body verbatim so the stack
    /// events show exactly what the API rejected.
    pub fn reason(&self) -> String {
        match self {
            DatadogError::ApiError { body, .. } | DatadogError::AuthError { body, .. } => {
                body.clone()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DatadogError>;
