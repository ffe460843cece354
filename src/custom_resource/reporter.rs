use reqwest::Client;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};

use super::event::{CloudFormationEvent, ResponsePayload, Status};
use crate::error::{DatadogError, Result};

/// Delivers the outcome of a request to CloudFormation.
///
/// The `ResponseURL` is a pre-signed S3 URL, so the body goes out as a plain
/// PUT. S3 rejects the signature unless `Content-Type` is empty.
pub struct Reporter {
    client: Client,
}

impl Reporter {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build().map_err(DatadogError::NetworkError)?;
        Ok(Self { client })
    }

    pub async fn respond(
        &self,
        event: &CloudFormationEvent,
        status: Status,
        id: &str,
        reason: Option<String>,
    ) -> Result<()> {
        let payload = ResponsePayload::new(event, status, id, reason);
        let body = serde_json::to_vec(&payload)?;

        log::info!("responding with [{:?}]: {}", status, event.response_url);
        log::info!("{}", String::from_utf8_lossy(&body));

        let response = self
            .client
            .put(&event.response_url)
            .header(CONTENT_TYPE, "")
            .header(CONTENT_LENGTH, body.len())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                log::error!("failed to deliver response: {}", e);
                DatadogError::ReportError {
                    url: event.response_url.clone(),
                    reason: e.to_string(),
                }
            })?;

        let code = response.status();
        log::info!("S3 status code: {}", code);

        if !code.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(DatadogError::ReportError {
                url: event.response_url.clone(),
                reason: format!("HTTP {}: {}", code, text),
            });
        }

        Ok(())
    }
}
