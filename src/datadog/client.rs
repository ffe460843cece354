use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::*;
use crate::config::Config;
use crate::error::{DatadogError, Result};

pub struct DatadogClient {
    client: Client,
    api_key: String,
    app_key: String,
    base_url: String,
}

impl DatadogClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(DatadogError::NetworkError)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            app_key: config.app_key.clone(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue a single authenticated request and decode the JSON response.
    ///
    /// Credentials travel as the `api_key` / `application_key` query
    /// parameters. The raw response body is logged before decoding.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.client.request(method.clone(), &url).query(&[
            ("api_key", self.api_key.as_str()),
            ("application_key", self.app_key.as_str()),
        ]);

        if let Some(data) = body {
            log::info!("{} {} request body: {}", method, endpoint, data);
            request = request.json(data);
        }

        let response = request.send().await.map_err(redact)?;
        let raw = self.handle_response(response).await?;
        log::info!("{} {} response: {}", method, endpoint, raw);

        Ok(serde_json::from_value(raw)?)
    }

    async fn handle_response(&self, response: Response) -> Result<Value> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await.map_err(redact)?;
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            Ok(serde_json::from_str(&text)?)
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log::error!("Datadog API returned HTTP {}: {}", status, body);

            match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(DatadogError::AuthError {
                    status: status.as_u16(),
                    body,
                }),
                _ => Err(DatadogError::ApiError {
                    status: status.as_u16(),
                    body,
                }),
            }
        }
    }

    // ============= Monitors API =============

    pub async fn create_monitor(&self, monitor: &Value) -> Result<MonitorResponse> {
        self.request(Method::POST, "/api/v1/monitor", Some(monitor))
            .await
    }

    pub async fn update_monitor(&self, monitor_id: &str, monitor: &Value) -> Result<MonitorResponse> {
        let endpoint = format!("/api/v1/monitor/{}", monitor_id);
        self.request(Method::PUT, &endpoint, Some(monitor)).await
    }

    pub async fn delete_monitor(&self, monitor_id: &str) -> Result<DeletedMonitor> {
        let endpoint = format!("/api/v1/monitor/{}", monitor_id);
        self.request(Method::DELETE, &endpoint, None).await
    }

    // ============= Dashboard API Methods =============

    pub async fn create_dashboard(&self, dashboard: &Value) -> Result<DashboardResponse> {
        self.request(Method::POST, "/api/v1/dashboard", Some(dashboard))
            .await
    }

    pub async fn update_dashboard(
        &self,
        dashboard_id: &str,
        dashboard: &Value,
    ) -> Result<DashboardResponse> {
        let endpoint = format!("/api/v1/dashboard/{}", dashboard_id);
        self.request(Method::PUT, &endpoint, Some(dashboard)).await
    }

    pub async fn delete_dashboard(&self, dashboard_id: &str) -> Result<DeletedDashboard> {
        let endpoint = format!("/api/v1/dashboard/{}", dashboard_id);
        self.request(Method::DELETE, &endpoint, None).await
    }
}

/// The request URL carries the credentials as query parameters, keep it
/// out of error messages that end up in stack events and logs.
fn redact(error: reqwest::Error) -> DatadogError {
    DatadogError::NetworkError(error.without_url())
}
