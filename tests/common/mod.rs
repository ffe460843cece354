// Common test utilities and helpers for the custom resource tests
// Shared mock servers and event builders used across the test suites

#![allow(dead_code)]

pub mod builders;

use cfn_datadog::{Config, Router};
use serde_json::Value;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";
pub const APP_KEY: &str = "test-app-key";

/// A Datadog API double plus a CloudFormation callback endpoint.
pub struct TestHarness {
    pub datadog: MockServer,
    pub callback: MockServer,
    pub router: Router,
}

impl TestHarness {
    pub async fn start() -> Self {
        let datadog = MockServer::start().await;
        let callback = MockServer::start().await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&callback)
            .await;

        let mut config = Config::new(API_KEY.to_string(), APP_KEY.to_string(), None);
        config.api_url = datadog.uri();
        let router = Router::new(&config).expect("router");

        Self {
            datadog,
            callback,
            router,
        }
    }

    pub fn response_url(&self) -> String {
        format!("{}/cloudformation-response", self.callback.uri())
    }

    /// All callback bodies delivered so far.
    pub async fn responses(&self) -> Vec<Value> {
        self.callback
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).expect("callback body is JSON"))
            .collect()
    }

    /// The single callback body, failing if there were zero or several.
    pub async fn only_response(&self) -> Value {
        let mut responses = self.responses().await;
        assert_eq!(responses.len(), 1, "expected exactly one callback");
        responses.remove(0)
    }

    pub async fn datadog_calls(&self) -> usize {
        self.datadog
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
