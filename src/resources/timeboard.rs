use serde_json::{Map, Value};
use std::sync::Arc;

use super::{CustomResource, FAILURE_SENTINEL, never_created};
use crate::datadog::DatadogClient;
use crate::error::Result;
use crate::formatter;
use crate::schema::Validated;
use crate::schema::timeboard::TIMEBOARD;

// datadog API reference
// https://docs.datadoghq.com/api/latest/dashboards/
pub struct TimeboardResource {
    client: Arc<DatadogClient>,
}

impl TimeboardResource {
    pub fn new(client: Arc<DatadogClient>) -> Self {
        Self { client }
    }
}

impl CustomResource for TimeboardResource {
    fn name(&self) -> &'static str {
        "timeboard"
    }

    fn validate(&self, properties: &Map<String, Value>) -> Validated {
        TIMEBOARD.validate(properties)
    }

    async fn create(&self, properties: Map<String, Value>) -> Result<String> {
        let data = Value::Object(formatter::format_map(&properties));

        log::info!("creating Datadog timeboard...");
        let dashboard = self.client.create_dashboard(&data).await?;

        Ok(dashboard.id.to_string())
    }

    async fn update(&self, dashboard_id: &str, properties: Map<String, Value>) -> Result<String> {
        if never_created(dashboard_id) {
            log::info!("timeboard was never created, skipping update");
            return Ok(FAILURE_SENTINEL.to_string());
        }

        let data = Value::Object(formatter::format_map(&properties));

        log::info!("updating Datadog timeboard id [{}]...", dashboard_id);
        let dashboard = self.client.update_dashboard(dashboard_id, &data).await?;

        Ok(dashboard.id.to_string())
    }

    async fn delete(&self, dashboard_id: &str) -> Result<String> {
        // don't bother deleting if we couldn't create the dashboard in the first place
        if never_created(dashboard_id) {
            log::info!("timeboard was never created, skipping delete");
            return Ok(FAILURE_SENTINEL.to_string());
        }

        log::info!("deleting Datadog timeboard id [{}]...", dashboard_id);
        let deleted = self.client.delete_dashboard(dashboard_id).await?;

        Ok(deleted.deleted_dashboard_id.to_string())
    }
}
