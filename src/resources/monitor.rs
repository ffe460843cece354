use serde_json::{Map, Value};
use std::sync::Arc;

use super::{CustomResource, FAILURE_SENTINEL, never_created};
use crate::datadog::DatadogClient;
use crate::error::Result;
use crate::formatter;
use crate::schema::Validated;
use crate::schema::monitor::MONITOR;

// datadog API reference
// https://docs.datadoghq.com/api/latest/monitors/
pub struct MonitorResource {
    client: Arc<DatadogClient>,
}

impl MonitorResource {
    pub fn new(client: Arc<DatadogClient>) -> Self {
        Self { client }
    }
}

impl CustomResource for MonitorResource {
    fn name(&self) -> &'static str {
        "monitor"
    }

    fn validate(&self, properties: &Map<String, Value>) -> Validated {
        MONITOR.validate(properties)
    }

    async fn create(&self, properties: Map<String, Value>) -> Result<String> {
        let data = Value::Object(formatter::format_map(&properties));

        log::info!("creating Datadog monitor...");
        let monitor = self.client.create_monitor(&data).await?;

        Ok(monitor.id.to_string())
    }

    async fn update(&self, monitor_id: &str, properties: Map<String, Value>) -> Result<String> {
        if never_created(monitor_id) {
            log::info!("monitor was never created, skipping update");
            return Ok(FAILURE_SENTINEL.to_string());
        }

        let data = Value::Object(formatter::format_map(&properties));

        log::info!("updating Datadog monitor id [{}]...", monitor_id);
        let monitor = self.client.update_monitor(monitor_id, &data).await?;

        Ok(monitor.id.to_string())
    }

    async fn delete(&self, monitor_id: &str) -> Result<String> {
        // nothing to delete if the monitor couldn't be created in the first place
        if never_created(monitor_id) {
            log::info!("monitor was never created, skipping delete");
            return Ok(FAILURE_SENTINEL.to_string());
        }

        log::info!("deleting Datadog monitor id [{}]...", monitor_id);
        let deleted = self.client.delete_monitor(monitor_id).await?;

        Ok(deleted.deleted_monitor_id.to_string())
    }
}
