use std::sync::Arc;

use crate::config::Config;
use crate::custom_resource::{self, CloudFormationEvent, Reporter, Status};
use crate::datadog::DatadogClient;
use crate::error::{DatadogError, Result};
use crate::resources::{FAILURE_SENTINEL, MonitorResource, TimeboardResource};

/// Which Datadog resource a `ResourceType` maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Monitor,
    Timeboard,
}

impl ResourceKind {
    /// `Custom::DatadogMonitor` -> Monitor, `Custom::DatadogTimeboard` or
    /// `Custom::DatadogDashboard` -> Timeboard.
    pub fn from_resource_name(name: &str) -> Option<Self> {
        if name.ends_with("Monitor") {
            Some(ResourceKind::Monitor)
        } else if name.ends_with("Timeboard") || name.ends_with("Dashboard") {
            Some(ResourceKind::Timeboard)
        } else {
            None
        }
    }
}

/// Entry point for one Lambda invocation.
pub struct Router {
    monitor: MonitorResource,
    timeboard: TimeboardResource,
    reporter: Reporter,
}

impl Router {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Arc::new(DatadogClient::new(config)?);

        Ok(Self {
            monitor: MonitorResource::new(client.clone()),
            timeboard: TimeboardResource::new(client),
            reporter: Reporter::new()?,
        })
    }

    pub async fn handle(&self, event: CloudFormationEvent) -> Result<()> {
        match ResourceKind::from_resource_name(event.resource_name()) {
            Some(ResourceKind::Monitor) => {
                custom_resource::handle(&self.monitor, &self.reporter, event).await
            }
            Some(ResourceKind::Timeboard) => {
                custom_resource::handle(&self.timeboard, &self.reporter, event).await
            }
            None => {
                let error = DatadogError::UnsupportedResourceType(event.resource_type.clone());
                log::error!("{}", error);

                if let Err(report_error) = self
                    .reporter
                    .respond(&event, Status::Failed, FAILURE_SENTINEL, Some(error.reason()))
                    .await
                {
                    log::error!("{}", report_error);
                }

                Err(error)
            }
        }
    }
}
