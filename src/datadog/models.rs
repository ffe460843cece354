use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by Datadog.
///
/// Dashboards use string ids (`abc-def-ghi`) while monitors use integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteId {
    Text(String),
    Numeric(i64),
}

impl fmt::Display for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteId::Text(id) => f.write_str(id),
            RemoteId::Numeric(id) => write!(f, "{}", id),
        }
    }
}

// ============= Monitor Models =============

#[derive(Debug, Serialize, Deserialize)]
pub struct MonitorResponse {
    pub id: RemoteId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedMonitor {
    pub deleted_monitor_id: RemoteId,
}

// ============= Dashboard Models =============

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub id: RemoteId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedDashboard {
    pub deleted_dashboard_id: RemoteId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_monitor_numeric_id() {
        let monitor: MonitorResponse = serde_json::from_value(json!({
            "id": 91879,
            "name": "cpu",
            "type": "query alert",
            "query": "avg(last_5m):avg:system.cpu.user{*} > 90"
        }))
        .unwrap();

        assert_eq!(monitor.id, RemoteId::Numeric(91879));
        assert_eq!(monitor.id.to_string(), "91879");
    }

    #[test]
    fn test_dashboard_text_id() {
        let dashboard: DashboardResponse = serde_json::from_value(json!({
            "id": "qc9-tuk-9kv",
            "title": "Service overview",
            "url": "/dashboard/qc9-tuk-9kv/service-overview",
            "layout_type": "ordered",
            "widgets": []
        }))
        .unwrap();

        assert_eq!(dashboard.id, RemoteId::Text("qc9-tuk-9kv".to_string()));
        assert_eq!(dashboard.id.to_string(), "qc9-tuk-9kv");
    }

    #[test]
    fn test_deleted_responses() {
        let deleted: DeletedMonitor =
            serde_json::from_value(json!({"deleted_monitor_id": 42})).unwrap();
        assert_eq!(deleted.deleted_monitor_id.to_string(), "42");

        let deleted: DeletedDashboard =
            serde_json::from_value(json!({"deleted_dashboard_id": "qc9-tuk-9kv"})).unwrap();
        assert_eq!(deleted.deleted_dashboard_id.to_string(), "qc9-tuk-9kv");
    }

    #[test]
    fn test_missing_id_is_an_error() {
        let result = serde_json::from_value::<MonitorResponse>(json!({"errors": ["nope"]}));
        assert!(result.is_err());
    }
}
