use std::sync::LazyLock;

use super::{Rule, Schema};

// based on the Datadog API schema
// see https://docs.datadoghq.com/api/latest/monitors/#create-a-monitor

pub const MONITOR_TYPES: [&str; 6] = [
    "composite",
    "event alert",
    "log alert",
    "process alert",
    "query alert",
    "service check",
];

fn thresholds() -> Schema {
    Schema::new()
        .field("Critical", Rule::number())
        .field("CriticalRecovery", Rule::number())
        .field("Warning", Rule::number())
        .field("WarningRecovery", Rule::number())
        .field("Ok", Rule::number())
        .field("Unknown", Rule::number())
}

fn options() -> Schema {
    Schema::new()
        .field("NotifyNoData", Rule::boolean())
        .field("NoDataTimeframe", Rule::number())
        .field("NewHostDelay", Rule::number())
        .field("EvaluationDelay", Rule::number())
        .field("RenotifyInterval", Rule::number())
        .field("TimeoutH", Rule::number())
        .field("NotifyAudit", Rule::boolean())
        .field("IncludeTags", Rule::boolean())
        .field("RequireFullWindow", Rule::boolean())
        .field("Locked", Rule::boolean())
        .field("EscalationMessage", Rule::string())
        .field("Thresholds", Rule::object(thresholds()))
}

pub static MONITOR: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("Type", Rule::string().required().valid(MONITOR_TYPES))
        .field("Query", Rule::string().required())
        .field("Name", Rule::string().required())
        .field("Message", Rule::string().required())
        .field("Tags", Rule::array(Rule::string()))
        .field("Priority", Rule::number())
        .field("Options", Rule::object(options()))
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_valid_monitor() {
        let value = MONITOR
            .validate(&props(json!({
                "Type": "query alert",
                "Query": "avg(last_5m):avg:system.cpu.user{*} > 90",
                "Name": "cpu",
                "Message": "high cpu",
                "Tags": ["team:core"]
            })))
            .unwrap();

        assert_eq!(value["Type"], "query alert");
        assert_eq!(value["Tags"], json!(["team:core"]));
    }

    #[test]
    fn test_missing_query() {
        let error = MONITOR
            .validate(&props(json!({
                "Type": "query alert",
                "Name": "cpu",
                "Message": "high cpu"
            })))
            .unwrap_err();

        assert_eq!(error.path, "Query");
        assert!(error.to_string().contains("Query"));
    }

    #[test]
    fn test_invalid_type() {
        let error = MONITOR
            .validate(&props(json!({
                "Type": "metric alert",
                "Query": "q",
                "Name": "cpu",
                "Message": "m"
            })))
            .unwrap_err();

        assert_eq!(error.path, "Type");
        assert!(error.message.contains("query alert"));
    }

    #[test]
    fn test_options_are_coerced() {
        let value = MONITOR
            .validate(&props(json!({
                "Type": "query alert",
                "Query": "q",
                "Name": "cpu",
                "Message": "m",
                "Priority": "2",
                "Options": {
                    "NotifyNoData": "true",
                    "NoDataTimeframe": "10",
                    "Thresholds": {"Critical": "90", "Warning": "80.5"}
                }
            })))
            .unwrap();

        assert_eq!(value["Priority"], json!(2));
        assert_eq!(value["Options"]["NotifyNoData"], json!(true));
        assert_eq!(value["Options"]["NoDataTimeframe"], json!(10));
        assert_eq!(value["Options"]["Thresholds"]["Critical"], json!(90));
        assert_eq!(value["Options"]["Thresholds"]["Warning"], json!(80.5));
    }
}
