use std::sync::LazyLock;

use super::{Rule, Schema};

// based on the Datadog API schema
// see https://docs.datadoghq.com/api/latest/dashboards/#create-a-new-dashboard
// and https://docs.datadoghq.com/dashboards/graphing_json/widget_json/

pub const PALETTES: [&str; 16] = [
    "blue",
    "custom_bg",
    "custom_image",
    "custom_text",
    "gray_on_white",
    "green",
    "green_on_white",
    "grey",
    "orange",
    "red",
    "red_on_white",
    "white_on_gray",
    "white_on_green",
    "white_on_red",
    "white_on_yellow",
    "yellow_on_white",
];

const TEXT_ALIGN: [&str; 3] = ["left", "center", "right"];
const AGGREGATORS: [&str; 4] = ["avg", "max", "min", "sum"];

/// `<level> <style>` combinations accepted as marker display types.
pub fn marker_display_types() -> Vec<String> {
    ["error", "warning", "info", "ok"]
        .iter()
        .flat_map(|level| {
            ["dashed", "solid", "bold"]
                .iter()
                .map(move |style| format!("{} {}", level, style))
        })
        .collect()
}

fn template_variable() -> Schema {
    Schema::new()
        .field("Name", Rule::string().required())
        .field("Prefix", Rule::string())
        .field("Default", Rule::string())
}

fn conditional_format() -> Schema {
    Schema::new()
        .field("Comparator", Rule::string().required().valid([">", ">=", "<", "<="]))
        .field("Value", Rule::number())
        .field("Palette", Rule::string().valid(PALETTES))
        .field("CustomFgColor", Rule::string().valid(PALETTES))
        .field("CustomBgColor", Rule::string().valid(PALETTES))
        .field("ImageUrl", Rule::string())
}

fn request() -> Schema {
    Schema::new().field("Q", Rule::string().required())
}

fn axis() -> Schema {
    Schema::new()
        .field("Label", Rule::string())
        .field("Min", Rule::string())
        .field("Max", Rule::string())
        .field("Scale", Rule::string())
        .field("IncludeZero", Rule::boolean())
}

fn marker() -> Schema {
    Schema::new()
        .field("Value", Rule::string())
        .field("DisplayType", Rule::string().required().valid(marker_display_types()))
        .field("Label", Rule::string())
}

fn event() -> Schema {
    Schema::new().field("Q", Rule::string().required())
}

fn strings() -> Rule {
    Rule::array(Rule::string())
}

fn requests(schema: Schema) -> Rule {
    Rule::array(Rule::object(schema)).required()
}

/// Common fields of every widget definition.
fn widget(kind: &str) -> Schema {
    Schema::new()
        .field("Title", Rule::string().required())
        .field("Type", Rule::string().required().valid([kind]))
}

fn alert_graph() -> Schema {
    widget("alert_graph")
        .field("AlertId", Rule::string().required())
        .field("VizType", Rule::string().required().valid(["timeseries", "toplist"]))
}

fn alert_value() -> Schema {
    widget("alert_value")
        .field("AlertId", Rule::string().required())
        .field("Precision", Rule::number())
        .field("Unit", Rule::string())
        .field("TextSize", Rule::string())
        .field("TextAlign", Rule::string().valid(TEXT_ALIGN))
}

fn change() -> Schema {
    widget("change").field(
        "Requests",
        requests(
            request()
                .field("ChangeType", Rule::string().valid(["absolute", "relative"]))
                .field(
                    "CompareTo",
                    Rule::string().valid(["hour_before", "day_before", "week_before", "month_before"]),
                )
                .field("IncreaseGood", Rule::boolean())
                .field("OrderBy", Rule::string().valid(["change", "name", "present", "past"]))
                .field("OrderDir", Rule::string().valid(["asc", "desc"]))
                .field("ShowPresent", Rule::boolean()),
        ),
    )
}

fn check_status() -> Schema {
    widget("check_status")
        .field("Check", Rule::string().required())
        .field("Grouping", Rule::string().required().valid(["check", "cluster"]))
        .field("Group", Rule::string())
        .field("Tags", strings())
        .field("GroupBy", strings())
}

fn distribution() -> Schema {
    widget("distribution").field(
        "Requests",
        requests(request().field(
            "Style",
            Rule::object(Schema::new().field("Palette", Rule::string())),
        )),
    )
}

fn hostmap() -> Schema {
    widget("hostmap")
        .field("NodeType", Rule::string().valid(["host", "container"]))
        .field("NoMetricHosts", Rule::boolean())
        .field("NoGroupHosts", Rule::boolean())
        .field("Group", strings())
        .field("Scope", strings())
        .field(
            "Style",
            Rule::object(
                Schema::new()
                    .field("Palette", Rule::string())
                    .field("PaletteFlip", Rule::boolean())
                    .field("FillMin", Rule::string())
                    .field("FillMax", Rule::string()),
            ),
        )
        .field(
            "Requests",
            Rule::object(
                Schema::new()
                    .field("Fill", Rule::object(request()))
                    .field("Size", Rule::object(request()))
                    .without("Fill", "Size"),
            ),
        )
}

fn note() -> Schema {
    widget("note")
        .field("Content", Rule::string().required())
        .field("BackgroundColor", Rule::string())
        .field("FontSize", Rule::string())
        .field("TextAlign", Rule::string().valid(TEXT_ALIGN))
        .field("ShowTick", Rule::boolean())
        .field("TickPos", Rule::string())
        .field("TickEdge", Rule::string().valid(["bottom", "left", "right", "top"]))
}

fn query_value() -> Schema {
    widget("query_value")
        .field("Autoscale", Rule::boolean())
        .field("CustomUnit", Rule::string())
        .field("Precision", Rule::number())
        .field("TextAlign", Rule::string().valid(TEXT_ALIGN))
        .field(
            "Requests",
            requests(
                request()
                    .field("Aggregator", Rule::string().valid(AGGREGATORS))
                    .field("ConditionalFormats", Rule::array(Rule::object(conditional_format()))),
            ),
        )
}

fn scatterplot() -> Schema {
    widget("scatterplot")
        .field("Yaxis", Rule::object(axis()))
        .field("Xaxis", Rule::object(axis()))
        .field("ColourByGroups", strings())
        .field(
            "Requests",
            requests(request().field("Aggregator", Rule::string().valid(AGGREGATORS))),
        )
}

fn servicemap() -> Schema {
    widget("servicemap")
        .field("Service", Rule::string().required())
        .field("Filters", strings().required())
}

fn timeseries() -> Schema {
    let style = Schema::new()
        .field("Palette", Rule::string())
        .field("LineType", Rule::string().valid(["dashed", "solid", "dotted"]))
        .field("LineWidth", Rule::string().valid(["thin", "normal", "thick"]));
    let metadata = Schema::new()
        .field("Expression", Rule::string())
        .field("AliasName", Rule::string());

    widget("timeseries")
        .field("Yaxis", Rule::object(axis()))
        .field("Markers", Rule::array(Rule::object(marker())))
        .field("Events", Rule::array(Rule::object(event())))
        .field(
            "Requests",
            requests(
                request()
                    .field("Style", Rule::object(style))
                    .field("Metadata", Rule::array(Rule::object(metadata)))
                    .field("DisplayType", Rule::string().valid(["area", "bars", "line"])),
            ),
        )
}

fn toplist() -> Schema {
    widget("toplist").field(
        "Requests",
        requests(
            request().field("ConditionalFormats", Rule::array(Rule::object(conditional_format()))),
        ),
    )
}

/// Widgets allowed inside a group; groups do not nest.
fn leaf_widgets() -> Vec<Schema> {
    vec![
        alert_graph(),
        alert_value(),
        change(),
        check_status(),
        distribution(),
        hostmap(),
        note(),
        query_value(),
        scatterplot(),
        servicemap(),
        timeseries(),
        toplist(),
    ]
}

fn group() -> Schema {
    widget("group")
        .field("Widgets", Rule::array(Rule::one_of("Type", leaf_widgets())))
        .field("LayoutType", Rule::string().valid(["ordered"]).default_value("ordered"))
}

fn widget_definition() -> Rule {
    let mut variants = leaf_widgets();
    variants.push(group());
    Rule::one_of("Type", variants)
}

pub static TIMEBOARD: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("Title", Rule::string().required())
        .field(
            "LayoutType",
            Rule::string().valid(["ordered", "free"]).default_value("ordered"),
        )
        .field("Description", Rule::string().required())
        .field("IsReadOnly", Rule::boolean().default_value(false))
        .field("TemplateVariables", Rule::array(Rule::object(template_variable())))
        .field(
            "Widgets",
            Rule::array(Rule::object(Schema::new().field("Definition", widget_definition())))
                .required(),
        )
});
