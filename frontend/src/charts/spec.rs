use crate::charts::tooltip::TooltipKind;
use serde_json::{json, Map, Value};
use shared::ScatterPointDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
    Scatter,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Scatter => "scatter",
        }
    }
}

/// Dataset payload: numeric values aligned to the chart labels, or free
/// (x, y) points for scatter charts.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetValues {
    Numbers(Vec<f64>),
    Points(Vec<ScatterPointDto>),
}

impl DatasetValues {
    pub fn is_empty(&self) -> bool {
        match self {
            DatasetValues::Numbers(values) => values.is_empty(),
            DatasetValues::Points(points) => points.is_empty(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            DatasetValues::Numbers(values) => json!(values),
            DatasetValues::Points(points) => Value::Array(
                points
                    .iter()
                    .map(|p| json!({ "x": p.x, "y": p.y }))
                    .collect(),
            ),
        }
    }
}

/// A fill or stroke: one color for the whole dataset, or one per element
/// (heatmap and waterfall bars).
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(String),
    PerPoint(Vec<String>),
}

impl Paint {
    pub fn solid(color: &str) -> Self {
        Paint::Solid(color.to_string())
    }

    pub fn to_json(&self) -> Value {
        match self {
            Paint::Solid(color) => json!(color),
            Paint::PerPoint(colors) => json!(colors),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSpec {
    pub label: String,
    pub values: DatasetValues,
    pub background: Paint,
    pub border: Option<Paint>,
    pub border_width: Option<f64>,
    /// Chart.js y-axis id ("y", "y1", "y2") for multi-axis charts.
    pub axis: Option<&'static str>,
    /// Renders this dataset as a line on an otherwise bar chart.
    pub overlay_line: bool,
    pub fill: bool,
    pub tension: Option<f64>,
    pub point_radius: Option<f64>,
}

impl DatasetSpec {
    pub fn new(label: &str, values: DatasetValues) -> Self {
        Self {
            label: label.to_string(),
            values,
            background: Paint::solid("rgba(59, 130, 246, 0.6)"),
            border: None,
            border_width: None,
            axis: None,
            overlay_line: false,
            fill: false,
            tension: None,
            point_radius: None,
        }
    }

    fn to_json(&self) -> Value {
        let mut dataset = Map::new();
        dataset.insert("label".to_string(), json!(self.label));
        dataset.insert("data".to_string(), self.values.to_json());
        dataset.insert("backgroundColor".to_string(), self.background.to_json());
        if let Some(border) = &self.border {
            dataset.insert("borderColor".to_string(), border.to_json());
        }
        if let Some(width) = self.border_width {
            dataset.insert("borderWidth".to_string(), json!(width));
        }
        if let Some(axis) = self.axis {
            dataset.insert("yAxisID".to_string(), json!(axis));
        }
        if self.overlay_line {
            dataset.insert("type".to_string(), json!("line"));
        }
        if self.fill {
            dataset.insert("fill".to_string(), json!(true));
        }
        if let Some(tension) = self.tension {
            dataset.insert("tension".to_string(), json!(tension));
        }
        if let Some(radius) = self.point_radius {
            dataset.insert("pointRadius".to_string(), json!(radius));
        }
        Value::Object(dataset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub id: &'static str,
    pub title: String,
    pub position: AxisPosition,
    pub display: bool,
    pub begin_at_zero: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Tick step size, when the default spacing is too dense or too sparse.
    pub step: Option<f64>,
    pub draw_grid: bool,
}

impl AxisSpec {
    pub fn left(id: &'static str, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            position: AxisPosition::Left,
            display: true,
            begin_at_zero: false,
            min: None,
            max: None,
            step: None,
            draw_grid: true,
        }
    }

    pub fn right(id: &'static str, title: &str) -> Self {
        Self {
            position: AxisPosition::Right,
            // Overlapping gridlines from a second axis are unreadable.
            draw_grid: false,
            ..Self::left(id, title)
        }
    }

    fn to_json(&self) -> Value {
        let mut axis = Map::new();
        axis.insert("type".to_string(), json!("linear"));
        axis.insert("display".to_string(), json!(self.display));
        axis.insert(
            "position".to_string(),
            match self.position {
                AxisPosition::Left => json!("left"),
                AxisPosition::Right => json!("right"),
            },
        );
        if self.begin_at_zero {
            axis.insert("beginAtZero".to_string(), json!(true));
        }
        if let Some(min) = self.min {
            axis.insert("min".to_string(), json!(min));
        }
        if let Some(max) = self.max {
            axis.insert("max".to_string(), json!(max));
        }
        if let Some(step) = self.step {
            axis.insert("ticks".to_string(), json!({ "stepSize": step }));
        }
        axis.insert(
            "title".to_string(),
            json!({ "display": !self.title.is_empty(), "text": self.title }),
        );
        axis.insert(
            "grid".to_string(),
            json!({ "drawOnChartArea": self.draw_grid }),
        );
        Value::Object(axis)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legend {
    Hidden,
    Top,
    Bottom,
    Right,
}

/// Everything needed to instantiate one chart: type, initial data, axes and
/// display options. Built by `charts::builders`, consumed by the render
/// engine; contains no handles to anything live.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetSpec>,
    pub axes: Vec<AxisSpec>,
    pub x_title: Option<String>,
    pub horizontal: bool,
    pub legend: Legend,
    pub tooltip: TooltipKind,
}

impl ChartSpec {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            labels: Vec::new(),
            datasets: Vec::new(),
            axes: Vec::new(),
            x_title: None,
            horizontal: false,
            legend: Legend::Top,
            tooltip: TooltipKind::Default,
        }
    }

    /// True when there is nothing to draw: no datasets, or every dataset
    /// empty. Render sessions skip creation for empty specs.
    pub fn is_empty(&self) -> bool {
        self.datasets.iter().all(|dataset| dataset.values.is_empty())
    }

    /// The full Chart.js configuration object, minus tooltip callbacks which
    /// the engine wires in as closures.
    pub fn to_config(&self) -> Value {
        let mut options = Map::new();
        options.insert("responsive".to_string(), json!(true));
        options.insert("maintainAspectRatio".to_string(), json!(false));
        if self.horizontal {
            options.insert("indexAxis".to_string(), json!("y"));
        }

        let legend = match self.legend {
            Legend::Hidden => json!({ "display": false }),
            Legend::Top => json!({ "display": true, "position": "top" }),
            Legend::Bottom => json!({ "display": true, "position": "bottom" }),
            Legend::Right => json!({ "display": true, "position": "right" }),
        };
        options.insert("plugins".to_string(), json!({ "legend": legend }));

        let mut scales = Map::new();
        for axis in &self.axes {
            scales.insert(axis.id.to_string(), axis.to_json());
        }
        if let Some(title) = &self.x_title {
            scales.insert(
                "x".to_string(),
                json!({ "title": { "display": true, "text": title } }),
            );
        }
        if !scales.is_empty() {
            options.insert("scales".to_string(), Value::Object(scales));
        }

        json!({
            "type": self.kind.as_str(),
            "data": {
                "labels": self.labels,
                "datasets": self.datasets.iter().map(|d| d.to_json()).collect::<Vec<_>>(),
            },
            "options": Value::Object(options),
        })
    }
}

/// Replacement payload for an in-place refresh: new labels plus one value
/// set per existing dataset, in dataset order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<DatasetValues>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|values| values.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bar_spec() -> ChartSpec {
        ChartSpec {
            labels: vec!["Jan".to_string(), "Feb".to_string()],
            datasets: vec![DatasetSpec::new(
                "Sales",
                DatasetValues::Numbers(vec![10.0, 20.0]),
            )],
            ..ChartSpec::new(ChartKind::Bar)
        }
    }

    #[test]
    fn test_empty_when_no_datasets() {
        assert!(ChartSpec::new(ChartKind::Line).is_empty());
    }

    #[test]
    fn test_empty_when_all_datasets_empty() {
        let spec = ChartSpec {
            datasets: vec![
                DatasetSpec::new("a", DatasetValues::Numbers(vec![])),
                DatasetSpec::new("b", DatasetValues::Points(vec![])),
            ],
            ..ChartSpec::new(ChartKind::Scatter)
        };
        assert!(spec.is_empty());
        assert!(!bar_spec().is_empty());
    }

    #[test]
    fn test_config_shape() {
        let config = bar_spec().to_config();
        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"][1], "Feb");
        assert_eq!(config["data"]["datasets"][0]["label"], "Sales");
        assert_eq!(config["data"]["datasets"][0]["data"][0], 10.0);
        assert_eq!(config["options"]["responsive"], true);
        // Optional fields stay out of the config entirely.
        assert!(config["data"]["datasets"][0].get("yAxisID").is_none());
        assert!(config["options"].get("indexAxis").is_none());
    }

    #[test]
    fn test_horizontal_and_axes() {
        let spec = ChartSpec {
            horizontal: true,
            axes: vec![AxisSpec::right("y1", "Confidence (%)")],
            legend: Legend::Hidden,
            ..bar_spec()
        };
        let config = spec.to_config();
        assert_eq!(config["options"]["indexAxis"], "y");
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(config["options"]["scales"]["y1"]["position"], "right");
        assert_eq!(
            config["options"]["scales"]["y1"]["grid"]["drawOnChartArea"],
            false
        );
    }

    #[test]
    fn test_scatter_points_serialize_as_xy_pairs() {
        let values = DatasetValues::Points(vec![ScatterPointDto { x: 21.5, y: 3.0 }]);
        assert_eq!(values.to_json(), serde_json::json!([{ "x": 21.5, "y": 3.0 }]));
    }
}
