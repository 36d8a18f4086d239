//! ECharts option builders.
//!
//! The structs mirror the option objects ECharts accepts, field for field,
//! so `serde_json` output can be handed to `chart.setOption(...)` as is.
//! Percentages of the pie are left to ECharts (`{d}` in the formatter).

use serde::Serialize;

use crate::types::{Comparison, ProcessRecord};

/// Height of every chart container.
pub const CHART_HEIGHT: &str = "400px";

/// Tooltip label of a pie slice: name, value, share.
pub const PIE_TOOLTIP_FORMAT: &str = "{b}: {c} kg CO₂-eq/kg ({d}%)";

/// Tooltip settings.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    /// "item" for pies, "axis" for bars
    pub trigger: String,
    /// Label template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    /// Axis pointer (bars only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
}

/// Axis pointer of an axis-triggered tooltip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisPointer {
    /// Pointer kind ("shadow")
    #[serde(rename = "type")]
    pub kind: String,
}

/// Legend placement and entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Legend {
    /// Distance from the top edge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    /// Horizontal alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// Explicit legend entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
}

/// One pie slice.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieDatum {
    /// Slice value
    pub value: f64,
    /// Slice name
    pub name: String,
}

/// A pie (donut) series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieSeries {
    /// Always "pie"
    #[serde(rename = "type")]
    pub kind: String,
    /// Inner and outer radius
    pub radius: [String; 2],
    /// Slices, in process order
    pub data: Vec<PieDatum>,
}

/// Option object of the GWP contribution pie.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieOption {
    /// Tooltip
    pub tooltip: Tooltip,
    /// Legend
    pub legend: Legend,
    /// Single pie series
    pub series: Vec<PieSeries>,
}

/// Axis settings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    /// "category" or "value"
    #[serde(rename = "type")]
    pub kind: String,
    /// Category labels (category axes only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
}

/// Fixed item color of a series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemStyle {
    /// Hex color
    pub color: String,
}

/// A bar series.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    /// Series name (legend entry)
    pub name: String,
    /// Always "bar"
    #[serde(rename = "type")]
    pub kind: String,
    /// Values aligned to the x-axis categories
    pub data: Vec<f64>,
    /// Series color
    pub item_style: ItemStyle,
}

/// Option object of the Bio-SAC vs Petroleum-SAC comparison.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarOption {
    /// Tooltip
    pub tooltip: Tooltip,
    /// Legend
    pub legend: Legend,
    /// Category axis
    pub x_axis: Axis,
    /// Value axis
    pub y_axis: Axis,
    /// Grouped series
    pub series: Vec<BarSeries>,
}

/// A chart ready to be placed on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    /// DOM id of the container
    pub id: String,
    /// Subheading above the chart
    pub title: String,
    /// CSS height of the container
    pub height: &'static str,
    /// Serialized option object
    pub option_json: String,
}

impl ChartSpec {
    /// Serialize `option` into a chart spec.
    pub fn new<T: Serialize>(id: &str, title: &str, option: &T) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            height: CHART_HEIGHT,
            option_json: serde_json::to_string(option).unwrap_or_else(|_| "{}".into()),
        }
    }
}

/// Build the GWP contribution pie: one slice per process, keyed by name.
pub fn pie_option(processes: &[ProcessRecord]) -> PieOption {
    PieOption {
        tooltip: Tooltip {
            trigger: "item".into(),
            formatter: Some(PIE_TOOLTIP_FORMAT.into()),
            axis_pointer: None,
        },
        legend: Legend {
            top: Some("5%".into()),
            left: Some("center".into()),
            data: None,
        },
        series: vec![PieSeries {
            kind: "pie".into(),
            radius: ["40%".into(), "70%".into()],
            data: processes
                .iter()
                .map(|p| PieDatum {
                    value: p.gwp,
                    name: p.name.clone(),
                })
                .collect(),
        }],
    }
}

/// Build the grouped comparison bar chart, one series per product.
pub fn bar_option(comparison: &Comparison) -> BarOption {
    BarOption {
        tooltip: Tooltip {
            trigger: "axis".into(),
            formatter: None,
            axis_pointer: Some(AxisPointer {
                kind: "shadow".into(),
            }),
        },
        legend: Legend {
            data: Some(comparison.series.iter().map(|s| s.label.clone()).collect()),
            ..Default::default()
        },
        x_axis: Axis {
            kind: "category".into(),
            data: Some(comparison.categories.to_vec()),
        },
        y_axis: Axis {
            kind: "value".into(),
            data: None,
        },
        series: comparison
            .series
            .iter()
            .map(|s| BarSeries {
                name: s.label.clone(),
                kind: "bar".into(),
                data: s.values.to_vec(),
                item_style: ItemStyle {
                    color: s.color.clone(),
                },
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReportData;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn pie_has_one_slice_per_process() {
        let data = ReportData::bio_sac();
        let pie = pie_option(&data.processes);
        assert_eq!(pie.series.len(), 1);
        let values: Vec<f64> = pie.series[0].data.iter().map(|d| d.value).collect();
        assert_eq!(values, vec![0.24, 0.48, 0.30, 0.18]);
        let names: Vec<&str> = pie.series[0].data.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Feedstock Preparation", "Fermentation", "Purification", "Drying & Storage"]
        );
    }

    #[test]
    fn pie_serializes_to_echarts_shape() {
        let data = ReportData::bio_sac();
        let value = serde_json::to_value(pie_option(&data.processes)).unwrap();
        assert_eq!(
            value["tooltip"],
            json!({"trigger": "item", "formatter": "{b}: {c} kg CO₂-eq/kg ({d}%)"})
        );
        assert_eq!(value["legend"], json!({"top": "5%", "left": "center"}));
        assert_eq!(value["series"][0]["type"], json!("pie"));
        assert_eq!(value["series"][0]["radius"], json!(["40%", "70%"]));
        assert_eq!(
            value["series"][0]["data"][1],
            json!({"value": 0.48, "name": "Fermentation"})
        );
    }

    #[test]
    fn bar_has_two_aligned_series() {
        let data = ReportData::bio_sac();
        let bar = bar_option(&data.comparison);
        let names: Vec<&str> = bar.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Bio-SAC", "Petroleum-SAC"]);
        let categories = bar.x_axis.data.clone().unwrap();
        assert_eq!(categories.len(), 3);
        assert!(categories[0].starts_with("GWP"));
        assert!(categories[1].starts_with("Energy Demand"));
        assert!(categories[2].starts_with("Water Use"));
        for series in &bar.series {
            assert_eq!(series.data.len(), categories.len());
        }
        assert_eq!(bar.series[0].data, vec![1.2, 8.0, 50.0]);
        assert_eq!(bar.series[1].data, vec![2.5, 12.0, 20.0]);
    }

    #[test]
    fn bar_serializes_to_echarts_shape() {
        let data = ReportData::bio_sac();
        let value = serde_json::to_value(bar_option(&data.comparison)).unwrap();
        assert_eq!(
            value["tooltip"],
            json!({"trigger": "axis", "axisPointer": {"type": "shadow"}})
        );
        assert_eq!(value["legend"], json!({"data": ["Bio-SAC", "Petroleum-SAC"]}));
        assert_eq!(value["xAxis"]["type"], json!("category"));
        assert_eq!(value["yAxis"], json!({"type": "value"}));
        assert_eq!(value["series"][0]["itemStyle"], json!({"color": "#1995AD"}));
        assert_eq!(value["series"][1]["itemStyle"], json!({"color": "#C4DFE6"}));
        assert_eq!(value["series"][1]["type"], json!("bar"));
    }

    #[test]
    fn chart_spec_carries_height_and_json() {
        let data = ReportData::bio_sac();
        let spec = ChartSpec::new("gwp-pie", "GWP", &pie_option(&data.processes));
        assert_eq!(spec.height, "400px");
        assert!(spec.option_json.starts_with('{'));
        assert!(spec.option_json.contains("\"type\":\"pie\""));
    }
}
