//! One builder per dashboard visual: DTO in, `ChartSpec` out. Builders
//! return `None` when the payload has nothing to draw, which the loader
//! treats as "leave that canvas alone". The `*_data` variants produce the
//! replacement payloads for in-place refreshes.

use crate::charts::matrix::flatten_matrix;
use crate::charts::series::extract_series;
use crate::charts::spec::{
    AxisSpec, ChartData, ChartKind, ChartSpec, DatasetSpec, DatasetValues, Legend, Paint,
};
use crate::charts::tooltip::TooltipKind;
use shared::{
    BoxPlotDataDto, CategorySalesDto, CorrelationMatrixDto, CountrySalesDto, ScatterDataDto,
    SeasonalityDto, StrategyDto, TimeSeriesDto, WaterfallDataDto,
};
use std::collections::BTreeMap;

const GREEN: &str = "rgb(34, 197, 94)";
const GREEN_FILL: &str = "rgba(34, 197, 94, 0.1)";
const BLUE: &str = "rgb(59, 130, 246)";
const BLUE_FILL: &str = "rgba(59, 130, 246, 0.1)";
const RED: &str = "rgb(239, 68, 68)";
const RED_FILL: &str = "rgba(239, 68, 68, 0.1)";
const PURPLE: &str = "rgb(168, 85, 247)";

/// Slice palette for the delivery status doughnut, in label order.
const DOUGHNUT_PALETTE: [&str; 5] = [
    "rgb(239, 68, 68)",
    "rgb(34, 197, 94)",
    "rgb(59, 130, 246)",
    "rgb(234, 179, 8)",
    "rgb(168, 85, 247)",
];

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Three-axis line chart: sales on the left, order counts on the right, late
/// delivery rate against a hidden third axis.
pub fn time_series_chart(time_series: &TimeSeriesDto) -> Option<ChartSpec> {
    if time_series.is_empty() {
        return None;
    }
    let extracted = extract_series(&[
        &time_series.sales,
        &time_series.orders_count,
        &time_series.late_delivery_rate,
    ]);
    let mut series = extracted.series.into_iter();

    let line = |label: &str, values: Vec<f64>, color: &str, fill: &str, axis: &'static str| {
        DatasetSpec {
            background: Paint::solid(fill),
            border: Some(Paint::solid(color)),
            axis: Some(axis),
            tension: Some(0.4),
            ..DatasetSpec::new(label, DatasetValues::Numbers(values))
        }
    };

    Some(ChartSpec {
        labels: extracted.labels,
        datasets: vec![
            line("Sales ($)", series.next()?, GREEN, GREEN_FILL, "y"),
            line("Orders", series.next()?, BLUE, BLUE_FILL, "y1"),
            line(
                "Late delivery rate (%)",
                series.next()?,
                RED,
                RED_FILL,
                "y2",
            ),
        ],
        axes: vec![
            AxisSpec::left("y", "Sales ($)"),
            AxisSpec::right("y1", "Orders"),
            AxisSpec {
                display: false,
                ..AxisSpec::right("y2", "Late delivery rate (%)")
            },
        ],
        ..ChartSpec::new(ChartKind::Line)
    })
}

pub fn time_series_data(time_series: &TimeSeriesDto) -> ChartData {
    let extracted = extract_series(&[
        &time_series.sales,
        &time_series.orders_count,
        &time_series.late_delivery_rate,
    ]);
    ChartData {
        labels: extracted.labels,
        series: extracted
            .series
            .into_iter()
            .map(DatasetValues::Numbers)
            .collect(),
    }
}

pub fn delivery_status_chart(distribution: &BTreeMap<String, f64>) -> Option<ChartSpec> {
    if distribution.is_empty() {
        return None;
    }
    let labels: Vec<String> = distribution.keys().cloned().collect();
    let values: Vec<f64> = distribution.values().copied().collect();
    let colors = labels
        .iter()
        .enumerate()
        .map(|(i, _)| DOUGHNUT_PALETTE[i % DOUGHNUT_PALETTE.len()].to_string())
        .collect();

    Some(ChartSpec {
        labels,
        datasets: vec![DatasetSpec {
            background: Paint::PerPoint(colors),
            border: Some(Paint::solid("#fff")),
            border_width: Some(2.0),
            ..DatasetSpec::new("Orders", DatasetValues::Numbers(values))
        }],
        legend: Legend::Right,
        tooltip: TooltipKind::Share,
        ..ChartSpec::new(ChartKind::Doughnut)
    })
}

pub fn delivery_status_data(distribution: &BTreeMap<String, f64>) -> ChartData {
    ChartData {
        labels: distribution.keys().cloned().collect(),
        series: vec![DatasetValues::Numbers(
            distribution.values().copied().collect(),
        )],
    }
}

fn ranked_sales_chart(labels: Vec<String>, sales: Vec<f64>, color_rgb: &str) -> ChartSpec {
    let fill = color_rgb.replacen("rgb(", "rgba(", 1).replacen(')', ", 0.8)", 1);
    ChartSpec {
        labels,
        datasets: vec![DatasetSpec {
            background: Paint::Solid(fill),
            border: Some(Paint::solid(color_rgb)),
            border_width: Some(1.0),
            ..DatasetSpec::new("Sales ($)", DatasetValues::Numbers(sales))
        }],
        horizontal: true,
        legend: Legend::Hidden,
        tooltip: TooltipKind::Currency {
            prefix: "Sales".to_string(),
        },
        ..ChartSpec::new(ChartKind::Bar)
    }
}

pub fn top_countries_chart(countries: &[CountrySalesDto]) -> Option<ChartSpec> {
    if countries.is_empty() {
        return None;
    }
    Some(ranked_sales_chart(
        countries.iter().map(|c| c.country.clone()).collect(),
        countries.iter().map(|c| c.sales).collect(),
        BLUE,
    ))
}

pub fn top_countries_data(countries: &[CountrySalesDto]) -> ChartData {
    ChartData {
        labels: countries.iter().map(|c| c.country.clone()).collect(),
        series: vec![DatasetValues::Numbers(
            countries.iter().map(|c| c.sales).collect(),
        )],
    }
}

pub fn top_categories_chart(categories: &[CategorySalesDto]) -> Option<ChartSpec> {
    if categories.is_empty() {
        return None;
    }
    Some(ranked_sales_chart(
        categories.iter().map(|c| c.category.clone()).collect(),
        categories.iter().map(|c| c.sales).collect(),
        PURPLE,
    ))
}

pub fn top_categories_data(categories: &[CategorySalesDto]) -> ChartData {
    ChartData {
        labels: categories.iter().map(|c| c.category.clone()).collect(),
        series: vec![DatasetValues::Numbers(
            categories.iter().map(|c| c.sales).collect(),
        )],
    }
}

/// Grouped-bar rendition of the correlation matrix: one dataset per column,
/// bars colored by coefficient strength.
pub fn correlation_chart(matrix: &CorrelationMatrixDto) -> Option<ChartSpec> {
    matrix.usable().ok()?;
    let datasets = flatten_matrix(&matrix.correlation_matrix, &matrix.columns);

    Some(ChartSpec {
        labels: matrix.columns.clone(),
        datasets: datasets
            .into_iter()
            .map(|dataset| DatasetSpec {
                background: Paint::PerPoint(
                    dataset
                        .buckets
                        .iter()
                        .map(|b| b.fill_rgba().to_string())
                        .collect(),
                ),
                ..DatasetSpec::new(
                    &dataset.category,
                    DatasetValues::Numbers(dataset.coefficients),
                )
            })
            .collect(),
        axes: vec![AxisSpec {
            min: Some(-1.0),
            max: Some(1.0),
            step: Some(0.2),
            ..AxisSpec::left("y", "Correlation Coefficient")
        }],
        legend: Legend::Right,
        tooltip: TooltipKind::Coefficient,
        ..ChartSpec::new(ChartKind::Bar)
    })
}

/// Month-over-month sales profile. Keys are month numbers; labels become
/// English month names, with a literal "Month N" fallback for anything out
/// of range.
pub fn seasonality_chart(seasonality: &SeasonalityDto) -> Option<ChartSpec> {
    if seasonality.monthly_sales.is_empty() {
        return None;
    }
    let mut entries: Vec<(&String, &f64)> = seasonality.monthly_sales.iter().collect();
    // Numeric month order, not the map's lexicographic key order.
    entries.sort_by_key(|(key, _)| key.parse::<u32>().unwrap_or(u32::MAX));

    let labels = entries.iter().map(|(key, _)| month_label(key)).collect();
    let values = entries.iter().map(|(_, value)| **value).collect();

    Some(ChartSpec {
        labels,
        datasets: vec![DatasetSpec {
            background: Paint::solid(BLUE_FILL),
            border: Some(Paint::solid(BLUE)),
            fill: true,
            tension: Some(0.4),
            ..DatasetSpec::new("Monthly sales", DatasetValues::Numbers(values))
        }],
        axes: vec![AxisSpec {
            begin_at_zero: true,
            ..AxisSpec::left("y", "Sales ($)")
        }],
        tooltip: TooltipKind::Currency {
            prefix: "Sales".to_string(),
        },
        ..ChartSpec::new(ChartKind::Line)
    })
}

fn month_label(key: &str) -> String {
    key.parse::<usize>()
        .ok()
        .and_then(|month| month.checked_sub(1))
        .and_then(|index| MONTH_NAMES.get(index))
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Month {}", key))
}

pub fn scatter_chart(scatter: &ScatterDataDto) -> Option<ChartSpec> {
    if scatter.data.is_empty() {
        return None;
    }
    Some(ChartSpec {
        datasets: vec![DatasetSpec {
            background: Paint::solid("rgba(59, 130, 246, 0.6)"),
            border: Some(Paint::solid(BLUE)),
            point_radius: Some(4.0),
            ..DatasetSpec::new(
                "Temperature vs late delivery",
                DatasetValues::Points(scatter.data.clone()),
            )
        }],
        axes: vec![AxisSpec {
            step: Some(1.0),
            ..AxisSpec::left("y", "Late delivery (0=no, 1=yes)")
        }],
        x_title: Some("Temperature (°C)".to_string()),
        tooltip: TooltipKind::ScatterPoint {
            x_label: "Temperature".to_string(),
            y_label: "Late delivery".to_string(),
        },
        ..ChartSpec::new(ChartKind::Scatter)
    })
}

/// Bar-per-category stand-in for a box plot: bars show the mean, the tooltip
/// carries the full five-number summary recomputed from the raw sample.
pub fn box_plot_chart(boxplot: &BoxPlotDataDto) -> Option<ChartSpec> {
    if boxplot.data.is_empty() {
        return None;
    }
    let means = boxplot
        .data
        .iter()
        .map(|sample| {
            if sample.values.is_empty() {
                0.0
            } else {
                sample.values.iter().sum::<f64>() / sample.values.len() as f64
            }
        })
        .collect();

    Some(ChartSpec {
        labels: boxplot.data.iter().map(|s| s.category.clone()).collect(),
        datasets: vec![DatasetSpec {
            background: Paint::solid("rgba(168, 85, 247, 0.6)"),
            border: Some(Paint::solid(PURPLE)),
            border_width: Some(1.0),
            ..DatasetSpec::new("Mean sales", DatasetValues::Numbers(means))
        }],
        axes: vec![AxisSpec {
            begin_at_zero: true,
            ..AxisSpec::left("y", "Sales ($)")
        }],
        legend: Legend::Hidden,
        tooltip: TooltipKind::Summary {
            samples: boxplot.data.iter().map(|s| s.values.clone()).collect(),
        },
        ..ChartSpec::new(ChartKind::Bar)
    })
}

/// Signed profit steps colored by direction. Running totals live in the
/// tooltip rather than in stacked baseline bars.
pub fn waterfall_chart(waterfall: &WaterfallDataDto) -> Option<ChartSpec> {
    if waterfall.data.is_empty() {
        return None;
    }
    let values: Vec<f64> = waterfall.data.iter().map(|step| step.value).collect();
    let fills = values
        .iter()
        .map(|&v| {
            if v >= 0.0 {
                "rgba(34, 197, 94, 0.8)".to_string()
            } else {
                "rgba(239, 68, 68, 0.8)".to_string()
            }
        })
        .collect();
    let borders = values
        .iter()
        .map(|&v| if v >= 0.0 { GREEN } else { RED }.to_string())
        .collect();

    Some(ChartSpec {
        labels: waterfall.data.iter().map(|step| step.label.clone()).collect(),
        datasets: vec![DatasetSpec {
            background: Paint::PerPoint(fills),
            border: Some(Paint::PerPoint(borders)),
            border_width: Some(1.0),
            ..DatasetSpec::new("Profit", DatasetValues::Numbers(values))
        }],
        axes: vec![AxisSpec::left("y", "Profit ($)")],
        legend: Legend::Hidden,
        tooltip: TooltipKind::RunningTotal {
            label: "Profit".to_string(),
        },
        ..ChartSpec::new(ChartKind::Bar)
    })
}

/// Profit, cost and revenue as grouped bars, confidence as a percentage line
/// on a secondary axis.
pub fn strategy_comparison_chart(strategies: &[StrategyDto]) -> Option<ChartSpec> {
    if strategies.is_empty() {
        return None;
    }
    let bar = |label: &str, values: Vec<f64>, color: &str| DatasetSpec {
        background: Paint::Solid(color.replacen("rgb(", "rgba(", 1).replacen(')', ", 0.6)", 1)),
        border: Some(Paint::solid(color)),
        border_width: Some(2.0),
        axis: Some("y"),
        ..DatasetSpec::new(label, DatasetValues::Numbers(values))
    };

    Some(ChartSpec {
        labels: strategies.iter().map(|s| s.name.clone()).collect(),
        datasets: vec![
            bar(
                "Estimated profit ($)",
                strategies.iter().map(|s| s.estimated_profit).collect(),
                GREEN,
            ),
            bar(
                "Estimated cost ($)",
                strategies.iter().map(|s| s.estimated_cost).collect(),
                RED,
            ),
            bar(
                "Estimated revenue ($)",
                strategies.iter().map(|s| s.estimated_revenue).collect(),
                BLUE,
            ),
            DatasetSpec {
                background: Paint::solid("rgba(168, 85, 247, 0.2)"),
                border: Some(Paint::solid(PURPLE)),
                border_width: Some(2.0),
                axis: Some("y1"),
                overlay_line: true,
                tension: Some(0.4),
                ..DatasetSpec::new(
                    "Confidence (%)",
                    DatasetValues::Numbers(
                        strategies.iter().map(|s| s.confidence * 100.0).collect(),
                    ),
                )
            },
        ],
        axes: vec![
            AxisSpec::left("y", "Value ($)"),
            AxisSpec::right("y1", "Confidence (%)"),
        ],
        ..ChartSpec::new(ChartKind::Bar)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared::{DeltaStepDto, ScatterPointDto};

    fn period_series(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(label, value)| (label.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_time_series_axis_from_first_non_empty_source() {
        let time_series = TimeSeriesDto {
            sales: BTreeMap::new(),
            orders_count: period_series(&[("2024-01", 12.0), ("2024-02", 9.0)]),
            late_delivery_rate: period_series(&[("2024-01", 0.1)]),
        };
        let spec = time_series_chart(&time_series).expect("spec");

        assert_eq!(spec.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(spec.datasets.len(), 3);
        assert_eq!(
            spec.datasets[0].values,
            DatasetValues::Numbers(vec![0.0, 0.0])
        );
        assert_eq!(
            spec.datasets[1].values,
            DatasetValues::Numbers(vec![12.0, 9.0])
        );
        assert_eq!(spec.datasets[2].axis, Some("y2"));
        assert!(!spec.axes[2].display);
    }

    #[test]
    fn test_time_series_empty_payload_skips() {
        assert_eq!(time_series_chart(&TimeSeriesDto::default()), None);
    }

    #[test]
    fn test_time_series_refresh_payload_matches_dataset_order() {
        let time_series = TimeSeriesDto {
            sales: period_series(&[("2024-03", 500.0)]),
            orders_count: period_series(&[("2024-03", 4.0)]),
            late_delivery_rate: BTreeMap::new(),
        };
        let data = time_series_data(&time_series);
        assert_eq!(data.labels, vec!["2024-03"]);
        assert_eq!(
            data.series,
            vec![
                DatasetValues::Numbers(vec![500.0]),
                DatasetValues::Numbers(vec![4.0]),
                DatasetValues::Numbers(vec![0.0]),
            ]
        );
    }

    #[test]
    fn test_delivery_status_palette_in_label_order() {
        let dist = period_series(&[("Advance", 20.0), ("Late", 50.0), ("On time", 30.0)]);
        let spec = delivery_status_chart(&dist).expect("spec");
        assert_eq!(spec.labels, vec!["Advance", "Late", "On time"]);
        match &spec.datasets[0].background {
            Paint::PerPoint(colors) => assert_eq!(colors.len(), 3),
            other => panic!("expected per-point paint, got {:?}", other),
        }
        assert_eq!(delivery_status_chart(&BTreeMap::new()), None);
    }

    #[test]
    fn test_top_countries_is_horizontal_currency_bar() {
        let countries = vec![CountrySalesDto {
            country: "Vietnam".to_string(),
            sales: 9000.0,
        }];
        let spec = top_countries_chart(&countries).expect("spec");
        assert!(spec.horizontal);
        assert_eq!(spec.legend, Legend::Hidden);
        assert_eq!(
            spec.tooltip,
            TooltipKind::Currency {
                prefix: "Sales".to_string()
            }
        );
        assert_eq!(
            spec.datasets[0].background,
            Paint::Solid("rgba(59, 130, 246, 0.8)".to_string())
        );
    }

    #[test]
    fn test_correlation_chart_skips_unusable_payloads() {
        let mut flagged = CorrelationMatrixDto::default();
        flagged.error = Some("not enough rows".to_string());
        assert_eq!(correlation_chart(&flagged), None);
        assert_eq!(correlation_chart(&CorrelationMatrixDto::default()), None);
    }

    #[test]
    fn test_correlation_chart_one_dataset_per_column() {
        let matrix = CorrelationMatrixDto {
            error: None,
            columns: vec!["A".to_string(), "B".to_string()],
            correlation_matrix: BTreeMap::from([
                (
                    "A".to_string(),
                    BTreeMap::from([("A".to_string(), 1.0), ("B".to_string(), 0.5)]),
                ),
                (
                    "B".to_string(),
                    BTreeMap::from([("A".to_string(), 0.5), ("B".to_string(), 1.0)]),
                ),
            ]),
        };
        let spec = correlation_chart(&matrix).expect("spec");
        assert_eq!(spec.datasets.len(), 2);
        assert_eq!(spec.datasets[0].label, "A");
        assert_eq!(
            spec.datasets[0].values,
            DatasetValues::Numbers(vec![1.0, 0.5])
        );
        assert_eq!(
            spec.datasets[0].background,
            Paint::PerPoint(vec![
                "rgba(34, 197, 94, 0.8)".to_string(),
                "rgba(59, 130, 246, 0.6)".to_string(),
            ])
        );
        assert_eq!(spec.axes[0].min, Some(-1.0));
        assert_eq!(spec.axes[0].max, Some(1.0));
    }

    #[test]
    fn test_seasonality_months_sorted_numerically_with_fallback() {
        let seasonality = SeasonalityDto {
            monthly_sales: period_series(&[
                ("1", 100.0),
                ("2", 110.0),
                ("10", 90.0),
                ("13", 5.0),
            ]),
        };
        let spec = seasonality_chart(&seasonality).expect("spec");
        assert_eq!(spec.labels, vec!["Jan", "Feb", "Oct", "Month 13"]);
        assert_eq!(
            spec.datasets[0].values,
            DatasetValues::Numbers(vec![100.0, 110.0, 90.0, 5.0])
        );
    }

    #[test]
    fn test_scatter_chart_keeps_points() {
        let scatter = ScatterDataDto {
            data: vec![ScatterPointDto { x: 21.5, y: 1.0 }],
        };
        let spec = scatter_chart(&scatter).expect("spec");
        assert_eq!(spec.kind, ChartKind::Scatter);
        assert_eq!(
            spec.datasets[0].values,
            DatasetValues::Points(vec![ScatterPointDto { x: 21.5, y: 1.0 }])
        );
        assert_eq!(scatter_chart(&ScatterDataDto::default()), None);
    }

    #[test]
    fn test_box_plot_bars_show_means() {
        let boxplot = BoxPlotDataDto {
            data: vec![
                shared::CategorySampleDto {
                    category: "Office".to_string(),
                    values: vec![10.0, 20.0, 30.0, 40.0],
                },
                shared::CategorySampleDto {
                    category: "Garden".to_string(),
                    values: vec![],
                },
            ],
        };
        let spec = box_plot_chart(&boxplot).expect("spec");
        assert_eq!(
            spec.datasets[0].values,
            DatasetValues::Numbers(vec![25.0, 0.0])
        );
        match &spec.tooltip {
            TooltipKind::Summary { samples } => assert_eq!(samples.len(), 2),
            other => panic!("expected summary tooltip, got {:?}", other),
        }
    }

    #[test]
    fn test_waterfall_colors_follow_sign() {
        let waterfall = WaterfallDataDto {
            data: vec![
                DeltaStepDto {
                    label: "Revenue".to_string(),
                    value: 100.0,
                },
                DeltaStepDto {
                    label: "Costs".to_string(),
                    value: -30.0,
                },
            ],
        };
        let spec = waterfall_chart(&waterfall).expect("spec");
        assert_eq!(
            spec.datasets[0].background,
            Paint::PerPoint(vec![
                "rgba(34, 197, 94, 0.8)".to_string(),
                "rgba(239, 68, 68, 0.8)".to_string(),
            ])
        );
    }

    #[test]
    fn test_strategy_comparison_shape() {
        let strategies = vec![StrategyDto {
            name: "Expedite".to_string(),
            estimated_profit: 12_000.0,
            estimated_cost: 3_000.0,
            estimated_revenue: 15_000.0,
            confidence: 0.85,
        }];
        let spec = strategy_comparison_chart(&strategies).expect("spec");
        assert_eq!(spec.datasets.len(), 4);
        assert!(spec.datasets[3].overlay_line);
        assert_eq!(spec.datasets[3].axis, Some("y1"));
        assert_eq!(
            spec.datasets[3].values,
            DatasetValues::Numbers(vec![85.0])
        );
        assert_eq!(strategy_comparison_chart(&[]), None);
    }
}
