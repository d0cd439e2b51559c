use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A mapping from period label to aggregated value, as served by the
/// dashboard API. Labels are pre-formatted by the server (`YYYY-MM` /
/// `YYYY-MM-DD`) so lexicographic order equals chronological order.
pub type PeriodSeries = BTreeMap<String, f64>;

/// Response from `/dashboard/api/data`: the server-aggregated snapshot
/// feeding the overview visuals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardDataDto {
    #[serde(default)]
    pub time_series: TimeSeriesDto,
    #[serde(default)]
    pub delivery_status_dist: BTreeMap<String, f64>,
    #[serde(default)]
    pub top_countries: Vec<CountrySalesDto>,
    #[serde(default)]
    pub top_products: Vec<CategorySalesDto>,
}

/// Monthly aggregates keyed by period label. Any of the three maps may be
/// empty; axis selection falls back in order sales -> orders -> late rate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSeriesDto {
    #[serde(default)]
    pub sales: PeriodSeries,
    #[serde(default)]
    pub orders_count: PeriodSeries,
    #[serde(default)]
    pub late_delivery_rate: PeriodSeries,
}

impl TimeSeriesDto {
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty() && self.orders_count.is_empty() && self.late_delivery_rate.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySalesDto {
    pub country: String,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySalesDto {
    pub category: String,
    pub sales: f64,
}

/// Response from `/dashboard/api/correlation-matrix`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrelationMatrixDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub correlation_matrix: BTreeMap<String, BTreeMap<String, f64>>,
}

impl CorrelationMatrixDto {
    /// Classifies the payload for the loader: an error-flagged or columnless
    /// response is skipped the same way a failed fetch is.
    pub fn usable(&self) -> crate::error::Result<()> {
        if let Some(message) = &self.error {
            return Err(DashboardError::Upstream(message.clone()));
        }
        if self.columns.is_empty() {
            return Err(DashboardError::EmptyData(
                "correlation matrix has no columns".to_string(),
            ));
        }
        Ok(())
    }
}

/// Response from `/dashboard/api/advanced-metrics`. Only the seasonality
/// block is consumed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvancedMetricsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonality: Option<SeasonalityDto>,
}

/// Monthly sales keyed by month number ("1".."12").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonalityDto {
    #[serde(default)]
    pub monthly_sales: BTreeMap<String, f64>,
}

/// Response from `/dashboard/api/scatter-data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScatterDataDto {
    #[serde(default)]
    pub data: Vec<ScatterPointDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPointDto {
    pub x: f64,
    pub y: f64,
}

/// Response from `/dashboard/api/boxplot-data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoxPlotDataDto {
    #[serde(default)]
    pub data: Vec<CategorySampleDto>,
}

/// A category with its unordered raw observations; summary statistics are
/// derived on demand, never cached here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySampleDto {
    pub category: String,
    #[serde(default)]
    pub values: Vec<f64>,
}

/// Response from `/dashboard/api/waterfall-data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaterfallDataDto {
    #[serde(default)]
    pub data: Vec<DeltaStepDto>,
}

/// One signed step of the waterfall breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaStepDto {
    pub label: String,
    pub value: f64,
}
