//! Fetch-orchestrate glue between the dashboard API and the chart registry.
//! Each data source is fetched independently; a failed or empty source skips
//! only its own visuals and the rest of the dashboard renders normally.
//! There are no retries, the next scheduled refresh is the retry.

use crate::api;
use crate::charts::builders;
use crate::charts::spec::ChartSpec;
use crate::render::registry::{ChartRegistry, Visual};
use log::{debug, warn};
use shared::StrategyDto;
use std::cell::RefCell;
use std::rc::Rc;
use validator::Validate;

pub type SharedRegistry = Rc<RefCell<ChartRegistry>>;

fn create_if_some(registry: &SharedRegistry, visual: Visual, spec: Option<ChartSpec>) {
    match spec {
        Some(spec) => registry.borrow_mut().create(visual, &spec),
        None => debug!("No data for {:?}, leaving its canvas empty", visual),
    }
}

/// First paint: fetches every data source concurrently and creates whatever
/// charts have data and a mount point.
pub async fn initialize_dashboard(registry: SharedRegistry) {
    let overview = {
        let registry = registry.clone();
        async move {
            match api::dashboard::get_dashboard_data().await {
                Ok(data) => {
                    create_if_some(
                        &registry,
                        Visual::TimeSeries,
                        builders::time_series_chart(&data.time_series),
                    );
                    create_if_some(
                        &registry,
                        Visual::DeliveryStatus,
                        builders::delivery_status_chart(&data.delivery_status_dist),
                    );
                    create_if_some(
                        &registry,
                        Visual::TopCountries,
                        builders::top_countries_chart(&data.top_countries),
                    );
                    create_if_some(
                        &registry,
                        Visual::TopCategories,
                        builders::top_categories_chart(&data.top_products),
                    );
                }
                Err(e) => warn!("Skipping overview charts: {}", e),
            }
        }
    };

    let correlation = {
        let registry = registry.clone();
        async move {
            match api::dashboard::get_correlation_matrix().await {
                Ok(matrix) => create_if_some(
                    &registry,
                    Visual::CorrelationHeatmap,
                    builders::correlation_chart(&matrix),
                ),
                Err(e) => warn!("Skipping correlation heatmap: {}", e),
            }
        }
    };

    let seasonality = {
        let registry = registry.clone();
        async move {
            match api::dashboard::get_advanced_metrics().await {
                Ok(metrics) => create_if_some(
                    &registry,
                    Visual::Seasonality,
                    metrics
                        .seasonality
                        .as_ref()
                        .and_then(builders::seasonality_chart),
                ),
                Err(e) => warn!("Skipping seasonality chart: {}", e),
            }
        }
    };

    let scatter = {
        let registry = registry.clone();
        async move {
            match api::dashboard::get_scatter_data().await {
                Ok(data) => {
                    create_if_some(&registry, Visual::Scatter, builders::scatter_chart(&data))
                }
                Err(e) => warn!("Skipping scatter chart: {}", e),
            }
        }
    };

    let boxplot = {
        let registry = registry.clone();
        async move {
            match api::dashboard::get_boxplot_data().await {
                Ok(data) => {
                    create_if_some(&registry, Visual::BoxPlot, builders::box_plot_chart(&data))
                }
                Err(e) => warn!("Skipping box plot: {}", e),
            }
        }
    };

    let waterfall = {
        let registry = registry.clone();
        async move {
            match api::dashboard::get_waterfall_data().await {
                Ok(data) => create_if_some(
                    &registry,
                    Visual::Waterfall,
                    builders::waterfall_chart(&data),
                ),
                Err(e) => warn!("Skipping waterfall chart: {}", e),
            }
        }
    };

    futures::join!(
        overview,
        correlation,
        seasonality,
        scatter,
        boxplot,
        waterfall
    );
}

/// Periodic refresh of the overview charts: data-only replacement, keeping
/// each chart's options and colors. A failed fetch keeps the last good data
/// on screen.
pub async fn refresh_dashboard(registry: SharedRegistry) {
    match api::dashboard::get_dashboard_data().await {
        Ok(data) => {
            let mut registry = registry.borrow_mut();
            registry.refresh(
                Visual::TimeSeries,
                &builders::time_series_data(&data.time_series),
            );
            registry.refresh(
                Visual::DeliveryStatus,
                &builders::delivery_status_data(&data.delivery_status_dist),
            );
            registry.refresh(
                Visual::TopCountries,
                &builders::top_countries_data(&data.top_countries),
            );
            registry.refresh(
                Visual::TopCategories,
                &builders::top_categories_data(&data.top_products),
            );
        }
        Err(e) => warn!("Dashboard refresh failed, keeping current charts: {}", e),
    }
}

/// Renders the strategy comparison from locally supplied strategies. A new
/// set means new labels and axes, so the chart is torn down and rebuilt
/// rather than refreshed. Strategies that fail validation are dropped.
pub fn render_strategy_comparison(registry: &SharedRegistry, strategies: &[StrategyDto]) {
    let valid: Vec<StrategyDto> = strategies
        .iter()
        .filter(|strategy| match strategy.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("Dropping strategy '{}': {}", strategy.name, e);
                false
            }
        })
        .cloned()
        .collect();

    match builders::strategy_comparison_chart(&valid) {
        Some(spec) => registry
            .borrow_mut()
            .recreate(Visual::StrategyComparison, &spec),
        None => debug!("No valid strategies to compare"),
    }
}
