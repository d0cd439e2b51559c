use crate::loader::{self, SharedRegistry};
use crate::render::chartjs::ChartJsEngine;
use crate::render::registry::{ChartRegistry, Visual};
use chrono::Local;
use gloo_timers::callback::Interval;
use log::debug;
use shared::StrategyDto;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const REFRESH_INTERVAL_MS: u32 = 60_000;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    /// Candidate strategies for the comparison panel. Supplied locally and
    /// rendered without a fetch; an empty list hides the panel.
    #[prop_or_default]
    pub strategies: Vec<StrategyDto>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let registry: SharedRegistry =
        use_mut_ref(|| ChartRegistry::new(Rc::new(ChartJsEngine::new())));
    let last_updated = use_state(|| Option::<String>::None);

    // Initial load on mount, full teardown on unmount.
    {
        let registry = registry.clone();
        use_effect_with((), move |_| {
            debug!("Dashboard mounted, loading charts");
            {
                let registry = registry.clone();
                spawn_local(async move {
                    loader::initialize_dashboard(registry).await;
                });
            }
            move || registry.borrow_mut().destroy_all()
        });
    }

    // The strategy comparison rebuilds whenever the prop changes.
    {
        let registry = registry.clone();
        use_effect_with(props.strategies.clone(), move |strategies| {
            if !strategies.is_empty() {
                loader::render_strategy_comparison(&registry, strategies);
            }
            || ()
        });
    }

    // Periodic refresh of the overview charts. The busy flag keeps a slow
    // response from stacking a second refresh on top of the first.
    {
        let registry = registry.clone();
        let last_updated = last_updated.clone();
        use_effect_with((), move |_| {
            let busy = Rc::new(Cell::new(false));
            let interval = Interval::new(REFRESH_INTERVAL_MS, move || {
                if busy.get() {
                    debug!("Previous refresh still in flight, skipping this tick");
                    return;
                }
                busy.set(true);
                let registry = registry.clone();
                let last_updated = last_updated.clone();
                let busy = busy.clone();
                spawn_local(async move {
                    loader::refresh_dashboard(registry).await;
                    last_updated.set(Some(Local::now().format("%H:%M:%S").to_string()));
                    busy.set(false);
                });
            });
            move || drop(interval)
        });
    }

    html! {
        <div class="dashboard-page">
            <div class="dashboard-header">
                <h1>{"Supply Chain Analytics"}</h1>
                {
                    match last_updated.as_ref() {
                        Some(time) => html! {
                            <span class="last-updated">{format!("Last updated {}", time)}</span>
                        },
                        None => html! {},
                    }
                }
            </div>

            <div class="chart-grid">
                <section class="chart-card chart-card-wide">
                    <h2>{"Sales, orders and late deliveries"}</h2>
                    <canvas id={Visual::TimeSeries.mount_id()}></canvas>
                </section>
                <section class="chart-card">
                    <h2>{"Delivery status"}</h2>
                    <canvas id={Visual::DeliveryStatus.mount_id()}></canvas>
                </section>
                <section class="chart-card">
                    <h2>{"Top countries by sales"}</h2>
                    <canvas id={Visual::TopCountries.mount_id()}></canvas>
                </section>
                <section class="chart-card">
                    <h2>{"Top categories by sales"}</h2>
                    <canvas id={Visual::TopCategories.mount_id()}></canvas>
                </section>
                <section class="chart-card chart-card-wide">
                    <h2>{"Correlation heatmap"}</h2>
                    <canvas id={Visual::CorrelationHeatmap.mount_id()}></canvas>
                </section>
                <section class="chart-card">
                    <h2>{"Seasonality"}</h2>
                    <canvas id={Visual::Seasonality.mount_id()}></canvas>
                </section>
                <section class="chart-card">
                    <h2>{"Temperature vs late delivery"}</h2>
                    <canvas id={Visual::Scatter.mount_id()}></canvas>
                </section>
                <section class="chart-card">
                    <h2>{"Sales distribution by category"}</h2>
                    <canvas id={Visual::BoxPlot.mount_id()}></canvas>
                </section>
                <section class="chart-card">
                    <h2>{"Profit breakdown"}</h2>
                    <canvas id={Visual::Waterfall.mount_id()}></canvas>
                </section>
                {
                    if props.strategies.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <section class="chart-card chart-card-wide">
                                <h2>{"Strategy comparison"}</h2>
                                <canvas id={Visual::StrategyComparison.mount_id()}></canvas>
                            </section>
                        }
                    }
                }
            </div>
        </div>
    }
}
