use crate::charts::spec::{ChartData, ChartSpec};
use crate::render::engine::ChartEngine;
use crate::render::session::RenderSession;
use std::collections::HashMap;
use std::rc::Rc;

/// The dashboard's visuals, each tied to one canvas element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visual {
    TimeSeries,
    DeliveryStatus,
    TopCountries,
    TopCategories,
    CorrelationHeatmap,
    Scatter,
    BoxPlot,
    Waterfall,
    Seasonality,
    StrategyComparison,
}

impl Visual {
    pub fn mount_id(&self) -> &'static str {
        match self {
            Visual::TimeSeries => "timeSeriesChart",
            Visual::DeliveryStatus => "deliveryStatusChart",
            Visual::TopCountries => "topCountriesChart",
            Visual::TopCategories => "topCategoriesChart",
            Visual::CorrelationHeatmap => "correlationHeatmapChart",
            Visual::Scatter => "scatterChart",
            Visual::BoxPlot => "boxPlotChart",
            Visual::Waterfall => "waterfallChart",
            Visual::Seasonality => "seasonalityChart",
            Visual::StrategyComparison => "strategies-comparison-chart",
        }
    }
}

/// One `RenderSession` per visual, sharing a single engine. The registry is
/// the only owner of chart instances; the page holds the registry and never
/// touches handles directly.
pub struct ChartRegistry {
    engine: Rc<dyn ChartEngine>,
    sessions: HashMap<Visual, RenderSession>,
}

impl ChartRegistry {
    pub fn new(engine: Rc<dyn ChartEngine>) -> Self {
        Self {
            engine,
            sessions: HashMap::new(),
        }
    }

    pub fn create(&mut self, visual: Visual, spec: &ChartSpec) {
        let session = self.sessions.entry(visual).or_default();
        session.create(self.engine.as_ref(), visual.mount_id(), spec);
    }

    pub fn refresh(&mut self, visual: Visual, data: &ChartData) {
        if let Some(session) = self.sessions.get_mut(&visual) {
            session.refresh(data);
        }
    }

    /// Tears down any existing instance first, then creates from scratch.
    /// The sanctioned path for changing options, colors or axes.
    pub fn recreate(&mut self, visual: Visual, spec: &ChartSpec) {
        self.destroy(visual);
        self.create(visual, spec);
    }

    pub fn destroy(&mut self, visual: Visual) {
        if let Some(session) = self.sessions.get_mut(&visual) {
            session.destroy();
        }
    }

    pub fn destroy_all(&mut self) {
        for session in self.sessions.values_mut() {
            session.destroy();
        }
    }

    pub fn is_live(&self, visual: Visual) -> bool {
        self.sessions
            .get(&visual)
            .map(RenderSession::is_live)
            .unwrap_or(false)
    }
}

impl Drop for ChartRegistry {
    fn drop(&mut self) {
        self.destroy_all();
    }
}
