pub mod dto {
    pub mod common;
    pub mod dashboard;
    pub mod strategy;
}

pub mod error;

// Re-export commonly used items
pub use error::{DashboardError, Result};

pub use dto::{
    common::ErrorResponse,
    dashboard::{
        AdvancedMetricsDto, BoxPlotDataDto, CategorySalesDto, CategorySampleDto,
        CorrelationMatrixDto, CountrySalesDto, DashboardDataDto, DeltaStepDto, PeriodSeries,
        ScatterDataDto, ScatterPointDto, SeasonalityDto, TimeSeriesDto, WaterfallDataDto,
    },
    strategy::StrategyDto,
};
