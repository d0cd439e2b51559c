use crate::api::api_url;
use gloo_net::http::Request;
use log::debug;
use shared::{
    AdvancedMetricsDto, BoxPlotDataDto, CorrelationMatrixDto, DashboardDataDto, ErrorResponse,
    ScatterDataDto, WaterfallDataDto,
};

pub async fn get_dashboard_data() -> Result<DashboardDataDto, String> {
    debug!("Fetching dashboard overview data");

    let response = Request::get(&api_url("/dashboard/api/data"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch dashboard data: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let data = response
        .json::<DashboardDataDto>()
        .await
        .map_err(|e| format!("Failed to parse dashboard data response: {}", e))?;

    debug!(
        "Successfully fetched dashboard data ({} countries, {} categories)",
        data.top_countries.len(),
        data.top_products.len()
    );
    Ok(data)
}

pub async fn get_correlation_matrix() -> Result<CorrelationMatrixDto, String> {
    debug!("Fetching correlation matrix");

    let response = Request::get(&api_url("/dashboard/api/correlation-matrix"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch correlation matrix: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let matrix = response
        .json::<CorrelationMatrixDto>()
        .await
        .map_err(|e| format!("Failed to parse correlation matrix response: {}", e))?;

    debug!(
        "Successfully fetched correlation matrix with {} columns",
        matrix.columns.len()
    );
    Ok(matrix)
}

pub async fn get_advanced_metrics() -> Result<AdvancedMetricsDto, String> {
    debug!("Fetching advanced metrics");

    let response = Request::get(&api_url("/dashboard/api/advanced-metrics"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch advanced metrics: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let metrics = response
        .json::<AdvancedMetricsDto>()
        .await
        .map_err(|e| format!("Failed to parse advanced metrics response: {}", e))?;

    debug!("Successfully fetched advanced metrics");
    Ok(metrics)
}

pub async fn get_scatter_data() -> Result<ScatterDataDto, String> {
    debug!("Fetching temperature scatter data");

    let response = Request::get(&api_url("/dashboard/api/scatter-data"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch scatter data: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let scatter = response
        .json::<ScatterDataDto>()
        .await
        .map_err(|e| format!("Failed to parse scatter data response: {}", e))?;

    debug!("Successfully fetched {} scatter points", scatter.data.len());
    Ok(scatter)
}

pub async fn get_boxplot_data() -> Result<BoxPlotDataDto, String> {
    debug!("Fetching box plot data");

    let response = Request::get(&api_url("/dashboard/api/boxplot-data"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch box plot data: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let boxplot = response
        .json::<BoxPlotDataDto>()
        .await
        .map_err(|e| format!("Failed to parse box plot data response: {}", e))?;

    debug!(
        "Successfully fetched box plot samples for {} categories",
        boxplot.data.len()
    );
    Ok(boxplot)
}

pub async fn get_waterfall_data() -> Result<WaterfallDataDto, String> {
    debug!("Fetching waterfall data");

    let response = Request::get(&api_url("/dashboard/api/waterfall-data"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch waterfall data: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let waterfall = response
        .json::<WaterfallDataDto>()
        .await
        .map_err(|e| format!("Failed to parse waterfall data response: {}", e))?;

    debug!(
        "Successfully fetched {} waterfall steps",
        waterfall.data.len()
    );
    Ok(waterfall)
}
