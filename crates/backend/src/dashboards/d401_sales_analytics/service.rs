use contracts::dashboards::d401_sales_analytics::{SalesAnalyticsRequest, SalesAnalyticsResponse};

use crate::shared::analytics::{
    detect_anomalies, forecast_at, recommend_stock_with, sales_by_category, AnalyticsError,
    DailyRevenueSeries,
};
use crate::shared::config::AnalyticsConfig;
use crate::shared::data::Dataset;
use contracts::shared::analytics::DayOrder;

/// Get sales analytics dashboard data
///
/// A forecast that cannot be fitted is reported as an empty prediction list
/// with a note; everything else is always present.
pub fn get_sales_analytics(
    request: &SalesAnalyticsRequest,
    data: &Dataset,
    config: &AnalyticsConfig,
) -> SalesAnalyticsResponse {
    let daily_sales = DailyRevenueSeries::from_sales(&data.sales).ordered(DayOrder::Chronological);

    let (predictions, predictions_note) = match forecast_at(
        &data.sales,
        request.horizon_days,
        request.today,
        config.day_order,
    ) {
        Ok(points) => (points, None),
        Err(e @ AnalyticsError::InsufficientData { .. }) => {
            tracing::warn!("sales forecast unavailable: {e}");
            (Vec::new(), Some(e.to_string()))
        }
    };

    let anomalies = detect_anomalies(&data.sales);
    if !anomalies.is_empty() {
        tracing::info!("{} anomalous sales days detected", anomalies.len());
    }

    let recommendations = recommend_stock_with(
        &data.sales,
        &data.products,
        &config.stock_policy(request.today),
    );

    SalesAnalyticsResponse {
        daily_sales,
        sales_by_category: sales_by_category(&data.sales, &data.products),
        predictions,
        predictions_note,
        anomalies,
        recommendations,
    }
}
