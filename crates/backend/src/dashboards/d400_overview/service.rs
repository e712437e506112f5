use contracts::dashboards::d400_overview::{OverviewRequest, OverviewResponse};
use contracts::shared::indicators::IndicatorContext;

use crate::domain::a001_product::service as inventory;
use crate::shared::analytics::DailyRevenueSeries;
use crate::shared::config::InventoryConfig;
use crate::shared::data::Dataset;
use crate::shared::indicators::metadata::{build_catalog, overview_set_id};
use crate::shared::indicators::IndicatorRegistry;

/// Get overview dashboard data
pub fn get_overview(
    request: &OverviewRequest,
    data: &Dataset,
    inventory_config: &InventoryConfig,
) -> OverviewResponse {
    let ctx = IndicatorContext {
        date: request.date,
        low_stock_threshold: inventory_config.low_stock_threshold,
    };

    let catalog = build_catalog();
    let overview_ids = catalog
        .sets
        .into_iter()
        .find(|s| s.id == overview_set_id())
        .map(|s| s.indicators)
        .unwrap_or_default();

    let indicators = IndicatorRegistry::new().compute(&overview_ids, &ctx, data);

    let daily_sales =
        DailyRevenueSeries::from_sales(&data.sales).window(request.date, request.chart_days);

    let low_stock = inventory::low_stock(
        &data.products,
        inventory_config.low_stock_threshold,
        inventory_config.low_stock_target,
    );

    tracing::debug!(
        "overview for {}: {} indicators, {} low stock items",
        request.date,
        indicators.len(),
        low_stock.len()
    );

    OverviewResponse {
        date: request.date,
        indicators,
        daily_sales,
        low_stock,
    }
}
