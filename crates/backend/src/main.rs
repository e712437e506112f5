use chrono::Utc;
use contracts::dashboards::d400_overview::OverviewRequest;
use contracts::dashboards::d401_sales_analytics::SalesAnalyticsRequest;
use serde::Serialize;

use pos_backoffice::dashboards::{d400_overview, d401_sales_analytics};
use pos_backoffice::shared::{config, data, logger};

#[derive(Serialize)]
struct Report {
    overview: contracts::dashboards::d400_overview::OverviewResponse,
    analytics: contracts::dashboards::d401_sales_analytics::SalesAnalyticsResponse,
}

fn main() -> anyhow::Result<()> {
    let app_config = config::initialize_config()?;

    logger::init_tracing(&config::resolve_path(&app_config.logging.dir))?;
    logger::log("startup", "Back office started");

    let today = Utc::now().date_naive();
    let dataset_path = app_config.data.path.as_deref().map(config::resolve_path);
    let dataset = data::load_or_seed(dataset_path.as_deref(), today)?;

    let overview = d400_overview::service::get_overview(
        &OverviewRequest::for_day(today),
        &dataset,
        &app_config.inventory,
    );

    let mut analytics_request = SalesAnalyticsRequest::for_day(today);
    analytics_request.horizon_days = app_config.analytics.horizon_days;
    let analytics = d401_sales_analytics::service::get_sales_analytics(
        &analytics_request,
        &dataset,
        &app_config.analytics,
    );

    let reorder_count = analytics
        .recommendations
        .iter()
        .filter(|r| r.needs_reorder)
        .count();
    logger::log(
        "analytics",
        &format!(
            "{} forecast points, {} anomalies, {} products to reorder",
            analytics.predictions.len(),
            analytics.anomalies.len(),
            reorder_count
        ),
    );

    let report = Report {
        overview,
        analytics,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
