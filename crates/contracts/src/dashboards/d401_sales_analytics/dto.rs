use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::analytics::{
    Anomaly, CategoryRevenue, DailyRevenue, ForecastPoint, ReorderRecommendation,
};

/// Request for the sales analytics dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesAnalyticsRequest {
    /// Forecast starts the day after this date
    pub today: NaiveDate,
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
}

fn default_horizon_days() -> u32 {
    7
}

impl SalesAnalyticsRequest {
    pub fn for_day(today: NaiveDate) -> Self {
        Self {
            today,
            horizon_days: default_horizon_days(),
        }
    }
}

/// Response for the sales analytics dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesAnalyticsResponse {
    /// Revenue per day with sales, chronological
    pub daily_sales: Vec<DailyRevenue>,
    /// Revenue per category, largest first
    pub sales_by_category: Vec<CategoryRevenue>,
    /// Empty when there is not enough history to fit a trend
    pub predictions: Vec<ForecastPoint>,
    /// Why `predictions` is empty, if it is
    pub predictions_note: Option<String>,
    pub anomalies: Vec<Anomaly>,
    pub recommendations: Vec<ReorderRecommendation>,
}
