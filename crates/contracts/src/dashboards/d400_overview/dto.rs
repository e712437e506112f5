use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_product::ProductId;
use crate::shared::analytics::DailyRevenue;
use crate::shared::indicators::IndicatorValue;

/// Request for the overview dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewRequest {
    /// Day the metric cards report on
    pub date: NaiveDate,
    /// Length of the revenue chart in days, ending at `date`
    #[serde(default = "default_chart_days")]
    pub chart_days: u32,
}

fn default_chart_days() -> u32 {
    30
}

impl OverviewRequest {
    pub fn for_day(date: NaiveDate) -> Self {
        Self {
            date,
            chart_days: default_chart_days(),
        }
    }
}

/// Response for the overview dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub date: NaiveDate,
    /// Metric cards in display order
    pub indicators: Vec<IndicatorValue>,
    /// Daily revenue, oldest first, days without sales reported as zero
    pub daily_sales: Vec<DailyRevenue>,
    pub low_stock: Vec<LowStockItem>,
}

/// Product running short on the shelf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockItem {
    pub id: ProductId,
    pub name: String,
    pub stock: u32,
    /// Stock level the shelf should be refilled to
    pub target: u32,
}
