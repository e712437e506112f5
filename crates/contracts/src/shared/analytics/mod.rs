use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_product::ProductId;

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// Revenue summed over one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub total: f64,
}

/// Revenue summed over one product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub total: f64,
}

// ---------------------------------------------------------------------------
// Derived records
// ---------------------------------------------------------------------------

/// One day of the sales forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    /// Never negative.
    #[serde(rename = "predictedSales")]
    pub predicted_sales: f64,
    /// Never negative.
    #[serde(rename = "lowerBound")]
    pub lower_bound: f64,
    /// Not clamped; may be negative when the trend runs below zero.
    #[serde(rename = "upperBound")]
    pub upper_bound: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderRecommendation {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub name: String,
    #[serde(rename = "currentStock")]
    pub current_stock: u32,
    #[serde(rename = "recommendedStock")]
    pub recommended_stock: u32,
    #[serde(rename = "needsReorder")]
    pub needs_reorder: bool,
}

/// A day whose revenue sits more than two standard deviations from the mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub date: NaiveDate,
    /// Actual revenue of the day
    pub amount: f64,
    /// Mean daily revenue
    pub expected: f64,
    /// Signed distance from the mean in standard deviations
    pub deviation: f64,
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Order in which distinct days receive their regression index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOrder {
    /// Order of first appearance in the transaction list.
    FirstSeen,
    /// Sorted by calendar date.
    #[default]
    Chronological,
}
