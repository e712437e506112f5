//! Sales analytics over in-memory snapshots: daily revenue series, trend
//! forecast, reorder recommendations and anomaly detection.
//!
//! Every function here is pure. Inputs are borrowed, outputs freshly
//! allocated.

pub mod anomaly;
pub mod breakdown;
pub mod error;
pub mod forecast;
pub mod series;
pub mod stock;

pub use anomaly::detect_anomalies;
pub use breakdown::sales_by_category;
pub use error::AnalyticsError;
pub use forecast::{forecast, forecast_at, LinearFit};
pub use series::DailyRevenueSeries;
pub use stock::{recommend_stock, recommend_stock_with, StockPolicy};

#[cfg(test)]
pub(crate) mod testing;
