use chrono::{Duration, NaiveDate, Utc};
use contracts::domain::a002_sale::Sale;
use contracts::shared::analytics::{DayOrder, ForecastPoint};

use super::error::AnalyticsError;
use super::series::DailyRevenueSeries;

/// Half-width of the confidence band as a share of the prediction.
pub const CONFIDENCE_RATIO: f64 = 0.15;

/// Minimum number of distinct days needed to fit a line.
pub const MIN_FORECAST_DAYS: usize = 2;

/// Ordinary least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fits `values[i]` against `x = i`. Returns `None` for fewer than two
    /// points.
    pub fn fit(values: &[f64]) -> Option<Self> {
        let n = values.len();
        if n < MIN_FORECAST_DAYS {
            return None;
        }

        let n_f = n as f64;
        let mean_x = (0..n).map(|x| x as f64).sum::<f64>() / n_f;
        let mean_y = values.iter().sum::<f64>() / n_f;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (x, y) in values.iter().enumerate() {
            let dx = x as f64 - mean_x;
            numerator += dx * (y - mean_y);
            denominator += dx * dx;
        }

        // x is always 0..n-1 here, so this only trips on n < 2
        let slope = if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        };

        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Forecast daily revenue for the `horizon_days` days following today.
pub fn forecast(sales: &[Sale], horizon_days: u32) -> Result<Vec<ForecastPoint>, AnalyticsError> {
    forecast_at(
        sales,
        horizon_days,
        Utc::now().date_naive(),
        DayOrder::default(),
    )
}

/// Forecast daily revenue for the `horizon_days` days following `today`.
///
/// Distinct days with sales are indexed `0..n-1` in `order` and a straight
/// line is fitted through their totals. Point `i` (1-based) evaluates the
/// line at `n + i - 1` and is dated `today + i`. The band is
/// `CONFIDENCE_RATIO` of the raw prediction on either side; the prediction
/// and the lower bound are clamped at zero, the upper bound is not.
pub fn forecast_at(
    sales: &[Sale],
    horizon_days: u32,
    today: NaiveDate,
    order: DayOrder,
) -> Result<Vec<ForecastPoint>, AnalyticsError> {
    let series = DailyRevenueSeries::from_sales(sales);
    let values = series.values(order);
    let n = values.len();

    let fit = LinearFit::fit(&values).ok_or(AnalyticsError::InsufficientData {
        required: MIN_FORECAST_DAYS,
        found: n,
    })?;

    tracing::debug!(
        "forecast fit over {} days: slope={:.4} intercept={:.4}",
        n,
        fit.slope,
        fit.intercept
    );

    let points = (1..=horizon_days)
        .map(|i| {
            let raw = fit.predict((n + i as usize - 1) as f64);
            let half_width = CONFIDENCE_RATIO * raw;
            ForecastPoint {
                date: today + Duration::days(i as i64),
                predicted_sales: raw.max(0.0),
                lower_bound: (raw - half_width).max(0.0),
                upper_bound: raw + half_width,
            }
        })
        .collect();

    Ok(points)
}
