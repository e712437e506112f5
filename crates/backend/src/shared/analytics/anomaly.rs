use contracts::domain::a002_sale::Sale;
use contracts::shared::analytics::{Anomaly, DayOrder};

use super::series::DailyRevenueSeries;

/// Fewer distinct days than this yields no anomalies at all.
pub const MIN_ANOMALY_DAYS: usize = 5;

/// Distance from the mean, in standard deviations, a day must exceed.
pub const ANOMALY_THRESHOLD: f64 = 2.0;

/// Days whose revenue lies strictly more than `ANOMALY_THRESHOLD`
/// population standard deviations from the mean daily revenue, in
/// chronological order.
pub fn detect_anomalies(sales: &[Sale]) -> Vec<Anomaly> {
    let series = DailyRevenueSeries::from_sales(sales);
    if series.len() < MIN_ANOMALY_DAYS {
        tracing::debug!(
            "anomaly detection skipped: {} distinct days, need {}",
            series.len(),
            MIN_ANOMALY_DAYS
        );
        return Vec::new();
    }

    let days = series.ordered(DayOrder::Chronological);
    let n = days.len() as f64;
    let mean = days.iter().map(|d| d.total).sum::<f64>() / n;
    let variance = days.iter().map(|d| (d.total - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        return Vec::new();
    }

    days.into_iter()
        .filter(|d| (d.total - mean).abs() > ANOMALY_THRESHOLD * std_dev)
        .map(|d| Anomaly {
            date: d.date,
            amount: d.total,
            expected: mean,
            deviation: (d.total - mean) / std_dev,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::testing::{day, sale_on};

    fn sales_for(totals: &[f64]) -> Vec<Sale> {
        totals
            .iter()
            .enumerate()
            .map(|(i, t)| sale_on(day(2024, 2, 1 + i as u32), *t))
            .collect()
    }

    #[test]
    fn test_fewer_than_five_days_is_empty() {
        let sales = sales_for(&[1.0, 1.0, 1.0, 1000.0]);
        assert!(detect_anomalies(&sales).is_empty());
    }

    #[test]
    fn test_identical_days_is_empty() {
        let sales = sales_for(&[100.0; 5]);
        assert!(detect_anomalies(&sales).is_empty());
    }

    #[test]
    fn test_single_spike_among_five_sits_exactly_on_threshold() {
        // mean 28, population std 36, spike is exactly +2 std: not strictly above
        let sales = sales_for(&[10.0, 10.0, 10.0, 10.0, 100.0]);
        assert!(detect_anomalies(&sales).is_empty());
    }

    #[test]
    fn test_spike_flagged_with_enough_days() {
        let mut totals = vec![10.0; 9];
        totals.push(100.0);
        let sales = sales_for(&totals);

        let anomalies = detect_anomalies(&sales);
        assert_eq!(anomalies.len(), 1);
        let a = &anomalies[0];
        assert_eq!(a.date, day(2024, 2, 10));
        assert_eq!(a.amount, 100.0);
        assert!((a.expected - 19.0).abs() < 1e-9);
        // std = 27, deviation = 81 / 27
        assert!((a.deviation - 3.0).abs() < 1e-9);
        assert!(a.deviation > 2.0);
    }

    #[test]
    fn test_dip_has_negative_deviation() {
        let mut totals = vec![100.0; 9];
        totals.push(10.0);
        let anomalies = detect_anomalies(&sales_for(&totals));
        assert_eq!(anomalies.len(), 1);
        assert!(anomalies[0].deviation < -2.0);
    }

    #[test]
    fn test_same_day_sales_count_as_one_day() {
        // ten transactions over four days
        let mut sales = Vec::new();
        for i in 0..10 {
            sales.push(sale_on(day(2024, 2, 1 + (i % 4)), 10.0));
        }
        assert!(detect_anomalies(&sales).is_empty());
    }
}
