pub mod inventory;
pub mod sales;

use contracts::shared::indicators::IndicatorStatus;

/// Percent change from `prev` to `cur`; `None` when `prev` is about zero.
pub(crate) fn pct_change(cur: f64, prev: f64) -> Option<f64> {
    if prev.abs() < 0.01 {
        None
    } else {
        Some(((cur - prev) / prev.abs()) * 100.0)
    }
}

/// Good/Bad outside a ±5% band, Neutral inside it or without a change.
pub(crate) fn status_by_change(change: Option<f64>, higher_is_good: bool) -> IndicatorStatus {
    match change {
        Some(c) if c > 5.0 => {
            if higher_is_good {
                IndicatorStatus::Good
            } else {
                IndicatorStatus::Bad
            }
        }
        Some(c) if c < -5.0 => {
            if higher_is_good {
                IndicatorStatus::Bad
            } else {
                IndicatorStatus::Good
            }
        }
        _ => IndicatorStatus::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct_change() {
        assert_eq!(pct_change(110.0, 100.0), Some(10.0));
        assert_eq!(pct_change(50.0, 100.0), Some(-50.0));
        assert_eq!(pct_change(50.0, 0.0), None);
    }

    #[test]
    fn test_status_band() {
        assert_eq!(status_by_change(Some(12.5), true), IndicatorStatus::Good);
        assert_eq!(status_by_change(Some(12.5), false), IndicatorStatus::Bad);
        assert_eq!(status_by_change(Some(-8.0), true), IndicatorStatus::Bad);
        assert_eq!(status_by_change(Some(4.9), true), IndicatorStatus::Neutral);
        assert_eq!(status_by_change(None, true), IndicatorStatus::Neutral);
    }
}
