use anyhow::Result;
use contracts::shared::indicators::*;
use std::collections::HashMap;

use super::compute::{inventory, sales};
use super::metadata::ids;
use crate::shared::data::Dataset;

type ComputeFn = fn(&IndicatorContext, &Dataset) -> Result<IndicatorValue>;

/// Central registry: maps `IndicatorId` to its compute function.
pub struct IndicatorRegistry {
    fns: HashMap<String, ComputeFn>,
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        let mut fns: HashMap<String, ComputeFn> = HashMap::new();

        fns.insert(ids::sales_today().0, sales::compute_sales_today);
        fns.insert(ids::items_sold_today().0, sales::compute_items_sold_today);
        fns.insert(ids::low_stock_count().0, inventory::compute_low_stock_count);
        fns.insert(ids::profit_margin().0, sales::compute_profit_margin);

        Self { fns }
    }

    /// Compute a batch of indicators in request order.
    ///
    /// Unknown ids are skipped; a failing computation yields an empty value
    /// with the error in its subtitle.
    pub fn compute(
        &self,
        ids: &[IndicatorId],
        ctx: &IndicatorContext,
        data: &Dataset,
    ) -> Vec<IndicatorValue> {
        let mut results = Vec::with_capacity(ids.len());

        for id in ids {
            if let Some(compute_fn) = self.fns.get(&id.0) {
                match compute_fn(ctx, data) {
                    Ok(val) => results.push(val),
                    Err(e) => {
                        tracing::warn!("indicator {} compute error: {e:#}", id.0);
                        results.push(IndicatorValue {
                            id: id.clone(),
                            value: None,
                            previous_value: None,
                            change_percent: None,
                            status: IndicatorStatus::Neutral,
                            display: None,
                            subtitle: Some(format!("Error: {e}")),
                        });
                    }
                }
            } else {
                tracing::warn!("indicator {} not found in registry", id.0);
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_unknown_ids_are_skipped_and_order_kept() {
        let registry = IndicatorRegistry::new();
        let ctx = IndicatorContext {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            low_stock_threshold: 35,
        };
        let requested = vec![
            ids::profit_margin(),
            IndicatorId::new("no_such_indicator"),
            ids::sales_today(),
        ];

        let values = registry.compute(&requested, &ctx, &Dataset::default());
        let got: Vec<&str> = values.iter().map(|v| v.id.0.as_str()).collect();
        assert_eq!(got, vec!["profit_margin", "sales_today"]);
    }
}
