use anyhow::Result;
use contracts::shared::indicators::*;

use crate::shared::data::Dataset;
use crate::shared::format::format_number;
use crate::shared::indicators::metadata::ids;

/// Products below the low-stock threshold. There is no stock history, so
/// there is no previous value to compare with.
pub fn compute_low_stock_count(ctx: &IndicatorContext, data: &Dataset) -> Result<IndicatorValue> {
    let count = data
        .products
        .iter()
        .filter(|p| p.stock < ctx.low_stock_threshold)
        .count();

    let status = if count == 0 {
        IndicatorStatus::Good
    } else {
        IndicatorStatus::Warning
    };

    Ok(IndicatorValue {
        id: ids::low_stock_count(),
        value: Some(count as f64),
        previous_value: None,
        change_percent: None,
        status,
        display: Some(format_number(count as u64)),
        subtitle: Some(format!("below {} units", ctx.low_stock_threshold)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_product::Product;

    #[test]
    fn test_counts_products_strictly_below_threshold() {
        let data = Dataset {
            products: vec![
                Product::new("a", "A", "X", 1.0, 34),
                Product::new("b", "B", "X", 1.0, 35),
                Product::new("c", "C", "X", 1.0, 0),
            ],
            ..Default::default()
        };
        let ctx = IndicatorContext {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            low_stock_threshold: 35,
        };

        let value = compute_low_stock_count(&ctx, &data).unwrap();
        assert_eq!(value.value, Some(2.0));
        assert_eq!(value.status, IndicatorStatus::Warning);

        let empty = compute_low_stock_count(&ctx, &Dataset::default()).unwrap();
        assert_eq!(empty.status, IndicatorStatus::Good);
    }
}
