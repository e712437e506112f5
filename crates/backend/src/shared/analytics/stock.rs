use chrono::{Duration, NaiveDate};
use contracts::domain::a001_product::{Product, ProductId};
use contracts::domain::a002_sale::Sale;
use contracts::shared::analytics::ReorderRecommendation;
use std::collections::HashMap;

/// How sales velocity is estimated and how much stock should cover.
#[derive(Debug, Clone, PartialEq)]
pub struct StockPolicy {
    /// Days of history the sold quantity is spread over.
    pub history_window_days: u32,
    /// Days of sales the recommended stock should cover.
    pub target_coverage_days: u32,
    /// When set, only sales in the `history_window_days` ending at this day
    /// (inclusive) are counted. When unset every sale counts and the window
    /// is only a divisor.
    pub window_end: Option<NaiveDate>,
}

impl Default for StockPolicy {
    fn default() -> Self {
        Self {
            history_window_days: 30,
            target_coverage_days: 14,
            window_end: None,
        }
    }
}

impl StockPolicy {
    pub fn trailing_window(mut self, as_of: NaiveDate) -> Self {
        self.window_end = Some(as_of);
        self
    }

    fn counts(&self, sale: &Sale) -> bool {
        match self.window_end {
            None => true,
            Some(end) => {
                let start = end - Duration::days(self.history_window_days as i64);
                let day = sale.day();
                day > start && day <= end
            }
        }
    }
}

/// Reorder recommendations with the default 30-day divisor and 14-day
/// coverage.
pub fn recommend_stock(sales: &[Sale], products: &[Product]) -> Vec<ReorderRecommendation> {
    recommend_stock_with(sales, products, &StockPolicy::default())
}

/// One recommendation per product, in input order.
///
/// `recommended = ceil(sold / history_window_days * target_coverage_days)`.
/// Lines for products not in `products` are ignored.
pub fn recommend_stock_with(
    sales: &[Sale],
    products: &[Product],
    policy: &StockPolicy,
) -> Vec<ReorderRecommendation> {
    let mut sold: HashMap<&ProductId, u64> = products.iter().map(|p| (&p.id, 0)).collect();

    for sale in sales.iter().filter(|s| policy.counts(s)) {
        for line in &sale.lines {
            if let Some(total) = sold.get_mut(&line.product_id) {
                *total += line.quantity as u64;
            }
        }
    }

    let window = policy.history_window_days.max(1) as f64;

    products
        .iter()
        .map(|product| {
            let total_sold = sold.get(&product.id).copied().unwrap_or(0);
            let daily_velocity = total_sold as f64 / window;
            let recommended_stock =
                (daily_velocity * policy.target_coverage_days as f64).ceil() as u32;

            ReorderRecommendation {
                product_id: product.id.clone(),
                name: product.name.clone(),
                current_stock: product.stock,
                recommended_stock,
                needs_reorder: product.stock < recommended_stock,
            }
        })
        .collect()
}
