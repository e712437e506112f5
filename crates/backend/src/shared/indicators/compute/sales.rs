use anyhow::Result;
use chrono::{Duration, NaiveDate};
use contracts::domain::a001_product::{Product, ProductId};
use contracts::domain::a002_sale::Sale;
use contracts::shared::indicators::*;
use std::collections::HashMap;

use super::{pct_change, status_by_change};
use crate::shared::data::Dataset;
use crate::shared::format::{format_money, format_number, format_percent};
use crate::shared::indicators::metadata::ids;

// ---------------------------------------------------------------------------
// Internal aggregation row
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct SalesAgg {
    total_revenue: f64,
    items_sold: u32,
    order_count: usize,
    /// Revenue of lines whose product cost is known
    costed_revenue: f64,
    /// Cost of those same lines
    costed_cost: f64,
}

impl SalesAgg {
    fn margin_percent(&self) -> Option<f64> {
        if self.costed_revenue > 0.0 {
            Some((self.costed_revenue - self.costed_cost) / self.costed_revenue * 100.0)
        } else {
            None
        }
    }
}

fn fetch_agg(sales: &[Sale], products: &[Product], date: NaiveDate) -> SalesAgg {
    let cost_of: HashMap<&ProductId, f64> = products
        .iter()
        .filter_map(|p| p.cost_price.map(|c| (&p.id, c)))
        .collect();

    let mut agg = SalesAgg::default();
    for sale in sales.iter().filter(|s| s.day() == date) {
        agg.total_revenue += sale.amount;
        agg.items_sold += sale.units();
        agg.order_count += 1;
        for line in &sale.lines {
            if let Some(cost) = cost_of.get(&line.product_id) {
                agg.costed_revenue += line.total;
                agg.costed_cost += cost * line.quantity as f64;
            }
        }
    }
    agg
}

fn current_and_previous(ctx: &IndicatorContext, data: &Dataset) -> (SalesAgg, SalesAgg) {
    let cur = fetch_agg(&data.sales, &data.products, ctx.date);
    let prev = fetch_agg(&data.sales, &data.products, ctx.date - Duration::days(1));
    (cur, prev)
}

// ---------------------------------------------------------------------------
// Public compute functions
// ---------------------------------------------------------------------------

pub fn compute_sales_today(ctx: &IndicatorContext, data: &Dataset) -> Result<IndicatorValue> {
    let (cur, prev) = current_and_previous(ctx, data);
    let change = pct_change(cur.total_revenue, prev.total_revenue);
    Ok(IndicatorValue {
        id: ids::sales_today(),
        value: Some(cur.total_revenue),
        previous_value: Some(prev.total_revenue),
        change_percent: change,
        status: status_by_change(change, true),
        display: Some(format_money(cur.total_revenue)),
        subtitle: Some(format!("{} orders", cur.order_count)),
    })
}

pub fn compute_items_sold_today(ctx: &IndicatorContext, data: &Dataset) -> Result<IndicatorValue> {
    let (cur, prev) = current_and_previous(ctx, data);
    let change = pct_change(cur.items_sold as f64, prev.items_sold as f64);
    Ok(IndicatorValue {
        id: ids::items_sold_today(),
        value: Some(cur.items_sold as f64),
        previous_value: Some(prev.items_sold as f64),
        change_percent: change,
        status: status_by_change(change, true),
        display: Some(format_number(cur.items_sold as u64)),
        subtitle: None,
    })
}

pub fn compute_profit_margin(ctx: &IndicatorContext, data: &Dataset) -> Result<IndicatorValue> {
    let (cur, prev) = current_and_previous(ctx, data);
    let cur_margin = cur.margin_percent();
    let prev_margin = prev.margin_percent();
    let change = match (cur_margin, prev_margin) {
        (Some(c), Some(p)) => pct_change(c, p),
        _ => None,
    };
    Ok(IndicatorValue {
        id: ids::profit_margin(),
        value: cur_margin,
        previous_value: prev_margin,
        change_percent: change,
        status: status_by_change(change, true),
        display: cur_margin.map(|m| format_percent(m, 0)),
        subtitle: cur_margin.is_none().then(|| "No costed sales".to_string()),
    })
}
