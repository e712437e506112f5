use chrono::{Duration, NaiveDate};
use contracts::domain::a002_sale::Sale;
use contracts::shared::analytics::{DailyRevenue, DayOrder};
use std::collections::HashMap;

/// Revenue summed per calendar day.
///
/// Days are kept in the order they first appear in the input, which is the
/// order `DayOrder::FirstSeen` exposes.
#[derive(Debug, Clone, Default)]
pub struct DailyRevenueSeries {
    days: Vec<DailyRevenue>,
}

impl DailyRevenueSeries {
    pub fn from_sales(sales: &[Sale]) -> Self {
        let mut index: HashMap<NaiveDate, usize> = HashMap::new();
        let mut days: Vec<DailyRevenue> = Vec::new();

        for sale in sales {
            let date = sale.day();
            match index.get(&date) {
                Some(&i) => days[i].total += sale.amount,
                None => {
                    index.insert(date, days.len());
                    days.push(DailyRevenue {
                        date,
                        total: sale.amount,
                    });
                }
            }
        }

        Self { days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days in the requested order.
    pub fn ordered(&self, order: DayOrder) -> Vec<DailyRevenue> {
        let mut days = self.days.clone();
        if order == DayOrder::Chronological {
            days.sort_by_key(|d| d.date);
        }
        days
    }

    /// Daily totals in the requested order.
    pub fn values(&self, order: DayOrder) -> Vec<f64> {
        self.ordered(order).into_iter().map(|d| d.total).collect()
    }

    pub fn total_on(&self, date: NaiveDate) -> f64 {
        self.days
            .iter()
            .find(|d| d.date == date)
            .map(|d| d.total)
            .unwrap_or(0.0)
    }

    /// `days` consecutive calendar days ending at `end` (inclusive), oldest
    /// first. Days without sales are reported as zero.
    pub fn window(&self, end: NaiveDate, days: u32) -> Vec<DailyRevenue> {
        (0..days as i64)
            .rev()
            .map(|back| {
                let date = end - Duration::days(back);
                DailyRevenue {
                    date,
                    total: self.total_on(date),
                }
            })
            .collect()
    }
}
