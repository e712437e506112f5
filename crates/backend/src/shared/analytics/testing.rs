//! Builders shared by the analytics tests.

use chrono::{NaiveDate, TimeZone, Utc};
use contracts::domain::a001_product::{Product, ProductId};
use contracts::domain::a002_sale::{Sale, SaleId, SaleLine};
use contracts::enums::PaymentMethod;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Sale at noon UTC on `date` with no lines.
pub fn sale_on(date: NaiveDate, amount: f64) -> Sale {
    Sale {
        id: SaleId::new_v4(),
        date: Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap()),
        amount,
        lines: vec![],
        customer: None,
        payment_method: PaymentMethod::Cash,
    }
}

/// Sale on `date` with one line per `(product, quantity)`; amount is the
/// sum of line totals.
pub fn sale_with(date: NaiveDate, items: &[(&Product, u32)]) -> Sale {
    let lines: Vec<SaleLine> = items
        .iter()
        .map(|(p, q)| SaleLine::new(&p.id, &p.name, *q, p.price))
        .collect();
    let mut sale = sale_on(date, lines.iter().map(|l| l.total).sum());
    sale.lines = lines;
    sale
}

pub fn line_for(product_id: &str, quantity: u32) -> SaleLine {
    SaleLine::new(&ProductId::new(product_id), product_id, quantity, 1.0)
}
