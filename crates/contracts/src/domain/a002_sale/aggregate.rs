use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a001_product::ProductId;
use crate::enums::PaymentMethod;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(pub String);

impl SaleId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// One line of a sale: a product, how many, and at what price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    pub id: String,
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub quantity: u32,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    /// Always `quantity * unit_price` for lines built by the register
    pub total: f64,
}

impl SaleLine {
    pub fn new(product_id: &ProductId, product_name: &str, quantity: u32, unit_price: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_id: product_id.clone(),
            product_name: product_name.to_string(),
            quantity,
            unit_price,
            total: quantity as f64 * unit_price,
        }
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.total = quantity as f64 * self.unit_price;
    }
}

/// A completed sale (transaction). Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub date: DateTime<Utc>,
    pub amount: f64,
    #[serde(rename = "items")]
    pub lines: Vec<SaleLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
}

impl Sale {
    /// Calendar day (UTC) the sale belongs to.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Total units across all lines.
    pub fn units(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_line_total_follows_quantity() {
        let mut line = SaleLine::new(&ProductId::new("p4"), "Coconut Water", 4, 3.5);
        assert_eq!(line.total, 14.0);
        line.set_quantity(2);
        assert_eq!(line.total, 7.0);
    }

    #[test]
    fn test_day_ignores_time_of_day() {
        let sale = Sale {
            id: SaleId::new("s1"),
            date: Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 0).unwrap(),
            amount: 1.0,
            lines: vec![],
            customer: None,
            payment_method: PaymentMethod::Cash,
        };
        assert_eq!(sale.day(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }
}
