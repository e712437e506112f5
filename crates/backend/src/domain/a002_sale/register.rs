use chrono::{DateTime, Utc};
use contracts::domain::a001_product::Product;
use contracts::domain::a002_sale::{Sale, SaleId, SaleLine};
use contracts::enums::PaymentMethod;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("cannot complete sale with empty cart")]
    EmptyCart,

    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    #[error("cart line not found: {0}")]
    LineNotFound(String),
}

/// Lines being rung up before the sale is completed.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<SaleLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[SaleLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `product`, merging into its existing line.
    pub fn add_product(&mut self, product: &Product) -> &SaleLine {
        let index = match self.lines.iter().position(|l| l.product_id == product.id) {
            Some(i) => {
                let line = &mut self.lines[i];
                line.set_quantity(line.quantity + 1);
                i
            }
            None => {
                self.lines
                    .push(SaleLine::new(&product.id, &product.name, 1, product.price));
                self.lines.len() - 1
            }
        };
        &self.lines[index]
    }

    pub fn update_quantity(&mut self, line_id: &str, quantity: u32) -> Result<(), RegisterError> {
        if quantity < 1 {
            return Err(RegisterError::InvalidQuantity(quantity));
        }
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.id == line_id)
            .ok_or_else(|| RegisterError::LineNotFound(line_id.to_string()))?;
        line.set_quantity(quantity);
        Ok(())
    }

    pub fn remove_line(&mut self, line_id: &str) -> Result<SaleLine, RegisterError> {
        let index = self
            .lines
            .iter()
            .position(|l| l.id == line_id)
            .ok_or_else(|| RegisterError::LineNotFound(line_id.to_string()))?;
        Ok(self.lines.remove(index))
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(|l| l.total).sum()
    }

    /// Turn the cart into a sale dated `now` and empty the cart.
    pub fn complete(
        &mut self,
        payment_method: PaymentMethod,
        customer: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Sale, RegisterError> {
        if self.lines.is_empty() {
            return Err(RegisterError::EmptyCart);
        }

        let customer = customer
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let sale = Sale {
            id: SaleId::new_v4(),
            date: now,
            amount: self.total(),
            lines: std::mem::take(&mut self.lines),
            customer,
            payment_method,
        };

        tracing::info!(
            "sale {} completed: {} lines, amount {:.2}, paid by {}",
            sale.id.0,
            sale.lines.len(),
            sale.amount,
            sale.payment_method
        );

        Ok(sale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn shampoo() -> Product {
        Product::new("p1", "Coco Shampoo", "Personal Care", 12.5, 45)
    }

    fn water() -> Product {
        Product::new("p4", "Coconut Water", "Drinks", 3.5, 120)
    }

    #[test]
    fn test_adding_same_product_merges_lines() {
        let mut cart = Cart::new();
        cart.add_product(&shampoo());
        cart.add_product(&water());
        let line = cart.add_product(&shampoo()).clone();

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.total, 25.0);
        assert_eq!(cart.total(), 28.5);
    }

    #[test]
    fn test_update_quantity_rejects_zero() {
        let mut cart = Cart::new();
        let id = cart.add_product(&water()).id.clone();

        assert_eq!(
            cart.update_quantity(&id, 0),
            Err(RegisterError::InvalidQuantity(0))
        );
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.update_quantity(&id, 4).unwrap();
        assert_eq!(cart.lines()[0].total, 14.0);
        assert!(matches!(
            cart.update_quantity("nope", 2),
            Err(RegisterError::LineNotFound(_))
        ));
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        let id = cart.add_product(&water()).id.clone();
        cart.add_product(&shampoo());

        let removed = cart.remove_line(&id).unwrap();
        assert_eq!(removed.product_name, "Coconut Water");
        assert_eq!(cart.lines().len(), 1);
        assert!(cart.remove_line(&id).is_err());
    }

    #[test]
    fn test_complete_builds_sale_and_resets_cart() {
        let mut cart = Cart::new();
        cart.add_product(&shampoo());
        cart.add_product(&water());
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 15, 30, 0).unwrap();

        let sale = cart
            .complete(PaymentMethod::Debit, Some("  Ana Lopez "), now)
            .unwrap();
        assert_eq!(sale.amount, 16.0);
        assert_eq!(sale.lines.len(), 2);
        assert_eq!(sale.date, now);
        assert_eq!(sale.customer.as_deref(), Some("Ana Lopez"));
        assert_eq!(sale.payment_method, PaymentMethod::Debit);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_complete_rejects_empty_cart() {
        let mut cart = Cart::new();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 15, 30, 0).unwrap();
        assert_eq!(
            cart.complete(PaymentMethod::Cash, Some(""), now),
            Err(RegisterError::EmptyCart)
        );
    }
}
