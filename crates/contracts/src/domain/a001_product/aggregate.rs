use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A catalogue item on the shelf.
///
/// `stock` is mutated by inventory edits; analytics reads a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Retail price per unit
    pub price: f64,
    /// Units on hand
    pub stock: u32,
    pub category: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Purchase price per unit, when known
    #[serde(rename = "costPrice", default, skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
}

impl Product {
    pub fn new(id: &str, name: &str, category: &str, price: f64, stock: u32) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            price,
            stock,
            category: category.to_string(),
            image_url: None,
            cost_price: None,
        }
    }

    pub fn with_cost_price(mut self, cost_price: f64) -> Self {
        self.cost_price = Some(cost_price);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Margin per unit, `None` when the cost price is unknown.
    pub fn unit_margin(&self) -> Option<f64> {
        self.cost_price.map(|cost| self.price - cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_json_uses_camel_case_cost_price() {
        let product = Product::new("p1", "Coco Shampoo", "Personal Care", 12.99, 45)
            .with_cost_price(5.5);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["costPrice"], 5.5);
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn test_unit_margin() {
        let product = Product::new("p1", "Coco Shampoo", "Personal Care", 12.0, 1);
        assert_eq!(product.unit_margin(), None);
        let product = product.with_cost_price(5.0);
        assert_eq!(product.unit_margin(), Some(7.0));
    }
}
