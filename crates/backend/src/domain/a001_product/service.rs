use contracts::dashboards::d400_overview::LowStockItem;
use contracts::domain::a001_product::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Category,
    Price,
    Stock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Clicking the active column flips direction; a new column starts
    /// ascending.
    pub fn toggled(self, active: SortField, clicked: SortField) -> Self {
        if active != clicked {
            return SortDirection::Asc;
        }
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Products whose name or category contains `term`, ignoring case. An empty
/// term matches everything.
pub fn search<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let term = term.trim().to_lowercase();
    products
        .iter()
        .filter(|p| {
            term.is_empty()
                || p.name.to_lowercase().contains(&term)
                || p.category.to_lowercase().contains(&term)
        })
        .collect()
}

/// Stable sort by one column.
pub fn sort(products: &mut [&Product], field: SortField, direction: SortDirection) {
    products.sort_by(|a, b| {
        let ordering = match field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            SortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            SortField::Stock => a.stock.cmp(&b.stock),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Set the stock of one product, returning the previous level.
pub fn update_stock(
    products: &mut [Product],
    id: &ProductId,
    new_stock: u32,
) -> Result<u32, InventoryError> {
    let product = products
        .iter_mut()
        .find(|p| &p.id == id)
        .ok_or_else(|| InventoryError::ProductNotFound(id.clone()))?;

    let previous = std::mem::replace(&mut product.stock, new_stock);
    tracing::info!(
        "stock of {} ({}) changed {} -> {}",
        product.name,
        product.id,
        previous,
        new_stock
    );
    Ok(previous)
}

/// Products with stock strictly below `threshold`, in catalogue order.
pub fn low_stock(products: &[Product], threshold: u32, target: u32) -> Vec<LowStockItem> {
    products
        .iter()
        .filter(|p| p.stock < threshold)
        .map(|p| LowStockItem {
            id: p.id.clone(),
            name: p.name.clone(),
            stock: p.stock,
            target,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed::seed_products;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_search_matches_name_or_category() {
        let products = seed_products();
        assert_eq!(search(&products, "").len(), 5);
        assert_eq!(names(&search(&products, "LOTION")), vec!["Coco Body Lotion"]);
        assert_eq!(
            names(&search(&products, "drinks")),
            vec!["Coconut Water"]
        );
        assert!(search(&products, "mango").is_empty());
    }

    #[test]
    fn test_sort_by_stock_descending() {
        let products = seed_products();
        let mut view = search(&products, "");
        sort(&mut view, SortField::Stock, SortDirection::Desc);
        let stocks: Vec<u32> = view.iter().map(|p| p.stock).collect();
        assert_eq!(stocks, vec![120, 78, 65, 45, 32]);
    }

    #[test]
    fn test_sort_by_price_and_name() {
        let products = seed_products();
        let mut view = search(&products, "personal");
        sort(&mut view, SortField::Price, SortDirection::Asc);
        assert_eq!(
            names(&view),
            vec!["Coconut Lip Balm", "Coco Shampoo", "Coco Body Lotion"]
        );
        sort(&mut view, SortField::Name, SortDirection::Asc);
        assert_eq!(
            names(&view),
            vec!["Coco Body Lotion", "Coco Shampoo", "Coconut Lip Balm"]
        );
    }

    #[test]
    fn test_toggle_direction() {
        let d = SortDirection::Asc;
        assert_eq!(d.toggled(SortField::Name, SortField::Name), SortDirection::Desc);
        assert_eq!(
            SortDirection::Desc.toggled(SortField::Name, SortField::Price),
            SortDirection::Asc
        );
    }

    #[test]
    fn test_update_stock() {
        let mut products = seed_products();
        let previous = update_stock(&mut products, &ProductId::new("p3"), 80).unwrap();
        assert_eq!(previous, 32);
        assert_eq!(products[2].stock, 80);

        let err = update_stock(&mut products, &ProductId::new("p9"), 1).unwrap_err();
        assert_eq!(err, InventoryError::ProductNotFound(ProductId::new("p9")));
    }

    #[test]
    fn test_low_stock() {
        let products = seed_products();
        let low = low_stock(&products, 35, 100);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, ProductId::new("p3"));
        assert_eq!(low[0].target, 100);
    }
}
