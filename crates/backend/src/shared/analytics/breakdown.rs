use contracts::domain::a001_product::{Product, ProductId};
use contracts::domain::a002_sale::Sale;
use contracts::shared::analytics::CategoryRevenue;
use std::collections::HashMap;

/// Category used for lines whose product is not in the catalogue.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Line revenue grouped by product category, largest first.
pub fn sales_by_category(sales: &[Sale], products: &[Product]) -> Vec<CategoryRevenue> {
    let category_of: HashMap<&ProductId, &str> = products
        .iter()
        .map(|p| (&p.id, p.category.as_str()))
        .collect();

    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for line in sales.iter().flat_map(|s| s.lines.iter()) {
        let category = category_of
            .get(&line.product_id)
            .copied()
            .unwrap_or(UNCATEGORIZED);
        if !totals.contains_key(category) {
            order.push(category);
        }
        *totals.entry(category).or_insert(0.0) += line.total;
    }

    let mut result: Vec<CategoryRevenue> = order
        .into_iter()
        .map(|category| CategoryRevenue {
            category: category.to_string(),
            total: totals[category],
        })
        .collect();
    // stable: ties keep first-seen order
    result.sort_by(|a, b| b.total.total_cmp(&a.total));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::testing::{day, line_for, sale_with};

    #[test]
    fn test_groups_lines_by_category() {
        let shampoo = Product::new("p1", "Coco Shampoo", "Personal Care", 10.0, 5);
        let oil = Product::new("p2", "Coconut Oil", "Foods", 8.0, 5);
        let balm = Product::new("p5", "Lip Balm", "Personal Care", 2.0, 5);
        let products = vec![shampoo.clone(), oil.clone(), balm.clone()];

        let mut sales = vec![
            sale_with(day(2024, 1, 1), &[(&shampoo, 1), (&oil, 1)]),
            sale_with(day(2024, 1, 2), &[(&balm, 3), (&oil, 2)]),
        ];
        sales[1].lines.push(line_for("unknown", 4));

        let result = sales_by_category(&sales, &products);
        assert_eq!(
            result,
            vec![
                CategoryRevenue {
                    category: "Foods".into(),
                    total: 24.0
                },
                CategoryRevenue {
                    category: "Personal Care".into(),
                    total: 16.0
                },
                CategoryRevenue {
                    category: UNCATEGORIZED.into(),
                    total: 4.0
                },
            ]
        );
    }
}
