use contracts::shared::indicators::*;

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn sales_today() -> IndicatorId {
        IndicatorId::new("sales_today")
    }
    pub fn items_sold_today() -> IndicatorId {
        IndicatorId::new("items_sold_today")
    }
    pub fn low_stock_count() -> IndicatorId {
        IndicatorId::new("low_stock_count")
    }
    pub fn profit_margin() -> IndicatorId {
        IndicatorId::new("profit_margin")
    }
}

pub fn overview_set_id() -> IndicatorSetId {
    IndicatorSetId::new("store_overview")
}

/// Build the full catalogue of indicators + sets.
pub fn build_catalog() -> IndicatorCatalogResponse {
    let indicators = vec![
        IndicatorMeta {
            id: ids::sales_today(),
            label: "Total Sales (Today)".into(),
            short_label: Some("Sales".into()),
            icon: "dollar-sign".into(),
            format: ValueFormat::Money {
                currency: "$".into(),
            },
            description: Some("Sum of sale amounts for the day".into()),
        },
        IndicatorMeta {
            id: ids::items_sold_today(),
            label: "Items Sold (Today)".into(),
            short_label: Some("Items".into()),
            icon: "shopping-cart".into(),
            format: ValueFormat::Integer,
            description: Some("Units across all sale lines for the day".into()),
        },
        IndicatorMeta {
            id: ids::low_stock_count(),
            label: "Low Stock Items".into(),
            short_label: None,
            icon: "package".into(),
            format: ValueFormat::Integer,
            description: Some("Products below the low-stock threshold".into()),
        },
        IndicatorMeta {
            id: ids::profit_margin(),
            label: "Profit Margin".into(),
            short_label: Some("Margin".into()),
            icon: "trending-up".into(),
            format: ValueFormat::Percent { decimals: 0 },
            description: Some("(Revenue - cost) / revenue over lines with a known cost price".into()),
        },
    ];

    let sets = vec![IndicatorSetMeta {
        id: overview_set_id(),
        label: "Store overview".into(),
        indicators: vec![
            ids::sales_today(),
            ids::items_sold_today(),
            ids::low_stock_count(),
            ids::profit_margin(),
        ],
        columns: 4,
    }];

    IndicatorCatalogResponse { indicators, sets }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_set_member_has_metadata() {
        let catalog = build_catalog();
        for set in &catalog.sets {
            for id in &set.indicators {
                assert!(catalog.indicators.iter().any(|m| &m.id == id));
            }
        }
    }
}
