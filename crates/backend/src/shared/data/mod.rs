pub mod seed;

use chrono::NaiveDate;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_sale::Sale;
use contracts::domain::a003_finance_entry::FinanceEntry;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the back office works on, held in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub sales: Vec<Sale>,
    #[serde(default, rename = "financeEntries")]
    pub finance_entries: Vec<FinanceEntry>,
}

/// Read a dataset from a JSON file.
pub fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let contents = std::fs::read_to_string(path)?;
    let dataset: Dataset = serde_json::from_str(&contents)?;
    tracing::info!(
        "Loaded dataset from {}: {} products, {} sales, {} finance entries",
        path.display(),
        dataset.products.len(),
        dataset.sales.len(),
        dataset.finance_entries.len()
    );
    Ok(dataset)
}

/// Dataset from `path` when given, else the built-in seed data dated
/// relative to `today`.
pub fn load_or_seed(path: Option<&Path>, today: NaiveDate) -> anyhow::Result<Dataset> {
    match path {
        Some(p) => load_dataset(p),
        None => {
            tracing::info!("Using built-in seed dataset");
            Ok(seed::seed_dataset(today))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_json_keeps_records() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let seeded = seed::seed_dataset(today);

        let json = serde_json::to_string(&seeded).unwrap();
        assert!(json.contains("\"financeEntries\""));
        assert!(json.contains("\"paymentMethod\":\"credit\""));

        let parsed: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.products.len(), seeded.products.len());
        assert_eq!(parsed.sales.len(), seeded.sales.len());
        assert_eq!(parsed.finance_entries.len(), seeded.finance_entries.len());
        assert_eq!(parsed.sales[1].id, seeded.sales[1].id);
        assert_eq!(parsed.sales[1].date, seeded.sales[1].date);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let parsed: Dataset = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert!(parsed.sales.is_empty());
        assert!(parsed.finance_entries.is_empty());
    }

    #[test]
    fn test_load_dataset_reports_missing_file() {
        let missing = Path::new("definitely/not/here.json");
        assert!(load_dataset(missing).is_err());
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(load_or_seed(None, today).unwrap().products.len(), 5);
    }
}
