use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinanceEntryId(pub String);

impl FinanceEntryId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Direction of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinanceKind {
    Income,
    Expense,
}

/// Ledger record outside of sales: rent, salaries, owner investments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceEntry {
    pub id: FinanceEntryId,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: FinanceKind,
}

impl FinanceEntry {
    pub fn new(
        date: DateTime<Utc>,
        amount: f64,
        category: &str,
        description: &str,
        kind: FinanceKind,
    ) -> Self {
        Self {
            id: FinanceEntryId::new_v4(),
            date,
            amount,
            category: category.to_string(),
            description: description.to_string(),
            kind,
        }
    }
}
