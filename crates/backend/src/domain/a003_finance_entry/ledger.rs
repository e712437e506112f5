use contracts::domain::a003_finance_entry::{FinanceEntry, FinanceEntryId, FinanceKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),

    #[error("category is required")]
    MissingCategory,

    #[error("finance entry not found: {0}")]
    NotFound(String),
}

/// Income and expense entries outside of sales, newest first.
#[derive(Debug, Clone, Default)]
pub struct FinanceLedger {
    entries: Vec<FinanceEntry>,
}

impl FinanceLedger {
    pub fn new(entries: Vec<FinanceEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FinanceEntry] {
        &self.entries
    }

    /// Validate and record an entry at the top of the ledger.
    pub fn add(&mut self, entry: FinanceEntry) -> Result<&FinanceEntry, LedgerError> {
        if !entry.amount.is_finite() || entry.amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(entry.amount));
        }
        if entry.category.trim().is_empty() {
            return Err(LedgerError::MissingCategory);
        }

        tracing::info!(
            "finance entry {} added: {:?} {:.2} ({})",
            entry.id.0,
            entry.kind,
            entry.amount,
            entry.category
        );
        self.entries.insert(0, entry);
        Ok(&self.entries[0])
    }

    pub fn remove(&mut self, id: &FinanceEntryId) -> Result<FinanceEntry, LedgerError> {
        let index = self
            .entries
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| LedgerError::NotFound(id.0.clone()))?;
        Ok(self.entries.remove(index))
    }

    pub fn total(&self, kind: FinanceKind) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.amount)
            .sum()
    }

    /// Income minus expenses.
    pub fn balance(&self) -> f64 {
        self.total(FinanceKind::Income) - self.total(FinanceKind::Expense)
    }

    /// Totals per category for one kind, in first-seen order.
    pub fn by_category(&self, kind: FinanceKind) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for entry in self.entries.iter().filter(|e| e.kind == kind) {
            match totals.iter_mut().find(|(c, _)| *c == entry.category) {
                Some((_, sum)) => *sum += entry.amount,
                None => totals.push((entry.category.clone(), entry.amount)),
            }
        }
        totals
    }
}
