pub mod aggregate;

pub use aggregate::{FinanceEntry, FinanceEntryId, FinanceKind};
