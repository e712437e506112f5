pub mod aggregate;

pub use aggregate::{Sale, SaleId, SaleLine};
