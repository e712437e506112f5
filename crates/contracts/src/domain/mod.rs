pub mod a001_product;
pub mod a002_sale;
pub mod a003_finance_entry;
