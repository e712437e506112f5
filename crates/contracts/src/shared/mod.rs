pub mod analytics;
pub mod indicators;
pub mod logger;
