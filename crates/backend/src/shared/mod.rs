pub mod analytics;
pub mod config;
pub mod data;
pub mod format;
pub mod indicators;
pub mod logger;
