use contracts::shared::analytics::DayOrder;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::shared::analytics::StockPolicy;
use chrono::NaiveDate;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Days to forecast after today
    pub horizon_days: u32,
    /// Divisor used to turn units sold into daily velocity
    pub history_window_days: u32,
    /// Days of sales the recommended stock should cover
    pub target_coverage_days: u32,
    /// How distinct sales days are indexed for the trend line
    pub day_order: DayOrder,
    /// Count only sales inside the trailing history window
    pub filter_history_window: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            horizon_days: 7,
            history_window_days: 30,
            target_coverage_days: 14,
            day_order: DayOrder::Chronological,
            filter_history_window: false,
        }
    }
}

impl AnalyticsConfig {
    pub fn stock_policy(&self, today: NaiveDate) -> StockPolicy {
        StockPolicy {
            history_window_days: self.history_window_days,
            target_coverage_days: self.target_coverage_days,
            window_end: self.filter_history_window.then_some(today),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InventoryConfig {
    /// Products with stock strictly below this are low
    pub low_stock_threshold: u32,
    /// Level the shelf is refilled to
    pub low_stock_target: u32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: 35,
            low_stock_target: 100,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct DataConfig {
    /// JSON dataset; the built-in seed data is used when absent
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: "target/logs".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[analytics]
horizon_days = 7
history_window_days = 30
target_coverage_days = 14
day_order = "chronological"
filter_history_window = false

[inventory]
low_stock_threshold = 35
low_stock_target = 100

[data]

[logging]
dir = "target/logs"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                return load_config_from(&config_path);
            } else {
                tracing::debug!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

/// Load the configuration once and keep it for the process lifetime.
pub fn initialize_config() -> anyhow::Result<&'static Config> {
    CONFIG.get_or_try_init(load_config)
}

/// Resolve a configured path: absolute as is, relative against the
/// executable directory, else against the current directory.
pub fn resolve_path(path: &str) -> PathBuf {
    let p = Path::new(path);

    if p.is_absolute() {
        return p.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let candidate = exe_dir.join(p);
            if candidate.exists() {
                return candidate;
            }
        }
    }

    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.analytics.horizon_days, 7);
        assert_eq!(config.data.path, None);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [analytics]
            day_order = "first_seen"
            filter_history_window = true
            "#,
        )
        .unwrap();
        assert_eq!(config.analytics.day_order, DayOrder::FirstSeen);
        assert_eq!(config.analytics.history_window_days, 30);
        assert_eq!(config.inventory, InventoryConfig::default());
        assert_eq!(config.logging.dir, "target/logs");
    }

    #[test]
    fn test_stock_policy_window_follows_flag() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut analytics = AnalyticsConfig::default();
        assert_eq!(analytics.stock_policy(today).window_end, None);

        analytics.filter_history_window = true;
        let policy = analytics.stock_policy(today);
        assert_eq!(policy.window_end, Some(today));
        assert_eq!(policy.target_coverage_days, 14);
    }
}
