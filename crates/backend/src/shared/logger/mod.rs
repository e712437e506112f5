pub mod repository;

use std::path::Path;

use repository::log_event_internal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber: stdout plus an ANSI-free file
/// `backoffice.log` inside `log_dir`.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing(log_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backoffice.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

/// Логирование события на сервере
///
/// The entry is kept in the in-memory system log and mirrored to tracing.
///
/// # Примеры
/// ```
/// pos_backoffice::shared::logger::log("startup", "Back office started");
/// ```
pub fn log(category: &str, message: &str) {
    let entry = log_event_internal("server", category, message);
    tracing::info!("[{}] {}", entry.category, entry.message);
}
