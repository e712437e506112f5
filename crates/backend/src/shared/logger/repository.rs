use chrono::Utc;
use contracts::shared::logger::LogEntry;
use once_cell::sync::OnceCell;
use std::sync::{Mutex, MutexGuard};

/// Oldest entries are dropped past this size.
pub const MAX_ENTRIES: usize = 1000;

struct LogStore {
    next_id: i64,
    entries: Vec<LogEntry>,
}

static STORE: OnceCell<Mutex<LogStore>> = OnceCell::new();

fn store() -> MutexGuard<'static, LogStore> {
    let mutex = STORE.get_or_init(|| {
        Mutex::new(LogStore {
            next_id: 1,
            entries: Vec::new(),
        })
    });
    // a panicking writer cannot leave the store half-updated
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Добавить запись в лог (внутренняя функция)
pub fn log_event_internal(source: &str, category: &str, message: &str) -> LogEntry {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();

    let mut store = store();
    let entry = LogEntry {
        id: store.next_id,
        timestamp: now,
        source: source.to_string(),
        category: category.to_string(),
        message: message.to_string(),
    };
    store.next_id += 1;
    store.entries.push(entry.clone());
    if store.entries.len() > MAX_ENTRIES {
        let overflow = store.entries.len() - MAX_ENTRIES;
        store.entries.drain(..overflow);
    }
    entry
}

/// Все записи лога, новые сверху
pub fn get_all_logs() -> Vec<LogEntry> {
    store().entries.iter().rev().cloned().collect()
}

/// Очистить все записи лога
pub fn clear_all_logs() {
    store().entries.clear();
}
