use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

pub const DEFAULT_LOG_FILE: &str = "quiz_debug.log";

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Serializes tests that point the global logger at their own file.
#[cfg(test)]
pub(crate) static TEST_LOG_LOCK: Mutex<()> = Mutex::new(());

#[cfg(test)]
pub(crate) fn lock_for_test() -> std::sync::MutexGuard<'static, ()> {
    TEST_LOG_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Opens `path` for appending and sends all further lines there.
/// If the file cannot be opened the current target is kept.
pub fn init_at<P: AsRef<Path>>(path: P) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
        *logger = Some(file);
    }
}

pub fn log(message: &str) {
    write_line("INFO", message);
}

pub fn error(message: &str) {
    write_line("ERROR", message);
}

fn write_line(level: &str, message: &str) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if let Some(file) = logger.as_mut() {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let _ = writeln!(file, "[{}] {} {}", timestamp, level, message);
    }
}
