//! Logging infrastructure.
//!
//! The terminal owns stdout while the wizard runs, so log output goes to
//! a daily rolling file under the configured directory, never the
//! console.

use std::io;
use std::time::{Duration, SystemTime};

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Rolling log file prefix; the appender adds a date suffix.
pub const LOG_FILE_PREFIX: &str = "savory.log";

/// Days a daily log file is kept before cleanup removes it.
pub const LOG_RETENTION_DAYS: u64 = 7;

/// Initialize the tracing subscriber with a daily rolling file writer.
pub fn init(config: &Config) -> io::Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(file_appender)
        .init();
    Ok(())
}

/// Remove aged rolling log files from `dir`, returning how many were
/// deleted. Files are matched by prefix and aged by modification time.
pub fn cleanup_old_logs(dir: &str, keep_days: u64) -> io::Result<usize> {
    let cutoff = SystemTime::now() - Duration::from_secs(keep_days * 24 * 60 * 60);
    let mut removed = 0;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.starts_with(LOG_FILE_PREFIX) {
            continue;
        }
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        if metadata.modified()? < cutoff {
            std::fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_removes_only_aged_rolling_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("savory.log.2025-01-01"), "old").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "keep").unwrap();
        let dir_str = dir.path().to_str().unwrap();

        // Fresh files survive a 7-day retention
        assert_eq!(cleanup_old_logs(dir_str, 7).unwrap(), 0);

        // Zero retention removes every rolling file, nothing else
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(cleanup_old_logs(dir_str, 0).unwrap(), 1);
        assert!(dir.path().join("notes.txt").exists());
        assert!(!dir.path().join("savory.log.2025-01-01").exists());
    }

    #[test]
    fn test_cleanup_missing_dir_errors() {
        assert!(cleanup_old_logs("/nonexistent/savory-logs", 7).is_err());
    }
}
