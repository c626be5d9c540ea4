use anyhow::Result;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::utils::ensure_dir;

/// Session file logger: one `session_<timestamp>.log` per process.
pub struct Logger {
    log_file: PathBuf,
}

impl Logger {
    pub fn new(log_dir: &str) -> Result<Self> {
        let dir = PathBuf::from(log_dir);
        ensure_dir(&dir)?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let log_file = dir.join(format!("session_{}.log", timestamp));

        Ok(Self { log_file })
    }

    pub fn log(&self, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(file, "[{}] {}", timestamp, message)?;
        Ok(())
    }

    pub fn log_health(&self, bot_enabled: bool) -> Result<()> {
        self.log(&format!("HEALTH: bot_enabled={}", bot_enabled))
    }

    pub fn log_toggle(&self, maintenance_on: bool) -> Result<()> {
        let mode = if maintenance_on { "on" } else { "off" };
        self.log(&format!("MAINTENANCE {}", mode))
    }

    pub fn log_error(&self, error: &str) -> Result<()> {
        self.log(&format!("ERROR: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_logger_creation() {
        let test_log_dir = "test_logs_temp";
        let logger = Logger::new(test_log_dir);
        assert!(logger.is_ok());

        let logger = logger.unwrap();
        // Check that the parent directory exists
        assert!(logger.log_file.parent().unwrap().exists());

        // Clean up
        let _ = fs::remove_dir_all(test_log_dir);
    }

    #[test]
    fn test_logger_basic_log() {
        let test_log_dir = "test_logs_temp2";
        let logger = Logger::new(test_log_dir).unwrap();

        let result = logger.log("Test message");
        assert!(result.is_ok());

        // Verify log file has content
        let content = fs::read_to_string(&logger.log_file).unwrap();
        assert!(content.contains("Test message"));

        // Clean up
        let _ = fs::remove_dir_all(test_log_dir);
    }

    #[test]
    fn test_logger_health_and_toggle_entries() {
        let test_log_dir = "test_logs_temp3";
        let logger = Logger::new(test_log_dir).unwrap();

        let _ = logger.log_health(true);
        let _ = logger.log_toggle(false);
        let _ = logger.log_error("boom");

        let content = fs::read_to_string(&logger.log_file).unwrap();
        assert!(content.contains("HEALTH: bot_enabled=true"));
        assert!(content.contains("MAINTENANCE off"));
        assert!(content.contains("ERROR: boom"));

        // Clean up
        let _ = fs::remove_dir_all(test_log_dir);
    }
}
