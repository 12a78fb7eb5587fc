use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum LogLevel {
    Info(Color),
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Cyan,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
        }
    }
}

/// Appends timestamped lines to `<dir>/<name>.log` and optionally echoes
/// them to stdout with ANSI colors.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: Option<PathBuf>,
    to_console: bool,
}

impl Logger {
    /// Creates a new `Logger` writing to `<log_dir>/<name>.log`.
    ///
    /// # Parameters
    /// - `log_dir`: Directory for the log file. Created if missing.
    /// - `name`: Base name of the log file.
    /// - `to_console`: Whether every line is also printed to stdout.
    ///
    /// The file is truncated on creation.
    pub fn new(log_dir: &Path, name: &str, to_console: bool) -> Result<Self, LoggerError> {
        if log_dir.exists() && !log_dir.is_dir() {
            return Err(LoggerError::InvalidPath(format!(
                "{} is not a directory.",
                log_dir.display()
            )));
        }
        std::fs::create_dir_all(log_dir)?;

        let sanitized = name.replace(['/', '\\', ':'], "_");
        let log_file = log_dir.join(format!("{}.log", sanitized));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)?;

        Ok(Logger {
            log_file: Some(log_file),
            to_console,
        })
    }

    /// A logger with no backing file. Lines only go to stdout.
    pub fn console() -> Self {
        Logger {
            log_file: None,
            to_console: true,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    fn log(&self, level: LogLevel, message: &str) -> Result<(), LoggerError> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let log_message = match &level {
            LogLevel::Info(_) => format!("[INFO] [{}]: {}\n", timestamp, message),
            LogLevel::Warn => format!("[WARN] [{}]: {}\n", timestamp, message),
            LogLevel::Error => format!("[ERROR] [{}]: {}\n", timestamp, message),
        };

        if self.to_console {
            let colored_message = match &level {
                LogLevel::Info(color) => format!("{}{}\x1b[0m", color.to_ansi_code(), log_message),
                LogLevel::Warn => format!("\x1b[93m{}\x1b[0m", log_message),
                LogLevel::Error => format!("\x1b[91m{}\x1b[0m", log_message),
            };
            let mut stdout = io::stdout().lock();
            stdout.write_all(colored_message.as_bytes())?;
            stdout.flush()?;
        }

        if let Some(log_file) = &self.log_file {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            file.write_all(log_message.as_bytes())?;
            file.flush()?;
        }

        Ok(())
    }

    /// Logs an informational message, colored with `color` on the console.
    pub fn info(&self, message: &str, color: Color) -> Result<(), LoggerError> {
        self.log(LogLevel::Info(color), message)
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, message)
    }

    /// Logs an error message.
    pub fn error(&self, message: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, message)
    }
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(std::io::Error),
    InvalidPath(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
            LoggerError::InvalidPath(msg) => write!(f, "Invalid Path: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
            LoggerError::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flight_map_logger_{}_{}", tag, std::process::id()))
    }

    #[test]
    fn test_logger_writes_levels_to_file() {
        let log_dir = scratch_dir("levels");
        let logger = Logger::new(&log_dir, "flight_map", false).expect("Failed to create logger");

        logger
            .info("refresher started", Color::Cyan)
            .expect("Failed to log info");
        logger.warn("no access token").expect("Failed to log warn");
        logger.error("cycle failed").expect("Failed to log error");

        let contents =
            fs::read_to_string(log_dir.join("flight_map.log")).expect("Failed to read log file");
        assert!(contents.contains("[INFO]"));
        assert!(contents.contains("refresher started"));
        assert!(contents.contains("[WARN]"));
        assert!(contents.contains("[ERROR]"));
        assert!(!contents.contains("\x1b["), "file lines carry no color codes");

        fs::remove_dir_all(log_dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_logger_creates_missing_directory() {
        let log_dir = scratch_dir("nested").join("deeper");
        let logger = Logger::new(&log_dir, "a:b", false).expect("Failed to create logger");

        assert_eq!(logger.path(), Some(log_dir.join("a_b.log").as_path()));
        assert!(log_dir.join("a_b.log").is_file());

        fs::remove_dir_all(log_dir.parent().unwrap()).expect("Failed to remove test directory");
    }

    #[test]
    fn test_file_path_is_rejected() {
        let dir = scratch_dir("file");
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("not_a_dir");
        fs::write(&file, b"x").unwrap();

        let result = Logger::new(&file, "flight_map", false);
        assert!(matches!(result, Err(LoggerError::InvalidPath(_))));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_console_logger_has_no_file() {
        let logger = Logger::console();
        assert!(logger.path().is_none());
        assert!(logger.info("hello", Color::Green).is_ok());
    }
}
