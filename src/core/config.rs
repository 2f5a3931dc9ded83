//! Logger configuration
//!
//! Options are validated in full before any shared state changes hands; a
//! bad timezone or a zero truncation limit fails the configuring call and
//! leaves no half-configured logger behind.

use crate::core::error::{LogError, Result};
use crate::core::log_level::Level;
use crate::core::timezone::ZoneHandle;
use std::path::PathBuf;

pub const DEFAULT_FILE_PATH: &str = "logs/app.log";
pub const DEFAULT_TRUNCATE_LENGTH: usize = 10_000;

/// Validated, immutable-per-generation configuration for one logger name.
/// Reconfiguration replaces the whole value atomically.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub name: String,
    pub min_level: Level,
    pub file_path: Option<PathBuf>,
    pub terminal: bool,
    /// IANA identifier as supplied; `None` means the host zone.
    pub timezone_id: Option<String>,
    /// Resolved at construction so emission never sees an invalid zone.
    pub zone: ZoneHandle,
    pub use_colors: bool,
    pub truncate: bool,
    pub truncate_length: usize,
    pub json_format: bool,
}

/// Options for [`LoggerRegistry::get_logger`](crate::LoggerRegistry::get_logger),
/// built fluently.
///
/// # Example
///
/// ```
/// use ctxlog::{Level, LoggerOptions};
///
/// let options = LoggerOptions::new()
///     .level(Level::Debug)
///     .timezone("UTC")
///     .use_colors(false)
///     .no_file();
/// ```
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    level: Level,
    file_path: Option<PathBuf>,
    terminal: bool,
    timezone: Option<String>,
    use_colors: bool,
    truncate: bool,
    truncate_length: usize,
    json_format: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: Level::Info,
            file_path: Some(PathBuf::from(DEFAULT_FILE_PATH)),
            terminal: true,
            timezone: None,
            use_colors: true,
            truncate: true,
            truncate_length: DEFAULT_TRUNCATE_LENGTH,
            json_format: false,
        }
    }
}

impl LoggerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum level; records below it are not emitted.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the log file path. Parent directories are created on open.
    #[must_use]
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Disable file output entirely.
    #[must_use]
    pub fn no_file(mut self) -> Self {
        self.file_path = None;
        self
    }

    /// Enable or disable terminal output.
    #[must_use]
    pub fn terminal(mut self, enabled: bool) -> Self {
        self.terminal = enabled;
        self
    }

    /// Set the IANA timezone identifier for timestamp rendering.
    /// Unset, timestamps render in the host machine's zone.
    #[must_use]
    pub fn timezone(mut self, id: impl Into<String>) -> Self {
        self.timezone = Some(id.into());
        self
    }

    /// Enable or disable level colors on the terminal destination.
    #[must_use]
    pub fn use_colors(mut self, enabled: bool) -> Self {
        self.use_colors = enabled;
        self
    }

    /// Enable or disable message truncation.
    #[must_use]
    pub fn truncate(mut self, enabled: bool) -> Self {
        self.truncate = enabled;
        self
    }

    /// Set the truncation limit in characters. Must be greater than zero.
    #[must_use]
    pub fn truncate_length(mut self, length: usize) -> Self {
        self.truncate_length = length;
        self
    }

    /// Render every template argument as JSON before substitution.
    #[must_use]
    pub fn json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }

    /// Validate and freeze into a [`LoggerConfig`].
    pub(crate) fn into_config(self, name: &str) -> Result<LoggerConfig> {
        if self.truncate_length == 0 {
            return Err(LogError::config(
                "truncate_length",
                "must be greater than zero",
            ));
        }
        let zone = ZoneHandle::resolve(self.timezone.as_deref())?;

        Ok(LoggerConfig {
            name: name.to_string(),
            min_level: self.level,
            file_path: self.file_path,
            terminal: self.terminal,
            timezone_id: self.timezone,
            zone,
            use_colors: self.use_colors,
            truncate: self.truncate,
            truncate_length: self.truncate_length,
            json_format: self.json_format,
        })
    }
}
