//! Logger handle and the emission pipeline
//!
//! A [`Logger`] is a cheap clone over shared per-name state owned by the
//! registry. Emission is synchronous: gate on level, render the body,
//! assemble per-destination lines, write. Configuration problems are loud
//! (`Result` from the registry); per-call problems are quiet — a bad
//! template degrades to a fallback body, a failed file write is reported to
//! stderr, and the host application never sees an error from a log call.

use crate::core::args::{LogArg, UserContext};
use crate::core::assembler;
use crate::core::call_site::CallSite;
use crate::core::config::LoggerConfig;
use crate::core::error::Result;
use crate::core::formatter;
use crate::core::log_level::Level;
use crate::core::record::{sanitize_body, LogRecord};
use crate::sinks::{FileSink, TerminalSink};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// Shared state behind every handle for one logger name.
///
/// Config reads snapshot under the read lock; reconfiguration swaps the
/// whole value under the write lock, so emission never observes a partially
/// updated config.
#[derive(Debug)]
pub(crate) struct SharedState {
    pub(crate) config: RwLock<LoggerConfig>,
    pub(crate) file: Mutex<Option<FileSink>>,
}

/// Per-call overrides for a single log call.
///
/// Unset fields fall back to the logger's configuration. A zero
/// `truncate_length` is ignored rather than honored.
///
/// # Example
///
/// ```no_run
/// use ctxlog::{CallOptions, LoggerOptions, LoggerRegistry, UserContext};
///
/// let registry = LoggerRegistry::new();
/// let logger = registry.get_logger("api", LoggerOptions::new()).unwrap();
/// logger.info_with(
///     "order %s accepted",
///     &["ord-77".into()],
///     CallOptions::new().user_context(UserContext::with_uid("user123")),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    user_context: Option<UserContext>,
    json_format: Option<bool>,
    truncate: Option<bool>,
    truncate_length: Option<usize>,
}

impl CallOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an authentication context; its `uid` prefixes the line.
    #[must_use]
    pub fn user_context(mut self, context: UserContext) -> Self {
        self.user_context = Some(context);
        self
    }

    /// Override JSON rendering of arguments for this call.
    #[must_use]
    pub fn json_format(mut self, enabled: bool) -> Self {
        self.json_format = Some(enabled);
        self
    }

    /// Override truncation for this call.
    #[must_use]
    pub fn truncate(mut self, enabled: bool) -> Self {
        self.truncate = Some(enabled);
        self
    }

    /// Override the truncation limit for this call.
    #[must_use]
    pub fn truncate_length(mut self, length: usize) -> Self {
        self.truncate_length = Some(length);
        self
    }
}

/// Handle to a registry-configured logger.
#[derive(Clone, Debug)]
pub struct Logger {
    shared: Arc<SharedState>,
}

impl Logger {
    pub(crate) fn from_shared(shared: Arc<SharedState>) -> Self {
        Self { shared }
    }

    /// The logger's registry name.
    pub fn name(&self) -> String {
        self.shared.config.read().name.clone()
    }

    /// The current minimum level.
    pub fn level(&self) -> Level {
        self.shared.config.read().min_level
    }

    /// The current minimum level's canonical name.
    pub fn level_name(&self) -> &'static str {
        self.level().to_str()
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> LoggerConfig {
        self.shared.config.read().clone()
    }

    #[track_caller]
    pub fn debug(&self, template: &str, args: &[LogArg]) {
        self.emit(Level::Debug, template, args, CallSite::here(), &CallOptions::default());
    }

    #[track_caller]
    pub fn info(&self, template: &str, args: &[LogArg]) {
        self.emit(Level::Info, template, args, CallSite::here(), &CallOptions::default());
    }

    #[track_caller]
    pub fn warning(&self, template: &str, args: &[LogArg]) {
        self.emit(Level::Warning, template, args, CallSite::here(), &CallOptions::default());
    }

    #[track_caller]
    pub fn error(&self, template: &str, args: &[LogArg]) {
        self.emit(Level::Error, template, args, CallSite::here(), &CallOptions::default());
    }

    #[track_caller]
    pub fn critical(&self, template: &str, args: &[LogArg]) {
        self.emit(Level::Critical, template, args, CallSite::here(), &CallOptions::default());
    }

    #[track_caller]
    pub fn log(&self, level: Level, template: &str, args: &[LogArg]) {
        self.emit(level, template, args, CallSite::here(), &CallOptions::default());
    }

    #[track_caller]
    pub fn debug_with(&self, template: &str, args: &[LogArg], options: CallOptions) {
        self.emit(Level::Debug, template, args, CallSite::here(), &options);
    }

    #[track_caller]
    pub fn info_with(&self, template: &str, args: &[LogArg], options: CallOptions) {
        self.emit(Level::Info, template, args, CallSite::here(), &options);
    }

    #[track_caller]
    pub fn warning_with(&self, template: &str, args: &[LogArg], options: CallOptions) {
        self.emit(Level::Warning, template, args, CallSite::here(), &options);
    }

    #[track_caller]
    pub fn error_with(&self, template: &str, args: &[LogArg], options: CallOptions) {
        self.emit(Level::Error, template, args, CallSite::here(), &options);
    }

    #[track_caller]
    pub fn critical_with(&self, template: &str, args: &[LogArg], options: CallOptions) {
        self.emit(Level::Critical, template, args, CallSite::here(), &options);
    }

    #[track_caller]
    pub fn log_with(&self, level: Level, template: &str, args: &[LogArg], options: CallOptions) {
        self.emit(level, template, args, CallSite::here(), &options);
    }

    fn emit(
        &self,
        level: Level,
        template: &str,
        args: &[LogArg],
        call_site: CallSite,
        options: &CallOptions,
    ) {
        let config = self.shared.config.read().clone();

        // Filtered-out records cost no formatting, rendering, or writes.
        if level < config.min_level {
            return;
        }

        let record = LogRecord::new(level, template, args, options.user_context.as_ref(), call_site);

        let json_format = options.json_format.unwrap_or(config.json_format);
        let truncate = options.truncate.unwrap_or(config.truncate);
        let truncate_length = options
            .truncate_length
            .filter(|&length| length > 0)
            .unwrap_or(config.truncate_length);

        let body = formatter::render_body(
            record.template,
            record.args,
            record.user_context,
            json_format,
            truncate,
            truncate_length,
        );
        let body = sanitize_body(&body);

        let lines = assembler::assemble(&record, &config, &body);

        if let Some(line) = lines.terminal {
            TerminalSink::new().write_line(level, &line);
        }

        if let Some(line) = lines.file {
            let sink = self.shared.file.lock();
            if let Some(sink) = sink.as_ref() {
                if let Err(e) = sink.write_line(&line) {
                    eprintln!(
                        "[ctxlog] failed to write log line to '{}': {}",
                        sink.path().display(),
                        e
                    );
                }
            }
        }
    }

    /// Flush the file destination, if any.
    pub fn flush(&self) -> Result<()> {
        let sink = self.shared.file.lock();
        if let Some(sink) = sink.as_ref() {
            sink.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LoggerOptions;
    use crate::core::registry::LoggerRegistry;
    use std::fs;
    use tempfile::TempDir;

    fn file_logger(dir: &TempDir, options: LoggerOptions) -> (Logger, std::path::PathBuf) {
        let path = dir.path().join("test.log");
        let registry = LoggerRegistry::new();
        let logger = registry
            .get_logger("test", options.file_path(&path).terminal(false))
            .unwrap();
        (logger, path)
    }

    #[test]
    fn test_levels_below_minimum_write_nothing() {
        let dir = TempDir::new().unwrap();
        let (logger, path) = file_logger(&dir, LoggerOptions::new().level(Level::Warning));

        logger.debug("dropped", &[]);
        logger.info("dropped", &[]);
        logger.warning("kept", &[]);
        logger.error("kept", &[]);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!content.contains("dropped"));
    }

    #[test]
    fn test_substitution_reaches_file() {
        let dir = TempDir::new().unwrap();
        let (logger, path) = file_logger(&dir, LoggerOptions::new().timezone("UTC"));

        logger.info("Value: %s, Count: %d", &["test".into(), 42.into()]);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Value: test, Count: 42"));
    }

    #[test]
    fn test_format_mismatch_still_emits() {
        let dir = TempDir::new().unwrap();
        let (logger, path) = file_logger(&dir, LoggerOptions::new());

        logger.info("two %s placeholders %s", &["one".into()]);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("(format error:"));
    }

    #[test]
    fn test_caller_location_is_this_file() {
        let dir = TempDir::new().unwrap();
        let (logger, path) = file_logger(&dir, LoggerOptions::new());

        logger.info("where am I", &[]);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("logger.rs:"), "got: {}", content);
    }

    #[test]
    fn test_per_call_overrides() {
        let dir = TempDir::new().unwrap();
        let (logger, path) = file_logger(
            &dir,
            LoggerOptions::new().truncate(true).truncate_length(10_000),
        );

        logger.info_with(
            &"A".repeat(100),
            &[],
            CallOptions::new().truncate_length(30),
        );
        logger.info_with(
            &"B".repeat(100),
            &[],
            CallOptions::new().truncate(false),
        );

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[0].contains("...[truncated]"));
        assert!(lines[1].contains(&"B".repeat(100)));
    }

    #[test]
    fn test_user_context_prefix_in_line() {
        let dir = TempDir::new().unwrap();
        let (logger, path) = file_logger(&dir, LoggerOptions::new());

        logger.info_with(
            "Action",
            &[],
            CallOptions::new().user_context(UserContext::with_uid("user123")),
        );

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(":user123: Action"));
    }

    #[test]
    fn test_multiline_message_stays_one_line() {
        let dir = TempDir::new().unwrap();
        let (logger, path) = file_logger(&dir, LoggerOptions::new());

        logger.info("User login\nERROR fake injected", &[]);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("\\n"));
    }

    #[test]
    fn test_accessors() {
        let dir = TempDir::new().unwrap();
        let (logger, _) = file_logger(&dir, LoggerOptions::new().level(Level::Error));

        assert_eq!(logger.name(), "test");
        assert_eq!(logger.level(), Level::Error);
        assert_eq!(logger.level_name(), "ERROR");
        assert_eq!(logger.config().min_level, Level::Error);
    }
}
