//! Final line assembly
//!
//! Composes `LEVEL:[TIMESTAMP]FILENAME:LINE:[USERID: ]MESSAGE` per
//! destination. The shape is a compatibility contract with downstream log
//! parsers; changing it breaks them.

use crate::core::color::{paint_level, strip_ansi};
use crate::core::config::LoggerConfig;
use crate::core::record::LogRecord;

/// One record rendered for each active destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledLine {
    /// Colorized per config; `None` when terminal output is disabled.
    pub terminal: Option<String>,
    /// Always plain, ANSI-stripped; `None` when no file is configured.
    pub file: Option<String>,
}

/// Assemble the destination variants for a record.
///
/// `body` is the fully rendered message (substitution, uid prefix,
/// truncation, sanitization already applied). The two variants differ only
/// in coloring: the terminal line wraps the level name when colors are on,
/// the file line is stripped of any ANSI content, the body's included.
pub fn assemble(record: &LogRecord<'_>, config: &LoggerConfig, body: &str) -> AssembledLine {
    let timestamp = config.zone.render(record.timestamp);
    let suffix = format!(
        ":[{}]{}:{}:{}",
        timestamp,
        record.call_site.file(),
        record.call_site.line(),
        body
    );

    let terminal = config.terminal.then(|| {
        let line = format!("{}{}", paint_level(record.level, config.use_colors), suffix);
        if config.use_colors {
            line
        } else {
            strip_ansi(&line)
        }
    });

    let file = config
        .file_path
        .is_some()
        .then(|| strip_ansi(&format!("{}{}", record.level.to_str(), suffix)));

    AssembledLine { terminal, file }
}
