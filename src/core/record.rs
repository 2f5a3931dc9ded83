//! Per-call log record

use crate::core::args::{LogArg, UserContext};
use crate::core::call_site::CallSite;
use crate::core::log_level::Level;
use chrono::{DateTime, Utc};

/// One log call, captured before formatting. Ephemeral; the assembled lines
/// are derived from it and the record itself is never stored.
#[derive(Debug)]
pub struct LogRecord<'a> {
    pub level: Level,
    pub template: &'a str,
    pub args: &'a [LogArg],
    pub user_context: Option<&'a UserContext>,
    pub call_site: CallSite,
    pub timestamp: DateTime<Utc>,
}

impl<'a> LogRecord<'a> {
    pub fn new(
        level: Level,
        template: &'a str,
        args: &'a [LogArg],
        user_context: Option<&'a UserContext>,
        call_site: CallSite,
    ) -> Self {
        Self {
            level,
            template,
            args,
            user_context,
            call_site,
            timestamp: Utc::now(),
        }
    }

    /// Pin the timestamp, for deterministic assembly in tests.
    #[must_use]
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Escape line breaks and tabs so one record is always exactly one line.
///
/// Keeps attacker-controlled message content from injecting fake records
/// into line-oriented log files.
pub(crate) fn sanitize_body(body: &str) -> String {
    if !body.contains(['\n', '\r', '\t']) {
        return body.to_string();
    }
    body.replace('\n', "\\n").replace('\r', "\\r").replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_escapes_line_breaks() {
        let out = sanitize_body("User login\nERROR fake injected\r\tdone");
        assert_eq!(out, "User login\\nERROR fake injected\\r\\tdone");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_sanitize_clean_body_unchanged() {
        assert_eq!(sanitize_body("plain message"), "plain message");
    }

    #[test]
    fn test_record_carries_call_site() {
        let args: Vec<LogArg> = Vec::new();
        let record = LogRecord::new(
            Level::Info,
            "hello",
            &args,
            None,
            CallSite::new("app.rs", 12),
        );
        assert_eq!(record.call_site.to_string(), "app.rs:12");
        assert_eq!(record.level, Level::Info);
    }
}
