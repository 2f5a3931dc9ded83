//! Caller location capture
//!
//! Log lines report the file and line of the application code that called a
//! logging method, not the logger's own internals. Capture rides on
//! `#[track_caller]`: every public method between the application and
//! [`CallSite::here`] carries the attribute, so the location the compiler
//! hands us is the first frame outside this crate. There is no frame count
//! to keep in sync with the call-chain depth.

use std::fmt;
use std::panic::Location;
use std::path::Path;

/// File name and line of a log call's origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    file: String,
    line: u32,
}

impl CallSite {
    /// Capture the caller of the nearest non-`track_caller` frame.
    #[track_caller]
    pub fn here() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }

    /// Build a call site from explicit parts. Only the final path component
    /// of `file` is kept; log lines carry base names, not full paths.
    pub fn new(file: &str, line: u32) -> Self {
        let file = Path::new(file)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.to_string());
        Self { file, line }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_here_reports_this_file() {
        let site = CallSite::here();
        assert_eq!(site.file(), "call_site.rs");
        assert!(site.line() > 0);
    }

    #[track_caller]
    fn capture_through_helper() -> CallSite {
        CallSite::here()
    }

    #[test]
    fn test_track_caller_skips_intermediate_frames() {
        let expected = line!() + 1;
        let site = capture_through_helper();
        assert_eq!(site.file(), "call_site.rs");
        assert_eq!(site.line(), expected);
    }

    #[test]
    fn test_new_keeps_base_name_only() {
        let site = CallSite::new("src/services/formatter.py", 15);
        assert_eq!(site.file(), "formatter.py");
        assert_eq!(site.line(), 15);
        assert_eq!(site.to_string(), "formatter.py:15");
    }

    #[test]
    fn test_new_with_bare_file_name() {
        let site = CallSite::new("main.rs", 7);
        assert_eq!(site.file(), "main.rs");
    }
}
