//! # ctxlog
//!
//! Context-enriched logging: every line carries the caller's file and line,
//! a timezone-aware timestamp, an optional authenticated-user id, and
//! level-based terminal colors.
//!
//! ## Features
//!
//! - **Consistent Lines**: `LEVEL:[TIMESTAMP]FILE:LINE:MESSAGE`, identical
//!   across terminal and file apart from coloring
//! - **IANA Timezones**: timestamps render in any zone from the compiled
//!   timezone database, validated when the logger is configured
//! - **Percent Templates**: `%s`/`%d`/`%f` substitution over typed
//!   arguments, with optional JSON rendering and length truncation
//! - **Registry**: name-keyed loggers with shared, reconfigurable state
//!
//! ## Example
//!
//! ```no_run
//! use ctxlog::{Level, LoggerOptions, LoggerRegistry};
//!
//! let registry = LoggerRegistry::new();
//! let logger = registry
//!     .get_logger(
//!         "app",
//!         LoggerOptions::new().level(Level::Debug).timezone("UTC"),
//!     )
//!     .expect("valid logger configuration");
//!
//! logger.info("Processing item %s with priority %d", &["A123".into(), 2.into()]);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        available_timezones, is_valid_timezone, CallOptions, CallSite, Level, LogArg, LogError,
        Logger, LoggerConfig, LoggerOptions, LoggerRegistry, Result, UserContext, ZoneHandle,
        ZonedTimestamp,
    };
    pub use crate::sinks::{FileSink, TerminalSink};
}

pub use crate::core::{
    available_timezones, is_valid_timezone, AssembledLine, CallOptions, CallSite, Level, LogArg,
    LogError, LogRecord, Logger, LoggerConfig, LoggerOptions, LoggerRegistry, Result, UserContext,
    ZoneHandle, ZonedTimestamp, DEFAULT_FILE_PATH, DEFAULT_TRUNCATE_LENGTH, TRUNCATION_SUFFIX,
};
pub use crate::sinks::{FileSink, TerminalSink};
