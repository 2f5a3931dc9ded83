//! Logging macros for ergonomic call sites.
//!
//! The macros convert heterogeneous arguments through `LogArg::from`, so a
//! call site can pass strings, numbers, booleans, and `serde_json::Value`s
//! directly. Caller location still resolves to the macro invocation site.
//!
//! # Examples
//!
//! ```no_run
//! use ctxlog::prelude::*;
//! use ctxlog::info;
//!
//! let registry = LoggerRegistry::new();
//! let logger = registry
//!     .get_logger("app", LoggerOptions::new().no_file())
//!     .unwrap();
//!
//! info!(logger, "Server started");
//! info!(logger, "Listening on port %d", 8080);
//! info!(logger, "User %s performed %s", "alice", "login");
//! ```

/// Log a message at an explicit level.
///
/// ```no_run
/// # use ctxlog::prelude::*;
/// # let registry = LoggerRegistry::new();
/// # let logger = registry.get_logger("doc", LoggerOptions::new().no_file()).unwrap();
/// use ctxlog::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: %d", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, $template, &[$($crate::LogArg::from($arg)),*])
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug($template, &[$($crate::LogArg::from($arg)),*])
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.info($template, &[$($crate::LogArg::from($arg)),*])
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.warning($template, &[$($crate::LogArg::from($arg)),*])
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.error($template, &[$($crate::LogArg::from($arg)),*])
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.critical($template, &[$($crate::LogArg::from($arg)),*])
    };
}

/// Build a `Vec<LogArg>` from heterogeneous values.
///
/// ```
/// use ctxlog::{args, LogArg};
///
/// let built = args!["A123", 2, 0.5, true];
/// assert_eq!(built.len(), 4);
/// assert!(matches!(built[1], LogArg::Int(2)));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::LogArg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        <[_]>::into_vec(::std::boxed::Box::new([$($crate::LogArg::from($value)),+]))
    };
}
