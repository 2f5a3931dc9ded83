//! Error types for ctxlog

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Unknown or malformed IANA timezone identifier
    ///
    /// Raised at logger construction or reconfiguration time, never during
    /// emission. A failed configuration call leaves no half-configured logger.
    #[error("invalid timezone identifier: '{id}'")]
    InvalidTimezone { id: String },

    /// Invalid configuration with details
    #[error("invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Template/argument mismatch during percent substitution
    ///
    /// Recovered at the emission site: the record is still written with a
    /// fallback body carrying this error's message.
    #[error("format mismatch: {message}")]
    FormatMismatch { message: String },

    /// File sink error with path
    #[error("file sink error for '{path}': {message}")]
    FileSink { path: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogError {
    /// Create an invalid timezone error
    pub fn invalid_timezone(id: impl Into<String>) -> Self {
        LogError::InvalidTimezone { id: id.into() }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a format mismatch error
    pub fn format_mismatch(message: impl Into<String>) -> Self {
        LogError::FormatMismatch {
            message: message.into(),
        }
    }

    /// Create a file sink error
    pub fn file_sink(path: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::FileSink {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LogError::invalid_timezone("Mars/Olympus");
        assert!(matches!(err, LogError::InvalidTimezone { .. }));

        let err = LogError::config("truncate_length", "must be greater than zero");
        assert!(matches!(err, LogError::InvalidConfiguration { .. }));

        let err = LogError::file_sink("/var/log/app.log", "permission denied");
        assert!(matches!(err, LogError::FileSink { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LogError::invalid_timezone("Not_A_Timezone");
        assert_eq!(
            err.to_string(),
            "invalid timezone identifier: 'Not_A_Timezone'"
        );

        let err = LogError::format_mismatch("2 placeholders, 1 argument");
        assert_eq!(
            err.to_string(),
            "format mismatch: 2 placeholders, 1 argument"
        );

        let err = LogError::file_sink("/var/log/app.log", "disk full");
        assert_eq!(
            err.to_string(),
            "file sink error for '/var/log/app.log': disk full"
        );
    }
}
