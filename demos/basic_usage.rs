//! Basic usage of ctxlog

use ctxlog::{args, CallOptions, Level, LoggerOptions, LoggerRegistry, UserContext};

fn main() {
    let registry = LoggerRegistry::new();

    let logger = registry
        .get_logger(
            "demo",
            LoggerOptions::new()
                .level(Level::Debug)
                .file_path("logs/demo.log"),
        )
        .expect("valid logger configuration");

    logger.info("Hello, world!", &[]);

    // Percent templates over typed arguments.
    logger.info(
        "Processing item %s with priority %d",
        &args!["A123", 2],
    );

    // All five levels.
    logger.debug("This is a debug message.", &[]);
    logger.warning("This is a warning message.", &[]);
    logger.error("This is an error message.", &[]);
    logger.critical("This is a critical message.", &[]);

    // Structured arguments render as JSON when asked.
    let payload = serde_json::json!({"results": [1, 2, 3], "metadata": {"source": "API"}});
    logger.info_with(
        "Received data %s",
        &args![payload],
        CallOptions::new().json_format(true),
    );

    // The authenticated user id lands ahead of the message body.
    logger.info_with(
        "See the uid on the left.",
        &[],
        CallOptions::new().user_context(UserContext::with_uid("1234567890")),
    );

    // Long messages are cut to the configured limit.
    let long = "The path of the righteous man is beset on all sides by the \
                inequities of the selfish and the tyranny of evil men.";
    logger.info_with(
        "Truncated: %s",
        &args![long],
        CallOptions::new().truncate_length(60),
    );
    logger.info_with(
        "Untouched: %s",
        &args![long],
        CallOptions::new().truncate(false),
    );

    logger.flush().expect("flush log file");
}
