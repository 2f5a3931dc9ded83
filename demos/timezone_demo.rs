//! Timezone support in ctxlog

use ctxlog::{available_timezones, is_valid_timezone, LoggerOptions, LoggerRegistry};

fn main() {
    let registry = LoggerRegistry::new();

    // Default logger renders timestamps in the host machine's zone.
    let logger = registry
        .get_logger("tz-demo", LoggerOptions::new().no_file())
        .expect("valid logger configuration");
    logger.info("This log uses the local timezone", &[]);

    // Any IANA identifier from the compiled database works.
    for zone in ["UTC", "US/Pacific", "Europe/London", "Asia/Tokyo"] {
        let logger = registry
            .get_logger("tz-demo", LoggerOptions::new().no_file().timezone(zone))
            .expect("valid timezone");
        logger.info("This log uses the %s timezone", &[zone.into()]);
    }

    // Validate before configuring.
    println!(
        "Total IANA timezones available: {}",
        available_timezones().len()
    );
    if is_valid_timezone("America/New_York") {
        logger.info("Timezone %s is valid.", &["America/New_York".into()]);
    }
    if !is_valid_timezone("PST") {
        logger.warning(
            "PST is not a zone identifier. Use America/Los_Angeles instead.",
            &[],
        );
    }

    // Reconfiguring switches the zone for every handle under the name.
    registry
        .get_logger(
            "tz-demo",
            LoggerOptions::new().no_file().timezone("America/New_York"),
        )
        .expect("valid timezone");
    logger.info("This message is logged in New York time.", &[]);
}
