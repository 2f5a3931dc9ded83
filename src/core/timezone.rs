//! Timezone resolution and timestamp rendering
//!
//! Wraps the compiled IANA timezone database (`chrono-tz`) behind a small
//! handle type. Identifiers are validated when a logger is configured, so an
//! invalid timezone never reaches the emission path.

use crate::core::error::{LogError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use chrono_tz::Tz;
use std::fmt;

/// A validated timezone, ready to localize instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneHandle {
    tz: Tz,
}

impl ZoneHandle {
    /// Resolve an optional IANA identifier into a handle.
    ///
    /// `None` selects the host machine's zone, falling back to UTC when the
    /// host zone cannot be determined or is absent from the compiled
    /// database. A present identifier must be valid; unknown or malformed
    /// names fail with [`LogError::InvalidTimezone`].
    pub fn resolve(id: Option<&str>) -> Result<Self> {
        match id {
            Some(name) => {
                let tz = name
                    .parse::<Tz>()
                    .map_err(|_| LogError::invalid_timezone(name))?;
                Ok(Self { tz })
            }
            None => Ok(Self { tz: host_zone() }),
        }
    }

    /// The UTC handle.
    pub fn utc() -> Self {
        Self { tz: Tz::UTC }
    }

    /// IANA name of the underlying zone.
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// Localize a UTC instant into wall-clock time with zone metadata.
    pub fn render(&self, instant: DateTime<Utc>) -> ZonedTimestamp {
        let local = instant.with_timezone(&self.tz);
        ZonedTimestamp {
            local_time: local.naive_local(),
            abbreviation: local.format("%Z").to_string(),
            utc_offset: local.offset().fix(),
        }
    }
}

/// Best-effort host zone lookup.
fn host_zone() -> Tz {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse::<Tz>().ok())
        .unwrap_or(Tz::UTC)
}

/// A localized instant: wall-clock time, zone abbreviation, UTC offset.
///
/// The `Display` form is the wire format for log timestamps:
/// `YYYY-MM-DD HH:MM:SS ABBR±HHMM`, e.g. `2025-01-15 07:00:00 EST-0500`.
/// The offset sign is explicit even for `+0000`. Zones whose modern tzdb
/// entry has no alphabetic abbreviation render the numeric one (`+07`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedTimestamp {
    pub local_time: NaiveDateTime,
    pub abbreviation: String,
    pub utc_offset: FixedOffset,
}

impl fmt::Display for ZonedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.utc_offset.local_minus_utc();
        let sign = if secs < 0 { '-' } else { '+' };
        let abs = secs.abs();
        write!(
            f,
            "{} {}{}{:02}{:02}",
            self.local_time.format("%Y-%m-%d %H:%M:%S"),
            self.abbreviation,
            sign,
            abs / 3600,
            (abs % 3600) / 60,
        )
    }
}

/// Check whether an identifier names a zone in the compiled IANA database.
pub fn is_valid_timezone(id: &str) -> bool {
    id.parse::<Tz>().is_ok()
}

/// All IANA identifiers in the compiled database, sorted and deduplicated.
pub fn available_timezones() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
    names.sort_unstable();
    names.dedup();
    names
}
