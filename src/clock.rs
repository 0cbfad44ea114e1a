use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Tz;

/// Civil calendar every submission timestamp is recorded in.
pub const SUBMISSION_TIMEZONE: Tz = New_York;

/// Current instant in New York with the offset in force right now
/// (-05:00 standard, -04:00 daylight).
pub fn now_eastern() -> DateTime<FixedOffset> {
    to_eastern(Utc::now())
}

pub fn to_eastern(instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    SUBMISSION_TIMEZONE
        .from_utc_datetime(&instant.naive_utc())
        .fixed_offset()
}

/// Storage form: RFC 3339 with microseconds and a numeric offset,
/// e.g. `2025-07-04T12:30:00.000000-04:00`.
pub fn render(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)
}
