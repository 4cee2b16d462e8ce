//! Wall-clock access and the two timestamp renderings used by enquiries.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::macros::{format_description, offset};
use time::{OffsetDateTime, UtcOffset};

/// Africa/Johannesburg: fixed UTC+02:00, no daylight saving.
const JOHANNESBURG: UtcOffset = offset!(+2);

/// Current instant in UTC.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Local Johannesburg time in the `en-ZA` shape `YYYY/MM/DD, HH:MM:SS`.
///
/// # Errors
///
/// Returns an error if the instant cannot be formatted.
pub fn display_timestamp(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.to_offset(JOHANNESBURG)
        .format(format_description!("[year]/[month]/[day], [hour]:[minute]:[second]"))
}

/// UTC ISO-8601 to the second with `:` replaced by `-`, safe for file names.
///
/// # Errors
///
/// Returns an error if the instant cannot be formatted.
pub fn file_timestamp(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.to_offset(UtcOffset::UTC)
        .format(format_description!("[year]-[month]-[day]T[hour]-[minute]-[second]"))
}
