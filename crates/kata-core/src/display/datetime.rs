//! Timestamp formatting for the journals.
//!
//! Commit and feedback entries carry UTC [`Timestamp`]s; this adapter
//! renders them in the user's local timezone wherever the journals are
//! printed.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Borrows a [`Timestamp`] and `Display`s it as
/// `YYYY-MM-DD HH:MM:SS TZ` in the system timezone, 24-hour clock, with
/// the timezone abbreviation appended (UTC, EST, JST, ...).
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.0.to_zoned(TimeZone::system());
        write!(f, "{}", zoned.strftime("%Y-%m-%d %H:%M:%S %Z"))
    }
}
