//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for stamping commit messages.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::from_unix(1_741_093_620);
//! assert_eq!(dt.to_commit_stamp(), "March 04, 2025 13:07 UTC");
//! ```

use std::time::SystemTime;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Current wall-clock time in UTC.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix(secs)
    }

    /// Convert seconds since the Unix epoch to a calendar datetime.
    #[allow(clippy::cast_possible_truncation)] // All components are range-bounded
    #[allow(clippy::cast_sign_loss)]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn from_unix(secs: u64) -> Self {
        let days = (secs / 86_400) as i64;
        let rem = secs % 86_400;

        // Civil-from-days, shifted so the era starts on March 1st
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };

        Self::new(
            year as u16,
            month as u8,
            day as u8,
            (rem / 3600) as u8,
            ((rem / 60) % 60) as u8,
            (rem % 60) as u8,
        )
    }

    /// Full English month name (`"March"`).
    pub const fn month_name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Format as `"March 04, 2025 13:07 UTC"`.
    pub fn to_commit_stamp(self) -> String {
        format!(
            "{} {:02}, {:04} {:02}:{:02} UTC",
            self.month_name(),
            self.day,
            self.year,
            self.hour,
            self.minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unix_epoch() {
        assert_eq!(DateTimeUtc::from_unix(0), DateTimeUtc::new(1970, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_from_unix_known_instant() {
        // 2025-03-04T13:07:00Z
        let dt = DateTimeUtc::from_unix(1_741_093_620);
        assert_eq!(dt, DateTimeUtc::new(2025, 3, 4, 13, 7, 0));
    }

    #[test]
    fn test_from_unix_leap_day() {
        // 2024-02-29T23:59:59Z
        let dt = DateTimeUtc::from_unix(1_709_251_199);
        assert_eq!(dt, DateTimeUtc::new(2024, 2, 29, 23, 59, 59));
        // One second later is March 1st
        assert_eq!(DateTimeUtc::from_unix(1_709_251_200), DateTimeUtc::new(2024, 3, 1, 0, 0, 0));
    }

    #[test]
    fn test_from_unix_year_boundary() {
        // 2000-01-01T00:00:00Z
        let dt = DateTimeUtc::from_unix(946_684_800);
        assert_eq!(dt, DateTimeUtc::new(2000, 1, 1, 0, 0, 0));
        // One second earlier is New Year's Eve
        let dt = DateTimeUtc::from_unix(946_684_799);
        assert_eq!(dt, DateTimeUtc::new(1999, 12, 31, 23, 59, 59));
    }

    #[test]
    fn test_commit_stamp_format() {
        let dt = DateTimeUtc::new(2025, 3, 4, 13, 7, 0);
        assert_eq!(dt.to_commit_stamp(), "March 04, 2025 13:07 UTC");

        let dt = DateTimeUtc::new(2024, 12, 25, 0, 0, 59);
        assert_eq!(dt.to_commit_stamp(), "December 25, 2024 00:00 UTC");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(DateTimeUtc::new(2024, 1, 1, 0, 0, 0).month_name(), "January");
        assert_eq!(DateTimeUtc::new(2024, 9, 1, 0, 0, 0).month_name(), "September");
    }

    #[test]
    fn test_now_is_in_range() {
        let now = DateTimeUtc::now();
        assert!(now.year >= 2024);
        assert!((1..=12).contains(&now.month));
        assert!((1..=31).contains(&now.day));
        assert!(now.hour < 24 && now.minute < 60 && now.second < 60);
    }
}
