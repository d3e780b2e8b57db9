//! Quarantine capture buckets
//!
//! Every file quarantined by one run lands in a directory named after the
//! minute the run started, e.g. `quarantine/2024-03-09_14:05/`. The same
//! name is parsed back by the retention sweep to decide expiry.

use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `strftime` layout of a bucket directory name (minute resolution)
pub const BUCKET_FORMAT: &str = "%Y-%m-%d_%H:%M";

/// Minute-resolution timestamp naming a quarantine bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaptureBucket(NaiveDateTime);

impl CaptureBucket {
    /// Bucket for the given instant, truncated to the minute
    #[must_use]
    pub fn at(instant: NaiveDateTime) -> Self {
        let truncated = instant
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(instant);
        Self(truncated)
    }

    /// Bucket for the current local time
    #[must_use]
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    /// Parse a bucket directory name; `None` if it is not one
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(name, BUCKET_FORMAT)
            .ok()
            .map(Self)
    }

    #[must_use]
    pub fn timestamp(&self) -> NaiveDateTime {
        self.0
    }

    /// Directory name for this bucket
    #[must_use]
    pub fn dir_name(&self) -> String {
        self.0.format(BUCKET_FORMAT).to_string()
    }

    /// True when the bucket was captured more than `retention` before `now`
    ///
    /// A window reaching past the earliest representable time expires
    /// nothing.
    #[must_use]
    pub fn is_expired(&self, now: NaiveDateTime, retention: TimeDelta) -> bool {
        now.checked_sub_signed(retention)
            .is_some_and(|cutoff| self.0 < cutoff)
    }
}

impl std::fmt::Display for CaptureBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(BUCKET_FORMAT))
    }
}

impl Serialize for CaptureBucket {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.dir_name())
    }
}

impl<'de> Deserialize<'de> for CaptureBucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::parse(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid capture bucket: {name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_bucket_truncates_to_minute() {
        let bucket = CaptureBucket::at(ts(2024, 3, 9, 14, 5, 59));
        assert_eq!(bucket.dir_name(), "2024-03-09_14:05");
        assert_eq!(bucket.timestamp(), ts(2024, 3, 9, 14, 5, 0));
    }

    #[test]
    fn test_parse_accepts_bucket_names_only() {
        let bucket = CaptureBucket::parse("2020-01-01_00:00").unwrap();
        assert_eq!(bucket.timestamp(), ts(2020, 1, 1, 0, 0, 0));

        assert!(CaptureBucket::parse("garbage-name").is_none());
        assert!(CaptureBucket::parse("2020-01-01").is_none());
        assert!(CaptureBucket::parse("2020-01-01_00:00:00").is_none());
        assert!(CaptureBucket::parse("2020-13-01_00:00").is_none());
    }

    #[test]
    fn test_expiry_window() {
        let bucket = CaptureBucket::parse("2020-01-01_00:00").unwrap();
        let ninety = TimeDelta::days(90);

        assert!(bucket.is_expired(ts(2020, 4, 1, 0, 0, 0), ninety)); // 91 days
        assert!(!bucket.is_expired(ts(2020, 3, 30, 0, 0, 0), ninety)); // 89 days
        assert!(!bucket.is_expired(ts(2020, 3, 31, 0, 0, 0), ninety)); // exactly 90
    }

    #[test]
    fn test_window_beyond_calendar_range_keeps_bucket() {
        let bucket = CaptureBucket::parse("2020-01-01_00:00").unwrap();
        let huge = TimeDelta::days(i64::from(u32::MAX));

        assert!(!bucket.is_expired(ts(2026, 1, 1, 0, 0, 0), huge));
        assert!(!bucket.is_expired(ts(2026, 1, 1, 0, 0, 0), TimeDelta::MAX));
    }
}
