//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days. Used for first-domino deadlines and
    /// review dates derived from generation time.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Formats the timestamp as an RFC 3339 date-time string.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Formats the date portion only (YYYY-MM-DD), for human-facing
    /// documents.
    pub fn format_date(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn fixed() -> Timestamp {
        let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    #[test]
    fn plus_days_adds_calendar_days() {
        let ts = fixed().plus_days(7);
        assert_eq!(ts.as_datetime().day(), 22);
        assert_eq!(ts.as_datetime().month(), 1);
    }

    #[test]
    fn plus_days_crosses_month_boundary() {
        let ts = fixed().plus_days(30);
        assert_eq!(ts.as_datetime().month(), 2);
        assert_eq!(ts.as_datetime().day(), 14);
    }

    #[test]
    fn ordering_follows_time() {
        let earlier = fixed();
        let later = fixed().plus_days(1);
        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(earlier < later);
    }

    #[test]
    fn format_date_is_iso_date() {
        assert_eq!(fixed().format_date(), "2024-01-15");
    }

    #[test]
    fn serializes_to_json_string() {
        let json = serde_json::to_string(&fixed()).unwrap();
        assert!(json.contains("2024-01-15"));
    }

    #[test]
    fn deserializes_from_json() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T10:30:00Z\"").unwrap();
        assert_eq!(ts, fixed());
    }
}
