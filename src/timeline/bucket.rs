/// Date bucket classification
///
/// Maps a timestamp onto a human-relative category (Today, Yesterday,
/// This Week, This Month, or a calendar year) against a reference "now".
/// The mapping is total: every timestamp lands in exactly one bucket and
/// classification never fails.

use chrono::{DateTime, Datelike, Local};
use serde::{Serialize, Serializer};

/// Relative-time category for a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    /// Anything older than the current month, keyed by calendar year
    Year(i32),
}

impl Bucket {
    /// Display label for this bucket
    pub fn label(&self) -> String {
        match self {
            Bucket::Today => "Today".to_string(),
            Bucket::Yesterday => "Yesterday".to_string(),
            Bucket::ThisWeek => "This Week".to_string(),
            Bucket::ThisMonth => "This Month".to_string(),
            Bucket::Year(year) => year.to_string(),
        }
    }

    /// Sort key giving a strict total order across buckets.
    ///
    /// Lower sorts first. Relative buckets come before year buckets, and
    /// year buckets sort descending by year (2025 before 2024).
    pub fn sort_key(&self) -> i64 {
        match self {
            Bucket::Today => 0,
            Bucket::Yesterday => 1,
            Bucket::ThisWeek => 2,
            Bucket::ThisMonth => 3,
            Bucket::Year(year) => 10_000 - *year as i64,
        }
    }
}

// The UI only ever sees the label
impl Serialize for Bucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Classify `timestamp` relative to the reference instant `now`.
///
/// Calendar semantics, not sliding windows: "Yesterday" is the preceding
/// calendar day, "This Week" is the current ISO week (Monday start),
/// "This Month" the current calendar month. First match wins. Timestamps
/// in the future fold into Today rather than erroring.
pub fn classify(timestamp: DateTime<Local>, now: DateTime<Local>) -> Bucket {
    let day = timestamp.date_naive();
    let today = now.date_naive();

    if day >= today {
        return Bucket::Today;
    }
    if Some(day) == today.pred_opt() {
        return Bucket::Yesterday;
    }
    if day.iso_week() == today.iso_week() {
        return Bucket::ThisWeek;
    }
    if day.year() == today.year() && day.month() == today.month() {
        return Bucket::ThisMonth;
    }
    Bucket::Year(day.year())
}
