// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Weekend-aware calendar arithmetic.
//!
//! Every duration in the engine goes through [`business_duration`], which
//! subtracts one full day for each Saturday or Sunday touched by the span.
//! Days are counted by stepping one calendar day at a time from `start`, in
//! the UTC offset `start` was recorded with, so a transition logged late on
//! Friday in `-0300` is still a Friday.

use chrono::{DateTime, Datelike, Days, Duration, FixedOffset, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A point in time as reported by the tracker, offset preserved.
pub type Timestamp = DateTime<FixedOffset>;

const SECONDS_PER_DAY: f64 = 86_400.0;

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Walks `[start, end]` one day at a time, counting days that satisfy `pred`.
fn count_days(start: Timestamp, end: Timestamp, pred: impl Fn(Weekday) -> bool) -> u32 {
    let mut count = 0;
    let mut cursor = start;
    while cursor <= end {
        if pred(cursor.weekday()) {
            count += 1;
        }
        cursor = match cursor.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }
    count
}

/// Number of Saturdays and Sundays in `[start, end]`, both ends inclusive.
pub fn weekend_days_between(start: Timestamp, end: Timestamp) -> u32 {
    count_days(start, end, is_weekend)
}

/// Number of Monday-to-Friday days in `[start, end]`, both ends inclusive.
pub fn week_days_between(start: Timestamp, end: Timestamp) -> u32 {
    count_days(start, end, |day| !is_weekend(day))
}

/// Rounds a duration to whole days, half up.
pub fn round_days(duration: Duration) -> i64 {
    let days = duration.num_seconds() as f64 / SECONDS_PER_DAY;
    (days + 0.5).floor() as i64
}

/// Fractional hours in a duration.
pub fn hours(duration: Duration) -> f64 {
    duration.num_seconds() as f64 / 3_600.0
}

/// Elapsed time between two timestamps with weekend days removed.
///
/// The raw span loses one day per weekend day in `[start, end]`. When the
/// weekend count exceeds the span's rounded day count the result is zero,
/// and the result is never negative.
pub fn business_duration(start: Timestamp, end: Timestamp) -> Duration {
    let raw = end.signed_duration_since(start);
    if raw <= Duration::zero() {
        return Duration::zero();
    }

    let weekend_days = i64::from(weekend_days_between(start, end));
    if weekend_days == 0 {
        return raw;
    }
    if round_days(raw) < weekend_days {
        return Duration::zero();
    }
    (raw - Duration::days(weekend_days)).max(Duration::zero())
}

/// Midnight UTC at the beginning of `date`.
pub fn start_of_day(date: NaiveDate) -> Timestamp {
    date.and_time(NaiveTime::MIN).and_utc().fixed_offset()
}

/// The date-bounded slice of history a report covers.
///
/// Both dates are inclusive. Internally the end is extended to midnight of
/// the following day so transitions on the last day still count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AnalysisWindow {
    /// Creates a window, rejecting one whose start is after its end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(AnalysisWindow { start, end })
    }

    /// First instant inside the window.
    pub fn start_at(&self) -> Timestamp {
        start_of_day(self.start)
    }

    /// First instant after the window (midnight following the end date).
    pub fn end_at(&self) -> Timestamp {
        let next = self.end.succ_opt().unwrap_or(self.end);
        start_of_day(next)
    }

    /// The replay cutoff: the window end, or `now` if the window is still open.
    pub fn cutoff(&self, now: Timestamp) -> Timestamp {
        self.end_at().min(now)
    }

    /// Weekdays covered by the window, end date inclusive.
    pub fn week_days(&self) -> u32 {
        week_days_between(self.start_at(), start_of_day(self.end))
    }
}

/// Serializes durations as whole minutes for report output.
pub mod minutes {
    use chrono::Duration;
    use serde::ser::SerializeMap;
    use serde::Serializer;
    use std::collections::BTreeMap;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(duration.num_minutes())
    }

    pub fn serialize_map<K, S>(
        map: &BTreeMap<K, Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        K: serde::Serialize,
        S: Serializer,
    {
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (key, duration) in map {
            out.serialize_entry(key, &duration.num_minutes())?;
        }
        out.end()
    }
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
