use chrono::{DateTime, NaiveDate, NaiveTime, SubsecRound as _, TimeDelta, Utc};

use crate::foundation::error::{TminusError, TminusResult};

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> TminusResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        TminusError::validation(format!("'{s}' is not a date in the format YYYY-MM-DD"))
    })
}

/// Parse an `HH:MM:SS` time of day.
pub fn parse_time(s: &str) -> TminusResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M:%S").map_err(|_| {
        TminusError::validation(format!("'{s}' is not a time in the format HH:MM:SS"))
    })
}

/// Sample the current instant in UTC, truncated to whole seconds.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// The countdown window: a target instant and the single "now" sample it is measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownTarget {
    target: DateTime<Utc>,
    now: DateTime<Utc>,
}

impl CountdownTarget {
    /// Build a window. Both instants are truncated to seconds and a target earlier than `now` is
    /// pulled forward to `now`.
    pub fn new(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let target = target.trunc_subsecs(0);
        let now = now.trunc_subsecs(0);
        Self {
            target: target.max(now),
            now,
        }
    }

    /// Combine a date and a time of day into a UTC target.
    pub fn from_date_time(date: NaiveDate, time: NaiveTime, now: DateTime<Utc>) -> Self {
        Self::new(date.and_time(time).and_utc(), now)
    }

    /// Target instant, after clamping.
    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// The "now" sample.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Remaining duration at the "now" sample. Never negative.
    pub fn remaining(&self) -> TimeDelta {
        self.target - self.now
    }
}

#[cfg(test)]
#[path = "../../tests/unit/time/target.rs"]
mod tests;
