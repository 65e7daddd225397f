use chrono::TimeDelta;

/// Length of one tick of the render loop.
pub const TICK_SECS: i64 = 1;

/// One tick as a signed duration.
pub fn tick() -> TimeDelta {
    TimeDelta::seconds(TICK_SECS)
}

/// `remaining` minus one tick, saturating at [`TimeDelta::MIN`].
pub fn step_back(remaining: TimeDelta) -> TimeDelta {
    remaining.checked_sub(&tick()).unwrap_or(TimeDelta::MIN)
}

/// Whole-unit breakdown of a remaining duration.
///
/// Invariants: `hours < 24`, `minutes < 60`, `seconds < 60`. `days` is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TimeBreakdown {
    /// Whole days.
    pub days: u64,
    /// Hours within the day.
    pub hours: u8,
    /// Minutes within the hour.
    pub minutes: u8,
    /// Seconds within the minute.
    pub seconds: u8,
}

/// Split a signed duration into days/hours/minutes/seconds.
///
/// Each field is derived independently from the whole duration (truncating toward zero) and then
/// floored at zero, so any non-positive duration yields all zeros.
pub fn decompose(delta: TimeDelta) -> TimeBreakdown {
    let hours = delta.num_hours();
    let minutes = delta.num_minutes();
    let seconds = delta.num_seconds();

    TimeBreakdown {
        days: (hours / 24).max(0) as u64,
        hours: (hours % 24).max(0) as u8,
        minutes: (minutes % 60).max(0) as u8,
        seconds: (seconds % 60).max(0) as u8,
    }
}

impl TimeBreakdown {
    /// Total seconds represented by the breakdown.
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }

    /// `true` when every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Labeled fields in display order.
    pub fn fields(&self) -> [DisplayField; 4] {
        [
            DisplayField::new("days", self.days),
            DisplayField::new("hours", u64::from(self.hours)),
            DisplayField::new("minutes", u64::from(self.minutes)),
            DisplayField::new("seconds", u64::from(self.seconds)),
        ]
    }
}

impl std::fmt::Display for TimeBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Days: {}, Hours: {}, Minutes: {}, Seconds: {}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// A label paired with its decimal value for a single frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayField {
    /// Unit name drawn under the value.
    pub label: &'static str,
    /// Decimal value, no padding.
    pub value: String,
}

impl DisplayField {
    fn new(label: &'static str, value: u64) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/time/breakdown.rs"]
mod tests;
