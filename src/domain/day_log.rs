//! Per-day mood summary and start-to-end trend

use crate::domain::Mood;
use chrono::NaiveDate;

/// Start and end moods logged for one calendar day.
///
/// Either side may be missing. A day can carry an end without a start
/// (forced or skipped logging); no relational constraint is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayLog {
    pub date: NaiveDate,
    pub start: Option<Mood>,
    pub end: Option<Mood>,
    pub minutes_used: u32,
}

impl DayLog {
    pub fn trend(&self) -> Trend {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                if end > start {
                    Trend::Improved
                } else if end < start {
                    Trend::Declined
                } else {
                    Trend::Steady
                }
            }
            _ => Trend::Incomplete,
        }
    }
}

/// How the day's end mood compares to its start mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improved,
    Declined,
    Steady,
    /// Start or end mood missing for the day
    Incomplete,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Improved => "improved",
            Trend::Declined => "declined",
            Trend::Steady => "steady",
            Trend::Incomplete => "—",
        }
    }
}
