//! Calendar view use case

use crate::domain::DayLog;
use crate::infrastructure::MoodStore;
use chrono::NaiveDate;

/// Summary for one calendar day
pub fn day_summary(store: &MoodStore, date: NaiveDate) -> DayLog {
    store.day_log(date)
}

/// Good-mood streak ending at (and including) `today`
pub fn streak(store: &MoodStore, today: NaiveDate) -> u32 {
    store.good_mood_streak(today)
}
