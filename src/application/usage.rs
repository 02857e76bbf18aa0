//! Daily usage limit use case

use crate::infrastructure::MoodStore;
use chrono::NaiveDate;

/// Where the user stands against today's cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitStatus {
    pub allowed: bool,
    pub used_min: u32,
    pub remaining_min: u32,
    pub cap_min: u32,
}

pub fn limit_status(store: &MoodStore, date: NaiveDate) -> LimitStatus {
    let cap_min = store.daily_cap_min();
    let used_min = store.minutes_used(date);
    let remaining_min = cap_min.saturating_sub(used_min);
    LimitStatus {
        allowed: remaining_min > 0,
        used_min,
        remaining_min,
        cap_min,
    }
}
