//! Good-mood streak calculation

use crate::domain::Mood;
use chrono::{Days, NaiveDate};

/// Count consecutive days, ending at (and including) `today`, whose logged
/// end mood is neutral or better.
///
/// Walks backward one day at a time and stops at the first day that fails
/// the threshold or has no logged end mood. No memoization and no lookback
/// bound: a gap-free multi-year history scans every day.
pub fn good_mood_streak<F>(end_mood_of: F, today: NaiveDate) -> u32
where
    F: Fn(NaiveDate) -> Option<Mood>,
{
    let mut days = 0;
    let mut cursor = today;
    loop {
        match end_mood_of(cursor) {
            Some(end) if end.is_neutral_or_better() => {
                days += 1;
                match cursor.checked_sub_days(Days::new(1)) {
                    Some(previous) => cursor = previous,
                    None => break, // Ran off the calendar.
                }
            }
            _ => break,
        }
    }
    days
}
