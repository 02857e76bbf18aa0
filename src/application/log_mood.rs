//! Mood logging use cases: set, quick check-in, end of session

use crate::domain::Mood;
use crate::error::Result;
use crate::infrastructure::MoodStore;
use chrono::NaiveDate;

/// Set the current mood (the "slider released" path): saves the current
/// mood and logs the day's START if it hasn't been logged yet.
/// Returns whether this write became the day's start mood.
pub fn set_mood(store: &mut MoodStore, date: NaiveDate, mood: Mood) -> Result<bool> {
    store.set_current_mood(Some(mood))?;
    store.log_start_if_empty(date, mood)
}

/// Quick check-in: always updates the current mood, but only updates
/// END when a START exists for the day (keeps START as the beginning
/// mood). Returns whether END was written.
///
/// Note the asymmetry with `end_session`, which writes END
/// unconditionally.
pub fn check_in(store: &mut MoodStore, date: NaiveDate, mood: Mood) -> Result<bool> {
    store.set_current_mood(Some(mood))?;
    if store.has_start(date) {
        store.log_end(date, mood)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// End-of-session log: writes END unconditionally. With no explicit
/// mood, falls back to the current mood, then to Okay.
/// Returns the mood that was recorded.
pub fn end_session(store: &mut MoodStore, date: NaiveDate, mood: Option<Mood>) -> Result<Mood> {
    let mood = mood
        .or_else(|| store.current_mood())
        .unwrap_or(Mood::Okay);
    store.log_end(date, mood)?;
    Ok(mood)
}
