//! Wellness reminders use case

use crate::domain::{profanity, tips};
use crate::infrastructure::MoodStore;
use chrono::NaiveTime;
use rand::Rng;

/// Today's scheduled reminders, matched to the user's latest mood.
/// Text passes through the profanity mask like all outgoing content.
pub fn today_reminders<R: Rng>(rng: &mut R, store: &MoodStore, now: NaiveTime) -> Vec<String> {
    tips::today_reminders(rng, store.current_mood(), now)
        .iter()
        .map(|line| profanity::cleanse(line))
        .collect()
}

/// One immediate wellness nudge for the latest mood
pub fn nudge<R: Rng>(rng: &mut R, store: &MoodStore) -> String {
    profanity::cleanse(tips::nudge_for_mood(rng, store.current_mood()))
}
