//! Wellness tips and scheduled nudge reminders

use crate::domain::Mood;
use chrono::{Duration, NaiveTime};
use rand::Rng;

pub const WELLNESS_TIPS: &[&str] = &[
    "60-second breath: inhale 4, exhale 6 — repeat 10x.",
    "Quick win: drink a glass of water now.",
    "Stand and stretch your shoulders for 30 seconds.",
    "Text a friend something you appreciate about them.",
    "Take a 2-minute walk and count 5 green things you see.",
    "Write one sentence about how you feel right now.",
];

const GENERIC_TIPS: &[&str] = &[
    "Mini-tip: stand up, roll your shoulders, breathe in 4-7-8.",
    "Hydration nudge: grab a glass of water.",
    "Fresh air helps: look out a window or step outside for 1 minute.",
    "Sleep reminder: aim for 7-9 hours tonight. Prep a wind-down routine.",
    "Study boost: try 25 min focus + 5 min stretch.",
    "Good news: kindness spreads. Send a supportive text today.",
];

const MOOD_LOW_TIPS: &[&str] = &[
    "Feeling low? Try 3 slow breaths and a 2-minute walk.",
    "Text a friend a quick hello. Connection helps.",
    "Pick 'Laugh' for a mood lift in under a minute.",
];

const MOOD_OK_TIPS: &[&str] = &[
    "Nice steadiness. A short stretch keeps it going.",
    "Try 'Motivate' for a micro boost to your focus.",
];

const MOOD_HIGH_TIPS: &[&str] = &[
    "Great energy. Channel it into a tiny task you've been delaying.",
    "Share a kind word; helping others lifts you too.",
];

fn pick<'a, R: Rng>(rng: &mut R, tips: &[&'a str]) -> &'a str {
    tips[rng.gen_range(0..tips.len())]
}

/// A random tip from the general wellness pool
pub fn random_tip<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, WELLNESS_TIPS)
}

/// Pick a nudge matching the user's most recent mood bucket,
/// falling back to generic tips when no mood is known.
pub fn nudge_for_mood<R: Rng>(rng: &mut R, mood: Option<Mood>) -> &'static str {
    match mood {
        None => pick(rng, GENERIC_TIPS),
        Some(m) if m <= Mood::Meh => pick(rng, MOOD_LOW_TIPS),
        Some(Mood::Okay) => pick(rng, MOOD_OK_TIPS),
        Some(_) => pick(rng, MOOD_HIGH_TIPS),
    }
}

/// Today's scheduled reminders: one mood-matched nudge in 30 minutes,
/// then two generic tips at +2h and +4h. The caller decides when (or
/// whether) to surface them.
pub fn today_reminders<R: Rng>(
    rng: &mut R,
    latest_mood: Option<Mood>,
    now: NaiveTime,
) -> Vec<String> {
    let slot = |offset: Duration, tip: &str| {
        let (at, _) = now.overflowing_add_signed(offset);
        format!("[{}] {}", at.format("%H:%M"), tip)
    };

    vec![
        slot(Duration::minutes(30), nudge_for_mood(rng, latest_mood)),
        slot(Duration::hours(2), pick(rng, GENERIC_TIPS)),
        slot(Duration::hours(4), pick(rng, GENERIC_TIPS)),
    ]
}
