//! Feed use cases: curated content, feedback, hiding

use crate::domain::content::{self, Category, ContentKind, Reaction};
use crate::domain::{profanity, Mood};
use crate::error::{MoodriseError, Result};
use crate::infrastructure::MoodStore;
use chrono::NaiveDate;

/// A display-ready feed card with content hygiene already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCard {
    pub id: String,
    pub kind: ContentKind,
    pub title: String,
    pub body: Option<String>,
    pub url: Option<String>,
}

/// Open a feed: enforces the daily cap, then curates content for the
/// current mood (Okay when none is set), excluding hidden items and
/// masking banned words.
pub fn open_feed(
    store: &MoodStore,
    date: NaiveDate,
    category: Category,
    limit: usize,
) -> Result<Vec<FeedCard>> {
    if store.minutes_used(date) >= store.daily_cap_min() {
        return Err(MoodriseError::DailyCapReached);
    }

    let mood = store.current_mood().unwrap_or(Mood::Okay);
    let hidden = store.hidden_ids();
    let items = content::curated(mood, category, limit, &hidden, |id| store.score(id));

    Ok(items
        .into_iter()
        .map(|item| FeedCard {
            id: item.id.to_string(),
            kind: item.kind,
            title: profanity::cleanse(item.title),
            body: item.body.map(profanity::cleanse),
            url: item.url.map(str::to_string),
        })
        .collect())
}

/// Record a reaction to a feed card; returns the new reinforcement score
pub fn feedback(store: &mut MoodStore, item_id: &str, reaction: Reaction) -> Result<i32> {
    ensure_known_item(item_id)?;
    store.apply_feedback(item_id, reaction)
}

/// Hide a feed card from all future feeds
pub fn hide(store: &mut MoodStore, item_id: &str) -> Result<()> {
    ensure_known_item(item_id)?;
    store.hide(item_id)
}

fn ensure_known_item(item_id: &str) -> Result<()> {
    if content::find_item(item_id).is_none() {
        return Err(MoodriseError::Config(format!(
            "Unknown content item: '{}'. Item ids appear in 'moodrise feed' output.",
            item_id
        )));
    }
    Ok(())
}
