//! Durable flat key-value store for moods, usage counters and settings.
//!
//! All state lives in `.moodrise/store.toml` as a single string-to-string
//! table, one key per fact:
//!
//! ```text
//! CURRENT_MOOD   = "OKAY"
//! DAILY_CAP_MIN  = "60"
//! START_<date>   = mood name      (first-write-wins per day)
//! END_<date>     = mood name      (overwritable)
//! MINUTES_<date> = integer        (minutes used that day)
//! SCORE_<item>   = integer        (feed reinforcement)
//! HIDDEN_<item>  = "1"            (per-user hide list)
//! ```
//!
//! Dates are `yyyy-MM-dd`. Every mutation writes through to disk.
//! Missing or unparseable values read as absent; reads never fail on
//! content.

use crate::domain::content::apply_reaction;
use crate::domain::{good_mood_streak, DayLog, Mood, Reaction};
use crate::error::Result;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const KEY_CURRENT_MOOD: &str = "CURRENT_MOOD";
const KEY_DAILY_CAP_MIN: &str = "DAILY_CAP_MIN";

/// Daily cap when never explicitly set
pub const DEFAULT_DAILY_CAP_MIN: u32 = 60;

/// Key-value persistence for mood logs, usage counters and the cap
#[derive(Debug, Clone)]
pub struct MoodStore {
    root: PathBuf,
    values: BTreeMap<String, String>,
}

impl MoodStore {
    /// Open the store under the given data root. A missing store file
    /// reads as empty.
    pub fn open(root: &Path) -> Result<Self> {
        let store_path = Self::store_path(root);

        let values = if store_path.exists() {
            let contents = fs::read_to_string(&store_path)?;
            // A corrupt store reads as empty rather than failing:
            // every value in it is re-creatable by the user.
            toml::from_str(&contents).unwrap_or_default()
        } else {
            BTreeMap::new()
        };

        Ok(MoodStore {
            root: root.to_path_buf(),
            values,
        })
    }

    fn store_path(root: &Path) -> PathBuf {
        root.join(".moodrise").join("store.toml")
    }

    /// Re-read the store file, replacing this handle's in-memory view.
    /// Long-lived handles call this before mutating so the write-through
    /// save does not clobber writes made by another process.
    pub fn reload(&mut self) -> Result<()> {
        let reopened = Self::open(&self.root)?;
        *self = reopened;
        Ok(())
    }

    fn save(&self) -> Result<()> {
        let moodrise_dir = self.root.join(".moodrise");
        if !moodrise_dir.exists() {
            fs::create_dir(&moodrise_dir)?;
        }

        let contents = toml::to_string_pretty(&self.values)?;
        fs::write(Self::store_path(&self.root), contents)?;
        Ok(())
    }

    fn date_key(prefix: &str, date: NaiveDate) -> String {
        format!("{}_{}", prefix, date.format("%Y-%m-%d"))
    }

    fn get_mood(&self, key: &str) -> Option<Mood> {
        self.values
            .get(key)
            .and_then(|v| Mood::from_storage_name(v))
    }

    fn get_u32(&self, key: &str) -> Option<u32> {
        self.values.get(key).and_then(|v| v.parse().ok())
    }

    // ---- Current mood (does NOT touch START/END) ----

    pub fn current_mood(&self) -> Option<Mood> {
        self.get_mood(KEY_CURRENT_MOOD)
    }

    /// Save just the current mood. Does NOT modify START/END.
    pub fn set_current_mood(&mut self, mood: Option<Mood>) -> Result<()> {
        match mood {
            Some(m) => {
                self.values
                    .insert(KEY_CURRENT_MOOD.to_string(), m.storage_name().to_string());
            }
            None => {
                self.values.remove(KEY_CURRENT_MOOD);
            }
        }
        self.save()
    }

    // ---- Start / End logs ----

    /// Log START for the day only if it is not already set.
    /// Returns whether a write happened.
    pub fn log_start_if_empty(&mut self, date: NaiveDate, mood: Mood) -> Result<bool> {
        let key = Self::date_key("START", date);
        if self.values.contains_key(&key) {
            return Ok(false);
        }
        self.values.insert(key, mood.storage_name().to_string());
        self.save()?;
        Ok(true)
    }

    /// Set END for the day, overwriting any earlier value.
    pub fn log_end(&mut self, date: NaiveDate, mood: Mood) -> Result<()> {
        self.values
            .insert(Self::date_key("END", date), mood.storage_name().to_string());
        self.save()
    }

    /// True if START has been logged for the given date
    pub fn has_start(&self, date: NaiveDate) -> bool {
        self.values.contains_key(&Self::date_key("START", date))
    }

    pub fn end_mood(&self, date: NaiveDate) -> Option<Mood> {
        self.get_mood(&Self::date_key("END", date))
    }

    /// Start and end moods plus minutes used for a date; each mood may
    /// be absent.
    pub fn day_log(&self, date: NaiveDate) -> DayLog {
        DayLog {
            date,
            start: self.get_mood(&Self::date_key("START", date)),
            end: self.end_mood(date),
            minutes_used: self.minutes_used(date),
        }
    }

    // ---- Streak ----

    /// Consecutive days ending at `today` whose END is neutral or better
    pub fn good_mood_streak(&self, today: NaiveDate) -> u32 {
        good_mood_streak(|date| self.end_mood(date), today)
    }

    // ---- Daily cap tracking ----

    pub fn daily_cap_min(&self) -> u32 {
        self.get_u32(KEY_DAILY_CAP_MIN)
            .unwrap_or(DEFAULT_DAILY_CAP_MIN)
    }

    pub fn set_daily_cap_min(&mut self, minutes: u32) -> Result<()> {
        self.values
            .insert(KEY_DAILY_CAP_MIN.to_string(), minutes.to_string());
        self.save()
    }

    pub fn minutes_used(&self, date: NaiveDate) -> u32 {
        self.get_u32(&Self::date_key("MINUTES", date)).unwrap_or(0)
    }

    /// Add minutes to the day's usage counter; returns the new total
    pub fn add_minutes(&mut self, date: NaiveDate, delta: u32) -> Result<u32> {
        let total = self.minutes_used(date).saturating_add(delta);
        self.set_minutes(date, total)?;
        Ok(total)
    }

    pub fn set_minutes(&mut self, date: NaiveDate, minutes: u32) -> Result<()> {
        self.values
            .insert(Self::date_key("MINUTES", date), minutes.to_string());
        self.save()
    }

    // ---- Feed reinforcement and hiding ----

    pub fn score(&self, item_id: &str) -> i32 {
        self.values
            .get(&format!("SCORE_{}", item_id))
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Apply a reaction to an item's reinforcement score; returns the
    /// new score.
    pub fn apply_feedback(&mut self, item_id: &str, reaction: Reaction) -> Result<i32> {
        let score = apply_reaction(self.score(item_id), reaction);
        self.values
            .insert(format!("SCORE_{}", item_id), score.to_string());
        self.save()?;
        Ok(score)
    }

    pub fn hidden_ids(&self) -> BTreeSet<String> {
        self.values
            .keys()
            .filter_map(|key| key.strip_prefix("HIDDEN_"))
            .map(str::to_string)
            .collect()
    }

    pub fn hide(&mut self, item_id: &str) -> Result<()> {
        self.values
            .insert(format!("HIDDEN_{}", item_id), "1".to_string());
        self.save()
    }

    // ---- Reset (one day only) for demo ----

    /// Clear the given day's logs and counter plus the current mood
    pub fn reset_day(&mut self, date: NaiveDate) -> Result<()> {
        self.values.remove(&Self::date_key("START", date));
        self.values.remove(&Self::date_key("END", date));
        self.values.remove(&Self::date_key("MINUTES", date));
        self.values.remove(KEY_CURRENT_MOOD);
        self.save()
    }
}
