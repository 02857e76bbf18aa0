//! Domain layer - Business logic and domain models

pub mod content;
pub mod day_log;
pub mod mood;
pub mod profanity;
pub mod session;
pub mod streak;
pub mod tips;

pub use content::{Category, ContentItem, ContentKind, Reaction};
pub use day_log::{DayLog, Trend};
pub use mood::Mood;
pub use session::{SessionEvent, SessionState, SessionTimer};
pub use streak::good_mood_streak;
