//! Output formatting utilities

use crate::application::{FeedCard, LimitStatus};
use crate::domain::{ContentKind, DayLog, Mood};

fn mood_text(mood: Option<Mood>) -> &'static str {
    mood.map(|m| m.label()).unwrap_or("—")
}

/// Format the current-mood line
pub fn format_current_mood(mood: Option<Mood>) -> String {
    format!("Mood: {}", mood_text(mood))
}

/// Format a day's summary for the calendar view
pub fn format_day_summary(log: &DayLog) -> String {
    format!(
        "Date: {}\nStart: {}   End: {}   ({})\nMinutes used: {}",
        log.date.format("%Y-%m-%d"),
        mood_text(log.start),
        mood_text(log.end),
        log.trend().label(),
        log.minutes_used
    )
}

/// Format the streak counter
pub fn format_streak(days: u32) -> String {
    format!("Good-mood streak: {} days", days)
}

/// Format today's limit status
pub fn format_limit_status(status: &LimitStatus) -> String {
    let state = if status.allowed {
        "allowed"
    } else {
        "locked out"
    };
    format!(
        "Used {} of {} min today ({} remaining) — {}",
        status.used_min, status.cap_min, status.remaining_min, state
    )
}

fn kind_tag(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Text => "text",
        ContentKind::Article => "article",
        ContentKind::Image => "image",
        ContentKind::Video => "video",
    }
}

/// Format a curated feed for display
pub fn format_feed(cards: &[FeedCard]) -> String {
    if cards.is_empty() {
        return "No content found".to_string();
    }

    let mut output = String::new();
    for card in cards {
        output.push_str(&format!(
            "[{}] ({}) {}\n",
            card.id,
            kind_tag(card.kind),
            card.title
        ));
        if let Some(body) = &card.body {
            output.push_str(&format!("    {}\n", body));
        }
        if let Some(url) = &card.url {
            output.push_str(&format!("    {}\n", url));
        }
    }
    output
}
