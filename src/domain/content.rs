//! Feed content: categories, the built-in catalog, and mood-based curation

use crate::domain::Mood;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Feed categories the user can open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Educate,
    Laugh,
    Motivate,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Educate => "Educate",
            Category::Laugh => "Laugh",
            Category::Motivate => "Motivate",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "educate" => Ok(Category::Educate),
            "laugh" => Ok(Category::Laugh),
            "motivate" => Ok(Category::Motivate),
            _ => Err(format!(
                "Invalid category: '{}'. Valid categories are: educate, laugh, motivate",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Article,
    Image,
    Video,
}

/// One feed card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentItem {
    pub id: &'static str,
    pub category: Category,
    pub kind: ContentKind,
    pub title: &'static str,
    pub body: Option<&'static str>,
    pub url: Option<&'static str>,
}

/// User reaction to a feed card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Smile,
    Sad,
}

impl FromStr for Reaction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smile" => Ok(Reaction::Smile),
            "sad" => Ok(Reaction::Sad),
            _ => Err(format!(
                "Invalid reaction: '{}'. Valid reactions are: smile, sad",
                s
            )),
        }
    }
}

/// Reinforcement score floor; repeated sad reactions bottom out here
const SCORE_FLOOR: i32 = -3;

/// Adjust a reinforcement score for a reaction
pub fn apply_reaction(score: i32, reaction: Reaction) -> i32 {
    match reaction {
        Reaction::Smile => score + 1,
        Reaction::Sad => (score - 1).max(SCORE_FLOOR),
    }
}

/// The built-in content catalog (demo scope; extend freely)
pub const CATALOG: &[ContentItem] = &[
    ContentItem {
        id: "edu_01",
        category: Category::Educate,
        kind: ContentKind::Text,
        title: "What is CBT?",
        body: Some("CBT builds skills to reframe unhelpful thoughts."),
        url: None,
    },
    ContentItem {
        id: "edu_02",
        category: Category::Educate,
        kind: ContentKind::Article,
        title: "Why consistent sleep improves mood & focus",
        body: Some("Try a 10-minute wind-down and screens-off before bed."),
        url: Some("https://www.sleepfoundation.org/how-sleep-works/why-do-we-need-sleep"),
    },
    ContentItem {
        id: "edu_03",
        category: Category::Educate,
        kind: ContentKind::Text,
        title: "Study hack",
        body: Some("25 minutes of focus, then a 5-minute stretch."),
        url: None,
    },
    ContentItem {
        id: "edu_04",
        category: Category::Educate,
        kind: ContentKind::Text,
        title: "Hydration boost",
        body: Some("Drink a glass of water during this session."),
        url: None,
    },
    ContentItem {
        id: "laugh_01",
        category: Category::Laugh,
        kind: ContentKind::Image,
        title: "Otter encouragement",
        body: None,
        url: Some("https://i.imgur.com/8Q3Zt.jpg"),
    },
    ContentItem {
        id: "laugh_02",
        category: Category::Laugh,
        kind: ContentKind::Video,
        title: "10s dog zoomies",
        body: None,
        url: Some("https://example.com/funny-dog-10s.mp4"),
    },
    ContentItem {
        id: "laugh_03",
        category: Category::Laugh,
        kind: ContentKind::Text,
        title: "Two-liner",
        body: Some("Why did the computer get cold? It forgot to close Windows."),
        url: None,
    },
    ContentItem {
        id: "laugh_04",
        category: Category::Laugh,
        kind: ContentKind::Text,
        title: "Tiny chuckle",
        body: Some("Parallel lines have so much in common. It's a shame they'll never meet."),
        url: None,
    },
    ContentItem {
        id: "mot_01",
        category: Category::Motivate,
        kind: ContentKind::Text,
        title: "Micro-win",
        body: Some("Sip some water now."),
        url: None,
    },
    ContentItem {
        id: "mot_02",
        category: Category::Motivate,
        kind: ContentKind::Text,
        title: "Posture reset",
        body: Some("Two minutes of stretching resets your posture."),
        url: None,
    },
    ContentItem {
        id: "mot_03",
        category: Category::Motivate,
        kind: ContentKind::Text,
        title: "Walk break",
        body: Some("A 7-minute walk beats a 7-minute scroll."),
        url: None,
    },
];

/// Look up a catalog item by id
pub fn find_item(id: &str) -> Option<&'static ContentItem> {
    CATALOG.iter().find(|item| item.id == id)
}

/// Backup category to cross-feed from, chosen by mood bucket:
/// low mood prefers Laugh/Motivate, okay prefers Motivate/Educate,
/// high prefers Educate/Motivate.
pub fn backup_for(mood: Mood, tab: Category) -> Category {
    let prefs: [Category; 2] = if mood <= Mood::Meh {
        [Category::Laugh, Category::Motivate]
    } else if mood == Mood::Okay {
        [Category::Motivate, Category::Educate]
    } else {
        [Category::Educate, Category::Motivate]
    };

    prefs.into_iter().find(|c| *c != tab).unwrap_or(prefs[0])
}

/// Curate a feed for the given mood and category tab.
///
/// Items from the requested tab come first, interleaved 2:1 with the
/// mood-chosen backup category. Within a category items are ordered by
/// reinforcement score, highest first (ties keep catalog order). Hidden
/// items never appear.
pub fn curated<F>(
    mood: Mood,
    tab: Category,
    limit: usize,
    hidden: &BTreeSet<String>,
    score_of: F,
) -> Vec<&'static ContentItem>
where
    F: Fn(&str) -> i32,
{
    let limit = if limit == 0 { 10 } else { limit };
    let backup = backup_for(mood, tab);

    let ranked = |category: Category| -> Vec<&'static ContentItem> {
        let mut items: Vec<&'static ContentItem> = CATALOG
            .iter()
            .filter(|item| item.category == category && !hidden.contains(item.id))
            .collect();
        // Stable sort keeps catalog order for equal scores.
        items.sort_by_key(|item| std::cmp::Reverse(score_of(item.id)));
        items
    };

    let mut primary = ranked(tab).into_iter();
    let mut cross = ranked(backup).into_iter();

    let mut out = Vec::new();
    loop {
        let before = out.len();
        for _ in 0..2 {
            if out.len() < limit {
                if let Some(item) = primary.next() {
                    out.push(item);
                }
            }
        }
        if out.len() < limit {
            if let Some(item) = cross.next() {
                out.push(item);
            }
        }
        if out.len() == before || out.len() >= limit {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_hidden() -> BTreeSet<String> {
        BTreeSet::new()
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("laugh").unwrap(), Category::Laugh);
        assert_eq!(Category::from_str("EDUCATE").unwrap(), Category::Educate);
        assert!(Category::from_str("memes").is_err());
    }

    #[test]
    fn test_apply_reaction_smile_and_sad() {
        assert_eq!(apply_reaction(0, Reaction::Smile), 1);
        assert_eq!(apply_reaction(0, Reaction::Sad), -1);
    }

    #[test]
    fn test_apply_reaction_floor() {
        let mut score = 0;
        for _ in 0..10 {
            score = apply_reaction(score, Reaction::Sad);
        }
        assert_eq!(score, -3);
    }

    #[test]
    fn test_backup_for_low_mood() {
        assert_eq!(backup_for(Mood::Low, Category::Educate), Category::Laugh);
        assert_eq!(backup_for(Mood::Meh, Category::Laugh), Category::Motivate);
    }

    #[test]
    fn test_backup_for_okay_and_high_mood() {
        assert_eq!(backup_for(Mood::Okay, Category::Educate), Category::Motivate);
        assert_eq!(backup_for(Mood::Great, Category::Educate), Category::Motivate);
        assert_eq!(backup_for(Mood::Good, Category::Laugh), Category::Educate);
    }

    #[test]
    fn test_curated_primary_category_leads() {
        let feed = curated(Mood::Okay, Category::Laugh, 10, &no_hidden(), |_| 0);
        assert!(!feed.is_empty());
        assert_eq!(feed[0].category, Category::Laugh);
        assert_eq!(feed[1].category, Category::Laugh);
        // Third slot is the cross-feed item.
        assert_eq!(feed[2].category, Category::Motivate);
    }

    #[test]
    fn test_curated_respects_limit() {
        let feed = curated(Mood::Okay, Category::Educate, 3, &no_hidden(), |_| 0);
        assert_eq!(feed.len(), 3);
    }

    #[test]
    fn test_curated_zero_limit_defaults_to_ten() {
        let feed = curated(Mood::Okay, Category::Educate, 0, &no_hidden(), |_| 0);
        assert!(feed.len() <= 10);
        assert!(feed.len() > 3);
    }

    #[test]
    fn test_curated_excludes_hidden() {
        let mut hidden = no_hidden();
        hidden.insert("laugh_03".to_string());
        let feed = curated(Mood::Low, Category::Laugh, 10, &hidden, |_| 0);
        assert!(feed.iter().all(|item| item.id != "laugh_03"));
    }

    #[test]
    fn test_curated_reinforcement_reorders() {
        let feed = curated(Mood::Okay, Category::Laugh, 10, &no_hidden(), |id| {
            if id == "laugh_04" {
                5
            } else {
                0
            }
        });
        assert_eq!(feed[0].id, "laugh_04");
    }

    #[test]
    fn test_curated_exhausts_both_categories() {
        let feed = curated(Mood::Okay, Category::Laugh, 50, &no_hidden(), |_| 0);
        let laughs = feed.iter().filter(|i| i.category == Category::Laugh).count();
        let crosses = feed
            .iter()
            .filter(|i| i.category == Category::Motivate)
            .count();
        assert_eq!(laughs, 4);
        assert_eq!(crosses, 3);
        assert_eq!(feed.len(), 7);
    }

    #[test]
    fn test_find_item() {
        assert!(find_item("edu_01").is_some());
        assert!(find_item("nope").is_none());
    }
}
