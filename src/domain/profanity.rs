//! Whole-word masking of banned terms in outgoing content

use regex::Regex;
use std::sync::OnceLock;

// Small demo list; expand safely later.
const BANNED: &[&str] = &["damn", "hell", "shit", "fuck", "bitch", "asshole"];

const MASK: &str = "•••";

static BANNED_REGEX: OnceLock<Regex> = OnceLock::new();

fn banned_regex() -> &'static Regex {
    BANNED_REGEX.get_or_init(|| {
        let pattern = format!(r"(?i)\b(?:{})\b", BANNED.join("|"));
        Regex::new(&pattern).unwrap()
    })
}

/// Replace banned words with a mask, case-insensitively and on word
/// boundaries only (so "hello" and "shellfish" pass through).
pub fn cleanse(text: &str) -> String {
    banned_regex().replace_all(text, MASK).into_owned()
}
