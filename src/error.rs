//! Error types for moodrise

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodrise application
#[derive(Debug, Error)]
pub enum MoodriseError {
    #[error("Not a moodrise directory: {0}")]
    NotMoodriseDirectory(PathBuf),

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid reaction: {0}")]
    InvalidReaction(String),

    #[error("Daily cap reached")]
    DailyCapReached,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodriseError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodriseError::NotMoodriseDirectory(_) => 2,
            MoodriseError::InvalidMood(_)
            | MoodriseError::InvalidDate(_)
            | MoodriseError::InvalidCategory(_)
            | MoodriseError::InvalidReaction(_) => 3,
            MoodriseError::DailyCapReached => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodriseError::NotMoodriseDirectory(path) => {
                format!(
                    "Not a moodrise directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodrise init' in this directory to start tracking\n\
                    • Navigate to an existing moodrise directory\n\
                    • Set MOODRISE_ROOT environment variable to your data path",
                    path.display()
                )
            }
            MoodriseError::InvalidMood(value) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Valid moods (worst to best):\n\
                    • bad (or low), meh, okay, good, great\n\
                    • Slider positions 0-4 also work\n\n\
                    Examples:\n\
                    moodrise mood good\n\
                    moodrise mood 3",
                    value
                )
            }
            MoodriseError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: moodrise calendar 2025-01-17",
                    value
                )
            }
            MoodriseError::InvalidCategory(value) => {
                format!(
                    "Invalid category: '{}'\n\n\
                    Valid categories: educate, laugh, motivate\n\
                    Example: moodrise feed laugh",
                    value
                )
            }
            MoodriseError::InvalidReaction(value) => {
                format!(
                    "Invalid reaction: '{}'\n\n\
                    Valid reactions: smile, sad\n\
                    Example: moodrise feedback edu_01 smile",
                    value
                )
            }
            MoodriseError::DailyCapReached => "Daily cap reached\n\n\
                You have used up today's feed minutes. Come back tomorrow,\n\
                or raise the cap: moodrise config daily-cap <minutes>"
                .to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodriseError
pub type Result<T> = std::result::Result<T, MoodriseError>;
