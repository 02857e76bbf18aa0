//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodrise")]
#[command(about = "Terminal mood tracking and mindful screen time", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new data directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show or set the current mood (bad, meh, okay, good, great, or 0-4)
    Mood {
        /// Mood to set; omit to show the current mood
        value: Option<String>,
    },

    /// Quick check-in: update the current mood mid-session
    Checkin {
        /// How you feel right now
        mood: String,
    },

    /// Log the end-of-session mood for today
    End {
        /// Mood to record; defaults to the current mood
        mood: Option<String>,
    },

    /// Show today's usage against the daily cap
    Status,

    /// Show start/end moods and minutes for a day
    Calendar {
        /// Date (YYYY-MM-DD); defaults to today
        date: Option<String>,
    },

    /// Show the good-mood streak
    Streak,

    /// Show a curated content feed (educate, laugh, motivate)
    Feed {
        /// Feed category
        category: String,

        /// Maximum number of cards
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// React to a feed card (smile, sad)
    Feedback {
        /// Card id from feed output
        item_id: String,

        /// Your reaction
        reaction: String,
    },

    /// Hide a feed card from future feeds
    Hide {
        /// Card id from feed output
        item_id: String,
    },

    /// Show today's wellness reminders
    Tips {
        /// Print a single immediate nudge instead of the schedule
        #[arg(long)]
        nudge: bool,
    },

    /// Run a live feed session until the daily cap locks out
    Session {
        /// Feed category to browse
        category: String,

        /// End the session after this many minutes
        #[arg(short, long)]
        minutes: Option<u32>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Clear today's logs and usage counter (demo reset)
    Reset,
}
