//! moodrise - Terminal mood tracking and mindful screen time
//!
//! A command-line wellness application: log your mood, browse
//! mood-curated content feeds under a daily minute cap, and follow
//! your good-mood streak on the calendar.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodriseError;
