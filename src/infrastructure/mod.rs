//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, WellnessRepository};
pub use store::{MoodStore, DEFAULT_DAILY_CAP_MIN};
