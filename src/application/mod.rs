//! Application layer - Use cases and orchestration

pub mod calendar;
pub mod feed;
pub mod init;
pub mod log_mood;
pub mod manage_config;
pub mod reminders;
pub mod session;
pub mod usage;

pub use feed::FeedCard;
pub use manage_config::ConfigService;
pub use session::SessionService;
pub use usage::LimitStatus;
