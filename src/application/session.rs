//! Live session use case: drives the session timer against the store

use crate::application::log_mood;
use crate::domain::{tips, Mood, SessionEvent, SessionState, SessionTimer};
use crate::error::{MoodriseError, Result};
use crate::infrastructure::{Config, MoodStore};
use chrono::NaiveDate;
use rand::Rng;
use std::thread;
use std::time::Duration;

/// Owns the store for the duration of one feed session
pub struct SessionService {
    store: MoodStore,
    config: Config,
}

impl SessionService {
    pub fn new(store: MoodStore, config: Config) -> Self {
        SessionService { store, config }
    }

    pub fn store(&self) -> &MoodStore {
        &self.store
    }

    /// Gate on the daily cap and build a timer sized to the minutes
    /// remaining today.
    pub fn begin(&self, date: NaiveDate) -> Result<SessionTimer> {
        let cap = self.store.daily_cap_min();
        let used = self.store.minutes_used(date);
        if used >= cap {
            return Err(MoodriseError::DailyCapReached);
        }
        Ok(SessionTimer::new(
            cap - used,
            self.config.first_check_min,
            self.config.check_in_interval_min,
        ))
    }

    /// One minute of feed time elapsed; returns the day's new total.
    /// Reloads the store first: the check-in prompt sends the user to a
    /// second process, and its writes must survive ours.
    pub fn on_minute(&mut self, date: NaiveDate) -> Result<u32> {
        self.store.reload()?;
        self.store.add_minutes(date, 1)
    }

    /// Record the end-of-session mood unless one was already logged
    /// this session. Uses the current mood, falling back to Okay.
    pub fn log_end_if_needed(&mut self, date: NaiveDate, end_logged: bool) -> Result<Option<Mood>> {
        if end_logged {
            return Ok(None);
        }
        self.store.reload()?;
        log_mood::end_session(&mut self.store, date, None).map(Some)
    }

    /// Run the session interactively: tick once a second, bump the
    /// usage counter each minute, prompt for check-ins, and lock out
    /// when the cap runs dry. `max_minutes` ends the session early.
    ///
    /// This loop sleeps on the real clock; the timer logic it drives is
    /// tested separately through `SessionTimer::tick_at`.
    pub fn run(&mut self, date: NaiveDate, max_minutes: Option<u32>) -> Result<()> {
        let mut timer = self.begin(date)?;
        timer.start();

        loop {
            thread::sleep(Duration::from_secs(1));

            for event in timer.tick() {
                match event {
                    SessionEvent::MinuteElapsed => {
                        let total = self.on_minute(date)?;
                        println!("… {} min used today", total);
                    }
                    SessionEvent::CheckInDue => {
                        println!("{}", check_in_prompt(&mut rand::thread_rng()));
                    }
                    SessionEvent::CapReached => {
                        if let Some(mood) = self.log_end_if_needed(date, false)? {
                            println!("End-of-session mood recorded: {}", mood);
                        }
                        println!("Daily cap reached. Session locked out; see you tomorrow.");
                        return Ok(());
                    }
                }
            }

            if timer.state() != SessionState::Running {
                return Ok(());
            }

            if let Some(max) = max_minutes {
                if timer.minutes_elapsed() >= max {
                    timer.cancel();
                    if let Some(mood) = self.log_end_if_needed(date, false)? {
                        println!("End-of-session mood recorded: {}", mood);
                    }
                    println!("Session over after {} min.", timer.minutes_elapsed());
                    return Ok(());
                }
            }
        }
    }
}

/// Check-in prompt shown mid-session, with a wellness tip attached
fn check_in_prompt<R: Rng>(rng: &mut R) -> String {
    format!(
        "Quick check-in: how do you feel right now? \
        (record it with 'moodrise checkin <mood>')\nTip: {}",
        tips::random_tip(rng)
    )
}
