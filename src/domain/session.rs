//! Session timer state machine.
//!
//! Wall-clock based, no internal threads: the caller is responsible for
//! calling `tick()` periodically and reacting to the returned events.
//! Nothing here is persisted; a restart starts a fresh session.
//!
//! ## Events
//!
//! - `MinuteElapsed` once per elapsed minute (the caller increments the
//!   day's usage counter by one per event)
//! - `CheckInDue` after an initial delay, then at a fixed interval,
//!   indefinitely
//! - `CapReached` exactly once, when the remaining budget runs out; the
//!   timer then stays in `LockedOut`

pub const MS_PER_MINUTE: u64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    LockedOut,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    MinuteElapsed,
    CheckInDue,
    CapReached,
}

/// Countdown sized to the minutes remaining in the daily cap, with a
/// periodic check-in prompt layered on top.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    /// Budget left before lockout, in milliseconds.
    remaining_ms: u64,
    /// Total session time processed so far.
    elapsed_ms: u64,
    /// Progress toward the next MinuteElapsed event.
    minute_carry_ms: u64,
    /// Elapsed offset at which the next CheckInDue fires.
    next_check_in_ms: u64,
    check_in_interval_ms: u64,
    state: SessionState,
    /// Epoch ms of the last tick; used to compute wall-clock deltas.
    last_tick_epoch_ms: Option<u64>,
}

impl SessionTimer {
    /// Create a timer with a usage budget and check-in cadence, all in
    /// minutes. A zero budget locks out on the first tick.
    pub fn new(remaining_min: u32, first_check_min: u32, check_in_interval_min: u32) -> Self {
        SessionTimer {
            remaining_ms: u64::from(remaining_min) * MS_PER_MINUTE,
            elapsed_ms: 0,
            minute_carry_ms: 0,
            next_check_in_ms: u64::from(first_check_min) * MS_PER_MINUTE,
            check_in_interval_ms: u64::from(check_in_interval_min) * MS_PER_MINUTE,
            state: SessionState::Idle,
            last_tick_epoch_ms: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn minutes_elapsed(&self) -> u32 {
        (self.elapsed_ms / MS_PER_MINUTE) as u32
    }

    pub fn start(&mut self) {
        self.start_at(now_ms());
    }

    pub fn start_at(&mut self, now_epoch_ms: u64) {
        if self.state == SessionState::Idle {
            self.state = SessionState::Running;
            self.last_tick_epoch_ms = Some(now_epoch_ms);
        }
    }

    /// Stop the timer without lockout. Idempotent; a cancelled timer
    /// emits no further events.
    pub fn cancel(&mut self) {
        if self.state == SessionState::Running {
            self.state = SessionState::Cancelled;
            self.last_tick_epoch_ms = None;
        }
    }

    /// Call periodically. Returns the events that came due since the
    /// last tick, in order.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        self.tick_at(now_ms())
    }

    /// Tick against an explicit clock reading.
    pub fn tick_at(&mut self, now_epoch_ms: u64) -> Vec<SessionEvent> {
        if self.state != SessionState::Running {
            return Vec::new();
        }

        let last = self.last_tick_epoch_ms.unwrap_or(now_epoch_ms);
        self.last_tick_epoch_ms = Some(now_epoch_ms);

        // Time past the budget does not count toward usage or check-ins.
        let delta = now_epoch_ms.saturating_sub(last).min(self.remaining_ms);
        self.remaining_ms -= delta;
        self.elapsed_ms += delta;
        self.minute_carry_ms += delta;

        let mut events = Vec::new();

        while self.minute_carry_ms >= MS_PER_MINUTE {
            self.minute_carry_ms -= MS_PER_MINUTE;
            events.push(SessionEvent::MinuteElapsed);
        }

        while self.check_in_interval_ms > 0 && self.elapsed_ms >= self.next_check_in_ms {
            self.next_check_in_ms += self.check_in_interval_ms;
            events.push(SessionEvent::CheckInDue);
        }

        if self.remaining_ms == 0 {
            self.state = SessionState::LockedOut;
            self.last_tick_epoch_ms = None;
            events.push(SessionEvent::CapReached);
        }

        events
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
