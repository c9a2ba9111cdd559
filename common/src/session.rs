//! Focus session countdown.
//!
//! A session counts a configured duration down to zero in one-second ticks.
//! Durations are entered in hours (the unit the slider works in) and stored as
//! whole seconds, so `3600 * T` ticks always land exactly on zero.
//!
//! # States
//!
//! ```text
//! Idle --start--> Running <--pause/resume--> Paused
//!                    |                          |
//!                    +--last tick--> Completed  |
//!                    +--finish----> Finished <--+
//! ```
//!
//! Running and paused are a single status value, so the session can never be
//! both at once.

use micromath::F32Ext;

use crate::config::{SECONDS_PER_HOUR, TICK_PERIOD_MS};

/// Lifecycle status of a focus session.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum SessionStatus {
    /// Not started (focus page hidden).
    #[default]
    Idle,
    /// Counting down.
    Running,
    /// Countdown held by the user.
    Paused,
    /// Countdown reached zero.
    Completed,
    /// Ended early by the user.
    Finished,
}

/// Result of a single tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// Session not running; nothing changed.
    Ignored,
    /// One second removed.
    Counted,
    /// Last second removed; session is now completed.
    Completed,
}

/// Convert hours to whole seconds, rounding to the nearest second.
#[inline]
pub fn hours_to_secs(hours: f32) -> u32 {
    if hours <= 0.0 {
        return 0;
    }
    F32Ext::round(hours * SECONDS_PER_HOUR as f32) as u32
}

/// Total and remaining time plus run state of one use of the focus page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusSession {
    total_secs: u32,
    remaining_secs: u32,
    status: SessionStatus,
}

impl FocusSession {
    /// Create an idle session of `hours`.
    pub fn new(hours: f32) -> Self {
        let secs = hours_to_secs(hours);
        Self { total_secs: secs, remaining_secs: secs, status: SessionStatus::Idle }
    }

    /// Replace the configured duration. Remaining time is reset to it.
    pub fn set_time(
        &mut self,
        hours: f32,
    ) {
        self.total_secs = hours_to_secs(hours);
        self.remaining_secs = self.total_secs;
    }

    /// Restart the countdown from the full duration.
    pub fn start(&mut self) {
        self.remaining_secs = self.total_secs;
        self.status = SessionStatus::Running;
    }

    /// Remove one second if running.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != SessionStatus::Running {
            return TickOutcome::Ignored;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.status = SessionStatus::Completed;
            TickOutcome::Completed
        } else {
            TickOutcome::Counted
        }
    }

    /// Hold the countdown. Returns `false` if it was not running.
    pub fn pause(&mut self) -> bool {
        if self.status != SessionStatus::Running {
            return false;
        }
        self.status = SessionStatus::Paused;
        true
    }

    /// Continue a held countdown. Returns `false` if it was not paused.
    pub fn resume(&mut self) -> bool {
        if self.status != SessionStatus::Paused {
            return false;
        }
        self.status = SessionStatus::Running;
        true
    }

    /// End the session early.
    pub fn finish(&mut self) { self.status = SessionStatus::Finished; }

    /// Return to idle (page hidden).
    pub fn stop(&mut self) { self.status = SessionStatus::Idle; }

    /// Current status.
    #[inline]
    pub const fn status(&self) -> SessionStatus { self.status }

    /// Whether the countdown is actively running.
    #[inline]
    pub fn is_running(&self) -> bool { self.status == SessionStatus::Running }

    /// Whether the countdown is held.
    #[inline]
    pub fn is_paused(&self) -> bool { self.status == SessionStatus::Paused }

    /// Configured duration in seconds.
    #[inline]
    pub const fn total_secs(&self) -> u32 { self.total_secs }

    /// Time left in seconds.
    #[inline]
    pub const fn remaining_secs(&self) -> u32 { self.remaining_secs }

    /// Time left in hours.
    #[inline]
    pub fn remaining_hours(&self) -> f32 { self.remaining_secs as f32 / SECONDS_PER_HOUR as f32 }

    /// Configured duration in whole minutes (truncated).
    #[inline]
    pub const fn total_minutes(&self) -> u32 { self.total_secs / 60 }

    /// Remaining fraction of the session as a truncated percentage.
    ///
    /// A zero-length session reports 0.
    pub fn progress_percent(&self) -> u8 {
        if self.total_secs == 0 {
            return 0;
        }
        (u64::from(self.remaining_secs) * 100 / u64::from(self.total_secs)) as u8
    }
}

// =============================================================================
// Countdown Ticker
// =============================================================================

/// Periodic timer that fires once per elapsed period.
///
/// Owned as an `Option` so that creating a new ticker always replaces the old
/// one; two tickers can never coexist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticker {
    period_ms: u32,
    accumulated_ms: u32,
}

impl Ticker {
    /// Ticker firing every `period_ms`.
    pub const fn new(period_ms: u32) -> Self { Self { period_ms, accumulated_ms: 0 } }

    /// The countdown's 1 Hz ticker.
    pub const fn countdown() -> Self { Self::new(TICK_PERIOD_MS) }

    /// Consume one period if enough time has accumulated.
    ///
    /// Call [`Ticker::accumulate`] first, then drain with this until it
    /// returns `false`.
    pub fn take_due(&mut self) -> bool {
        if self.period_ms == 0 || self.accumulated_ms < self.period_ms {
            return false;
        }
        self.accumulated_ms -= self.period_ms;
        true
    }

    /// Add elapsed time.
    #[inline]
    pub fn accumulate(
        &mut self,
        elapsed_ms: u32,
    ) {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_to_secs() {
        assert_eq!(hours_to_secs(1.0), 3600);
        assert_eq!(hours_to_secs(0.5), 1800);
        assert_eq!(hours_to_secs(0.02), 72);
        assert_eq!(hours_to_secs(0.0), 0);
        assert_eq!(hours_to_secs(-3.0), 0);
    }

    #[test]
    fn test_start_resets_remaining() {
        let mut session = FocusSession::new(1.0);
        session.start();
        for _ in 0..10 {
            session.tick();
        }
        assert_eq!(session.remaining_secs(), 3590);
        session.start();
        assert_eq!(session.remaining_secs(), 3600);
        assert!(session.is_running());
    }

    #[test]
    fn test_full_hour_reaches_zero_exactly() {
        let mut session = FocusSession::new(1.0);
        session.start();
        for i in 1..3600 {
            assert_eq!(session.tick(), TickOutcome::Counted, "tick {i}");
        }
        assert_eq!(session.tick(), TickOutcome::Completed);
        assert_eq!(session.remaining_secs(), 0);
        assert_eq!(session.status(), SessionStatus::Completed);
        assert_eq!(session.tick(), TickOutcome::Ignored, "no ticks after completion");
        assert_eq!(session.remaining_secs(), 0);
    }

    #[test]
    fn test_each_tick_removes_one_second() {
        let mut session = FocusSession::new(2.0);
        session.start();
        let before = session.remaining_hours();
        session.tick();
        let delta = before - session.remaining_hours();
        assert!((delta - 1.0 / 3600.0).abs() < 1e-6);
    }

    #[test]
    fn test_pause_holds_remaining_time() {
        let mut session = FocusSession::new(1.0);
        session.start();
        session.tick();
        assert!(session.pause());
        let held = session.remaining_secs();
        for _ in 0..100 {
            assert_eq!(session.tick(), TickOutcome::Ignored);
        }
        assert!(session.resume());
        assert_eq!(session.remaining_secs(), held);
        assert!(session.is_running() && !session.is_paused());
    }

    #[test]
    fn test_pause_resume_guards() {
        let mut session = FocusSession::new(1.0);
        assert!(!session.pause(), "idle session cannot pause");
        assert!(!session.resume(), "idle session cannot resume");
        session.start();
        assert!(!session.resume(), "running session cannot resume");
    }

    #[test]
    fn test_finish_and_stop() {
        let mut session = FocusSession::new(1.0);
        session.start();
        session.finish();
        assert_eq!(session.status(), SessionStatus::Finished);
        assert_eq!(session.tick(), TickOutcome::Ignored);
        session.stop();
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[test]
    fn test_zero_length_session_never_counts() {
        let mut session = FocusSession::new(0.0);
        session.start();
        assert_eq!(session.progress_percent(), 0);
        assert_eq!(session.tick(), TickOutcome::Completed);
        assert_eq!(session.remaining_secs(), 0);
    }

    #[test]
    fn test_progress_percent() {
        let mut session = FocusSession::new(1.0);
        session.start();
        assert_eq!(session.progress_percent(), 100);
        for _ in 0..1800 {
            session.tick();
        }
        assert_eq!(session.progress_percent(), 50);
        session.tick();
        assert_eq!(session.progress_percent(), 49, "percentage truncates");
    }

    #[test]
    fn test_total_minutes_truncates() {
        assert_eq!(FocusSession::new(1.0).total_minutes(), 60);
        assert_eq!(FocusSession::new(0.02).total_minutes(), 1);
        assert_eq!(FocusSession::new(1.99).total_minutes(), 119);
    }

    #[test]
    fn test_ticker_fires_per_period() {
        let mut ticker = Ticker::countdown();
        ticker.accumulate(2500);
        assert!(ticker.take_due());
        assert!(ticker.take_due());
        assert!(!ticker.take_due(), "500 ms left over is not a full period");
        ticker.accumulate(500);
        assert!(ticker.take_due());
    }
}
