//! Focus page: the running countdown.
//!
//! Showing the page starts a fresh session from the configured duration and
//! reports it over serial in minutes. A 1 Hz ticker counts it down. The Stop
//! button toggles pause; once the countdown has completed it returns to
//! navigation instead. Finish ends the session from any state.
//!
//! At most one ticker exists at a time: it is an `Option` that is replaced on
//! every (re)start and cleared on pause, completion, finish and hide.

use heapless::String;

use crate::config::DEFAULT_FOCUS_HOURS;
use crate::error::Error;
use crate::events::{Effect, Effects, UiEvent, effects};
use crate::format::{LABEL_LEN, format_clock};
use crate::pages::Page;
use crate::screens::{FontConfig, NetworkIcon, Screen};
use crate::serial::SerialMessage;
use crate::session::{FocusSession, SessionStatus, TickOutcome, Ticker};

// =============================================================================
// Labels
// =============================================================================

/// Stop button while the session runs.
pub const STOP_LABEL: &str = "Stop";
/// Stop button while paused.
pub const CONTINUE_LABEL: &str = "Continue";
/// Stop and Finish buttons once the session has ended.
pub const DONE_LABEL: &str = "Done";
/// Finish button while a session is active.
pub const FINISH_LABEL: &str = "Finish";
/// Move button.
pub const MOVE_LABEL: &str = "echo";

/// Status line after the countdown reaches zero.
pub const STATUS_TIMES_UP: &str = "Time's Up!";
/// Status line after Finish.
pub const STATUS_FINISHED: &str = "Finished";

/// Focus page state.
#[derive(Debug)]
pub struct FocusPage {
    visible: bool,
    session: FocusSession,
    ticker: Option<Ticker>,
    time_text: String<LABEL_LEN>,
    ring_percent: u8,
    status_text: &'static str,
    stop_label: &'static str,
    finish_label: &'static str,
    network: NetworkIcon,
}

impl Default for FocusPage {
    fn default() -> Self { Self::new() }
}

impl FocusPage {
    /// Hidden page with the default duration.
    pub fn new() -> Self {
        let mut page = Self {
            visible: false,
            session: FocusSession::new(DEFAULT_FOCUS_HOURS),
            ticker: None,
            time_text: String::new(),
            ring_percent: 0,
            status_text: "",
            stop_label: STOP_LABEL,
            finish_label: FINISH_LABEL,
            network: NetworkIcon::new(),
        };
        page.refresh();
        page
    }

    /// Set the session duration in hours.
    ///
    /// Resets the remaining time. The display is only recomputed while the
    /// countdown is running.
    pub fn set_time(
        &mut self,
        hours: f32,
    ) {
        self.session.set_time(hours);
        if self.session.is_running() {
            self.refresh();
        }
        log::info!("Focus time set to {} s", self.session.total_secs());
    }

    // =========================================================================
    // View
    // =========================================================================

    /// Session state.
    #[inline]
    pub const fn session(&self) -> &FocusSession { &self.session }

    /// Session status.
    #[inline]
    pub const fn status(&self) -> SessionStatus { self.session.status() }

    /// Whether the countdown ticker exists.
    #[inline]
    pub const fn has_ticker(&self) -> bool { self.ticker.is_some() }

    /// Remaining time as `HH:MM:SS`.
    #[inline]
    pub fn time_text(&self) -> &str { self.time_text.as_str() }

    /// Remaining share of the session for the progress ring (0-100).
    #[inline]
    pub const fn ring_percent(&self) -> u8 { self.ring_percent }

    /// Status line: empty, `"Time's Up!"` or `"Finished"`.
    #[inline]
    pub const fn status_text(&self) -> &'static str { self.status_text }

    /// Stop button label.
    #[inline]
    pub const fn stop_label(&self) -> &'static str { self.stop_label }

    /// Finish button label.
    #[inline]
    pub const fn finish_label(&self) -> &'static str { self.finish_label }

    /// Network glyph text.
    #[inline]
    pub fn network_icon(&self) -> &str { self.network.as_str() }

    // =========================================================================
    // Countdown
    // =========================================================================

    fn refresh(&mut self) {
        self.time_text = format_clock(self.session.remaining_secs());
        self.ring_percent = self.session.progress_percent();
    }

    fn start_ticker(&mut self) { self.ticker = Some(Ticker::countdown()); }

    fn stop_ticker(&mut self) { self.ticker = None; }

    /// One countdown tick.
    fn on_tick(&mut self) {
        match self.session.tick() {
            TickOutcome::Ignored => return,
            TickOutcome::Counted => {}
            TickOutcome::Completed => {
                self.stop_ticker();
                self.status_text = STATUS_TIMES_UP;
                self.stop_label = DONE_LABEL;
                self.finish_label = DONE_LABEL;
                log::info!("Focus session completed");
            }
        }
        self.refresh();
    }

    // =========================================================================
    // Input
    // =========================================================================

    fn on_stop(&mut self) -> Effects {
        if self.session.resume() {
            log::info!("Continuing focus session");
            self.start_ticker();
            self.stop_label = STOP_LABEL;
            self.status_text = "";
        } else if self.session.pause() {
            log::info!("Pausing focus session");
            self.stop_ticker();
            self.stop_label = CONTINUE_LABEL;
            self.status_text = "";
        } else {
            log::info!("Focus session over, returning to navigation");
            return effects([Effect::SwitchTo(Page::Navigation)]);
        }
        Effects::new()
    }

    fn on_finish(&mut self) -> Effects {
        self.stop_ticker();
        self.session.finish();
        self.status_text = STATUS_FINISHED;
        self.stop_label = DONE_LABEL;
        log::info!("Focus session finished by user");
        effects([Effect::Serial(SerialMessage::Reset), Effect::SwitchTo(Page::Navigation)])
    }
}

impl Screen for FocusPage {
    fn init(
        &mut self,
        fonts: &FontConfig<'_>,
    ) -> Result<(), Error> {
        fonts.require_text(Page::Focus)?;
        *self = Self::new();
        log::info!("Focus page initialized");
        Ok(())
    }

    fn show(&mut self) -> Effects {
        self.visible = true;
        self.session.start();
        self.status_text = "";
        self.stop_label = STOP_LABEL;
        self.finish_label = FINISH_LABEL;
        self.start_ticker();
        self.refresh();
        log::info!("Focus page shown with {} s", self.session.total_secs());
        effects([Effect::Serial(SerialMessage::Duration(self.session.total_minutes()))])
    }

    fn hide(&mut self) {
        self.visible = false;
        self.stop_ticker();
        self.session.stop();
        log::info!("Focus page hidden");
    }

    fn handle_event(
        &mut self,
        event: UiEvent,
    ) -> Effects {
        match event {
            UiEvent::StopButton(touch) if touch.is_release() => self.on_stop(),
            UiEvent::FinishButton(touch) if touch.is_release() => self.on_finish(),
            UiEvent::MoveButton(touch) if touch.is_release() => {
                log::info!("Move requested");
                effects([Effect::Serial(SerialMessage::Move)])
            }
            _ => Effects::new(),
        }
    }

    fn advance(
        &mut self,
        elapsed_ms: u32,
    ) -> Effects {
        let Some(ticker) = self.ticker.as_mut() else {
            return Effects::new();
        };
        ticker.accumulate(elapsed_ms);

        // Completion clears the ticker, which ends the loop
        while self.ticker.as_mut().is_some_and(Ticker::take_due) {
            self.on_tick();
        }
        Effects::new()
    }

    fn set_network(
        &mut self,
        icon: Option<&str>,
    ) {
        self.network.update(Page::Focus, icon);
    }

    fn is_visible(&self) -> bool { self.visible }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    use super::*;
    use crate::config::TICK_PERIOD_MS;
    use crate::events::Touch;

    fn shown(hours: f32) -> FocusPage {
        let mut page = FocusPage::new();
        page.init(&FontConfig::single(&FONT_6X10)).ok();
        page.set_time(hours);
        page.show();
        page
    }

    fn tick(
        page: &mut FocusPage,
        seconds: u32,
    ) {
        for _ in 0..seconds {
            page.advance(TICK_PERIOD_MS);
        }
    }

    #[test]
    fn test_init_requires_text_font() {
        let mut page = FocusPage::new();
        assert_eq!(page.init(&FontConfig::default()), Err(Error::MissingFont(Page::Focus)));
    }

    #[test]
    fn test_init_defaults() {
        let mut page = FocusPage::new();
        page.init(&FontConfig::single(&FONT_6X10)).ok();
        assert!(!page.is_visible());
        assert!(!page.has_ticker());
        assert_eq!(page.status(), SessionStatus::Idle);
        assert_eq!(page.session().total_secs(), 3600);
    }

    #[test]
    fn test_show_starts_session_and_reports_minutes() {
        let mut page = FocusPage::new();
        page.init(&FontConfig::single(&FONT_6X10)).ok();
        page.set_time(1.5);
        let out = page.show();
        assert_eq!(out.as_slice(), &[Effect::Serial(SerialMessage::Duration(90))]);
        assert_eq!(page.status(), SessionStatus::Running);
        assert!(page.has_ticker());
        assert_eq!(page.time_text(), "01:30:00");
        assert_eq!(page.ring_percent(), 100);
        assert_eq!(page.status_text(), "");
        assert_eq!(page.stop_label(), STOP_LABEL);
    }

    #[test]
    fn test_one_hour_runs_to_times_up() {
        let mut page = shown(1.0);
        tick(&mut page, 3599);
        assert_eq!(page.time_text(), "00:00:01");
        assert_eq!(page.status(), SessionStatus::Running);

        tick(&mut page, 1);
        assert_eq!(page.time_text(), "00:00:00");
        assert_eq!(page.status_text(), STATUS_TIMES_UP);
        assert_eq!(page.stop_label(), DONE_LABEL);
        assert_eq!(page.finish_label(), DONE_LABEL);
        assert_eq!(page.ring_percent(), 0);
        assert!(!page.has_ticker(), "completion cancels the ticker");
    }

    #[test]
    fn test_large_advance_stops_at_zero() {
        let mut page = shown(0.01);
        page.advance(3_600_000);
        assert_eq!(page.session().remaining_secs(), 0);
        assert_eq!(page.status(), SessionStatus::Completed);
    }

    #[test]
    fn test_partial_periods_accumulate() {
        let mut page = shown(1.0);
        page.advance(400);
        page.advance(400);
        assert_eq!(page.session().remaining_secs(), 3600);
        page.advance(200);
        assert_eq!(page.session().remaining_secs(), 3599);
    }

    #[test]
    fn test_pause_and_continue() {
        let mut page = shown(1.0);
        tick(&mut page, 10);

        assert!(page.handle_event(UiEvent::StopButton(Touch::Released)).is_empty());
        assert_eq!(page.status(), SessionStatus::Paused);
        assert_eq!(page.stop_label(), CONTINUE_LABEL);
        assert!(!page.has_ticker());
        let held = page.session().remaining_secs();

        tick(&mut page, 100);
        assert_eq!(page.session().remaining_secs(), held);

        page.handle_event(UiEvent::StopButton(Touch::PressLost));
        assert_eq!(page.status(), SessionStatus::Running);
        assert_eq!(page.stop_label(), STOP_LABEL);
        assert!(page.has_ticker());
        assert_eq!(page.session().remaining_secs(), held);
    }

    #[test]
    fn test_stop_after_completion_returns_to_navigation() {
        let mut page = shown(0.001);
        tick(&mut page, 4);
        assert_eq!(page.status(), SessionStatus::Completed);
        let out = page.handle_event(UiEvent::StopButton(Touch::Released));
        assert_eq!(out.as_slice(), &[Effect::SwitchTo(Page::Navigation)]);
    }

    #[test]
    fn test_finish_from_running_and_paused() {
        for pause_first in [false, true] {
            let mut page = shown(1.0);
            tick(&mut page, 5);
            if pause_first {
                page.handle_event(UiEvent::StopButton(Touch::Released));
            }
            let out = page.handle_event(UiEvent::FinishButton(Touch::Released));
            assert_eq!(out.as_slice(), &[Effect::Serial(SerialMessage::Reset), Effect::SwitchTo(Page::Navigation)]);
            assert!(!page.has_ticker());
            assert_eq!(page.status_text(), STATUS_FINISHED);
            assert_eq!(page.stop_label(), DONE_LABEL);
        }
    }

    #[test]
    fn test_move_only_sends_serial() {
        let mut page = shown(1.0);
        let out = page.handle_event(UiEvent::MoveButton(Touch::Released));
        assert_eq!(out.as_slice(), &[Effect::Serial(SerialMessage::Move)]);
        assert_eq!(page.status(), SessionStatus::Running);
        assert!(page.handle_event(UiEvent::MoveButton(Touch::Pressed)).is_empty());
    }

    #[test]
    fn test_set_time_refreshes_only_while_running() {
        let mut page = shown(1.0);
        page.set_time(2.0);
        assert_eq!(page.time_text(), "02:00:00");

        page.handle_event(UiEvent::StopButton(Touch::Released));
        page.set_time(0.5);
        assert_eq!(page.time_text(), "02:00:00", "paused display is not refreshed");
        assert_eq!(page.session().remaining_secs(), 1800);
    }

    #[test]
    fn test_zero_duration_ring_is_empty() {
        let page = shown(0.0);
        assert_eq!(page.ring_percent(), 0);
        assert_eq!(page.time_text(), "00:00:00");
    }

    #[test]
    fn test_hide_cancels_ticker() {
        let mut page = shown(1.0);
        page.hide();
        assert!(!page.is_visible());
        assert!(!page.has_ticker());
        assert_eq!(page.status(), SessionStatus::Idle);
        tick(&mut page, 5);
        assert_eq!(page.session().remaining_secs(), 3600);
    }

    #[test]
    fn test_show_twice_keeps_single_ticker() {
        let mut page = shown(1.0);
        page.advance(500);
        page.show();
        page.advance(600);
        assert_eq!(page.session().remaining_secs(), 3600, "fresh ticker discards old accumulation");
    }
}
