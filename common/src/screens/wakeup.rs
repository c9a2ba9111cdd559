//! Wakeup page: boot fade and the wake button.
//!
//! On init the page fades in from black over [`BOOT_FADE_DURATION_MS`]. Touch
//! is ignored until the fade completes. Pressing the button grows it to 120%;
//! releasing (or sliding off) shrinks it back and moves on to navigation
//! straight away, without waiting for the shrink to finish.

use crate::animations::Tween;
use crate::config::{
    BOOT_FADE_DURATION_MS, BUTTON_SCALE_DURATION_MS, BUTTON_SCALE_PRESSED, BUTTON_SCALE_REST, SHADOW_OPACITY_PCT,
    WAKE_BUTTON_SIZE,
};
use crate::error::Error;
use crate::events::{Effect, Effects, Touch, UiEvent, effects};
use crate::pages::Page;
use crate::screens::{FontConfig, NetworkIcon, Screen};

/// Label shown inside the wake button.
pub const WAKE_LABEL: &str = "Believe";

/// Fully opaque.
const OPAQUE: i32 = 255;

/// Visibility state of the wakeup page.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum WakeupState {
    /// Container hidden.
    #[default]
    Hidden,
    /// Waiting for the user to press the wake button.
    Wait,
}

/// Wakeup page state.
#[derive(Debug)]
pub struct WakeupPage {
    state: WakeupState,
    boot_fade: Tween,
    boot_fade_completed: bool,
    button_scale: Option<Tween>,
    network: NetworkIcon,
}

impl Default for WakeupPage {
    fn default() -> Self { Self::new() }
}

impl WakeupPage {
    /// Hidden page with the fade not yet started.
    pub const fn new() -> Self {
        Self {
            state: WakeupState::Hidden,
            boot_fade: Tween::new(0, OPAQUE, BOOT_FADE_DURATION_MS),
            boot_fade_completed: false,
            button_scale: None,
            network: NetworkIcon::new(),
        }
    }

    // =========================================================================
    // View
    // =========================================================================

    /// Current visibility state.
    #[inline]
    pub const fn state(&self) -> WakeupState { self.state }

    /// Whether touch input is accepted yet.
    #[inline]
    pub const fn boot_fade_completed(&self) -> bool { self.boot_fade_completed }

    /// Background, button and network glyph opacity (0-255).
    #[inline]
    pub fn opacity(&self) -> u8 { self.boot_fade.value().clamp(0, OPAQUE) as u8 }

    /// Shadow opacity (0-255), a fixed share of the main opacity.
    #[inline]
    pub fn shadow_opacity(&self) -> u8 { (u32::from(self.opacity()) * SHADOW_OPACITY_PCT / 100) as u8 }

    /// Button scale in percent.
    #[inline]
    pub fn button_scale(&self) -> i32 { self.button_scale.map_or(BUTTON_SCALE_REST, |tween| tween.value()) }

    /// Button diameter in pixels at the current scale.
    #[inline]
    pub fn button_size(&self) -> u32 { WAKE_BUTTON_SIZE * self.button_scale().max(0) as u32 / 100 }

    /// Network glyph text.
    #[inline]
    pub fn network_icon(&self) -> &str { self.network.as_str() }

    // =========================================================================
    // Input
    // =========================================================================

    fn start_scale(
        &mut self,
        from: i32,
        to: i32,
    ) {
        // Replaces any running scale animation
        self.button_scale = Some(Tween::new(from, to, BUTTON_SCALE_DURATION_MS));
    }

    fn on_button(
        &mut self,
        touch: Touch,
    ) -> Effects {
        if !self.boot_fade_completed {
            log::debug!("Wake button ignored during boot fade");
            return Effects::new();
        }

        if touch.is_release() {
            log::info!("Wake button released - switching to navigation");
            self.start_scale(BUTTON_SCALE_PRESSED, BUTTON_SCALE_REST);
            effects([Effect::SwitchTo(Page::Navigation)])
        } else {
            log::info!("Wake button pressed");
            self.start_scale(BUTTON_SCALE_REST, BUTTON_SCALE_PRESSED);
            Effects::new()
        }
    }
}

impl Screen for WakeupPage {
    fn init(
        &mut self,
        _fonts: &FontConfig<'_>,
    ) -> Result<(), Error> {
        *self = Self::new();
        self.state = WakeupState::Wait;
        log::info!("Boot fade animation started");
        Ok(())
    }

    fn show(&mut self) -> Effects {
        if self.state == WakeupState::Hidden {
            self.state = WakeupState::Wait;
        }
        self.button_scale = None;
        log::info!("Wakeup page shown");
        Effects::new()
    }

    fn hide(&mut self) {
        self.button_scale = None;
        if !self.boot_fade_completed {
            self.boot_fade.finish();
            self.boot_fade_completed = true;
        }
        self.state = WakeupState::Hidden;
        log::info!("Wakeup page hidden");
    }

    fn handle_event(
        &mut self,
        event: UiEvent,
    ) -> Effects {
        match event {
            UiEvent::WakeButton(touch) if self.state == WakeupState::Wait => self.on_button(touch),
            _ => Effects::new(),
        }
    }

    fn advance(
        &mut self,
        elapsed_ms: u32,
    ) -> Effects {
        if self.state == WakeupState::Hidden {
            return Effects::new();
        }

        if self.boot_fade.advance(elapsed_ms) {
            self.boot_fade_completed = true;
            log::info!("Boot fade animation completed - wait page fully visible");
        }

        if let Some(tween) = self.button_scale.as_mut() {
            tween.advance(elapsed_ms);
        }
        Effects::new()
    }

    fn set_network(
        &mut self,
        icon: Option<&str>,
    ) {
        self.network.update(Page::Wakeup, icon);
    }

    fn is_visible(&self) -> bool { self.state == WakeupState::Wait }
}

// =============================================================================
// Tests
// =============================================================================
