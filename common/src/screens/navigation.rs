//! Navigation page: pick a focus time and start.
//!
//! The slider position (0-100) maps linearly onto 0-2 hours. Every change
//! recomputes the duration label and blends the background between the two
//! gradient endpoints by the selected fraction of the range.

use embedded_graphics::pixelcolor::Rgb888;
use heapless::String;

use crate::colors::{NAV_GRADIENT_END, NAV_GRADIENT_START, lerp_rgb888};
use crate::config::{DEFAULT_FOCUS_HOURS, NAV_TIME_MAX, NAV_TIME_MIN, SLIDER_MAX};
use crate::error::Error;
use crate::events::{Effect, Effects, Touch, UiEvent, effects};
use crate::format::{LABEL_LEN, format_duration};
use crate::pages::Page;
use crate::screens::{FontConfig, NetworkIcon, Screen};
use crate::serial::SerialMessage;

/// Start button label.
pub const START_LABEL: &str = "Start";

/// Hours selected by a slider position. Positions above the range clamp.
#[inline]
pub fn slider_to_hours(position: u8) -> f32 {
    let position = position.min(SLIDER_MAX);
    f32::from(position) / f32::from(SLIDER_MAX) * NAV_TIME_MAX
}

/// Slider position showing `hours` (truncated).
#[inline]
pub fn hours_to_slider(hours: f32) -> u8 {
    let hours = hours.clamp(NAV_TIME_MIN, NAV_TIME_MAX);
    (hours / NAV_TIME_MAX * f32::from(SLIDER_MAX)) as u8
}

/// Navigation page state.
#[derive(Debug)]
pub struct NavigationPage {
    visible: bool,
    slider: u8,
    selected_time: f32,
    time_label: String<LABEL_LEN>,
    background: Rgb888,
    network: NetworkIcon,
}

impl Default for NavigationPage {
    fn default() -> Self { Self::new() }
}

impl NavigationPage {
    /// Hidden page with the default selection.
    pub fn new() -> Self {
        let mut page = Self {
            visible: false,
            slider: 0,
            selected_time: DEFAULT_FOCUS_HOURS,
            time_label: String::new(),
            background: NAV_GRADIENT_START,
            network: NetworkIcon::new(),
        };
        page.set_selected_time(DEFAULT_FOCUS_HOURS);
        page
    }

    /// Currently selected focus time in hours.
    #[inline]
    pub const fn selected_time(&self) -> f32 { self.selected_time }

    /// Select `hours` directly and move the slider to match.
    pub fn set_selected_time(
        &mut self,
        hours: f32,
    ) {
        self.selected_time = hours.clamp(NAV_TIME_MIN, NAV_TIME_MAX);
        self.slider = hours_to_slider(self.selected_time);
        self.refresh();
    }

    /// Slider position (0-100).
    #[inline]
    pub const fn slider(&self) -> u8 { self.slider }

    /// Duration label, e.g. `"1h 30min"`.
    #[inline]
    pub fn time_label(&self) -> &str { self.time_label.as_str() }

    /// Background color for the current selection.
    #[inline]
    pub const fn background(&self) -> Rgb888 { self.background }

    /// Network glyph text.
    #[inline]
    pub fn network_icon(&self) -> &str { self.network.as_str() }

    fn refresh(&mut self) {
        self.time_label = format_duration(self.selected_time);
        self.background = lerp_rgb888(NAV_GRADIENT_START, NAV_GRADIENT_END, self.selected_time / NAV_TIME_MAX);
    }

    fn on_slider(
        &mut self,
        position: u8,
    ) {
        self.slider = position.min(SLIDER_MAX);
        self.selected_time = slider_to_hours(self.slider);
        self.refresh();
        log::debug!("Slider at {} -> {}", self.slider, self.time_label.as_str());
    }

    fn on_start(
        &mut self,
        touch: Touch,
    ) -> Effects {
        if !touch.is_release() {
            return Effects::new();
        }
        log::info!("Start pressed with {} selected", self.time_label.as_str());
        effects([
            Effect::SetFocusTime(self.selected_time),
            Effect::Serial(SerialMessage::Start),
            Effect::SwitchTo(Page::Focus),
        ])
    }
}

impl Screen for NavigationPage {
    fn init(
        &mut self,
        fonts: &FontConfig<'_>,
    ) -> Result<(), Error> {
        fonts.require_text(Page::Navigation)?;
        *self = Self::new();
        log::info!("Navigation page initialized");
        Ok(())
    }

    fn show(&mut self) -> Effects {
        self.visible = true;
        log::info!("Navigation page shown");
        Effects::new()
    }

    fn hide(&mut self) {
        self.visible = false;
        log::info!("Navigation page hidden");
    }

    fn handle_event(
        &mut self,
        event: UiEvent,
    ) -> Effects {
        match event {
            UiEvent::Slider(position) => {
                self.on_slider(position);
                Effects::new()
            }
            UiEvent::StartButton(touch) => self.on_start(touch),
            _ => Effects::new(),
        }
    }

    fn advance(
        &mut self,
        _elapsed_ms: u32,
    ) -> Effects {
        Effects::new()
    }

    fn set_network(
        &mut self,
        icon: Option<&str>,
    ) {
        self.network.update(Page::Navigation, icon);
    }

    fn is_visible(&self) -> bool { self.visible }
}

// =============================================================================
// Tests
// =============================================================================
