//! Page state machines.
//!
//! Each page owns its state and implements [`Screen`]. Rendering lives outside
//! this crate: a front end reads the page's view getters and draws them.
//!
//! Pages:
//! - [`WakeupPage`]: Boot fade plus wake button
//! - [`NavigationPage`]: Focus time slider and Start button
//! - [`FocusPage`]: Countdown with Stop/Continue, Finish and Move

mod focus;
mod navigation;
mod wakeup;

pub use focus::{
    CONTINUE_LABEL, DONE_LABEL, FINISH_LABEL, FocusPage, MOVE_LABEL, STATUS_FINISHED, STATUS_TIMES_UP, STOP_LABEL,
};
pub use navigation::{NavigationPage, START_LABEL, hours_to_slider, slider_to_hours};
pub use wakeup::{WAKE_LABEL, WakeupPage, WakeupState};

use embedded_graphics::mono_font::MonoFont;
use heapless::String;

use crate::error::Error;
use crate::events::{Effects, UiEvent};
use crate::pages::Page;

/// Longest network glyph string a page keeps.
pub const NETWORK_ICON_LEN: usize = 8;

/// Fonts handed to every page at init.
#[derive(Clone, Copy, Default)]
pub struct FontConfig<'a> {
    /// Font for labels, times and buttons.
    pub text: Option<&'a MonoFont<'a>>,
    /// Font for glyphs such as the network icon.
    pub icon: Option<&'a MonoFont<'a>>,
}

impl<'a> FontConfig<'a> {
    /// Use one font for both text and icons.
    pub const fn single(font: &'a MonoFont<'a>) -> Self { Self { text: Some(font), icon: Some(font) } }

    /// Text font, or [`Error::MissingFont`] for `page`.
    pub fn require_text(
        &self,
        page: Page,
    ) -> Result<&'a MonoFont<'a>, Error> {
        self.text.ok_or(Error::MissingFont(page))
    }
}

/// Lifecycle and input contract shared by the three pages.
pub trait Screen {
    /// Reset state and check fonts. Called once at startup.
    fn init(
        &mut self,
        fonts: &FontConfig<'_>,
    ) -> Result<(), Error>;

    /// Make the page visible.
    fn show(&mut self) -> Effects;

    /// Hide the page and stop its timers and animations.
    fn hide(&mut self);

    /// React to user input.
    fn handle_event(
        &mut self,
        event: UiEvent,
    ) -> Effects;

    /// Advance animations and timers by `elapsed_ms`.
    fn advance(
        &mut self,
        elapsed_ms: u32,
    ) -> Effects;

    /// Update the network glyph. `None` is ignored.
    fn set_network(
        &mut self,
        icon: Option<&str>,
    );

    /// Whether the page is currently shown.
    fn is_visible(&self) -> bool;
}

// =============================================================================
// Network Glyph
// =============================================================================

/// Network status glyph shown in a page corner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkIcon {
    text: String<NETWORK_ICON_LEN>,
}

impl NetworkIcon {
    /// Empty glyph.
    pub const fn new() -> Self { Self { text: String::new() } }

    /// Replace the glyph. Ignores `None` and strings that do not fit.
    pub fn update(
        &mut self,
        page: Page,
        icon: Option<&str>,
    ) {
        let Some(icon) = icon else {
            log::warn!("{} page: network icon missing, ignored", page.name());
            return;
        };

        let mut text = String::new();
        if text.push_str(icon).is_err() {
            log::warn!("{} page: network icon {:?} too long, ignored", page.name(), icon);
            return;
        }
        self.text = text;
        log::info!("{} page: network status updated: {}", page.name(), icon);
    }

    /// Current glyph text (empty until first update).
    #[inline]
    pub fn as_str(&self) -> &str { self.text.as_str() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    use super::*;

    #[test]
    fn test_require_text_font() {
        let fonts = FontConfig::single(&FONT_6X10);
        assert!(fonts.require_text(Page::Focus).is_ok());

        let empty = FontConfig::default();
        assert_eq!(empty.require_text(Page::Navigation).err(), Some(Error::MissingFont(Page::Navigation)));
    }

    #[test]
    fn test_network_icon_update() {
        let mut icon = NetworkIcon::default();
        assert_eq!(icon.as_str(), "");
        icon.update(Page::Wakeup, Some("W"));
        assert_eq!(icon.as_str(), "W");
    }

    #[test]
    fn test_network_icon_ignores_none_and_overflow() {
        let mut icon = NetworkIcon::default();
        icon.update(Page::Focus, Some("W"));
        icon.update(Page::Focus, None);
        assert_eq!(icon.as_str(), "W");
        icon.update(Page::Focus, Some("this glyph is far too long"));
        assert_eq!(icon.as_str(), "W");
    }
}
