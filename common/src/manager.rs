//! Page manager.
//!
//! Owns the three pages and the serial port, tracks which page is current and
//! carries out the [`Effect`]s pages return. Pages are reached through a table
//! indexed by [`Page::index`], so switching never needs a per-page match.
//!
//! # Lifecycle
//!
//! ```text
//! init(fonts) ──> Wakeup ──wake──> Navigation ──start──> Focus
//!                                      ^                   │
//!                                      └──finish / done────┘
//! ```
//!
//! Switching hides the current page, shows the target, applies the effects
//! `show` returned, then records the target as current.

use crate::error::Error;
use crate::events::{Effect, Effects, UiEvent};
use crate::pages::{PAGE_COUNT, Page};
use crate::screens::{FocusPage, FontConfig, NavigationPage, Screen, WakeupPage};
use crate::serial::{self, SerialPort};

/// Front panel page manager.
pub struct PageManager<S> {
    serial: S,
    wakeup: WakeupPage,
    navigation: NavigationPage,
    focus: FocusPage,
    current: Page,
    initialized: [bool; PAGE_COUNT],
}

impl<S: SerialPort> PageManager<S> {
    /// Create a manager writing serial lines to `serial`. Call [`init`](Self::init) next.
    pub fn new(serial: S) -> Self {
        Self {
            serial,
            wakeup: WakeupPage::new(),
            navigation: NavigationPage::new(),
            focus: FocusPage::new(),
            current: Page::Wakeup,
            initialized: [false; PAGE_COUNT],
        }
    }

    fn screens_mut(&mut self) -> [&mut dyn Screen; PAGE_COUNT] {
        [&mut self.wakeup, &mut self.navigation, &mut self.focus]
    }

    fn screen_mut(
        &mut self,
        page: Page,
    ) -> Option<&mut dyn Screen> {
        self.screens_mut().into_iter().nth(page.index())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Initialize all pages in order: wakeup, navigation, focus.
    ///
    /// Stops at the first failure. Pages before it stay initialized, pages
    /// after it are never touched.
    pub fn init(
        &mut self,
        fonts: &FontConfig<'_>,
    ) -> Result<(), Error> {
        self.initialized = [false; PAGE_COUNT];
        self.current = Page::Wakeup;

        for page in Page::ALL {
            let Some(screen) = self.screen_mut(page) else {
                return Err(Error::InvalidPage(page.index()));
            };
            if let Err(e) = screen.init(fonts) {
                log::error!("Failed to init {} page: {}", page.name(), e);
                return Err(e);
            }
            self.initialized[page.index()] = true;
        }

        log::info!("Page manager initialized");
        Ok(())
    }

    /// Hide the current page and show `target`.
    ///
    /// An uninitialized target is logged and ignored.
    pub fn switch_page(
        &mut self,
        target: Page,
    ) -> Result<(), Error> {
        if !self.is_initialized(target) {
            log::error!("Page {} not initialized", target.name());
            return Err(Error::PageNotInitialized(target));
        }

        let current = self.current;
        if let Some(screen) = self.screen_mut(current) {
            screen.hide();
        }
        let shown = self.screen_mut(target).map(|screen| screen.show()).unwrap_or_default();
        self.current = target;
        log::info!("Switched to page: {}", target.name());

        self.apply(shown);
        Ok(())
    }

    /// Switch by table index. Out-of-range indices are logged and ignored.
    pub fn switch_to_index(
        &mut self,
        index: usize,
    ) -> Result<(), Error> {
        let Some(page) = Page::from_index(index) else {
            log::error!("Invalid page: {}", index);
            return Err(Error::InvalidPage(index));
        };
        self.switch_page(page)
    }

    /// Show the wakeup page.
    pub fn show_wakeup_page(&mut self) -> Result<(), Error> { self.switch_page(Page::Wakeup) }

    /// Show the navigation page.
    pub fn show_navigation_page(&mut self) -> Result<(), Error> { self.switch_page(Page::Navigation) }

    /// Show the focus page.
    pub fn show_focus_page(&mut self) -> Result<(), Error> { self.switch_page(Page::Focus) }

    // =========================================================================
    // Input and Time
    // =========================================================================

    /// Deliver `event` to the current page and apply what it asks for.
    pub fn handle_event(
        &mut self,
        event: UiEvent,
    ) {
        let current = self.current;
        if !self.is_initialized(current) {
            log::warn!("Event {:?} dropped: {} page not initialized", event, current.name());
            return;
        }
        let requested = self.screen_mut(current).map(|screen| screen.handle_event(event)).unwrap_or_default();
        self.apply(requested);
    }

    /// Advance every initialized page's animations and timers.
    pub fn advance(
        &mut self,
        elapsed_ms: u32,
    ) {
        for page in Page::ALL {
            if !self.is_initialized(page) {
                continue;
            }
            let requested = self.screen_mut(page).map(|screen| screen.advance(elapsed_ms)).unwrap_or_default();
            self.apply(requested);
        }
    }

    /// Update the network glyph on all pages. `None` is ignored.
    pub fn set_network(
        &mut self,
        icon: Option<&str>,
    ) {
        for screen in self.screens_mut() {
            screen.set_network(icon);
        }
    }

    fn apply(
        &mut self,
        effects: Effects,
    ) {
        for effect in effects {
            match effect {
                Effect::Serial(message) => serial::send(&mut self.serial, message),
                Effect::SetFocusTime(hours) => self.focus.set_time(hours),
                Effect::SwitchTo(page) => {
                    // Already logged
                    let _ = self.switch_page(page);
                }
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Page currently shown.
    #[inline]
    pub const fn current_page(&self) -> Page { self.current }

    /// Whether `page` is the current page.
    #[inline]
    pub fn is_page_visible(
        &self,
        page: Page,
    ) -> bool {
        self.current == page
    }

    /// Whether `page` finished `init`.
    #[inline]
    pub const fn is_initialized(
        &self,
        page: Page,
    ) -> bool {
        self.initialized[page.index()]
    }

    /// Wakeup page view state.
    pub const fn wakeup(&self) -> &WakeupPage { &self.wakeup }

    /// Navigation page view state.
    pub const fn navigation(&self) -> &NavigationPage { &self.navigation }

    /// Focus page view state.
    pub const fn focus(&self) -> &FocusPage { &self.focus }

    /// Serial port, for inspecting what was written.
    pub const fn serial(&self) -> &S { &self.serial }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::string::String;

    use embedded_graphics::mono_font::ascii::FONT_6X10;

    use super::*;
    use crate::config::BOOT_FADE_DURATION_MS;
    use crate::events::Touch;
    use crate::session::SessionStatus;

    #[derive(Default)]
    struct Lines(String);

    impl SerialPort for Lines {
        type Error = core::convert::Infallible;

        fn write_all(
            &mut self,
            bytes: &[u8],
        ) -> Result<(), Self::Error> {
            self.0.push_str(core::str::from_utf8(bytes).unwrap_or("<binary>"));
            Ok(())
        }
    }

    fn ready() -> PageManager<Lines> {
        let mut manager = PageManager::new(Lines::default());
        manager.init(&FontConfig::single(&FONT_6X10)).unwrap();
        manager
    }

    #[test]
    fn test_init_starts_on_wakeup() {
        let manager = ready();
        assert_eq!(manager.current_page(), Page::Wakeup);
        assert!(manager.is_page_visible(Page::Wakeup));
        assert!(!manager.is_page_visible(Page::Focus));
        for page in Page::ALL {
            assert!(manager.is_initialized(page));
        }
    }

    #[test]
    fn test_init_fails_fast() {
        let mut manager = PageManager::new(Lines::default());
        assert_eq!(manager.init(&FontConfig::default()), Err(Error::MissingFont(Page::Navigation)));
        assert!(manager.is_initialized(Page::Wakeup));
        assert!(!manager.is_initialized(Page::Navigation));
        assert!(!manager.is_initialized(Page::Focus), "later pages must stay untouched");
    }

    #[test]
    fn test_switch_to_uninitialized_is_noop() {
        let mut manager = PageManager::new(Lines::default());
        manager.init(&FontConfig::default()).ok();
        assert_eq!(manager.show_focus_page(), Err(Error::PageNotInitialized(Page::Focus)));
        assert_eq!(manager.current_page(), Page::Wakeup);
        assert!(manager.wakeup().is_visible(), "current page was not hidden");
    }

    #[test]
    fn test_switch_to_invalid_index_is_noop() {
        let mut manager = ready();
        assert_eq!(manager.switch_to_index(3), Err(Error::InvalidPage(3)));
        assert_eq!(manager.current_page(), Page::Wakeup);
        assert!(manager.switch_to_index(1).is_ok());
        assert_eq!(manager.current_page(), Page::Navigation);
    }

    #[test]
    fn test_switch_hides_old_and_shows_new() {
        let mut manager = ready();
        manager.show_navigation_page().unwrap();
        assert!(!manager.wakeup().is_visible());
        assert!(manager.navigation().is_visible());
    }

    #[test]
    fn test_show_focus_applies_show_effects() {
        let mut manager = ready();
        manager.show_focus_page().unwrap();
        assert_eq!(manager.serial().0, "60\n");
        assert_eq!(manager.focus().status(), SessionStatus::Running);
    }

    #[test]
    fn test_events_go_to_current_page_only() {
        let mut manager = ready();
        manager.handle_event(UiEvent::Slider(0));
        assert_eq!(manager.navigation().slider(), 50, "navigation is hidden");

        manager.show_navigation_page().unwrap();
        manager.handle_event(UiEvent::Slider(0));
        assert_eq!(manager.navigation().slider(), 0);
    }

    #[test]
    fn test_wake_to_focus_flow() {
        let mut manager = ready();
        manager.advance(BOOT_FADE_DURATION_MS);
        manager.handle_event(UiEvent::WakeButton(Touch::Pressed));
        manager.handle_event(UiEvent::WakeButton(Touch::Released));
        assert_eq!(manager.current_page(), Page::Navigation);

        manager.handle_event(UiEvent::Slider(25));
        manager.handle_event(UiEvent::StartButton(Touch::Released));
        assert_eq!(manager.current_page(), Page::Focus);
        assert_eq!(manager.serial().0, "start\n30\n");
        assert_eq!(manager.focus().time_text(), "00:30:00");
    }

    #[test]
    fn test_set_network_reaches_all_pages() {
        let mut manager = ready();
        manager.set_network(Some("W"));
        assert_eq!(manager.wakeup().network_icon(), "W");
        assert_eq!(manager.navigation().network_icon(), "W");
        assert_eq!(manager.focus().network_icon(), "W");
    }
}
