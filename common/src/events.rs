//! Input events and the effects pages request in response.
//!
//! Pages never call each other. A page turns an input event into a short list
//! of [`Effect`]s and the page manager carries them out in order. This keeps
//! every page testable without a display or an event loop.

use heapless::Vec;

use crate::pages::Page;
use crate::serial::SerialMessage;

/// Maximum effects produced by a single event or `show`.
pub const MAX_EFFECTS: usize = 4;

/// Effect list returned by page operations.
pub type Effects = Vec<Effect, MAX_EFFECTS>;

/// Touch phase reported for a button.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Touch {
    /// Finger down on the widget.
    Pressed,
    /// Finger lifted over the widget.
    Released,
    /// Finger slid off the widget while held.
    PressLost,
}

impl Touch {
    /// Released and press-lost both end a press.
    #[inline]
    pub const fn is_release(self) -> bool { matches!(self, Self::Released | Self::PressLost) }
}

/// User interaction delivered to the current page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UiEvent {
    /// Wakeup page round button.
    WakeButton(Touch),
    /// Navigation slider moved or held; position in `0..=SLIDER_MAX`.
    Slider(u8),
    /// Navigation Start button.
    StartButton(Touch),
    /// Focus Stop/Continue button.
    StopButton(Touch),
    /// Focus Finish button.
    FinishButton(Touch),
    /// Focus Move button.
    MoveButton(Touch),
}

/// Side effect requested by a page.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Effect {
    /// Write a line to the serial channel.
    Serial(SerialMessage),
    /// Push a focus duration (hours) into the focus page.
    SetFocusTime(f32),
    /// Hide the current page and show another one.
    SwitchTo(Page),
}

/// Build an effect list from a fixed set of effects.
///
/// Callers never exceed [`MAX_EFFECTS`]; extra entries are dropped.
pub fn effects<const N: usize>(items: [Effect; N]) -> Effects {
    let mut list = Effects::new();
    for item in items {
        let _ = list.push(item);
    }
    list
}

// =============================================================================
// Tests
// =============================================================================
