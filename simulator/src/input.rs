//! Mouse-to-touch translation.
//!
//! The left mouse button stands in for a finger. A press lands on at most one
//! widget of the current page and that widget keeps the pointer until the
//! button is released:
//! - buttons get `Pressed`, then `Released` (or `PressLost` once the pointer
//!   leaves them)
//! - the slider reports its position on press and on every move while held

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::ContainsPoint;
use embedded_graphics_simulator::SimulatorEvent;
use embedded_graphics_simulator::sdl2::MouseButton;
use focus_common::{Page, Touch, UiEvent};

use crate::layout::{
    FOCUS_FINISH_BUTTON,
    FOCUS_MOVE_BUTTON,
    FOCUS_STOP_BUTTON,
    NAV_SLIDER,
    NAV_START_BUTTON,
    WAKE_BUTTON,
    slider_position,
};

/// Touchable widget.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Target {
    Wake,
    Slider,
    Start,
    Stop,
    Finish,
    Move,
}

impl Target {
    const fn on_page(page: Page) -> &'static [Self] {
        match page {
            Page::Wakeup => &[Self::Wake],
            Page::Navigation => &[Self::Slider, Self::Start],
            Page::Focus => &[Self::Stop, Self::Finish, Self::Move],
        }
    }

    fn contains(
        self,
        point: Point,
    ) -> bool {
        match self {
            Self::Wake => WAKE_BUTTON.contains(point),
            Self::Slider => NAV_SLIDER.contains(point),
            Self::Start => NAV_START_BUTTON.contains(point),
            Self::Stop => FOCUS_STOP_BUTTON.contains(point),
            Self::Finish => FOCUS_FINISH_BUTTON.contains(point),
            Self::Move => FOCUS_MOVE_BUTTON.contains(point),
        }
    }

    /// Button event for `touch`. The slider has none.
    const fn button_event(
        self,
        touch: Touch,
    ) -> Option<UiEvent> {
        match self {
            Self::Wake => Some(UiEvent::WakeButton(touch)),
            Self::Start => Some(UiEvent::StartButton(touch)),
            Self::Stop => Some(UiEvent::StopButton(touch)),
            Self::Finish => Some(UiEvent::FinishButton(touch)),
            Self::Move => Some(UiEvent::MoveButton(touch)),
            Self::Slider => None,
        }
    }
}

/// Tracks the held widget between mouse events.
#[derive(Default)]
pub struct Pointer {
    held: Option<Target>,
}

impl Pointer {
    pub const fn new() -> Self { Self { held: None } }

    /// Translate one simulator event for the page currently shown.
    pub fn handle(
        &mut self,
        page: Page,
        event: &SimulatorEvent,
    ) -> Option<UiEvent> {
        match *event {
            SimulatorEvent::MouseButtonDown { mouse_btn: MouseButton::Left, point } => self.press(page, point),
            SimulatorEvent::MouseMove { point } => self.drag(point),
            SimulatorEvent::MouseButtonUp { mouse_btn: MouseButton::Left, point } => self.release(point),
            _ => None,
        }
    }

    fn press(
        &mut self,
        page: Page,
        point: Point,
    ) -> Option<UiEvent> {
        let target = Target::on_page(page).iter().copied().find(|t| t.contains(point))?;
        self.held = Some(target);
        match target {
            Target::Slider => Some(UiEvent::Slider(slider_position(point.x))),
            button => button.button_event(Touch::Pressed),
        }
    }

    fn drag(
        &mut self,
        point: Point,
    ) -> Option<UiEvent> {
        match self.held? {
            Target::Slider => Some(UiEvent::Slider(slider_position(point.x))),
            button if !button.contains(point) => {
                self.held = None;
                button.button_event(Touch::PressLost)
            }
            _ => None,
        }
    }

    fn release(
        &mut self,
        point: Point,
    ) -> Option<UiEvent> {
        let target = self.held.take()?;
        let touch = if target.contains(point) { Touch::Released } else { Touch::PressLost };
        target.button_event(touch)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::CENTER;

    fn down(point: Point) -> SimulatorEvent { SimulatorEvent::MouseButtonDown { mouse_btn: MouseButton::Left, point } }

    fn up(point: Point) -> SimulatorEvent { SimulatorEvent::MouseButtonUp { mouse_btn: MouseButton::Left, point } }

    #[test]
    fn test_click_wake_button() {
        let mut pointer = Pointer::new();
        assert_eq!(pointer.handle(Page::Wakeup, &down(CENTER)), Some(UiEvent::WakeButton(Touch::Pressed)));
        assert_eq!(pointer.handle(Page::Wakeup, &up(CENTER)), Some(UiEvent::WakeButton(Touch::Released)));
    }

    #[test]
    fn test_drag_off_button_loses_press() {
        let mut pointer = Pointer::new();
        let inside = NAV_START_BUTTON.center();
        pointer.handle(Page::Navigation, &down(inside));
        let lost = pointer.handle(Page::Navigation, &SimulatorEvent::MouseMove { point: Point::zero() });
        assert_eq!(lost, Some(UiEvent::StartButton(Touch::PressLost)));
        assert_eq!(pointer.handle(Page::Navigation, &up(Point::zero())), None);
    }

    #[test]
    fn test_slider_drag_reports_positions() {
        let mut pointer = Pointer::new();
        let y = NAV_SLIDER.center().y;
        let start = Point::new(NAV_SLIDER.top_left.x, y);
        assert_eq!(pointer.handle(Page::Navigation, &down(start)), Some(UiEvent::Slider(0)));

        let far = Point::new(10_000, 0);
        assert_eq!(pointer.handle(Page::Navigation, &SimulatorEvent::MouseMove { point: far }), Some(UiEvent::Slider(100)));
        assert_eq!(pointer.handle(Page::Navigation, &up(far)), None);
    }

    #[test]
    fn test_miss_does_nothing() {
        let mut pointer = Pointer::new();
        assert_eq!(pointer.handle(Page::Focus, &down(Point::zero())), None);
        assert_eq!(pointer.handle(Page::Focus, &SimulatorEvent::MouseMove { point: CENTER }), None);
    }
}
