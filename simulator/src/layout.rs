//! Screen geometry for the simulated 320x480 portrait panel.
//!
//! Widget positions live here so drawing and hit testing agree.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Rectangle};
use focus_common::config::{WAKE_BUTTON_SIZE, WAKE_SHADOW_SIZE};

pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 480;

/// Screen center.
pub const CENTER: Point = Point::new(SCREEN_WIDTH as i32 / 2, SCREEN_HEIGHT as i32 / 2);

/// Network glyph anchor (top right, right-aligned).
pub const NETWORK_ICON_POS: Point = Point::new(SCREEN_WIDTH as i32 - 12, 24);

// =============================================================================
// Wakeup
// =============================================================================

/// Wake button at rest. Hit testing ignores the press scale.
pub const WAKE_BUTTON: Circle = centered_circle(CENTER, WAKE_BUTTON_SIZE);

pub const WAKE_SHADOW: Circle = centered_circle(CENTER, WAKE_SHADOW_SIZE);

// =============================================================================
// Navigation
// =============================================================================

pub const NAV_TITLE_POS: Point = Point::new(CENTER.x, 90);
pub const NAV_TIME_POS: Point = Point::new(CENTER.x, 170);

/// Slider track. Touches anywhere in this box move the knob.
pub const NAV_SLIDER: Rectangle = Rectangle::new(Point::new(40, 228), Size::new(240, 24));

pub const NAV_SLIDER_KNOB_SIZE: u32 = 28;

pub const NAV_START_BUTTON: Rectangle = Rectangle::new(Point::new(90, 330), Size::new(140, 56));

// =============================================================================
// Focus
// =============================================================================

pub const FOCUS_RING_CENTER: Point = Point::new(CENTER.x, 170);
pub const FOCUS_RING_DIAMETER: u32 = 220;
pub const FOCUS_RING_WIDTH: u32 = 12;

pub const FOCUS_PERCENT_POS: Point = Point::new(CENTER.x, 205);
pub const FOCUS_STATUS_POS: Point = Point::new(CENTER.x, 310);

pub const FOCUS_STOP_BUTTON: Rectangle = Rectangle::new(Point::new(20, 350), Size::new(130, 50));
pub const FOCUS_FINISH_BUTTON: Rectangle = Rectangle::new(Point::new(170, 350), Size::new(130, 50));
pub const FOCUS_MOVE_BUTTON: Rectangle = Rectangle::new(Point::new(110, 416), Size::new(100, 44));

/// Corner radius for all rectangular buttons.
pub const BUTTON_RADIUS: Size = Size::new(14, 14);

/// Circle of `diameter` centered on `center`.
pub const fn centered_circle(
    center: Point,
    diameter: u32,
) -> Circle {
    let radius = (diameter / 2) as i32;
    Circle::new(Point::new(center.x - radius, center.y - radius), diameter)
}

/// Slider position (0-100) for an x coordinate, clamped to the track.
pub fn slider_position(x: i32) -> u8 {
    let width = NAV_SLIDER.size.width as i32;
    let offset = (x - NAV_SLIDER.top_left.x).clamp(0, width);
    (offset * 100 / width) as u8
}

/// X coordinate of the knob center for a slider position.
pub fn slider_knob_x(position: u8) -> i32 {
    NAV_SLIDER.top_left.x + NAV_SLIDER.size.width as i32 * i32::from(position.min(100)) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_position_clamps_to_track() {
        assert_eq!(slider_position(0), 0);
        assert_eq!(slider_position(NAV_SLIDER.top_left.x + 120), 50);
        assert_eq!(slider_position(1000), 100);
    }

    #[test]
    fn test_wake_button_covers_center() {
        use embedded_graphics::primitives::ContainsPoint;

        assert!(WAKE_BUTTON.contains(CENTER));
        assert!(!WAKE_BUTTON.contains(Point::zero()));
    }

    #[test]
    fn test_knob_follows_position() {
        assert_eq!(slider_knob_x(0), NAV_SLIDER.top_left.x);
        assert_eq!(slider_knob_x(100), NAV_SLIDER.top_left.x + 240);
    }
}
