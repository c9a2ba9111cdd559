//! Color palette for the front panel.
//!
//! Colors are kept in `Rgb888` because the navigation background is computed
//! by interpolating 8-bit channels. Drawing code converts to the display's
//! native format (`Rgb565::from(color)`).

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Boot fade starts from here.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white. Button labels on dark fills.
pub const WHITE: Rgb888 = Rgb888::WHITE;

// =============================================================================
// Wakeup Page
// =============================================================================

/// Pale cyan page background.
pub const WAKE_BACKGROUND: Rgb888 = Rgb888::new(0xD4, 0xF0, 0xF7);

/// Soft halo behind the wake button.
pub const WAKE_SHADOW: Rgb888 = Rgb888::new(0xE8, 0xF4, 0xFD);

/// Wake button fill (also the progress ring color on the focus page).
pub const ACCENT: Rgb888 = Rgb888::new(0xA8, 0xD8, 0xEA);

/// Dark gray label text.
pub const TEXT_DARK: Rgb888 = Rgb888::new(0x33, 0x33, 0x33);

/// WiFi glyph color.
pub const ICON_GRAY: Rgb888 = Rgb888::new(0x66, 0x66, 0x66);

// =============================================================================
// Navigation Gradient
// =============================================================================

/// Background at the shortest selectable time.
pub const NAV_GRADIENT_START: Rgb888 = Rgb888::new(216, 226, 236);

/// Background at the longest selectable time.
pub const NAV_GRADIENT_END: Rgb888 = Rgb888::new(252, 224, 231);

// =============================================================================
// Interpolation
// =============================================================================

/// Linear interpolation between two colors.
///
/// `t` is clamped to `0.0..=1.0`. Each channel moves by the truncated signed
/// delta, so `t = 0.0` returns `from` and `t = 1.0` returns `to` exactly.
pub fn lerp_rgb888(
    from: Rgb888,
    to: Rgb888,
    t: f32,
) -> Rgb888 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| -> u8 {
        let delta = i32::from(b) - i32::from(a);
        (i32::from(a) + (delta as f32 * t) as i32).clamp(0, 255) as u8
    };

    Rgb888::new(channel(from.r(), to.r()), channel(from.g(), to.g()), channel(from.b(), to.b()))
}

// =============================================================================
// Tests
// =============================================================================
