//! Page renderers.
//!
//! Each renderer reads a page's view getters and redraws the whole screen.
//! Pages only hold `Rgb888` palette colors; conversion to the panel's
//! `Rgb565` happens here.

mod focus;
mod navigation;
mod wakeup;

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Text, TextStyle};
use focus_common::colors::lerp_rgb888;
use focus_common::{FontConfig, Page, PageManager, SerialPort};

use crate::layout::{BUTTON_RADIUS, NETWORK_ICON_POS};
use crate::styles::{CENTERED, RIGHT_ALIGNED};

pub use focus::draw_focus_page;
pub use navigation::draw_navigation_page;
pub use wakeup::draw_wakeup_page;

/// Draw whichever page is current.
///
/// `fonts` is the set the manager was initialized with; the network glyph is
/// only drawn when it carries an icon font.
pub fn draw_current_page<D, S>(
    display: &mut D,
    manager: &PageManager<S>,
    fonts: &FontConfig<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
    S: SerialPort,
{
    match manager.current_page() {
        Page::Wakeup => draw_wakeup_page(display, manager.wakeup(), fonts),
        Page::Navigation => draw_navigation_page(display, manager.navigation(), fonts),
        Page::Focus => draw_focus_page(display, manager.focus(), fonts),
    }
}

// =============================================================================
// Shared Helpers
// =============================================================================

/// Convert a palette color for the panel.
#[inline]
fn rgb565(color: Rgb888) -> Rgb565 { Rgb565::from(color) }

/// Blend `color` over black by `opacity` (0-255).
#[inline]
fn faded(
    color: Rgb888,
    opacity: u8,
) -> Rgb565 {
    rgb565(lerp_rgb888(Rgb888::BLACK, color, f32::from(opacity) / 255.0))
}

fn draw_text<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    text: &str,
    position: Point,
    font: &MonoFont<'_>,
    color: Rgb565,
    style: TextStyle,
) {
    Text::with_text_style(text, position, MonoTextStyle::new(font, color), style).draw(display).ok();
}

/// Rounded button with a centered label.
fn draw_button<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    area: Rectangle,
    label: &str,
    font: &MonoFont<'_>,
    fill: Rgb565,
    text: Rgb565,
) {
    RoundedRectangle::with_equal_corners(area, BUTTON_RADIUS)
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(display)
        .ok();
    draw_text(display, label, area.center(), font, text, CENTERED);
}

fn draw_network_icon<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    fonts: &FontConfig<'_>,
    icon: &str,
    color: Rgb565,
) {
    let Some(font) = fonts.icon else {
        return;
    };
    if icon.is_empty() {
        return;
    }
    draw_text(display, icon, NETWORK_ICON_POS, font, color, RIGHT_ALIGNED);
}

// =============================================================================
// Tests
// =============================================================================
