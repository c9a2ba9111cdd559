//! Focus page: progress ring, countdown clock, status and the three buttons.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, PrimitiveStyle};
use focus_common::{FocusPage, FontConfig};
use focus_common::colors::{ACCENT, ICON_GRAY, TEXT_DARK, WAKE_BACKGROUND, WAKE_SHADOW, WHITE};
use focus_common::screens::MOVE_LABEL;
use heapless::String;

use super::{draw_button, draw_network_icon, draw_text, rgb565};
use crate::layout::{
    FOCUS_FINISH_BUTTON,
    FOCUS_MOVE_BUTTON,
    FOCUS_PERCENT_POS,
    FOCUS_RING_CENTER,
    FOCUS_RING_DIAMETER,
    FOCUS_RING_WIDTH,
    FOCUS_STATUS_POS,
    FOCUS_STOP_BUTTON,
};
use crate::styles::{CENTERED, CLOCK_FONT, ICON_FONT, TEXT_FONT};

/// Countdown ring and clock with the status line and the three buttons.
pub fn draw_focus_page<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    page: &FocusPage,
    fonts: &FontConfig<'_>,
) {
    display.clear(rgb565(WAKE_BACKGROUND)).ok();
    let text = rgb565(TEXT_DARK);

    draw_ring(display, page.ring_percent());
    draw_text(display, page.time_text(), FOCUS_RING_CENTER, CLOCK_FONT, text, CENTERED);

    let mut percent: String<8> = String::new();
    let _ = write!(percent, "{}%", page.ring_percent());
    draw_text(display, &percent, FOCUS_PERCENT_POS, ICON_FONT, rgb565(ICON_GRAY), CENTERED);

    if !page.status_text().is_empty() {
        draw_text(display, page.status_text(), FOCUS_STATUS_POS, TEXT_FONT, text, CENTERED);
    }

    let fill = rgb565(ACCENT);
    draw_button(display, FOCUS_STOP_BUTTON, page.stop_label(), TEXT_FONT, fill, text);
    draw_button(display, FOCUS_FINISH_BUTTON, page.finish_label(), TEXT_FONT, fill, text);
    draw_button(display, FOCUS_MOVE_BUTTON, MOVE_LABEL, TEXT_FONT, rgb565(WHITE), text);
    draw_network_icon(display, fonts, page.network_icon(), rgb565(ICON_GRAY));
}

/// Background track plus an arc clockwise from 12 o'clock for the remaining share.
fn draw_ring<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    percent: u8,
) {
    let full = Arc::with_center(FOCUS_RING_CENTER, FOCUS_RING_DIAMETER, (-90.0_f32).deg(), 360.0_f32.deg());
    full.into_styled(PrimitiveStyle::with_stroke(rgb565(WAKE_SHADOW), FOCUS_RING_WIDTH)).draw(display).ok();

    if percent == 0 {
        return;
    }
    let sweep = 360.0 * f32::from(percent.min(100)) / 100.0;
    Arc::with_center(FOCUS_RING_CENTER, FOCUS_RING_DIAMETER, (-90.0_f32).deg(), sweep.deg())
        .into_styled(PrimitiveStyle::with_stroke(rgb565(ACCENT), FOCUS_RING_WIDTH))
        .draw(display)
        .ok();
}
