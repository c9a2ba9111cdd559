//! Wakeup page: faded background, shadow and the scalable wake button.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use focus_common::{FontConfig, WakeupPage};
use focus_common::colors::{ACCENT, ICON_GRAY, TEXT_DARK, WAKE_BACKGROUND, WAKE_SHADOW};
use focus_common::screens::WAKE_LABEL;

use super::{draw_network_icon, draw_text, faded};
use crate::layout::{CENTER, WAKE_SHADOW as SHADOW_CIRCLE};
use crate::styles::{CENTERED, TEXT_FONT};

/// Everything fades in from black with the boot fade opacity.
pub fn draw_wakeup_page<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    page: &WakeupPage,
    fonts: &FontConfig<'_>,
) {
    let opacity = page.opacity();
    display.clear(faded(WAKE_BACKGROUND, opacity)).ok();

    SHADOW_CIRCLE
        .into_styled(PrimitiveStyle::with_fill(faded(WAKE_SHADOW, page.shadow_opacity())))
        .draw(display)
        .ok();

    Circle::with_center(CENTER, page.button_size())
        .into_styled(PrimitiveStyle::with_fill(faded(ACCENT, opacity)))
        .draw(display)
        .ok();

    draw_text(display, WAKE_LABEL, CENTER, TEXT_FONT, faded(TEXT_DARK, opacity), CENTERED);
    draw_network_icon(display, fonts, page.network_icon(), faded(ICON_GRAY, opacity));
}
