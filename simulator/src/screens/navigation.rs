//! Navigation page: gradient background, duration label, slider and Start.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use focus_common::{FontConfig, NavigationPage};
use focus_common::colors::{ACCENT, ICON_GRAY, TEXT_DARK, WHITE};
use focus_common::screens::START_LABEL;

use super::{draw_button, draw_network_icon, draw_text, rgb565};
use crate::layout::{
    NAV_SLIDER,
    NAV_SLIDER_KNOB_SIZE,
    NAV_START_BUTTON,
    NAV_TIME_POS,
    NAV_TITLE_POS,
    centered_circle,
    slider_knob_x,
};
use crate::styles::{CENTERED, CLOCK_FONT, ICON_FONT, TEXT_FONT};

const TITLE: &str = "Focus time";

/// Gradient background, title, duration label, slider and Start button.
pub fn draw_navigation_page<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    page: &NavigationPage,
    fonts: &FontConfig<'_>,
) {
    display.clear(rgb565(page.background())).ok();

    let text = rgb565(TEXT_DARK);
    draw_text(display, TITLE, NAV_TITLE_POS, ICON_FONT, text, CENTERED);
    draw_text(display, page.time_label(), NAV_TIME_POS, CLOCK_FONT, text, CENTERED);

    draw_slider(display, page.slider());
    draw_button(display, NAV_START_BUTTON, START_LABEL, TEXT_FONT, rgb565(ACCENT), text);
    draw_network_icon(display, fonts, page.network_icon(), rgb565(ICON_GRAY));
}

fn draw_slider<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    position: u8,
) {
    let radius = Size::new(NAV_SLIDER.size.height / 2, NAV_SLIDER.size.height / 2);
    RoundedRectangle::with_equal_corners(NAV_SLIDER, radius)
        .into_styled(PrimitiveStyle::with_fill(rgb565(WHITE)))
        .draw(display)
        .ok();

    let knob_x = slider_knob_x(position);
    let filled_width = (knob_x - NAV_SLIDER.top_left.x).max(0) as u32;
    if filled_width > 0 {
        let filled = Rectangle::new(NAV_SLIDER.top_left, Size::new(filled_width, NAV_SLIDER.size.height));
        RoundedRectangle::with_equal_corners(filled, radius)
            .into_styled(PrimitiveStyle::with_fill(rgb565(ACCENT)))
            .draw(display)
            .ok();
    }

    centered_circle(Point::new(knob_x, NAV_SLIDER.center().y), NAV_SLIDER_KNOB_SIZE)
        .into_styled(PrimitiveStyle::with_fill(rgb565(WHITE)))
        .draw(display)
        .ok();
}
