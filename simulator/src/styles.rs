//! Fonts and text styles used by the page renderers.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use focus_common::FontConfig;
use profont::{PROFONT_12_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

/// Centered text, vertically centered on the anchor point.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).baseline(Baseline::Middle).build();

/// Right-aligned text for the network glyph.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).baseline(Baseline::Middle).build();

/// Labels, button text and the slider time.
pub const TEXT_FONT: &MonoFont<'static> = &PROFONT_18_POINT;

/// Countdown clock.
pub const CLOCK_FONT: &MonoFont<'static> = &PROFONT_24_POINT;

/// Network glyph and small captions.
pub const ICON_FONT: &MonoFont<'static> = &PROFONT_12_POINT;

/// Fonts handed to the page manager at init.
pub const FONTS: FontConfig<'static> = FontConfig { text: Some(TEXT_FONT), icon: Some(ICON_FONT) };
