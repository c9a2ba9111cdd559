//! Focus timer front panel simulator for desktop.
//!
//! Runs the real page manager from `focus-panel-common` against an
//! embedded-graphics-simulator window. Left mouse button acts as the touch
//! panel; serial lines are printed to stdout.
//!
//! Keys:
//! - `N`: toggle the network glyph
//! - `F`: fast-forward one minute

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod input;
mod layout;
mod screens;
mod serial;
mod styles;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use focus_common::PageManager;

use crate::input::Pointer;
use crate::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::screens::draw_current_page;
use crate::serial::ConsoleSerial;
use crate::styles::FONTS;
use crate::timing::{FAST_FORWARD, FRAME_TIME, as_millis_u32};

const NETWORK_ONLINE: &str = "WiFi";
const NETWORK_OFFLINE: &str = "--";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Focus Panel Sim", &output_settings);

    let mut manager = PageManager::new(ConsoleSerial);
    if let Err(e) = manager.init(&FONTS) {
        log::error!("Page manager init failed: {e}");
        return;
    }

    let mut online = true;
    manager.set_network(Some(NETWORK_ONLINE));

    display.clear(Rgb565::BLACK).ok();
    window.update(&display);

    let mut pointer = Pointer::new();
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        manager.advance(as_millis_u32(frame_start.duration_since(last_frame)));
        last_frame = frame_start;

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::N => {
                            online = !online;
                            manager.set_network(Some(if online { NETWORK_ONLINE } else { NETWORK_OFFLINE }));
                        }
                        Keycode::F => {
                            log::info!("Fast-forward {} s", FAST_FORWARD.as_secs());
                            manager.advance(as_millis_u32(FAST_FORWARD));
                        }
                        _ => {}
                    }
                }
                other => {
                    if let Some(event) = pointer.handle(manager.current_page(), &other) {
                        manager.handle_event(event);
                    }
                }
            }
        }

        draw_current_page(&mut display, &manager, &FONTS);
        window.update(&display);

        let busy = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(busy) {
            thread::sleep(remaining);
        }
    }
}
