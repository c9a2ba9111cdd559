//! Core logic for the focus timer front panel.
//!
//! This crate contains everything the panel does that does not depend on a
//! display driver or an event loop, so it can be tested on the host:
//!
//! - [`pages`]: The three mutually exclusive pages (Wakeup, Navigation, Focus)
//! - [`screens`]: Per-page state machines behind the [`screens::Screen`] trait
//! - [`manager`]: Page manager that owns the pages and applies their effects
//! - [`session`]: Focus session countdown (whole-second resolution)
//! - [`serial`]: Line-oriented UART protocol
//! - [`mqtt`]: Connect-and-publish helper around an MQTT client
//! - [`animations`]: Time-based tweens for the wakeup page
//! - [`format`]: Duration and clock string formatting
//! - [`colors`], [`config`]: Palette and compile-time configuration
//!
//! # Time
//!
//! No module reads a clock. The caller drives timers and animations through
//! `advance(elapsed_ms)`, which keeps every state transition deterministic.
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and never allocates; strings and
//! effect lists use fixed-capacity `heapless` containers.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod colors;
pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod manager;
pub mod mqtt;
pub mod pages;
pub mod screens;
pub mod serial;
pub mod session;

// Re-export commonly used items
pub use error::Error;
pub use events::{Effect, Effects, Touch, UiEvent};
pub use manager::PageManager;
pub use pages::Page;
pub use screens::{FocusPage, FontConfig, NavigationPage, Screen, WakeupPage};
pub use serial::{SerialMessage, SerialPort};
