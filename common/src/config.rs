//! Application configuration constants.
//!
//! Timing, range and network parameters for the front panel. Everything is
//! `const` so it can be shared between the firmware and the simulator without
//! pulling in a time or network type.

// =============================================================================
// Focus Countdown
// =============================================================================

/// Countdown tick period in milliseconds (1 Hz).
pub const TICK_PERIOD_MS: u32 = 1000;

/// Seconds per hour. Session times are entered in hours and counted in seconds.
pub const SECONDS_PER_HOUR: u32 = 3600;

/// Focus time used before the navigation page pushes a selection (hours).
pub const DEFAULT_FOCUS_HOURS: f32 = 1.0;

// =============================================================================
// Navigation Slider
// =============================================================================

/// Shortest selectable focus time (hours).
pub const NAV_TIME_MIN: f32 = 0.0;

/// Longest selectable focus time (hours).
pub const NAV_TIME_MAX: f32 = 2.0;

/// Slider position range is `0..=SLIDER_MAX`.
pub const SLIDER_MAX: u8 = 100;

/// Slider position matching [`DEFAULT_FOCUS_HOURS`].
pub const SLIDER_DEFAULT: u8 = 50;

// =============================================================================
// Wakeup Animations
// =============================================================================

/// Boot fade from black to fully visible (ms). Touch is ignored until it ends.
pub const BOOT_FADE_DURATION_MS: u32 = 1500;

/// Wakeup button press/release scale animation (ms).
pub const BUTTON_SCALE_DURATION_MS: u32 = 150;

/// Button scale at rest (percent).
pub const BUTTON_SCALE_REST: i32 = 100;

/// Button scale while held (percent).
pub const BUTTON_SCALE_PRESSED: i32 = 120;

/// Wakeup button diameter at 100% scale (px).
pub const WAKE_BUTTON_SIZE: u32 = 160;

/// Wakeup shadow diameter (px). The shadow never scales.
pub const WAKE_SHADOW_SIZE: u32 = 180;

/// Shadow opacity relative to the boot fade value (percent).
pub const SHADOW_OPACITY_PCT: u32 = 60;

// =============================================================================
// MQTT
// =============================================================================

/// Broker address.
pub const MQTT_BROKER_HOST: &str = "172.20.10.3";

/// Broker port.
pub const MQTT_BROKER_PORT: u16 = 1883;

/// Client identifier presented to the broker.
pub const MQTT_CLIENT_ID: &str = "echome_smart_device_001";

/// Topic carrying the start flag.
pub const MQTT_TOPIC_START: &str = "topic/start";

/// Keepalive interval (seconds).
pub const MQTT_KEEPALIVE_SECS: u16 = 60;

/// Client-level operation timeout (ms).
pub const MQTT_TIMEOUT_MS: u32 = 5000;

/// Number of polls while waiting for the broker to accept the connection.
pub const MQTT_CONNECT_POLLS: u32 = 50;

/// Sleep between connection polls (ms). 50 x 100 ms = 5 s total wait.
pub const MQTT_CONNECT_POLL_MS: u32 = 100;

// =============================================================================
// Tests
// =============================================================================
