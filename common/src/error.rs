//! Unified error type for the front panel.
//!
//! Variants carry only `Copy` data so the type works without `alloc`.
//! Most UI guard conditions are logged and ignored rather than returned;
//! these errors cover the operations whose caller must react.

use crate::mqtt::MqttError;
use crate::pages::Page;

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A page that draws text was initialized without a text font.
    #[error("{} page requires a text font", .0.name())]
    MissingFont(Page),

    /// Page table index outside `0..PAGE_COUNT`.
    #[error("invalid page index {0}")]
    InvalidPage(usize),

    /// Page was targeted before its `init` succeeded.
    #[error("{} page is not initialized", .0.name())]
    PageNotInitialized(Page),

    /// MQTT manager failure.
    #[error(transparent)]
    Mqtt(#[from] MqttError),
}
