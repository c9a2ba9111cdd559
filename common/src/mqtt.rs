//! MQTT publish-start helper.
//!
//! Wraps an MQTT client behind the [`MqttClient`] trait and offers a single
//! blocking operation, [`MqttManager::publish_start`]: connect if needed, wait
//! a bounded time for the broker to accept, publish `"true"`/`"false"` on the
//! start topic.
//!
//! # Connection State
//!
//! ```text
//! Disconnected --connect()--> Connecting --Connected event--> Connected
//!      ^                          |                              |
//!      +------ timeout/failure ---+------ Disconnected event ----+
//! ```
//!
//! The client reports broker activity as [`MqttEvent`]s. The manager drains
//! them in [`MqttManager::pump`], which is the only place state moves from
//! `Connecting` to `Connected`.
//!
//! # Blocking
//!
//! The connect wait sleeps up to `MQTT_CONNECT_POLLS * MQTT_CONNECT_POLL_MS`
//! (5 s) on the caller's delay provider. There is no cancellation.

use embedded_hal::delay::DelayNs;

use crate::config::{
    MQTT_BROKER_HOST, MQTT_BROKER_PORT, MQTT_CLIENT_ID, MQTT_CONNECT_POLLS, MQTT_CONNECT_POLL_MS, MQTT_KEEPALIVE_SECS,
    MQTT_TIMEOUT_MS, MQTT_TOPIC_START,
};

// =============================================================================
// Types
// =============================================================================

/// Broker connection settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MqttConfig {
    /// Broker host name or address.
    pub host: &'static str,
    /// Broker TCP port.
    pub port: u16,
    /// Client identifier sent on connect.
    pub client_id: &'static str,
    /// Keepalive interval in seconds.
    pub keepalive_secs: u16,
    /// Network operation timeout in milliseconds.
    pub timeout_ms: u32,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            host: MQTT_BROKER_HOST,
            port: MQTT_BROKER_PORT,
            client_id: MQTT_CLIENT_ID,
            keepalive_secs: MQTT_KEEPALIVE_SECS,
            timeout_ms: MQTT_TIMEOUT_MS,
        }
    }
}

/// Delivery guarantee for a publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QoS {
    /// Fire and forget.
    AtMostOnce = 0,
    /// Acknowledged, may be delivered twice.
    AtLeastOnce = 1,
    /// Acknowledged handshake, delivered once.
    ExactlyOnce = 2,
}

/// Broker connection state as seen by the manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MqttState {
    /// No session. Initial state and the fallback after any failure.
    #[default]
    Disconnected,
    /// `connect` issued, waiting for the broker.
    Connecting,
    /// Broker acknowledged the session.
    Connected,
}

/// Broker activity reported by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MqttEvent {
    /// Session established.
    Connected,
    /// Session closed or lost.
    Disconnected,
    /// Incoming message on a subscribed topic.
    Message { msg_id: u16, length: usize },
    /// Broker acknowledged the publish with this message id.
    Published(u16),
    /// Broker acknowledged a subscription.
    Subscribed(u16),
    /// Broker acknowledged an unsubscribe.
    Unsubscribed(u16),
}

/// Errors returned by [`MqttManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MqttError {
    #[error("MQTT manager not initialized")]
    NotInitialized,

    #[error("failed to create MQTT client")]
    ClientAlloc,

    #[error("failed to initialize MQTT client")]
    ClientInit,

    #[error("failed to connect to MQTT broker")]
    ConnectFailed,

    #[error("MQTT connection timeout")]
    ConnectTimeout,

    #[error("failed to publish MQTT message")]
    PublishFailed,
}

/// MQTT client driver.
///
/// Implemented over the platform's MQTT stack. `poll_event` performs client
/// I/O and returns the next pending event, if any.
pub trait MqttClient {
    /// Driver error.
    type Error: core::fmt::Debug;

    /// Apply broker settings.
    fn init(
        &mut self,
        config: &MqttConfig,
    ) -> Result<(), Self::Error>;

    /// Start connecting. Completion arrives as [`MqttEvent::Connected`].
    fn connect(&mut self) -> Result<(), Self::Error>;

    /// Close the broker session.
    fn disconnect(&mut self) -> Result<(), Self::Error>;

    /// Release client resources.
    fn deinit(&mut self);

    /// Queue a publish and return its message id.
    fn publish(
        &mut self,
        topic: &str,
        payload: &[u8],
        qos: QoS,
    ) -> Result<u16, Self::Error>;

    /// Next pending event, if any.
    fn poll_event(&mut self) -> Option<MqttEvent>;
}

// =============================================================================
// Manager
// =============================================================================

/// Owns one MQTT client and its connection state.
pub struct MqttManager<C> {
    client: Option<C>,
    config: MqttConfig,
    state: MqttState,
}

impl<C: MqttClient> Default for MqttManager<C> {
    fn default() -> Self { Self::new(MqttConfig::default()) }
}

impl<C: MqttClient> MqttManager<C> {
    /// Uninitialized manager using `config`.
    pub const fn new(config: MqttConfig) -> Self { Self { client: None, config, state: MqttState::Disconnected } }

    /// Create and configure the client.
    ///
    /// `create` allocates the client; `None` means allocation failed. Calling
    /// this again once initialized logs a warning and does nothing.
    pub fn init(
        &mut self,
        create: impl FnOnce() -> Option<C>,
    ) -> Result<(), MqttError> {
        if self.client.is_some() {
            log::warn!("MQTT manager already initialized");
            return Ok(());
        }

        let Some(mut client) = create() else {
            log::error!("Failed to create MQTT client");
            return Err(MqttError::ClientAlloc);
        };

        if let Err(e) = client.init(&self.config) {
            log::error!("Failed to initialize MQTT client: {:?}", e);
            return Err(MqttError::ClientInit);
        }

        self.client = Some(client);
        self.state = MqttState::Disconnected;
        log::info!("MQTT manager initialized");
        Ok(())
    }

    /// Disconnect if connected and release the client. Safe to call twice.
    pub fn deinit(&mut self) {
        let Some(mut client) = self.client.take() else {
            return;
        };

        if self.state == MqttState::Connected {
            if let Err(e) = client.disconnect() {
                log::warn!("MQTT disconnect failed: {:?}", e);
            }
        }
        client.deinit();
        self.state = MqttState::Disconnected;
        log::info!("MQTT manager deinitialized");
    }

    /// Current connection state.
    #[inline]
    pub const fn state(&self) -> MqttState { self.state }

    /// Whether a client is configured.
    #[inline]
    pub const fn is_initialized(&self) -> bool { self.client.is_some() }

    /// Drain pending client events and update the connection state.
    pub fn pump(&mut self) {
        let Some(client) = self.client.as_mut() else {
            return;
        };

        while let Some(event) = client.poll_event() {
            match event {
                MqttEvent::Connected => {
                    log::info!("MQTT connected to {}:{}", self.config.host, self.config.port);
                    self.state = MqttState::Connected;
                }
                MqttEvent::Disconnected => {
                    log::info!("MQTT disconnected from {}:{}", self.config.host, self.config.port);
                    self.state = MqttState::Disconnected;
                }
                MqttEvent::Message { msg_id, length } => {
                    log::debug!("MQTT received message {}, length: {}", msg_id, length);
                }
                MqttEvent::Published(id) => log::debug!("MQTT message published, msgid: {}", id),
                MqttEvent::Subscribed(id) => log::debug!("MQTT subscribed, msgid: {}", id),
                MqttEvent::Unsubscribed(id) => log::debug!("MQTT unsubscribed, msgid: {}", id),
            }
        }
    }

    /// Publish the start flag, connecting first if disconnected.
    ///
    /// Blocks on `delay` for up to 5 s while waiting for the broker. On
    /// connect failure or timeout the state returns to `Disconnected` and
    /// nothing is published.
    pub fn publish_start<D: DelayNs>(
        &mut self,
        start: bool,
        delay: &mut D,
    ) -> Result<(), MqttError> {
        if self.client.is_none() {
            log::error!("MQTT manager not initialized");
            return Err(MqttError::NotInitialized);
        }

        if self.state == MqttState::Disconnected {
            self.connect_and_wait(delay)?;
        }

        let payload: &str = if start { "true" } else { "false" };
        let client = self.client.as_mut().ok_or(MqttError::NotInitialized)?;
        match client.publish(MQTT_TOPIC_START, payload.as_bytes(), QoS::AtMostOnce) {
            Ok(msg_id) if msg_id > 0 => {
                log::info!("Published to {}: {} (msgid: {})", MQTT_TOPIC_START, payload, msg_id);
            }
            Ok(_) => {
                log::error!("Failed to publish start message: no message id");
                return Err(MqttError::PublishFailed);
            }
            Err(e) => {
                log::error!("Failed to publish start message: {:?}", e);
                return Err(MqttError::PublishFailed);
            }
        }

        self.pump();
        Ok(())
    }

    fn connect_and_wait<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), MqttError> {
        let client = self.client.as_mut().ok_or(MqttError::NotInitialized)?;

        log::info!("MQTT connecting to {}:{}", self.config.host, self.config.port);
        self.state = MqttState::Connecting;
        if let Err(e) = client.connect() {
            log::error!("Failed to connect MQTT broker: {:?}", e);
            self.state = MqttState::Disconnected;
            return Err(MqttError::ConnectFailed);
        }

        for _ in 0..MQTT_CONNECT_POLLS {
            if self.state == MqttState::Connected {
                break;
            }
            self.pump();
            delay.delay_ms(MQTT_CONNECT_POLL_MS);
        }

        if self.state != MqttState::Connected {
            log::error!("MQTT connection timeout");
            self.state = MqttState::Disconnected;
            return Err(MqttError::ConnectTimeout);
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
