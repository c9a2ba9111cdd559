//! UART signaling protocol.
//!
//! The panel reports user actions to the companion computer as one ASCII line
//! per event. There is no acknowledgement and no framing beyond the trailing
//! newline:
//!
//! | Event                    | Line          |
//! |--------------------------|---------------|
//! | Focus page shown         | `<minutes>\n` |
//! | Finish pressed           | `reset\n`     |
//! | Move pressed             | `move\n`      |
//! | Navigation Start pressed | `start\n`     |

use core::fmt::Write;

use heapless::String;

/// Longest encoded line (`u32::MAX` minutes plus newline fits easily).
pub const SERIAL_LINE_LEN: usize = 16;

/// A single outbound serial event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SerialMessage {
    /// Configured focus duration in whole minutes.
    Duration(u32),
    /// Session finished by the user.
    Reset,
    /// Move the companion device.
    Move,
    /// Session about to start.
    Start,
}

impl SerialMessage {
    /// Encode the message as a newline-terminated line.
    pub fn encode(self) -> String<SERIAL_LINE_LEN> {
        let mut line: String<SERIAL_LINE_LEN> = String::new();
        // Capacity covers the widest variant, so the write cannot fail
        let _ = match self {
            Self::Duration(minutes) => writeln!(line, "{minutes}"),
            Self::Reset => line.write_str("reset\n"),
            Self::Move => line.write_str("move\n"),
            Self::Start => line.write_str("start\n"),
        };
        line
    }
}

/// Byte sink for the serial channel.
///
/// Implemented by the UART driver on hardware and by a console printer in the
/// simulator. Writes are synchronous and fire-and-forget.
pub trait SerialPort {
    /// Transport error.
    type Error: core::fmt::Debug;

    /// Write all bytes of one line.
    fn write_all(
        &mut self,
        bytes: &[u8],
    ) -> Result<(), Self::Error>;
}

/// Encode and write a message, logging the outcome. Failures are dropped.
pub fn send<S: SerialPort>(
    port: &mut S,
    message: SerialMessage,
) {
    let line = message.encode();
    match port.write_all(line.as_bytes()) {
        Ok(()) => log::info!("Serial message sent: {:?}", line.as_str()),
        Err(e) => log::warn!("Serial write failed for {:?}: {:?}", message, e),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;

    struct Capture {
        bytes: Vec<u8>,
        fail: bool,
    }

    impl SerialPort for Capture {
        type Error = ();

        fn write_all(
            &mut self,
            bytes: &[u8],
        ) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.bytes.extend_from_slice(bytes);
            Ok(())
        }
    }

    #[test]
    fn test_encode_fixed_lines() {
        assert_eq!(SerialMessage::Reset.encode().as_str(), "reset\n");
        assert_eq!(SerialMessage::Move.encode().as_str(), "move\n");
        assert_eq!(SerialMessage::Start.encode().as_str(), "start\n");
    }

    #[test]
    fn test_encode_duration_minutes() {
        assert_eq!(SerialMessage::Duration(60).encode().as_str(), "60\n");
        assert_eq!(SerialMessage::Duration(0).encode().as_str(), "0\n");
        assert_eq!(SerialMessage::Duration(u32::MAX).encode().as_str(), "4294967295\n");
    }

    #[test]
    fn test_send_writes_line() {
        let mut port = Capture { bytes: Vec::new(), fail: false };
        send(&mut port, SerialMessage::Start);
        send(&mut port, SerialMessage::Duration(90));
        assert_eq!(port.bytes, b"start\n90\n");
    }

    #[test]
    fn test_send_swallows_errors() {
        let mut port = Capture { bytes: Vec::new(), fail: true };
        send(&mut port, SerialMessage::Reset);
        assert!(port.bytes.is_empty());
    }
}
