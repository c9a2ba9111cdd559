//! Serial port that prints outgoing lines to stdout.

use std::io::{self, Write};

use focus_common::SerialPort;

/// Stand-in for the UART link to the companion computer.
pub struct ConsoleSerial;

impl SerialPort for ConsoleSerial {
    type Error = io::Error;

    fn write_all(
        &mut self,
        bytes: &[u8],
    ) -> Result<(), Self::Error> {
        let mut out = io::stdout().lock();
        out.write_all(b"[uart] ")?;
        out.write_all(bytes)?;
        out.flush()
    }
}
