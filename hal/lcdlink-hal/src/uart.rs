//! Serial stream configuration and faults

use embedded_io::ErrorKind;

/// UART transport configuration
///
/// Baud rate and framing belong to whoever opens the serial port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamConfig {
    /// Delay after every command, in milliseconds
    pub pacing_ms: u32,
    /// How long `read_ack` waits for the first byte, in milliseconds
    pub ack_timeout_ms: u32,
    /// Sleep between readiness polls, in microseconds
    pub poll_interval_us: u32,
    /// Time one readiness poll is assumed to take, in microseconds
    ///
    /// Charged against `ack_timeout_ms` on every poll. With the default of
    /// 0 only the sleeps count, so a slow `read_ready` stretches the real
    /// wait past the timeout.
    pub poll_cost_us: u32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            pacing_ms: 50,
            ack_timeout_ms: 1000,
            poll_interval_us: 1000,
            poll_cost_us: 0,
        }
    }
}

/// Error from a serial stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StreamFault {
    /// Peer went away
    Disconnected,
    /// Malformed data or argument
    InvalidData,
    /// Operation timed out in the HAL
    TimedOut,
    /// Other error
    Other,
}

impl From<ErrorKind> for StreamFault {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NotConnected
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::BrokenPipe => StreamFault::Disconnected,
            ErrorKind::InvalidData | ErrorKind::InvalidInput => StreamFault::InvalidData,
            ErrorKind::TimedOut => StreamFault::TimedOut,
            _ => StreamFault::Other,
        }
    }
}

impl StreamFault {
    /// Classify any embedded-io error
    pub fn of<E: embedded_io::Error>(error: &E) -> Self {
        error.kind().into()
    }
}
