//! I2C bus configuration and faults

use embedded_hal::i2c::ErrorKind;

/// Default 7-bit address of the display controller
pub const DEFAULT_ADDRESS: u8 = 0x2C;

/// Largest write the controller accepts in one bus transaction
pub const MAX_CHUNK_SIZE: usize = 32;

/// I2C transport configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusConfig {
    /// 7-bit device address
    pub address: u8,
    /// SCL frequency in Hz, applied when the bus peripheral is built
    pub frequency: u32,
    /// Bytes per bus write, capped at [`MAX_CHUNK_SIZE`]
    pub chunk_size: usize,
    /// Delay after every chunk, in milliseconds
    pub pacing_ms: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            frequency: 100_000, // 100kHz standard mode
            chunk_size: MAX_CHUNK_SIZE,
            pacing_ms: 50,
        }
    }
}

impl BusConfig {
    /// Chunk size actually used: never zero, never above the controller limit
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.clamp(1, MAX_CHUNK_SIZE)
    }
}

/// Error from an I2C transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusFault {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for BusFault {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => BusFault::Bus,
            ErrorKind::ArbitrationLoss => BusFault::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => BusFault::Nack,
            ErrorKind::Overrun => BusFault::Overrun,
            _ => BusFault::Other,
        }
    }
}

impl BusFault {
    /// Classify any HAL I2C error
    pub fn of<E: embedded_hal::i2c::Error>(error: &E) -> Self {
        error.kind().into()
    }
}
