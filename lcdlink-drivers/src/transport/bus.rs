//! I2C transport
//!
//! The controller accepts at most 32 bytes per bus transaction and needs
//! time to digest each one, so every command is split into chunks with a
//! fixed pause after each chunk.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use lcdlink_hal::{BusConfig, BusFault, Transport, TransportError};

/// Display controller on an I2C bus
pub struct BusTransport<I, D> {
    i2c: I,
    delay: D,
    config: BusConfig,
}

impl<I: I2c, D: DelayNs> BusTransport<I, D> {
    /// Create a transport at the default address and pacing
    pub fn new(i2c: I, delay: D) -> Self {
        Self::with_config(i2c, delay, BusConfig::default())
    }

    /// Create a transport with explicit configuration
    pub fn with_config(i2c: I, delay: D, config: BusConfig) -> Self {
        Self { i2c, delay, config }
    }

    /// Active configuration
    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Give back the bus and delay
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }
}

impl<I: I2c, D: DelayNs> Transport for BusTransport<I, D> {
    fn begin(&mut self) -> Result<(), TransportError> {
        // Address-only probe
        match self.i2c.write(self.config.address, &[]) {
            Ok(()) => Ok(()),
            Err(e) => {
                let fault = BusFault::of(&e);
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "display not found at {=u8:#x}: {}",
                    self.config.address,
                    fault
                );
                match fault {
                    BusFault::Nack => Err(TransportError::Unavailable),
                    other => Err(TransportError::Bus(other)),
                }
            }
        }
    }

    fn write(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        let chunk_size = self.config.effective_chunk_size();

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "bus write: {} bytes in {} chunks",
            frame.len(),
            frame.len().div_ceil(chunk_size)
        );

        for chunk in frame.chunks(chunk_size) {
            self.i2c
                .write(self.config.address, chunk)
                .map_err(|e| BusFault::of(&e))?;
            self.delay.delay_ms(self.config.pacing_ms);
        }
        Ok(())
    }

    fn read_ack(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        if buf.is_empty() {
            return Ok(0);
        }
        // Bounded by the bus peripheral's own timeout
        self.i2c
            .read(self.config.address, buf)
            .map_err(|e| BusFault::of(&e))?;
        Ok(buf.len())
    }
}
