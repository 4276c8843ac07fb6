//! Transport capability
//!
//! A transport delivers one complete command per [`Transport::write`] call.
//! Chunking and inter-write pacing are the transport's business, so the
//! caller never sees a half-sent command succeed.

use crate::i2c::BusFault;
use crate::uart::StreamFault;

/// Error from a transport operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Controller did not answer the presence probe
    Unavailable,
    /// Bus transfer failed
    Bus(BusFault),
    /// Serial stream failed
    Stream(StreamFault),
}

impl From<BusFault> for TransportError {
    fn from(fault: BusFault) -> Self {
        TransportError::Bus(fault)
    }
}

impl From<StreamFault> for TransportError {
    fn from(fault: StreamFault) -> Self {
        TransportError::Stream(fault)
    }
}

/// Byte channel to the display controller
pub trait Transport {
    /// Bring the link up and check the controller is there
    fn begin(&mut self) -> Result<(), TransportError>;

    /// Send one framed command, paced per the transport's rules
    fn write(&mut self, frame: &[u8]) -> Result<(), TransportError>;

    /// Read an acknowledgement into `buf`
    ///
    /// Returns the number of bytes read; `Ok(0)` means nothing arrived in
    /// time. The bytes are not interpreted.
    fn read_ack(&mut self, buf: &mut [u8]) -> Result<usize, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn begin(&mut self) -> Result<(), TransportError> {
        T::begin(self)
    }

    fn write(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        T::write(self, frame)
    }

    fn read_ack(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        T::read_ack(self, buf)
    }
}
