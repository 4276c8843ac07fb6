//! Transport implementations
//!
//! - Bus: I2C master writing to the controller address
//! - Stream: any byte stream, usually a UART

pub mod bus;
pub mod stream;

pub use bus::BusTransport;
pub use stream::StreamTransport;
