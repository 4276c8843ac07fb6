//! lcdlink Transport Abstraction
//!
//! The display driver never touches a peripheral directly. It talks to a
//! [`Transport`], which moves already-framed command bytes to the
//! controller and reads back whatever acknowledgement it sends.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lcdlink-core (Display driver)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lcdlink-hal (this crate - Transport)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ BusTransport  │       │StreamTransport│
//! │    (I2C)      │       │    (UART)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! Concrete transports live in `lcdlink-drivers`; this crate only holds
//! the capability trait, its error taxonomy and the per-transport
//! configuration.

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
pub mod transport;
pub mod uart;

pub use i2c::{BusConfig, BusFault};
pub use transport::{Transport, TransportError};
pub use uart::{StreamConfig, StreamFault};
