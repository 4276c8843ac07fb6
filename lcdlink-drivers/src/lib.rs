//! Transport implementations
//!
//! This crate provides concrete implementations of the
//! [`lcdlink_hal::Transport`] trait on top of the `embedded-hal` and
//! `embedded-io` peripheral traits:
//!
//! - I2C: 32-byte chunked writes with per-chunk pacing
//! - UART: whole-command writes with a bounded acknowledgement wait

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod transport;

pub use transport::{BusTransport, StreamTransport};
