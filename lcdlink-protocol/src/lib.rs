//! Display Controller Command Protocol
//!
//! This crate defines the binary command set spoken by the companion display
//! controller. The host never rasterizes anything: every widget is a single
//! framed command that the controller renders and keeps addressable by id.
//!
//! # Protocol Overview
//!
//! All commands share one envelope:
//! ```text
//! ┌──────┬──────┬────────┬──────┬──────────────────┐
//! │ 0x55 │ 0xAA │ LENGTH │ CODE │ PAYLOAD          │
//! │ 1B   │ 1B   │ 1B     │ 1B   │ 0–251B           │
//! └──────┴──────┴────────┴──────┴──────────────────┘
//! ```
//!
//! `LENGTH` is the total frame length minus three. Multi-byte fields are
//! big-endian. There is no checksum.
//!
//! Two field-layout profiles sit on top of the envelope:
//!
//! - [`shape`]: one command code per widget type, 24-bit RGB colors.
//! - [`panel`]: a single generic widget record command with a sub-opcode
//!   at offset 5 and 16-bit RGB565 colors.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod frame;
pub mod opcode;
pub mod panel;
pub mod shape;
pub mod widget;

pub use color::{Rgb565, Rgb888};
pub use frame::{
    Command, CommandError, Frame, FrameError, FrameParser, HEADER_HIGH, HEADER_LEN, HEADER_LOW,
    MAX_COMMAND_LEN, MAX_PAYLOAD_SIZE,
};
pub use widget::{WidgetId, WidgetKind};
