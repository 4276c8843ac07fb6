//! Display driver for the lcdlink display controller
//!
//! This crate ties the command encoder, the per-type id registries and a
//! transport together into a [`Display`] that creates, updates and deletes
//! on-screen widgets:
//!
//! - Widget id registries with a selectable allocation policy
//! - Settle-delay table and driver configuration
//! - The `Display` driver covering both protocol profiles
//!
//! Every operation runs to completion before returning. Commands go out
//! in call order, one transport write each, except for the few composite
//! widgets that need several commands separated by settle delays.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod display;
pub mod error;
pub mod registry;

pub use config::{DriverConfig, Profile, Settle, Timing};
pub use display::Display;
pub use error::DriverError;
pub use registry::{IdPolicy, Registries, Registry, RegistryError, REGISTRY_CAPACITY};
