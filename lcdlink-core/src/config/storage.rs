//! Configuration persistence
//!
//! Serializes a [`DriverConfig`] with postcard so it can be kept in flash
//! or any other byte store next to the rest of the board configuration.

use super::driver::DriverConfig;

/// Upper bound on a serialized [`DriverConfig`]
pub const MAX_CONFIG_SIZE: usize = 64;

/// Configuration persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
}

/// Serialize into `buf`, returning the used prefix
pub fn to_bytes<'a>(config: &DriverConfig, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
    postcard::to_slice(config, buf).map_err(|_| ConfigError::Serialize)
}

/// Deserialize a configuration written by [`to_bytes`]
pub fn from_bytes(bytes: &[u8]) -> Result<DriverConfig, ConfigError> {
    postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
}
