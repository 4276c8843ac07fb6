//! Driver errors

use lcdlink_hal::TransportError;
use lcdlink_protocol::CommandError;

use crate::registry::RegistryError;

/// Errors returned by [`Display`](crate::display::Display) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// No id left for the widget type; nothing was sent
    Allocation,
    /// Command could not be laid out; nothing was sent
    Command(CommandError),
    /// Transport rejected the command
    Transport(TransportError),
    /// Widget or operation not available under the active profile
    Unsupported,
}

impl From<RegistryError> for DriverError {
    fn from(_: RegistryError) -> Self {
        DriverError::Allocation
    }
}

impl From<CommandError> for DriverError {
    fn from(e: CommandError) -> Self {
        DriverError::Command(e)
    }
}

impl From<TransportError> for DriverError {
    fn from(e: TransportError) -> Self {
        DriverError::Transport(e)
    }
}
