//! Driver configuration
//!
//! Plain data describing how the driver talks to the controller: which
//! protocol profile, how ids are allocated and how long to wait after
//! commands the controller is slow to digest. Stored as postcard binary
//! data when the `serde` feature is enabled.

pub mod driver;
#[cfg(feature = "serde")]
pub mod storage;
pub mod timing;

pub use crate::registry::IdPolicy;
pub use driver::*;
#[cfg(feature = "serde")]
pub use storage::*;
pub use timing::*;
