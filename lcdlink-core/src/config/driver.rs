//! Driver configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::timing::Timing;
use crate::registry::IdPolicy;

/// Wire format used for the value-widget family
///
/// Drawing primitives (lines, shapes, images, text) always use the shape
/// layouts; the profile decides how sliders, bars, gauges, compasses,
/// line meters and charts are encoded, and whether arcs and weather
/// stations are available at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Profile {
    /// One command per widget type, 24-bit colors
    #[default]
    Shape,
    /// Generic widget records, RGB565 colors
    Panel,
}

/// Complete driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    /// Value-widget wire format
    pub profile: Profile,
    /// Id allocation policy shared by all registries
    pub id_policy: IdPolicy,
    /// Settle delays
    pub timing: Timing,
}

impl DriverConfig {
    /// Default configuration for a given profile
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }
}
