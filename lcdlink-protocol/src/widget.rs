//! Widget identifiers and widget types
//!
//! Identifiers are unique per widget type only: a line and a rectangle may
//! both be id 1 at the same time.

use core::num::NonZeroU8;

use crate::opcode;

/// Handle of a live on-screen object (1-255)
///
/// The wire value 0 is reserved for "allocation failed" and cannot be
/// represented, so a failed create can never be addressed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WidgetId(NonZeroU8);

impl WidgetId {
    /// Lowest valid id
    pub const FIRST: Self = match NonZeroU8::new(1) {
        Some(v) => Self(v),
        None => unreachable!(),
    };

    /// Wrap a raw wire id; `None` for the reserved 0
    pub const fn new(raw: u8) -> Option<Self> {
        match NonZeroU8::new(raw) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Raw wire value
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// The id after this one, or `None` at 255
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<WidgetId> for u8 {
    fn from(id: WidgetId) -> Self {
        id.get()
    }
}

/// Widget type; each has its own identifier registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WidgetKind {
    Line,
    Rect,
    Circle,
    Triangle,
    /// Built-in and external icons
    Icon,
    /// Built-in and external animations
    Gif,
    Text,
    Slider,
    Bar,
    Gauge,
    Compass,
    LineMeter,
    Chart,
    /// Data series inside a chart
    Series,
    /// Panel profile only
    Arc,
    /// Weather station, panel profile only
    Station,
}

impl WidgetKind {
    /// Number of widget types
    pub const COUNT: usize = 16;

    /// All widget types in registry order
    pub const ALL: [WidgetKind; Self::COUNT] = [
        WidgetKind::Line,
        WidgetKind::Rect,
        WidgetKind::Circle,
        WidgetKind::Triangle,
        WidgetKind::Icon,
        WidgetKind::Gif,
        WidgetKind::Text,
        WidgetKind::Slider,
        WidgetKind::Bar,
        WidgetKind::Gauge,
        WidgetKind::Compass,
        WidgetKind::LineMeter,
        WidgetKind::Chart,
        WidgetKind::Series,
        WidgetKind::Arc,
        WidgetKind::Station,
    ];

    /// Position in [`WidgetKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Shape-profile type code
    ///
    /// This is the code of the widget's create command, and what delete,
    /// set-top and set-angle commands carry to name the widget type.
    pub const fn type_code(self) -> Option<u8> {
        match self {
            WidgetKind::Line => Some(opcode::DRAW_LINE),
            WidgetKind::Rect => Some(opcode::DRAW_RECT),
            WidgetKind::Circle => Some(opcode::DRAW_CIRCLE),
            WidgetKind::Triangle => Some(opcode::DRAW_TRIANGLE),
            WidgetKind::Icon => Some(opcode::DRAW_ICON),
            WidgetKind::Gif => Some(opcode::DRAW_GIF),
            WidgetKind::Text => Some(opcode::DRAW_TEXT),
            WidgetKind::Slider => Some(opcode::DRAW_SLIDER),
            WidgetKind::Bar => Some(opcode::DRAW_BAR),
            WidgetKind::Gauge => Some(opcode::DRAW_GAUGE),
            WidgetKind::Compass => Some(opcode::DRAW_COMPASS),
            WidgetKind::LineMeter => Some(opcode::DRAW_LINE_METER),
            WidgetKind::Chart => Some(opcode::DRAW_CHART),
            WidgetKind::Series => Some(opcode::DRAW_SERIES),
            WidgetKind::Arc | WidgetKind::Station => None,
        }
    }

    /// Shape-profile set-value command code, for widgets that carry a value
    pub const fn value_code(self) -> Option<u8> {
        match self {
            WidgetKind::Bar => Some(opcode::SET_BAR_VALUE),
            WidgetKind::Slider => Some(opcode::SET_SLIDER_VALUE),
            WidgetKind::Compass => Some(opcode::SET_COMPASS_VALUE),
            WidgetKind::LineMeter => Some(opcode::SET_LINE_METER_VALUE),
            WidgetKind::Gauge => Some(opcode::SET_GAUGE_VALUE),
            _ => None,
        }
    }
}
