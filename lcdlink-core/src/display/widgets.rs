//! Value widgets
//!
//! Sliders, bars, gauges, line meters and compasses exist in both
//! profiles. The shape profile sends each type's own layout; the panel
//! profile sends a generic record built from the same spec:
//!
//! | Widget     | w × h               | min..max    | fg / bg              |
//! |------------|---------------------|-------------|----------------------|
//! | slider/bar | w × h               | 0..100      | color / black        |
//! | gauge      | size × size         | start..end  | pointer / background |
//! | line meter | size × size         | start..end  | pointer / background |
//! | compass    | diameter × diameter | 0..360      | white / black        |

use embedded_hal::delay::DelayNs;
use lcdlink_hal::Transport;
use lcdlink_protocol::panel::{self as panel_cmd, PanelRecord};
use lcdlink_protocol::shape::{self, BarSpec, CompassSpec, DialSpec, Fields, Layout};
use lcdlink_protocol::{Rgb565, WidgetId, WidgetKind};

use super::Display;
use crate::error::DriverError;

/// Range of slider and bar values
pub const PERCENT_RANGE: (u16, u16) = (0, 100);

/// Range of compass headings, in degrees
pub const HEADING_RANGE: (u16, u16) = (0, 360);

fn bar_record(spec: &BarSpec) -> PanelRecord {
    PanelRecord {
        x: spec.x,
        y: spec.y,
        w: spec.w,
        h: spec.h,
        foreground: spec.color.into(),
        background: Rgb565::BLACK,
        min: PERCENT_RANGE.0,
        max: PERCENT_RANGE.1,
    }
}

fn dial_record(spec: &DialSpec) -> PanelRecord {
    PanelRecord {
        x: spec.x,
        y: spec.y,
        w: spec.size,
        h: spec.size,
        foreground: spec.pointer.into(),
        background: spec.background.into(),
        min: spec.start,
        max: spec.end,
    }
}

fn compass_record(spec: &CompassSpec) -> PanelRecord {
    PanelRecord {
        x: spec.x,
        y: spec.y,
        w: spec.diameter,
        h: spec.diameter,
        foreground: Rgb565::WHITE,
        background: Rgb565::BLACK,
        min: HEADING_RANGE.0,
        max: HEADING_RANGE.1,
    }
}

impl<T: Transport, D: DelayNs> Display<T, D> {
    /// Send a create/update for a value widget in the active profile
    fn place(
        &mut self,
        kind: WidgetKind,
        id: WidgetId,
        layout: Layout,
        fields: &impl Fields,
        record: &PanelRecord,
    ) -> Result<(), DriverError> {
        let cmd = match self.panel_type(kind) {
            Some(panel) => panel_cmd::create(panel, id, record)?,
            None => shape::object(layout, id, fields)?,
        };
        self.send(&cmd)
    }

    pub fn create_slider(&mut self, spec: &BarSpec) -> Result<WidgetId, DriverError> {
        self.create_with(WidgetKind::Slider, |d, id| {
            d.place(WidgetKind::Slider, id, shape::SLIDER, spec, &bar_record(spec))
        })
    }

    pub fn update_slider(&mut self, id: WidgetId, spec: &BarSpec) -> Result<(), DriverError> {
        self.place(WidgetKind::Slider, id, shape::SLIDER, spec, &bar_record(spec))
    }

    pub fn create_bar(&mut self, spec: &BarSpec) -> Result<WidgetId, DriverError> {
        self.create_with(WidgetKind::Bar, |d, id| {
            d.place(WidgetKind::Bar, id, shape::BAR, spec, &bar_record(spec))
        })
    }

    pub fn update_bar(&mut self, id: WidgetId, spec: &BarSpec) -> Result<(), DriverError> {
        self.place(WidgetKind::Bar, id, shape::BAR, spec, &bar_record(spec))
    }

    pub fn create_gauge(&mut self, spec: &DialSpec) -> Result<WidgetId, DriverError> {
        self.create_with(WidgetKind::Gauge, |d, id| {
            d.place(WidgetKind::Gauge, id, shape::GAUGE, spec, &dial_record(spec))
        })
    }

    pub fn update_gauge(&mut self, id: WidgetId, spec: &DialSpec) -> Result<(), DriverError> {
        self.place(WidgetKind::Gauge, id, shape::GAUGE, spec, &dial_record(spec))
    }

    pub fn create_line_meter(&mut self, spec: &DialSpec) -> Result<WidgetId, DriverError> {
        self.create_with(WidgetKind::LineMeter, |d, id| {
            d.place(WidgetKind::LineMeter, id, shape::LINE_METER, spec, &dial_record(spec))
        })
    }

    pub fn update_line_meter(&mut self, id: WidgetId, spec: &DialSpec) -> Result<(), DriverError> {
        self.place(WidgetKind::LineMeter, id, shape::LINE_METER, spec, &dial_record(spec))
    }

    pub fn create_compass(&mut self, spec: &CompassSpec) -> Result<WidgetId, DriverError> {
        self.create_with(WidgetKind::Compass, |d, id| {
            d.place(WidgetKind::Compass, id, shape::COMPASS, spec, &compass_record(spec))
        })
    }

    pub fn update_compass(&mut self, id: WidgetId, spec: &CompassSpec) -> Result<(), DriverError> {
        self.place(WidgetKind::Compass, id, shape::COMPASS, spec, &compass_record(spec))
    }

    /// Change the value a widget shows
    ///
    /// Under the shape profile only bars, sliders, gauges, compasses and
    /// line meters carry a value. Under the panel profile every panel type
    /// does.
    pub fn set_value(&mut self, kind: WidgetKind, id: WidgetId, value: u16) -> Result<(), DriverError> {
        let cmd = match self.panel_type(kind) {
            Some(panel) => panel_cmd::set_value(panel, id, value)?,
            None => {
                let code = kind.value_code().ok_or(DriverError::Unsupported)?;
                shape::set_value(code, id, value)?
            }
        };
        self.send(&cmd)
    }
}
