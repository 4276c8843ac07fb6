//! Charts and data series
//!
//! A chart is created as a frame followed by its two axis captions, each
//! command separated by [`Settle::ChartAxis`]. Under the panel profile the
//! captions are the chart record's primary (x) and secondary (y) labels.
//! Data series exist only in the shape profile.

use embedded_hal::delay::DelayNs;
use lcdlink_hal::Transport;
use lcdlink_protocol::panel::{self as panel_cmd, LabelSlot, PanelRecord};
use lcdlink_protocol::shape::{self, Axis, ChartSpec, SeriesSpec, SCREEN_HEIGHT, SCREEN_WIDTH};
use lcdlink_protocol::{Rgb565, WidgetId, WidgetKind};

use super::Display;
use crate::config::{Profile, Settle};
use crate::error::DriverError;

/// Panel charts fill the screen
fn chart_record(spec: &ChartSpec) -> PanelRecord {
    PanelRecord {
        x: 0,
        y: 0,
        w: SCREEN_WIDTH as u16,
        h: SCREEN_HEIGHT as u16,
        foreground: Rgb565::WHITE,
        background: spec.background.into(),
        min: 0,
        max: 100,
    }
}

fn label_slot(axis: Axis) -> LabelSlot {
    match axis {
        Axis::X => LabelSlot::Primary,
        Axis::Y => LabelSlot::Secondary,
    }
}

impl<T: Transport, D: DelayNs> Display<T, D> {
    /// Create a chart with captions on both axes
    ///
    /// If a caption cannot be sent, the chart is deleted again.
    pub fn create_chart(
        &mut self,
        spec: &ChartSpec,
        x_axis: &str,
        y_axis: &str,
    ) -> Result<WidgetId, DriverError> {
        self.create_composite(
            WidgetKind::Chart,
            |d, id| {
                let frame = match d.panel_type(WidgetKind::Chart) {
                    Some(panel) => panel_cmd::create(panel, id, &chart_record(spec))?,
                    None => shape::object(shape::CHART, id, spec)?,
                };
                d.send(&frame)
            },
            |d, id| {
                d.settle(Settle::ChartAxis);
                d.set_axis_text(id, Axis::X, x_axis)?;
                d.settle(Settle::ChartAxis);
                d.set_axis_text(id, Axis::Y, y_axis)
            },
        )
    }

    /// Replace one axis caption
    pub fn set_axis_text(&mut self, chart: WidgetId, axis: Axis, text: &str) -> Result<(), DriverError> {
        let cmd = match self.panel_type(WidgetKind::Chart) {
            Some(panel) => panel_cmd::set_label(panel, chart, label_slot(axis), text)?,
            None => shape::axis_text(chart, axis, text)?,
        };
        self.send(&cmd)
    }

    /// Add a data series to a chart
    pub fn add_series(&mut self, spec: &SeriesSpec) -> Result<WidgetId, DriverError> {
        self.require_series()?;
        self.create_with(WidgetKind::Series, |d, id| {
            d.send(&shape::object(shape::SERIES, id, spec)?)
        })
    }

    /// Recolor or move a series to another chart
    pub fn update_series(&mut self, id: WidgetId, spec: &SeriesSpec) -> Result<(), DriverError> {
        self.require_series()?;
        self.send(&shape::object(shape::SERIES, id, spec)?)
    }

    /// Replace all points of a series
    pub fn set_series_data(
        &mut self,
        chart: WidgetId,
        series: WidgetId,
        points: &[u16],
    ) -> Result<(), DriverError> {
        self.require_series()?;
        self.send(&shape::series_data(chart, series, points)?)
    }

    /// Change one point of a series
    pub fn set_series_point(
        &mut self,
        chart: WidgetId,
        series: WidgetId,
        index: u8,
        value: u16,
    ) -> Result<(), DriverError> {
        self.require_series()?;
        self.send(&shape::series_point(chart, series, index, value)?)
    }

    fn require_series(&self) -> Result<(), DriverError> {
        match self.config.profile {
            Profile::Shape => Ok(()),
            Profile::Panel => Err(DriverError::Unsupported),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::*;
    use super::*;
    use lcdlink_protocol::panel::op;
    use lcdlink_protocol::shape::ChartType;
    use lcdlink_protocol::Rgb888;

    fn chart() -> ChartSpec {
        ChartSpec {
            chart_type: ChartType::Line,
            background: Rgb888::BLACK,
        }
    }

    #[test]
    fn test_shape_chart_sequence() {
        let mut display = display(Profile::Shape);
        let id = display.create_chart(&chart(), "time", "temp").unwrap();

        let (transport, delay) = display.release();
        let frames = transport.decoded();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].code, 0x14);
        assert_eq!(frames[0].u8_at(5), Some(1));
        assert_eq!(frames[1].code, 0x15);
        assert_eq!(frames[1].u8_at(4), Some(id.get()));
        assert_eq!(frames[1].u8_at(5), Some(0));
        assert_eq!(frames[1].tail_from(6), b"time");
        assert_eq!(frames[2].u8_at(5), Some(1));
        assert_eq!(frames[2].tail_from(6), b"temp");
        assert_eq!(delay.pauses_ms, [100, 100]);
    }

    #[test]
    fn test_panel_chart_sequence() {
        let mut display = display(Profile::Panel);
        display.create_chart(&chart(), "x", "y").unwrap();

        let (transport, delay) = display.release();
        let frames = transport.decoded();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].u8_at(5), Some(op::CREATE));
        assert_eq!(frames[0].u8_at(6), Some(0x07));
        assert_eq!(frames[0].u16_at(11), Some(320));
        assert_eq!(frames[0].u16_at(13), Some(240));
        assert_eq!(frames[1].u8_at(5), Some(op::SET_LABEL));
        assert_eq!(frames[1].u8_at(7), Some(0));
        assert_eq!(frames[2].u8_at(7), Some(1));
        assert_eq!(frames[2].tail_from(8), b"y");
        assert_eq!(delay.pauses_ms, [100, 100]);
    }

    #[test]
    fn test_partial_chart_is_deleted() {
        let mut display = display(Profile::Shape);
        display.transport_mut().fail_nth = Some(2);

        assert!(display.create_chart(&chart(), "a", "b").is_err());
        assert!(display.registries().get(WidgetKind::Chart).is_empty());

        let (transport, _) = display.release();
        let frames = transport.decoded();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].code, 0x14);
        assert_eq!(frames[1].code, 0x15);
        assert_eq!(transport.frames[2], [0x55, 0xAA, 0x03, 0x1B, 0x14, 0x01]);
    }

    #[test]
    fn test_partial_chart_keeps_id_when_delete_fails() {
        let mut display = display(Profile::Shape);
        display.transport_mut().fail_from = Some(1);

        assert!(display.create_chart(&chart(), "a", "b").is_err());
        // The chart frame went out and could not be taken down
        assert!(display.registries().contains(WidgetKind::Chart, WidgetId::FIRST));

        display.transport_mut().fail_from = None;
        display.delete(WidgetKind::Chart, WidgetId::FIRST).unwrap();
        assert!(display.registries().get(WidgetKind::Chart).is_empty());
    }

    #[test]
    fn test_chart_frame_failure_sends_no_delete() {
        let mut display = display(Profile::Shape);
        display.transport_mut().fail_nth = Some(0);

        assert!(display.create_chart(&chart(), "a", "b").is_err());
        assert!(display.registries().get(WidgetKind::Chart).is_empty());
        let (transport, delay) = display.release();
        assert!(transport.frames.is_empty());
        assert!(delay.pauses_ms.is_empty());
    }

    #[test]
    fn test_series_operations() {
        let mut display = display(Profile::Shape);
        let chart_id = display.create_chart(&chart(), "", "").unwrap();
        let series = display
            .add_series(&SeriesSpec {
                chart: chart_id,
                color: Rgb888::ORANGE,
            })
            .unwrap();
        display.set_series_data(chart_id, series, &[10, 20, 30]).unwrap();
        display.set_series_point(chart_id, series, 1, 25).unwrap();

        let (transport, _) = display.release();
        let frames = transport.decoded();

        assert_eq!(frames[3].code, 0x16);
        assert_eq!(frames[3].u8_at(5), Some(chart_id.get()));
        assert_eq!(frames[4].code, 0x17);
        assert_eq!(frames[4].len(), 14);
        assert_eq!(frames[4].u16_at(12), Some(30));
        assert_eq!(frames[5].len(), 10);
        assert_eq!(frames[5].u16_at(8), Some(25));
    }

    #[test]
    fn test_series_unsupported_on_panel() {
        let mut display = display(Profile::Panel);
        let spec = SeriesSpec {
            chart: WidgetId::FIRST,
            color: Rgb888::RED,
        };
        assert_eq!(display.add_series(&spec), Err(DriverError::Unsupported));
        assert!(display.registries().get(WidgetKind::Series).is_empty());
    }
}
