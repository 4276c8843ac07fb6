//! Panel-profile widgets
//!
//! Arcs and weather stations only exist as panel records. The generic
//! record operations here also work on every other panel type while the
//! panel profile is active.

use embedded_hal::delay::DelayNs;
use lcdlink_hal::Transport;
use lcdlink_protocol::panel::{self as panel_cmd, LabelSlot, PanelRecord, PanelType};
use lcdlink_protocol::{Rgb565, WidgetId};

use super::Display;
use crate::config::Settle;
use crate::error::DriverError;

impl<T: Transport, D: DelayNs> Display<T, D> {
    fn require_panel(&self, panel: PanelType) -> Result<PanelType, DriverError> {
        self.panel_type(panel.kind()).ok_or(DriverError::Unsupported)
    }

    /// Create any panel widget from a raw record
    pub fn create_panel(
        &mut self,
        panel: PanelType,
        record: &PanelRecord,
    ) -> Result<WidgetId, DriverError> {
        let panel = self.require_panel(panel)?;
        self.create_with(panel.kind(), |d, id| {
            d.send(&panel_cmd::create(panel, id, record)?)
        })
    }

    /// Re-send a panel widget's record under its existing id
    pub fn update_panel(
        &mut self,
        panel: PanelType,
        id: WidgetId,
        record: &PanelRecord,
    ) -> Result<(), DriverError> {
        let panel = self.require_panel(panel)?;
        self.send(&panel_cmd::create(panel, id, record)?)
    }

    pub fn create_arc(&mut self, record: &PanelRecord) -> Result<WidgetId, DriverError> {
        self.create_panel(PanelType::Arc, record)
    }

    pub fn update_arc(&mut self, id: WidgetId, record: &PanelRecord) -> Result<(), DriverError> {
        self.update_panel(PanelType::Arc, id, record)
    }

    /// Create a weather station with its title and unit labels
    ///
    /// Record, then title, then unit, each separated by
    /// [`Settle::StationLabel`]. A label that cannot be sent takes the
    /// station down again.
    pub fn create_station(
        &mut self,
        record: &PanelRecord,
        title: &str,
        unit: &str,
    ) -> Result<WidgetId, DriverError> {
        let panel = self.require_panel(PanelType::Station)?;
        self.create_composite(
            panel.kind(),
            |d, id| d.send(&panel_cmd::create(panel, id, record)?),
            |d, id| {
                d.settle(Settle::StationLabel);
                d.send(&panel_cmd::set_label(panel, id, LabelSlot::Primary, title)?)?;
                d.settle(Settle::StationLabel);
                d.send(&panel_cmd::set_label(panel, id, LabelSlot::Secondary, unit)?)
            },
        )
    }

    pub fn update_station(&mut self, id: WidgetId, record: &PanelRecord) -> Result<(), DriverError> {
        self.update_panel(PanelType::Station, id, record)
    }

    /// Recolor a panel widget
    pub fn set_panel_color(
        &mut self,
        panel: PanelType,
        id: WidgetId,
        foreground: Rgb565,
        background: Rgb565,
    ) -> Result<(), DriverError> {
        let panel = self.require_panel(panel)?;
        self.send(&panel_cmd::set_color(panel, id, foreground, background)?)
    }

    /// Replace one of a panel widget's labels
    pub fn set_panel_label(
        &mut self,
        panel: PanelType,
        id: WidgetId,
        slot: LabelSlot,
        text: &str,
    ) -> Result<(), DriverError> {
        let panel = self.require_panel(panel)?;
        self.send(&panel_cmd::set_label(panel, id, slot, text)?)
    }
}
