//! Display driver
//!
//! [`Display`] owns one transport, a delay source and a registry per widget
//! type. Widget lifecycle:
//!
//! ```text
//! create ──► live ──► update* ──► delete
//!   │                               │
//!   └ id allocated                  └ id released once the delete is sent
//! ```
//!
//! A create that fails after allocating (encoding or transport error)
//! releases its id again, so a registry only ever holds ids the controller
//! was sent. Composite creates (chart, station) that fail after their first
//! command was drawn send a delete for it; if that delete fails too, the id
//! stays live so the leftover can still be deleted or cleared. Updates and value changes address an id without checking the
//! registry; the controller decides what an unknown id means.
//!
//! Operations are grouped by widget family:
//!
//! - [`draw`]: primitives, images, text, clock and date labels
//! - [`widgets`]: sliders, bars, gauges, line meters, compasses
//! - [`chart`]: charts, axis captions and data series
//! - [`panel`]: panel-profile-only widgets and generic record operations

pub mod chart;
pub mod draw;
pub mod panel;
pub mod widgets;

#[cfg(test)]
pub(crate) mod mock;

use embedded_hal::delay::DelayNs;
use lcdlink_hal::Transport;
use lcdlink_protocol::panel::{self as panel_cmd, PanelType};
use lcdlink_protocol::shape;
use lcdlink_protocol::{Command, Rgb888, WidgetId, WidgetKind};

use crate::config::{DriverConfig, Profile, Settle};
use crate::error::DriverError;
use crate::registry::Registries;

/// Driver for one display controller
pub struct Display<T, D> {
    transport: T,
    delay: D,
    config: DriverConfig,
    registries: Registries,
}

impl<T: Transport, D: DelayNs> Display<T, D> {
    /// Create a driver with the default configuration
    pub fn new(transport: T, delay: D) -> Self {
        Self::with_config(transport, delay, DriverConfig::default())
    }

    /// Create a driver with explicit configuration
    pub fn with_config(transport: T, delay: D, config: DriverConfig) -> Self {
        Self {
            transport,
            delay,
            registries: Registries::new(config.id_policy),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Active protocol profile
    pub fn profile(&self) -> Profile {
        self.config.profile
    }

    /// Live ids per widget type
    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    /// Underlying transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give back the transport and delay
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    /// Bring up the link
    ///
    /// Under the panel profile the controller is also switched into panel
    /// mode, which takes [`Settle::ProtocolInit`] to complete.
    pub fn begin(&mut self) -> Result<(), DriverError> {
        self.transport.begin()?;
        if self.config.profile == Profile::Panel {
            self.send(&panel_cmd::init()?)?;
            self.settle(Settle::ProtocolInit);
        }
        Ok(())
    }

    /// Read whatever acknowledgement the controller sent
    pub fn read_ack(&mut self, buf: &mut [u8]) -> Result<usize, DriverError> {
        Ok(self.transport.read_ack(buf)?)
    }

    /// Clear the screen and forget every widget
    pub fn clear_screen(&mut self) -> Result<(), DriverError> {
        self.send(&shape::clear_screen()?)?;
        self.registries.clear();
        self.settle(Settle::ClearScreen);
        Ok(())
    }

    /// Fill the background with a solid color
    pub fn set_background_color(&mut self, color: Rgb888) -> Result<(), DriverError> {
        self.send(&shape::background_color(color)?)?;
        self.settle(Settle::BackgroundColor);
        Ok(())
    }

    /// Use an image as background
    ///
    /// `location` selects built-in (0) or external storage; `path` names
    /// the file there.
    pub fn set_background_image(&mut self, location: u8, path: &str) -> Result<(), DriverError> {
        self.send(&shape::background_image(location, path)?)
    }

    /// Remove a widget and release its id
    ///
    /// The id stays live if the command could not be sent.
    pub fn delete(&mut self, kind: WidgetKind, id: WidgetId) -> Result<(), DriverError> {
        let cmd = match self.panel_type(kind) {
            Some(panel) => panel_cmd::delete(panel, id)?,
            None => shape::delete(Self::type_code(kind)?, id)?,
        };
        self.send(&cmd)?;
        self.registries.release(kind, id);
        Ok(())
    }

    /// Raise a widget above the others
    pub fn set_top(&mut self, kind: WidgetKind, id: WidgetId) -> Result<(), DriverError> {
        self.send(&shape::set_top(Self::type_code(kind)?, id)?)
    }

    /// Rotate a widget, in degrees
    pub fn set_angle(&mut self, kind: WidgetKind, id: WidgetId, angle: i16) -> Result<(), DriverError> {
        self.send(&shape::set_angle(Self::type_code(kind)?, id, angle)?)
    }

    fn type_code(kind: WidgetKind) -> Result<u8, DriverError> {
        kind.type_code().ok_or(DriverError::Unsupported)
    }

    /// Panel type for `kind` if the panel profile is active and covers it
    fn panel_type(&self, kind: WidgetKind) -> Option<PanelType> {
        match self.config.profile {
            Profile::Panel => PanelType::from_kind(kind),
            Profile::Shape => None,
        }
    }

    fn send(&mut self, cmd: &Command) -> Result<(), DriverError> {
        self.transport.write(cmd.as_bytes())?;
        Ok(())
    }

    fn settle(&mut self, settle: Settle) {
        let ms = self.config.timing.get(settle);
        #[cfg(feature = "defmt")]
        defmt::trace!("settle {}: {} ms", settle, ms);
        if ms > 0 {
            self.delay.delay_ms(ms);
        }
    }

    /// Allocate an id, run `build` with it and keep the id only on success
    fn create_with<F>(&mut self, kind: WidgetKind, build: F) -> Result<WidgetId, DriverError>
    where
        F: FnOnce(&mut Self, WidgetId) -> Result<(), DriverError>,
    {
        let id = match self.registries.allocate(kind) {
            Ok(id) => id,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("no id left for {}", kind);
                return Err(e.into());
            }
        };

        match build(self, id) {
            Ok(()) => Ok(id),
            Err(e) => {
                self.registries.release(kind, id);
                Err(e)
            }
        }
    }

    /// Like [`Self::create_with`], for widgets built from several commands
    ///
    /// `head` draws the widget; `rest` finishes it. A failure in `rest`
    /// takes the drawn widget down again.
    fn create_composite<H, R>(
        &mut self,
        kind: WidgetKind,
        head: H,
        rest: R,
    ) -> Result<WidgetId, DriverError>
    where
        H: FnOnce(&mut Self, WidgetId) -> Result<(), DriverError>,
        R: FnOnce(&mut Self, WidgetId) -> Result<(), DriverError>,
    {
        let id = self.create_with(kind, head)?;
        if let Err(e) = rest(self, id) {
            // On success this also releases the id
            if self.delete(kind, id).is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("partial {} {} left on screen", kind, id.get());
            }
            return Err(e);
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::mock::*;
    use super::*;
    use lcdlink_hal::TransportError;
    use lcdlink_protocol::shape::{LineSpec, Outline, RectSpec};

    fn rect() -> RectSpec {
        RectSpec {
            x: 0,
            y: 0,
            w: 10,
            h: 10,
            border: Outline::default(),
            fill: None,
            rounded: 0,
        }
    }

    #[test]
    fn test_begin_shape_profile_sends_nothing() {
        let mut display = display(Profile::Shape);
        display.begin().unwrap();

        let (transport, delay) = display.release();
        assert!(transport.began);
        assert!(transport.frames.is_empty());
        assert!(delay.pauses_ms.is_empty());
    }

    #[test]
    fn test_begin_panel_profile_initializes() {
        let mut display = display(Profile::Panel);
        display.begin().unwrap();

        let (transport, delay) = display.release();
        assert_eq!(transport.frames, [[0x55, 0xAA, 0x03, 0x21, 0x00, 0x00].to_vec()]);
        assert_eq!(delay.pauses_ms, [2000]);
    }

    #[test]
    fn test_begin_failure_is_surfaced() {
        let mut display = display(Profile::Panel);
        display.transport_mut().absent = true;

        assert_eq!(
            display.begin(),
            Err(DriverError::Transport(TransportError::Unavailable))
        );
        let (transport, _) = display.release();
        assert!(transport.frames.is_empty());
    }

    #[test]
    fn test_clear_screen_waits_and_forgets_widgets() {
        let mut display = display(Profile::Shape);
        display.draw_rect(&rect()).unwrap();

        display.clear_screen().unwrap();

        assert!(display.registries().get(WidgetKind::Rect).is_empty());
        let (transport, delay) = display.release();
        assert_eq!(transport.frames[1], [0x55, 0xAA, 0x01, 0x1D]);
        assert_eq!(delay.pauses_ms, [1500]);
    }

    #[test]
    fn test_background_color_settles() {
        let mut display = display(Profile::Shape);
        display.set_background_color(Rgb888::NAVY).unwrap();

        let (transport, delay) = display.release();
        assert_eq!(transport.frames[0], [0x55, 0xAA, 0x04, 0x19, 0x00, 0x00, 0x80]);
        assert_eq!(delay.pauses_ms, [300]);
    }

    #[test]
    fn test_delete_releases_after_send() {
        let mut display = display(Profile::Shape);
        let id = display.draw_rect(&rect()).unwrap();

        display.delete(WidgetKind::Rect, id).unwrap();

        assert!(!display.registries().contains(WidgetKind::Rect, id));
        let (transport, _) = display.release();
        assert_eq!(transport.frames[1], [0x55, 0xAA, 0x03, 0x1B, 0x04, 0x01]);
    }

    #[test]
    fn test_failed_delete_keeps_id() {
        let mut display = display(Profile::Shape);
        let id = display.draw_rect(&rect()).unwrap();
        display.transport_mut().fail_writes = true;

        assert!(display.delete(WidgetKind::Rect, id).is_err());
        assert!(display.registries().contains(WidgetKind::Rect, id));
    }

    #[test]
    fn test_failed_create_releases_id() {
        let mut display = display(Profile::Shape);
        display.transport_mut().fail_writes = true;

        let line = LineSpec {
            x0: 0,
            y0: 0,
            x1: 5,
            y1: 5,
            width: 1,
            color: Rgb888::WHITE,
        };
        assert!(matches!(display.draw_line(&line), Err(DriverError::Transport(_))));
        assert!(display.registries().get(WidgetKind::Line).is_empty());

        display.transport_mut().fail_writes = false;
        assert_eq!(display.draw_line(&line).map(WidgetId::get), Ok(1));
    }

    #[test]
    fn test_exhausted_registry_sends_nothing() {
        let mut display = display(Profile::Shape);
        for _ in 0..crate::REGISTRY_CAPACITY {
            display.draw_rect(&rect()).unwrap();
        }

        assert_eq!(display.draw_rect(&rect()), Err(DriverError::Allocation));
        let (transport, _) = display.release();
        assert_eq!(transport.frames.len(), crate::REGISTRY_CAPACITY);
    }

    #[test]
    fn test_object_management_needs_type_code() {
        let mut display = display(Profile::Panel);
        let id = WidgetId::FIRST;

        assert_eq!(display.set_top(WidgetKind::Station, id), Err(DriverError::Unsupported));
        display.set_angle(WidgetKind::Icon, id, 90).unwrap();

        let (transport, _) = display.release();
        assert_eq!(transport.frames[0], [0x55, 0xAA, 0x05, 0x1E, 0x08, 0x01, 0x00, 0x5A]);
    }

    #[test]
    fn test_panel_delete_uses_panel_record() {
        let mut display = display(Profile::Panel);
        display.delete(WidgetKind::Gauge, WidgetId::FIRST).unwrap();
        display.delete(WidgetKind::Line, WidgetId::FIRST).unwrap();

        let (transport, _) = display.release();
        assert_eq!(transport.frames[0], [0x55, 0xAA, 0x04, 0x21, 0x01, 0x05, 0x04]);
        assert_eq!(transport.frames[1], [0x55, 0xAA, 0x03, 0x1B, 0x03, 0x01]);
    }

    #[test]
    fn test_read_ack_passes_through() {
        let mut display = display(Profile::Shape);
        display.transport_mut().ack = [0x06].to_vec();

        let mut buf = [0u8; 4];
        assert_eq!(display.read_ack(&mut buf), Ok(1));
        assert_eq!(buf[0], 0x06);
    }
}
