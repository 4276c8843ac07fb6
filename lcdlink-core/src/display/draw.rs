//! Drawing primitives, images and text
//!
//! These always use the shape layouts, whatever the active profile.

use embedded_hal::delay::DelayNs;
use lcdlink_hal::Transport;
use lcdlink_protocol::shape::{
    self, CircleSpec, FontSize, ImageKind, ImageSpec, LineSpec, RectSpec, TextSpec, TriangleSpec,
};
use lcdlink_protocol::{Rgb888, WidgetId, WidgetKind};

use super::Display;
use crate::config::Settle;
use crate::error::DriverError;

/// Where and how a generated label is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    pub x: u16,
    pub y: u16,
    pub font: FontSize,
    pub color: Rgb888,
}

impl TextStyle {
    /// Text widget with this style
    pub fn with_text<'a>(&self, text: &'a str) -> TextSpec<'a> {
        TextSpec {
            x: self.x,
            y: self.y,
            font: self.font,
            color: self.color,
            text,
        }
    }
}

/// Wall-clock time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clock {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Calendar date with weekday (1 = Monday ... 7 = Sunday)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarDate {
    pub month: u8,
    pub day: u8,
    pub weekday: u8,
}

impl<T: Transport, D: DelayNs> Display<T, D> {
    /// Set a single pixel; coordinates past the edge are clamped
    pub fn draw_pixel(&mut self, x: i16, y: i16, color: Rgb888) -> Result<(), DriverError> {
        self.send(&shape::pixel(x, y, color)?)
    }

    pub fn draw_line(&mut self, spec: &LineSpec) -> Result<WidgetId, DriverError> {
        self.create_with(WidgetKind::Line, |d, id| {
            d.send(&shape::object(shape::LINE, id, spec)?)
        })
    }

    /// Move or restyle a line; waits [`Settle::LineUpdate`] afterwards
    pub fn update_line(&mut self, id: WidgetId, spec: &LineSpec) -> Result<(), DriverError> {
        self.send(&shape::object(shape::LINE, id, spec)?)?;
        self.settle(Settle::LineUpdate);
        Ok(())
    }

    pub fn draw_rect(&mut self, spec: &RectSpec) -> Result<WidgetId, DriverError> {
        self.create_with(WidgetKind::Rect, |d, id| {
            d.send(&shape::object(shape::RECT, id, spec)?)
        })
    }

    pub fn update_rect(&mut self, id: WidgetId, spec: &RectSpec) -> Result<(), DriverError> {
        self.send(&shape::object(shape::RECT, id, spec)?)
    }

    pub fn draw_circle(&mut self, spec: &CircleSpec) -> Result<WidgetId, DriverError> {
        self.create_with(WidgetKind::Circle, |d, id| {
            d.send(&shape::object(shape::CIRCLE, id, spec)?)
        })
    }

    pub fn update_circle(&mut self, id: WidgetId, spec: &CircleSpec) -> Result<(), DriverError> {
        self.send(&shape::object(shape::CIRCLE, id, spec)?)
    }

    pub fn draw_triangle(&mut self, spec: &TriangleSpec) -> Result<WidgetId, DriverError> {
        self.create_with(WidgetKind::Triangle, |d, id| {
            d.send(&shape::object(shape::TRIANGLE, id, spec)?)
        })
    }

    pub fn update_triangle(&mut self, id: WidgetId, spec: &TriangleSpec) -> Result<(), DriverError> {
        self.send(&shape::object(shape::TRIANGLE, id, spec)?)
    }

    /// Show a built-in icon or gif
    pub fn draw_image(&mut self, kind: ImageKind, spec: &ImageSpec) -> Result<WidgetId, DriverError> {
        self.create_with(kind.widget_kind(), |d, id| {
            d.send(&shape::object(kind.builtin(), id, spec)?)
        })
    }

    pub fn update_image(
        &mut self,
        kind: ImageKind,
        id: WidgetId,
        spec: &ImageSpec,
    ) -> Result<(), DriverError> {
        self.send(&shape::object(kind.builtin(), id, spec)?)
    }

    /// Show an icon or gif stored as a file on the controller
    ///
    /// The id comes from the same registry as built-in images of that kind.
    pub fn draw_external_image(
        &mut self,
        kind: ImageKind,
        x: i16,
        y: i16,
        zoom: u16,
        path: &str,
    ) -> Result<WidgetId, DriverError> {
        self.create_with(kind.widget_kind(), |d, id| {
            d.send(&shape::external_image(kind, id, x, y, zoom, path)?)
        })
    }

    pub fn update_external_image(
        &mut self,
        kind: ImageKind,
        id: WidgetId,
        x: i16,
        y: i16,
        zoom: u16,
        path: &str,
    ) -> Result<(), DriverError> {
        self.send(&shape::external_image(kind, id, x, y, zoom, path)?)
    }

    /// Draw a text label; text too long for one command is cut short
    pub fn draw_text(&mut self, spec: &TextSpec<'_>) -> Result<WidgetId, DriverError> {
        self.create_with(WidgetKind::Text, |d, id| d.send(&shape::text(id, spec)?))
    }

    pub fn update_text(&mut self, id: WidgetId, spec: &TextSpec<'_>) -> Result<(), DriverError> {
        self.send(&shape::text(id, spec)?)
    }

    /// Draw an `HH:MM:SS` label
    pub fn draw_time(&mut self, style: &TextStyle, time: Clock) -> Result<WidgetId, DriverError> {
        let text = shape::format_time(time.hour, time.minute, time.second);
        self.draw_text(&style.with_text(&text))
    }

    pub fn update_time(
        &mut self,
        id: WidgetId,
        style: &TextStyle,
        time: Clock,
    ) -> Result<(), DriverError> {
        let text = shape::format_time(time.hour, time.minute, time.second);
        self.update_text(id, &style.with_text(&text))
    }

    /// Draw a `MM月DD日 周X` label
    pub fn draw_date(
        &mut self,
        style: &TextStyle,
        date: CalendarDate,
    ) -> Result<WidgetId, DriverError> {
        let text = shape::format_date(date.month, date.day, date.weekday);
        self.draw_text(&style.with_text(&text))
    }

    pub fn update_date(
        &mut self,
        id: WidgetId,
        style: &TextStyle,
        date: CalendarDate,
    ) -> Result<(), DriverError> {
        let text = shape::format_date(date.month, date.day, date.weekday);
        self.update_text(id, &style.with_text(&text))
    }
}
