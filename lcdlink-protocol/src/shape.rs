//! Shape profile field layouts
//!
//! One command code per widget type, colors as three bytes. Every stateful
//! widget puts its id at offset 4; the rest of the layout is described by
//! a [`Layout`] (code + fixed length) and a field struct implementing
//! [`Fields`]. Create and update send the same frame: update simply
//! reuses an existing id.
//!
//! Variable-length commands (text, file paths, series data) have their own
//! builders below.

use core::fmt::Write;

use heapless::String;

use crate::color::Rgb888;
use crate::frame::{Command, CommandError, MAX_COMMAND_LEN};
use crate::opcode;
use crate::widget::{WidgetId, WidgetKind};

/// Screen width in pixels
pub const SCREEN_WIDTH: i16 = 320;

/// Screen height in pixels
pub const SCREEN_HEIGHT: i16 = 240;

/// Longest text payload that still fits a text frame
pub const MAX_TEXT_LEN: usize = MAX_COMMAND_LEN - opcode::PREFIX_TEXT;

/// Longest file path that still fits an external image frame
pub const MAX_PATH_LEN: usize = MAX_COMMAND_LEN - opcode::PREFIX_EXTERNAL_IMAGE;

/// Most points a single series-data frame can carry
pub const MAX_SERIES_POINTS: usize = (MAX_COMMAND_LEN - opcode::PREFIX_SERIES_DATA) / 2;

/// Default scale factor for icons and gifs
pub const DEFAULT_IMAGE_SIZE: u16 = 255;

/// Fixed code and length of a widget command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    /// Command code
    pub code: u8,
    /// Total frame length
    pub len: usize,
}

impl Layout {
    const fn new(code: u8, len: usize) -> Self {
        Self { code, len }
    }
}

pub const LINE: Layout = Layout::new(opcode::DRAW_LINE, opcode::LEN_DRAW_LINE);
pub const RECT: Layout = Layout::new(opcode::DRAW_RECT, opcode::LEN_DRAW_RECT);
pub const CIRCLE: Layout = Layout::new(opcode::DRAW_CIRCLE, opcode::LEN_DRAW_CIRCLE);
pub const TRIANGLE: Layout = Layout::new(opcode::DRAW_TRIANGLE, opcode::LEN_DRAW_TRIANGLE);
pub const ICON: Layout = Layout::new(opcode::DRAW_ICON, opcode::LEN_DRAW_ICON);
pub const GIF: Layout = Layout::new(opcode::DRAW_GIF, opcode::LEN_DRAW_ICON);
pub const BAR: Layout = Layout::new(opcode::DRAW_BAR, opcode::LEN_DRAW_BAR);
pub const SLIDER: Layout = Layout::new(opcode::DRAW_SLIDER, opcode::LEN_DRAW_BAR);
pub const COMPASS: Layout = Layout::new(opcode::DRAW_COMPASS, opcode::LEN_DRAW_COMPASS);
pub const LINE_METER: Layout = Layout::new(opcode::DRAW_LINE_METER, opcode::LEN_DRAW_DIAL);
pub const GAUGE: Layout = Layout::new(opcode::DRAW_GAUGE, opcode::LEN_DRAW_DIAL);
pub const CHART: Layout = Layout::new(opcode::DRAW_CHART, opcode::LEN_DRAW_CHART);
pub const SERIES: Layout = Layout::new(opcode::DRAW_SERIES, opcode::LEN_DRAW_SERIES);

/// Field layout of a fixed-length widget command
pub trait Fields {
    /// Write every field after the id byte
    fn write(&self, cmd: &mut Command) -> Result<(), CommandError>;
}

/// Build a create/update frame for a fixed-length widget
pub fn object(layout: Layout, id: WidgetId, fields: &impl Fields) -> Result<Command, CommandError> {
    let mut cmd = Command::new(layout.code, layout.len)?;
    cmd.put_u8(4, id.get())?;
    fields.write(&mut cmd)?;
    Ok(cmd)
}

/// Border of a closed shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Outline {
    pub width: u8,
    pub color: Rgb888,
}

fn put_outline_and_fill(
    cmd: &mut Command,
    outline: Outline,
    fill: Option<Rgb888>,
) -> Result<(), CommandError> {
    cmd.put_u8(5, outline.width)?;
    cmd.put_rgb888(6, outline.color)?;
    cmd.put_u8(9, fill.is_some() as u8)?;
    cmd.put_rgb888(10, fill.unwrap_or_default())
}

/// Straight line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineSpec {
    pub x0: i16,
    pub y0: i16,
    pub x1: i16,
    pub y1: i16,
    pub width: u8,
    pub color: Rgb888,
}

impl Fields for LineSpec {
    fn write(&self, cmd: &mut Command) -> Result<(), CommandError> {
        cmd.put_u8(5, self.width)?;
        cmd.put_rgb888(6, self.color)?;
        cmd.put_i16(9, self.x0)?;
        cmd.put_i16(11, self.y0)?;
        cmd.put_i16(13, self.x1)?;
        cmd.put_i16(15, self.y1)
    }
}

/// Rectangle, optionally filled and rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RectSpec {
    pub x: i16,
    pub y: i16,
    pub w: i16,
    pub h: i16,
    pub border: Outline,
    pub fill: Option<Rgb888>,
    /// Corner radius
    pub rounded: u8,
}

impl Fields for RectSpec {
    fn write(&self, cmd: &mut Command) -> Result<(), CommandError> {
        put_outline_and_fill(cmd, self.border, self.fill)?;
        cmd.put_u8(13, self.rounded)?;
        cmd.put_i16(14, self.x)?;
        cmd.put_i16(16, self.y)?;
        cmd.put_i16(18, self.w)?;
        cmd.put_i16(20, self.h)
    }
}

/// Circle around a center point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CircleSpec {
    pub x: i16,
    pub y: i16,
    pub r: i16,
    pub border: Outline,
    pub fill: Option<Rgb888>,
}

impl Fields for CircleSpec {
    fn write(&self, cmd: &mut Command) -> Result<(), CommandError> {
        put_outline_and_fill(cmd, self.border, self.fill)?;
        cmd.put_i16(13, self.r)?;
        cmd.put_i16(15, self.x)?;
        cmd.put_i16(17, self.y)
    }
}

/// Triangle from three corner points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriangleSpec {
    pub points: [(i16, i16); 3],
    pub border: Outline,
    pub fill: Option<Rgb888>,
}

impl Fields for TriangleSpec {
    fn write(&self, cmd: &mut Command) -> Result<(), CommandError> {
        put_outline_and_fill(cmd, self.border, self.fill)?;
        for (i, &(x, y)) in self.points.iter().enumerate() {
            cmd.put_i16(13 + i * 4, x)?;
            cmd.put_i16(15 + i * 4, y)?;
        }
        Ok(())
    }
}

/// Built-in icon or gif
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImageSpec {
    pub x: i16,
    pub y: i16,
    /// Index into the controller's built-in image table
    pub number: u16,
    /// Scale factor, 255 = native size
    pub size: u16,
}

impl Fields for ImageSpec {
    fn write(&self, cmd: &mut Command) -> Result<(), CommandError> {
        cmd.put_u16(5, self.number)?;
        cmd.put_u16(7, self.size)?;
        cmd.put_i16(9, self.x)?;
        cmd.put_i16(11, self.y)
    }
}

/// Progress bar or slider track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BarSpec {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
    pub color: Rgb888,
}

impl Fields for BarSpec {
    fn write(&self, cmd: &mut Command) -> Result<(), CommandError> {
        cmd.put_rgb888(5, self.color)?;
        cmd.put_u16(8, self.x)?;
        cmd.put_u16(10, self.y)?;
        cmd.put_u16(12, self.w)?;
        cmd.put_u16(14, self.h)
    }
}

/// Compass rose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompassSpec {
    pub x: u16,
    pub y: u16,
    pub diameter: u16,
}

impl Fields for CompassSpec {
    fn write(&self, cmd: &mut Command) -> Result<(), CommandError> {
        cmd.put_u16(5, self.diameter)?;
        cmd.put_u16(7, self.x)?;
        cmd.put_u16(9, self.y)
    }
}

/// Gauge dial or linear meter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DialSpec {
    pub x: u16,
    pub y: u16,
    /// Diameter for gauges, length for line meters
    pub size: u16,
    pub start: u16,
    pub end: u16,
    pub pointer: Rgb888,
    pub background: Rgb888,
}

impl Fields for DialSpec {
    fn write(&self, cmd: &mut Command) -> Result<(), CommandError> {
        cmd.put_u16(5, self.size)?;
        cmd.put_u16(7, self.start)?;
        cmd.put_u16(9, self.end)?;
        cmd.put_rgb888(11, self.pointer)?;
        cmd.put_rgb888(14, self.background)?;
        cmd.put_u16(17, self.x)?;
        cmd.put_u16(19, self.y)
    }
}

/// Chart rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChartType {
    Line = 1,
    Bar = 2,
}

/// Chart frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChartSpec {
    pub chart_type: ChartType,
    pub background: Rgb888,
}

impl Fields for ChartSpec {
    fn write(&self, cmd: &mut Command) -> Result<(), CommandError> {
        cmd.put_u8(5, self.chart_type as u8)?;
        cmd.put_rgb888(6, self.background)
    }
}

/// Data series inside a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SeriesSpec {
    pub chart: WidgetId,
    pub color: Rgb888,
}

impl Fields for SeriesSpec {
    fn write(&self, cmd: &mut Command) -> Result<(), CommandError> {
        cmd.put_u8(5, self.chart.get())?;
        cmd.put_rgb888(6, self.color)
    }
}

/// Text glyph size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// 24 px
    #[default]
    Large = 0,
    /// 12 px
    Small = 1,
}

/// Text label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpec<'a> {
    pub x: u16,
    pub y: u16,
    pub font: FontSize,
    pub color: Rgb888,
    /// Copied byte-for-byte, truncated to [`MAX_TEXT_LEN`]
    pub text: &'a str,
}

/// Chart axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X = 0,
    Y = 1,
}

/// Icon or gif; both families share one layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageKind {
    Icon,
    Gif,
}

impl ImageKind {
    /// Layout of the built-in variant
    pub const fn builtin(self) -> Layout {
        match self {
            ImageKind::Icon => ICON,
            ImageKind::Gif => GIF,
        }
    }

    /// Command code of the external (file path) variant
    pub const fn external_code(self) -> u8 {
        match self {
            ImageKind::Icon => opcode::DRAW_ICON_EXTERNAL,
            ImageKind::Gif => opcode::DRAW_GIF_EXTERNAL,
        }
    }

    /// Registry the image ids come from
    pub const fn widget_kind(self) -> WidgetKind {
        match self {
            ImageKind::Icon => WidgetKind::Icon,
            ImageKind::Gif => WidgetKind::Gif,
        }
    }
}

/// Longest prefix of `text` that fits `max` bytes without splitting a character
pub fn clip(text: &str, max: usize) -> &[u8] {
    if text.len() <= max {
        return text.as_bytes();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text.as_bytes()[..end]
}

fn with_tail(code: u8, prefix: usize, tail: &[u8]) -> Result<Command, CommandError> {
    let mut cmd = Command::new(code, prefix + tail.len())?;
    cmd.put_bytes(prefix, tail)?;
    Ok(cmd)
}

/// Text create/update frame
pub fn text(id: WidgetId, spec: &TextSpec<'_>) -> Result<Command, CommandError> {
    let body = clip(spec.text, MAX_TEXT_LEN);
    let mut cmd = with_tail(opcode::DRAW_TEXT, opcode::PREFIX_TEXT, body)?;
    cmd.put_u8(4, id.get())?;
    cmd.put_u8(5, spec.font as u8)?;
    cmd.put_rgb888(6, spec.color)?;
    cmd.put_u16(9, spec.x)?;
    cmd.put_u16(11, spec.y)?;
    Ok(cmd)
}

/// Icon or gif loaded from a file path on external storage
pub fn external_image(
    kind: ImageKind,
    id: WidgetId,
    x: i16,
    y: i16,
    zoom: u16,
    path: &str,
) -> Result<Command, CommandError> {
    let body = clip(path, MAX_PATH_LEN);
    let mut cmd = with_tail(kind.external_code(), opcode::PREFIX_EXTERNAL_IMAGE, body)?;
    cmd.put_u8(4, id.get())?;
    cmd.put_u16(5, zoom)?;
    cmd.put_i16(7, x)?;
    cmd.put_i16(9, y)?;
    Ok(cmd)
}

/// Single pixel; coordinates past the screen edge are clamped to it
pub fn pixel(x: i16, y: i16, color: Rgb888) -> Result<Command, CommandError> {
    let mut cmd = Command::new(opcode::DRAW_PIXEL, opcode::LEN_DRAW_PIXEL)?;
    cmd.put_rgb888(4, color)?;
    cmd.put_i16(7, x.min(SCREEN_WIDTH - 1))?;
    cmd.put_i16(9, y.min(SCREEN_HEIGHT - 1))?;
    Ok(cmd)
}

/// Full-screen clear
pub fn clear_screen() -> Result<Command, CommandError> {
    Command::new(opcode::CLEAR_SCREEN, opcode::LEN_CLEAR_SCREEN)
}

/// Solid background color
pub fn background_color(color: Rgb888) -> Result<Command, CommandError> {
    let mut cmd = Command::new(opcode::SET_BACKGROUND_COLOR, opcode::LEN_SET_BACKGROUND_COLOR)?;
    cmd.put_rgb888(4, color)?;
    Ok(cmd)
}

/// Background image from built-in (`location` 0) or external storage
pub fn background_image(location: u8, path: &str) -> Result<Command, CommandError> {
    let body = clip(path, MAX_COMMAND_LEN - opcode::PREFIX_BACKGROUND_IMAGE);
    let mut cmd = with_tail(opcode::SET_BACKGROUND_IMAGE, opcode::PREFIX_BACKGROUND_IMAGE, body)?;
    cmd.put_u8(4, location)?;
    Ok(cmd)
}

/// Set the value shown by a bar, slider, gauge, compass or line meter
pub fn set_value(value_code: u8, id: WidgetId, value: u16) -> Result<Command, CommandError> {
    let mut cmd = Command::new(value_code, opcode::LEN_SET_VALUE)?;
    cmd.put_u8(4, id.get())?;
    cmd.put_u16(5, value)?;
    Ok(cmd)
}

fn addressed(code: u8, len: usize, type_code: u8, id: WidgetId) -> Result<Command, CommandError> {
    let mut cmd = Command::new(code, len)?;
    cmd.put_u8(4, type_code)?;
    cmd.put_u8(5, id.get())?;
    Ok(cmd)
}

/// Remove an object; `type_code` is the object's create command code
pub fn delete(type_code: u8, id: WidgetId) -> Result<Command, CommandError> {
    addressed(opcode::DELETE_OBJECT, opcode::LEN_DELETE_OBJECT, type_code, id)
}

/// Raise an object above its siblings
pub fn set_top(type_code: u8, id: WidgetId) -> Result<Command, CommandError> {
    addressed(opcode::SET_TOP_OBJECT, opcode::LEN_SET_TOP_OBJECT, type_code, id)
}

/// Rotate an object
pub fn set_angle(type_code: u8, id: WidgetId, angle: i16) -> Result<Command, CommandError> {
    let mut cmd = addressed(opcode::SET_OBJECT_ANGLE, opcode::LEN_SET_OBJECT_ANGLE, type_code, id)?;
    cmd.put_i16(6, angle)?;
    Ok(cmd)
}

/// Axis caption of a chart
pub fn axis_text(chart: WidgetId, axis: Axis, text: &str) -> Result<Command, CommandError> {
    let body = clip(text, MAX_COMMAND_LEN - opcode::PREFIX_AXIS_TEXT);
    let mut cmd = with_tail(opcode::SET_CHART_AXIS_TEXT, opcode::PREFIX_AXIS_TEXT, body)?;
    cmd.put_u8(4, chart.get())?;
    cmd.put_u8(5, axis as u8)?;
    Ok(cmd)
}

/// Replace the points of a series
pub fn series_data(chart: WidgetId, series: WidgetId, points: &[u16]) -> Result<Command, CommandError> {
    if points.len() > MAX_SERIES_POINTS {
        return Err(CommandError::LengthTooLarge);
    }
    let mut cmd = Command::new(
        opcode::SET_SERIES_DATA,
        opcode::PREFIX_SERIES_DATA + points.len() * 2,
    )?;
    cmd.put_u8(4, chart.get())?;
    cmd.put_u8(5, series.get())?;
    for (i, &point) in points.iter().enumerate() {
        cmd.put_u16(opcode::PREFIX_SERIES_DATA + i * 2, point)?;
    }
    Ok(cmd)
}

/// Change a single point of a series
pub fn series_point(
    chart: WidgetId,
    series: WidgetId,
    index: u8,
    value: u16,
) -> Result<Command, CommandError> {
    let mut cmd = Command::new(opcode::SET_SERIES_DATA, opcode::LEN_SERIES_POINT)?;
    cmd.put_u8(4, chart.get())?;
    cmd.put_u8(5, series.get())?;
    cmd.put_u8(6, 1)?;
    cmd.put_u8(7, index)?;
    cmd.put_u16(8, value)?;
    Ok(cmd)
}

/// `HH:MM:SS`, zero padded
pub fn format_time(hour: u8, minute: u8, second: u8) -> String<11> {
    let mut out = String::new();
    // Three digits per field at most, so this cannot overflow
    let _ = write!(out, "{:02}:{:02}:{:02}", hour, minute, second);
    out
}

/// `MM月DD日 周X`, with weekday 1..=7 mapped to 一..日
///
/// An out-of-range weekday leaves the day name off.
pub fn format_date(month: u8, day: u8, weekday: u8) -> String<24> {
    const WEEKDAYS: [&str; 7] = ["一", "二", "三", "四", "五", "六", "日"];

    let mut out = String::new();
    let _ = write!(out, "{:02}月{:02}日 周", month, day);
    if let Some(name) = weekday
        .checked_sub(1)
        .and_then(|i| WEEKDAYS.get(i as usize))
    {
        let _ = out.push_str(name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameParser;

    fn id(raw: u8) -> WidgetId {
        WidgetId::new(raw).unwrap()
    }

    #[test]
    fn test_rect_layout() {
        let spec = RectSpec {
            x: 10,
            y: 20,
            w: 100,
            h: 50,
            border: Outline { width: 2, color: Rgb888::RED },
            fill: Some(Rgb888::BLUE),
            rounded: 4,
        };
        let cmd = object(RECT, id(1), &spec).unwrap();
        let bytes = cmd.as_bytes();

        assert_eq!(bytes.len(), 22);
        assert_eq!(&bytes[..4], &[0x55, 0xAA, 0x13, 0x04]);
        assert_eq!(bytes[4], 1);
        assert_eq!(bytes[5], 2);
        assert_eq!(&bytes[6..9], &[0xFF, 0x00, 0x00]);
        assert_eq!(bytes[9], 1);
        assert_eq!(&bytes[10..13], &[0x00, 0x00, 0xFF]);
        assert_eq!(bytes[13], 4);
        assert_eq!(&bytes[14..22], &[0, 10, 0, 20, 0, 100, 0, 50]);
    }

    #[test]
    fn test_unfilled_shape_clears_fill_fields() {
        let spec = CircleSpec {
            x: 160,
            y: 120,
            r: 30,
            border: Outline { width: 1, color: Rgb888::WHITE },
            fill: None,
        };
        let cmd = object(CIRCLE, id(3), &spec).unwrap();
        let frame = FrameParser::new().feed_bytes(cmd.as_bytes()).unwrap().unwrap();

        assert_eq!(frame.len(), 19);
        assert_eq!(frame.u8_at(9), Some(0));
        assert_eq!(frame.rgb888_at(10), Some(Rgb888::BLACK));
        assert_eq!(frame.i16_at(13), Some(30));
        assert_eq!(frame.i16_at(15), Some(160));
        assert_eq!(frame.i16_at(17), Some(120));
    }

    #[test]
    fn test_triangle_points() {
        let spec = TriangleSpec {
            points: [(0, 0), (-5, 7), (300, 200)],
            border: Outline::default(),
            fill: None,
        };
        let cmd = object(TRIANGLE, id(1), &spec).unwrap();
        let frame = FrameParser::new().feed_bytes(cmd.as_bytes()).unwrap().unwrap();

        assert_eq!(frame.len(), 25);
        assert_eq!(frame.i16_at(17), Some(-5));
        assert_eq!(frame.i16_at(19), Some(7));
        assert_eq!(frame.i16_at(21), Some(300));
        assert_eq!(frame.i16_at(23), Some(200));
    }

    #[test]
    fn test_dial_layout_shared_by_gauge_and_meter() {
        let spec = DialSpec {
            x: 1,
            y: 2,
            size: 120,
            start: 0,
            end: 100,
            pointer: Rgb888::RED,
            background: Rgb888::WHITE,
        };
        let gauge = object(GAUGE, id(1), &spec).unwrap();
        let meter = object(LINE_METER, id(1), &spec).unwrap();

        assert_eq!(gauge.code(), 0x12);
        assert_eq!(meter.code(), 0x10);
        assert_eq!(gauge.payload(), meter.payload());
        assert_eq!(gauge.len(), 21);
    }

    #[test]
    fn test_text_is_copied_verbatim() {
        let spec = TextSpec {
            x: 5,
            y: 6,
            font: FontSize::Small,
            color: Rgb888::GREEN,
            text: "hello",
        };
        let cmd = text(id(2), &spec).unwrap();

        assert_eq!(cmd.len(), 18);
        assert_eq!(cmd.as_bytes()[2], 15);
        assert_eq!(cmd.as_bytes()[5], 1);
        assert_eq!(&cmd.as_bytes()[13..], b"hello");
    }

    #[test]
    fn test_long_text_is_truncated_to_frame() {
        let long = [b'x'; 300];
        let spec = TextSpec {
            x: 0,
            y: 0,
            font: FontSize::Large,
            color: Rgb888::WHITE,
            text: core::str::from_utf8(&long).unwrap(),
        };
        let cmd = text(id(1), &spec).unwrap();
        assert_eq!(cmd.len(), 255);
        assert_eq!(cmd.as_bytes()[2], 252);
    }

    #[test]
    fn test_clip_respects_char_boundaries() {
        // "月" is three bytes
        assert_eq!(clip("ab月", 4), b"ab");
        assert_eq!(clip("ab月", 5), "ab月".as_bytes());
        assert_eq!(clip("abc", 10), b"abc");
    }

    #[test]
    fn test_external_icon() {
        let cmd = external_image(ImageKind::Icon, id(4), 10, 20, 128, "/a.png").unwrap();
        let bytes = cmd.as_bytes();
        assert_eq!(bytes[3], 0x09);
        assert_eq!(bytes.len(), 11 + 6);
        assert_eq!(&bytes[5..11], &[0, 128, 0, 10, 0, 20]);
        assert_eq!(&bytes[11..], b"/a.png");
    }

    #[test]
    fn test_pixel_is_clamped() {
        let cmd = pixel(400, 240, Rgb888::WHITE).unwrap();
        let bytes = cmd.as_bytes();
        assert_eq!(bytes.len(), 17);
        assert_eq!(&bytes[7..11], &[0x01, 0x3F, 0x00, 0xEF]);
    }

    #[test]
    fn test_object_management_frames() {
        assert_eq!(delete(0x03, id(9)).unwrap().as_bytes(), &[0x55, 0xAA, 3, 0x1B, 0x03, 9]);
        assert_eq!(set_top(0x10, id(2)).unwrap().as_bytes(), &[0x55, 0xAA, 3, 0x1C, 0x10, 2]);
        assert_eq!(
            set_angle(0x08, id(1), -90).unwrap().as_bytes(),
            &[0x55, 0xAA, 5, 0x1E, 0x08, 1, 0xFF, 0xA6]
        );
        assert_eq!(clear_screen().unwrap().as_bytes(), &[0x55, 0xAA, 1, 0x1D]);
    }

    #[test]
    fn test_series_frames() {
        let data = series_data(id(1), id(2), &[1, 0x0203]).unwrap();
        assert_eq!(&data.as_bytes()[4..], &[1, 2, 0, 0, 0, 1, 2, 3]);

        let point = series_point(id(1), id(2), 5, 300).unwrap();
        assert_eq!(&point.as_bytes()[4..], &[1, 2, 1, 5, 0x01, 0x2C]);

        let too_many = [0u16; MAX_SERIES_POINTS + 1];
        assert_eq!(series_data(id(1), id(1), &too_many), Err(CommandError::LengthTooLarge));
    }

    #[test]
    fn test_format_time_and_date() {
        assert_eq!(format_time(7, 5, 0).as_str(), "07:05:00");
        assert_eq!(format_time(23, 59, 59).as_str(), "23:59:59");
        assert_eq!(format_time(100, 5, 0).as_str(), "100:05:00");
        assert_eq!(format_time(255, 255, 255).as_str(), "255:255:255");
        assert_eq!(format_date(3, 9, 1).as_str(), "03月09日 周一");
        assert_eq!(format_date(12, 25, 7).as_str(), "12月25日 周日");
        assert_eq!(format_date(1, 1, 0).as_str(), "01月01日 周");
    }
}
