//! Command codes and fixed command lengths
//!
//! Codes 0x02..=0x20 belong to the shape profile, 0x21 is the panel-widget
//! record. Lengths are total frame lengths including the 4-byte header.

// Command codes: drawing primitives
pub const DRAW_PIXEL: u8 = 0x02;
pub const DRAW_LINE: u8 = 0x03;
pub const DRAW_RECT: u8 = 0x04;
pub const DRAW_CIRCLE: u8 = 0x06;
pub const DRAW_TRIANGLE: u8 = 0x07;
pub const DRAW_ICON: u8 = 0x08;
pub const DRAW_ICON_EXTERNAL: u8 = 0x09;
pub const DRAW_GIF: u8 = 0x1F;
pub const DRAW_GIF_EXTERNAL: u8 = 0x20;
pub const DRAW_TEXT: u8 = 0x18;

// Command codes: value widgets
pub const DRAW_BAR: u8 = 0x0A;
pub const SET_BAR_VALUE: u8 = 0x0B;
pub const DRAW_SLIDER: u8 = 0x0C;
pub const SET_SLIDER_VALUE: u8 = 0x0D;
pub const DRAW_COMPASS: u8 = 0x0E;
pub const SET_COMPASS_VALUE: u8 = 0x0F;
pub const DRAW_LINE_METER: u8 = 0x10;
pub const SET_LINE_METER_VALUE: u8 = 0x11;
pub const DRAW_GAUGE: u8 = 0x12;
pub const SET_GAUGE_VALUE: u8 = 0x13;

// Command codes: charts
pub const DRAW_CHART: u8 = 0x14;
pub const SET_CHART_AXIS_TEXT: u8 = 0x15;
pub const DRAW_SERIES: u8 = 0x16;
pub const SET_SERIES_DATA: u8 = 0x17;

// Command codes: screen and object management
pub const SET_BACKGROUND_COLOR: u8 = 0x19;
pub const SET_BACKGROUND_IMAGE: u8 = 0x1A;
pub const DELETE_OBJECT: u8 = 0x1B;
pub const SET_TOP_OBJECT: u8 = 0x1C;
pub const CLEAR_SCREEN: u8 = 0x1D;
pub const SET_OBJECT_ANGLE: u8 = 0x1E;

// Command code: panel-widget profile
pub const PANEL_WIDGET: u8 = 0x21;

// Fixed command lengths
pub const LEN_CLEAR_SCREEN: usize = 0x04;
pub const LEN_DELETE_OBJECT: usize = 0x06;
pub const LEN_SET_TOP_OBJECT: usize = 0x06;
pub const LEN_SET_VALUE: usize = 0x07;
pub const LEN_SET_BACKGROUND_COLOR: usize = 0x07;
pub const LEN_SET_OBJECT_ANGLE: usize = 0x08;
pub const LEN_DRAW_CHART: usize = 0x09;
pub const LEN_DRAW_SERIES: usize = 0x09;
pub const LEN_SERIES_POINT: usize = 0x0A;
pub const LEN_DRAW_COMPASS: usize = 0x0B;
pub const LEN_DRAW_ICON: usize = 0x0D;
pub const LEN_DRAW_BAR: usize = 0x10;
pub const LEN_DRAW_PIXEL: usize = 0x11;
pub const LEN_DRAW_LINE: usize = 0x11;
pub const LEN_DRAW_CIRCLE: usize = 0x13;
pub const LEN_DRAW_DIAL: usize = 0x15;
pub const LEN_DRAW_RECT: usize = 0x16;
pub const LEN_DRAW_TRIANGLE: usize = 0x19;

// Fixed prefix lengths of variable-length commands
pub const PREFIX_TEXT: usize = 13;
pub const PREFIX_EXTERNAL_IMAGE: usize = 11;
pub const PREFIX_BACKGROUND_IMAGE: usize = 5;
pub const PREFIX_AXIS_TEXT: usize = 6;
pub const PREFIX_SERIES_DATA: usize = 8;
