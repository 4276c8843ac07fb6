//! Panel-widget profile
//!
//! Every panel command shares code 0x21. Offset 4 is the widget id, offset
//! 5 the sub-operation and offset 6 the panel type. Colors are RGB565.
//! Create and update use the same record; update reuses a live id.

use crate::color::Rgb565;
use crate::frame::{Command, CommandError, MAX_COMMAND_LEN};
use crate::opcode::PANEL_WIDGET;
use crate::widget::{WidgetId, WidgetKind};

/// Sub-operation codes at offset 5
pub mod op {
    pub const INIT: u8 = 0x00;
    pub const CREATE: u8 = 0x01;
    pub const SET_VALUE: u8 = 0x02;
    pub const SET_COLOR: u8 = 0x03;
    pub const SET_LABEL: u8 = 0x04;
    pub const DELETE: u8 = 0x05;
}

pub const LEN_INIT: usize = 6;
pub const LEN_CREATE: usize = 23;
pub const LEN_SET_VALUE: usize = 9;
pub const LEN_SET_COLOR: usize = 11;
pub const LEN_DELETE: usize = 7;
pub const PREFIX_LABEL: usize = 8;

/// Longest label that fits a set-label frame
pub const MAX_LABEL_LEN: usize = MAX_COMMAND_LEN - PREFIX_LABEL;

/// Panel widget type at offset 6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelType {
    Slider = 0x01,
    Bar = 0x02,
    Arc = 0x03,
    Gauge = 0x04,
    Compass = 0x05,
    Meter = 0x06,
    Chart = 0x07,
    Station = 0x08,
}

impl PanelType {
    /// Panel type backing a widget kind, if the profile has one
    pub const fn from_kind(kind: WidgetKind) -> Option<Self> {
        match kind {
            WidgetKind::Slider => Some(PanelType::Slider),
            WidgetKind::Bar => Some(PanelType::Bar),
            WidgetKind::Arc => Some(PanelType::Arc),
            WidgetKind::Gauge => Some(PanelType::Gauge),
            WidgetKind::Compass => Some(PanelType::Compass),
            WidgetKind::LineMeter => Some(PanelType::Meter),
            WidgetKind::Chart => Some(PanelType::Chart),
            WidgetKind::Station => Some(PanelType::Station),
            _ => None,
        }
    }

    /// Registry the panel's ids come from
    pub const fn kind(self) -> WidgetKind {
        match self {
            PanelType::Slider => WidgetKind::Slider,
            PanelType::Bar => WidgetKind::Bar,
            PanelType::Arc => WidgetKind::Arc,
            PanelType::Gauge => WidgetKind::Gauge,
            PanelType::Compass => WidgetKind::Compass,
            PanelType::Meter => WidgetKind::LineMeter,
            PanelType::Chart => WidgetKind::Chart,
            PanelType::Station => WidgetKind::Station,
        }
    }
}

/// Generic panel widget record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelRecord {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
    pub foreground: Rgb565,
    pub background: Rgb565,
    pub min: u16,
    pub max: u16,
}

/// Label slot of a panel widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LabelSlot {
    /// Station title, chart x axis
    Primary = 0,
    /// Station unit, chart y axis
    Secondary = 1,
}

fn header(
    sub_op: u8,
    len: usize,
    panel: PanelType,
    id: WidgetId,
) -> Result<Command, CommandError> {
    let mut cmd = Command::new(PANEL_WIDGET, len)?;
    cmd.put_u8(4, id.get())?;
    cmd.put_u8(5, sub_op)?;
    cmd.put_u8(6, panel as u8)?;
    Ok(cmd)
}

/// Switch the controller into panel mode
pub fn init() -> Result<Command, CommandError> {
    let mut cmd = Command::new(PANEL_WIDGET, LEN_INIT)?;
    cmd.put_u8(5, op::INIT)?;
    Ok(cmd)
}

/// Create or update a panel widget
pub fn create(panel: PanelType, id: WidgetId, record: &PanelRecord) -> Result<Command, CommandError> {
    let mut cmd = header(op::CREATE, LEN_CREATE, panel, id)?;
    cmd.put_u16(7, record.x)?;
    cmd.put_u16(9, record.y)?;
    cmd.put_u16(11, record.w)?;
    cmd.put_u16(13, record.h)?;
    cmd.put_rgb565(15, record.foreground)?;
    cmd.put_rgb565(17, record.background)?;
    cmd.put_u16(19, record.min)?;
    cmd.put_u16(21, record.max)?;
    Ok(cmd)
}

/// Set the value shown by a panel widget
pub fn set_value(panel: PanelType, id: WidgetId, value: u16) -> Result<Command, CommandError> {
    let mut cmd = header(op::SET_VALUE, LEN_SET_VALUE, panel, id)?;
    cmd.put_u16(7, value)?;
    Ok(cmd)
}

/// Recolor a panel widget
pub fn set_color(
    panel: PanelType,
    id: WidgetId,
    foreground: Rgb565,
    background: Rgb565,
) -> Result<Command, CommandError> {
    let mut cmd = header(op::SET_COLOR, LEN_SET_COLOR, panel, id)?;
    cmd.put_rgb565(7, foreground)?;
    cmd.put_rgb565(9, background)?;
    Ok(cmd)
}

/// Set one of a panel widget's text labels; long labels are truncated
pub fn set_label(
    panel: PanelType,
    id: WidgetId,
    slot: LabelSlot,
    text: &str,
) -> Result<Command, CommandError> {
    let body = crate::shape::clip(text, MAX_LABEL_LEN);
    let mut cmd = header(op::SET_LABEL, PREFIX_LABEL + body.len(), panel, id)?;
    cmd.put_u8(7, slot as u8)?;
    cmd.put_bytes(PREFIX_LABEL, body)?;
    Ok(cmd)
}

/// Remove a panel widget
pub fn delete(panel: PanelType, id: WidgetId) -> Result<Command, CommandError> {
    header(op::DELETE, LEN_DELETE, panel, id)
}
