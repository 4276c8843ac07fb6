//! Frame encoding and decoding for the display controller protocol.
//!
//! Frame format:
//! - HEADER (2 bytes): 0x55 0xAA
//! - LENGTH (1 byte): total frame length minus 3 (CODE + PAYLOAD)
//! - CODE (1 byte): command code
//! - PAYLOAD (0-251 bytes): command-specific fields, big-endian
//!
//! A [`Command`] is allocated at its final length up front and then filled
//! field by field at absolute offsets, which is how the controller's layout
//! tables are documented.

use heapless::Vec;

use crate::color::{Rgb565, Rgb888};

/// First preamble byte
pub const HEADER_HIGH: u8 = 0x55;

/// Second preamble byte
pub const HEADER_LOW: u8 = 0xAA;

/// Preamble + length + code
pub const HEADER_LEN: usize = 4;

/// Bytes not counted by the LENGTH field (preamble + LENGTH itself)
pub const LENGTH_BIAS: usize = 3;

/// Maximum complete command size (single unsigned-byte length field)
pub const MAX_COMMAND_LEN: usize = 255;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = MAX_COMMAND_LEN - HEADER_LEN;

/// Errors that can occur while building a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Declared length cannot hold the 4-byte header
    LengthTooShort,
    /// Declared length exceeds the 255-byte ceiling
    LengthTooLarge,
    /// Field write runs past the declared length
    PayloadOverflow,
    /// Field write targets the header bytes
    ReservedOffset,
}

/// An owned, framed command buffer
///
/// The header is written on construction; payload bytes start zeroed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    bytes: Vec<u8, MAX_COMMAND_LEN>,
}

impl Command {
    /// Allocate a command of exactly `total_len` bytes and write its header
    pub fn new(code: u8, total_len: usize) -> Result<Self, CommandError> {
        if total_len < HEADER_LEN {
            return Err(CommandError::LengthTooShort);
        }
        if total_len > MAX_COMMAND_LEN {
            return Err(CommandError::LengthTooLarge);
        }

        let mut bytes = Vec::new();
        bytes
            .resize(total_len, 0)
            .map_err(|_| CommandError::LengthTooLarge)?;

        bytes[0] = HEADER_HIGH;
        bytes[1] = HEADER_LOW;
        bytes[2] = (total_len - LENGTH_BIAS) as u8;
        bytes[3] = code;

        Ok(Self { bytes })
    }

    /// Command code
    pub fn code(&self) -> u8 {
        self.bytes[3]
    }

    /// Total frame length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; a command carries at least its header
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The complete frame, ready for a transport
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes after the header
    pub fn payload(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    fn field(&mut self, offset: usize, width: usize) -> Result<&mut [u8], CommandError> {
        if offset < HEADER_LEN {
            return Err(CommandError::ReservedOffset);
        }
        let end = offset
            .checked_add(width)
            .ok_or(CommandError::PayloadOverflow)?;
        if end > self.bytes.len() {
            return Err(CommandError::PayloadOverflow);
        }
        Ok(&mut self.bytes[offset..end])
    }

    /// Write a single byte at `offset`
    pub fn put_u8(&mut self, offset: usize, value: u8) -> Result<(), CommandError> {
        self.field(offset, 1)?[0] = value;
        Ok(())
    }

    /// Write a big-endian 16-bit field at `offset`
    pub fn put_u16(&mut self, offset: usize, value: u16) -> Result<(), CommandError> {
        self.field(offset, 2)?.copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Write a signed 16-bit coordinate (two's complement, big-endian)
    pub fn put_i16(&mut self, offset: usize, value: i16) -> Result<(), CommandError> {
        self.field(offset, 2)?.copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Write a 3-byte color, most significant byte first
    pub fn put_rgb888(&mut self, offset: usize, color: Rgb888) -> Result<(), CommandError> {
        self.field(offset, 3)?.copy_from_slice(&color.to_bytes());
        Ok(())
    }

    /// Write a 2-byte RGB565 color
    pub fn put_rgb565(&mut self, offset: usize, color: Rgb565) -> Result<(), CommandError> {
        self.field(offset, 2)?.copy_from_slice(&color.to_bytes());
        Ok(())
    }

    /// Copy raw bytes starting at `offset`
    pub fn put_bytes(&mut self, offset: usize, data: &[u8]) -> Result<(), CommandError> {
        self.field(offset, data.len())?.copy_from_slice(data);
        Ok(())
    }
}

/// Errors that can occur during frame parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// LENGTH byte is zero or exceeds the frame ceiling
    InvalidLength,
}

/// A parsed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Command code
    pub code: u8,
    /// Payload data (everything after the code byte)
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Total frame length including the header
    pub fn len(&self) -> usize {
        HEADER_LEN + self.payload.len()
    }

    /// Always false; a frame carries at least its header
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Byte at an absolute frame offset
    pub fn u8_at(&self, offset: usize) -> Option<u8> {
        self.slice_at(offset, 1).map(|b| b[0])
    }

    /// Big-endian 16-bit field at an absolute frame offset
    pub fn u16_at(&self, offset: usize) -> Option<u16> {
        self.slice_at(offset, 2).map(|b| u16::from_be_bytes([b[0], b[1]]))
    }

    /// Signed 16-bit field at an absolute frame offset
    pub fn i16_at(&self, offset: usize) -> Option<i16> {
        self.u16_at(offset).map(|v| v as i16)
    }

    /// 3-byte color at an absolute frame offset
    pub fn rgb888_at(&self, offset: usize) -> Option<Rgb888> {
        self.slice_at(offset, 3)
            .map(|b| Rgb888::new(b[0], b[1], b[2]))
    }

    /// RGB565 color at an absolute frame offset
    pub fn rgb565_at(&self, offset: usize) -> Option<Rgb565> {
        self.u16_at(offset).map(Rgb565::from_raw)
    }

    /// Trailing bytes from an absolute frame offset to the end
    pub fn tail_from(&self, offset: usize) -> &[u8] {
        let start = offset.saturating_sub(HEADER_LEN).min(self.payload.len());
        &self.payload[start..]
    }

    fn slice_at(&self, offset: usize, width: usize) -> Option<&[u8]> {
        let start = offset.checked_sub(HEADER_LEN)?;
        self.payload.get(start..start + width)
    }
}

/// State machine for parsing a byte stream of frames
///
/// Used by loopback tooling and tests to decode what the driver emitted.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    buffer: Vec<u8, MAX_PAYLOAD_SIZE>,
    expected_payload: usize,
    code: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Waiting for 0x55
    WaitingForHigh,
    /// Got 0x55, waiting for 0xAA
    WaitingForLow,
    /// Got preamble, waiting for LENGTH
    WaitingForLength,
    /// Got LENGTH, waiting for CODE
    WaitingForCode,
    /// Reading payload bytes
    ReadingPayload,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    /// Create a new frame parser
    pub fn new() -> Self {
        Self {
            state: ParseState::WaitingForHigh,
            buffer: Vec::new(),
            expected_payload: 0,
            code: 0,
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForHigh;
        self.buffer.clear();
        self.expected_payload = 0;
        self.code = 0;
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(frame))` when a complete frame is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` on a bad LENGTH.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            ParseState::WaitingForHigh => {
                if byte == HEADER_HIGH {
                    self.state = ParseState::WaitingForLow;
                }
                Ok(None)
            }
            ParseState::WaitingForLow => {
                self.state = match byte {
                    HEADER_LOW => ParseState::WaitingForLength,
                    HEADER_HIGH => ParseState::WaitingForLow,
                    _ => ParseState::WaitingForHigh,
                };
                Ok(None)
            }
            ParseState::WaitingForLength => {
                let length = byte as usize;
                if length == 0 || length + LENGTH_BIAS > MAX_COMMAND_LEN {
                    self.reset();
                    return Err(FrameError::InvalidLength);
                }
                // LENGTH counts the code byte too
                self.expected_payload = length - 1;
                self.state = ParseState::WaitingForCode;
                Ok(None)
            }
            ParseState::WaitingForCode => {
                self.code = byte;
                self.buffer.clear();
                if self.expected_payload == 0 {
                    return Ok(Some(self.finish()));
                }
                self.state = ParseState::ReadingPayload;
                Ok(None)
            }
            ParseState::ReadingPayload => {
                // Cannot overflow: expected_payload <= MAX_PAYLOAD_SIZE
                let _ = self.buffer.push(byte);
                if self.buffer.len() == self.expected_payload {
                    return Ok(Some(self.finish()));
                }
                Ok(None)
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete frame found, if any.
    /// Remaining bytes after a complete frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }

    fn finish(&mut self) -> Frame {
        let frame = Frame {
            code: self.code,
            payload: self.buffer.clone(),
        };
        self.reset();
        frame
    }
}
