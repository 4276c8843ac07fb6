//! Test doubles for the display driver

use embedded_hal::delay::DelayNs;
use lcdlink_hal::{BusFault, Transport, TransportError};
use lcdlink_protocol::{Frame, FrameParser};
use std::vec::Vec;

use super::Display;
use crate::config::{DriverConfig, Profile};

/// Transport recording every frame it is handed
#[derive(Default)]
pub struct RecordingTransport {
    pub frames: Vec<Vec<u8>>,
    pub began: bool,
    /// Fail `begin` as if nothing answered
    pub absent: bool,
    /// Fail every write
    pub fail_writes: bool,
    /// Fail the write with this index (0-based), counting every attempt
    pub fail_nth: Option<usize>,
    /// Fail this write and every one after it
    pub fail_from: Option<usize>,
    attempts: usize,
    pub ack: Vec<u8>,
}

impl RecordingTransport {
    /// Decode every recorded frame
    pub fn decoded(&self) -> Vec<Frame> {
        self.frames
            .iter()
            .map(|bytes| FrameParser::new().feed_bytes(bytes).unwrap().unwrap())
            .collect()
    }
}

impl Transport for RecordingTransport {
    fn begin(&mut self) -> Result<(), TransportError> {
        if self.absent {
            return Err(TransportError::Unavailable);
        }
        self.began = true;
        Ok(())
    }

    fn write(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        let attempt = self.attempts;
        self.attempts += 1;
        let failing = self.fail_writes
            || self.fail_nth == Some(attempt)
            || self.fail_from.is_some_and(|from| attempt >= from);
        if failing {
            return Err(TransportError::Bus(BusFault::Nack));
        }
        self.frames.push(frame.to_vec());
        Ok(())
    }

    fn read_ack(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        let n = buf.len().min(self.ack.len());
        buf[..n].copy_from_slice(&self.ack[..n]);
        Ok(n)
    }
}

/// Delay recording millisecond waits
#[derive(Default)]
pub struct MockDelay {
    pub pauses_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.pauses_ms.push(ms);
    }
}

pub fn display(profile: Profile) -> Display<RecordingTransport, MockDelay> {
    Display::with_config(
        RecordingTransport::default(),
        MockDelay::default(),
        DriverConfig::for_profile(profile),
    )
}
