//! Serial stream transport
//!
//! Commands go out whole; only a pause after each one is needed. The
//! controller may answer with a few bytes, which are polled for until a
//! deadline rather than blocked on.
//!
//! The deadline is kept by counting sleeps plus
//! [`StreamConfig::poll_cost_us`] per poll; there is no clock to read.
//! Leaving the poll cost at 0 means time spent inside `read_ready` is not
//! counted.

use embedded_hal::delay::DelayNs;
use embedded_io::{Read, ReadReady, Write};
use lcdlink_hal::{StreamConfig, StreamFault, Transport, TransportError};

/// Display controller behind a byte stream
pub struct StreamTransport<S, D> {
    stream: S,
    delay: D,
    config: StreamConfig,
}

impl<S, D> StreamTransport<S, D>
where
    S: Read + ReadReady + Write,
    D: DelayNs,
{
    /// Create a transport with default pacing and ack timeout
    pub fn new(stream: S, delay: D) -> Self {
        Self::with_config(stream, delay, StreamConfig::default())
    }

    /// Create a transport with explicit configuration
    pub fn with_config(stream: S, delay: D, config: StreamConfig) -> Self {
        Self {
            stream,
            delay,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Give back the stream and delay
    pub fn release(self) -> (S, D) {
        (self.stream, self.delay)
    }
}

impl<S, D> Transport for StreamTransport<S, D>
where
    S: Read + ReadReady + Write,
    D: DelayNs,
{
    fn begin(&mut self) -> Result<(), TransportError> {
        // Owning the stream is all the setup there is
        Ok(())
    }

    fn write(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("stream write: {} bytes", frame.len());

        let mut rest = frame;
        while !rest.is_empty() {
            let n = self
                .stream
                .write(rest)
                .map_err(|e| StreamFault::of(&e))?;
            if n == 0 {
                return Err(StreamFault::Disconnected.into());
            }
            rest = &rest[n..];
        }
        self.delay.delay_ms(self.config.pacing_ms);
        Ok(())
    }

    fn read_ack(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        if buf.is_empty() {
            return Ok(0);
        }

        let timeout_us = u64::from(self.config.ack_timeout_ms) * 1000;
        let step_us = u64::from(self.config.poll_interval_us.max(1));
        let poll_cost_us = u64::from(self.config.poll_cost_us);
        let mut waited_us = 0u64;

        loop {
            if self.stream.read_ready().map_err(|e| StreamFault::of(&e))? {
                let n = self.stream.read(buf).map_err(|e| StreamFault::of(&e))?;
                return Ok(n);
            }
            waited_us += poll_cost_us;
            if waited_us >= timeout_us {
                #[cfg(feature = "defmt")]
                defmt::debug!("no ack after {} ms", self.config.ack_timeout_ms);
                return Ok(0);
            }
            // Never sleeps past the deadline
            let step = step_us.min(timeout_us - waited_us);
            self.delay.delay_us(step as u32);
            waited_us += step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io::{ErrorKind, ErrorType};
    use std::vec::Vec;

    /// Mock serial port
    #[derive(Default)]
    struct MockStream {
        written: Vec<Vec<u8>>,
        /// Bytes the peer will send
        incoming: Vec<u8>,
        /// Polls before `incoming` becomes readable
        ready_after: usize,
        polls: usize,
        /// Max bytes accepted per write call, 0 = unlimited
        write_limit: usize,
    }

    impl ErrorType for MockStream {
        type Error = ErrorKind;
    }

    impl Write for MockStream {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            let n = if self.write_limit == 0 {
                buf.len()
            } else {
                buf.len().min(self.write_limit)
            };
            self.written.push(buf[..n].to_vec());
            Ok(n)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl ReadReady for MockStream {
        fn read_ready(&mut self) -> Result<bool, Self::Error> {
            self.polls += 1;
            Ok(!self.incoming.is_empty() && self.polls > self.ready_after)
        }
    }

    impl Read for MockStream {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            let n = buf.len().min(self.incoming.len());
            buf[..n].copy_from_slice(&self.incoming[..n]);
            self.incoming.drain(..n);
            Ok(n)
        }
    }

    /// Mock delay accumulating elapsed time
    #[derive(Default)]
    struct MockDelay {
        elapsed_us: u64,
        pauses_ms: Vec<u32>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.elapsed_us += u64::from(ns) / 1000;
        }

        fn delay_us(&mut self, us: u32) {
            self.elapsed_us += u64::from(us);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.pauses_ms.push(ms);
            self.elapsed_us += u64::from(ms) * 1000;
        }
    }

    fn transport(stream: MockStream) -> StreamTransport<MockStream, MockDelay> {
        StreamTransport::new(stream, MockDelay::default())
    }

    #[test]
    fn test_begin_always_succeeds() {
        let mut uart = transport(MockStream::default());
        assert_eq!(uart.begin(), Ok(()));
    }

    #[test]
    fn test_write_is_single_call_then_pause() {
        let mut uart = transport(MockStream::default());
        let frame = [0x55, 0xAA, 0x07, 0x01, 1, 2, 3, 4, 5, 6];

        uart.write(&frame).unwrap();

        let (stream, delay) = uart.release();
        assert_eq!(stream.written.len(), 1);
        assert_eq!(stream.written[0], frame);
        assert_eq!(delay.pauses_ms, [50]);
    }

    #[test]
    fn test_short_writes_are_continued() {
        let stream = MockStream {
            write_limit: 4,
            ..MockStream::default()
        };
        let mut uart = transport(stream);

        uart.write(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).unwrap();

        let (stream, delay) = uart.release();
        assert_eq!(stream.written.len(), 3);
        assert_eq!(stream.written.concat(), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        // One pause per command, not per write call
        assert_eq!(delay.pauses_ms.len(), 1);
    }

    #[test]
    fn test_read_ack_returns_available_bytes() {
        let stream = MockStream {
            incoming: [0x01, 0x02].to_vec(),
            ready_after: 3,
            ..MockStream::default()
        };
        let mut uart = transport(stream);

        let mut buf = [0u8; 8];
        assert_eq!(uart.read_ack(&mut buf), Ok(2));
        assert_eq!(&buf[..2], &[0x01, 0x02]);

        let (_, delay) = uart.release();
        assert_eq!(delay.elapsed_us, 3000);
    }

    #[test]
    fn test_read_ack_gives_up_at_timeout() {
        let mut uart = transport(MockStream::default());

        let mut buf = [0u8; 4];
        assert_eq!(uart.read_ack(&mut buf), Ok(0));

        let (_, delay) = uart.release();
        assert_eq!(delay.elapsed_us, 1_000_000);
    }

    #[test]
    fn test_timeout_never_overshoots() {
        let config = StreamConfig {
            ack_timeout_ms: 10,
            poll_interval_us: 3000,
            ..StreamConfig::default()
        };
        let mut uart = StreamTransport::with_config(MockStream::default(), MockDelay::default(), config);

        assert_eq!(uart.read_ack(&mut [0u8; 1]), Ok(0));

        let (_, delay) = uart.release();
        assert_eq!(delay.elapsed_us, 10_000);
    }

    #[test]
    fn test_poll_cost_counts_against_timeout() {
        let config = StreamConfig {
            ack_timeout_ms: 10,
            poll_interval_us: 1000,
            poll_cost_us: 1000,
            ..StreamConfig::default()
        };
        let mut uart = StreamTransport::with_config(MockStream::default(), MockDelay::default(), config);

        assert_eq!(uart.read_ack(&mut [0u8; 1]), Ok(0));

        // Sleeps and polls share the 10 ms budget
        let (stream, delay) = uart.release();
        assert_eq!(delay.elapsed_us, 5000);
        assert_eq!(stream.polls, 6);
    }
}
