//! Settle delays
//!
//! The controller buffers very little and some commands take it a while
//! to carry out. Every fixed wait the driver performs is listed here so it
//! can be inspected and tuned in one place.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Commands followed by a fixed wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Settle {
    /// Full-screen clear
    ClearScreen,
    /// Panel profile initialization
    ProtocolInit,
    /// Background color change
    BackgroundColor,
    /// Line update
    LineUpdate,
    /// Between chart frame and axis captions
    ChartAxis,
    /// Between station record and its labels
    StationLabel,
}

impl Settle {
    /// Number of settle kinds
    pub const COUNT: usize = 6;

    /// All settle kinds in table order
    pub const ALL: [Settle; Self::COUNT] = [
        Settle::ClearScreen,
        Settle::ProtocolInit,
        Settle::BackgroundColor,
        Settle::LineUpdate,
        Settle::ChartAxis,
        Settle::StationLabel,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Delay the controller is known to need, in milliseconds
    pub const fn default_ms(self) -> u32 {
        match self {
            Settle::ClearScreen => 1500,
            Settle::ProtocolInit => 2000,
            Settle::BackgroundColor => 300,
            Settle::LineUpdate => 10,
            Settle::ChartAxis => 100,
            Settle::StationLabel => 100,
        }
    }
}

/// Settle delay table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timing {
    delays_ms: [u32; Settle::COUNT],
}

impl Default for Timing {
    fn default() -> Self {
        Self::new()
    }
}

impl Timing {
    /// Table with the controller's documented delays
    pub const fn new() -> Self {
        let mut delays_ms = [0; Settle::COUNT];
        let mut i = 0;
        while i < Settle::COUNT {
            delays_ms[i] = Settle::ALL[i].default_ms();
            i += 1;
        }
        Self { delays_ms }
    }

    /// Table with every delay set to zero (simulators, tests)
    pub const fn none() -> Self {
        Self {
            delays_ms: [0; Settle::COUNT],
        }
    }

    /// Delay for a settle kind, in milliseconds
    pub const fn get(&self, settle: Settle) -> u32 {
        self.delays_ms[settle.index()]
    }

    /// Override one delay
    pub fn set(&mut self, settle: Settle, ms: u32) {
        self.delays_ms[settle.index()] = ms;
    }

    /// Builder-style override
    pub fn with(mut self, settle: Settle, ms: u32) -> Self {
        self.set(settle, ms);
        self
    }
}
