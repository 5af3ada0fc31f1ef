// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{Level, Mark, Multiplier};

// Canonical Morse timing ratios, in units. These are never configurable; only the
// length of one unit is (see [`Multiplier`]).
pub const DOT_UNITS: u32 = 1;
pub const DASH_UNITS: u32 = 3;
pub const INTRA_CHARACTER_GAP_UNITS: u32 = 1;
pub const LETTER_GAP_UNITS: u32 = 3;
pub const WORD_GAP_UNITS: u32 = 7;

impl Mark {
    #[must_use]
    pub fn units(self) -> u32 {
        match self {
            Mark::Dot => DOT_UNITS,
            Mark::Dash => DASH_UNITS,
        }
    }
}

/// One scheduled step: set the device to `level`, then hold for `duration`, which is
/// `units` times the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub level: Level,
    pub units: u32,
    pub duration: Duration,
}

impl Pulse {
    #[must_use]
    pub fn new(level: Level, units: u32, multiplier: Multiplier) -> Self {
        Self {
            level,
            units,
            duration: multiplier.duration_of(units),
        }
    }

    /// The mark this pulse shows, if it is an ON pulse.
    #[must_use]
    pub fn mark(&self) -> Option<Mark> {
        match (self.level, self.units) {
            (Level::On, DOT_UNITS) => Some(Mark::Dot),
            (Level::On, _) => Some(Mark::Dash),
            (Level::Off, _) => None,
        }
    }
}

/// How long the whole sequence takes to blink.
#[must_use]
pub fn total_duration(pulses: &[Pulse]) -> Duration {
    pulses.iter().map(|pulse| pulse.duration).sum()
}
