// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{DASH, DASH_UNITS, DOT, LETTER_GAP_UNITS, LETTER_SEPARATOR, Level, MorseString,
            Multiplier, Pulse, WORD_GAP_UNITS, WORD_MARKER};

/// Read a pulse sequence back into the encoder's format, going by hold durations
/// relative to `multiplier`. An ON hold nearer 1 unit is a dot and nearer 3 a dash. An OFF
/// hold of 3 units is a letter gap and each 7 units is a word marker.
///
/// For any string the encoder produces, `pulses_to_morse(&schedule(&m, k), k) == m`.
#[must_use]
pub fn pulses_to_morse(pulses: &[Pulse], multiplier: Multiplier) -> MorseString {
    let mut acc = String::new();

    for pulse in pulses {
        let units = units_in(pulse.duration, multiplier);
        match pulse.level {
            Level::On => acc.push(if units >= DASH_UNITS { DASH } else { DOT }),
            Level::Off if units >= WORD_GAP_UNITS => {
                acc.push(LETTER_SEPARATOR);
                for _ in 0..units / WORD_GAP_UNITS {
                    acc.push(WORD_MARKER);
                }
            }
            Level::Off if units >= LETTER_GAP_UNITS => acc.push(LETTER_SEPARATOR),
            Level::Off => {}
        }
    }

    if !acc.is_empty() {
        acc.push(LETTER_SEPARATOR);
    }

    MorseString::try_new(&acc).unwrap_or_default()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn units_in(duration: Duration, multiplier: Multiplier) -> u32 {
    (duration.as_secs_f64() / multiplier.as_secs_f64()).round() as u32
}
