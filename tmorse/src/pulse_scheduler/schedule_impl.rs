// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns a [`MorseString`] into a flat sequence of [`Pulse`]s.
//!
//! Every mark is an ON pulse followed by an OFF pulse. The OFF pulse holds for the
//! intra-character gap, or for nothing when a letter gap, a word marker, or the end of the
//! message follows (the next element supplies the gap instead). Adjacent OFF holds are
//! merged, so levels strictly alternate and the sequence always starts with ON:
//!
//! ```text
//! "... --- ... "
//!  ON1 OFF1 ON1 OFF1 ON1 OFF3 ON3 OFF1 ON3 OFF1 ON3 OFF3 ON1 OFF1 ON1 OFF1 ON1 OFF0
//! ```

use crate::{INTRA_CHARACTER_GAP_UNITS, LETTER_GAP_UNITS, LETTER_SEPARATOR, Level, Mark,
            MorseString, Multiplier, Pulse, WORD_GAP_UNITS, WORD_MARKER, total_duration};

/// Schedule `morse` using `multiplier` seconds per unit. An empty string gives an empty
/// sequence.
#[must_use]
pub fn schedule(morse: &MorseString, multiplier: Multiplier) -> Vec<Pulse> {
    let elements: Vec<char> = morse.as_str().chars().collect();
    let mut builder = PulseBuilder::new(multiplier);

    for (index, &element) in elements.iter().enumerate() {
        let maybe_prev = index.checked_sub(1).map(|prev| elements[prev]);
        let maybe_next = elements.get(index + 1).copied();

        if let Some(mark) = Mark::from_char(element) {
            builder.push_on(mark.units());
            let gap_follows = matches!(
                maybe_next,
                None | Some(LETTER_SEPARATOR | WORD_MARKER)
            );
            builder.push_off(if gap_follows { 0 } else { INTRA_CHARACTER_GAP_UNITS });
            continue;
        }

        match element {
            LETTER_SEPARATOR => {
                let next_to_word_marker =
                    maybe_prev == Some(WORD_MARKER) || maybe_next == Some(WORD_MARKER);
                if !next_to_word_marker {
                    builder.push_off(LETTER_GAP_UNITS);
                }
            }
            WORD_MARKER => builder.push_off(WORD_GAP_UNITS),
            _ => {}
        }
    }

    let pulses = builder.build();

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "⏱️ Scheduled pulses",
        pulse_count = pulses.len(),
        total_duration = ?total_duration(&pulses),
        multiplier = %multiplier
    );

    pulses
}

/// Accumulates pulses, merging adjacent OFF holds.
#[derive(Debug)]
struct PulseBuilder {
    multiplier: Multiplier,
    pulses: Vec<Pulse>,
}

impl PulseBuilder {
    fn new(multiplier: Multiplier) -> Self {
        Self {
            multiplier,
            pulses: vec![],
        }
    }

    fn push_on(&mut self, units: u32) {
        self.pulses.push(Pulse::new(Level::On, units, self.multiplier));
    }

    /// Gaps before the first mark are dropped, there is nothing to separate yet.
    fn push_off(&mut self, units: u32) {
        match self.pulses.last_mut() {
            None => {}
            Some(last) if last.level == Level::Off => {
                *last = Pulse::new(Level::Off, last.units + units, self.multiplier);
            }
            Some(_) => self.pulses.push(Pulse::new(Level::Off, units, self.multiplier)),
        }
    }

    /// The sequence ends on the OFF written right after the last mark, with no hold.
    fn build(mut self) -> Vec<Pulse> {
        if let Some(last) = self.pulses.last_mut()
            && last.level == Level::Off
        {
            *last = Pulse::new(Level::Off, 0, self.multiplier);
        }
        self.pulses
    }
}

#[cfg(test)]
mod tests_schedule {
    use super::*;
    use crate::{CodeTable, encode};
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use test_case::test_case;

    fn schedule_text(text: &str, multiplier: f64) -> Vec<Pulse> {
        let table = CodeTable::try_default().unwrap();
        let morse = encode(text, &table).unwrap();
        schedule(&morse, Multiplier::try_new(multiplier).unwrap())
    }

    fn units_of(pulses: &[Pulse]) -> Vec<(Level, u32)> {
        pulses.iter().map(|it| (it.level, it.units)).collect()
    }

    #[test]
    fn test_sos() {
        use Level::{Off, On};

        let pulses = schedule_text("SOS", 0.25);
        assert_eq!(
            units_of(&pulses),
            vec![
                (On, 1), (Off, 1), (On, 1), (Off, 1), (On, 1), (Off, 3),
                (On, 3), (Off, 1), (On, 3), (Off, 1), (On, 3), (Off, 3),
                (On, 1), (Off, 1), (On, 1), (Off, 1), (On, 1), (Off, 0),
            ]
        );
        assert_eq!(total_duration(&pulses), Duration::from_millis(6750));
    }

    #[test]
    fn test_hi_there_has_one_word_gap_and_no_adjacent_letter_gap() {
        let pulses = schedule_text("HI THERE", 0.15);
        let units = units_of(&pulses);

        let word_gaps: Vec<usize> = units
            .iter()
            .enumerate()
            .filter(|(_, it)| **it == (Level::Off, WORD_GAP_UNITS))
            .map(|(index, _)| index)
            .collect();
        assert_eq!(word_gaps.len(), 1);

        // The last dot of I and the dash of T sit right next to the word gap, so no
        // letter gap is added on either side of it.
        let word_gap_index = word_gaps[0];
        assert_eq!(units[word_gap_index - 1], (Level::On, 1));
        assert_eq!(units[word_gap_index + 1], (Level::On, 3));

        // The letter gap after T is still there.
        assert_eq!(units[word_gap_index + 2], (Level::Off, LETTER_GAP_UNITS));
    }

    #[test]
    fn test_double_space_adds_two_word_gaps() {
        let pulses = schedule_text("E  E", 0.15);
        assert_eq!(
            units_of(&pulses),
            vec![
                (Level::On, 1),
                (Level::Off, 2 * WORD_GAP_UNITS),
                (Level::On, 1),
                (Level::Off, 0),
            ]
        );
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "only spaces")]
    fn test_empty_message_has_no_pulses(text: &str) {
        assert!(schedule_text(text, 0.15).is_empty());
    }

    #[test]
    fn test_leading_gaps_are_dropped() {
        let morse = MorseString::try_new("/ .- ").unwrap();
        let pulses = schedule(&morse, Multiplier::default());
        assert_eq!(pulses[0].level, Level::On);
        assert_eq!(pulses.len(), 4);
    }

    #[test_case("SOS")]
    #[test_case("HI THERE")]
    #[test_case("The quick brown fox jumps over the lazy dog")]
    #[test_case("A  B\nC")]
    #[test_case("0123456789 .,?'!/()&:;=+-_\"$@")]
    fn test_levels_alternate_starting_on_and_end_without_hold(text: &str) {
        let pulses = schedule_text(text, 0.15);
        assert_eq!(pulses.first().unwrap().level, Level::On);
        for pair in pulses.windows(2) {
            assert_ne!(pair[0].level, pair[1].level);
        }
        let last = pulses.last().unwrap();
        assert_eq!(last.level, Level::Off);
        assert_eq!(last.units, 0);
        assert_eq!(last.duration, Duration::ZERO);
    }

    #[test]
    fn test_durations_are_units_times_multiplier() {
        let multiplier = Multiplier::try_new(0.5).unwrap();
        let pulses = schedule_text("HI THERE", 0.5);
        for pulse in &pulses {
            assert_eq!(pulse.duration, multiplier.duration_of(pulse.units));
        }
    }
}
