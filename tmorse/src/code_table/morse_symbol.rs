// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

pub const DOT: char = '.';
pub const DASH: char = '-';
/// Separates symbol groups (letters) in a [`crate::MorseString`].
pub const LETTER_SEPARATOR: char = ' ';
/// Stands in for a space of the source text in a [`crate::MorseString`].
pub const WORD_MARKER: char = '/';

/// One mark of a Morse symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Dot,
    Dash,
}

impl Mark {
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            DOT => Some(Mark::Dot),
            DASH => Some(Mark::Dash),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Mark::Dot => DOT,
            Mark::Dash => DASH,
        }
    }
}

/// A non-empty sequence of dots and dashes, eg `-.-.` for `C`. Can only be built through
/// [`MorseSymbol::try_new`], so every instance is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MorseSymbol(String);

impl MorseSymbol {
    /// Returns `None` if `symbol` is empty or has anything other than `.` and `-`.
    #[must_use]
    pub fn try_new(symbol: &str) -> Option<Self> {
        let is_valid = !symbol.is_empty() && symbol.chars().all(|ch| Mark::from_char(ch).is_some());
        is_valid.then(|| MorseSymbol(symbol.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }

    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        self.0.chars().filter_map(Mark::from_char)
    }
}

impl Display for MorseSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}
