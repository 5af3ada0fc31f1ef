// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`CodeTable`] maps one uppercase character to its [`MorseSymbol`].
//!
//! 1. The packaged default covers `A-Z`, `0-9` and the ITU punctuation marks. It is
//!    compiled into the binary from `default_codes.json`.
//! 2. A user table replaces the default entirely. It is a JSON object of single character
//!    keys to dot/dash strings, eg: `{"م": "--", "a": ".-"}`. Keys are normalized to
//!    uppercase, so `a` and `A` are the same key.
//!
//! The table is read-only once built, and is passed by reference to [`crate::encode`].

use serde::Deserialize;
use std::{collections::{BTreeMap, HashMap},
          path::Path};

use crate::{ConfigError, MorseSymbol};

pub const DEFAULT_CODES_JSON: &str = include_str!("default_codes.json");
pub const DEFAULT_CODES_SOURCE_NAME: &str = "<packaged default codes>";

/// Uppercase a single character, keeping it as is when its uppercase form is more than
/// one character (eg: `ß`). Both table keys and input text go through this, so they
/// always agree.
#[must_use]
pub fn normalize_char(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(it), None) => it,
        _ => ch,
    }
}

/// The JSON shape of a code table file, before any validation. Sorted, so errors are
/// reported in a stable order.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawCodeTable(BTreeMap<String, String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<char, MorseSymbol>,
}

impl CodeTable {
    /// The packaged default table.
    ///
    /// # Errors
    ///
    /// Only if the packaged JSON is malformed, which the tests rule out.
    pub fn try_default() -> Result<Self, ConfigError> {
        Self::try_from_json_str(DEFAULT_CODES_JSON, DEFAULT_CODES_SOURCE_NAME)
    }

    /// Load a user supplied table from a JSON file.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::CodeTableRead`] if the file can't be read.
    /// - Any error of [`CodeTable::try_from_json_str`].
    #[tracing::instrument]
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| {
            ConfigError::CodeTableRead {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let it = Self::try_from_json_str(&json, &path.display().to_string())?;

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📖 Loaded custom code table",
            path = %path.display(),
            entries = it.len()
        );

        Ok(it)
    }

    /// Parse a JSON object of `character -> symbol` pairs. `source_name` is only used in
    /// error messages.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::CodeTableParse`] if the text isn't a JSON object of strings.
    /// - Any error of [`CodeTable::try_from_entries`].
    pub fn try_from_json_str(json: &str, source_name: &str) -> Result<Self, ConfigError> {
        let RawCodeTable(entries) =
            serde_json::from_str(json).map_err(|source| ConfigError::CodeTableParse {
                source_name: source_name.to_string(),
                source,
            })?;
        Self::try_from_entries(entries)
    }

    /// Build a table from raw `(key, symbol)` pairs.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidCodeTableKey`] if a key isn't exactly one character.
    /// - [`ConfigError::InvalidCodeTableSymbol`] if a symbol is empty or has anything
    ///   other than `.` and `-`.
    /// - [`ConfigError::ConflictingCodeTableKey`] if two keys normalize to the same
    ///   character with different symbols.
    pub fn try_from_entries(
        entries: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, ConfigError> {
        let mut codes: HashMap<char, MorseSymbol> = HashMap::new();

        for (key, symbol) in entries {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(ConfigError::InvalidCodeTableKey { key });
            };

            // A space in the text is a word gap, it can never be a table entry.
            if ch.is_whitespace() {
                return Err(ConfigError::InvalidCodeTableKey { key });
            }

            let Some(morse_symbol) = MorseSymbol::try_new(&symbol) else {
                return Err(ConfigError::InvalidCodeTableSymbol { key, symbol });
            };

            let ch = normalize_char(ch);
            if let Some(existing) = codes.get(&ch)
                && *existing != morse_symbol
            {
                return Err(ConfigError::ConflictingCodeTableKey {
                    key: ch,
                    first: existing.to_string(),
                    second: symbol,
                });
            }
            codes.insert(ch, morse_symbol);
        }

        Ok(Self { codes })
    }

    /// Look up an already normalized character.
    #[must_use]
    pub fn get(&self, ch: char) -> Option<&MorseSymbol> { self.codes.get(&ch) }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool { self.codes.contains_key(&ch) }

    #[must_use]
    pub fn len(&self) -> usize { self.codes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.codes.is_empty() }
}
