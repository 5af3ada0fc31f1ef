// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text to Morse. Validation runs over the whole message before anything is encoded, so
//! an unknown character is reported before a single pulse exists.

use std::fmt::{Display, Formatter};

use crate::{CodeTable, DASH, DOT, LETTER_SEPARATOR, WORD_MARKER, normalize_char};

/// A space in the (normalized) source text.
const SOURCE_SPACE: char = ' ';

/// Encoded message: symbol groups each followed by a [`LETTER_SEPARATOR`], with a
/// [`WORD_MARKER`] for every space of the source text. For example `HI THERE` is
/// `.... .. /- .... . .-. . `.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MorseString(String);

impl MorseString {
    /// Returns `None` if `it` has anything other than `.`, `-`, ` ` and `/`.
    #[must_use]
    pub fn try_new(it: &str) -> Option<Self> {
        it.chars()
            .all(|ch| matches!(ch, DOT | DASH | LETTER_SEPARATOR | WORD_MARKER))
            .then(|| Self(it.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// One group per encoded (non-space) character.
    #[must_use]
    pub fn symbol_group_count(&self) -> usize {
        self.0
            .split([LETTER_SEPARATOR, WORD_MARKER])
            .filter(|group| !group.is_empty())
            .count()
    }
}

impl Display for MorseString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum EncodeError {
    #[error("❓ There is no Morse code for '{character}' (at index {position} of the message)")]
    #[diagnostic(
        code(tmorse::encode::unknown_character),
        help("Use `-c/--codes-file` to supply a JSON code table that covers it.")
    )]
    UnknownCharacter { character: char, position: usize },
}

/// Collapse line breaks (`\r\n`, `\n` or a lone `\r`) into spaces, trim both ends, and
/// uppercase.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .chars()
        .map(normalize_char)
        .collect()
}

/// Encode `text` with `table`.
///
/// # Errors
///
/// Returns [`EncodeError::UnknownCharacter`] for the first character (other than a space)
/// that `table` has no symbol for. Nothing is encoded in that case.
pub fn encode(text: &str, table: &CodeTable) -> Result<MorseString, EncodeError> {
    let normalized = normalize_text(text);

    // Validate.
    if let Some((position, character)) = normalized
        .chars()
        .enumerate()
        .find(|(_, ch)| *ch != SOURCE_SPACE && !table.contains(*ch))
    {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "❓ Unknown character",
            character = %character,
            position = position
        );
        return Err(EncodeError::UnknownCharacter {
            character,
            position,
        });
    }

    // Transform.
    let mut acc = String::with_capacity(normalized.len() * 5);
    for ch in normalized.chars() {
        if ch == SOURCE_SPACE {
            acc.push(WORD_MARKER);
        } else if let Some(symbol) = table.get(ch) {
            acc.push_str(symbol.as_str());
            acc.push(LETTER_SEPARATOR);
        }
    }

    // % is Display, ? is Debug.
    tracing::debug!(message = "📝 Encoded message", morse = %acc);

    Ok(MorseString(acc))
}

#[cfg(test)]
mod tests_encoder {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn default_table() -> CodeTable { CodeTable::try_default().unwrap() }

    #[test_case("SOS", "... --- ... " ; "sos")]
    #[test_case("sos", "... --- ... " ; "lower case")]
    #[test_case("HI THERE", ".... .. /- .... . .-. . " ; "two words")]
    #[test_case("  E  ", ". " ; "trimmed")]
    #[test_case("HI\nYOU", ".... .. /-.-- --- ..- " ; "newline is a word gap")]
    #[test_case("HI\r\nYOU", ".... .. /-.-- --- ..- " ; "crlf is a word gap")]
    #[test_case("HI\rYOU", ".... .. /-.-- --- ..- " ; "lone cr is a word gap")]
    #[test_case("HI\r\n\r\n", ".... .. " ; "trailing blank lines")]
    #[test_case("A  B", ".- //-... " ; "double space is two word markers")]
    #[test_case("SOS!", "... --- ... -.-.-- " ; "punctuation")]
    fn test_encode(text: &str, expected: &str) {
        let morse = encode(text, &default_table()).unwrap();
        assert_eq!(morse.as_str(), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "only spaces")]
    #[test_case("\n\n" ; "only newlines")]
    fn test_encode_empty_after_normalization(text: &str) {
        let morse = encode(text, &default_table()).unwrap();
        assert!(morse.is_empty());
        assert_eq!(morse.symbol_group_count(), 0);
    }

    #[test_case("#", '#', 0)]
    #[test_case("SOS#", '#', 3)]
    #[test_case("hello wörld", 'Ö', 7)]
    #[test_case("TAB\tTAB", '\t', 3)]
    fn test_unknown_character(text: &str, character: char, position: usize) {
        let result = encode(text, &default_table());
        let Err(EncodeError::UnknownCharacter {
            character: reported_character,
            position: reported_position,
        }) = result
        else {
            panic!("Expected UnknownCharacter, got {result:?}");
        };
        assert_eq!(reported_character, character);
        assert_eq!(reported_position, position);
    }

    #[test_case("SOS")]
    #[test_case("HI THERE")]
    #[test_case("The quick brown fox jumps over the lazy dog 1234567890")]
    #[test_case("A  B")]
    #[test_case("what? (really!) yes: 100% no")]
    fn test_symbol_group_count_matches_non_space_characters(text: &str) {
        let table = default_table();
        let non_space_count = normalize_text(text).chars().filter(|ch| *ch != ' ').count();
        match encode(text, &table) {
            Ok(morse) => assert_eq!(morse.symbol_group_count(), non_space_count),
            // '%' isn't in the default table.
            Err(EncodeError::UnknownCharacter { character, .. }) => {
                assert_eq!(character, '%');
            }
        }
    }

    #[test]
    fn test_encode_with_custom_table() {
        let table =
            CodeTable::try_from_json_str(r#"{"م": "--", "ح": "...."}"#, "test").unwrap();
        let morse = encode("مح م", &table).unwrap();
        assert_eq!(morse.as_str(), "-- .... /-- ");

        let result = encode("SOS", &table);
        assert!(matches!(
            result,
            Err(EncodeError::UnknownCharacter { character: 'S', position: 0 })
        ));
    }

    #[test]
    fn test_morse_string_try_new() {
        assert!(MorseString::try_new("... --- ... ").is_some());
        assert!(MorseString::try_new(".- //-... ").is_some());
        assert!(MorseString::try_new("SOS").is_none());
    }
}
