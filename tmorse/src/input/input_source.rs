// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Read, path::PathBuf};

use crate::{InputError, read_hidden_line, read_line};

pub const PROMPT: &str = "Here: ";

/// Where the message to blink comes from. Chosen by the mutually exclusive `-i/--input`,
/// `-s/--stdin` and `--hidden` flags; the interactive prompt is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    HiddenPrompt,
    InteractivePrompt,
}

impl InputSource {
    /// Read the raw message. Line breaks and surrounding whitespace are left for
    /// [`crate::encode`] to normalize.
    ///
    /// # Errors
    ///
    /// - [`InputError::NotAFile`] if a [`InputSource::File`] path isn't a regular file.
    /// - [`InputError::ReadFile`], [`InputError::ReadStdin`] or [`InputError::Prompt`] if
    ///   reading fails, including on text that isn't UTF-8.
    /// - [`InputError::PromptCancelled`] if Ctrl+C is pressed at the hidden prompt.
    pub fn acquire(&self) -> Result<String, InputError> {
        let text = match self {
            InputSource::File(path) => {
                if !path.is_file() {
                    return Err(InputError::NotAFile { path: path.clone() });
                }
                std::fs::read_to_string(path).map_err(|source| InputError::ReadFile {
                    path: path.clone(),
                    source,
                })?
            }
            InputSource::Stdin => {
                let mut acc = String::new();
                std::io::stdin()
                    .read_to_string(&mut acc)
                    .map_err(|source| InputError::ReadStdin { source })?;
                acc
            }
            InputSource::HiddenPrompt => read_hidden_line(PROMPT)
                .map_err(|source| InputError::Prompt { source })?
                .ok_or(InputError::PromptCancelled)?,
            InputSource::InteractivePrompt => {
                read_line(PROMPT).map_err(|source| InputError::Prompt { source })?
            }
        };

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📥 Acquired message",
            input_source = ?self,
            char_count = text.chars().count()
        );

        Ok(text)
    }
}
