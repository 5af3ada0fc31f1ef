// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{path::Path, time::Duration};

use crate::{CodeTable, ConfigError, EncodeError, MorseString, Multiplier, Pulse, encode,
            schedule, total_duration};

/// The pure part of a run: the encoded message and its schedule. Nothing here touches
/// the device, which is what `--dry-run` relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct BlinkPlan {
    pub morse: MorseString,
    pub pulses: Vec<Pulse>,
}

impl BlinkPlan {
    /// # Errors
    ///
    /// Returns [`EncodeError::UnknownCharacter`] if `table` can't encode `text`.
    pub fn try_new(
        text: &str,
        table: &CodeTable,
        multiplier: Multiplier,
    ) -> Result<Self, EncodeError> {
        let morse = encode(text, table)?;
        let pulses = schedule(&morse, multiplier);
        Ok(Self { morse, pulses })
    }

    #[must_use]
    pub fn total_duration(&self) -> Duration { total_duration(&self.pulses) }
}

/// The custom table at `maybe_path`, or the packaged default.
///
/// # Errors
///
/// Any error of [`CodeTable::try_load`] or [`CodeTable::try_default`].
pub fn load_code_table(maybe_path: Option<&Path>) -> Result<CodeTable, ConfigError> {
    match maybe_path {
        Some(path) => CodeTable::try_load(path),
        None => CodeTable::try_default(),
    }
}
