// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use crate::{DriveError, LedLine, Level};

/// In memory [`LedLine`] that records every successful write. It can be told to fail one
/// write, counted from zero across all attempts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingLedLine {
    pub writes: Vec<Level>,
    pub write_attempts: usize,
    pub maybe_fail_at: Option<usize>,
}

impl RecordingLedLine {
    #[must_use]
    pub fn failing_at(attempt: usize) -> Self {
        Self {
            maybe_fail_at: Some(attempt),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn last_write(&self) -> Option<Level> { self.writes.last().copied() }
}

impl LedLine for RecordingLedLine {
    fn write_level(&mut self, level: Level) -> Result<(), DriveError> {
        let attempt = self.write_attempts;
        self.write_attempts += 1;

        if self.maybe_fail_at == Some(attempt) {
            return Err(DriveError::WriteFailed {
                path: PathBuf::from("<recording led line>"),
                command: level.to_string(),
                source: std::io::Error::other(format!("write {attempt} set to fail")),
            });
        }

        self.writes.push(level);
        Ok(())
    }
}
