// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs::OpenOptions,
          io::Write,
          path::{Path, PathBuf}};

use crate::{DriveError, Level};

/// The device being blinked. Production code uses [`FileLedLine`]; tests use
/// [`crate::test_fixtures::RecordingLedLine`].
pub trait LedLine {
    /// Set the device to `level`. Called once per pulse and once more to restore the
    /// rest state.
    ///
    /// # Errors
    ///
    /// Returns [`DriveError::WriteFailed`] if the device can't be written.
    fn write_level(&mut self, level: Level) -> Result<(), DriveError>;
}

/// A file-backed device control, eg `/proc/acpi/ibm/led`, and the two literal commands
/// that turn it on and off.
///
/// There is no long lived handle. Every write opens the path, writes the command, and
/// closes it, so a failed write has no effect on the next one. The path is never
/// created: if it vanishes mid run, writes fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLedLine {
    path: PathBuf,
    on_command: String,
    off_command: String,
}

impl FileLedLine {
    #[must_use]
    pub fn new(
        path: impl Into<PathBuf>,
        on_command: impl Into<String>,
        off_command: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            on_command: on_command.into(),
            off_command: off_command.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path { &self.path }

    #[must_use]
    pub fn command_for(&self, level: Level) -> &str {
        match level {
            Level::On => &self.on_command,
            Level::Off => &self.off_command,
        }
    }
}

impl LedLine for FileLedLine {
    fn write_level(&mut self, level: Level) -> Result<(), DriveError> {
        let command = self.command_for(level);

        OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(command.as_bytes()))
            .map_err(|source| DriveError::WriteFailed {
                path: self.path.clone(),
                command: command.to_string(),
                source,
            })
    }
}
