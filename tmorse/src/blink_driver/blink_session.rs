// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A [`BlinkSession`] is the scope in which the device may be blinked. However the scope
//! ends, the device is written to its [`RestState`] exactly once:
//!
//! 1. [`BlinkSession::finish`] (or [`BlinkSession::finish_after`]) on every normal path,
//!    including driver errors and interruption.
//! 2. [`Drop`] as the fallback for early returns and panics. Errors there can only be
//!    logged.
//!
//! Finalization is never retried and can't be interrupted.

use crate::{DriveError, LedLine, Level, RestState};

#[derive(Debug)]
pub struct BlinkSession<'a, L: LedLine> {
    line: &'a mut L,
    rest_state: RestState,
    finalized: bool,
}

impl<'a, L: LedLine> BlinkSession<'a, L> {
    #[must_use]
    pub fn open(line: &'a mut L, rest_state: RestState) -> Self {
        // % is Display, ? is Debug.
        tracing::debug!(message = "🔓 Blink session opened", rest_state = ?rest_state);
        Self {
            line,
            rest_state,
            finalized: false,
        }
    }

    pub fn line_mut(&mut self) -> &mut L { &mut *self.line }

    #[must_use]
    pub fn rest_state(&self) -> RestState { self.rest_state }

    /// Write the rest state and end the session.
    ///
    /// # Errors
    ///
    /// Returns [`DriveError::WriteFailed`] if the rest state can't be written.
    pub fn finish(mut self) -> Result<(), DriveError> { self.finalize() }

    /// End the session after `result`, which is returned as is unless finalization alone
    /// fails. When both fail, `result` wins and the finalization error is logged.
    ///
    /// # Errors
    ///
    /// The error in `result`, or else the finalization error.
    pub fn finish_after<T, E>(self, result: Result<T, E>) -> Result<T, E>
    where
        E: From<DriveError>,
    {
        match (result, self.finish()) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(finalize_error)) => Err(finalize_error.into()),
            (Err(error), Ok(())) => Err(error),
            (Err(error), Err(finalize_error)) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "⚠️ Could not restore rest state after an earlier error",
                    error = %finalize_error
                );
                Err(error)
            }
        }
    }

    fn finalize(&mut self) -> Result<(), DriveError> {
        if self.finalized {
            return Ok(());
        }
        self.finalized = true;

        let level = Level::from(self.rest_state);
        let result = self.line.write_level(level);

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🔒 Blink session finalized",
            level = %level,
            is_ok = result.is_ok()
        );

        result
    }
}

impl<L: LedLine> Drop for BlinkSession<'_, L> {
    fn drop(&mut self) {
        if let Err(error) = self.finalize() {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "⚠️ Could not restore rest state on drop",
                error = %error
            );
        }
    }
}
