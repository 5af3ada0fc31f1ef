// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The only part of the pipeline with side effects. [`BlinkDriver`] walks the pulse
//! sequence in order, writing each level to the device and then holding it:
//!
//! ```text
//! Idle ──▶ On ◀──▶ Off ──▶ Done
//! ```
//!
//! Each hold is a [`tokio::time::sleep`] raced against the [`CancelSignal`], so an
//! interrupt takes effect mid hold. The current pulse's write always goes through; only
//! its hold is cut short. Restoring the rest state is the job of the [`BlinkSession`],
//! not the driver.

use crate::{BlinkSession, CancelSignal, DriveError, LedLine, Level, ProgressEvent,
            ProgressSender, Pulse, report_progress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    On,
    Off,
    Done,
}

impl From<Level> for DriverState {
    fn from(level: Level) -> Self {
        match level {
            Level::On => DriverState::On,
            Level::Off => DriverState::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkOutcome {
    Completed,
    /// `pulses_applied` counts the pulses whose hold ran its full length.
    Interrupted { pulses_applied: usize },
}

#[derive(Debug)]
pub struct BlinkDriver {
    state: DriverState,
    cancel_signal: CancelSignal,
    maybe_progress_sender: Option<ProgressSender>,
}

impl BlinkDriver {
    #[must_use]
    pub fn new(cancel_signal: CancelSignal) -> Self {
        Self {
            state: DriverState::Idle,
            cancel_signal,
            maybe_progress_sender: None,
        }
    }

    #[must_use]
    pub fn with_progress(mut self, sender: ProgressSender) -> Self {
        self.maybe_progress_sender = Some(sender);
        self
    }

    #[must_use]
    pub fn state(&self) -> DriverState { self.state }

    /// Drive every pulse to the device held by `session`. Consumes the driver; a new
    /// sequence needs a new driver.
    ///
    /// # Errors
    ///
    /// Returns [`DriveError::WriteFailed`] for the first pulse that can't be written. The
    /// rest of the sequence is abandoned. The caller still finishes `session`.
    pub async fn run<L: LedLine>(
        mut self,
        pulses: Vec<Pulse>,
        session: &mut BlinkSession<'_, L>,
    ) -> Result<BlinkOutcome, DriveError> {
        self.drive(pulses, session).await
    }

    async fn drive<L: LedLine>(
        &mut self,
        pulses: Vec<Pulse>,
        session: &mut BlinkSession<'_, L>,
    ) -> Result<BlinkOutcome, DriveError> {
        let mut pulses_applied = 0;

        for (index, pulse) in pulses.into_iter().enumerate() {
            if self.cancel_signal.is_cancelled() {
                return Ok(self.end(BlinkOutcome::Interrupted { pulses_applied }));
            }

            if let Err(error) = session.line_mut().write_level(pulse.level) {
                self.state = DriverState::Done;
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "💥 Pulse write failed",
                    index = index,
                    error = %error
                );
                return Err(error);
            }
            self.state = pulse.level.into();
            self.report(ProgressEvent::PulseStarted { index, pulse });

            if !pulse.duration.is_zero() {
                let is_cut_short = tokio::select! {
                    biased;
                    () = self.cancel_signal.cancelled() => true,
                    () = tokio::time::sleep(pulse.duration) => false,
                };
                if is_cut_short {
                    self.report(ProgressEvent::PulseAbandoned { index });
                    return Ok(self.end(BlinkOutcome::Interrupted { pulses_applied }));
                }
            }

            pulses_applied += 1;
            self.report(ProgressEvent::PulseCompleted { index });
        }

        Ok(self.end(BlinkOutcome::Completed))
    }

    fn end(&mut self, outcome: BlinkOutcome) -> BlinkOutcome {
        self.state = DriverState::Done;
        self.report(ProgressEvent::Finished(outcome));

        // % is Display, ? is Debug.
        tracing::debug!(message = "🏁 Blink driver done", outcome = ?outcome);

        outcome
    }

    fn report(&self, event: ProgressEvent) {
        report_progress(self.maybe_progress_sender.as_ref(), event);
    }
}
