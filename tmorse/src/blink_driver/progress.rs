// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::sync::mpsc;

use crate::{BlinkOutcome, Pulse};

/// What the [`crate::BlinkDriver`] reports while it runs. `index` is the position of
/// the pulse in the scheduled sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The level of `pulse` has been written and its hold has begun.
    PulseStarted { index: usize, pulse: Pulse },
    /// The hold ran its full length.
    PulseCompleted { index: usize },
    /// The hold was cut short by cancellation.
    PulseAbandoned { index: usize },
    Finished(BlinkOutcome),
}

/// Unbounded so that reporting never blocks a hold.
pub type ProgressSender = mpsc::UnboundedSender<ProgressEvent>;
pub type ProgressReceiver = mpsc::UnboundedReceiver<ProgressEvent>;

#[must_use]
pub fn progress_channel() -> (ProgressSender, ProgressReceiver) { mpsc::unbounded_channel() }

/// Send `event` if anyone is listening. A receiver that has gone away is not an error.
pub fn report_progress(maybe_sender: Option<&ProgressSender>, event: ProgressEvent) {
    if let Some(sender) = maybe_sender {
        sender.send(event).ok();
    }
}
