// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One run against a device: open the [`BlinkSession`], encode and schedule, drive,
//! finish. The session is opened before encoding, so even a message that can't be
//! encoded leaves the device in its rest state (one write, no pulses).

use crate::{BlinkConfig, BlinkDriver, BlinkOutcome, BlinkPlan, BlinkSession, CancelSignal,
            CodeTable, LedLine, MorseString, PipelineError, ProgressSender};

/// What a completed or interrupted run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlinkReport {
    pub morse: MorseString,
    pub outcome: BlinkOutcome,
}

/// Blink `text` on `line` with the timing and rest state in `config`.
///
/// # Errors
///
/// - [`PipelineError::Encode`] if `table` can't encode `text`. The rest state is still
///   written.
/// - [`PipelineError::Drive`] if a pulse can't be written, or if only the final rest
///   state write fails.
pub async fn blink_text<L: LedLine>(
    line: &mut L,
    text: &str,
    table: &CodeTable,
    config: &BlinkConfig,
    cancel_signal: CancelSignal,
    maybe_progress_sender: Option<ProgressSender>,
) -> Result<BlinkReport, PipelineError> {
    let mut session = BlinkSession::open(line, config.rest_state);

    let plan = match BlinkPlan::try_new(text, table, config.multiplier) {
        Ok(plan) => plan,
        Err(error) => return session.finish_after(Err(error.into())),
    };

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "▶️ Blinking",
        morse = %plan.morse,
        total_duration = ?plan.total_duration()
    );

    let mut driver = BlinkDriver::new(cancel_signal);
    if let Some(sender) = maybe_progress_sender {
        driver = driver.with_progress(sender);
    }

    let result = driver
        .run(plan.pulses, &mut session)
        .await
        .map(|outcome| BlinkReport {
            morse: plan.morse,
            outcome,
        })
        .map_err(PipelineError::from);

    session.finish_after(result)
}
