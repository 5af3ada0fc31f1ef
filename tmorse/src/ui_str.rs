// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Stylize;
use std::time::Duration;

use crate::{BlinkOutcome, BlinkPlan, Level, ProgressEvent, RestState};

pub const WRITING_PREFIX: &str = "Writing: ";

/// The progress line for `event`, or `None` if it doesn't change what is shown. Each
/// mark starts with a carriage return so it overwrites the previous one.
#[must_use]
pub fn progress_line(event: &ProgressEvent) -> Option<String> {
    match event {
        ProgressEvent::PulseStarted { pulse, .. } => pulse
            .mark()
            .map(|mark| format!("\r{WRITING_PREFIX}{}", mark.as_char())),
        ProgressEvent::Finished(_) => Some("\n".to_string()),
        ProgressEvent::PulseCompleted { .. } | ProgressEvent::PulseAbandoned { .. } => None,
    }
}

#[must_use]
pub fn format_duration(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f64())
}

#[must_use]
pub fn dry_run_msg(plan: &BlinkPlan) -> String {
    format!(
        "{a} {b}\n{c} {d} ({e} pulses)",
        a = "Morse:".bold(),
        b = plan.morse.to_string().cyan(),
        c = "Would blink for:".bold(),
        d = format_duration(plan.total_duration()).green(),
        e = plan.pulses.len()
    )
}

#[must_use]
pub fn completed_msg(rest_state: RestState) -> String {
    format!(
        "{a} The device is back {b}.",
        a = "✅ Done.".green(),
        b = Level::from(rest_state)
    )
}

#[must_use]
pub fn interrupted_msg(pulses_applied: usize, rest_state: RestState) -> String {
    format!(
        "{a} after {pulses_applied} pulses. The device is back {b}.",
        a = "⏹️ Interrupted".yellow(),
        b = Level::from(rest_state)
    )
}

#[must_use]
pub fn outcome_msg(outcome: BlinkOutcome, rest_state: RestState) -> String {
    match outcome {
        BlinkOutcome::Completed => completed_msg(rest_state),
        BlinkOutcome::Interrupted { pulses_applied } => {
            interrupted_msg(pulses_applied, rest_state)
        }
    }
}
