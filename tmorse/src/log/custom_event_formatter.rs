// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Custom event formatter for tracing
//!
//! Each event becomes a single line:
//!
//! ```text
//! <timestamp> <level_sigil>: [span:span:] <message> <field>=<value> ...
//! ```
//!
//! The `message` field is rendered first by the field formatter, other structured fields
//! follow it as `key=value` pairs. Register it with `tracing_subscriber` through
//! [`crate::log::try_create_layers`].

use chrono::Local;
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{fmt::{FmtContext, FormatEvent, FormatFields, format},
                         registry::LookupSpan};

pub mod custom_event_formatter_constants {
    pub const ERROR_SIGIL: &str = "E";
    pub const WARN_SIGIL: &str = "W";
    pub const INFO_SIGIL: &str = "I";
    pub const DEBUG_SIGIL: &str = "D";
    pub const TRACE_SIGIL: &str = "T";
    pub const LEVEL_SUFFIX: &str = ":";
    pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
}
use custom_event_formatter_constants::{DEBUG_SIGIL, ERROR_SIGIL, INFO_SIGIL,
                                       LEVEL_SUFFIX, TIMESTAMP_FORMAT, TRACE_SIGIL,
                                       WARN_SIGIL};

#[derive(Debug, Default, Clone, Copy)]
pub struct CustomEventFormatter;

impl CustomEventFormatter {
    #[must_use]
    pub fn level_sigil(level: Level) -> &'static str {
        match level {
            Level::ERROR => ERROR_SIGIL,
            Level::WARN => WARN_SIGIL,
            Level::INFO => INFO_SIGIL,
            Level::DEBUG => DEBUG_SIGIL,
            _ => TRACE_SIGIL,
        }
    }
}

impl<S, N> FormatEvent<S, N> for CustomEventFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let sigil = Self::level_sigil(*event.metadata().level());
        write!(writer, "{timestamp} {sigil}{LEVEL_SUFFIX} ")?;

        // Span context, root first.
        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}:", span.name())?;
            }
            write!(writer, " ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
