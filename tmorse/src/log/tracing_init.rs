// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Builds the [`tracing_subscriber`] layers for a [`TracingConfig`]. Installing them is
//! done by [`TracingConfig::install_global`] and [`TracingConfig::install_thread_local`].

use std::path::Path;

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry};

use crate::{CustomEventFormatter, DisplayPreference, TracingConfig, WriterConfig,
            try_create_log_file_appender};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .event_format(CustomEventFormatter)
            .with_ansi(false)
    };
}

/// A type erased layer over the [`Registry`].
pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// The level filter, then a display layer and a file layer if `tracing_config` asks for
/// them. `None` when logging is off.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<BoxedLayer>>> {
    let level_filter = tracing_config.level_filter;
    if level_filter == LevelFilter::OFF {
        return Ok(None);
    }

    let (maybe_display, maybe_file) = match &tracing_config.writer_config {
        WriterConfig::None => (None, None),
        WriterConfig::Display(preference) => (Some(*preference), None),
        WriterConfig::File(path) => (None, Some(path.as_str())),
        WriterConfig::DisplayAndFile(preference, path) => {
            (Some(*preference), Some(path.as_str()))
        }
    };

    let mut acc: Vec<BoxedLayer> = vec![Box::new(level_filter)];
    if let Some(preference) = maybe_display {
        acc.push(create_display_layer(preference, level_filter));
    }
    if let Some(path) = maybe_file {
        acc.push(try_create_file_layer(Path::new(path), level_filter)?);
    }

    Ok(Some(acc))
}

#[must_use]
pub fn create_display_layer(
    preference: DisplayPreference,
    level_filter: LevelFilter,
) -> BoxedLayer {
    match preference {
        DisplayPreference::Stdout => Box::new(
            create_fmt!()
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            create_fmt!()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    }
}

/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer(
    path: &Path,
    level_filter: LevelFilter,
) -> miette::Result<BoxedLayer> {
    let appender = try_create_log_file_appender(path)?;
    Ok(Box::new(
        create_fmt!().with_writer(appender).with_filter(level_filter),
    ))
}
