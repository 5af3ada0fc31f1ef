// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod custom_event_formatter;
pub mod log_file_appender;
pub mod log_public_api;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use custom_event_formatter::*;
pub use log_file_appender::*;
pub use log_public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
