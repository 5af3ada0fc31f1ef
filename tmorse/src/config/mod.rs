// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod blink_config;
pub mod clap_config;
pub mod config_error;
pub mod device_check;

// Re-export.
pub use blink_config::*;
pub use clap_config::*;
pub use config_error::*;
pub use device_check::*;
