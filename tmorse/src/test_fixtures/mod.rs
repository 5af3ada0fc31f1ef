// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod recording_led_line;

// Re-export.
pub use recording_led_line::*;
