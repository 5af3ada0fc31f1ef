// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod blink_plan;
pub mod blink_text;
pub mod pipeline_error;

// Re-export.
pub use blink_plan::*;
pub use blink_text::*;
pub use pipeline_error::*;
