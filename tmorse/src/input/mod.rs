// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod input_error;
pub mod input_source;
pub mod terminal_prompt;

// Re-export.
pub use input_error::*;
pub use input_source::*;
pub use terminal_prompt::*;
