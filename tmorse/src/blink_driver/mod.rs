// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod blink_session;
pub mod cancel_signal;
pub mod drive_error;
pub mod driver_impl;
pub mod led_line;
pub mod level;
pub mod progress;

// Re-export.
pub use blink_session::*;
pub use cancel_signal::*;
pub use drive_error::*;
pub use driver_impl::*;
pub use led_line::*;
pub use level::*;
pub use progress::*;
