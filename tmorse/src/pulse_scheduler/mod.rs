// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod decode;
pub mod pulse;
pub mod schedule_impl;

// Re-export.
pub use decode::*;
pub use pulse::*;
pub use schedule_impl::*;
