// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod code_table_impl;
pub mod morse_symbol;

// Re-export.
pub use code_table_impl::*;
pub use morse_symbol::*;
