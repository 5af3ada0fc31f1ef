// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # tmorse
//!
//! Blink a ThinkPad LED, a keyboard backlight, or any other file-backed on/off device
//! control in Morse code.
//!
//! ```text
//! text ──encode──▶ MorseString ──schedule──▶ Vec<Pulse> ──BlinkDriver──▶ LedLine
//! ```
//!
//! 1. [`encode`] turns text into a [`MorseString`] with a [`CodeTable`]. Every
//!    character is validated before anything is encoded.
//! 2. [`schedule`] turns the [`MorseString`] into [`Pulse`]s using the canonical timing
//!    ratios (dot 1, dash 3, intra-character gap 1, letter gap 3, word gap 7 units),
//!    where one unit is the [`Multiplier`] in seconds.
//! 3. [`BlinkDriver`] writes each pulse to a [`LedLine`] and holds it. It is the only
//!    stage with side effects, and the only one that can be interrupted, via a
//!    [`CancelSignal`].
//!
//! A [`BlinkSession`] wraps the driver and guarantees the device ends in its
//! [`RestState`] with exactly one final write, whether the run completed, was
//! interrupted, or failed.
//!
//! # Run the binary
//!
//! ```sh
//! sudo tmorse
//! echo "This is a test" | sudo tmorse --stdin
//! sudo tmorse -c custom_codes.json
//! sudo tmorse --on-command 2 --off-command 0 -l /proc/acpi/ibm/kbdlight -m 0.7 --rest-state off
//! tmorse --dry-run -i message.txt
//! ```
//!
//! # Use the library
//!
//! ```no_run
//! use tmorse::{BlinkConfig, CancelSignal, CodeTable, FileLedLine, blink_text};
//!
//! # async fn run() -> miette::Result<()> {
//! let config = BlinkConfig::default();
//! let table = CodeTable::try_default()?;
//! let mut line = FileLedLine::new(&config.led_path, "0 on", "0 off");
//! let report =
//!     blink_text(&mut line, "SOS", &table, &config, CancelSignal::never(), None).await?;
//! println!("{}", report.morse);
//! # Ok(())
//! # }
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to use
// .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod blink_driver;
pub mod code_table;
pub mod common;
pub mod config;
pub mod encoder;
pub mod input;
pub mod log;
pub mod pipeline;
pub mod pulse_scheduler;
pub mod test_fixtures;
pub mod ui_str;

// Re-export.
pub use blink_driver::*;
pub use code_table::*;
pub use common::*;
pub use config::*;
pub use encoder::*;
pub use input::*;
pub use log::*;
pub use pipeline::*;
pub use pulse_scheduler::*;
