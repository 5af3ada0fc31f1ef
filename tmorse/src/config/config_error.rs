// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Everything that can be wrong with the configuration. All of these are reported before
/// the device is written to.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("🔒 Permission is denied to write on '{}'", .path.display())]
    #[diagnostic(
        code(tmorse::config::device_not_writable),
        help(
            "The device control must exist and be writable by this user. \
             Try running with sudo, or pick another device with `--led-path`."
        )
    )]
    DeviceNotWritable {
        path: PathBuf,
        #[source]
        source: rustix::io::Errno,
    },

    #[error("⏱️ Invalid timing multiplier: '{value}'")]
    #[diagnostic(
        code(tmorse::config::invalid_multiplier),
        help("The multiplier must be a positive, finite number of seconds, eg: 0.15")
    )]
    InvalidMultiplier { value: String },

    #[error("📖 Could not read code table file '{}'", .path.display())]
    #[diagnostic(code(tmorse::config::code_table_read))]
    CodeTableRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("📖 Could not parse code table from {source_name}")]
    #[diagnostic(
        code(tmorse::config::code_table_parse),
        help(r#"A code table is a JSON object of characters to symbols, eg: {{"A": ".-"}}"#)
    )]
    CodeTableParse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("🔑 Code table key '{key}' must be exactly one non-space character")]
    #[diagnostic(code(tmorse::config::invalid_code_table_key))]
    InvalidCodeTableKey { key: String },

    #[error("➖ Code table symbol '{symbol}' for '{key}' must be made of '.' and '-' only")]
    #[diagnostic(code(tmorse::config::invalid_code_table_symbol))]
    InvalidCodeTableSymbol { key: String, symbol: String },

    #[error("🔀 Code table has two different symbols for '{key}': '{first}' and '{second}'")]
    #[diagnostic(
        code(tmorse::config::conflicting_code_table_key),
        help("Keys are case insensitive, so 'a' and 'A' are the same key.")
    )]
    ConflictingCodeTableKey {
        key: char,
        first: String,
        second: String,
    },
}
