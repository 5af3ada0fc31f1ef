// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rustix::fs::{Access, access};
use std::path::Path;

use crate::ConfigError;

/// Fail fast, before any blinking, if the device control is missing or not writable by
/// this process. This mirrors `access(2)` with `W_OK`, so it follows the real uid.
///
/// # Errors
///
/// Returns [`ConfigError::DeviceNotWritable`] with the OS error as its source.
pub fn check_device_writable(path: &Path) -> Result<(), ConfigError> {
    access(path, Access::WRITE_OK).map_err(|source| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🔒 Device is not writable",
            path = %path.display(),
            errno = ?source
        );
        ConfigError::DeviceNotWritable {
            path: path.to_path_buf(),
            source,
        }
    })
}
