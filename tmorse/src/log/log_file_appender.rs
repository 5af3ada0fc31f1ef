// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Appender for the log file at `path`, created if missing and never rotated. A bare
/// file name is relative to the working directory.
///
/// This is a blocking writer. A non blocking one could drop the last lines logged before
/// exit, which are the ones about restoring the rest state.
///
/// # Errors
///
/// Returns an error if `path` has no file name, or the file can't be created.
pub fn try_create_log_file_appender(path: &Path) -> miette::Result<RollingFileAppender> {
    let Some(file_name) = path.file_name() else {
        return Err(miette::miette!(
            code = "tmorse::log::invalid_log_file",
            help = "Pass a file path to `--log-file`, eg: tmorse_log.txt",
            "Can't log to '{}', it has no file name",
            path.display()
        ));
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .into_diagnostic()
}

#[cfg(test)]
mod tests_log_file_appender {
    use super::*;
    use crate::try_create_temp_dir;
    use std::io::Write;

    #[test]
    fn test_creates_the_exact_file() -> miette::Result<()> {
        let dir = try_create_temp_dir()?;
        let path = dir.join("tmorse_log.txt");

        let mut appender = try_create_log_file_appender(&path)?;
        appender.write_all(b"hello\n").into_diagnostic()?;
        appender.flush().into_diagnostic()?;

        let contents = std::fs::read_to_string(&path).into_diagnostic()?;
        assert_eq!(contents, "hello\n");
        crate::ok!()
    }

    #[test]
    fn test_path_without_file_name_fails() {
        assert!(try_create_log_file_appender(Path::new("/")).is_err());
        assert!(try_create_log_file_appender(Path::new("logs/..")).is_err());
    }
}
