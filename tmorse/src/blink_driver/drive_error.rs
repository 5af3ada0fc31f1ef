// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DriveError {
    #[error("💥 Could not write '{command}' to '{}'", .path.display())]
    #[diagnostic(
        code(tmorse::drive::write_failed),
        help(
            "The device control may have vanished, or its permissions changed, \
             while blinking."
        )
    )]
    WriteFailed {
        path: PathBuf,
        command: String,
        #[source]
        source: std::io::Error,
    },
}
