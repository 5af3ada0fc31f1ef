// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum InputError {
    #[error("📄 '{}' is not a file", .path.display())]
    #[diagnostic(
        code(tmorse::input::not_a_file),
        help("`-i/--input` needs the path of a regular file holding the message.")
    )]
    NotAFile { path: PathBuf },

    #[error("📄 Could not read the message from '{}'", .path.display())]
    #[diagnostic(
        code(tmorse::input::read_file),
        help("The message file must be readable UTF-8 text.")
    )]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("⌨️ Could not read the message from standard input")]
    #[diagnostic(
        code(tmorse::input::read_stdin),
        help("Pipe UTF-8 text into `tmorse --stdin`.")
    )]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[error("⌨️ Could not read the message at the prompt")]
    #[diagnostic(code(tmorse::input::prompt))]
    Prompt {
        #[source]
        source: std::io::Error,
    },

    #[error("⌨️ Cancelled at the prompt")]
    #[diagnostic(
        code(tmorse::input::prompt_cancelled),
        help("Ctrl+C was pressed before the message was entered. Nothing was blinked.")
    )]
    PromptCancelled,
}
