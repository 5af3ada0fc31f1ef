// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{ArgGroup, Args, Parser};
use std::path::PathBuf;

use tracing_core::LevelFilter;

use crate::{BlinkConfig, DEFAULT_LED_PATH, DEFAULT_OFF_COMMAND, DEFAULT_ON_COMMAND,
            DisplayPreference, InputSource, Multiplier, RestState, TracingConfig,
            WriterConfig, parse_multiplier, tracing_config_options::DEFAULT_LOG_FILE_NAME};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "tmorse")]
#[command(about = "💡 Blink your ThinkPad LED, or any on/off device control, in Morse code")]
#[command(version)]
#[command(next_line_help = true)]
#[command(group(
    ArgGroup::new("input_mode")
        .args(["input", "stdin", "hidden"])
        .multiple(false)
))]
#[command(
    after_help = "Examples:\n  \
    sudo tmorse\n  \
    echo \"This is a test\" | sudo tmorse --stdin\n  \
    sudo tmorse -c custom_codes.json\n  \
    sudo tmorse --on-command 2 --off-command 0 -l /proc/acpi/ibm/kbdlight -m 0.7 --rest-state off"
)]
pub struct CLIArg {
    #[arg(
        short = 'm',
        long,
        default_value = "0.15",
        value_parser = parse_multiplier,
        help = "Seconds per Morse unit. A dot is 1 unit, a dash 3, a word gap 7."
    )]
    pub multiplier: Multiplier,

    #[arg(
        long,
        default_value = DEFAULT_ON_COMMAND,
        help = "Text written to the device to turn it ON."
    )]
    pub on_command: String,

    #[arg(
        long,
        default_value = DEFAULT_OFF_COMMAND,
        help = "Text written to the device to turn it OFF."
    )]
    pub off_command: String,

    #[arg(
        long,
        value_enum,
        ignore_case = true,
        default_value = "on",
        alias = "default-led-status",
        help = "Device state after blinking ends, however it ends."
    )]
    pub rest_state: RestState,

    #[arg(
        short = 'l',
        long,
        default_value = DEFAULT_LED_PATH,
        help = "Device control to write the ON and OFF commands to."
    )]
    pub led_path: PathBuf,

    #[arg(
        short = 'c',
        long,
        help = "JSON file of Morse codes for every character, eg: {\"A\": \".-\"}. \
                Replaces the packaged table, which covers A-Z, 0-9 and punctuation."
    )]
    pub codes_file: Option<PathBuf>,

    #[arg(short = 'i', long, help = "Read the message from a file.")]
    pub input: Option<PathBuf>,

    #[arg(short = 's', long, help = "Read the message from standard input.")]
    pub stdin: bool,

    #[arg(long, help = "Prompt for the message without echoing it.")]
    pub hidden: bool,

    #[arg(
        long,
        help = "Print the Morse code and how long it would take, without blinking."
    )]
    pub dry_run: bool,

    #[arg(short = 'q', long, help = "Don't show which symbol is being written.")]
    pub quiet: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        short = 'L',
        long,
        help = "Log app output to a file (see `--log-file`) for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = DEFAULT_LOG_FILE_NAME,
        help = "Log file used with `--enable-logging`."
    )]
    pub log_file: String,

    #[arg(
        global = true,
        long,
        help = "Also log to stderr. Works with or without `--enable-logging`."
    )]
    pub log_to_stderr: bool,
}

impl GlobalOption {
    /// DEBUG logs to the log file with `--enable-logging`, to stderr with
    /// `--log-to-stderr`, or both. Logging is off otherwise.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        let maybe_file: Option<TracingConfig> = self
            .enable_logging
            .then(|| WriterConfig::File(self.log_file.clone()).into());
        let maybe_display: Option<TracingConfig> =
            self.log_to_stderr.then(|| DisplayPreference::Stderr.into());

        match (maybe_display, maybe_file) {
            (None, None) => LevelFilter::OFF.into(),
            (Some(it), None) | (None, Some(it)) => it,
            (Some(display), Some(file)) => display + file,
        }
    }
}

impl CLIArg {
    #[must_use]
    pub fn input_source(&self) -> InputSource {
        match (&self.input, self.stdin, self.hidden) {
            (Some(path), _, _) => InputSource::File(path.clone()),
            (None, true, _) => InputSource::Stdin,
            (None, false, true) => InputSource::HiddenPrompt,
            (None, false, false) => InputSource::InteractivePrompt,
        }
    }
}

impl From<CLIArg> for BlinkConfig {
    fn from(cli_arg: CLIArg) -> Self {
        let input_source = cli_arg.input_source();
        Self {
            multiplier: cli_arg.multiplier,
            led_path: cli_arg.led_path,
            on_command: cli_arg.on_command,
            off_command: cli_arg.off_command,
            rest_state: cli_arg.rest_state,
            maybe_codes_file: cli_arg.codes_file,
            input_source,
            dry_run: cli_arg.dry_run,
            quiet: cli_arg.quiet,
        }
    }
}

#[cfg(test)]
mod tests_clap_config {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_command_definition_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_defaults() {
        let config: BlinkConfig = CLIArg::try_parse_from(["tmorse"]).unwrap().into();
        assert_eq!(config, BlinkConfig::default());
    }

    #[test]
    fn test_all_device_options() {
        let cli_arg = CLIArg::try_parse_from([
            "tmorse",
            "--on-command",
            "2",
            "--off-command",
            "0",
            "-l",
            "/proc/acpi/ibm/kbdlight",
            "-m",
            "0.7",
            "--default-led-status",
            "OFF",
        ])
        .unwrap();
        let config: BlinkConfig = cli_arg.into();

        assert_eq!(config.on_command, "2");
        assert_eq!(config.off_command, "0");
        assert_eq!(config.led_path, PathBuf::from("/proc/acpi/ibm/kbdlight"));
        assert_eq!(config.multiplier.as_secs_f64(), 0.7);
        assert_eq!(config.rest_state, RestState::Off);
    }

    #[test]
    fn test_input_modes() {
        let parse = |args: &[&str]| -> InputSource {
            let mut argv = vec!["tmorse"];
            argv.extend_from_slice(args);
            CLIArg::try_parse_from(argv).unwrap().input_source()
        };

        assert_eq!(parse(&[]), InputSource::InteractivePrompt);
        assert_eq!(parse(&["--stdin"]), InputSource::Stdin);
        assert_eq!(parse(&["-s"]), InputSource::Stdin);
        assert_eq!(parse(&["--hidden"]), InputSource::HiddenPrompt);
        assert_eq!(
            parse(&["-i", "message.txt"]),
            InputSource::File(PathBuf::from("message.txt"))
        );
    }

    #[test]
    fn test_input_modes_are_mutually_exclusive() {
        let result = CLIArg::try_parse_from(["tmorse", "--stdin", "--hidden"]);
        assert!(result.is_err());

        let result = CLIArg::try_parse_from(["tmorse", "-i", "message.txt", "-s"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_multiplier_is_rejected() {
        assert!(CLIArg::try_parse_from(["tmorse", "-m", "0"]).is_err());
        assert!(CLIArg::try_parse_from(["tmorse", "-m", "slow"]).is_err());
    }

    #[test]
    fn test_logging_options() {
        let cli_arg =
            CLIArg::try_parse_from(["tmorse", "-L", "--log-file", "x.log"]).unwrap();
        assert!(cli_arg.global_options.enable_logging);
        assert_eq!(cli_arg.global_options.log_file, "x.log");
        assert!(!cli_arg.global_options.log_to_stderr);
    }

    #[test_case(&[], LevelFilter::OFF, None ; "off by default")]
    #[test_case(
        &["-L", "--log-file", "x.log"],
        LevelFilter::DEBUG,
        Some(WriterConfig::File("x.log".to_string()))
        ; "file only"
    )]
    #[test_case(
        &["--log-to-stderr"],
        LevelFilter::DEBUG,
        Some(WriterConfig::Display(DisplayPreference::Stderr))
        ; "stderr only"
    )]
    #[test_case(
        &["-L", "--log-to-stderr"],
        LevelFilter::DEBUG,
        Some(WriterConfig::DisplayAndFile(
            DisplayPreference::Stderr,
            DEFAULT_LOG_FILE_NAME.to_string()
        ))
        ; "stderr and file"
    )]
    fn test_tracing_config(
        args: &[&str],
        expected_level_filter: LevelFilter,
        maybe_expected_writer_config: Option<WriterConfig>,
    ) {
        let argv: Vec<&str> = std::iter::once("tmorse").chain(args.iter().copied()).collect();
        let cli_arg = CLIArg::try_parse_from(argv).unwrap();
        let tracing_config = cli_arg.global_options.tracing_config();

        assert_eq!(tracing_config.level_filter, expected_level_filter);
        if let Some(expected_writer_config) = maybe_expected_writer_config {
            assert_eq!(tracing_config.writer_config, expected_writer_config);
        }
    }
}
