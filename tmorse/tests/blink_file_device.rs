// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end runs against a regular file standing in for the device control.

use pretty_assertions::assert_eq;
use std::{path::{Path, PathBuf},
          time::Duration};
use tmorse::{BlinkConfig, BlinkOutcome, CancelSignal, ConfigError, DriveError,
             EncodeError, FileLedLine, InputSource, LedLine, Level, Multiplier,
             PipelineError, RestState, blink_text, cancel_channel, check_device_writable,
             load_code_table, try_create_temp_dir};

/// Wraps the real device line and keeps the command of every successful write.
#[derive(Debug)]
struct CommandLog {
    inner: FileLedLine,
    commands: Vec<String>,
}

impl CommandLog {
    fn new(inner: FileLedLine) -> Self {
        Self {
            inner,
            commands: vec![],
        }
    }
}

impl LedLine for CommandLog {
    fn write_level(&mut self, level: Level) -> Result<(), DriveError> {
        self.inner.write_level(level)?;
        self.commands.push(self.inner.command_for(level).to_string());
        Ok(())
    }
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn config_for(device: &Path, message: &Path, rest_state: RestState) -> BlinkConfig {
    BlinkConfig {
        multiplier: Multiplier::try_new(0.125).unwrap(),
        led_path: device.to_path_buf(),
        rest_state,
        input_source: InputSource::File(message.to_path_buf()),
        ..Default::default()
    }
}

#[tokio::test(start_paused = true)]
async fn test_sos_from_file_ends_in_rest_state() -> miette::Result<()> {
    let dir = try_create_temp_dir()?;
    let device = write_file(&dir, "led", "");
    let message = write_file(&dir, "message.txt", "sos\n");
    let config = config_for(&device, &message, RestState::Off);

    check_device_writable(&config.led_path)?;
    let table = load_code_table(None)?;
    let text = config.input_source.acquire()?;

    let mut line = CommandLog::new(FileLedLine::new(
        &config.led_path,
        &config.on_command,
        &config.off_command,
    ));
    let start = tokio::time::Instant::now();
    let report =
        blink_text(&mut line, &text, &table, &config, CancelSignal::never(), None).await?;
    let elapsed = start.elapsed();

    assert_eq!(report.morse.as_str(), "... --- ... ");
    assert_eq!(report.outcome, BlinkOutcome::Completed);
    assert!(elapsed >= Duration::from_millis(3375));
    assert!(elapsed < Duration::from_millis(3400));

    // 18 pulses and one rest state write.
    assert_eq!(line.commands.len(), 19);
    assert_eq!(line.commands.first().unwrap(), "0 on");
    assert_eq!(std::fs::read_to_string(&device).unwrap(), "0 off");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_custom_codes_and_commands() -> miette::Result<()> {
    let dir = try_create_temp_dir()?;
    let device = write_file(&dir, "kbdlight", "");
    let message = write_file(&dir, "message.txt", "مم م");
    let codes = write_file(&dir, "codes.json", r#"{"م": "--"}"#);
    let config = BlinkConfig {
        on_command: "2".to_string(),
        off_command: "0".to_string(),
        maybe_codes_file: Some(codes),
        ..config_for(&device, &message, RestState::On)
    };

    let table = load_code_table(config.maybe_codes_file.as_deref())?;
    let text = config.input_source.acquire()?;
    let mut line = CommandLog::new(FileLedLine::new(
        &config.led_path,
        &config.on_command,
        &config.off_command,
    ));
    let report =
        blink_text(&mut line, &text, &table, &config, CancelSignal::never(), None).await?;

    assert_eq!(report.morse.as_str(), "-- -- /-- ");
    assert_eq!(
        line.commands,
        ["2", "0", "2", "0", "2", "0", "2", "0", "2", "0", "2", "0", "2"]
    );
    assert_eq!(std::fs::read_to_string(&device).unwrap(), "2");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_unencodable_message_only_restores_device() -> miette::Result<()> {
    let dir = try_create_temp_dir()?;
    let device = write_file(&dir, "led", "untouched");
    let message = write_file(&dir, "message.txt", "SOS");
    let codes = write_file(&dir, "codes.json", r#"{"O": "---"}"#);
    let config = BlinkConfig {
        maybe_codes_file: Some(codes),
        ..config_for(&device, &message, RestState::On)
    };

    let table = load_code_table(config.maybe_codes_file.as_deref())?;
    let text = config.input_source.acquire()?;
    let mut line = CommandLog::new(FileLedLine::new(
        &config.led_path,
        &config.on_command,
        &config.off_command,
    ));
    let result =
        blink_text(&mut line, &text, &table, &config, CancelSignal::never(), None).await;

    assert!(matches!(
        result,
        Err(PipelineError::Encode(EncodeError::UnknownCharacter {
            character: 'S',
            position: 0
        }))
    ));
    assert_eq!(line.commands, ["0 on"]);
    assert_eq!(std::fs::read_to_string(&device).unwrap(), "0 on");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_interrupt_mid_message_restores_device_once() -> miette::Result<()> {
    let dir = try_create_temp_dir()?;
    let device = write_file(&dir, "led", "");
    let message = write_file(&dir, "message.txt", "HI THERE");
    let config = config_for(&device, &message, RestState::Off);

    let table = load_code_table(None)?;
    let text = config.input_source.acquire()?;
    let (cancel_handle, cancel_signal) = cancel_channel();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(2)).await;
        cancel_handle.cancel();
    });

    let mut line = CommandLog::new(FileLedLine::new(
        &config.led_path,
        &config.on_command,
        &config.off_command,
    ));
    let report = blink_text(&mut line, &text, &table, &config, cancel_signal, None).await?;

    let BlinkOutcome::Interrupted { pulses_applied } = report.outcome else {
        panic!("Expected an interrupted run, got {:?}", report.outcome);
    };
    // One pulse was cut short, then the rest state.
    assert_eq!(line.commands.len(), pulses_applied + 2);
    assert_eq!(line.commands.last().unwrap(), "0 off");
    assert_eq!(std::fs::read_to_string(&device).unwrap(), "0 off");
    Ok(())
}

#[test]
fn test_missing_device_fails_before_any_write() -> miette::Result<()> {
    let dir = try_create_temp_dir()?;
    let device = dir.join("no_such_led");

    let result = check_device_writable(&device);
    assert!(matches!(result, Err(ConfigError::DeviceNotWritable { .. })));
    assert!(!device.exists());
    Ok(())
}
