// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The `tmorse` binary. See `tmorse --help` for the options.

use clap::Parser;
use miette::IntoDiagnostic;
use std::io::Write;
use tmorse::{BlinkConfig, BlinkPlan, CLIArg, CommonResult, FileLedLine, ISSUES_URL,
             ProgressReceiver, blink_text, check_device_writable, load_code_table, ok,
             progress_channel, setup_default_miette_global_report_handler,
             try_cancel_on_interrupt, try_initialize_logging_global, ui_str};

#[tokio::main]
async fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();

    setup_default_miette_global_report_handler(ISSUES_URL);

    let tracing_config = cli_arg.global_options.tracing_config();
    let enable_logging = tracing_config.get_level_filter() != tracing_core::LevelFilter::OFF;
    if enable_logging {
        try_initialize_logging_global(tracing_config).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let config: BlinkConfig = cli_arg.into();
    let result = run(&config).await;

    if let Err(report) = &result {
        // % is Display, ? is Debug.
        tracing::error!(
            message = "Could not run tmorse due to the following problem",
            error = ?report
        );
    }

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    result
}

async fn run(config: &BlinkConfig) -> CommonResult<()> {
    // Nothing is written to the device until every check has passed.
    if !config.dry_run {
        check_device_writable(&config.led_path)?;
    }
    let table = load_code_table(config.maybe_codes_file.as_deref())?;

    // Read the message before taking over Ctrl+C, so it still quits a prompt. The hidden
    // prompt handles Ctrl+C itself so it can turn echo back on.
    let text = config.input_source.acquire()?;

    if config.dry_run {
        let plan = BlinkPlan::try_new(&text, &table, config.multiplier)?;
        println!("{}", ui_str::dry_run_msg(&plan));
        return ok!();
    }

    let (cancel_signal, ctrl_c_task) = try_cancel_on_interrupt().into_diagnostic()?;

    let (maybe_progress_sender, maybe_render_task) = if config.quiet {
        (None, None)
    } else {
        let (sender, receiver) = progress_channel();
        (Some(sender), Some(tokio::spawn(render_progress(receiver))))
    };

    let mut line =
        FileLedLine::new(&config.led_path, &config.on_command, &config.off_command);
    let result = blink_text(
        &mut line,
        &text,
        &table,
        config,
        cancel_signal,
        maybe_progress_sender,
    )
    .await;

    // The sender is gone once blinking ends, so the renderer drains and stops.
    if let Some(render_task) = maybe_render_task {
        render_task.await.ok();
    }
    ctrl_c_task.abort();

    let report = result?;
    println!("{}", ui_str::outcome_msg(report.outcome, config.rest_state));

    ok!()
}

async fn render_progress(mut receiver: ProgressReceiver) {
    let mut stdout = std::io::stdout();
    while let Some(event) = receiver.recv().await {
        if let Some(line) = ui_str::progress_line(&event) {
            stdout.write_all(line.as_bytes()).ok();
            stdout.flush().ok();
        }
    }
}
