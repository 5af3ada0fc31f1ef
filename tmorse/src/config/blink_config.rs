// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          path::PathBuf,
          time::Duration};

use crate::{ConfigError, InputSource, RestState};

pub const DEFAULT_MULTIPLIER: f64 = 0.15;
pub const DEFAULT_LED_PATH: &str = "/proc/acpi/ibm/led";
pub const DEFAULT_ON_COMMAND: &str = "0 on";
pub const DEFAULT_OFF_COMMAND: &str = "0 off";

/// Seconds per Morse unit. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Multiplier(f64);

impl Multiplier {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMultiplier`] for zero, negative, NaN and infinite
    /// values, and for values too large to be a [`Duration`].
    pub fn try_new(seconds: f64) -> Result<Self, ConfigError> {
        if seconds.is_finite()
            && seconds > 0.0
            && Duration::try_from_secs_f64(seconds).is_ok()
        {
            Ok(Self(seconds))
        } else {
            Err(ConfigError::InvalidMultiplier {
                value: seconds.to_string(),
            })
        }
    }

    #[must_use]
    pub fn as_secs_f64(&self) -> f64 { self.0 }

    /// The length of `units` Morse units.
    #[must_use]
    pub fn duration_of(&self, units: u32) -> Duration {
        Duration::from_secs_f64(self.0).saturating_mul(units)
    }
}

impl Default for Multiplier {
    fn default() -> Self { Self(DEFAULT_MULTIPLIER) }
}

impl Display for Multiplier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// Value parser for `-m/--multiplier`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidMultiplier`] if `arg` isn't a positive finite number.
pub fn parse_multiplier(arg: &str) -> Result<Multiplier, ConfigError> {
    let seconds: f64 = arg.trim().parse().map_err(|_| ConfigError::InvalidMultiplier {
        value: arg.to_string(),
    })?;
    Multiplier::try_new(seconds)
}

/// Everything one run needs, validated. Built from [`crate::CLIArg`].
#[derive(Debug, Clone, PartialEq)]
pub struct BlinkConfig {
    pub multiplier: Multiplier,
    pub led_path: PathBuf,
    pub on_command: String,
    pub off_command: String,
    pub rest_state: RestState,
    pub maybe_codes_file: Option<PathBuf>,
    pub input_source: InputSource,
    pub dry_run: bool,
    pub quiet: bool,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            multiplier: Multiplier::default(),
            led_path: PathBuf::from(DEFAULT_LED_PATH),
            on_command: DEFAULT_ON_COMMAND.to_string(),
            off_command: DEFAULT_OFF_COMMAND.to_string(),
            rest_state: RestState::default(),
            maybe_codes_file: None,
            input_source: InputSource::InteractivePrompt,
            dry_run: false,
            quiet: false,
        }
    }
}
