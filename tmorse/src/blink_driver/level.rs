// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

/// The two states of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    On,
    Off,
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::On => write!(f, "ON"),
            Level::Off => write!(f, "OFF"),
        }
    }
}

/// The level the device is left in once blinking ends, however it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RestState {
    #[default]
    On,
    Off,
}

impl From<RestState> for Level {
    fn from(rest_state: RestState) -> Self {
        match rest_state {
            RestState::On => Level::On,
            RestState::Off => Level::Off,
        }
    }
}
