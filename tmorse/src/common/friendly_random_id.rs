// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rand::{Rng, rngs::ThreadRng};

const SIGNAL_NAMES: [&str; 10] = [
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
    "juliett",
];

const LAMP_NAMES: [&str; 8] = [
    "beacon", "lantern", "flare", "signal", "strobe", "torch", "lamp", "glow",
];

/// Generates ids like `delta-beacon-042`. Used to name temp dirs so that parallel tests
/// don't collide.
#[must_use]
pub fn generate_friendly_random_id() -> String {
    let mut rng: ThreadRng = rand::rng();

    let signal = SIGNAL_NAMES[rng.random_range(0..SIGNAL_NAMES.len())];
    let lamp = LAMP_NAMES[rng.random_range(0..LAMP_NAMES.len())];
    let number: u32 = rng.random_range(0..1_000_000);

    format!("{signal}-{lamp}-{number:06}")
}
