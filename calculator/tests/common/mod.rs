//! Common test utilities for integration tests

#![allow(dead_code)]

use calorie_calculator::{ActivityLevel, CalorieOptions, Gender};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly tracing subscriber (RUST_LOG controls the level)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build options from the usual positional scenario values
pub fn options(
    gender: Gender,
    weight_lbs: f64,
    age_years: f64,
    height_inches: f64,
    goal_delta: f64,
    activity_level: ActivityLevel,
) -> CalorieOptions {
    CalorieOptions {
        gender,
        weight_lbs,
        age_years,
        height_inches,
        goal_delta,
        activity_level,
    }
}

/// Assert two floats agree to within an absolute tolerance
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} (±{}), got {}",
        expected,
        tolerance,
        actual
    );
}
