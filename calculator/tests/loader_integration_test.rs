//! Integration tests for layered option loading

mod common;

use std::io::Write;

use calorie_calculator::{compute, ActivityLevel, Gender, OptionsLoader};
use common::{assert_close, init_tracing};

const FEMALE_PROFILE: &str = r#"
gender = "female"
weight_lbs = 140
age_years = 25
height_inches = 65
goal_delta = -1
activity_level = "sedentary"
"#;

#[test]
fn test_environment_overrides_toml() {
    init_tracing();

    // Unique prefix per test; the process environment is shared
    std::env::set_var("CALTEST_OVERRIDE__ACTIVITY_LEVEL", "active");
    std::env::set_var("CALTEST_OVERRIDE__GOAL_DELTA", "0");

    let options = OptionsLoader::new()
        .with_toml_str(FEMALE_PROFILE)
        .with_env_prefix("CALTEST_OVERRIDE")
        .load()
        .unwrap();

    assert_eq!(options.gender, Gender::Female);
    assert_eq!(options.activity_level, ActivityLevel::Active);
    assert_eq!(options.goal_delta, 0.0);
    assert_eq!(options.weight_lbs, 140.0);
}

#[test]
fn test_environment_invalid_activity_level() {
    std::env::set_var("CALTEST_INVALID__ACTIVITY_LEVEL", "couch");

    let err = OptionsLoader::new()
        .with_toml_str(FEMALE_PROFILE)
        .with_env_prefix("CALTEST_INVALID")
        .load()
        .unwrap_err();

    assert!(err.is_invalid_input());
    assert_eq!(err.field(), Some("activity_level"));
}

#[test]
fn test_load_from_file_then_compute() {
    init_tracing();

    let path = std::env::temp_dir().join(format!("calorie-options-{}.toml", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(FEMALE_PROFILE.as_bytes()).unwrap();
    }

    let loaded = OptionsLoader::new().with_file(&path).load();
    std::fs::remove_file(&path).unwrap();

    let result = compute(&loaded.unwrap()).unwrap();
    assert_close(result.goal_calories, 1242.4, 1e-9);
    assert_close(result.macros.protein, 124.24, 1e-9);
}

#[test]
fn test_loaded_non_positive_weight_rejected() {
    let err = OptionsLoader::new()
        .with_toml_str(FEMALE_PROFILE)
        .with_toml_str("weight_lbs = -140")
        .load()
        .unwrap_err();

    assert!(err.is_invalid_input());
    assert_eq!(err.field(), Some("weight_lbs"));
}
