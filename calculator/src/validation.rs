//! Input validation functions
//!
//! Checks run at the boundary of the calculation, before any arithmetic.
//! Each returns the first failure as [`CalorieError::InvalidInput`].

use crate::errors::CalorieError;
use crate::types::CalorieOptions;

/// Valid activity levels
pub const VALID_ACTIVITY_LEVELS: &[&str] = &["sedentary", "light", "moderate", "active", "very_active"];

/// Valid gender values
pub const VALID_GENDERS: &[&str] = &["male", "female"];

fn validate_positive(field: &str, value: f64) -> Result<(), CalorieError> {
    if value.is_nan() || value.is_infinite() {
        return Err(CalorieError::invalid_input(field, "must be a valid number"));
    }
    if value <= 0.0 {
        return Err(CalorieError::invalid_input(
            field,
            format!("must be greater than 0, got {}", value),
        ));
    }
    Ok(())
}

/// Validate body weight (in lbs)
pub fn validate_weight_lbs(weight_lbs: f64) -> Result<(), CalorieError> {
    validate_positive("weight_lbs", weight_lbs)
}

/// Validate age (in years)
pub fn validate_age_years(age_years: f64) -> Result<(), CalorieError> {
    validate_positive("age_years", age_years)
}

/// Validate height (in inches)
pub fn validate_height_inches(height_inches: f64) -> Result<(), CalorieError> {
    validate_positive("height_inches", height_inches)
}

/// Validate weekly goal rate (in lbs/week)
///
/// Any finite value is accepted; sane rates are the caller's concern.
pub fn validate_goal_delta(goal_delta: f64) -> Result<(), CalorieError> {
    if goal_delta.is_nan() || goal_delta.is_infinite() {
        return Err(CalorieError::invalid_input("goal_delta", "must be a valid number"));
    }
    Ok(())
}

/// Validate every numeric field of the options
pub fn validate_options(options: &CalorieOptions) -> Result<(), CalorieError> {
    validate_weight_lbs(options.weight_lbs)?;
    validate_age_years(options.age_years)?;
    validate_height_inches(options.height_inches)?;
    validate_goal_delta(options.goal_delta)?;
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "gender" => "Gender",
        "weight_lbs" => "Weight",
        "age_years" => "Age",
        "height_inches" => "Height",
        "goal_delta" => "Weekly Goal",
        "activity_level" => "Activity Level",
        "options" => "Calorie Options",
        _ => field_name,
    }
}
