//! Calorie and macronutrient calculations
//!
//! Computes BMR, maintenance calories, a goal-adjusted calorie target and a
//! macro split from imperial biometric inputs.
//!
//! # Pipeline
//!
//! 1. **Validate**: reject bad values before any arithmetic
//! 2. **BMR**: imperial Mifflin-St Jeor, branch chosen by gender
//! 3. **Maintenance**: BMR × activity multiplier
//! 4. **Goal**: maintenance + weekly rate converted to a daily offset
//! 5. **Macros**: split chosen by the sign of the goal rate

use tracing::{debug, warn};

use crate::errors::CalorieError;
use crate::types::{
    ActivityLevel, CalorieOptions, CalorieResult, Gender, GoalBranch, NutritionTarget,
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use crate::validation::validate_options;

/// kcal in one pound of body mass
pub const KCAL_PER_LB: f64 = 3500.0;

const DAYS_PER_WEEK: f64 = 7.0;

// ============================================================================
// Individual Steps
// ============================================================================

/// Calculate Basal Metabolic Rate (imperial Mifflin-St Jeor)
///
/// Men: BMR = 66 + 6.23 × weight(lbs) + 12.7 × height(in) - 6.8 × age(y)
/// Women: BMR = 655 + 4.35 × weight(lbs) + 4.7 × height(in) - 4.7 × age(y)
pub fn calculate_bmr(gender: Gender, weight_lbs: f64, height_inches: f64, age_years: f64) -> f64 {
    match gender {
        Gender::Male => 66.0 + 6.23 * weight_lbs + 12.7 * height_inches - 6.8 * age_years,
        Gender::Female => 655.0 + 4.35 * weight_lbs + 4.7 * height_inches - 4.7 * age_years,
    }
}

/// Maintenance = BMR × activity multiplier
pub fn calculate_maintenance(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Adjust maintenance by a weekly rate of change in lbs
///
/// The rate is not clamped.
pub fn calculate_goal_calories(maintenance: f64, goal_delta: f64) -> f64 {
    maintenance + goal_delta * KCAL_PER_LB / DAYS_PER_WEEK
}

/// Split goal calories into grams of protein, carbs and fat
pub fn calculate_macros(goal_calories: f64, branch: GoalBranch) -> NutritionTarget {
    let split = branch.macro_split();
    NutritionTarget {
        calories: goal_calories,
        protein: split.protein_pct * goal_calories / KCAL_PER_GRAM_PROTEIN,
        carbs: split.carbs_pct * goal_calories / KCAL_PER_GRAM_CARBS,
        fat: split.fat_pct * goal_calories / KCAL_PER_GRAM_FAT,
    }
}

// ============================================================================
// Full Calculation
// ============================================================================

/// Compute BMR, maintenance, goal calories and macros
///
/// # Errors
///
/// Returns [`CalorieError::InvalidInput`] if weight, age or height is not a
/// positive number, if the goal rate is not finite, or if the values are so
/// large that maintenance or goal calories overflow.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(
        gender = %options.gender,
        activity_level = %options.activity_level,
        goal_delta = options.goal_delta,
    )
)]
pub fn compute(options: &CalorieOptions) -> Result<CalorieResult, CalorieError> {
    if let Err(err) = validate_options(options) {
        warn!(field = err.field(), error = %err, "Rejected calorie options");
        return Err(err);
    }

    let bmr = calculate_bmr(
        options.gender,
        options.weight_lbs,
        options.height_inches,
        options.age_years,
    );
    let maintenance = calculate_maintenance(bmr, options.activity_level);
    if !maintenance.is_finite() {
        let err = CalorieError::invalid_input(
            "options",
            "biometric values are too large for a finite result",
        );
        warn!(field = err.field(), error = %err, "Rejected calorie options");
        return Err(err);
    }

    let goal_calories = calculate_goal_calories(maintenance, options.goal_delta);
    if !goal_calories.is_finite() {
        let err = CalorieError::invalid_input("goal_delta", "is too large for a finite result");
        warn!(field = err.field(), error = %err, "Rejected calorie options");
        return Err(err);
    }
    let branch = options.goal_branch();
    let macros = calculate_macros(goal_calories, branch);

    debug!(
        bmr,
        maintenance,
        goal_calories,
        branch = ?branch,
        protein_g = macros.protein,
        carbs_g = macros.carbs,
        fat_g = macros.fat,
        "Computed calorie targets"
    );

    Ok(CalorieResult {
        bmr,
        maintenance,
        goal_calories,
        macros,
    })
}
