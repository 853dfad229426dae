//! Input and output records for the calorie calculation
//!
//! All values are imperial: pounds, inches, years, kcal and grams.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CalorieError;
use crate::validation::{validate_options, VALID_ACTIVITY_LEVELS, VALID_GENDERS};

/// kcal per gram of protein
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
/// kcal per gram of carbohydrate
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ============================================================================
// Enumerations
// ============================================================================

/// Gender, selects the BMR formula branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = CalorieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(CalorieError::invalid_input(
                "gender",
                format!(
                    "unknown gender {:?}, must be one of: {}",
                    s,
                    VALID_GENDERS.join(", ")
                ),
            )),
        }
    }
}

/// Activity level, selects the maintenance multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Multiplier applied to BMR to get maintenance calories
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = CalorieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| {
                CalorieError::invalid_input(
                    "activity_level",
                    format!(
                        "unknown activity level {:?}, must be one of: {}",
                        s,
                        VALID_ACTIVITY_LEVELS.join(", ")
                    ),
                )
            })
    }
}

/// Direction of the weight goal, taken from the sign of the goal delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalBranch {
    Loss,
    Maintenance,
    Gain,
}

impl GoalBranch {
    pub fn from_goal_delta(goal_delta: f64) -> Self {
        if goal_delta < 0.0 {
            GoalBranch::Loss
        } else if goal_delta > 0.0 {
            GoalBranch::Gain
        } else {
            GoalBranch::Maintenance
        }
    }

    /// Share of goal calories given to each macronutrient
    pub fn macro_split(&self) -> MacroSplit {
        match self {
            GoalBranch::Loss => MacroSplit {
                protein_pct: 0.4,
                carbs_pct: 0.4,
                fat_pct: 0.2,
            },
            GoalBranch::Maintenance => MacroSplit {
                protein_pct: 0.3,
                carbs_pct: 0.4,
                fat_pct: 0.3,
            },
            GoalBranch::Gain => MacroSplit {
                protein_pct: 0.3,
                carbs_pct: 0.5,
                fat_pct: 0.2,
            },
        }
    }
}

/// Macronutrient shares of total kcal, as fractions summing to 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

// ============================================================================
// Records
// ============================================================================

/// Biometric and lifestyle inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieOptions {
    pub gender: Gender,
    /// Body weight in pounds
    pub weight_lbs: f64,
    /// Age in years
    pub age_years: f64,
    /// Height in inches
    pub height_inches: f64,
    /// Target rate of change in lbs/week (negative = loss)
    pub goal_delta: f64,
    pub activity_level: ActivityLevel,
}

impl CalorieOptions {
    pub fn goal_branch(&self) -> GoalBranch {
        GoalBranch::from_goal_delta(self.goal_delta)
    }
}

/// Untyped form of [`CalorieOptions`], as read from text sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieOptionsRecord {
    pub gender: String,
    pub weight_lbs: f64,
    pub age_years: f64,
    pub height_inches: f64,
    pub goal_delta: f64,
    pub activity_level: String,
}

impl TryFrom<CalorieOptionsRecord> for CalorieOptions {
    type Error = CalorieError;

    fn try_from(record: CalorieOptionsRecord) -> Result<Self, Self::Error> {
        let options = CalorieOptions {
            gender: record.gender.parse()?,
            weight_lbs: record.weight_lbs,
            age_years: record.age_years,
            height_inches: record.height_inches,
            goal_delta: record.goal_delta,
            activity_level: record.activity_level.parse()?,
        };
        validate_options(&options)?;
        Ok(options)
    }
}

/// Daily calorie and macronutrient target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTarget {
    /// kcal/day
    pub calories: f64,
    /// grams
    pub protein: f64,
    /// grams
    pub carbs: f64,
    /// grams
    pub fat: f64,
}

impl NutritionTarget {
    /// kcal reconstituted from the gram amounts
    pub fn total_kcal(&self) -> f64 {
        self.protein * KCAL_PER_GRAM_PROTEIN
            + self.carbs * KCAL_PER_GRAM_CARBS
            + self.fat * KCAL_PER_GRAM_FAT
    }
}

/// Calculation output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieResult {
    /// Basal metabolic rate, kcal/day
    pub bmr: f64,
    /// BMR scaled by activity, kcal/day
    pub maintenance: f64,
    /// Maintenance adjusted for the weekly goal, kcal/day
    pub goal_calories: f64,
    pub macros: NutritionTarget,
}
