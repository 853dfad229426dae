//! Calorie Calculator
//!
//! Estimates basal metabolic rate, maintenance calories, a goal-adjusted
//! calorie target and a protein/carbs/fat breakdown from imperial
//! biometric inputs.
//!
//! ```
//! use calorie_calculator::{compute, ActivityLevel, CalorieOptions, Gender};
//!
//! let result = compute(&CalorieOptions {
//!     gender: Gender::Female,
//!     weight_lbs: 140.0,
//!     age_years: 25.0,
//!     height_inches: 65.0,
//!     goal_delta: -1.0,
//!     activity_level: ActivityLevel::Sedentary,
//! })?;
//! assert!((result.goal_calories - 1242.4).abs() < 1e-9);
//! # Ok::<(), calorie_calculator::CalorieError>(())
//! ```

pub mod calculator;
pub mod errors;
pub mod loader;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use calculator::compute;
pub use errors::CalorieError;
pub use loader::OptionsLoader;
pub use types::*;
