//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Mock data factories
//! - Date helpers
//! - Helper assertions

use crate::calculator::{ActivityLevel, BiometricInput, Gender, Goal, Intensity, MacroPlan};
use crate::models::food::{FoodItem, FoodLogEntry, MealType, Portion};
use crate::models::targets::NutritionTargets;
use chrono::{Duration, NaiveDate, Utc};

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Create mock biometrics for testing
pub fn mock_biometrics() -> BiometricInput {
  BiometricInput {
    gender: Gender::Male,
    age: 25.0,
    height_cm: 180.0,
    weight_kg: 75.0,
    activity_level: ActivityLevel::Moderate,
  }
}

/// Create a mock food item with per-100g nutrition
pub fn mock_food_item() -> FoodItem {
  FoodItem {
    name: "Rolled oats".to_string(),
    calories: 389.0,
    protein: 16.9,
    fat: 6.9,
    carbs: 66.3,
    image: None,
    serving_size: "100g".to_string(),
  }
}

/// Create a mock household portion definition
pub fn mock_portion(modifier: &str, amount: f64, gram_weight: f64) -> Portion {
  Portion {
    modifier: modifier.to_string(),
    amount,
    gram_weight,
  }
}

/// Create a mock log entry for a meal and date
pub fn mock_log_entry(meal_type: MealType, log_date: NaiveDate, calories: f64) -> FoodLogEntry {
  FoodLogEntry {
    meal_type,
    food_name: "Rolled oats".to_string(),
    log_date,
    calories,
    carbs: 30.0,
    fats: 8.0,
    protein: 15.0,
    quantity: 100.0,
    unit: "g".to_string(),
    created_at: Utc::now(),
  }
}

/// Create mock saved targets (maintenance at the reference numbers)
pub fn mock_targets() -> NutritionTargets {
  NutritionTargets::from_selection(
    Goal::Maintain,
    Intensity::Moderate,
    &MacroPlan {
      calories: 2720,
      protein: 204,
      carbs: 272,
      fats: 91,
    },
  )
}

/// ---------------------------------------------------------------------------
/// Date Helpers
/// ---------------------------------------------------------------------------

/// Create a log date N days before today
pub fn date_days_ago(days: i64) -> NaiveDate {
  Utc::now().date_naive() - Duration::days(days)
}

/// Create a fixed log date
pub fn date_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let biometrics = mock_biometrics();
    assert!(biometrics.validate().is_ok());

    let food = mock_food_item();
    assert_eq!(food.serving_size, "100g");
    assert!(food.calories > 0.0);

    let portion = mock_portion("cup", 1.0, 81.0);
    assert_eq!(portion.gram_weight, 81.0);

    let entry = mock_log_entry(MealType::Lunch, date_ymd(2025, 6, 1), 450.0);
    assert_eq!(entry.meal_type, MealType::Lunch);
    assert_eq!(entry.calories, 450.0);

    let targets = mock_targets();
    assert_eq!(targets.goal, Goal::Maintain);
    assert!(targets.intensity.is_none());
  }

  #[test]
  fn test_date_helpers_produce_correct_dates() {
    let today = Utc::now().date_naive();
    let week_ago = date_days_ago(7);
    assert_eq!((today - week_ago).num_days(), 7);

    assert_eq!(date_ymd(2025, 6, 1).to_string(), "2025-06-01");
  }

  #[test]
  fn test_assert_approx_eq_within_tolerance() {
    crate::assert_approx_eq!(1.0005_f64, 1.0_f64, 0.01);
  }
}
