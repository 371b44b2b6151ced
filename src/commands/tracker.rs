use chrono::NaiveDate;

use crate::models::food::{FoodItem, FoodLogEntry, MealType, Portion};
use crate::models::targets::NutritionTargets;
use crate::tracker::{self, DailySummary};

/// ---------------------------------------------------------------------------
/// Food Logging Commands
/// ---------------------------------------------------------------------------

/// Record a portion of a food against a meal on a date
pub fn log_food(
  food: &FoodItem,
  meal_type: MealType,
  quantity: f64,
  unit: &str,
  portions: &[Portion],
  log_date: NaiveDate,
) -> FoodLogEntry {
  let entry = tracker::build_log_entry(food, meal_type, quantity, unit, portions, log_date);
  println!(
    "Logged {} {} of {} to {} on {}",
    entry.quantity, entry.unit, entry.food_name, entry.meal_type, entry.log_date
  );
  entry
}

/// ---------------------------------------------------------------------------
/// Daily Summary Commands
/// ---------------------------------------------------------------------------

/// Totals, ring fills, and the per-meal breakdown for one day of entries
pub fn daily_summary(
  entries: &[FoodLogEntry],
  date: NaiveDate,
  targets: &NutritionTargets,
) -> DailySummary {
  DailySummary::compute(entries, date, targets)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
