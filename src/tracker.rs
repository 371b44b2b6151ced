//! Daily log math: portion scaling, totals, and progress rings
//!
//! Pure functions over caller-supplied log entries. The caller owns storage
//! of entries and targets; this module only does the arithmetic the logging
//! and dashboard screens need.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::food::{FoodItem, FoodLogEntry, MealType, Portion};
use crate::models::targets::NutritionTargets;

/// ---------------------------------------------------------------------------
/// Portion Scaling
/// ---------------------------------------------------------------------------

/// Nutrition for one concrete portion, scaled from per-100g values and
/// rounded to two decimals for display and logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledNutrition {
  pub calories: f64,
  pub protein: f64,
  pub fat: f64,
  pub carbs: f64,
}

/// Scale a food's per-100g nutrition to `quantity` of `unit`.
///
/// Grams scale directly. Any other unit is looked up in the food's portion
/// list and converted via its gram weight; an unknown unit falls back to
/// gram math, matching the logging screen's behavior.
pub fn scale_nutrition(
  food: &FoodItem,
  quantity: f64,
  unit: &str,
  portions: &[Portion],
) -> ScaledNutrition {
  let multiplier = if unit == "g" {
    1.0
  } else {
    portions
      .iter()
      .find(|p| p.modifier == unit)
      .map(|p| p.gram_weight / p.amount)
      .unwrap_or(1.0)
  };

  let ratio = (quantity * multiplier) / 100.0;

  ScaledNutrition {
    calories: round2(food.calories * ratio),
    protein: round2(food.protein * ratio),
    fat: round2(food.fat * ratio),
    carbs: round2(food.carbs * ratio),
  }
}

fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

/// Build the log entry for a portion of a food, capturing the scaled macros
/// plus what the user actually entered.
pub fn build_log_entry(
  food: &FoodItem,
  meal_type: MealType,
  quantity: f64,
  unit: &str,
  portions: &[Portion],
  log_date: NaiveDate,
) -> FoodLogEntry {
  let scaled = scale_nutrition(food, quantity, unit, portions);

  FoodLogEntry {
    meal_type,
    food_name: food.name.clone(),
    log_date,
    calories: scaled.calories,
    carbs: scaled.carbs,
    fats: scaled.fat,
    protein: scaled.protein,
    quantity,
    unit: unit.to_string(),
    created_at: Utc::now(),
  }
}

/// ---------------------------------------------------------------------------
/// Daily Totals
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
  pub calories: f64,
  pub protein: f64,
  pub carbs: f64,
  pub fat: f64,
}

impl DailyTotals {
  /// Sum one day's entries
  pub fn compute(entries: &[FoodLogEntry], date: NaiveDate) -> Self {
    let mut totals = Self {
      calories: 0.0,
      protein: 0.0,
      carbs: 0.0,
      fat: 0.0,
    };

    for entry in entries.iter().filter(|e| e.log_date == date) {
      totals.calories += entry.calories;
      totals.protein += entry.protein;
      totals.carbs += entry.carbs;
      totals.fat += entry.fats;
    }

    totals
  }
}

/// Calorie subtotal for one meal of the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealCalories {
  pub meal_type: MealType,
  pub calories: f64,
}

/// One row per meal type in fixed display order; meals with no entries
/// report zero.
pub fn calories_by_meal(entries: &[FoodLogEntry], date: NaiveDate) -> Vec<MealCalories> {
  MealType::ALL
    .iter()
    .map(|&meal_type| {
      let calories = entries
        .iter()
        .filter(|e| e.log_date == date && e.meal_type == meal_type)
        .map(|e| e.calories)
        .sum();
      MealCalories {
        meal_type,
        calories,
      }
    })
    .collect()
}

/// The day's entries for one meal, for the per-meal log screen
pub fn entries_for_meal<'a>(
  entries: &'a [FoodLogEntry],
  date: NaiveDate,
  meal_type: MealType,
) -> Vec<&'a FoodLogEntry> {
  entries
    .iter()
    .filter(|e| e.log_date == date && e.meal_type == meal_type)
    .collect()
}

/// ---------------------------------------------------------------------------
/// Progress Rings
/// ---------------------------------------------------------------------------

/// Fill state for one progress ring. The fill never passes 100 even when
/// over target; the over flag drives the color switch instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingProgress {
  pub percent: f64,
  pub over_target: bool,
}

impl RingProgress {
  pub fn compute(value: f64, goal: f64) -> Self {
    let percent = if goal > 0.0 {
      ((value / goal) * 100.0).min(100.0)
    } else {
      0.0
    };

    Self {
      percent,
      over_target: value > goal && goal > 0.0,
    }
  }
}

/// The four dashboard rings for a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
  pub calories: RingProgress,
  pub protein: RingProgress,
  pub carbs: RingProgress,
  pub fat: RingProgress,
}

impl DailyProgress {
  pub fn compute(totals: &DailyTotals, targets: &NutritionTargets) -> Self {
    Self {
      calories: RingProgress::compute(totals.calories, targets.target_calories as f64),
      protein: RingProgress::compute(totals.protein, targets.target_protein as f64),
      carbs: RingProgress::compute(totals.carbs, targets.target_carbs as f64),
      fat: RingProgress::compute(totals.fat, targets.target_fats as f64),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Day Summary
/// ---------------------------------------------------------------------------

/// Everything the dashboard needs for one day: totals, ring fills, and the
/// per-meal calorie breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
  pub date: NaiveDate,
  pub totals: DailyTotals,
  pub progress: DailyProgress,
  pub meals: Vec<MealCalories>,
}

impl DailySummary {
  pub fn compute(entries: &[FoodLogEntry], date: NaiveDate, targets: &NutritionTargets) -> Self {
    let totals = DailyTotals::compute(entries, date);
    let progress = DailyProgress::compute(&totals, targets);
    let meals = calories_by_meal(entries, date);

    Self {
      date,
      totals,
      progress,
      meals,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
