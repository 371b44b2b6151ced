//! PureEats nutrition core
//!
//! Target calculation, food search, and daily log math for the PureEats app.

pub mod calculator;
pub mod commands;
pub mod models;
pub mod openfoodfacts;
pub mod tracker;

#[cfg(test)]
pub mod test_utils;

pub use calculator::{
  calculate, ActivityLevel, BiometricForm, BiometricInput, CalculationResult, CalculatorError,
  Gender, Goal, GoalPlans, Intensity, MacroPlan,
};
pub use models::{FoodItem, FoodLogEntry, MealType, NutritionTargets, Portion};
pub use openfoodfacts::FoodSearchError;
pub use tracker::{DailySummary, DailyTotals, RingProgress, ScaledNutrition};
