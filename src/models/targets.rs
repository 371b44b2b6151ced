use serde::{Deserialize, Serialize};

use crate::calculator::{Goal, Intensity, MacroPlan};

/// The targets record the app persists after the user picks a plan.
/// Field names match the stored profile row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTargets {
  pub goal: Goal,
  /// None for Maintain; the stored row carries null there
  pub intensity: Option<Intensity>,
  pub target_calories: i32,
  pub target_protein: i32,
  pub target_carbs: i32,
  pub target_fats: i32,
}

impl NutritionTargets {
  /// Build the record from a chosen goal/intensity and its plan.
  /// Maintenance drops the intensity axis entirely.
  pub fn from_selection(goal: Goal, intensity: Intensity, plan: &MacroPlan) -> Self {
    Self {
      goal,
      intensity: match goal {
        Goal::Maintain => None,
        _ => Some(intensity),
      },
      target_calories: plan.calories,
      target_protein: plan.protein,
      target_carbs: plan.carbs,
      target_fats: plan.fats,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
