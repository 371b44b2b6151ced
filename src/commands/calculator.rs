use crate::calculator::{
  self, BiometricForm, BiometricInput, CalculationResult, CalculatorError, Goal, Intensity,
};
use crate::models::targets::NutritionTargets;

/// ---------------------------------------------------------------------------
/// Target Calculation Commands
/// ---------------------------------------------------------------------------

/// Run the full calculation for validated biometrics
pub fn calculate_targets(input: BiometricInput) -> Result<CalculationResult, CalculatorError> {
  let result = calculator::calculate(&input)?;
  println!(
    "Calculated targets: maintenance {} kcal, recommending {}",
    result.maintenance.calories, result.recommended_goal
  );
  Ok(result)
}

/// Run the full calculation straight from raw form fields
pub fn calculate_targets_from_form(
  form: &BiometricForm,
) -> Result<CalculationResult, CalculatorError> {
  let input = form.parse()?;
  calculate_targets(input)
}

/// ---------------------------------------------------------------------------
/// Plan Selection Commands
/// ---------------------------------------------------------------------------

/// Freeze the user's chosen plan into saved targets
pub fn select_nutrition_targets(
  result: &CalculationResult,
  goal: Goal,
  intensity: Intensity,
) -> NutritionTargets {
  let plan = calculator::select_plan(result, goal, intensity);
  let targets = NutritionTargets::from_selection(goal, intensity, plan);
  match targets.intensity {
    Some(intensity) => println!(
      "Selected {} {} plan at {} kcal",
      intensity.as_str(),
      goal,
      targets.target_calories
    ),
    None => println!("Selected {} plan at {} kcal", goal, targets.target_calories),
  }
  targets
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;

  #[test]
  fn test_calculate_targets() {
    let result = calculate_targets(mock_biometrics()).unwrap();
    assert_eq!(result.maintenance.calories, 2720);
    assert_eq!(result.recommended_goal, Goal::Maintain);
  }

  #[test]
  fn test_calculate_targets_rejects_invalid() {
    let mut input = mock_biometrics();
    input.weight_kg = -1.0;
    assert!(calculate_targets(input).is_err());
  }

  #[test]
  fn test_calculate_targets_from_form() {
    let form = BiometricForm {
      gender: "male".into(),
      age: "25".into(),
      height: "180".into(),
      weight: "75".into(),
      activity_level: "moderate".into(),
    };
    let result = calculate_targets_from_form(&form).unwrap();
    assert_eq!(result.maintenance.calories, 2720);
  }

  #[test]
  fn test_calculate_targets_from_form_surfaces_field_errors() {
    let form = BiometricForm {
      gender: "male".into(),
      age: "".into(),
      height: "180".into(),
      weight: "75".into(),
      activity_level: "moderate".into(),
    };
    let err = calculate_targets_from_form(&form).unwrap_err();
    assert!(err.to_string().contains("age"));
  }

  #[test]
  fn test_select_nutrition_targets_maintain_drops_intensity() {
    let result = calculate_targets(mock_biometrics()).unwrap();
    let targets = select_nutrition_targets(&result, Goal::Maintain, Intensity::Intense);

    assert_eq!(targets.goal, Goal::Maintain);
    assert!(targets.intensity.is_none());
    assert_eq!(targets.target_calories, 2720);
  }

  #[test]
  fn test_select_nutrition_targets_weight_loss() {
    let result = calculate_targets(mock_biometrics()).unwrap();
    let targets = select_nutrition_targets(&result, Goal::WeightLoss, Intensity::Moderate);

    assert_eq!(targets.goal, Goal::WeightLoss);
    assert_eq!(targets.intensity, Some(Intensity::Moderate));
    assert_eq!(targets.target_calories, 2220);
    assert_eq!(targets.target_protein, 194);
  }
}
