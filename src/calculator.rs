//! Nutrition target calculation
//!
//! This module computes calorie and macro targets from a user's biometric
//! profile: Mifflin-St Jeor BMR, activity-adjusted TDEE, a BMI-based goal
//! recommendation, and macro plans for every goal/intensity combination.
//! Pure math with no I/O; the UI layer owns collecting inputs and
//! persisting whichever plan the user picks.

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Calculation Constants
/// ---------------------------------------------------------------------------

const CALORIES_PER_GRAM_PROTEIN: f64 = 4.0;
const CALORIES_PER_GRAM_CARBS: f64 = 4.0;
const CALORIES_PER_GRAM_FAT: f64 = 9.0;

/// Maintenance ratio split: 30% protein / 40% carbs / 30% fat
const MAINTENANCE_RATIOS: (f64, f64, f64) = (0.30, 0.40, 0.30);

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CalculatorError {
  #[error("Invalid input: {0}")]
  InvalidInput(String),
}

/// ---------------------------------------------------------------------------
/// Gender
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
  Male,
  Female,
  Other,
}

impl std::str::FromStr for Gender {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "male" => Ok(Gender::Male),
      "female" => Ok(Gender::Female),
      "other" => Ok(Gender::Other),
      _ => Err(format!("Unknown gender: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Activity Level
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
  Sedentary,  // Little or no exercise
  Light,      // 1-2 days/week
  Moderate,   // 3-5 days/week
  Active,     // 6-7 days/week
  VeryActive, // Intense daily exercise
}

impl ActivityLevel {
  pub const ALL: [ActivityLevel; 5] = [
    ActivityLevel::Sedentary,
    ActivityLevel::Light,
    ActivityLevel::Moderate,
    ActivityLevel::Active,
    ActivityLevel::VeryActive,
  ];

  /// TDEE multiplier applied to BMR
  pub fn multiplier(&self) -> f64 {
    match self {
      ActivityLevel::Sedentary => 1.2,
      ActivityLevel::Light => 1.375,
      ActivityLevel::Moderate => 1.55,
      ActivityLevel::Active => 1.725,
      ActivityLevel::VeryActive => 1.9,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ActivityLevel::Sedentary => "sedentary",
      ActivityLevel::Light => "light",
      ActivityLevel::Moderate => "moderate",
      ActivityLevel::Active => "active",
      ActivityLevel::VeryActive => "veryActive",
    }
  }

  /// Display label for option lists
  pub fn label(&self) -> &'static str {
    match self {
      ActivityLevel::Sedentary => "Sedentary",
      ActivityLevel::Light => "Light",
      ActivityLevel::Moderate => "Moderate",
      ActivityLevel::Active => "Active",
      ActivityLevel::VeryActive => "Very Active",
    }
  }

  /// Short description shown under the label
  pub fn description(&self) -> &'static str {
    match self {
      ActivityLevel::Sedentary => "Little or no exercise",
      ActivityLevel::Light => "1-2 days/week",
      ActivityLevel::Moderate => "3-5 days/week",
      ActivityLevel::Active => "6-7 days/week",
      ActivityLevel::VeryActive => "Intense daily exercise",
    }
  }
}

impl std::str::FromStr for ActivityLevel {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "sedentary" => Ok(ActivityLevel::Sedentary),
      "light" => Ok(ActivityLevel::Light),
      "moderate" => Ok(ActivityLevel::Moderate),
      "active" => Ok(ActivityLevel::Active),
      "veryActive" => Ok(ActivityLevel::VeryActive),
      _ => Err(format!("Unknown activity level: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Goal and Intensity
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
  #[serde(rename = "Weight Loss")]
  WeightLoss,
  Maintain,
  Bulk,
}

impl Goal {
  /// Minimum protein floor in grams per kg bodyweight.
  /// Cutting and bulking both push the floor up to protect lean mass.
  pub fn min_protein_per_kg(&self) -> f64 {
    match self {
      Goal::WeightLoss | Goal::Bulk => 2.0,
      Goal::Maintain => 1.6,
    }
  }

  /// Recommend a goal from BMI. 18.5 and 25 are the standard
  /// underweight/overweight cutoffs; both boundaries are inclusive upward.
  pub fn from_bmi(bmi: f64) -> Self {
    if bmi < 18.5 {
      Goal::Bulk
    } else if bmi >= 25.0 {
      Goal::WeightLoss
    } else {
      Goal::Maintain
    }
  }
}

impl std::fmt::Display for Goal {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Goal::WeightLoss => write!(f, "Weight Loss"),
      Goal::Maintain => write!(f, "Maintain"),
      Goal::Bulk => write!(f, "Bulk"),
    }
  }
}

impl std::str::FromStr for Goal {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Weight Loss" => Ok(Goal::WeightLoss),
      "Maintain" => Ok(Goal::Maintain),
      "Bulk" => Ok(Goal::Bulk),
      _ => Err(format!("Unknown goal: {}", s)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
  Moderate,
  Intense,
}

impl Intensity {
  pub fn as_str(&self) -> &'static str {
    match self {
      Intensity::Moderate => "moderate",
      Intensity::Intense => "intense",
    }
  }
}

impl std::str::FromStr for Intensity {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "moderate" => Ok(Intensity::Moderate),
      "intense" => Ok(Intensity::Intense),
      _ => Err(format!("Unknown intensity: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Biometric Input
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricInput {
  pub gender: Gender,

  /// Age in years
  pub age: f64,

  /// Height in centimeters
  #[serde(rename = "height")]
  pub height_cm: f64,

  /// Weight in kilograms
  #[serde(rename = "weight")]
  pub weight_kg: f64,

  #[serde(rename = "activityLevel")]
  pub activity_level: ActivityLevel,
}

impl BiometricInput {
  /// Reject non-finite or non-positive biometrics before any math runs.
  /// No defaults are substituted; the caller gets told which field is bad.
  pub fn validate(&self) -> Result<(), CalculatorError> {
    if !self.age.is_finite() || self.age <= 0.0 {
      return Err(CalculatorError::InvalidInput(
        "age must be a positive number".into(),
      ));
    }
    if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
      return Err(CalculatorError::InvalidInput(
        "height must be a positive number".into(),
      ));
    }
    if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
      return Err(CalculatorError::InvalidInput(
        "weight must be a positive number".into(),
      ));
    }
    Ok(())
  }

  /// Basal metabolic rate via Mifflin-St Jeor.
  /// "other" follows the female coefficients.
  pub fn bmr(&self) -> f64 {
    let base = 10.0 * self.weight_kg + 6.25 * self.height_cm - 5.0 * self.age;
    match self.gender {
      Gender::Male => base + 5.0,
      Gender::Female | Gender::Other => base - 161.0,
    }
  }

  /// Body-mass index: kg / m^2
  pub fn bmi(&self) -> f64 {
    let height_m = self.height_cm / 100.0;
    self.weight_kg / (height_m * height_m)
  }
}

/// ---------------------------------------------------------------------------
/// Raw Form Input
/// ---------------------------------------------------------------------------

/// The recalculation form collects everything as strings; this mirrors its
/// pre-flight validation so the UI can report the offending field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricForm {
  pub gender: String,
  pub age: String,
  pub height: String,
  pub weight: String,
  #[serde(rename = "activityLevel")]
  pub activity_level: String,
}

impl BiometricForm {
  pub fn parse(&self) -> Result<BiometricInput, CalculatorError> {
    let gender: Gender = self
      .gender
      .trim()
      .parse()
      .map_err(CalculatorError::InvalidInput)?;
    let activity_level: ActivityLevel = self
      .activity_level
      .trim()
      .parse()
      .map_err(CalculatorError::InvalidInput)?;

    Ok(BiometricInput {
      gender,
      age: parse_field(&self.age, "age")?,
      height_cm: parse_field(&self.height, "height")?,
      weight_kg: parse_field(&self.weight, "weight")?,
      activity_level,
    })
  }
}

fn parse_field(raw: &str, name: &str) -> Result<f64, CalculatorError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(CalculatorError::InvalidInput(format!("{} is required", name)));
  }
  trimmed
    .parse::<f64>()
    .map_err(|_| CalculatorError::InvalidInput(format!("{} must be a number", name)))
}

/// ---------------------------------------------------------------------------
/// Macro Plans
/// ---------------------------------------------------------------------------

/// One calorie/macro target set. The calories field is the adjusted target,
/// not the sum of the rounded macros; the two may drift by a few kcal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroPlan {
  pub calories: i32,
  /// grams
  pub protein: i32,
  /// grams
  pub carbs: i32,
  /// grams
  pub fats: i32,
}

/// Moderate and intense variants of one goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalPlans {
  pub moderate: MacroPlan,
  pub intense: MacroPlan,
}

impl GoalPlans {
  pub fn for_intensity(&self, intensity: Intensity) -> &MacroPlan {
    match intensity {
      Intensity::Moderate => &self.moderate,
      Intensity::Intense => &self.intense,
    }
  }
}

/// Full output of one calculation: the recommendation plus every plan the
/// user can pick from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
  pub recommended_goal: Goal,
  pub maintenance: MacroPlan,
  pub weight_loss: GoalPlans,
  pub bulk: GoalPlans,
}

/// ---------------------------------------------------------------------------
/// Calculation
/// ---------------------------------------------------------------------------

/// Compute maintenance targets and all goal/intensity options.
/// Deterministic; identical input always yields identical output.
pub fn calculate(input: &BiometricInput) -> Result<CalculationResult, CalculatorError> {
  input.validate()?;

  let bmr = input.bmr();
  let tdee = (bmr * input.activity_level.multiplier()).round() as i32;
  let recommended_goal = Goal::from_bmi(input.bmi());

  let (protein_ratio, carbs_ratio, fats_ratio) = MAINTENANCE_RATIOS;
  let maintenance = derive_macros(
    tdee,
    protein_ratio,
    carbs_ratio,
    fats_ratio,
    input.weight_kg,
    Goal::Maintain,
  );

  Ok(CalculationResult {
    recommended_goal,
    maintenance,
    weight_loss: GoalPlans {
      moderate: adjust_for_goal(Goal::WeightLoss, Intensity::Moderate, tdee, input.weight_kg),
      intense: adjust_for_goal(Goal::WeightLoss, Intensity::Intense, tdee, input.weight_kg),
    },
    bulk: GoalPlans {
      moderate: adjust_for_goal(Goal::Bulk, Intensity::Moderate, tdee, input.weight_kg),
      intense: adjust_for_goal(Goal::Bulk, Intensity::Intense, tdee, input.weight_kg),
    },
  })
}

/// Calorie adjustment and ratio split for one goal/intensity cell
fn plan_parameters(goal: Goal, intensity: Intensity) -> (i32, f64, f64, f64) {
  match (goal, intensity) {
    (Goal::WeightLoss, Intensity::Moderate) => (-500, 0.35, 0.35, 0.30),
    (Goal::WeightLoss, Intensity::Intense) => (-750, 0.40, 0.30, 0.30),
    (Goal::Bulk, Intensity::Moderate) => (300, 0.30, 0.45, 0.25),
    (Goal::Bulk, Intensity::Intense) => (500, 0.30, 0.50, 0.20),
    (Goal::Maintain, _) => {
      let (p, c, f) = MAINTENANCE_RATIOS;
      (0, p, c, f)
    }
  }
}

fn adjust_for_goal(goal: Goal, intensity: Intensity, tdee: i32, weight_kg: f64) -> MacroPlan {
  let (adjustment, protein_ratio, carbs_ratio, fats_ratio) = plan_parameters(goal, intensity);
  derive_macros(
    tdee + adjustment,
    protein_ratio,
    carbs_ratio,
    fats_ratio,
    weight_kg,
    goal,
  )
}

/// Derive gram targets from a calorie budget and ratio split.
///
/// Protein gets a bodyweight floor first; carbs and fats then split whatever
/// calories remain, with their ratios renormalized over the remainder. The
/// returned calories stay the input budget even though the rounded grams may
/// not sum back to it exactly.
fn derive_macros(
  calories: i32,
  protein_ratio: f64,
  carbs_ratio: f64,
  fats_ratio: f64,
  weight_kg: f64,
  goal: Goal,
) -> MacroPlan {
  let raw_protein = (calories as f64 * protein_ratio / CALORIES_PER_GRAM_PROTEIN).round() as i32;
  let min_protein = (weight_kg * goal.min_protein_per_kg()).round() as i32;
  let protein = raw_protein.max(min_protein);

  let remaining_calories = calories - protein * 4;

  let adjusted_carbs_ratio = carbs_ratio / (carbs_ratio + fats_ratio);
  let carbs =
    (remaining_calories as f64 * adjusted_carbs_ratio / CALORIES_PER_GRAM_CARBS).round() as i32;
  let fats = (remaining_calories as f64 * (1.0 - adjusted_carbs_ratio) / CALORIES_PER_GRAM_FAT)
    .round() as i32;

  MacroPlan {
    calories,
    protein,
    carbs,
    fats,
  }
}

/// ---------------------------------------------------------------------------
/// Plan Selection
/// ---------------------------------------------------------------------------

/// Pick the plan for a chosen goal and intensity. Maintenance has no
/// intensity axis, so the intensity argument is ignored for Maintain.
pub fn select_plan(result: &CalculationResult, goal: Goal, intensity: Intensity) -> &MacroPlan {
  match goal {
    Goal::Maintain => &result.maintenance,
    Goal::WeightLoss => result.weight_loss.for_intensity(intensity),
    Goal::Bulk => result.bulk.for_intensity(intensity),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
