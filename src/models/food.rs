use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One cleaned food search result. Nutrition values are per 100g of the
/// product; scaling to an actual portion happens at logging time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
  pub name: String,
  /// kcal per 100g
  pub calories: f64,
  /// grams per 100g
  pub protein: f64,
  /// grams per 100g
  pub fat: f64,
  /// grams per 100g
  pub carbs: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(rename = "servingSize")]
  pub serving_size: String,
}

/// A household measure attached to a food: `amount` units of `modifier`
/// weigh `gram_weight` grams (e.g. 1 cup = 240g).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portion {
  pub modifier: String,
  pub amount: f64,
  #[serde(rename = "gramWeight")]
  pub gram_weight: f64,
}

/// ---------------------------------------------------------------------------
/// Meal Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
  Breakfast,
  Lunch,
  Dinner,
  Snacks,
}

impl MealType {
  /// Fixed display order for the meals screen
  pub const ALL: [MealType; 4] = [
    MealType::Breakfast,
    MealType::Lunch,
    MealType::Dinner,
    MealType::Snacks,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      MealType::Breakfast => "Breakfast",
      MealType::Lunch => "Lunch",
      MealType::Dinner => "Dinner",
      MealType::Snacks => "Snacks",
    }
  }
}

impl std::fmt::Display for MealType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for MealType {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Breakfast" => Ok(MealType::Breakfast),
      "Lunch" => Ok(MealType::Lunch),
      "Dinner" => Ok(MealType::Dinner),
      "Snacks" => Ok(MealType::Snacks),
      _ => Err(format!("Unknown meal type: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Food Log Entries
/// ---------------------------------------------------------------------------

/// One logged food. Macro values are the portion-scaled amounts captured at
/// logging time, not per-100g figures. Storage is owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
  pub meal_type: MealType,
  pub food_name: String,
  pub log_date: NaiveDate,
  pub calories: f64,
  pub carbs: f64,
  pub fats: f64,
  pub protein: f64,
  /// What the user entered, kept for display and re-editing
  pub quantity: f64,
  pub unit: String,
  pub created_at: DateTime<Utc>,
}
