pub mod food;
pub mod targets;

pub use food::{FoodItem, FoodLogEntry, MealType, Portion};
pub use targets::NutritionTargets;
