use crate::models::food::{FoodItem, Portion};
use crate::openfoodfacts::{self, FoodSearchError, OpenFoodFactsConfig};
use crate::tracker::{self, ScaledNutrition};

/// ---------------------------------------------------------------------------
/// Food Search Commands
/// ---------------------------------------------------------------------------

/// Search the food database by name
pub async fn search_foods(query: &str) -> Result<Vec<FoodItem>, FoodSearchError> {
  let config = OpenFoodFactsConfig::from_env();
  openfoodfacts::search_foods(&config, query).await
}

/// ---------------------------------------------------------------------------
/// Portion Preview Commands
/// ---------------------------------------------------------------------------

/// Scale a food's per-100g nutrition to the portion being dialed in
pub fn preview_portion(
  food: &FoodItem,
  quantity: f64,
  unit: &str,
  portions: &[Portion],
) -> ScaledNutrition {
  tracker::scale_nutrition(food, quantity, unit, portions)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;
  use serial_test::serial;

  #[test]
  fn test_preview_portion_by_grams() {
    let scaled = preview_portion(&mock_food_item(), 50.0, "g", &[]);
    assert_eq!(scaled.calories, 194.5);
  }

  #[test]
  fn test_preview_portion_household_unit() {
    let portions = [mock_portion("cup", 1.0, 81.0)];
    // One 81g cup of oats: 389 * 0.81 = 315.09
    let scaled = preview_portion(&mock_food_item(), 1.0, "cup", &portions);
    assert_eq!(scaled.calories, 315.09);
  }

  #[tokio::test]
  #[serial]
  async fn test_search_foods_uses_configured_base_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
      .mock("GET", "/cgi/search.pl")
      .match_query(mockito::Matcher::UrlEncoded(
        "search_terms".into(),
        "oats".into(),
      ))
      .with_status(200)
      .with_header("content-type", "application/json")
      .with_body(
        serde_json::json!({
          "products": [{
            "product_name": "Rolled oats",
            "nutriments": { "energy-kcal_100g": 389.0 }
          }]
        })
        .to_string(),
      )
      .create_async()
      .await;

    std::env::set_var("OPENFOODFACTS_BASE_URL", server.url());
    let results = search_foods("oats").await.unwrap();
    std::env::remove_var("OPENFOODFACTS_BASE_URL");

    mock.assert_async().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Rolled oats");
  }
}
