//! Open Food Facts integration for food search
//!
//! This module queries the Open Food Facts search endpoint and cleans the
//! raw product list into the compact per-100g shape the logging screens
//! consume. Ranking, filtering, and cleaning are pure functions over the
//! decoded payload.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

use crate::models::food::FoodItem;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const OPENFOODFACTS_BASE_URL: &str = "https://world.openfoodfacts.org";
const SEARCH_PATH: &str = "/cgi/search.pl";
const MAX_RESULTS: usize = 10;
const DEFAULT_SERVING_SIZE: &str = "100g";

/// Open Food Facts asks API consumers to identify themselves
const USER_AGENT: &str = "PureEats/0.1 (nutrition tracker)";

#[derive(Debug, Clone)]
pub struct OpenFoodFactsConfig {
  pub base_url: String,
}

impl OpenFoodFactsConfig {
  /// Base URL comes from OPENFOODFACTS_BASE_URL when set (tests point this
  /// at a mock server), otherwise the public instance.
  pub fn from_env() -> Self {
    dotenvy::dotenv().ok();
    let base_url = env::var("OPENFOODFACTS_BASE_URL")
      .unwrap_or_else(|_| OPENFOODFACTS_BASE_URL.to_string());
    Self { base_url }
  }
}

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum FoodSearchError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("HTTP request failed: {0}")]
  Request(String),

  #[error("API error: {0}")]
  Api(String),

  #[error("Failed to decode response: {0}")]
  Parse(String),
}

// Convert reqwest::Error to FoodSearchError
impl From<reqwest::Error> for FoodSearchError {
  fn from(e: reqwest::Error) -> Self {
    FoodSearchError::Request(e.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Wire Format
/// ---------------------------------------------------------------------------

/// Search endpoint payload. Only the fields we read; everything else in the
/// (very large) product documents is ignored.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
  #[serde(default)]
  pub products: Vec<ProductRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRecord {
  #[serde(default)]
  pub product_name: Option<String>,
  #[serde(default)]
  pub image_url: Option<String>,
  #[serde(default)]
  pub nutriments: Nutriments,
}

/// Per-100g nutriment fields. All optional in the wild; missing macros are
/// treated as zero downstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Nutriments {
  #[serde(rename = "energy-kcal_100g")]
  pub energy_kcal_100g: Option<f64>,
  #[serde(rename = "proteins_100g")]
  pub proteins_100g: Option<f64>,
  #[serde(rename = "fat_100g")]
  pub fat_100g: Option<f64>,
  #[serde(rename = "carbohydrates_100g")]
  pub carbohydrates_100g: Option<f64>,
  #[serde(rename = "serving_size")]
  pub serving_size: Option<String>,
}

/// ---------------------------------------------------------------------------
/// Search
/// ---------------------------------------------------------------------------

/// Query the search endpoint and return the cleaned, ranked results.
/// One attempt per call; failures surface to the caller.
pub async fn search_foods(
  config: &OpenFoodFactsConfig,
  query: &str,
) -> Result<Vec<FoodItem>, FoodSearchError> {
  let url = build_search_url(config, query)?;
  let client = Client::new();

  let response = client
    .get(url)
    .header(reqwest::header::USER_AGENT, USER_AGENT)
    .send()
    .await?;

  if !response.status().is_success() {
    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    return Err(FoodSearchError::Api(format!(
      "Search failed with status {}: {}",
      status, error_text
    )));
  }

  let search: SearchResponse = response
    .json()
    .await
    .map_err(|e| FoodSearchError::Parse(e.to_string()))?;

  let items = process_products(search.products, query);
  println!("Food search '{}' returned {} results", query, items.len());
  Ok(items)
}

fn build_search_url(
  config: &OpenFoodFactsConfig,
  query: &str,
) -> Result<String, FoodSearchError> {
  let mut url =
    url::Url::parse(&config.base_url).map_err(|e| FoodSearchError::Config(e.to_string()))?;
  url.set_path(SEARCH_PATH);

  url
    .query_pairs_mut()
    .append_pair("search_terms", query)
    .append_pair("search_simple", "1")
    .append_pair("action", "process")
    .append_pair("json", "1");

  Ok(url.to_string())
}

/// ---------------------------------------------------------------------------
/// Result Processing
/// ---------------------------------------------------------------------------

/// Filter, rank, truncate, and clean a raw product list:
/// 1. keep products whose name contains the query (case-insensitive)
/// 2. rank by how early the match sits in the name (stable)
/// 3. keep products with a nonzero per-100g calorie figure
/// 4. cap at MAX_RESULTS and map into FoodItem, defaulting missing or
///    empty fields
pub fn process_products(products: Vec<ProductRecord>, query: &str) -> Vec<FoodItem> {
  let query_lower = query.to_lowercase();

  let mut matches: Vec<ProductRecord> = products
    .into_iter()
    .filter(|p| {
      p.product_name
        .as_ref()
        .map(|name| name.to_lowercase().contains(&query_lower))
        .unwrap_or(false)
    })
    .collect();

  matches.sort_by_key(|p| match_position(p, &query_lower));

  matches
    .into_iter()
    .filter(|p| p.nutriments.energy_kcal_100g.map_or(false, |kcal| kcal != 0.0))
    .take(MAX_RESULTS)
    .map(|p| FoodItem {
      // Both filters above guarantee a name and a nonzero kcal figure
      name: p.product_name.unwrap_or_default(),
      calories: p.nutriments.energy_kcal_100g.unwrap_or(0.0),
      protein: p.nutriments.proteins_100g.unwrap_or(0.0),
      fat: p.nutriments.fat_100g.unwrap_or(0.0),
      carbs: p.nutriments.carbohydrates_100g.unwrap_or(0.0),
      image: p.image_url.filter(|url| !url.is_empty()),
      serving_size: p
        .nutriments
        .serving_size
        .filter(|size| !size.is_empty())
        .unwrap_or_else(|| DEFAULT_SERVING_SIZE.to_string()),
    })
    .collect()
}

/// Position of the query inside the product name; names that start with the
/// query rank first.
fn match_position(product: &ProductRecord, query_lower: &str) -> usize {
  product
    .product_name
    .as_ref()
    .and_then(|name| name.to_lowercase().find(query_lower))
    .unwrap_or(usize::MAX)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
