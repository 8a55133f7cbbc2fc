use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Result, TrackerError};
use crate::lookup::FoodLookup;
use crate::models::{FoodItem, NutrientAmounts};

/// Public Open Food Facts instance.
pub const OFF_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Environment variable overriding [`OFF_BASE_URL`].
pub const OFF_BASE_URL_ENV: &str = "NUTRI_TRACK_OFF_URL";

const SEARCH_PAGE_SIZE: &str = "20";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("nutri_track/", env!("CARGO_PKG_VERSION"));

const UNKNOWN_PRODUCT: &str = "Unknown Product";
const UNKNOWN_SEARCH_HIT: &str = "Unknown";

/// Trimmed barcode, or an error unless it is a non-empty run of ASCII digits.
pub fn validate_barcode(barcode: &str) -> Result<&str> {
    let code = barcode.trim();
    if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(code)
    } else {
        Err(TrackerError::InvalidInput(format!(
            "Barcode must contain digits only, got '{}'",
            barcode
        )))
    }
}

#[derive(Debug, Default, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    product: Option<RawProduct>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Option<Vec<RawProduct>>,
}

/// Product record as sent upstream. Every field may be absent or mistyped.
#[derive(Debug, Default, Deserialize)]
struct RawProduct {
    #[serde(default)]
    code: Option<Value>,
    #[serde(default)]
    product_name: Option<Value>,
    #[serde(default)]
    brands: Option<Value>,
    #[serde(default)]
    nutriments: Option<Value>,
    #[serde(default)]
    serving_quantity: Option<Value>,
}

impl RawProduct {
    fn into_food(self, fallback_name: &str, fallback_code: Option<String>) -> FoodItem {
        let nutriments = self.nutriments.unwrap_or(Value::Null);
        let per_100g = NutrientAmounts {
            calories: number(nutriments.get("energy-kcal_100g")),
            protein_g: number(nutriments.get("proteins_100g")),
            carbs_g: number(nutriments.get("carbohydrates_100g")),
            fat_g: number(nutriments.get("fat_100g")),
        };

        let name = text(self.product_name.as_ref());
        let serving = number(self.serving_quantity.as_ref());

        FoodItem {
            name: if name.is_empty() {
                fallback_name.to_string()
            } else {
                name
            },
            brand: text(self.brands.as_ref()),
            per_100g,
            barcode: non_empty(text(self.code.as_ref())).or(fallback_code),
            is_custom: false,
            serving_size_g: (serving > 0.0).then_some(serving),
        }
    }
}

/// Numeric field, accepting numbers or numeric strings. Anything else is 0.
fn number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => v,
        _ => {
            if value.is_some_and(|v| !v.is_null()) {
                debug!(?value, "malformed nutrient value, defaulting to 0");
            }
            0.0
        }
    }
}

/// Text field, accepting strings or numbers. Anything else is empty.
fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// Parse a product-by-barcode response body.
///
/// Returns `None` when the response carries no product.
pub fn parse_product_response(body: &str) -> Result<Option<FoodItem>> {
    let response: ProductResponse = serde_json::from_str(body)?;
    let code = response.code.and_then(non_empty);
    Ok(response
        .product
        .map(|product| product.into_food(UNKNOWN_PRODUCT, code)))
}

/// Parse a search response body.
///
/// Records reporting negative calories are dropped.
pub fn parse_search_response(body: &str) -> Result<Vec<FoodItem>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .products
        .unwrap_or_default()
        .into_iter()
        .map(|product| product.into_food(UNKNOWN_SEARCH_HIT, None))
        .filter(|food| food.per_100g.calories >= 0.0)
        .collect())
}

/// Blocking client for the Open Food Facts API.
pub struct OpenFoodFactsClient {
    client: Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client for the URL in `NUTRI_TRACK_OFF_URL`, or the public instance.
    pub fn from_env() -> Result<Self> {
        let base = std::env::var(OFF_BASE_URL_ENV).unwrap_or_else(|_| OFF_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl FoodLookup for OpenFoodFactsClient {
    fn by_barcode(&self, barcode: &str) -> Result<Option<FoodItem>> {
        let code = validate_barcode(barcode)?;
        let url = format!("{}/api/v2/product/{}.json", self.base_url, code);
        info!(%url, "looking up barcode");

        let response = self.client.get(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(barcode, "barcode not found upstream");
            return Ok(None);
        }

        let body = response.error_for_status()?.text()?;
        parse_product_response(&body)
    }

    fn search(&self, query: &str) -> Result<Vec<FoodItem>> {
        let url = format!("{}/cgi/search.pl", self.base_url);
        info!(query, "searching foods");

        let body = self
            .client
            .get(&url)
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("action", "process"),
                ("json", "1"),
                ("page_size", SEARCH_PAGE_SIZE),
            ])
            .send()?
            .error_for_status()?
            .text()?;

        let foods = parse_search_response(&body)?;
        debug!(count = foods.len(), "search returned candidates");
        Ok(foods)
    }
}
