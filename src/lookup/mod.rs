//! Food lookup by barcode or free-text search.

mod catalog;
mod openfoodfacts;

pub use catalog::LocalCatalog;
pub use openfoodfacts::{
    OFF_BASE_URL, OFF_BASE_URL_ENV, OpenFoodFactsClient, parse_product_response,
    parse_search_response, validate_barcode,
};

use crate::error::Result;
use crate::models::FoodItem;

/// Source of per-100 g food reference records.
pub trait FoodLookup {
    /// Single product for a barcode, or `None` when the source has no match.
    fn by_barcode(&self, barcode: &str) -> Result<Option<FoodItem>>;

    /// Candidate matches for a free-text query, best first.
    fn search(&self, query: &str) -> Result<Vec<FoodItem>>;
}
