use strsim::jaro_winkler;

use crate::error::Result;
use crate::lookup::FoodLookup;
use crate::models::FoodItem;

/// Minimum similarity for a fuzzy name match.
const MATCH_THRESHOLD: f64 = 0.7;

/// Offline lookup over foods already saved in the journal.
pub struct LocalCatalog<'a> {
    foods: &'a [FoodItem],
}

impl<'a> LocalCatalog<'a> {
    pub fn new(foods: &'a [FoodItem]) -> Self {
        Self { foods }
    }

    /// Score a food name against a lowercase query. Substring hits score 1.0.
    fn score(name: &str, query: &str) -> f64 {
        let name = name.to_lowercase();
        if name.contains(query) {
            1.0
        } else {
            jaro_winkler(&name, query)
        }
    }
}

impl FoodLookup for LocalCatalog<'_> {
    fn by_barcode(&self, barcode: &str) -> Result<Option<FoodItem>> {
        Ok(self
            .foods
            .iter()
            .find(|f| f.barcode.as_deref() == Some(barcode))
            .cloned())
    }

    fn search(&self, query: &str) -> Result<Vec<FoodItem>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut candidates: Vec<(&FoodItem, f64)> = self
            .foods
            .iter()
            .map(|f| (f, Self::score(&f.name, &query)))
            .filter(|(_, score)| *score > MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(candidates.into_iter().map(|(f, _)| f.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientAmounts;

    fn foods() -> Vec<FoodItem> {
        let mut yogurt = FoodItem::new("Greek Yogurt", NutrientAmounts::new(97.0, 9.0, 4.0, 5.0));
        yogurt.barcode = Some("4000000000001".to_string());
        vec![
            yogurt,
            FoodItem::new("Banana", NutrientAmounts::new(89.0, 1.1, 23.0, 0.3)),
            FoodItem::new("Bananas, dried", NutrientAmounts::new(346.0, 3.9, 88.0, 1.8)),
        ]
    }

    #[test]
    fn test_barcode_exact_match() {
        let foods = foods();
        let catalog = LocalCatalog::new(&foods);
        let hit = catalog.by_barcode("4000000000001").unwrap();
        assert_eq!(hit.map(|f| f.name), Some("Greek Yogurt".to_string()));
        assert!(catalog.by_barcode("123").unwrap().is_none());
    }

    #[test]
    fn test_search_fuzzy_and_substring() {
        let foods = foods();
        let catalog = LocalCatalog::new(&foods);

        let hits = catalog.search("banana").unwrap();
        assert_eq!(hits.len(), 2);

        let typo = catalog.search("greek yoghurt").unwrap();
        assert!(typo.iter().any(|f| f.name == "Greek Yogurt"));

        assert!(catalog.search("   ").unwrap().is_empty());
    }
}
