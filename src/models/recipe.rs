use serde::{Deserialize, Serialize};

use crate::models::{FoodItem, NutrientAmounts, Portion, REFERENCE_GRAMS};

/// A food used in a recipe, with the grams that go into one batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub food: FoodItem,
    pub amount_g: f64,
}

impl RecipeIngredient {
    pub fn nutrients(&self) -> NutrientAmounts {
        self.food.nutrients_for(Portion::Grams(self.amount_g))
    }
}

/// A named combination of ingredients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_ingredient(&mut self, food: FoodItem, amount_g: f64) {
        self.ingredients.push(RecipeIngredient { food, amount_g });
    }

    /// Batch weight in grams.
    pub fn total_weight(&self) -> f64 {
        self.ingredients.iter().map(|i| i.amount_g).sum()
    }

    /// Nutrients of the whole batch.
    pub fn totals(&self) -> NutrientAmounts {
        self.ingredients.iter().map(|i| i.nutrients()).sum()
    }

    /// Nutrients per 100 g of the finished batch. Zero for an empty batch.
    pub fn per_100g(&self) -> NutrientAmounts {
        let weight = self.total_weight();
        if weight > 0.0 {
            self.totals().scaled(REFERENCE_GRAMS / weight)
        } else {
            NutrientAmounts::ZERO
        }
    }

    /// Custom food that logs like this recipe.
    pub fn to_food_item(&self) -> FoodItem {
        FoodItem {
            name: self.name.clone(),
            brand: String::new(),
            per_100g: self.per_100g(),
            barcode: None,
            is_custom: true,
            serving_size_g: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_100g_of_mixed_batch() {
        let mut recipe = Recipe::new("Porridge");
        recipe.add_ingredient(
            FoodItem::new("Oats", NutrientAmounts::new(380.0, 13.0, 60.0, 7.0)),
            50.0,
        );
        recipe.add_ingredient(
            FoodItem::new("Milk", NutrientAmounts::new(60.0, 3.0, 5.0, 3.0)),
            150.0,
        );

        assert!((recipe.total_weight() - 200.0).abs() < 1e-9);
        let totals = recipe.totals();
        assert!((totals.calories - 280.0).abs() < 1e-9);

        let per_100 = recipe.per_100g();
        assert!((per_100.calories - 140.0).abs() < 1e-9);
        assert!((per_100.protein_g - 5.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_recipe_is_zero() {
        let recipe = Recipe::new("Nothing");
        assert_eq!(recipe.per_100g(), NutrientAmounts::ZERO);
    }

    #[test]
    fn test_to_food_item_is_custom() {
        let mut recipe = Recipe::new("Shake");
        recipe.add_ingredient(
            FoodItem::new("Whey", NutrientAmounts::new(400.0, 80.0, 8.0, 6.0)),
            30.0,
        );
        let food = recipe.to_food_item();
        assert!(food.is_custom);
        assert_eq!(food.name, "Shake");
        assert!((food.per_100g.protein_g - 80.0).abs() < 1e-9);
    }
}
