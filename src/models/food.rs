use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::models::NutrientAmounts;

/// Reference grams that per-100 values are expressed against.
pub const REFERENCE_GRAMS: f64 = 100.0;

/// A food with nutrient values per 100 g (or 100 ml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    #[serde(default)]
    pub brand: String,

    /// Nutrients per 100 g.
    pub per_100g: NutrientAmounts,

    #[serde(default)]
    pub barcode: Option<String>,

    /// True for user-created foods and saved recipes.
    #[serde(default)]
    pub is_custom: bool,

    /// Grams in one serving, when the product declares one.
    #[serde(default)]
    pub serving_size_g: Option<f64>,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, per_100g: NutrientAmounts) -> Self {
        Self {
            name: name.into(),
            brand: String::new(),
            per_100g,
            barcode: None,
            is_custom: false,
            serving_size_g: None,
        }
    }

    /// Absolute nutrients for the given portion of this food.
    pub fn nutrients_for(&self, portion: Portion) -> NutrientAmounts {
        self.per_100g
            .scaled(portion.grams(self.serving_size_g) / REFERENCE_GRAMS)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Name with brand in parentheses when one is set.
    pub fn label(&self) -> String {
        if self.brand.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.brand)
        }
    }
}

/// How much of a food was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "unit", content = "amount")]
pub enum Portion {
    /// Grams, or millilitres for drinks.
    Grams(f64),
    /// Serving count. One serving is 100 g when the food declares no serving size.
    Servings(f64),
}

impl Portion {
    /// Resolve to grams using an optional serving size.
    pub fn grams(&self, serving_size_g: Option<f64>) -> f64 {
        match *self {
            Portion::Grams(g) => g,
            Portion::Servings(n) => n * serving_size_g.unwrap_or(REFERENCE_GRAMS),
        }
    }

    /// Like [`Portion::grams`], but rejects amounts that are not finite and positive.
    pub fn checked_grams(&self, serving_size_g: Option<f64>) -> Result<f64> {
        let grams = self.grams(serving_size_g);
        if grams.is_finite() && grams > 0.0 {
            Ok(grams)
        } else {
            Err(TrackerError::InvalidInput("Amount must be a positive number".to_string()))
        }
    }
}

impl Default for Portion {
    fn default() -> Self {
        Portion::Grams(REFERENCE_GRAMS)
    }
}

/// Meal slot a diary entry belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Display order of meal sections.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snacks",
        }
    }
}

/// One logged consumption event.
///
/// Nutrients are a snapshot taken when the entry is created; later edits to
/// the food's reference values do not touch existing entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: u64,
    pub date: NaiveDate,
    pub meal: MealType,
    pub food_name: String,
    pub portion: Portion,

    /// Portion resolved to grams at logging time.
    pub amount_g: f64,

    pub nutrients: NutrientAmounts,
}

impl DiaryEntry {
    pub fn new(
        id: u64,
        date: NaiveDate,
        meal: MealType,
        food: &FoodItem,
        portion: Portion,
    ) -> Self {
        Self {
            id,
            date,
            meal,
            food_name: food.name.clone(),
            portion,
            amount_g: portion.grams(food.serving_size_g),
            nutrients: food.nutrients_for(portion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oats() -> FoodItem {
        FoodItem::new("Oats", NutrientAmounts::new(380.0, 13.0, 60.0, 7.0))
    }

    #[test]
    fn test_nutrients_for_grams() {
        let n = oats().nutrients_for(Portion::Grams(50.0));
        assert!((n.calories - 190.0).abs() < 1e-9);
        assert!((n.protein_g - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_servings_default_to_reference_grams() {
        let food = oats();
        assert!((Portion::Servings(2.0).grams(food.serving_size_g) - 200.0).abs() < 1e-9);

        let mut bar = oats();
        bar.serving_size_g = Some(40.0);
        let n = bar.nutrients_for(Portion::Servings(1.5));
        assert!((n.calories - 228.0).abs() < 1e-9);
    }

    #[test]
    fn test_checked_grams_rejects_non_finite() {
        let mut bar = oats();
        bar.serving_size_g = Some(40.0);

        assert_eq!(Portion::Grams(25.0).checked_grams(None).unwrap(), 25.0);
        assert_eq!(Portion::Servings(2.0).checked_grams(bar.serving_size_g).unwrap(), 80.0);

        for portion in [
            Portion::Grams(f64::INFINITY),
            Portion::Grams(f64::NAN),
            Portion::Grams(0.0),
            Portion::Servings(-1.0),
            Portion::Servings(f64::INFINITY),
        ] {
            assert!(matches!(
                portion.checked_grams(bar.serving_size_g),
                Err(TrackerError::InvalidInput(_))
            ));
        }

        // Finite servings can still overflow to an infinite gram amount.
        bar.serving_size_g = Some(f64::MAX);
        assert!(Portion::Servings(2.0).checked_grams(bar.serving_size_g).is_err());
    }

    #[test]
    fn test_entry_is_snapshot() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let mut food = oats();
        let entry = DiaryEntry::new(1, date, MealType::Breakfast, &food, Portion::Grams(100.0));

        food.per_100g.calories = 999.0;
        assert!((entry.nutrients.calories - 380.0).abs() < 1e-9);
        assert!((entry.amount_g - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_label_with_brand() {
        let mut food = oats();
        assert_eq!(food.label(), "Oats");
        food.brand = "Acme".to_string();
        assert_eq!(food.label(), "Oats (Acme)");
    }
}
