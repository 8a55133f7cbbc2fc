mod activity;
mod food;
mod nutrients;
mod profile;
mod recipe;

pub use activity::{ActivityLog, WaterEntry};
pub use food::{DiaryEntry, FoodItem, MealType, Portion, REFERENCE_GRAMS};
pub use nutrients::NutrientAmounts;
pub use profile::{ActivityLevel, Goal, NutritionGoals, ProfileStats, Sex};
pub use recipe::{Recipe, RecipeIngredient};
