pub mod cli;
pub mod energy;
pub mod error;
pub mod interface;
pub mod lookup;
pub mod models;
pub mod state;

pub use energy::{BudgetResult, BurnEstimator, calculate_daily_target, compute_budget};
pub use error::{Result, TrackerError};
pub use models::{DiaryEntry, FoodItem, NutrientAmounts, NutritionGoals, ProfileStats};
