pub mod budget;
pub mod burn;
pub mod constants;
pub mod target;

pub use budget::{
    BudgetResult, MacroProgress, MealSection, compute_budget, meal_sections, progress_percent,
};
pub use burn::{ActivityIntensity, ActivityIntensityTable, BurnEstimator, calories_burned};
pub use constants::*;
pub use target::{basal_metabolic_rate, calculate_daily_target, goal_offset};
