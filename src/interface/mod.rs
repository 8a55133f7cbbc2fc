pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_meal, prompt_portion, prompt_profile, prompt_recipe, prompt_yes_no, select_food,
};
pub use render::{
    display_activity_table, display_daily_summary, display_food_list, display_meal_sections,
    display_profile, display_water, display_workouts,
};
