use dialoguer::{Confirm, Input, Select};

use crate::error::{Result, TrackerError};
use crate::lookup::FoodLookup;
use crate::models::{ActivityLevel, FoodItem, Goal, MealType, Portion, ProfileStats, Recipe, Sex};

fn format_optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_positive(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("'{}' is not a number", input)))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrackerError::InvalidInput("Amount must be positive".to_string()))
    }
}

/// Prompt for physical stats, prefilled from the current profile.
///
/// Blank answers are stored as missing.
pub fn prompt_profile(current: Option<&ProfileStats>) -> Result<ProfileStats> {
    let current = current.cloned().unwrap_or_default();

    let weight: String = Input::new()
        .with_prompt("Weight (kg)")
        .with_initial_text(format_optional(current.weight_kg))
        .allow_empty(true)
        .interact_text()?;

    let height: String = Input::new()
        .with_prompt("Height (cm)")
        .with_initial_text(format_optional(current.height_cm))
        .allow_empty(true)
        .interact_text()?;

    let age: String = Input::new()
        .with_prompt("Age")
        .with_initial_text(format_optional(current.age_years))
        .allow_empty(true)
        .interact_text()?;

    let sex_idx = Select::new()
        .with_prompt("Sex")
        .items(&["Male", "Female"])
        .default(if current.sex == Sex::Female { 1 } else { 0 })
        .interact()?;
    let sex = if sex_idx == 1 { Sex::Female } else { Sex::Male };

    let levels: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.description()).collect();
    let level_default = ActivityLevel::from_factor(current.activity_factor)
        .and_then(|l| ActivityLevel::ALL.iter().position(|x| *x == l))
        .unwrap_or(0);
    let level_idx = Select::new()
        .with_prompt("Activity level")
        .items(&levels)
        .default(level_default)
        .interact()?;

    let goals = [Goal::Lose, Goal::Maintain, Goal::Gain];
    let goal_labels: Vec<&str> = goals.iter().map(|g| g.description()).collect();
    let goal_idx = Select::new()
        .with_prompt("Main goal")
        .items(&goal_labels)
        .default(goals.iter().position(|g| *g == current.goal).unwrap_or(1))
        .interact()?;

    Ok(ProfileStats::from_text(
        &weight,
        &height,
        &age,
        sex,
        ActivityLevel::ALL[level_idx],
        goals[goal_idx],
    ))
}

/// Prompt for the meal slot.
pub fn prompt_meal() -> Result<MealType> {
    let labels: Vec<&str> = MealType::ALL.iter().map(|m| m.display_name()).collect();
    let idx = Select::new()
        .with_prompt("Meal")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(MealType::ALL[idx])
}

/// Prompt for how much of `food` was eaten, showing the resulting calories.
pub fn prompt_portion(food: &FoodItem) -> Result<Portion> {
    let mut units = vec!["Grams".to_string()];
    if let Some(serving) = food.serving_size_g {
        units.push(format!("Servings ({:.0} g)", serving));
    }

    let unit_idx = if units.len() > 1 {
        Select::new()
            .with_prompt("Unit")
            .items(&units)
            .default(0)
            .interact()?
    } else {
        0
    };

    let input: String = Input::new()
        .with_prompt("Amount")
        .default(if unit_idx == 0 { "100" } else { "1" }.to_string())
        .interact_text()?;
    let amount = parse_positive(&input)?;

    let portion = if unit_idx == 0 {
        Portion::Grams(amount)
    } else {
        Portion::Servings(amount)
    };
    portion.checked_grams(food.serving_size_g)?;

    println!("  = {:.0} kcal", food.nutrients_for(portion).calories);
    Ok(portion)
}

/// Let the user pick one of several foods. `None` when they decline all.
pub fn select_food(candidates: &[FoodItem]) -> Result<Option<usize>> {
    if candidates.is_empty() {
        return Ok(None);
    }

    let mut options: Vec<String> = candidates
        .iter()
        .map(|f| format!("{} - {:.0} kcal/100g", f.label(), f.per_100g.calories))
        .collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which food?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < candidates.len()).then_some(selection))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Build a recipe interactively, searching ingredients through `lookup`.
pub fn prompt_recipe(lookup: &dyn FoodLookup) -> Result<Recipe> {
    let name: String = Input::new().with_prompt("Recipe name").interact_text()?;
    let description: String = Input::new()
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;

    let mut recipe = Recipe::new(name.trim());
    recipe.description = description;

    loop {
        let query: String = Input::new()
            .with_prompt("Add ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let query = query.trim();
        if query.is_empty() {
            break;
        }

        let candidates = lookup.search(query)?;
        if candidates.is_empty() {
            println!("No matching food found for '{}'", query);
            continue;
        }

        let Some(idx) = select_food(&candidates)? else {
            continue;
        };

        let grams: String = Input::new()
            .with_prompt("Grams")
            .default("100".to_string())
            .interact_text()?;
        let grams = parse_positive(&grams)?;

        let food = candidates[idx].clone();
        println!("Added: {} ({:.0} g)", food.name, grams);
        recipe.add_ingredient(food, grams);
    }

    Ok(recipe)
}
