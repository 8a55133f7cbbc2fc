use chrono::NaiveDate;

use crate::energy::{
    ActivityIntensityTable, BudgetResult, MacroProgress, MealSection, WATER_GOAL_ML,
    calculate_daily_target, progress_percent,
};
use crate::models::{ActivityLog, FoodItem, NutritionGoals, ProfileStats};

const BAR_WIDTH: usize = 20;

/// Text progress bar for a percentage in [0, 100].
fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn macro_line(name: &str, progress: &MacroProgress) {
    println!(
        "{:<8} {} {:>4.0}/{:.0} g{}",
        name,
        bar(progress.percent),
        progress.consumed,
        progress.goal,
        if progress.is_over() { "  (over)" } else { "" }
    );
}

/// Display the calorie budget and macro progress for a day.
pub fn display_daily_summary(date: NaiveDate, budget: &BudgetResult) {
    println!();
    println!("=== {} ===", date);
    println!();

    let label = if budget.is_over_budget() { "over" } else { "remaining" };
    println!(
        "{:.0} kcal {}  (goal {:.0} + burned {:.0} - eaten {:.0})",
        budget.remaining.abs(),
        label,
        budget.goals.calories,
        budget.burned_calories,
        budget.totals.calories
    );
    println!("Calories {} {:.0}%", bar(budget.calorie_percent), budget.calorie_percent);
    println!();

    macro_line("Protein", &budget.protein);
    macro_line("Carbs", &budget.carbs);
    macro_line("Fat", &budget.fat);
    println!();
}

/// Display each meal slot with its entries.
pub fn display_meal_sections(sections: &[MealSection<'_>]) {
    for section in sections {
        println!(
            "--- {} ({:.0} kcal) ---",
            section.meal.display_name(),
            section.totals.calories
        );

        if section.entries.is_empty() {
            println!("    (nothing logged)");
        }

        for entry in &section.entries {
            println!(
                "  #{:<4} {} - {:.0} g, {:.0} kcal",
                entry.id, entry.food_name, entry.amount_g, entry.nutrients.calories
            );
        }
    }
    println!();
}

/// Display water intake against the daily target.
pub fn display_water(total_ml: f64) {
    let percent = progress_percent(total_ml, WATER_GOAL_ML);
    println!("Water    {} {:.0}/{:.0} ml", bar(percent), total_ml, WATER_GOAL_ML);
}

/// Display food candidates from a lookup.
pub fn display_food_list(foods: &[FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!("{}:", title);
    let max_name_len = foods.iter().map(|f| f.label().len()).max().unwrap_or(10);

    for (i, food) in foods.iter().enumerate() {
        let n = &food.per_100g;
        println!(
            "{:>3}. {:<width$}  {:>4.0} kcal  P:{:.1} C:{:.1} F:{:.1} per 100g",
            i + 1,
            food.label(),
            n.calories,
            n.protein_g,
            n.carbs_g,
            n.fat_g,
            width = max_name_len
        );
    }
}

/// Display recent workouts and the rolling weekly total.
pub fn display_workouts(logs: &[&ActivityLog], table: &ActivityIntensityTable, weekly: f64) {
    println!();
    println!("Active calories (7 days): {:.0}", weekly);
    println!();

    if logs.is_empty() {
        println!("No workouts logged yet.");
        return;
    }

    for log in logs {
        println!(
            "  #{:<4} {}  {:<32} {:>4.0} min  {:>5.0} kcal",
            log.id,
            log.date,
            table.label(&log.activity_type),
            log.duration_minutes,
            log.calories_burned
        );
    }
    println!();
}

/// Display the activity intensity table.
pub fn display_activity_table(table: &ActivityIntensityTable) {
    let max_key_len = table
        .entries()
        .iter()
        .map(|e| e.key.len())
        .max()
        .unwrap_or(10);

    for entry in table.entries() {
        println!(
            "{:<width$}  {:>5.1} MET  {}",
            entry.key,
            entry.met_factor,
            entry.display_label,
            width = max_key_len
        );
    }
}

/// Display profile stats with the resulting goals.
pub fn display_profile(profile: Option<&ProfileStats>, goals: &NutritionGoals) {
    match profile {
        Some(p) => {
            let show = |v: Option<f64>| v.map(|x| format!("{}", x)).unwrap_or_else(|| "-".into());
            println!("Weight: {} kg", show(p.weight_kg));
            println!("Height: {} cm", show(p.height_cm));
            println!("Age:    {}", show(p.age_years));
            println!("Sex:    {:?}", p.sex);
            println!("Activity factor: {}", p.activity_factor);
            println!("Goal:   {}", p.goal.description());
        }
        None => println!("No profile yet. Run 'profile' to set one."),
    }

    println!();
    println!("{}", target_line(profile, goals));
    println!(
        "Macros: P {:.0} g / C {:.0} g / F {:.0} g",
        goals.protein_g, goals.carbs_g, goals.fat_g
    );
}

/// The stored calorie goal, flagged when the current profile cannot produce one.
fn target_line(profile: Option<&ProfileStats>, goals: &NutritionGoals) -> String {
    match profile.map(calculate_daily_target) {
        Some(Err(_)) => format!(
            "Daily target: {:.0} kcal (from previous profile, complete it to update)",
            goals.calories
        ),
        _ => format!("Daily target: {:.0} kcal", goals.calories),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, Sex};

    fn stats(weight_kg: Option<f64>) -> ProfileStats {
        ProfileStats {
            weight_kg,
            height_cm: Some(170.0),
            age_years: Some(30.0),
            sex: Sex::Male,
            activity_factor: 1.2,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_target_line_flags_stale_goal() {
        let goals = NutritionGoals::with_calories(1941.0);

        assert_eq!(target_line(Some(&stats(Some(70.0))), &goals), "Daily target: 1941 kcal");
        assert_eq!(target_line(None, &goals), "Daily target: 1941 kcal");

        let stale = target_line(Some(&stats(None)), &goals);
        assert!(stale.starts_with("Daily target: 1941 kcal"));
        assert!(stale.contains("previous profile"));
    }

    #[test]
    fn test_bar_fill() {
        assert_eq!(bar(0.0), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(bar(100.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(bar(50.0).matches('#').count(), BAR_WIDTH / 2);
    }
}
