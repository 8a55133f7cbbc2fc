use std::path::Path;

use chrono::{Duration, Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nutri_track_rs::cli::{Cli, Command, WaterAction};
use nutri_track_rs::energy::{ActivityIntensityTable, BurnEstimator, meal_sections};
use nutri_track_rs::error::{Result, TrackerError};
use nutri_track_rs::interface::{
    display_activity_table, display_daily_summary, display_food_list, display_meal_sections,
    display_profile, display_water, display_workouts, prompt_meal, prompt_portion, prompt_profile,
    prompt_recipe, prompt_yes_no, select_food,
};
use nutri_track_rs::lookup::{FoodLookup, LocalCatalog, OpenFoodFactsClient};
use nutri_track_rs::models::{FoodItem, MealType, Portion};
use nutri_track_rs::state::{
    Journal, load_activity_table, load_or_new, save_journal, write_diary_csv, write_workouts_csv,
};

/// Days covered by `export` when no start date is given.
const DEFAULT_EXPORT_DAYS: i64 = 30;

fn main() {
    // Logs go to stderr so rendered output on stdout stays clean.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nutri_track_rs=info,nutri_track=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let path = Path::new(&cli.file);

    let table = match &cli.activities {
        Some(p) => load_activity_table(p)?,
        None => ActivityIntensityTable::standard(),
    };
    let estimator = BurnEstimator::new(table);

    match command {
        Command::Summary { date } => cmd_summary(path, or_today(date)),
        Command::Profile { show } => cmd_profile(path, show),
        Command::Scan {
            barcode,
            meal,
            date,
        } => cmd_scan(path, &barcode, meal, or_today(date)),
        Command::Search {
            query,
            offline,
            meal,
            date,
        } => cmd_search(path, &query, offline, meal, or_today(date)),
        Command::LogFood {
            food,
            grams,
            servings,
            meal,
            date,
        } => cmd_log_food(path, &food, grams, servings, meal, or_today(date)),
        Command::DeleteEntry { id } => cmd_delete_entry(path, id),
        Command::LogWorkout {
            activity,
            minutes,
            date,
        } => cmd_log_workout(path, &estimator, &activity, minutes, or_today(date)),
        Command::DeleteWorkout { id } => cmd_delete_workout(path, id),
        Command::Workouts { limit } => cmd_workouts(path, &estimator, limit),
        Command::Activities => {
            display_activity_table(estimator.table());
            Ok(())
        }
        Command::Water { action, date } => cmd_water(path, action, or_today(date)),
        Command::Recipe { offline } => cmd_recipe(path, offline),
        Command::Export { out, from, to } => cmd_export(path, &estimator, &out, from, to),
    }
}

fn or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// Show the calorie budget, meals and water for a day.
fn cmd_summary(path: &Path, date: NaiveDate) -> Result<()> {
    let journal = load_or_new(path)?;

    let budget = journal.budget_for(date);
    display_daily_summary(date, &budget);

    let entries = journal.entries_on(date);
    display_meal_sections(&meal_sections(&entries));
    display_water(journal.water_on(date));

    Ok(())
}

/// Edit the profile and recompute the calorie target.
fn cmd_profile(path: &Path, show: bool) -> Result<()> {
    let mut journal = load_or_new(path)?;

    if !show {
        let stats = prompt_profile(journal.profile())?;
        match journal.update_profile(stats) {
            Ok(target) => println!("Profile updated! New calorie target: {} kcal", target),
            Err(TrackerError::MissingInput(field)) => {
                println!("Complete your profile to get a calorie target ({} is missing).", field);
            }
            Err(e) => return Err(e),
        }
        save_journal(path, &journal)?;
        println!();
    }

    display_profile(journal.profile(), journal.goals());
    Ok(())
}

/// Ask for portion and meal, then log `food`.
fn log_selected(
    journal: &mut Journal,
    food: &FoodItem,
    meal: Option<MealType>,
    date: NaiveDate,
) -> Result<()> {
    let portion = prompt_portion(food)?;
    let meal = match meal {
        Some(m) => m,
        None => prompt_meal()?,
    };

    let entry = journal.log_food(date, meal, food, portion);
    println!(
        "Logged #{}: {} ({:.0} kcal) to {}",
        entry.id,
        entry.food_name,
        entry.nutrients.calories,
        meal.display_name()
    );
    Ok(())
}

/// Log a product found by barcode.
fn cmd_scan(path: &Path, barcode: &str, meal: Option<MealType>, date: NaiveDate) -> Result<()> {
    let mut journal = load_or_new(path)?;

    let known = LocalCatalog::new(journal.foods()).by_barcode(barcode)?;
    let food = match known {
        Some(food) => Some(food),
        None => OpenFoodFactsClient::from_env()?.by_barcode(barcode)?,
    };

    let Some(food) = food else {
        println!("Product not found for barcode {}.", barcode);
        return Ok(());
    };

    display_food_list(std::slice::from_ref(&food), "Found");
    log_selected(&mut journal, &food, meal, date)?;
    save_journal(path, &journal)?;
    Ok(())
}

/// Search foods and log the chosen one.
fn cmd_search(
    path: &Path,
    query: &str,
    offline: bool,
    meal: Option<MealType>,
    date: NaiveDate,
) -> Result<()> {
    let mut journal = load_or_new(path)?;

    let candidates = if offline {
        LocalCatalog::new(journal.foods()).search(query)?
    } else {
        OpenFoodFactsClient::from_env()?.search(query)?
    };

    display_food_list(&candidates, "Results");
    let Some(idx) = select_food(&candidates)? else {
        return Ok(());
    };

    log_selected(&mut journal, &candidates[idx], meal, date)?;
    save_journal(path, &journal)?;
    Ok(())
}

/// Log a saved food from command-line arguments.
fn cmd_log_food(
    path: &Path,
    name: &str,
    grams: Option<f64>,
    servings: Option<f64>,
    meal: MealType,
    date: NaiveDate,
) -> Result<()> {
    let mut journal = load_or_new(path)?;

    let food = journal
        .food(name)
        .cloned()
        .ok_or_else(|| TrackerError::FoodNotFound(name.to_string()))?;

    let portion = match (grams, servings) {
        (Some(g), _) => Portion::Grams(g),
        (None, Some(n)) => Portion::Servings(n),
        (None, None) => Portion::default(),
    };
    portion.checked_grams(food.serving_size_g)?;

    let entry = journal.log_food(date, meal, &food, portion);
    println!(
        "Logged #{}: {} ({:.0} kcal) to {}",
        entry.id,
        entry.food_name,
        entry.nutrients.calories,
        meal.display_name()
    );
    save_journal(path, &journal)?;
    Ok(())
}

fn cmd_delete_entry(path: &Path, id: u64) -> Result<()> {
    let mut journal = load_or_new(path)?;
    let removed = journal.delete_entry(id)?;
    save_journal(path, &journal)?;
    println!("Deleted #{} ({}).", removed.id, removed.food_name);
    Ok(())
}

/// Log a workout with an estimated burn.
fn cmd_log_workout(
    path: &Path,
    estimator: &BurnEstimator,
    activity: &str,
    minutes: f64,
    date: NaiveDate,
) -> Result<()> {
    if !(minutes.is_finite() && minutes > 0.0) {
        return Err(TrackerError::InvalidInput(
            "Duration must be a positive number of minutes".to_string(),
        ));
    }

    let table = estimator.table();
    if !table.contains(activity) {
        let suggestions: Vec<&str> = table
            .suggest(activity)
            .into_iter()
            .take(3)
            .map(|e| e.key.as_str())
            .collect();
        println!("Unknown activity '{}'.", activity);
        if !suggestions.is_empty() {
            println!("Did you mean: {}?", suggestions.join(", "));
        }
        if !prompt_yes_no("Log anyway with 0 kcal burned?", false)? {
            return Err(TrackerError::UnknownActivity(activity.to_string()));
        }
    }

    let mut journal = load_or_new(path)?;
    let log = journal.log_workout(date, activity, minutes, estimator);
    println!(
        "Logged #{}: {} for {:.0} min, {:.0} kcal burned.",
        log.id,
        table.label(activity),
        log.duration_minutes,
        log.calories_burned
    );
    save_journal(path, &journal)?;
    Ok(())
}

fn cmd_delete_workout(path: &Path, id: u64) -> Result<()> {
    let mut journal = load_or_new(path)?;
    let removed = journal.delete_workout(id)?;
    save_journal(path, &journal)?;
    println!("Deleted workout #{} ({}).", removed.id, removed.activity_type);
    Ok(())
}

fn cmd_workouts(path: &Path, estimator: &BurnEstimator, limit: usize) -> Result<()> {
    let journal = load_or_new(path)?;
    let today = Local::now().date_naive();
    display_workouts(
        &journal.recent_workouts(limit),
        estimator.table(),
        journal.burned_in_week(today),
    );
    Ok(())
}

fn cmd_water(path: &Path, action: WaterAction, date: NaiveDate) -> Result<()> {
    let mut journal = load_or_new(path)?;

    match action {
        WaterAction::Add { ml } => {
            if !(ml.is_finite() && ml > 0.0) {
                return Err(TrackerError::InvalidInput(
                    "Water amount must be positive".to_string(),
                ));
            }
            journal.add_water(date, ml);
        }
        WaterAction::Remove => {
            if journal.remove_last_water(date).is_none() {
                println!("No water logged on {}.", date);
            }
        }
    }

    save_journal(path, &journal)?;
    display_water(journal.water_on(date));
    Ok(())
}

/// Build a recipe and save it as a custom food.
fn cmd_recipe(path: &Path, offline: bool) -> Result<()> {
    let mut journal = load_or_new(path)?;

    let recipe = if offline {
        prompt_recipe(&LocalCatalog::new(journal.foods()))?
    } else {
        prompt_recipe(&OpenFoodFactsClient::from_env()?)?
    };

    if recipe.ingredients.is_empty() {
        println!("No ingredients added; recipe not saved.");
        return Ok(());
    }

    let totals = recipe.totals();
    println!(
        "{}: {:.0} g, {:.0} kcal total (P {:.1} / C {:.1} / F {:.1})",
        recipe.name,
        recipe.total_weight(),
        totals.calories,
        totals.protein_g,
        totals.carbs_g,
        totals.fat_g
    );

    if prompt_yes_no("Save recipe?", true)? {
        let food = journal.save_recipe(recipe);
        save_journal(path, &journal)?;
        println!("Saved '{}' ({:.0} kcal/100g).", food.name, food.per_100g.calories);
    }
    Ok(())
}

fn cmd_export(
    path: &Path,
    estimator: &BurnEstimator,
    out: &Path,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let journal = load_or_new(path)?;
    let to = or_today(to);
    let from = from.unwrap_or(to - Duration::days(DEFAULT_EXPORT_DAYS));
    if from > to {
        return Err(TrackerError::InvalidInput(format!(
            "Start date {} is after end date {}",
            from, to
        )));
    }

    std::fs::create_dir_all(out)?;

    let entries = journal.entries_between(from, to);
    write_diary_csv(&entries, &out.join("diary.csv"))?;

    let workouts = journal.workouts_between(from, to);
    write_workouts_csv(&workouts, estimator.table(), &out.join("workouts.csv"))?;

    println!(
        "Exported {} diary entries and {} workouts ({} to {}) to {}",
        entries.len(),
        workouts.len(),
        from,
        to,
        out.display()
    );
    Ok(())
}
