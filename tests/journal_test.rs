use chrono::NaiveDate;
use clap::Parser;
use tempfile::tempdir;

use nutri_track_rs::cli::{Cli, Command};

use nutri_track_rs::energy::{ActivityIntensity, ActivityIntensityTable, BurnEstimator};
use nutri_track_rs::error::TrackerError;
use nutri_track_rs::models::{
    ActivityLevel, FoodItem, Goal, MealType, NutrientAmounts, Portion, ProfileStats, Recipe, Sex,
};
use nutri_track_rs::state::{Journal, load_journal, save_journal};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 7, d).unwrap()
}

fn oats() -> FoodItem {
    FoodItem::new("Oats", NutrientAmounts::new(380.0, 13.0, 60.0, 7.0))
}

#[test]
fn test_entries_survive_reference_changes() {
    let mut journal = Journal::new();
    journal.log_food(day(1), MealType::Breakfast, &oats(), Portion::Grams(50.0));

    let mut changed = oats();
    changed.per_100g.calories = 420.0;
    journal.upsert_food(changed);

    let entries = journal.entries_on(day(1));
    assert!((entries[0].nutrients.calories - 190.0).abs() < 1e-9);
    assert_eq!(journal.food("oats").unwrap().per_100g.calories, 420.0);
}

#[test]
fn test_workouts_survive_table_changes() {
    let mut journal = Journal::new();
    let original = BurnEstimator::default();
    journal.log_workout(day(2), "cycling_leisure", 60.0, &original);

    let harder = BurnEstimator::new(ActivityIntensityTable::new(vec![ActivityIntensity {
        key: "cycling_leisure".to_string(),
        met_factor: 8.0,
        display_label: "Cycling".to_string(),
    }]));
    journal.log_workout(day(2), "cycling_leisure", 60.0, &harder);

    // 4.0 MET and 8.0 MET at the 75 kg fallback weight
    let burned: Vec<f64> = journal.workouts().iter().map(|w| w.calories_burned).collect();
    assert_eq!(burned, vec![300.0, 600.0]);
}

#[test]
fn test_profile_drives_goal_and_burn_weight() {
    let mut journal = Journal::new();
    let stats = ProfileStats::from_text(
        "90",
        "185",
        "35",
        Sex::Male,
        ActivityLevel::Moderate,
        Goal::Maintain,
    );
    // (900 + 1156.25 - 175 + 5) * 1.55 = 2923.6875
    assert_eq!(journal.update_profile(stats).unwrap(), 2924);

    let log = journal.log_workout(day(3), "swimming", 30.0, &BurnEstimator::default());
    // 7.0 * 90 * 0.5
    assert_eq!(log.calories_burned, 315.0);

    let budget = journal.budget_for(day(3));
    assert_eq!(budget.total_budget, 2924.0 + 315.0);
}

#[test]
fn test_recipe_is_loggable() {
    let mut journal = Journal::new();
    let mut recipe = Recipe::new("Overnight oats");
    recipe.add_ingredient(oats(), 60.0);
    recipe.add_ingredient(
        FoodItem::new("Milk", NutrientAmounts::new(64.0, 3.3, 4.8, 3.6)),
        140.0,
    );

    let food = journal.save_recipe(recipe);
    let entry = journal.log_food(day(4), MealType::Breakfast, &food, Portion::Grams(200.0));
    // whole batch: 228 + 89.6
    assert!((entry.nutrients.calories - 317.6).abs() < 1e-9);
    assert_eq!(journal.recipes().len(), 1);
}

#[test]
fn test_round_trip_keeps_ids_unique() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("journal.json");

    let mut journal = Journal::new();
    journal.log_food(day(5), MealType::Dinner, &oats(), Portion::Servings(1.0));
    journal.add_water(day(5), 250.0);
    save_journal(&path, &journal).unwrap();

    let mut reloaded = load_journal(&path).unwrap();
    let id = reloaded
        .log_food(day(5), MealType::Snack, &oats(), Portion::Grams(10.0))
        .id;
    assert_eq!(id, 3);
    assert_eq!(reloaded.entries_on(day(5)).len(), 2);
}

#[test]
fn test_non_finite_portion_is_rejected_before_logging() {
    for amount in ["inf", "NaN"] {
        let cli = Cli::parse_from(["nutri_track", "log-food", "--food", "Oats", "--grams", amount]);
        let Some(Command::LogFood { grams: Some(grams), .. }) = cli.command else {
            panic!("expected log-food with grams");
        };

        let result = Portion::Grams(grams).checked_grams(oats().serving_size_g);
        assert!(matches!(result, Err(TrackerError::InvalidInput(_))));
    }

    // A valid portion still round-trips through the saved file.
    let dir = tempdir().unwrap();
    let path = dir.path().join("journal.json");
    let mut journal = Journal::new();
    let portion = Portion::Servings(1.5);
    portion.checked_grams(oats().serving_size_g).unwrap();
    journal.log_food(day(2), MealType::Snack, &oats(), portion);
    save_journal(&path, &journal).unwrap();

    let reloaded = load_journal(&path).unwrap();
    assert_eq!(reloaded.entries_on(day(2)).len(), 1);
}
