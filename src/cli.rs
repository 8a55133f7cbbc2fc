use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::energy::WATER_STEP_ML;
use crate::models::MealType;

/// NutriTrack: a food, water and workout diary with calorie budgeting.
#[derive(Parser, Debug)]
#[command(name = "nutri_track")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the journal JSON file.
    #[arg(short, long, default_value = "nutri_state.json")]
    pub file: String,

    /// JSON file replacing the built-in activity intensity table.
    #[arg(long)]
    pub activities: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the calorie budget, meals and water for a day.
    Summary {
        /// Day to show (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Edit physical stats and recompute the daily calorie target.
    Profile {
        /// Only print the current profile.
        #[arg(long)]
        show: bool,
    },

    /// Look up a product by barcode and log it.
    Scan {
        barcode: String,

        #[arg(long, value_enum)]
        meal: Option<MealType>,

        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Search foods by name and log one.
    Search {
        query: String,

        /// Search saved foods only instead of Open Food Facts.
        #[arg(long)]
        offline: bool,

        #[arg(long, value_enum)]
        meal: Option<MealType>,

        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Log a saved food without prompting.
    LogFood {
        /// Saved food name (case-insensitive).
        #[arg(long)]
        food: String,

        #[arg(long, conflicts_with = "servings")]
        grams: Option<f64>,

        #[arg(long)]
        servings: Option<f64>,

        #[arg(long, value_enum, default_value_t = MealType::Snack)]
        meal: MealType,

        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete a diary entry by id.
    DeleteEntry { id: u64 },

    /// Log a workout and estimate calories burned.
    LogWorkout {
        /// Activity key, see `activities`.
        #[arg(long)]
        activity: String,

        #[arg(long)]
        minutes: f64,

        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete a workout by id.
    DeleteWorkout { id: u64 },

    /// List recent workouts with the 7-day burn total.
    Workouts {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// List known activities and their MET factors.
    Activities,

    /// Track water intake.
    Water {
        #[command(subcommand)]
        action: WaterAction,

        #[arg(long, global = true)]
        date: Option<NaiveDate>,
    },

    /// Create a recipe from ingredients and save it as a food.
    Recipe {
        /// Search saved foods only instead of Open Food Facts.
        #[arg(long)]
        offline: bool,
    },

    /// Export diary and workouts to CSV.
    Export {
        /// Output directory.
        #[arg(long, default_value = ".")]
        out: PathBuf,

        /// First day to include. Defaults to 30 days before `to`.
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day to include. Defaults to today.
        #[arg(long)]
        to: Option<NaiveDate>,
    },
}

#[derive(Subcommand, Debug)]
pub enum WaterAction {
    /// Add a glass of water.
    Add {
        #[arg(default_value_t = WATER_STEP_ML)]
        ml: f64,
    },

    /// Remove the last water entry of the day.
    Remove,
}

impl Default for Command {
    fn default() -> Self {
        Command::Summary { date: None }
    }
}
