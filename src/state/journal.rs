use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::energy::{
    BudgetResult, BurnEstimator, FALLBACK_WEIGHT_KG, WEEKLY_WINDOW_DAYS, calculate_daily_target,
    compute_budget,
};
use crate::error::{Result, TrackerError};
use crate::models::{
    ActivityLog, DiaryEntry, FoodItem, MealType, NutritionGoals, Portion, ProfileStats, Recipe,
    WaterEntry,
};

/// A user's stored records: profile, goals, saved foods and recipes, and the
/// dated diary, workout and water logs.
///
/// Entries are only ever appended or deleted whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    profile: Option<ProfileStats>,

    #[serde(default)]
    goals: NutritionGoals,

    #[serde(default)]
    foods: Vec<FoodItem>,

    #[serde(default)]
    recipes: Vec<Recipe>,

    #[serde(default)]
    diary: Vec<DiaryEntry>,

    #[serde(default)]
    workouts: Vec<ActivityLog>,

    #[serde(default)]
    water: Vec<WaterEntry>,

    /// Last id handed out; shared by diary, workout and water records.
    #[serde(default)]
    last_id: u64,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    /// Repair state read from disk: dedupe saved foods (last wins) and make
    /// sure fresh ids cannot collide with stored ones.
    pub(crate) fn normalize(&mut self) {
        let mut deduped: Vec<FoodItem> = Vec::with_capacity(self.foods.len());
        for food in self.foods.drain(..) {
            match deduped.iter_mut().find(|f| f.key() == food.key()) {
                Some(existing) => *existing = food,
                None => deduped.push(food),
            }
        }
        self.foods = deduped;

        let max_id = self
            .diary
            .iter()
            .map(|e| e.id)
            .chain(self.workouts.iter().map(|w| w.id))
            .chain(self.water.iter().map(|w| w.id))
            .max()
            .unwrap_or(0);
        self.last_id = self.last_id.max(max_id);
    }

    // ── Profile and goals ───────────────────────────────────────────────────

    pub fn profile(&self) -> Option<&ProfileStats> {
        self.profile.as_ref()
    }

    pub fn goals(&self) -> &NutritionGoals {
        &self.goals
    }

    pub fn set_goals(&mut self, goals: NutritionGoals) {
        self.goals = goals;
    }

    /// Store new profile stats and derive the calorie goal from them.
    ///
    /// The profile is stored even when incomplete. In that case the previous
    /// calorie goal is kept and the missing field is returned as an error.
    pub fn update_profile(&mut self, stats: ProfileStats) -> Result<i64> {
        let target = calculate_daily_target(&stats);
        self.profile = Some(stats);

        match target {
            Ok(kcal) => {
                info!(target = kcal, "calorie goal updated from profile");
                self.goals.calories = kcal as f64;
                Ok(kcal)
            }
            Err(e) => {
                warn!(error = %e, "profile incomplete, keeping calorie goal");
                Err(e)
            }
        }
    }

    /// Body weight for burn estimates.
    pub fn body_weight(&self) -> f64 {
        self.profile
            .as_ref()
            .and_then(|p| p.weight_kg)
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(FALLBACK_WEIGHT_KG)
    }

    // ── Foods and recipes ───────────────────────────────────────────────────

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Saved food by name (case-insensitive).
    pub fn food(&self, name: &str) -> Option<&FoodItem> {
        let key = name.to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    /// Insert a food, replacing any saved food with the same name.
    pub fn upsert_food(&mut self, food: FoodItem) {
        match self.foods.iter_mut().find(|f| f.key() == food.key()) {
            Some(existing) => *existing = food,
            None => self.foods.push(food),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Save a recipe and register it as a loggable custom food.
    pub fn save_recipe(&mut self, recipe: Recipe) -> FoodItem {
        let food = recipe.to_food_item();
        let key = recipe.name.to_lowercase();
        match self.recipes.iter_mut().find(|r| r.name.to_lowercase() == key) {
            Some(existing) => *existing = recipe,
            None => self.recipes.push(recipe),
        }
        self.upsert_food(food.clone());
        info!(recipe = %food.name, "recipe saved");
        food
    }

    // ── Diary ───────────────────────────────────────────────────────────────

    pub fn diary(&self) -> &[DiaryEntry] {
        &self.diary
    }

    /// Log a portion of `food`. The food is saved for reuse if not already known.
    pub fn log_food(
        &mut self,
        date: NaiveDate,
        meal: MealType,
        food: &FoodItem,
        portion: Portion,
    ) -> &DiaryEntry {
        if self.food(&food.name).is_none() {
            self.foods.push(food.clone());
        }

        let id = self.next_id();
        let entry = DiaryEntry::new(id, date, meal, food, portion);
        info!(
            id,
            food = %entry.food_name,
            kcal = entry.nutrients.calories,
            meal = meal.as_str(),
            "diary entry added"
        );
        self.diary.push(entry);
        &self.diary[self.diary.len() - 1]
    }

    pub fn delete_entry(&mut self, id: u64) -> Result<DiaryEntry> {
        let pos = self
            .diary
            .iter()
            .position(|e| e.id == id)
            .ok_or(TrackerError::EntryNotFound(id))?;
        info!(id, "diary entry deleted");
        Ok(self.diary.remove(pos))
    }

    pub fn entries_on(&self, date: NaiveDate) -> Vec<DiaryEntry> {
        self.diary.iter().filter(|e| e.date == date).cloned().collect()
    }

    /// Entries dated within `[from, to]`, oldest first.
    pub fn entries_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<&DiaryEntry> {
        let mut entries: Vec<&DiaryEntry> = self
            .diary
            .iter()
            .filter(|e| e.date >= from && e.date <= to)
            .collect();
        entries.sort_by_key(|e| (e.date, e.id));
        entries
    }

    // ── Workouts ────────────────────────────────────────────────────────────

    pub fn workouts(&self) -> &[ActivityLog] {
        &self.workouts
    }

    /// Log a workout, snapshotting the estimated burn rounded to whole kcal.
    pub fn log_workout(
        &mut self,
        date: NaiveDate,
        activity_type: &str,
        duration_minutes: f64,
        estimator: &BurnEstimator,
    ) -> &ActivityLog {
        let weight = self.body_weight();
        let burned = estimator
            .estimate_burn(activity_type, weight, duration_minutes)
            .round();

        let id = self.next_id();
        info!(id, activity = activity_type, kcal = burned, "workout logged");
        self.workouts.push(ActivityLog {
            id,
            date,
            activity_type: activity_type.to_string(),
            duration_minutes,
            calories_burned: burned,
        });
        &self.workouts[self.workouts.len() - 1]
    }

    pub fn delete_workout(&mut self, id: u64) -> Result<ActivityLog> {
        let pos = self
            .workouts
            .iter()
            .position(|w| w.id == id)
            .ok_or(TrackerError::EntryNotFound(id))?;
        info!(id, "workout deleted");
        Ok(self.workouts.remove(pos))
    }

    /// Calories burned on one date.
    pub fn burned_on(&self, date: NaiveDate) -> f64 {
        self.workouts
            .iter()
            .filter(|w| w.date == date)
            .map(|w| w.calories_burned)
            .sum()
    }

    /// Calories burned in the seven days ending on `end` (inclusive).
    pub fn burned_in_week(&self, end: NaiveDate) -> f64 {
        let start = end - Duration::days(WEEKLY_WINDOW_DAYS);
        self.workouts
            .iter()
            .filter(|w| w.date > start && w.date <= end)
            .map(|w| w.calories_burned)
            .sum()
    }

    /// Most recent workouts first.
    pub fn recent_workouts(&self, limit: usize) -> Vec<&ActivityLog> {
        let mut logs: Vec<&ActivityLog> = self.workouts.iter().collect();
        logs.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        logs.truncate(limit);
        logs
    }

    /// Workouts dated within `[from, to]`, oldest first.
    pub fn workouts_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<&ActivityLog> {
        let mut logs: Vec<&ActivityLog> = self
            .workouts
            .iter()
            .filter(|w| w.date >= from && w.date <= to)
            .collect();
        logs.sort_by_key(|w| (w.date, w.id));
        logs
    }

    // ── Water ───────────────────────────────────────────────────────────────

    pub fn add_water(&mut self, date: NaiveDate, amount_ml: f64) -> &WaterEntry {
        let id = self.next_id();
        info!(id, ml = amount_ml, "water added");
        self.water.push(WaterEntry {
            id,
            date,
            amount_ml,
        });
        &self.water[self.water.len() - 1]
    }

    /// Remove the most recently added water entry for `date`, if any.
    pub fn remove_last_water(&mut self, date: NaiveDate) -> Option<WaterEntry> {
        let pos = self
            .water
            .iter()
            .enumerate()
            .filter(|(_, w)| w.date == date)
            .max_by_key(|(_, w)| w.id)
            .map(|(i, _)| i)?;
        let removed = self.water.remove(pos);
        info!(id = removed.id, "water entry removed");
        Some(removed)
    }

    pub fn water_on(&self, date: NaiveDate) -> f64 {
        self.water
            .iter()
            .filter(|w| w.date == date)
            .map(|w| w.amount_ml)
            .sum()
    }

    // ── Summary ─────────────────────────────────────────────────────────────

    /// Energy budget for one date using the stored goals and workouts.
    pub fn budget_for(&self, date: NaiveDate) -> BudgetResult {
        compute_budget(&self.entries_on(date), self.burned_on(date), &self.goals)
    }
}
