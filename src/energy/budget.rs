use serde::Serialize;

use crate::energy::constants::PROGRESS_MAX;
use crate::models::{DiaryEntry, MealType, NutrientAmounts, NutritionGoals};

/// Consumption against a goal, with a progress bar fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroProgress {
    /// Raw amount consumed; may exceed the goal.
    pub consumed: f64,
    pub goal: f64,
    /// Percentage of the goal, saturating at 100.
    pub percent: f64,
}

impl MacroProgress {
    pub fn new(consumed: f64, goal: f64) -> Self {
        Self {
            consumed,
            goal,
            percent: progress_percent(consumed, goal),
        }
    }

    pub fn is_over(&self) -> bool {
        self.consumed > self.goal
    }
}

/// `100 * consumed / goal`, clamped to [0, 100].
///
/// A non-positive goal reads as 100 once anything is consumed and 0 otherwise.
pub fn progress_percent(consumed: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        let percent = PROGRESS_MAX * consumed / goal;
        if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, PROGRESS_MAX)
        }
    } else if consumed > 0.0 {
        PROGRESS_MAX
    } else {
        0.0
    }
}

/// Daily energy budget for a set of diary entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetResult {
    pub totals: NutrientAmounts,
    pub goals: NutritionGoals,
    pub burned_calories: f64,

    /// Calorie goal plus calories earned back through activity.
    pub total_budget: f64,

    /// Signed: negative when over budget.
    pub remaining: f64,

    /// Calories eaten as a percentage of `total_budget`.
    pub calorie_percent: f64,

    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fat: MacroProgress,
}

impl BudgetResult {
    /// Remaining calories floored at zero, for display.
    pub fn remaining_clamped(&self) -> f64 {
        self.remaining.max(0.0)
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Aggregate a day's entries against its goals.
///
/// Burned calories extend the allowance. The result does not depend on the
/// order of `entries`.
pub fn compute_budget(
    entries: &[DiaryEntry],
    burned_calories: f64,
    goals: &NutritionGoals,
) -> BudgetResult {
    let totals = NutrientAmounts::total(entries.iter().map(|e| &e.nutrients));
    let total_budget = goals.calories + burned_calories;

    BudgetResult {
        totals,
        goals: *goals,
        burned_calories,
        total_budget,
        remaining: total_budget - totals.calories,
        calorie_percent: progress_percent(totals.calories, total_budget),
        protein: MacroProgress::new(totals.protein_g, goals.protein_g),
        carbs: MacroProgress::new(totals.carbs_g, goals.carbs_g),
        fat: MacroProgress::new(totals.fat_g, goals.fat_g),
    }
}

/// Entries of one meal slot with their subtotal.
#[derive(Debug, Clone)]
pub struct MealSection<'a> {
    pub meal: MealType,
    pub entries: Vec<&'a DiaryEntry>,
    pub totals: NutrientAmounts,
}

/// Split entries into the four meal slots, in display order.
///
/// Every slot is present, even when empty.
pub fn meal_sections(entries: &[DiaryEntry]) -> Vec<MealSection<'_>> {
    MealType::ALL
        .into_iter()
        .map(|meal| {
            let in_meal: Vec<&DiaryEntry> = entries.iter().filter(|e| e.meal == meal).collect();
            let totals = NutrientAmounts::total(in_meal.iter().map(|e| &e.nutrients));
            MealSection {
                meal,
                entries: in_meal,
                totals,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodItem, Portion};
    use chrono::NaiveDate;

    fn entry(id: u64, meal: MealType, cal: f64, p: f64, c: f64, f: f64) -> DiaryEntry {
        let date = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
        let food = FoodItem::new(format!("food{}", id), NutrientAmounts::new(cal, p, c, f));
        DiaryEntry::new(id, date, meal, &food, Portion::Grams(100.0))
    }

    #[test]
    fn test_progress_percent_bounds() {
        assert_eq!(progress_percent(90.0, 180.0), 50.0);
        assert_eq!(progress_percent(300.0, 180.0), 100.0);
        assert_eq!(progress_percent(-5.0, 180.0), 0.0);
        assert_eq!(progress_percent(10.0, 0.0), 100.0);
        assert_eq!(progress_percent(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_over_budget_is_signed() {
        let entries = vec![entry(1, MealType::Dinner, 2500.0, 0.0, 0.0, 0.0)];
        let budget = compute_budget(&entries, 100.0, &NutritionGoals::default());
        assert_eq!(budget.total_budget, 2100.0);
        assert_eq!(budget.remaining, -400.0);
        assert_eq!(budget.remaining_clamped(), 0.0);
        assert!(budget.is_over_budget());
        assert_eq!(budget.calorie_percent, 100.0);
    }

    #[test]
    fn test_macro_saturates_but_keeps_raw_value() {
        let entries = vec![entry(1, MealType::Lunch, 1200.0, 300.0, 10.0, 5.0)];
        let goals = NutritionGoals {
            protein_g: 180.0,
            ..Default::default()
        };
        let budget = compute_budget(&entries, 0.0, &goals);
        assert_eq!(budget.protein.percent, 100.0);
        assert_eq!(budget.protein.consumed, 300.0);
        assert!(budget.protein.is_over());
        assert!(!budget.fat.is_over());
    }

    #[test]
    fn test_meal_sections_cover_all_slots() {
        let entries = vec![
            entry(1, MealType::Snack, 150.0, 1.0, 20.0, 7.0),
            entry(2, MealType::Breakfast, 400.0, 20.0, 50.0, 10.0),
            entry(3, MealType::Snack, 100.0, 0.0, 25.0, 0.0),
        ];
        let sections = meal_sections(&entries);

        let meals: Vec<MealType> = sections.iter().map(|s| s.meal).collect();
        assert_eq!(meals, MealType::ALL.to_vec());
        assert_eq!(sections[0].entries.len(), 1);
        assert!(sections[1].entries.is_empty());
        assert_eq!(sections[3].totals.calories, 250.0);
    }
}
