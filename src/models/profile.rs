use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::energy::constants::{
    DEFAULT_CALORIE_GOAL, DEFAULT_CARBS_GOAL_G, DEFAULT_FAT_GOAL_G, DEFAULT_PROTEIN_GOAL_G,
};

/// Biological sex, used only for the BMR offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

/// Weight goal applied as a fixed calorie offset on top of TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    pub fn description(&self) -> &'static str {
        match self {
            Goal::Lose => "Lose weight (-500 kcal)",
            Goal::Maintain => "Maintain weight",
            Goal::Gain => "Build muscle (+300 kcal)",
        }
    }
}

/// Recognized activity tiers and their TDEE multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::VeryActive,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::VeryActive => 1.725,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (office job, little exercise)",
            ActivityLevel::Light => "Light activity (1-3 days/week)",
            ActivityLevel::Moderate => "Moderate activity (3-5 days/week)",
            ActivityLevel::VeryActive => "Very active (6-7 days/week)",
        }
    }

    /// Tier whose multiplier equals `factor`, if any.
    pub fn from_factor(factor: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.factor() - factor).abs() < 1e-9)
    }
}

/// Physical attributes used to derive the daily calorie target.
///
/// Weight, height and age are optional because a profile may be partially
/// filled in; the target calculator rejects incomplete profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    #[serde(default)]
    pub weight_kg: Option<f64>,

    #[serde(default)]
    pub height_cm: Option<f64>,

    #[serde(default)]
    pub age_years: Option<f64>,

    #[serde(default)]
    pub sex: Sex,

    /// TDEE multiplier. Normally one of the [`ActivityLevel`] factors, but any
    /// positive value is accepted.
    #[serde(default = "default_activity_factor")]
    pub activity_factor: f64,

    #[serde(default)]
    pub goal: Goal,
}

fn default_activity_factor() -> f64 {
    ActivityLevel::Sedentary.factor()
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self {
            weight_kg: None,
            height_cm: None,
            age_years: None,
            sex: Sex::default(),
            activity_factor: default_activity_factor(),
            goal: Goal::default(),
        }
    }
}

impl ProfileStats {
    /// Build stats from raw text fields as typed by a user.
    ///
    /// Blank or unparsable fields become `None`.
    pub fn from_text(
        weight: &str,
        height: &str,
        age: &str,
        sex: Sex,
        level: ActivityLevel,
        goal: Goal,
    ) -> Self {
        Self {
            weight_kg: parse_number(weight),
            height_cm: parse_number(height),
            age_years: parse_number(age),
            sex,
            activity_factor: level.factor(),
            goal,
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Daily calorie and macro targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIE_GOAL,
            protein_g: DEFAULT_PROTEIN_GOAL_G,
            carbs_g: DEFAULT_CARBS_GOAL_G,
            fat_g: DEFAULT_FAT_GOAL_G,
        }
    }
}

impl NutritionGoals {
    /// Default macro goals with the given calorie target.
    pub fn with_calories(calories: f64) -> Self {
        Self {
            calories,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_factors() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.factor()).collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725]);
        assert_eq!(ActivityLevel::from_factor(1.55), Some(ActivityLevel::Moderate));
        assert_eq!(ActivityLevel::from_factor(1.9), None);
    }

    #[test]
    fn test_from_text_blank_fields_are_missing() {
        let stats = ProfileStats::from_text(
            "80",
            "",
            "abc",
            Sex::Female,
            ActivityLevel::Light,
            Goal::Gain,
        );
        assert_eq!(stats.weight_kg, Some(80.0));
        assert_eq!(stats.height_cm, None);
        assert_eq!(stats.age_years, None);
        assert!((stats.activity_factor - 1.375).abs() < 1e-12);
    }

    #[test]
    fn test_default_goals() {
        let goals = NutritionGoals::default();
        assert_eq!(goals.calories, 2000.0);
        assert_eq!(goals.protein_g, 160.0);
        assert_eq!(goals.carbs_g, 250.0);
        assert_eq!(goals.fat_g, 70.0);
    }

    #[test]
    fn test_profile_deserializes_partial_record() {
        let stats: ProfileStats = serde_json::from_str(r#"{"weight_kg": 70}"#).unwrap();
        assert_eq!(stats.weight_kg, Some(70.0));
        assert_eq!(stats.sex, Sex::Male);
        assert_eq!(stats.goal, Goal::Maintain);
        assert!((stats.activity_factor - 1.2).abs() < 1e-12);
    }
}
