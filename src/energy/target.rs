use crate::energy::constants::*;
use crate::error::{Result, TrackerError};
use crate::models::{Goal, ProfileStats, Sex};

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day.
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let offset = match sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };
    BMR_WEIGHT_COEFF * weight_kg + BMR_HEIGHT_COEFF * height_cm - BMR_AGE_COEFF * age_years + offset
}

/// Calorie offset applied on top of TDEE for a goal.
pub fn goal_offset(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => LOSE_OFFSET_KCAL,
        Goal::Maintain => 0.0,
        Goal::Gain => GAIN_OFFSET_KCAL,
    }
}

/// Recommended daily calories for a profile, rounded to a whole calorie.
///
/// Fails with [`TrackerError::MissingInput`] when weight, height or age is
/// absent, zero, negative or not finite. No lower bound is applied to the
/// result.
pub fn calculate_daily_target(stats: &ProfileStats) -> Result<i64> {
    let weight = require_positive("weight_kg", stats.weight_kg)?;
    let height = require_positive("height_cm", stats.height_cm)?;
    let age = require_positive("age_years", stats.age_years)?;

    let bmr = basal_metabolic_rate(weight, height, age, stats.sex);
    let tdee = bmr * stats.activity_factor;
    let target = tdee + goal_offset(stats.goal);

    Ok(round_half_up(target))
}

fn require_positive(field: &'static str, value: Option<f64>) -> Result<f64> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(TrackerError::MissingInput(field)),
    }
}

/// Round to the nearest integer, ties toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(goal: Goal) -> ProfileStats {
        ProfileStats {
            weight_kg: Some(70.0),
            height_cm: Some(170.0),
            age_years: Some(30.0),
            sex: Sex::Male,
            activity_factor: 1.2,
            goal,
        }
    }

    #[test]
    fn test_bmr_male_and_female() {
        assert!((basal_metabolic_rate(70.0, 170.0, 30.0, Sex::Male) - 1617.5).abs() < 1e-9);
        assert!((basal_metabolic_rate(70.0, 170.0, 30.0, Sex::Female) - 1451.5).abs() < 1e-9);
    }

    #[test]
    fn test_target_per_goal() {
        assert_eq!(calculate_daily_target(&stats(Goal::Maintain)).unwrap(), 1941);
        assert_eq!(calculate_daily_target(&stats(Goal::Lose)).unwrap(), 1441);
        assert_eq!(calculate_daily_target(&stats(Goal::Gain)).unwrap(), 2241);
    }

    #[test]
    fn test_missing_field_is_invalid() {
        let mut s = stats(Goal::Maintain);
        s.height_cm = None;
        assert!(matches!(
            calculate_daily_target(&s),
            Err(TrackerError::MissingInput("height_cm"))
        ));
    }

    #[test]
    fn test_zero_and_nan_are_invalid() {
        let mut s = stats(Goal::Maintain);
        s.age_years = Some(0.0);
        assert!(calculate_daily_target(&s).is_err());

        s.age_years = Some(f64::NAN);
        assert!(calculate_daily_target(&s).is_err());
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(1909.5), 1910);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(1909.49), 1909);
    }
}
