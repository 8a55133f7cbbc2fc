use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Energy and macronutrient amounts.
///
/// Used for per-100 g reference values, for a single logged portion, and for
/// aggregated totals alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientAmounts {
    #[serde(default)]
    pub calories: f64,

    #[serde(default)]
    pub protein_g: f64,

    #[serde(default)]
    pub carbs_g: f64,

    #[serde(default)]
    pub fat_g: f64,
}

impl NutrientAmounts {
    pub const ZERO: NutrientAmounts = NutrientAmounts {
        calories: 0.0,
        protein_g: 0.0,
        carbs_g: 0.0,
        fat_g: 0.0,
    };

    pub fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Multiply every field by `factor`.
    #[inline]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
        }
    }

    /// Sum a collection of amounts.
    ///
    /// Each field is summed in ascending value order, so the result is
    /// bit-identical for any permutation of the input.
    pub fn total<'a, I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = &'a NutrientAmounts>,
    {
        let mut calories = Vec::new();
        let mut protein = Vec::new();
        let mut carbs = Vec::new();
        let mut fat = Vec::new();

        for a in amounts {
            calories.push(a.calories);
            protein.push(a.protein_g);
            carbs.push(a.carbs_g);
            fat.push(a.fat_g);
        }

        Self {
            calories: sorted_sum(calories),
            protein_g: sorted_sum(protein),
            carbs_g: sorted_sum(carbs),
            fat_g: sorted_sum(fat),
        }
    }

    /// True when every field is within `epsilon` of `other`.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.calories - other.calories).abs() <= epsilon
            && (self.protein_g - other.protein_g).abs() <= epsilon
            && (self.carbs_g - other.carbs_g).abs() <= epsilon
            && (self.fat_g - other.fat_g).abs() <= epsilon
    }
}

fn sorted_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}

impl Add for NutrientAmounts {
    type Output = NutrientAmounts;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl AddAssign for NutrientAmounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> Sum<&'a NutrientAmounts> for NutrientAmounts {
    fn sum<I: Iterator<Item = &'a NutrientAmounts>>(iter: I) -> Self {
        NutrientAmounts::total(iter)
    }
}

impl Sum for NutrientAmounts {
    fn sum<I: Iterator<Item = NutrientAmounts>>(iter: I) -> Self {
        let collected: Vec<NutrientAmounts> = iter.collect();
        NutrientAmounts::total(&collected)
    }
}
