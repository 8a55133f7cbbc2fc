use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::warn;

use crate::energy::constants::MINUTES_PER_HOUR;

/// Approximate METs from the Compendium of Physical Activities.
const STANDARD_ACTIVITIES: [(&str, f64, &str); 10] = [
    ("weightlifting_light", 3.5, "Weightlifting (Light/Moderate)"),
    ("weightlifting_vigorous", 6.0, "Weightlifting (Heavy/Vigorous)"),
    ("running_slow", 8.0, "Running (Jogging)"),
    ("running_fast", 11.5, "Running (Fast)"),
    ("cycling_leisure", 4.0, "Cycling (Leisure)"),
    ("cycling_vigorous", 10.0, "Cycling (Vigorous)"),
    ("yoga", 2.5, "Yoga / Stretching"),
    ("walking", 3.5, "Walking"),
    ("hiit", 8.0, "HIIT / Circuit"),
    ("swimming", 7.0, "Swimming"),
];

/// Minimum Jaro-Winkler similarity for an activity suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// One row of the activity intensity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityIntensity {
    pub key: String,
    pub met_factor: f64,
    pub display_label: String,
}

/// Immutable mapping from activity key to MET factor.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityIntensityTable {
    entries: Vec<ActivityIntensity>,
}

impl ActivityIntensityTable {
    /// Build a table from rows. A repeated key replaces the earlier row in place.
    pub fn new(rows: Vec<ActivityIntensity>) -> Self {
        let mut entries: Vec<ActivityIntensity> = Vec::with_capacity(rows.len());
        for row in rows {
            match entries.iter_mut().find(|e| e.key == row.key) {
                Some(existing) => *existing = row,
                None => entries.push(row),
            }
        }
        Self { entries }
    }

    /// The built-in table of common workouts.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_ACTIVITIES
                .iter()
                .map(|(key, met, label)| ActivityIntensity {
                    key: key.to_string(),
                    met_factor: *met,
                    display_label: label.to_string(),
                })
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&ActivityIntensity> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn met(&self, key: &str) -> Option<f64> {
        self.get(key).map(|e| e.met_factor)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Rows in table order.
    pub fn entries(&self) -> &[ActivityIntensity] {
        &self.entries
    }

    /// Label for a key, falling back to the key itself.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).map(|e| e.display_label.as_str()).unwrap_or(key)
    }

    /// Rows whose key or label resembles `input`, best match first.
    pub fn suggest(&self, input: &str) -> Vec<&ActivityIntensity> {
        let needle = input.to_lowercase();
        let mut scored: Vec<(&ActivityIntensity, f64)> = self
            .entries
            .iter()
            .map(|e| {
                let by_key = jaro_winkler(&e.key, &needle);
                let by_label = jaro_winkler(&e.display_label.to_lowercase(), &needle);
                (e, by_key.max(by_label))
            })
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(e, _)| e).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ActivityIntensityTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Energy expenditure for a MET factor: `met * weight_kg * hours`.
#[inline]
pub fn calories_burned(met: f64, weight_kg: f64, duration_minutes: f64) -> f64 {
    met * weight_kg * (duration_minutes / MINUTES_PER_HOUR)
}

/// Estimates calories burned using an injected intensity table.
#[derive(Debug, Clone, Default)]
pub struct BurnEstimator {
    table: ActivityIntensityTable,
}

impl BurnEstimator {
    pub fn new(table: ActivityIntensityTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ActivityIntensityTable {
        &self.table
    }

    /// Estimated kcal for `duration_minutes` of `activity_type` at `weight_kg`.
    ///
    /// An activity missing from the table has zero intensity and burns 0 kcal.
    /// Inputs are not range-checked; negative values yield negative results.
    pub fn estimate_burn(&self, activity_type: &str, weight_kg: f64, duration_minutes: f64) -> f64 {
        let met = match self.table.met(activity_type) {
            Some(met) => met,
            None => {
                warn!(activity = activity_type, "unknown activity type, using zero intensity");
                0.0
            }
        };
        calories_burned(met, weight_kg, duration_minutes)
    }
}
