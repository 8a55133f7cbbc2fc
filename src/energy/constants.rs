// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kg of body weight.
pub const BMR_WEIGHT_COEFF: f64 = 10.0;

/// kcal per cm of height.
pub const BMR_HEIGHT_COEFF: f64 = 6.25;

/// kcal per year of age (subtracted).
pub const BMR_AGE_COEFF: f64 = 5.0;

/// Sex offsets added to the weighted sum.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Goal offsets applied to TDEE
// ─────────────────────────────────────────────────────────────────────────────

pub const LOSE_OFFSET_KCAL: f64 = -500.0;
pub const GAIN_OFFSET_KCAL: f64 = 300.0;

// ─────────────────────────────────────────────────────────────────────────────
// Default goals
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie goal used until a profile yields a target.
pub const DEFAULT_CALORIE_GOAL: f64 = 2000.0;

pub const DEFAULT_PROTEIN_GOAL_G: f64 = 160.0;
pub const DEFAULT_CARBS_GOAL_G: f64 = 250.0;
pub const DEFAULT_FAT_GOAL_G: f64 = 70.0;

/// Daily water target.
pub const WATER_GOAL_ML: f64 = 2500.0;

/// One glass, the increment used by the water tracker.
pub const WATER_STEP_ML: f64 = 250.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity
// ─────────────────────────────────────────────────────────────────────────────

/// Body weight assumed for burn estimates when the profile has none.
pub const FALLBACK_WEIGHT_KG: f64 = 75.0;

/// Days covered by the rolling workout summary.
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Upper bound for progress percentages.
pub const PROGRESS_MAX: f64 = 100.0;

/// Minutes per hour, for MET duration conversion.
pub const MINUTES_PER_HOUR: f64 = 60.0;
