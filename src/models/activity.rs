use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One workout record.
///
/// `calories_burned` is computed once when the log is created and never
/// recomputed, so changing the intensity table leaves history untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: u64,
    pub date: NaiveDate,
    pub activity_type: String,
    pub duration_minutes: f64,
    pub calories_burned: f64,
}

/// One water intake event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterEntry {
    pub id: u64,
    pub date: NaiveDate,
    pub amount_ml: f64,
}
