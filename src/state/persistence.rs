use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::energy::{ActivityIntensity, ActivityIntensityTable};
use crate::error::Result;
use crate::state::Journal;

/// Load a journal from a JSON file.
///
/// Duplicate saved foods are collapsed (last occurrence wins).
pub fn load_journal<P: AsRef<Path>>(path: P) -> Result<Journal> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let mut journal: Journal = serde_json::from_str(&content)?;
    journal.normalize();

    debug!(
        path = %path.display(),
        entries = journal.diary().len(),
        workouts = journal.workouts().len(),
        "journal loaded"
    );
    Ok(journal)
}

/// Load a journal, or start an empty one when the file does not exist yet.
pub fn load_or_new<P: AsRef<Path>>(path: P) -> Result<Journal> {
    let path = path.as_ref();
    if path.exists() {
        load_journal(path)
    } else {
        info!(path = %path.display(), "no journal file, starting empty");
        Ok(Journal::new())
    }
}

/// Save a journal to a JSON file.
pub fn save_journal<P: AsRef<Path>>(path: P, journal: &Journal) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(journal)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "journal saved");
    Ok(())
}

/// Load an activity intensity table from a JSON array of
/// `{ "key", "met_factor", "display_label" }` rows.
pub fn load_activity_table<P: AsRef<Path>>(path: P) -> Result<ActivityIntensityTable> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let rows: Vec<ActivityIntensity> = serde_json::from_str(&content)?;
    info!(path = %path.display(), rows = rows.len(), "activity table loaded");
    Ok(ActivityIntensityTable::new(rows))
}
