mod export;
mod journal;
mod persistence;

pub use export::{write_diary_csv, write_workouts_csv};
pub use journal::Journal;
pub use persistence::{load_activity_table, load_journal, load_or_new, save_journal};
