use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// A profile field needed for the calorie target is absent or not a positive number.
    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    #[error("Entry not found: {0}")]
    EntryNotFound(u64),

    #[error("Unknown activity: {0}")]
    UnknownActivity(String),

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
