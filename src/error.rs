#[derive(Debug, thiserror::Error)]
pub enum DaylightError {
    #[error("HTTP error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API returned status {status}")]
    Data { status: String },

    #[error("Unknown timezone: {0}")]
    Timezone(String),

    #[error("Invalid clock time: {0}")]
    TimeParse(String),

    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DaylightError {
    /// True for transport and body-decoding failures, i.e. anything that
    /// went wrong before the API's own status could be inspected.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, DaylightError::Fetch(_) | DaylightError::Json(_))
    }
}

pub type Result<T> = std::result::Result<T, DaylightError>;
