use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DaylightSummary -- Per-city aggregate over an annual table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DaylightSummary {
    pub city: Option<String>,
    pub samples: i64,
    pub min_day_length_hr: f64,
    pub max_day_length_hr: f64,
    pub avg_day_length_hr: f64,
    pub earliest_sunrise_hr: f64,
    pub latest_sunset_hr: f64,
}
