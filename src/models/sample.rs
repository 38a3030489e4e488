use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LocalSample -- One normalized sunrise/sunset data point
// ---------------------------------------------------------------------------

/// Sunrise and sunset of one record, expressed in a target zone.
///
/// `sunrise_hr` / `sunset_hr` are the same local times as fractional hours
/// (`hour + minute/60 + second/3600`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalSample {
    pub city: Option<String>,
    pub date: NaiveDate,
    #[serde(rename = "lat-lng")]
    pub lat_lng: (f64, f64),
    pub sunrise: NaiveTime,
    pub sunrise_hr: f64,
    pub sunset: NaiveTime,
    pub sunset_hr: f64,
}

impl LocalSample {
    /// Tag the sample with the city it was taken for.
    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    /// Hours between local sunrise and local sunset.
    ///
    /// When the local sunset reads earlier than the local sunrise (the
    /// event pair straddles local midnight) the span wraps by 24 hours.
    pub fn day_length_hr(&self) -> f64 {
        let span = self.sunset_hr - self.sunrise_hr;
        if span < 0.0 {
            span + 24.0
        } else {
            span
        }
    }
}
