use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DaylightError, Result};

// ---------------------------------------------------------------------------
// SolarEvent -- Named time-of-day events reported by the API
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarEvent {
    Sunrise,
    Sunset,
    SolarNoon,
    CivilTwilightBegin,
    CivilTwilightEnd,
    NauticalTwilightBegin,
    NauticalTwilightEnd,
    AstronomicalTwilightBegin,
    AstronomicalTwilightEnd,
}

impl SolarEvent {
    pub const ALL: [SolarEvent; 9] = [
        SolarEvent::AstronomicalTwilightBegin,
        SolarEvent::NauticalTwilightBegin,
        SolarEvent::CivilTwilightBegin,
        SolarEvent::Sunrise,
        SolarEvent::SolarNoon,
        SolarEvent::Sunset,
        SolarEvent::CivilTwilightEnd,
        SolarEvent::NauticalTwilightEnd,
        SolarEvent::AstronomicalTwilightEnd,
    ];

    /// Key of this event in the API's `results` object.
    pub fn key(self) -> &'static str {
        match self {
            SolarEvent::Sunrise => "sunrise",
            SolarEvent::Sunset => "sunset",
            SolarEvent::SolarNoon => "solar_noon",
            SolarEvent::CivilTwilightBegin => "civil_twilight_begin",
            SolarEvent::CivilTwilightEnd => "civil_twilight_end",
            SolarEvent::NauticalTwilightBegin => "nautical_twilight_begin",
            SolarEvent::NauticalTwilightEnd => "nautical_twilight_end",
            SolarEvent::AstronomicalTwilightBegin => "astronomical_twilight_begin",
            SolarEvent::AstronomicalTwilightEnd => "astronomical_twilight_end",
        }
    }
}

// ---------------------------------------------------------------------------
// SolarEvents -- The API's `results` object, strings kept verbatim
// ---------------------------------------------------------------------------

/// UTC clock strings as returned by the API (e.g. `"11:38:48 AM"`).
///
/// `day_length` is a duration in `HH:MM:SS` form rather than a clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarEvents {
    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    pub day_length: String,
    pub civil_twilight_begin: String,
    pub civil_twilight_end: String,
    pub nautical_twilight_begin: String,
    pub nautical_twilight_end: String,
    pub astronomical_twilight_begin: String,
    pub astronomical_twilight_end: String,
}

impl SolarEvents {
    pub fn get(&self, event: SolarEvent) -> &str {
        match event {
            SolarEvent::Sunrise => &self.sunrise,
            SolarEvent::Sunset => &self.sunset,
            SolarEvent::SolarNoon => &self.solar_noon,
            SolarEvent::CivilTwilightBegin => &self.civil_twilight_begin,
            SolarEvent::CivilTwilightEnd => &self.civil_twilight_end,
            SolarEvent::NauticalTwilightBegin => &self.nautical_twilight_begin,
            SolarEvent::NauticalTwilightEnd => &self.nautical_twilight_end,
            SolarEvent::AstronomicalTwilightBegin => &self.astronomical_twilight_begin,
            SolarEvent::AstronomicalTwilightEnd => &self.astronomical_twilight_end,
        }
    }
}

// ---------------------------------------------------------------------------
// SolarRecord -- One API answer tagged with its query
// ---------------------------------------------------------------------------

/// Result of a single fetch: the API's event strings plus the coordinates
/// and date that were asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarRecord {
    pub results: SolarEvents,
    pub status: String,
    #[serde(rename = "lat-lng")]
    pub lat_lng: (f64, f64),
    pub date: NaiveDate,
}

/// Raw response envelope. `results` stays untyped until the status is known
/// to be `OK`, since failed requests carry an empty string there.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    results: serde_json::Value,
    status: String,
}

impl SolarRecord {
    pub const STATUS_OK: &'static str = "OK";

    /// Parse an API response body and tag it with the query parameters.
    ///
    /// Returns [`DaylightError::Data`] when the API reports a status other
    /// than `OK`, and [`DaylightError::Json`] when the body is not the
    /// expected JSON.
    pub fn from_response(body: &str, lat: f64, lng: f64, date: NaiveDate) -> Result<Self> {
        let resp: ApiResponse = serde_json::from_str(body)?;
        if resp.status != Self::STATUS_OK {
            return Err(DaylightError::Data {
                status: resp.status,
            });
        }
        let results: SolarEvents = serde_json::from_value(resp.results)?;
        Ok(Self {
            results,
            status: resp.status,
            lat_lng: (lat, lng),
            date,
        })
    }

    pub fn lat(&self) -> f64 {
        self.lat_lng.0
    }

    pub fn lng(&self) -> f64 {
        self.lat_lng.1
    }

    pub fn event(&self, event: SolarEvent) -> &str {
        self.results.get(event)
    }
}
