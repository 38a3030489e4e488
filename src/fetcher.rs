//! Blocking HTTP client for the sunrise-sunset.org API.
//!
//! Each call issues exactly one GET request; there is no retry, caching or
//! rate limiting. Failures surface to the caller unchanged.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use tracing::debug;

use crate::config;
use crate::error::Result;
use crate::models::SolarRecord;

/// Anything that can answer "which solar events happen at (lat, lng) on
/// this date". The aggregator only talks to this trait.
pub trait SolarSource {
    fn fetch(&self, lat: f64, lng: f64, date: NaiveDate) -> Result<SolarRecord>;
}

impl<S: SolarSource + ?Sized> SolarSource for &S {
    fn fetch(&self, lat: f64, lng: f64, date: NaiveDate) -> Result<SolarRecord> {
        (**self).fetch(lat, lng, date)
    }
}

/// Fetches [`SolarRecord`]s from the remote API.
#[derive(Debug, Clone)]
pub struct SunriseClient {
    base_url: String,
    client: Client,
}

impl SunriseClient {
    /// Create a client for `base_url` (the full `.../json` endpoint).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request the solar events for one coordinate pair and date.
    ///
    /// The HTTP status code is not checked: the API reports bad requests
    /// with a JSON body whose `status` is not `OK`, which becomes [`DaylightError::Data`](crate::DaylightError::Data).
    pub fn fetch(&self, lat: f64, lng: f64, date: NaiveDate) -> Result<SolarRecord> {
        let date_param = date.format(config::API_DATE_FORMAT).to_string();
        debug!(lat, lng, date = %date_param, url = %self.base_url, "requesting solar events");

        let body = self
            .client
            .get(&self.base_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lng", lng.to_string()),
                ("date", date_param),
            ])
            .send()?
            .text()?;

        SolarRecord::from_response(&body, lat, lng, date)
    }
}

impl SolarSource for SunriseClient {
    fn fetch(&self, lat: f64, lng: f64, date: NaiveDate) -> Result<SolarRecord> {
        SunriseClient::fetch(self, lat, lng, date)
    }
}
