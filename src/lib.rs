//! Daylight SDK for Rust.
//!
//! Fetches sunrise/sunset times from the sunrise-sunset.org API, converts
//! them from UTC into each location's local time, and aggregates them over
//! a calendar year into a table ready for charting or SQL analysis.
//!
//! # Quick start
//!
//! ```no_run
//! use daylight_sdk::{config, DaylightSdk};
//!
//! let sdk = DaylightSdk::builder().build().unwrap();
//!
//! // One year of samples, every 30 days, for three cities
//! let table = sdk.annual_table(&config::sample_locations(), 2021, config::DEFAULT_STRIDE_DAYS).unwrap();
//!
//! // Per-city day-length statistics via DuckDB
//! let summary = sdk.store(&table).unwrap().daylight_summary().unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod aggregate;
pub mod chart;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod normalize;
pub mod sql_builder;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncDaylightSdk;
pub use aggregate::{build_annual_table, sample_dates};
pub use chart::{chart_spec, daylight_bands, ChartSpec, PlotConfig};
pub use error::{DaylightError, Result};
pub use fetcher::{SolarSource, SunriseClient};
pub use models::{
    AnnualTable, DaylightSummary, LocalSample, Location, Locations, SolarEvent, SolarEvents,
    SolarRecord,
};
pub use normalize::{change_tz, fractional_hour, localize, localize_event};
pub use sql_builder::SqlBuilder;
pub use store::TableStore;

use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// DaylightSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DaylightSdk`] instance.
///
/// Use [`DaylightSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DaylightSdkBuilder::build) to create the SDK.
pub struct DaylightSdkBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for DaylightSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl DaylightSdkBuilder {
    /// Point the SDK at a different endpoint (the full `.../json` URL).
    ///
    /// Defaults to [`config::API_BASE`].
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK, creating its HTTP client. No request is sent yet.
    pub fn build(self) -> Result<DaylightSdk> {
        let client = SunriseClient::new(&self.base_url, self.timeout)?;
        Ok(DaylightSdk { client })
    }
}

// ---------------------------------------------------------------------------
// DaylightSdk
// ---------------------------------------------------------------------------

/// The main entry point: fetch, localize, aggregate, analyse.
pub struct DaylightSdk {
    client: SunriseClient,
}

impl DaylightSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> DaylightSdkBuilder {
        DaylightSdkBuilder::default()
    }

    /// Fetch the UTC solar events for one coordinate pair and date.
    pub fn fetch(&self, lat: f64, lng: f64, date: NaiveDate) -> Result<SolarRecord> {
        self.client.fetch(lat, lng, date)
    }

    /// Fetch one record and localize it into `tz` in a single step.
    pub fn local_sample(&self, lat: f64, lng: f64, date: NaiveDate, tz: &str) -> Result<LocalSample> {
        let record = self.fetch(lat, lng, date)?;
        localize(&record, tz)
    }

    /// Sample every city in `locations` across `year`, one date every
    /// `stride_days` days, starting on January 1st.
    ///
    /// Issues one request per (date, city). Any failure aborts the run.
    pub fn annual_table(
        &self,
        locations: &Locations,
        year: i32,
        stride_days: u32,
    ) -> Result<AnnualTable> {
        build_annual_table(&self.client, locations, year, stride_days)
    }

    /// Load `table` into a fresh in-memory DuckDB store.
    pub fn store(&self, table: &AnnualTable) -> Result<TableStore> {
        TableStore::from_table(table)
    }

    /// Describe the daylight chart for `table` using `config` for styling.
    pub fn chart(&self, table: &AnnualTable, config: PlotConfig) -> ChartSpec {
        chart_spec(table, config)
    }

    /// Return a reference to the underlying [`SunriseClient`].
    pub fn client(&self) -> &SunriseClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DaylightSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DaylightSdk(base_url={})", self.client.base_url())
    }
}
