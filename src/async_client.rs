//! Async wrapper around [`DaylightSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! Requests are still issued one after another, so table ordering and
//! abort-on-first-error behave exactly as in the blocking SDK.
//!
//! # Example
//!
//! ```no_run
//! use daylight_sdk::{config, AsyncDaylightSdk};
//!
//! # async fn example() -> daylight_sdk::Result<()> {
//! let sdk = AsyncDaylightSdk::builder().build().await?;
//! let table = sdk
//!     .annual_table(config::sample_locations(), 2021, config::DEFAULT_STRIDE_DAYS)
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::error::{DaylightError, Result};
use crate::models::{AnnualTable, Locations, SolarRecord};
use crate::{config, DaylightSdk};

// ---------------------------------------------------------------------------
// AsyncDaylightSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncDaylightSdk`] instance.
pub struct AsyncDaylightSdkBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for AsyncDaylightSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl AsyncDaylightSdkBuilder {
    /// Point the SDK at a different endpoint.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK.
    ///
    /// The blocking HTTP client is created on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncDaylightSdk> {
        tokio::task::spawn_blocking(move || {
            let sdk = DaylightSdk::builder()
                .base_url(&self.base_url)
                .timeout(self.timeout)
                .build()?;
            Ok(AsyncDaylightSdk {
                inner: Arc::new(sdk),
            })
        })
        .await
        .map_err(|e| DaylightError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncDaylightSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`DaylightSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`].
pub struct AsyncDaylightSdk {
    inner: Arc<DaylightSdk>,
}

impl AsyncDaylightSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncDaylightSdkBuilder {
        AsyncDaylightSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&DaylightSdk` and should return a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DaylightSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| DaylightError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the UTC solar events for one coordinate pair and date.
    pub async fn fetch(&self, lat: f64, lng: f64, date: NaiveDate) -> Result<SolarRecord> {
        self.run(move |s| s.fetch(lat, lng, date)).await
    }

    /// Build an annual table on the blocking pool.
    pub async fn annual_table(
        &self,
        locations: Locations,
        year: i32,
        stride_days: u32,
    ) -> Result<AnnualTable> {
        self.run(move |s| s.annual_table(&locations, year, stride_days))
            .await
    }

    /// Release the SDK, dropping the HTTP client on the blocking pool.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            drop(self.inner);
            Ok(())
        })
        .await
        .map_err(|e| DaylightError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
