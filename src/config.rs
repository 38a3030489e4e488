use std::time::Duration;

use crate::models::{Location, Locations};

pub const API_BASE: &str = "https://api.sunrise-sunset.org/json";

/// Zone of every clock string the API returns.
pub const API_ZONE: &str = "UTC";

pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_STRIDE_DAYS: u32 = 30;

pub fn sample_locations() -> Locations {
    Locations::from_iter([
        ("Boston", Location::new(42.3601, -71.0589, "US/Eastern")),
        ("Lusaka", Location::new(-15.3875, 28.3228, "Africa/Lusaka")),
        ("Sydney", Location::new(-33.8688, 151.2093, "Australia/Sydney")),
    ])
}
