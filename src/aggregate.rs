//! Annual aggregation: walk a year at a fixed stride and collect one
//! localized sample per (date, city).

use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, info};

use crate::error::{DaylightError, Result};
use crate::fetcher::SolarSource;
use crate::models::{AnnualTable, Locations};
use crate::normalize::{localize, parse_tz};

/// Dates sampled for `year` at `stride_days`: Jan 1, Jan 1 + stride, ...
/// while the date stays inside `year`.
pub fn sample_dates(year: i32, stride_days: u32) -> Result<Vec<NaiveDate>> {
    validate(year, stride_days)?;

    let mut dates = Vec::new();
    let mut cycle_day = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| DaylightError::InvalidArgument(format!("year {} out of range", year)))?;
    while cycle_day.year() == year {
        dates.push(cycle_day);
        match cycle_day.checked_add_days(Days::new(u64::from(stride_days))) {
            Some(next) => cycle_day = next,
            None => break,
        }
    }
    Ok(dates)
}

/// Fetch and localize every (sampled date, city) pair of `year`.
///
/// Rows come out grouped by date, cities in `locations` insertion order.
/// The first fetch or normalization error aborts the whole run.
pub fn build_annual_table<S: SolarSource>(
    source: &S,
    locations: &Locations,
    year: i32,
    stride_days: u32,
) -> Result<AnnualTable> {
    let dates = sample_dates(year, stride_days)?;

    // Unknown zones fail here, before any request is made.
    for (_, loc) in locations.iter() {
        parse_tz(&loc.tz)?;
    }

    let mut table = AnnualTable::with_capacity(dates.len() * locations.len());
    for date in dates {
        debug!(%date, cities = locations.len(), "sampling");
        for (city, loc) in locations.iter() {
            let record = source.fetch(loc.lat, loc.lng, date)?;
            let sample = localize(&record, &loc.tz)?.with_city(city);
            table.push(sample);
        }
    }

    info!(year, stride_days, rows = table.len(), "built annual table");
    Ok(table)
}

fn validate(year: i32, stride_days: u32) -> Result<()> {
    if stride_days < 1 {
        return Err(DaylightError::InvalidArgument(
            "stride_days must be at least 1".to_string(),
        ));
    }
    if !(1000..=9999).contains(&year) {
        return Err(DaylightError::InvalidArgument(format!(
            "year must have four digits, got {}",
            year
        )));
    }
    Ok(())
}
