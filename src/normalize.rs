//! Timezone normalization of API records.
//!
//! The API answers with UTC wall-clock strings and no date. Every
//! conversion here re-attaches the record's query date, stamps the result
//! as UTC and reprojects it into the caller's zone using that zone's rules
//! for that specific date.

use chrono::{
    DateTime, LocalResult, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike,
};
use chrono_tz::{OffsetComponents, Tz};

use crate::config;
use crate::error::{DaylightError, Result};
use crate::models::{LocalSample, SolarEvent, SolarRecord};

/// Resolve an IANA zone name (including legacy aliases like `US/Eastern`).
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| DaylightError::Timezone(name.to_string()))
}

/// Parse an API clock string.
///
/// Accepts the 12-hour form used for events (`"4:58:19 PM"`) and the
/// 24-hour form used for `day_length` (`"10:39:02"`).
pub fn parse_clock(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%I:%M:%S %p")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| DaylightError::TimeParse(s.to_string()))
}

/// Attach `timezone_from` to a naive timestamp, then reproject it into
/// `timezone_to`.
///
/// Reprojecting a zone into itself leaves every wall-clock field untouched
/// and only attaches the zone's offset. A local time that occurs twice
/// (DST fall-back) or never (DST spring-forward gap) is read with the
/// zone's standard-time offset.
pub fn change_tz(
    dt: NaiveDateTime,
    timezone_from: &str,
    timezone_to: &str,
) -> Result<DateTime<Tz>> {
    let from = parse_tz(timezone_from)?;
    let to = parse_tz(timezone_to)?;

    let attached = match from.from_local_datetime(&dt) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(first, second) => {
            if first.offset().dst_offset() == TimeDelta::zero() {
                first
            } else {
                second
            }
        }
        LocalResult::None => {
            // Skipped by a DST transition: read with the zone's standard offset
            let standard = from.offset_from_utc_datetime(&dt).base_utc_offset();
            from.from_utc_datetime(&(dt - standard))
        }
    };

    Ok(attached.with_timezone(&to))
}

/// Hour of day as a float: `hour + minute/60 + second/3600`.
pub fn fractional_hour<T: Timelike>(t: &T) -> f64 {
    t.hour() as f64 + t.minute() as f64 / 60.0 + t.second() as f64 / 3600.0
}

/// Convert one event of `record` into `target_tz`.
pub fn localize_event(
    record: &SolarRecord,
    event: SolarEvent,
    target_tz: &str,
) -> Result<DateTime<Tz>> {
    let clock = parse_clock(record.event(event))?;
    change_tz(record.date.and_time(clock), config::API_ZONE, target_tz)
}

/// Reduce a record to its local sunrise and sunset in `target_tz`.
///
/// The sample's `date` is the query date, even if a converted time falls on
/// a neighbouring local calendar day.
pub fn localize(record: &SolarRecord, target_tz: &str) -> Result<LocalSample> {
    let sunrise = localize_event(record, SolarEvent::Sunrise, target_tz)?.time();
    let sunset = localize_event(record, SolarEvent::Sunset, target_tz)?.time();

    Ok(LocalSample {
        city: None,
        date: record.date,
        lat_lng: record.lat_lng,
        sunrise,
        sunrise_hr: fractional_hour(&sunrise),
        sunset,
        sunset_hr: fractional_hour(&sunset),
    })
}
