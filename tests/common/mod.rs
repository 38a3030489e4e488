//! Shared fixtures for the daylight SDK integration tests.
//!
//! Provides canned API bodies, a `FixtureSource` that answers fetches
//! without touching the network, a one-shot local HTTP server, and a
//! helper for hand-built `LocalSample` rows.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use chrono::{NaiveDate, NaiveTime};
use daylight_sdk::{DaylightError, LocalSample, Result, SolarRecord, SolarSource};

/// Boston, 2022-02-15, as returned by api.sunrise-sunset.org.
pub const BOSTON_BODY: &str = r#"{
    "results": {
        "sunrise": "11:38:48 AM",
        "sunset": "10:17:50 PM",
        "solar_noon": "4:58:19 PM",
        "day_length": "10:39:02",
        "civil_twilight_begin": "11:11:30 AM",
        "civil_twilight_end": "10:45:08 PM",
        "nautical_twilight_begin": "10:38:37 AM",
        "nautical_twilight_end": "11:18:00 PM",
        "astronomical_twilight_begin": "10:06:05 AM",
        "astronomical_twilight_end": "11:50:33 PM"
    },
    "status": "OK"
}"#;

pub const INVALID_REQUEST_BODY: &str = r#"{"results": "", "status": "INVALID_REQUEST"}"#;

pub const BOSTON_LAT: f64 = 42.3601;
pub const BOSTON_LNG: f64 = -71.0589;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

pub fn boston_record() -> SolarRecord {
    SolarRecord::from_response(BOSTON_BODY, BOSTON_LAT, BOSTON_LNG, date(2022, 2, 15)).unwrap()
}

/// Build a record with the given UTC sunrise/sunset strings; the other
/// events reuse the Boston values.
pub fn record_with(sunrise: &str, sunset: &str, d: NaiveDate) -> SolarRecord {
    let mut value: serde_json::Value = serde_json::from_str(BOSTON_BODY).unwrap();
    value["results"]["sunrise"] = serde_json::Value::String(sunrise.to_string());
    value["results"]["sunset"] = serde_json::Value::String(sunset.to_string());
    SolarRecord::from_response(&value.to_string(), BOSTON_LAT, BOSTON_LNG, d).unwrap()
}

/// Answers every fetch with the Boston body, tagged with the requested
/// coordinates and date, and records each call.
///
/// `fail_on_call` makes the n-th call (1-based) return a `Data` error.
pub struct FixtureSource {
    pub calls: RefCell<Vec<(f64, f64, NaiveDate)>>,
    pub fail_on_call: Option<usize>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on_call: None,
        }
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on_call: Some(call),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl SolarSource for FixtureSource {
    fn fetch(&self, lat: f64, lng: f64, date: NaiveDate) -> Result<SolarRecord> {
        self.calls.borrow_mut().push((lat, lng, date));
        if Some(self.call_count()) == self.fail_on_call {
            return Err(DaylightError::Data {
                status: "INVALID_REQUEST".to_string(),
            });
        }
        SolarRecord::from_response(BOSTON_BODY, lat, lng, date)
    }
}

/// Hand-built row with fractional hours derived from the times.
pub fn sample(city: &str, d: NaiveDate, sunrise: NaiveTime, sunset: NaiveTime) -> LocalSample {
    LocalSample {
        city: Some(city.to_string()),
        date: d,
        lat_lng: (0.0, 0.0),
        sunrise,
        sunrise_hr: daylight_sdk::fractional_hour(&sunrise),
        sunset,
        sunset_hr: daylight_sdk::fractional_hour(&sunset),
    }
}

/// Serve a single HTTP response with `body` on an ephemeral local port.
///
/// Returns the endpoint URL and a handle yielding the raw request text.
pub fn serve_once(body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 8192];
        let n = stream.read(&mut buf).unwrap();
        let request = String::from_utf8_lossy(&buf[..n]).to_string();
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });
    (format!("http://{}/json", addr), handle)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
