//! Data model tests: location ordering, table accessors, serialized shape.

mod common;

use common::{date, hms, sample};
use daylight_sdk::{config, AnnualTable, Location, Locations};

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[test]
fn locations_iterate_in_insertion_order() {
    let locations = config::sample_locations();
    assert_eq!(locations.cities(), vec!["Boston", "Lusaka", "Sydney"]);
    assert_eq!(locations.len(), 3);
    assert_eq!(locations.get("Lusaka").unwrap().tz, "Africa/Lusaka");
}

#[test]
fn reinserting_a_city_replaces_in_place() {
    let mut locations = config::sample_locations();
    let previous = locations.insert("Boston", Location::new(42.0, -71.0, "America/New_York"));

    assert_eq!(previous.unwrap().tz, "US/Eastern");
    assert_eq!(locations.cities(), vec!["Boston", "Lusaka", "Sydney"]);
    assert_eq!(locations.get("Boston").unwrap().tz, "America/New_York");
}

#[test]
fn missing_city_lookup_is_none() {
    let locations = Locations::new();
    assert!(locations.is_empty());
    assert!(locations.get("Boston").is_none());
}

// ---------------------------------------------------------------------------
// AnnualTable
// ---------------------------------------------------------------------------

fn two_city_table() -> AnnualTable {
    AnnualTable::from_iter([
        sample("Boston", date(2021, 1, 1), hms(7, 0, 0), hms(16, 30, 0)),
        sample("Lusaka", date(2021, 1, 1), hms(5, 40, 0), hms(18, 50, 0)),
        sample("Boston", date(2021, 1, 31), hms(6, 55, 0), hms(17, 5, 0)),
        sample("Lusaka", date(2021, 1, 31), hms(5, 55, 0), hms(18, 52, 0)),
    ])
}

#[test]
fn cities_are_listed_once_in_first_appearance_order() {
    assert_eq!(two_city_table().cities(), vec!["Boston", "Lusaka"]);
}

#[test]
fn for_city_filters_rows() {
    let table = two_city_table();
    let dates: Vec<_> = table.for_city("Lusaka").map(|r| r.date).collect();
    assert_eq!(dates, vec![date(2021, 1, 1), date(2021, 1, 31)]);
    assert_eq!(table.for_city("Sydney").count(), 0);
}

#[test]
fn table_serializes_as_row_array() {
    let value = serde_json::to_value(two_city_table()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["city"], "Boston");
    assert_eq!(rows[0]["date"], "2021-01-01");
    assert_eq!(rows[0]["sunrise"], "07:00:00");
    assert_eq!(rows[0]["sunset_hr"], 16.5);
    assert_eq!(rows[0]["lat-lng"], serde_json::json!([0.0, 0.0]));
}

#[test]
fn write_ndjson_emits_one_line_per_row() {
    let mut buf = Vec::new();
    two_city_table().write_ndjson(&mut buf).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    for line in lines {
        let row: daylight_sdk::LocalSample = serde_json::from_str(line).unwrap();
        assert!(row.city.is_some());
    }
}

#[test]
fn local_sample_round_trips_through_json() {
    let original = sample("Sydney", date(2021, 6, 21), hms(7, 0, 10), hms(16, 53, 45));
    let json = serde_json::to_string(&original).unwrap();
    let back: daylight_sdk::LocalSample = serde_json::from_str(&json).unwrap();
    assert_eq!(back, original);
}
