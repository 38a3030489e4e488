//! Chart preparation tests.

mod common;

use common::{date, hms, sample};
use daylight_sdk::{chart_spec, daylight_bands, AnnualTable, LocalSample, PlotConfig};

#[test]
fn plot_config_defaults() {
    let config = PlotConfig::default();
    assert_eq!(config.font_scale, 1.2);
    assert_eq!(config.figure_size, (10.0, 6.0));
    assert_eq!(config.title, "Daylight at each location");
    assert_eq!(config.x_label, "Date");
    assert_eq!(config.y_label, "Local Military Time");
    assert!(config.grid);
    assert_eq!(config.x_tick_rotation, 45.0);
}

#[test]
fn bands_follow_first_appearance_and_date_order() {
    let table = AnnualTable::from_iter([
        sample("Sydney", date(2021, 2, 1), hms(6, 30, 0), hms(20, 0, 0)),
        sample("Boston", date(2021, 2, 1), hms(6, 55, 0), hms(17, 5, 0)),
        sample("Sydney", date(2021, 1, 1), hms(5, 45, 0), hms(20, 15, 0)),
    ]);

    let bands = daylight_bands(&table);

    assert_eq!(bands.len(), 2);
    assert_eq!(bands[0].city, "Sydney");
    assert_eq!(bands[0].points.len(), 2);
    assert_eq!(bands[0].points[0].date, date(2021, 1, 1));
    assert_eq!(bands[0].points[0].sunrise_hr, 5.75);
    assert_eq!(bands[0].points[1].date, date(2021, 2, 1));
    assert_eq!(bands[1].city, "Boston");
    assert_eq!(bands[1].points.len(), 1);
}

#[test]
fn untagged_rows_are_not_charted() {
    let mut untagged: LocalSample = sample("x", date(2021, 1, 1), hms(6, 0, 0), hms(18, 0, 0));
    untagged.city = None;
    let table = AnnualTable::from_iter([untagged]);
    assert!(daylight_bands(&table).is_empty());
}

#[test]
fn chart_spec_carries_explicit_config() {
    let table = AnnualTable::from_iter([sample("Lusaka", date(2021, 1, 1), hms(5, 40, 0), hms(18, 50, 0))]);
    let config = PlotConfig {
        font_scale: 2.0,
        ..PlotConfig::default()
    };

    let spec = chart_spec(&table, config.clone());
    assert_eq!(spec.config, config);
    assert_eq!(spec.bands.len(), 1);

    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["config"]["font_scale"], 2.0);
    assert_eq!(json["bands"][0]["city"], "Lusaka");
    assert_eq!(json["bands"][0]["points"][0]["date"], "2021-01-01");
}
