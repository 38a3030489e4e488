//! Renderer-neutral description of the per-city daylight chart.
//!
//! Styling lives in an explicit [`PlotConfig`] value handed to whoever
//! draws the chart; nothing here keeps process-wide plotting state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::AnnualTable;

/// Styling for the daylight chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub font_scale: f64,
    /// Width and height in inches.
    pub figure_size: (f64, f64),
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub grid_line_style: String,
    pub grid_line_width: f64,
    /// Degrees.
    pub x_tick_rotation: f64,
    pub legend: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            font_scale: 1.2,
            figure_size: (10.0, 6.0),
            title: "Daylight at each location".to_string(),
            x_label: "Date".to_string(),
            y_label: "Local Military Time".to_string(),
            grid: true,
            grid_line_style: "--".to_string(),
            grid_line_width: 0.5,
            x_tick_rotation: 45.0,
            legend: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    pub date: NaiveDate,
    pub sunrise_hr: f64,
    pub sunset_hr: f64,
}

/// Filled region between sunrise and sunset for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaylightBand {
    pub city: String,
    pub points: Vec<BandPoint>,
}

/// Everything a renderer needs: styling plus one band per city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub config: PlotConfig,
    pub bands: Vec<DaylightBand>,
}

/// Group `table` into one band per city, cities in order of first
/// appearance and points by ascending date. Untagged rows are skipped.
pub fn daylight_bands(table: &AnnualTable) -> Vec<DaylightBand> {
    table
        .cities()
        .into_iter()
        .map(|city| {
            let mut points: Vec<BandPoint> = table
                .for_city(city)
                .map(|row| BandPoint {
                    date: row.date,
                    sunrise_hr: row.sunrise_hr,
                    sunset_hr: row.sunset_hr,
                })
                .collect();
            points.sort_by_key(|p| p.date);
            DaylightBand {
                city: city.to_string(),
                points,
            }
        })
        .collect()
}

pub fn chart_spec(table: &AnnualTable, config: PlotConfig) -> ChartSpec {
    ChartSpec {
        config,
        bands: daylight_bands(table),
    }
}
