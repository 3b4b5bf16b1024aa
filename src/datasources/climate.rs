//! Climate CSV loader.
//!
//! Expects the NASA POWER-style daily export the original datasets use:
//!
//! ```text
//! Date,T2M_MAX (°C),T2M_MIN (°C),ALLSKY_SFC_SW_DWN (MJ/m²),PRECTOT (mm)
//! 2018-10-01,28.4,14.1,22.5,0.0
//! ```
//!
//! Rows are parsed into typed records and filtered to the requested season
//! window; everything past this boundary works on typed data only.

use crate::error::Result;
use crate::models::{DailyClimateRecord, Season};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ClimateRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "T2M_MAX (°C)")]
    max_temp_c: f64,
    #[serde(rename = "T2M_MIN (°C)")]
    min_temp_c: f64,
    #[serde(rename = "ALLSKY_SFC_SW_DWN (MJ/m²)")]
    solar_radiation_mj: f64,
    #[serde(rename = "PRECTOT (mm)")]
    precipitation_mm: f64,
}

/// Load the daily climate rows falling inside the season window, in file
/// order. Continuity and per-record validity are checked downstream by the
/// preprocessor, which owns those error messages.
pub fn load_climate_series(path: &Path, season: &Season) -> Result<Vec<DailyClimateRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: ClimateRow = row?;
        if !season.contains(row.date) {
            continue;
        }
        records.push(DailyClimateRecord {
            date: row.date,
            max_temp_c: row.max_temp_c,
            min_temp_c: row.min_temp_c,
            solar_radiation_mj: row.solar_radiation_mj,
            precipitation_mm: row.precipitation_mm,
        });
    }
    tracing::debug!(
        path = %path.display(),
        rows = records.len(),
        "loaded climate series"
    );
    Ok(records)
}
