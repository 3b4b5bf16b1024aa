//! Soil-parameter CSV loader: a single record holding the field capacity and
//! wilting point for the site.

use crate::error::{IrrisimError, Result};
use crate::models::SoilParameters;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SoilRow {
    #[serde(rename = "Field Capacity (mm/m)")]
    field_capacity_mm: f64,
    #[serde(rename = "Wilting Point (mm/m)")]
    wilting_point_mm: f64,
}

/// Load the single soil-parameter record. `SoilParameters::new` enforces the
/// capacity/wilting-point invariants, so a bad file fails here, not mid-run.
pub fn load_soil_parameters(path: &Path) -> Result<SoilParameters> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = reader.deserialize::<SoilRow>();
    let row = rows.next().ok_or_else(|| {
        IrrisimError::InvalidSoilParameters(format!("{}: no data rows", path.display()))
    })??;
    if rows.next().is_some() {
        tracing::warn!(path = %path.display(), "soil file has extra rows, using the first");
    }
    SoilParameters::new(row.field_capacity_mm, row.wilting_point_mm)
}
