//! Crop-coefficient schedule CSV loader.
//!
//! ```text
//! Day After Planting,Kc
//! 0,0.30
//! 26,0.70
//! ```

use crate::error::Result;
use crate::models::{CropCoefficientSchedule, KcEntry};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct KcRow {
    #[serde(rename = "Day After Planting")]
    day_after_planting: u32,
    #[serde(rename = "Kc")]
    kc: f64,
}

/// Load a Kc schedule. Ordering, duplicate keys, negative values, and
/// season-start coverage are all rejected by the schedule constructor, so a
/// file that would leave early days without a Kc fails right here.
pub fn load_kc_schedule(path: &Path) -> Result<CropCoefficientSchedule> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    for row in reader.deserialize() {
        let row: KcRow = row?;
        entries.push(KcEntry {
            day_after_planting: row.day_after_planting,
            kc: row.kc,
        });
    }
    tracing::debug!(path = %path.display(), entries = entries.len(), "loaded Kc schedule");
    CropCoefficientSchedule::new(entries)
}
