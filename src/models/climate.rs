use crate::error::{IrrisimError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of raw climate input. Temperatures in °C, radiation in MJ/m²/day,
/// precipitation in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyClimateRecord {
    pub date: NaiveDate,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub solar_radiation_mj: f64,
    pub precipitation_mm: f64,
}

impl DailyClimateRecord {
    pub fn new(
        date: NaiveDate,
        max_temp_c: f64,
        min_temp_c: f64,
        solar_radiation_mj: f64,
        precipitation_mm: f64,
    ) -> Result<Self> {
        let record = Self {
            date,
            max_temp_c,
            min_temp_c,
            solar_radiation_mj,
            precipitation_mm,
        };
        record.validate()?;
        Ok(record)
    }

    /// Reject physically impossible records. A max below the min is a data
    /// problem to surface, never something to silently swap.
    pub fn validate(&self) -> Result<()> {
        if self.max_temp_c < self.min_temp_c {
            return Err(IrrisimError::InvalidClimateRecord(format!(
                "{}: max temperature {:.1}°C is below min {:.1}°C",
                self.date, self.max_temp_c, self.min_temp_c
            )));
        }
        if self.solar_radiation_mj < 0.0 {
            return Err(IrrisimError::InvalidClimateRecord(format!(
                "{}: negative solar radiation {:.2} MJ/m²",
                self.date, self.solar_radiation_mj
            )));
        }
        if self.precipitation_mm < 0.0 {
            return Err(IrrisimError::InvalidClimateRecord(format!(
                "{}: negative precipitation {:.2} mm",
                self.date, self.precipitation_mm
            )));
        }
        Ok(())
    }

    pub fn mean_temp_c(&self) -> f64 {
        (self.max_temp_c + self.min_temp_c) / 2.0
    }

    pub fn temp_range_c(&self) -> f64 {
        self.max_temp_c - self.min_temp_c
    }
}
