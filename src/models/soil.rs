use crate::error::{IrrisimError, Result};
use serde::{Deserialize, Serialize};

/// Soil water-holding parameters, both in mm over the same effective root
/// depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilParameters {
    pub field_capacity_mm: f64,
    pub wilting_point_mm: f64,
}

impl SoilParameters {
    /// Invariant enforced here, not inside the simulation loop:
    /// field_capacity > wilting_point > 0.
    pub fn new(field_capacity_mm: f64, wilting_point_mm: f64) -> Result<Self> {
        if wilting_point_mm <= 0.0 {
            return Err(IrrisimError::InvalidSoilParameters(format!(
                "wilting point must be positive, got {:.1} mm",
                wilting_point_mm
            )));
        }
        if field_capacity_mm <= wilting_point_mm {
            return Err(IrrisimError::InvalidSoilParameters(format!(
                "field capacity ({:.1} mm) must exceed wilting point ({:.1} mm)",
                field_capacity_mm, wilting_point_mm
            )));
        }
        Ok(Self {
            field_capacity_mm,
            wilting_point_mm,
        })
    }

    /// Available water capacity: the usable band between wilting point and
    /// field capacity.
    pub fn available_water_capacity_mm(&self) -> f64 {
        self.field_capacity_mm - self.wilting_point_mm
    }
}
