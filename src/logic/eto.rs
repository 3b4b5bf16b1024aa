//! Reference evapotranspiration (ETo) from daily temperature extremes and
//! solar radiation, after Hargreaves (1985). No wind or humidity inputs.

use crate::error::Result;
use crate::models::DailyClimateRecord;

/// Hargreaves empirical coefficient.
const HARGREAVES_COEFFICIENT: f64 = 0.0023;

/// Temperature offset [°C] in the Hargreaves equation.
const TEMP_OFFSET_C: f64 = 17.8;

/// Conversion from MJ/m²/day of radiation to evaporation-equivalent mm/day.
const MJ_TO_MM_EQUIVALENT: f64 = 0.408;

/// Daily reference evapotranspiration [mm/day]:
///
/// ETo = 0.0023 × (T_mean + 17.8) × √(T_max − T_min) × (Rs × 0.408)
///
/// The record is validated first (max ≥ min, non-negative radiation and
/// precipitation). Zero temperature range or zero radiation produce a
/// degenerate ETo of 0, which is flagged in the log but not fatal.
pub fn hargreaves_eto(record: &DailyClimateRecord) -> Result<f64> {
    record.validate()?;

    let radiation_mm = record.solar_radiation_mj * MJ_TO_MM_EQUIVALENT;
    let eto = HARGREAVES_COEFFICIENT
        * (record.mean_temp_c() + TEMP_OFFSET_C)
        * record.temp_range_c().sqrt()
        * radiation_mm;

    // Very cold days (T_mean < -17.8°C) can push the estimate negative;
    // evaporative demand cannot be, so clamp.
    if eto <= 0.0 {
        tracing::debug!(
            date = %record.date,
            eto,
            "degenerate ETo clamped to 0"
        );
        return Ok(0.0);
    }
    Ok(eto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(max: f64, min: f64, rad: f64) -> DailyClimateRecord {
        DailyClimateRecord {
            date: NaiveDate::from_ymd_opt(2019, 10, 15).unwrap(),
            max_temp_c: max,
            min_temp_c: min,
            solar_radiation_mj: rad,
            precipitation_mm: 0.0,
        }
    }

    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    #[test]
    fn reference_value() {
        // T_mean = 21, range = 14, Ra = 22.5 * 0.408 = 9.18 mm
        // ETo = 0.0023 * 38.8 * sqrt(14) * 9.18
        let eto = hargreaves_eto(&record(28.0, 14.0, 22.5)).unwrap();
        assert_approx(eto, 0.0023 * 38.8 * 14.0_f64.sqrt() * 9.18, 1e-10);
        assert_approx(eto, 3.065, 1e-3);
    }

    #[test]
    fn eto_is_never_negative() {
        // Deep-cold day: mean temp below -17.8°C drives the formula negative
        let eto = hargreaves_eto(&record(-20.0, -30.0, 5.0)).unwrap();
        assert_eq!(eto, 0.0);
    }

    #[test]
    fn zero_temp_range_gives_zero_eto() {
        let eto = hargreaves_eto(&record(18.0, 18.0, 22.5)).unwrap();
        assert_eq!(eto, 0.0);
    }

    #[test]
    fn zero_radiation_gives_zero_eto() {
        let eto = hargreaves_eto(&record(28.0, 14.0, 0.0)).unwrap();
        assert_eq!(eto, 0.0);
    }

    #[test]
    fn invalid_record_is_rejected_not_swapped() {
        assert!(hargreaves_eto(&record(14.0, 28.0, 22.5)).is_err());
    }

    #[test]
    fn warmer_days_evaporate_more() {
        let cool = hargreaves_eto(&record(20.0, 10.0, 20.0)).unwrap();
        let warm = hargreaves_eto(&record(32.0, 22.0, 20.0)).unwrap();
        assert!(warm > cool);
    }
}
