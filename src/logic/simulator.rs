//! Daily soil water-balance state machine.
//!
//! A strict sequential fold over the season: each day's balance depends on
//! the previous day's ending soil moisture, so days cannot be evaluated
//! concurrently. The single state variable is threaded explicitly through
//! the loop rather than held in shared mutable storage, so independent runs
//! never interfere.

use crate::error::{IrrisimError, Result};
use crate::logic::preprocess::PreparedDay;
use crate::models::{DailyResult, SoilParameters};

pub struct Simulator {
    soil: SoilParameters,
    irrigation_threshold_mm: f64,
}

impl Simulator {
    /// Threshold invariant enforced here, once:
    /// wilting_point ≤ threshold < field_capacity.
    pub fn new(soil: SoilParameters, irrigation_threshold_mm: f64) -> Result<Self> {
        if irrigation_threshold_mm < soil.wilting_point_mm
            || irrigation_threshold_mm >= soil.field_capacity_mm
        {
            return Err(IrrisimError::InvalidThreshold(format!(
                "threshold {:.1} mm must lie in [{:.1}, {:.1})",
                irrigation_threshold_mm, soil.wilting_point_mm, soil.field_capacity_mm
            )));
        }
        Ok(Self {
            soil,
            irrigation_threshold_mm,
        })
    }

    /// Run the water balance over the prepared season.
    ///
    /// The field starts at field capacity at planting. Per day, in this
    /// order: deplete by ETc, replenish by precipitation capped at field
    /// capacity (excess runs off), clamp at the wilting point recording a
    /// stress day, then irrigate back to field capacity if the moisture sits
    /// below the threshold. The step order is a contract: reordering it
    /// changes outputs.
    pub fn run(&self, days: &[PreparedDay]) -> Vec<DailyResult> {
        let fc = self.soil.field_capacity_mm;
        let wp = self.soil.wilting_point_mm;

        let mut soil_moisture = fc;
        let mut results = Vec::with_capacity(days.len());
        for day in days {
            let soil_moisture_start = soil_moisture;

            // 1. Crop draws its evapotranspiration demand.
            soil_moisture -= day.etc_mm;

            // 2. Rainfall refills the bucket; overflow is runoff/drainage.
            soil_moisture += day.record.precipitation_mm;
            if soil_moisture > fc {
                soil_moisture = fc;
            }

            // 3. The crop cannot draw below the permanent wilting point.
            let is_stress_day = soil_moisture < wp;
            if is_stress_day {
                tracing::debug!(date = %day.record.date, soil_moisture, "stress day, clamping to wilting point");
                soil_moisture = wp;
            }

            // 4. One discrete event refilling exactly to capacity.
            let irrigation_applied_mm = if soil_moisture < self.irrigation_threshold_mm {
                let depth = fc - soil_moisture;
                soil_moisture = fc;
                depth
            } else {
                0.0
            };

            results.push(DailyResult {
                date: day.record.date,
                day_after_planting: day.day_after_planting,
                precipitation_mm: day.record.precipitation_mm,
                max_temp_c: day.record.max_temp_c,
                min_temp_c: day.record.min_temp_c,
                solar_radiation_mj: day.record.solar_radiation_mj,
                eto_mm: day.eto_mm,
                kc: day.kc,
                etc_mm: day.etc_mm,
                soil_moisture_start_mm: soil_moisture_start,
                soil_moisture_end_mm: soil_moisture,
                irrigation_applied_mm,
                is_stress_day,
            });
        }

        tracing::info!(
            days = results.len(),
            irrigation_events = results.iter().filter(|r| r.irrigation_applied_mm > 0.0).count(),
            "water balance complete"
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyClimateRecord;
    use chrono::{Days, NaiveDate};

    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    /// Prepared days with fixed ETc/precipitation, bypassing the ETo model.
    fn days(etc_precip: &[(f64, f64)]) -> Vec<PreparedDay> {
        let start = NaiveDate::from_ymd_opt(2018, 10, 1).unwrap();
        etc_precip
            .iter()
            .enumerate()
            .map(|(i, &(etc, precip))| PreparedDay {
                record: DailyClimateRecord {
                    date: start.checked_add_days(Days::new(i as u64)).unwrap(),
                    max_temp_c: 28.0,
                    min_temp_c: 14.0,
                    solar_radiation_mj: 22.5,
                    precipitation_mm: precip,
                },
                day_after_planting: i as u32,
                eto_mm: etc, // Kc of 1 keeps ETc == ETo
                kc: 1.0,
                etc_mm: etc,
            })
            .collect()
    }

    fn simulator() -> Simulator {
        let soil = SoilParameters::new(100.0, 40.0).unwrap();
        Simulator::new(soil, 60.0).unwrap()
    }

    #[test]
    fn threshold_bounds() {
        let soil = SoilParameters::new(100.0, 40.0).unwrap();
        assert!(Simulator::new(soil, 39.9).is_err());
        assert!(Simulator::new(soil, 100.0).is_err());
        assert!(Simulator::new(soil, 40.0).is_ok()); // threshold may equal wilting point
        assert!(Simulator::new(soil, 99.9).is_ok());
    }

    #[test]
    fn dry_drawdown_triggers_irrigation_on_the_exact_day() {
        // fc=100, wp=40, threshold=60, ETc=6/day, no rain.
        // Moisture: 94, 88, 82, 76, 70, 64, 58 -> first drop below 60 on day 7.
        let sim = simulator();
        let results = sim.run(&days(&[(6.0, 0.0); 10]));

        for (i, r) in results.iter().take(6).enumerate() {
            assert_approx(r.soil_moisture_end_mm, 100.0 - 6.0 * (i as f64 + 1.0), 1e-9);
            assert_eq!(r.irrigation_applied_mm, 0.0);
        }

        let trigger = &results[6];
        assert_approx(trigger.soil_moisture_start_mm, 64.0, 1e-9);
        assert_approx(trigger.irrigation_applied_mm, 100.0 - 58.0, 1e-9);
        assert_approx(trigger.soil_moisture_end_mm, 100.0, 1e-9);
        assert!(!trigger.is_stress_day);

        // The cycle repeats from a full profile
        assert_approx(results[7].soil_moisture_start_mm, 100.0, 1e-9);
        assert_approx(results[7].soil_moisture_end_mm, 94.0, 1e-9);
    }

    #[test]
    fn heavy_rain_is_capped_at_field_capacity() {
        // Draw down to 90, then a 50 mm storm: 90 + 50 caps at 100. The
        // 40 mm excess leaves the system entirely.
        let sim = simulator();
        let results = sim.run(&days(&[(10.0, 0.0), (0.0, 50.0)]));
        assert_approx(results[0].soil_moisture_end_mm, 90.0, 1e-9);
        assert_approx(results[1].soil_moisture_start_mm, 90.0, 1e-9);
        assert_approx(results[1].soil_moisture_end_mm, 100.0, 1e-9);
        assert_eq!(results[1].irrigation_applied_mm, 0.0);
        assert!(!results[1].is_stress_day);
    }

    #[test]
    fn stress_clamp_happens_before_irrigation() {
        // One huge ETc day computes to 35 mm, below wp=40: the day is a
        // stress day, moisture clamps to 40, and irrigation then refills
        // from the clamped value (60 mm), not from 35.
        let sim = simulator();
        let results = sim.run(&days(&[(65.0, 0.0)]));
        let day = &results[0];
        assert!(day.is_stress_day);
        assert_approx(day.irrigation_applied_mm, 60.0, 1e-9);
        assert_approx(day.soil_moisture_end_mm, 100.0, 1e-9);
    }

    #[test]
    fn moisture_stays_within_physical_bounds() {
        let sim = simulator();
        let pattern: Vec<(f64, f64)> = (0..120)
            .map(|i| ((i % 9) as f64, if i % 7 == 0 { 12.0 } else { 0.0 }))
            .collect();
        let results = sim.run(&days(&pattern));
        for r in &results {
            assert!(r.soil_moisture_end_mm >= 40.0 - 1e-9);
            assert!(r.soil_moisture_end_mm <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn irrigation_always_refills_to_capacity() {
        let sim = simulator();
        let pattern: Vec<(f64, f64)> = (0..60).map(|i| (5.0 + (i % 4) as f64, 0.0)).collect();
        let results = sim.run(&days(&pattern));
        assert!(results.iter().any(|r| r.irrigation_applied_mm > 0.0));
        for r in &results {
            if r.irrigation_applied_mm > 0.0 {
                assert_approx(r.soil_moisture_end_mm, 100.0, 1e-9);
            }
        }
    }

    #[test]
    fn per_day_conservation() {
        let sim = simulator();
        let pattern: Vec<(f64, f64)> = (0..90)
            .map(|i| ((i % 8) as f64, ((i * 3) % 11) as f64))
            .collect();
        let results = sim.run(&days(&pattern));
        for r in &results {
            let after_balance =
                (r.soil_moisture_start_mm - r.etc_mm + r.precipitation_mm).clamp(40.0, 100.0);
            let expected = if r.irrigation_applied_mm > 0.0 {
                100.0
            } else {
                after_balance
            };
            assert_approx(r.soil_moisture_end_mm, expected, 1e-9);
        }
    }

    #[test]
    fn run_is_deterministic() {
        let sim = simulator();
        let input = days(&[(6.0, 0.0); 30]);
        assert_eq!(sim.run(&input), sim.run(&input));
    }

    #[test]
    fn empty_input_yields_empty_results() {
        let sim = simulator();
        assert!(sim.run(&[]).is_empty());
    }
}
