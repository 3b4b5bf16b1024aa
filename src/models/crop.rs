use crate::error::{IrrisimError, Result};
use serde::{Deserialize, Serialize};

/// One crop-coefficient breakpoint: the Kc that takes effect on
/// `day_after_planting` and holds until the next entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KcEntry {
    pub day_after_planting: u32,
    pub kc: f64,
}

/// Right-continuous step function from day-after-planting to Kc.
///
/// Entries are kept sorted ascending by day with no duplicate keys; the Kc in
/// effect on day `d` is the entry with the largest key ≤ `d`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropCoefficientSchedule {
    entries: Vec<KcEntry>,
}

impl CropCoefficientSchedule {
    /// Build a schedule, enforcing ordering, non-negative Kc, and coverage of
    /// the start of the season (an entry at day 0 or day 1). Coverage gaps are
    /// rejected here rather than mid-simulation.
    pub fn new(mut entries: Vec<KcEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(IrrisimError::KcScheduleCoverage(
                "schedule has no entries".into(),
            ));
        }
        entries.sort_by_key(|e| e.day_after_planting);
        for pair in entries.windows(2) {
            if pair[0].day_after_planting == pair[1].day_after_planting {
                return Err(IrrisimError::KcScheduleCoverage(format!(
                    "duplicate entry for day {}",
                    pair[0].day_after_planting
                )));
            }
        }
        if let Some(bad) = entries.iter().find(|e| !(e.kc >= 0.0)) {
            return Err(IrrisimError::KcScheduleCoverage(format!(
                "negative Kc {} at day {}",
                bad.kc, bad.day_after_planting
            )));
        }
        if entries[0].day_after_planting > 1 {
            return Err(IrrisimError::KcScheduleCoverage(format!(
                "first entry starts at day {}; the schedule must cover day 0 or 1",
                entries[0].day_after_planting
            )));
        }
        Ok(Self { entries })
    }

    /// Default FAO-style maize curve: a constant Kc per growth stage.
    ///
    /// Initial through day 25, development through day 50, mid-season through
    /// day 90, late season thereafter.
    pub fn default_maize() -> Self {
        Self {
            entries: vec![
                KcEntry {
                    day_after_planting: 0,
                    kc: 0.30,
                },
                KcEntry {
                    day_after_planting: 26,
                    kc: 0.70,
                },
                KcEntry {
                    day_after_planting: 51,
                    kc: 1.15,
                },
                KcEntry {
                    day_after_planting: 91,
                    kc: 0.80,
                },
            ],
        }
    }

    /// Kc in effect on the given day after planting. Pure lookup; an exact
    /// key match resolves to that entry's Kc.
    pub fn kc_for_day(&self, day_after_planting: u32) -> Result<f64> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.day_after_planting <= day_after_planting)
            .map(|e| e.kc)
            .ok_or_else(|| {
                IrrisimError::KcScheduleCoverage(format!(
                    "no schedule entry applies to day {}",
                    day_after_planting
                ))
            })
    }

    pub fn entries(&self) -> &[KcEntry] {
        &self.entries
    }
}

impl Default for CropCoefficientSchedule {
    fn default() -> Self {
        Self::default_maize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: u32, kc: f64) -> KcEntry {
        KcEntry {
            day_after_planting: day,
            kc,
        }
    }

    #[test]
    fn step_lookup_picks_largest_applicable_entry() {
        let s =
            CropCoefficientSchedule::new(vec![entry(0, 0.3), entry(30, 1.0), entry(90, 0.8)])
                .unwrap();
        assert_eq!(s.kc_for_day(0).unwrap(), 0.3);
        assert_eq!(s.kc_for_day(29).unwrap(), 0.3);
        assert_eq!(s.kc_for_day(30).unwrap(), 1.0); // exact match takes that entry
        assert_eq!(s.kc_for_day(89).unwrap(), 1.0);
        assert_eq!(s.kc_for_day(90).unwrap(), 0.8);
        assert_eq!(s.kc_for_day(400).unwrap(), 0.8); // holds past the last entry
    }

    #[test]
    fn lookup_is_pure() {
        let s = CropCoefficientSchedule::default_maize();
        assert_eq!(s.kc_for_day(40).unwrap(), s.kc_for_day(40).unwrap());
    }

    #[test]
    fn unsorted_input_is_sorted_on_construction() {
        let s =
            CropCoefficientSchedule::new(vec![entry(90, 0.8), entry(0, 0.3), entry(30, 1.0)])
                .unwrap();
        assert_eq!(s.kc_for_day(45).unwrap(), 1.0);
    }

    #[test]
    fn rejects_empty_schedule() {
        assert!(CropCoefficientSchedule::new(vec![]).is_err());
    }

    #[test]
    fn rejects_duplicate_days() {
        let err = CropCoefficientSchedule::new(vec![entry(0, 0.3), entry(0, 0.5)]).unwrap_err();
        assert!(matches!(err, IrrisimError::KcScheduleCoverage(_)));
    }

    #[test]
    fn rejects_schedule_not_covering_season_start() {
        let err = CropCoefficientSchedule::new(vec![entry(10, 0.3)]).unwrap_err();
        assert!(matches!(err, IrrisimError::KcScheduleCoverage(_)));
    }

    #[test]
    fn day_one_coverage_is_accepted() {
        assert!(CropCoefficientSchedule::new(vec![entry(1, 0.3)]).is_ok());
    }

    #[test]
    fn rejects_negative_kc() {
        let err = CropCoefficientSchedule::new(vec![entry(0, -0.1)]).unwrap_err();
        assert!(matches!(err, IrrisimError::KcScheduleCoverage(_)));
    }

    #[test]
    fn default_maize_stages() {
        let s = CropCoefficientSchedule::default_maize();
        assert_eq!(s.kc_for_day(10).unwrap(), 0.30);
        assert_eq!(s.kc_for_day(40).unwrap(), 0.70);
        assert_eq!(s.kc_for_day(70).unwrap(), 1.15);
        assert_eq!(s.kc_for_day(150).unwrap(), 0.80);
    }

    #[test]
    fn default_maize_is_constant_within_each_stage() {
        // The default is a fixed step table: the development stage holds a
        // single flat Kc, it does not ramp day by day.
        let s = CropCoefficientSchedule::default_maize();
        assert_eq!(s.kc_for_day(25).unwrap(), 0.30);
        assert_eq!(s.kc_for_day(26).unwrap(), 0.70);
        assert_eq!(s.kc_for_day(40).unwrap(), s.kc_for_day(26).unwrap());
        assert_eq!(s.kc_for_day(50).unwrap(), 0.70);
        assert_eq!(s.kc_for_day(51).unwrap(), 1.15);
        assert_eq!(s.kc_for_day(90).unwrap(), 1.15);
        assert_eq!(s.kc_for_day(91).unwrap(), 0.80);
    }
}
