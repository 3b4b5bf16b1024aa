//! Climate/crop preprocessing: validates the daily series covers the season
//! gap-free and enriches each day with ETo, Kc, and ETc.

use crate::error::{IrrisimError, Result};
use crate::logic::eto::hargreaves_eto;
use crate::models::{CropCoefficientSchedule, DailyClimateRecord, Season};
use chrono::Days;

/// One day of enriched simulation input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreparedDay {
    pub record: DailyClimateRecord,
    pub day_after_planting: u32,
    pub eto_mm: f64,
    pub kc: f64,
    pub etc_mm: f64,
}

/// Turn the raw climate series into per-day simulation input.
///
/// The series must run from the season start through the season end with
/// strictly increasing, gap-free dates; a missing or out-of-order day is an
/// `IncompleteClimateSeries` error, never silently skipped. The per-day
/// ETo/Kc enrichment itself is order-independent.
pub fn preprocess(
    records: &[DailyClimateRecord],
    schedule: &CropCoefficientSchedule,
    season: &Season,
) -> Result<Vec<PreparedDay>> {
    if records.is_empty() {
        return Err(IrrisimError::IncompleteClimateSeries(format!(
            "no climate records for the season starting {}",
            season.start()
        )));
    }

    let first = records[0].date;
    if first != season.start() {
        return Err(IrrisimError::IncompleteClimateSeries(format!(
            "series starts {} but the season starts {}",
            first,
            season.start()
        )));
    }

    let mut expected = season.start();
    let mut prepared = Vec::with_capacity(records.len());
    for record in records {
        if record.date != expected {
            return Err(IrrisimError::IncompleteClimateSeries(format!(
                "expected {} but found {}",
                expected, record.date
            )));
        }
        let day_after_planting = season.day_after_planting(record.date).ok_or_else(|| {
            IrrisimError::IncompleteClimateSeries(format!(
                "{} lies past the season end {}",
                record.date,
                season.end()
            ))
        })?;
        let eto_mm = hargreaves_eto(record)?;
        let kc = schedule.kc_for_day(day_after_planting)?;
        prepared.push(PreparedDay {
            record: *record,
            day_after_planting,
            eto_mm,
            kc,
            etc_mm: eto_mm * kc,
        });
        expected = expected
            .checked_add_days(Days::new(1))
            .expect("date arithmetic overflow");
    }

    let last = records[records.len() - 1].date;
    if last != season.end() {
        return Err(IrrisimError::IncompleteClimateSeries(format!(
            "series ends {} but the season runs through {}",
            last,
            season.end()
        )));
    }

    tracing::debug!(
        days = prepared.len(),
        start = %season.start(),
        end = %season.end(),
        "preprocessed climate series"
    );
    Ok(prepared)
}
