use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single maize growing season following the October–March convention: the
/// season runs from the planting date through March 31 of the following
/// calendar year, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Season {
    start: NaiveDate,
}

impl Season {
    pub fn new(start: NaiveDate) -> Self {
        // The March 31 end date always lies on or after any start date under
        // this convention, so construction cannot fail.
        Self { start }
    }

    /// Conventional start for a season planted in October of `year`.
    pub fn for_year(year: i32) -> Self {
        Self {
            // October 1 exists in every year
            start: NaiveDate::from_ymd_opt(year, 10, 1).unwrap(),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// March 31 following the start date (same year when planting
    /// January–March, otherwise the next year).
    pub fn end(&self) -> NaiveDate {
        let end_year = if self.start.month() > 3 {
            self.start.year() + 1
        } else {
            self.start.year()
        };
        NaiveDate::from_ymd_opt(end_year, 3, 31).unwrap()
    }

    /// Number of simulated days, start through end inclusive.
    pub fn length_days(&self) -> i64 {
        (self.end() - self.start).num_days() + 1
    }

    /// Zero-based offset of `date` from planting, used to key the Kc
    /// schedule. None when the date falls outside the season.
    pub fn day_after_planting(&self, date: NaiveDate) -> Option<u32> {
        if date < self.start || date > self.end() {
            return None;
        }
        Some((date - self.start).num_days() as u32)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }
}
