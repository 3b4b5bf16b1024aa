use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One simulated day. The full sequence, ordered by date, is the
/// authoritative output of a run and is never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyResult {
    pub date: NaiveDate,
    pub day_after_planting: u32,
    pub precipitation_mm: f64,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub solar_radiation_mj: f64,
    pub eto_mm: f64,
    pub kc: f64,
    pub etc_mm: f64,
    pub soil_moisture_start_mm: f64,
    pub soil_moisture_end_mm: f64,
    pub irrigation_applied_mm: f64,
    pub is_stress_day: bool,
}

/// Categorical yield outlook derived from how often the crop hit the wilting
/// point. A heuristic bucket, not a calibrated agronomic model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YieldPotential {
    High,
    Adequate,
    Reduced,
    Poor,
}

impl YieldPotential {
    pub fn as_str(&self) -> &'static str {
        match self {
            YieldPotential::High => "High",
            YieldPotential::Adequate => "Adequate",
            YieldPotential::Reduced => "Reduced",
            YieldPotential::Poor => "Poor",
        }
    }

    pub fn notes(&self) -> &'static str {
        match self {
            YieldPotential::High => "Minimal water stress; near-optimal growing conditions.",
            YieldPotential::Adequate => "Occasional water stress, unlikely to limit yield much.",
            YieldPotential::Reduced => "Recurring water stress; expect a noticeable yield penalty.",
            YieldPotential::Poor => "Sustained water stress through the season.",
        }
    }
}

impl std::fmt::Display for YieldPotential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Seasonal aggregate over the completed daily results. Carries no state of
/// its own; everything here is recomputable from the result sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub season_length_days: usize,
    pub total_irrigation_mm: f64,
    pub total_rainfall_mm: f64,
    pub total_etc_mm: f64,
    pub irrigation_event_count: usize,
    pub stress_day_count: usize,
    /// Reference water use of the fixed-interval baseline schedule.
    pub baseline_irrigation_mm: f64,
    /// baseline − actual, which can be negative when the threshold policy
    /// used more water than the baseline.
    pub water_savings_raw_mm: f64,
    /// Headline savings figure, clamped at zero.
    pub water_savings_mm: f64,
    pub yield_potential: YieldPotential,
}
