//! Result export: one CSV row per simulated day, plus the seasonal summary
//! as labeled key/value text or JSON. Column labels follow the conventions
//! of the project's earlier exports so downstream tooling keeps working.

use crate::error::Result;
use crate::models::{DailyResult, SeasonSummary};
use std::path::Path;

const RESULT_HEADERS: [&str; 13] = [
    "Date",
    "Day",
    "T2M_MAX (°C)",
    "T2M_MIN (°C)",
    "ALLSKY_SFC_SW_DWN (MJ/m²)",
    "PRECTOT (mm)",
    "ETo (mm)",
    "Kc",
    "ETc (mm)",
    "Soil Moisture Start (mm/m)",
    "Soil Moisture (mm/m)",
    "Irrigation (mm)",
    "Stress Day",
];

/// Write the daily results table, one row per day in date order.
pub fn write_results_csv(path: &Path, results: &[DailyResult]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(RESULT_HEADERS)?;
    for r in results {
        writer.write_record([
            r.date.to_string(),
            r.day_after_planting.to_string(),
            format!("{:.2}", r.max_temp_c),
            format!("{:.2}", r.min_temp_c),
            format!("{:.2}", r.solar_radiation_mj),
            format!("{:.2}", r.precipitation_mm),
            format!("{:.3}", r.eto_mm),
            format!("{:.2}", r.kc),
            format!("{:.3}", r.etc_mm),
            format!("{:.2}", r.soil_moisture_start_mm),
            format!("{:.2}", r.soil_moisture_end_mm),
            format!("{:.2}", r.irrigation_applied_mm),
            if r.is_stress_day { "yes" } else { "no" }.to_string(),
        ])?;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), rows = results.len(), "wrote results CSV");
    Ok(())
}

/// Labeled key/value rendering of the summary, shared by the TXT export and
/// the terminal output.
pub fn render_summary(summary: &SeasonSummary) -> String {
    let mut out = String::new();
    let mut line = |label: &str, value: String| {
        out.push_str(label);
        out.push_str(": ");
        out.push_str(&value);
        out.push('\n');
    };

    line("Season Length (days)", summary.season_length_days.to_string());
    line(
        "Total Irrigation (mm)",
        format!("{:.1}", summary.total_irrigation_mm),
    );
    line(
        "Total Rainfall (mm)",
        format!("{:.1}", summary.total_rainfall_mm),
    );
    line("Total ETc (mm)", format!("{:.1}", summary.total_etc_mm));
    line(
        "Irrigation Events",
        summary.irrigation_event_count.to_string(),
    );
    line("Stress Days", summary.stress_day_count.to_string());
    line(
        "Baseline Irrigation (mm)",
        format!("{:.1}", summary.baseline_irrigation_mm),
    );
    line(
        "Water Savings (mm)",
        format!("{:.1}", summary.water_savings_mm),
    );
    if summary.water_savings_raw_mm < 0.0 {
        line(
            "Water Use Above Baseline (mm)",
            format!("{:.1}", -summary.water_savings_raw_mm),
        );
    }
    line(
        "Yield Potential",
        format!(
            "{} - {}",
            summary.yield_potential,
            summary.yield_potential.notes()
        ),
    );
    out
}

pub fn write_summary_txt(path: &Path, summary: &SeasonSummary) -> Result<()> {
    std::fs::write(path, render_summary(summary))?;
    tracing::info!(path = %path.display(), "wrote summary TXT");
    Ok(())
}

pub fn write_summary_json(path: &Path, summary: &SeasonSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "wrote summary JSON");
    Ok(())
}
