use clap::{Args, Parser, Subcommand};
use chrono::NaiveDate;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "irrisim", version, about = "Maize irrigation water-balance simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the season simulation and report the results
    Run(RunArgs),
    /// Validate config and input files without simulating
    Check(CheckArgs),
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Write the daily results table to this CSV file
    #[arg(long)]
    pub results_out: Option<PathBuf>,

    /// Write the season summary to this file (.json gets JSON, anything
    /// else key/value text)
    #[arg(long)]
    pub summary_out: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
}

#[derive(Args)]
pub struct InputArgs {
    /// Daily climate CSV (Date, T2M_MAX, T2M_MIN, ALLSKY_SFC_SW_DWN, PRECTOT)
    #[arg(long)]
    pub climate: PathBuf,

    /// Soil parameter CSV; overrides the configured soil values
    #[arg(long)]
    pub soil: Option<PathBuf>,

    /// Crop coefficient schedule CSV; the built-in maize curve is used when
    /// omitted
    #[arg(long)]
    pub kc: Option<PathBuf>,

    /// Season start year (October 1 planting)
    #[arg(long, conflicts_with = "start_date")]
    pub year: Option<i32>,

    /// Explicit planting date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Irrigation trigger threshold in mm; overrides the configured value
    #[arg(long)]
    pub threshold: Option<f64>,
}
