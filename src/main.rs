mod cli;
mod config;
mod datasources;
mod error;
mod export;
mod logic;
mod models;

use clap::Parser;
use cli::{CheckArgs, Cli, Commands, InputArgs, RunArgs};
use config::Config;
use error::Result;
use logic::{preprocess, summarize, Simulator};
use models::{CropCoefficientSchedule, Season, SoilParameters};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging; -v flags take precedence over RUST_LOG
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::load(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Run(args) => run(&config, args),
        Commands::Check(args) => check(&config, args),
    };

    if let Err(e) = result {
        if e.is_data_error() {
            eprintln!("Input data error: {}", e);
        } else {
            eprintln!("Configuration error: {}", e);
        }
        std::process::exit(1);
    }
}

/// Everything the simulation needs, resolved from config and CLI overrides.
struct ResolvedInputs {
    season: Season,
    soil: SoilParameters,
    threshold_mm: f64,
    schedule: CropCoefficientSchedule,
    climate: Vec<models::DailyClimateRecord>,
}

fn resolve_inputs(config: &Config, args: &InputArgs) -> Result<ResolvedInputs> {
    let season = if let Some(start) = args.start_date {
        Season::new(start)
    } else if let Some(year) = args.year {
        Season::for_year(year)
    } else {
        config.season()?
    };

    let soil = match &args.soil {
        Some(path) => datasources::load_soil_parameters(path)?,
        None => config.soil_parameters()?,
    };

    let threshold_mm = args.threshold.unwrap_or(config.irrigation.threshold_mm);

    let schedule = match &args.kc {
        Some(path) => datasources::load_kc_schedule(path)?,
        None => {
            tracing::info!("no Kc file supplied, using the built-in maize curve");
            CropCoefficientSchedule::default_maize()
        }
    };

    let climate = datasources::load_climate_series(&args.climate, &season)?;

    Ok(ResolvedInputs {
        season,
        soil,
        threshold_mm,
        schedule,
        climate,
    })
}

fn run(config: &Config, args: RunArgs) -> Result<()> {
    let inputs = resolve_inputs(config, &args.inputs)?;

    let prepared = preprocess(&inputs.climate, &inputs.schedule, &inputs.season)?;
    let simulator = Simulator::new(inputs.soil, inputs.threshold_mm)?;
    let results = simulator.run(&prepared);
    let summary = summarize(&results, &config.savings_baseline(), &config.yield_policy());

    println!(
        "Season {} .. {} ({} days)",
        inputs.season.start(),
        inputs.season.end(),
        summary.season_length_days
    );
    println!();
    print!("{}", export::render_summary(&summary));

    if let Some(path) = &args.results_out {
        export::write_results_csv(path, &results)?;
        println!("\nDaily results written to {}", path.display());
    }
    if let Some(path) = &args.summary_out {
        if path.extension().is_some_and(|ext| ext == "json") {
            export::write_summary_json(path, &summary)?;
        } else {
            export::write_summary_txt(path, &summary)?;
        }
        println!("Summary written to {}", path.display());
    }

    Ok(())
}

/// Validate configuration and input files end to end, without simulating.
fn check(config: &Config, args: CheckArgs) -> Result<()> {
    let inputs = resolve_inputs(config, &args.inputs)?;

    // Exercises the threshold invariant
    Simulator::new(inputs.soil, inputs.threshold_mm)?;

    // Exercises series continuity, record validity, and Kc coverage
    let prepared = preprocess(&inputs.climate, &inputs.schedule, &inputs.season)?;

    println!(
        "OK: {} days covering {} .. {}",
        prepared.len(),
        inputs.season.start(),
        inputs.season.end()
    );
    println!(
        "Soil: field capacity {:.1} mm, wilting point {:.1} mm, threshold {:.1} mm",
        inputs.soil.field_capacity_mm, inputs.soil.wilting_point_mm, inputs.threshold_mm
    );
    println!("Kc entries: {}", inputs.schedule.entries().len());
    Ok(())
}
