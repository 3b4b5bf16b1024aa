use crate::error::{IrrisimError, Result};
use crate::logic::{FixedIntervalBaseline, StressDayBuckets};
use crate::models::{Season, SoilParameters};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub soil: SoilConfig,
    pub irrigation: IrrigationConfig,
    pub season: SeasonConfig,
    pub baseline: BaselineConfig,
    pub yield_buckets: YieldBucketsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SoilConfig {
    pub field_capacity_mm: f64,
    pub wilting_point_mm: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IrrigationConfig {
    pub threshold_mm: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeasonConfig {
    /// Explicit planting date; takes precedence over `start_year`.
    pub start_date: Option<NaiveDate>,
    /// Conventional October 1 planting for this year.
    pub start_year: Option<i32>,
}

/// Fixed-interval reference schedule for the water-savings comparison.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BaselineConfig {
    pub interval_days: usize,
    pub depth_mm: f64,
}

/// Stress-day fractions bounding each yield bucket. Tunable heuristics, not
/// agronomy.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YieldBucketsConfig {
    pub high_max_fraction: f64,
    pub adequate_max_fraction: f64,
    pub reduced_max_fraction: f64,
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => match Self::find_config_path() {
                Some(p) => p,
                // No file anywhere: fall back to the built-in defaults.
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            return Err(IrrisimError::Config(format!(
                "Config file not found at {:?}",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| IrrisimError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| IrrisimError::Config(format!("Failed to parse config: {}", e)))?;

        tracing::debug!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    /// Search for config.yaml in the working directory, then the XDG config
    /// directory.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("irrisim").join("config.yaml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }

    /// Validated soil parameters (field_capacity > wilting_point > 0).
    pub fn soil_parameters(&self) -> Result<SoilParameters> {
        SoilParameters::new(self.soil.field_capacity_mm, self.soil.wilting_point_mm)
    }

    /// Resolve the season from the configured date or year.
    pub fn season(&self) -> Result<Season> {
        if let Some(start) = self.season.start_date {
            return Ok(Season::new(start));
        }
        if let Some(year) = self.season.start_year {
            return Ok(Season::for_year(year));
        }
        Err(IrrisimError::Config(
            "no season configured: set season.start_date or season.start_year, \
             or pass --year / --start-date"
                .into(),
        ))
    }

    pub fn savings_baseline(&self) -> FixedIntervalBaseline {
        FixedIntervalBaseline {
            interval_days: self.baseline.interval_days,
            depth_mm: self.baseline.depth_mm,
        }
    }

    pub fn yield_policy(&self) -> StressDayBuckets {
        StressDayBuckets {
            high_max_fraction: self.yield_buckets.high_max_fraction,
            adequate_max_fraction: self.yield_buckets.adequate_max_fraction,
            reduced_max_fraction: self.yield_buckets.reduced_max_fraction,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let baseline = FixedIntervalBaseline::default();
        let buckets = StressDayBuckets::default();
        Self {
            // Mashonaland East sandy-loam defaults from the reference dataset
            soil: SoilConfig {
                field_capacity_mm: 150.0,
                wilting_point_mm: 75.0,
            },
            irrigation: IrrigationConfig { threshold_mm: 75.0 },
            season: SeasonConfig::default(),
            baseline: BaselineConfig {
                interval_days: baseline.interval_days,
                depth_mm: baseline.depth_mm,
            },
            yield_buckets: YieldBucketsConfig {
                high_max_fraction: buckets.high_max_fraction,
                adequate_max_fraction: buckets.adequate_max_fraction,
                reduced_max_fraction: buckets.reduced_max_fraction,
            },
        }
    }
}

impl Default for SoilConfig {
    fn default() -> Self {
        Config::default().soil
    }
}

impl Default for IrrigationConfig {
    fn default() -> Self {
        Config::default().irrigation
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Config::default().baseline
    }
}

impl Default for YieldBucketsConfig {
    fn default() -> Self {
        Config::default().yield_buckets
    }
}
