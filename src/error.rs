use thiserror::Error;

#[derive(Error, Debug)]
pub enum IrrisimError {
    #[error("Invalid climate record: {0}")]
    InvalidClimateRecord(String),

    #[error("Incomplete climate series: {0}")]
    IncompleteClimateSeries(String),

    #[error("Invalid soil parameters: {0}")]
    InvalidSoilParameters(String),

    #[error("Invalid irrigation threshold: {0}")]
    InvalidThreshold(String),

    #[error("Kc schedule coverage error: {0}")]
    KcScheduleCoverage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IrrisimError {
    /// True when the failure points at an input data file rather than the
    /// configuration, so the caller can tell the user which to fix.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            IrrisimError::InvalidClimateRecord(_)
                | IrrisimError::IncompleteClimateSeries(_)
                | IrrisimError::KcScheduleCoverage(_)
                | IrrisimError::Csv(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, IrrisimError>;
