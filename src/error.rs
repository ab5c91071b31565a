use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
    #[error("Invalid username or password")]
    AuthenticationFailed,
    #[error("Not signed in; run `loan-o-meter login` first")]
    Unauthenticated,
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Telemetry error: {0}")]
    TelemetryError(String),
}

pub type Result<T> = std::result::Result<T, LoanError>;
