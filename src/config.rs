use crate::domain::bounds::BoundTable;
use crate::error::{LoanError, Result};
use std::env;
use std::fs::File;
use std::path::PathBuf;

pub const LOG_LEVEL_VAR: &str = "LOAN_O_METER_LOG_LEVEL";
pub const SESSION_PATH_VAR: &str = "LOAN_O_METER_SESSION_PATH";
pub const BOUNDS_PATH_VAR: &str = "LOAN_O_METER_BOUNDS";

const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_SESSION_FILE: &str = ".loan-o-meter-auth";

/// Top-level configuration, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
    pub session: SessionConfig,
    /// JSON file with bound table overrides; the standard table when unset.
    pub bounds_path: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the session flag is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub path: PathBuf,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            telemetry: TelemetryConfig {
                log_level: non_empty(LOG_LEVEL_VAR)
                    .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
            session: SessionConfig {
                path: non_empty(SESSION_PATH_VAR)
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE)),
            },
            bounds_path: non_empty(BOUNDS_PATH_VAR).map(PathBuf::from),
        }
    }

    /// The standard bound table, with overrides applied when configured.
    pub fn bound_table(&self) -> Result<BoundTable> {
        match &self.bounds_path {
            None => Ok(BoundTable::standard()),
            Some(path) => {
                let file = File::open(path).map_err(|e| {
                    LoanError::ConfigError(format!(
                        "cannot open bounds file {}: {e}",
                        path.display()
                    ))
                })?;
                BoundTable::from_json_reader(file)
            }
        }
    }
}
