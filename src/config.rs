//! Runtime configuration
//!
//! Read once from the environment at startup:
//! - `KCAL_REFERENCE_PATH`: optional JSON file appended to the built-in reference table
//! - `KCAL_DAILY_CALORIE_TARGET`: daily calorie target in kcal (default 2000)

use std::path::PathBuf;

use thiserror::Error;

use crate::models::DEFAULT_DAILY_CALORIE_TARGET;
use crate::nutrition::{ReferenceError, ReferenceTable, ReferenceTableBuilder};

pub const REFERENCE_PATH_VAR: &str = "KCAL_REFERENCE_PATH";
pub const CALORIE_TARGET_VAR: &str = "KCAL_DAILY_CALORIE_TARGET";

/// Configuration errors (fatal at startup)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("KCAL_DAILY_CALORIE_TARGET must be greater than 0, got {0}")]
    NonPositiveTarget(f64),

    #[error("Reference data error: {0}")]
    Reference(#[from] ReferenceError),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub reference_path: Option<PathBuf>,
    pub daily_calorie_target: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_path: None,
            daily_calorie_target: DEFAULT_DAILY_CALORIE_TARGET,
        }
    }
}

impl Config {
    /// Load from process environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let reference_path = get(REFERENCE_PATH_VAR).map(PathBuf::from);

        let daily_calorie_target = match get(CALORIE_TARGET_VAR) {
            Some(raw) => {
                let value: f64 = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                    var: CALORIE_TARGET_VAR,
                    value: raw.clone(),
                })?;
                if !value.is_finite() || value <= 0.0 {
                    return Err(ConfigError::NonPositiveTarget(value));
                }
                value
            }
            None => DEFAULT_DAILY_CALORIE_TARGET,
        };

        Ok(Self {
            reference_path,
            daily_calorie_target,
        })
    }

    /// Build the reference table: built-in dataset plus the optional extension file
    pub fn load_reference_table(&self) -> ConfigResult<ReferenceTable> {
        let mut builder = ReferenceTableBuilder::with_builtin()?;
        if let Some(path) = &self.reference_path {
            builder.extend_from_file(path)?;
        }
        let table = builder.build();
        tracing::info!(
            entries = table.len(),
            aliases = table.alias_count(),
            extension = ?self.reference_path,
            "reference table loaded"
        );
        Ok(table)
    }

    /// Human-readable source of the reference data
    pub fn reference_source(&self) -> String {
        match &self.reference_path {
            Some(path) => format!("builtin + {}", path.display()),
            None => "builtin".to_string(),
        }
    }
}
