//! Runtime configuration, read from the environment (and `.env` via the binary).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::meal::scoring::DEFAULT_TOP_N;
use crate::meal::ScoringWeights;

pub const CATALOG_ENV_VAR: &str = "MEAL_RECOMMENDER_CATALOG";
pub const TOP_N_ENV_VAR: &str = "MEAL_RECOMMENDER_TOP_N";
pub const WEIGHT_ENERGY_ENV_VAR: &str = "MEAL_RECOMMENDER_WEIGHT_ENERGY";
pub const WEIGHT_PROTEIN_ENV_VAR: &str = "MEAL_RECOMMENDER_WEIGHT_PROTEIN";
pub const WEIGHT_FAT_ENV_VAR: &str = "MEAL_RECOMMENDER_WEIGHT_FAT";
pub const WEIGHT_CARBOHYDRATE_ENV_VAR: &str = "MEAL_RECOMMENDER_WEIGHT_CARBOHYDRATE";
pub const LOG_LEVEL_ENV_VAR: &str = "MEAL_RECOMMENDER_LOG_LEVEL";
pub const LOG_FORMAT_ENV_VAR: &str = "MEAL_RECOMMENDER_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or `meal_recommender=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: LogFormat::default() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommenderConfig {
    pub weights: ScoringWeights,
    pub top_n: usize,
    pub catalog_path: Option<PathBuf>,
    pub logging: LoggingConfig,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::meal_recommendation(),
            top_n: DEFAULT_TOP_N,
            catalog_path: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl RecommenderConfig {
    /// Reads overrides from the process environment. Unset or unparseable
    /// variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|raw| raw.trim().parse::<f64>().ok());
        let weight = |key: &str, default: f64| parse(key).filter(|w| w.is_finite() && *w > 0.0).unwrap_or(default);

        let weights = ScoringWeights {
            energy: weight(WEIGHT_ENERGY_ENV_VAR, defaults.weights.energy),
            protein: weight(WEIGHT_PROTEIN_ENV_VAR, defaults.weights.protein),
            fat: weight(WEIGHT_FAT_ENV_VAR, defaults.weights.fat),
            carbohydrate: weight(WEIGHT_CARBOHYDRATE_ENV_VAR, defaults.weights.carbohydrate),
        };
        let top_n = lookup(TOP_N_ENV_VAR)
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.top_n);
        let catalog_path = lookup(CATALOG_ENV_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        let logging = LoggingConfig {
            level: lookup(LOG_LEVEL_ENV_VAR)
                .filter(|raw| !raw.trim().is_empty())
                .unwrap_or(defaults.logging.level),
            format: lookup(LOG_FORMAT_ENV_VAR)
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.logging.format),
        };

        Self { weights, top_n, catalog_path, logging }
    }
}
