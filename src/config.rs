use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use crate::core::{MatchScorer, ScoringError, DEFAULT_MAX_DISTANCE_M, DEFAULT_PARALLEL_THRESHOLD};
use crate::models::ScoringWeights;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scoring configuration error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Invalid matching limits: default_limit {default_limit} must be between 1 and max_limit {max_limit}")]
    InvalidLimits { default_limit: usize, max_limit: usize },
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
    #[serde(default = "default_json_limit_bytes")]
    pub json_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            json_limit_bytes: default_json_limit_bytes(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_json_limit_bytes() -> usize { 4 * 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_distance_m")]
    pub max_distance_m: f64,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_distance_m: default_max_distance_m(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_max_distance_m() -> f64 { DEFAULT_MAX_DISTANCE_M }
fn default_limit() -> usize { 20 }
fn default_max_limit() -> usize { 100 }
fn default_parallel_threshold() -> usize { DEFAULT_PARALLEL_THRESHOLD }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
    #[serde(default = "default_signal_weight")]
    pub fitness_level: f64,
    #[serde(default = "default_signal_weight")]
    pub preferences: f64,
    #[serde(default = "default_signal_weight")]
    pub availability: f64,
    #[serde(default = "default_signal_weight")]
    pub workout_style: f64,
    #[serde(default = "default_signal_weight")]
    pub fitness_goals: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            distance: default_distance_weight(),
            fitness_level: default_signal_weight(),
            preferences: default_signal_weight(),
            availability: default_signal_weight(),
            workout_style: default_signal_weight(),
            fitness_goals: default_signal_weight(),
        }
    }
}

fn default_distance_weight() -> f64 { 0.5 }
fn default_signal_weight() -> f64 { 0.1 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            distance: config.distance,
            fitness_level: config.fitness_level,
            preferences: config.preferences,
            availability: config.availability,
            workout_style: config.workout_style,
            fitness_goals: config.fitness_goals,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "full".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FITMATCH__)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FITMATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Build the scorer described by the matching and scoring sections
    pub fn build_scorer(&self) -> Result<MatchScorer, SettingsError> {
        let weights = ScoringWeights::from(&self.scoring.weights);
        let scorer = MatchScorer::new(weights, self.matching.max_distance_m)?
            .with_parallel_threshold(self.matching.parallel_threshold);

        Ok(scorer)
    }

    /// Check limits that serde defaults cannot express
    pub fn validate(&self) -> Result<(), SettingsError> {
        let MatchingSettings { default_limit, max_limit, .. } = self.matching;
        if default_limit == 0 || default_limit > max_limit {
            return Err(SettingsError::InvalidLimits { default_limit, max_limit });
        }

        self.build_scorer().map(|_| ())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("FITMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
