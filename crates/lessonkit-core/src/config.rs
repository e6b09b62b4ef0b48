//! Page configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::assets::{self, Environment};
use crate::confetti::DEFAULT_PARTICLES;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings a page is constructed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Course identifier, part of production asset paths.
    pub course: String,
    /// Project identifier, part of production asset paths.
    pub project: String,
    /// Hostnames served from a local checkout.
    #[serde(default = "default_development_hosts")]
    pub development_hosts: Vec<String>,
    /// Particles spawned per celebration.
    #[serde(default = "default_confetti_particles")]
    pub confetti_particles: usize,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_development_hosts() -> Vec<String> {
    vec!["localhost".to_string(), "127.0.0.1".to_string()]
}

fn default_confetti_particles() -> usize {
    DEFAULT_PARTICLES
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PageConfig {
    /// Create a configuration with defaults for everything but the identifiers.
    pub fn new(course: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            project: project.into(),
            development_hosts: default_development_hosts(),
            confetti_particles: default_confetti_particles(),
            log_level: default_log_level(),
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check identifiers and log level.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.course.trim().is_empty() {
            return Err(ConfigError::Invalid("course must not be empty".to_string()));
        }
        if self.project.trim().is_empty() {
            return Err(ConfigError::Invalid("project must not be empty".to_string()));
        }
        self.level()?;
        Ok(())
    }

    /// Parsed console log level.
    pub fn level(&self) -> ConfigResult<log::Level> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::Invalid(format!("unknown log level: {}", self.log_level)))
    }

    /// Environment a page served from `hostname` runs in.
    pub fn environment(&self, hostname: &str) -> Environment {
        Environment::detect(hostname, &self.development_hosts)
    }

    /// Path of a shared asset for the given environment.
    pub fn asset_path(&self, environment: Environment, filename: &str, prefix: &str) -> String {
        assets::asset_path(self, environment, filename, prefix)
    }
}
