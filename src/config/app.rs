//! Main application configuration
//!
//! This module defines the primary configuration structures for the rally-point
//! league service, including environment variable loading and validation.

use crate::config::rating::RatingSettings;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceSettings::default(),
            rating: RatingSettings::default(),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "rally-point".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Rating settings
        if let Ok(k_factor) = env::var("RATING_K_FACTOR") {
            config.rating.k_factor = k_factor
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_K_FACTOR value: {}", k_factor))?;
        }
        if let Ok(default_rating) = env::var("RATING_DEFAULT") {
            config.rating.default_rating = default_rating
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_DEFAULT value: {}", default_rating))?;
        }
        if let Ok(attempts) = env::var("RATING_MAX_SAVE_ATTEMPTS") {
            config.rating.max_save_attempts = attempts
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_MAX_SAVE_ATTEMPTS value: {}", attempts))?;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate rating settings
    if config.rating.k_factor <= 0.0 {
        return Err(anyhow!("K-factor must be positive"));
    }
    if !config.rating.default_rating.is_finite() || config.rating.default_rating <= 0.0 {
        return Err(anyhow!("Default rating must be a positive number"));
    }
    if config.rating.max_save_attempts == 0 {
        return Err(anyhow!("Max save attempts must be greater than 0"));
    }

    Ok(())
}
