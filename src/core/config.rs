// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::{PasswordGenerationOptions, RngSource, ShuffleMode};

// Configuration for the generator, its adapters and logging
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_password_exclude_similar: bool,
    pub max_password_length: usize,
    pub rng_source: RngSource,
    pub shuffle_mode: ShuffleMode,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_password_exclude_similar: false,
            max_password_length: 128,
            rng_source: RngSource::Os,
            shuffle_mode: ShuffleMode::FisherYates,

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup.
    ///
    /// Unparsable values keep the default. The returned warnings describe
    /// each of them; they are handed back rather than logged because the
    /// logger is configured from this very config.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => warnings.push(format!("Invalid DEFAULT_PASSWORD_LENGTH '{}', using {}", val, config.default_password_length)),
            }
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_EXCLUDE_SIMILAR") {
            match val.parse() {
                Ok(exclude) => config.default_password_exclude_similar = exclude,
                Err(_) => warnings.push(format!("Invalid DEFAULT_PASSWORD_EXCLUDE_SIMILAR '{}', expected true or false", val)),
            }
        }

        if let Some(val) = lookup("MAX_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(max) if max > 0 => config.max_password_length = max,
                _ => warnings.push(format!("Invalid MAX_PASSWORD_LENGTH '{}', using {}", val, config.max_password_length)),
            }
        }

        if let Some(val) = lookup("RNG_SOURCE") {
            match val.parse() {
                Ok(source) => config.rng_source = source,
                Err(e) => warnings.push(format!("{}, using {}", e, config.rng_source)),
            }
        }

        // A seed always wins over RNG_SOURCE
        if let Some(val) = lookup("RNG_SEED") {
            match val.parse() {
                Ok(seed) => config.rng_source = RngSource::Seeded(seed),
                Err(_) => warnings.push(format!("Invalid RNG_SEED '{}', ignoring", val)),
            }
        }

        if let Some(val) = lookup("SHUFFLE_MODE") {
            match val.parse() {
                Ok(mode) => config.shuffle_mode = mode,
                Err(e) => warnings.push(format!("{}, using {}", e, config.shuffle_mode)),
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => warnings.push(format!("Invalid WEB_PORT '{}', using {}", val, config.web_port)),
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown LOG_LEVEL '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }

    /// Generation options seeded with the configured defaults.
    pub fn default_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.default_password_length,
            exclude_similar: self.default_password_exclude_similar,
            ..PasswordGenerationOptions::default()
        }
    }
}
