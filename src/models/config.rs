//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Job dataset location
    #[serde(default)]
    pub data: DataConfig,

    /// HTTP API listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Search result count, radius and ranking
    #[serde(default)]
    pub search: SearchConfig,

    /// Log verbosity
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.data.csv_file.as_os_str().is_empty() {
            return Err(AppError::validation("data.csv_file is empty"));
        }
        if self.server.host.trim().is_empty() {
            return Err(AppError::validation("server.host is empty"));
        }
        if self.server.port == 0 {
            return Err(AppError::validation("server.port must be > 0"));
        }
        self.search_params().map(|_| ())
    }

    /// Search parameters derived from the `[search]` table.
    pub fn search_params(&self) -> Result<SearchParams> {
        SearchParams::new(
            self.search.number,
            self.search.radius_km,
            self.search.ranking,
        )
    }
}

/// Dataset settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// CSV file with `title,longitude,latitude` rows
    #[serde(default = "defaults::csv_file")]
    pub csv_file: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_file: defaults::csv_file(),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "defaults::host")]
    pub host: String,

    #[serde(default = "defaults::port")]
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
        }
    }
}

/// Search behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of genuine jobs returned by a search
    #[serde(default = "defaults::number")]
    pub number: usize,

    /// Search radius in kilometers
    #[serde(default = "defaults::radius_km")]
    pub radius_km: f64,

    /// How matching jobs are selected
    #[serde(default)]
    pub ranking: Ranking,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            number: defaults::number(),
            radius_km: defaults::radius_km(),
            ranking: Ranking::default(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of `debug`, `info`, `warn`, `error`
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

/// Selection strategy for jobs that pass the title and radius filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Ranking {
    /// Closest jobs first, ties broken by identifier.
    #[default]
    Nearest,
    /// Whatever matches first while scanning the store. The store has no
    /// defined order, so this is a sample of matches, not the closest ones.
    FirstFound,
}

/// Validated search parameters.
///
/// Defaults: 5 results within 5 km, nearest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    max_results: usize,
    radius_km: f64,
    ranking: Ranking,
}

impl SearchParams {
    /// Upper bound on `max_results`: a search result list never grows past it.
    pub const MAX_RESULTS: usize = 5;

    /// Requires `0 < max_results <= MAX_RESULTS` and a finite `radius_km > 0`.
    pub fn new(max_results: usize, radius_km: f64, ranking: Ranking) -> Result<Self> {
        if max_results == 0 || max_results > Self::MAX_RESULTS {
            return Err(AppError::validation(format!(
                "search.number must be between 1 and {}, got {max_results}",
                Self::MAX_RESULTS
            )));
        }
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(AppError::validation(format!(
                "search.radius_km must be a positive number, got {radius_km}"
            )));
        }
        Ok(Self {
            max_results,
            radius_km,
            ranking,
        })
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_results: defaults::number(),
            radius_km: defaults::radius_km(),
            ranking: Ranking::default(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Data defaults
    pub fn csv_file() -> PathBuf {
        PathBuf::from("data/jobs.csv")
    }

    // Server defaults
    pub fn host() -> String {
        "127.0.0.1".into()
    }
    pub fn port() -> u16 {
        8080
    }

    // Search defaults
    pub fn number() -> usize {
        5
    }
    pub fn radius_km() -> f64 {
        5.0
    }

    pub fn log_level() -> String {
        "info".into()
    }
}
