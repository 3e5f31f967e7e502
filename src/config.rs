// src/config.rs

//! Configuration loading utilities.
//!
//! This module provides convenience functions for loading configuration
//! and the job dataset it points to.

use std::path::Path;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::services::JobService;
use crate::storage::{CsvJobSource, JobSource, LoadReport};

/// Everything a front end needs once startup is done.
#[derive(Debug)]
pub struct Runtime {
    pub config: Config,
    pub service: JobService,
    pub report: LoadReport,
}

/// Load configuration from a TOML file.
///
/// A missing file falls back to defaults; a present but invalid file is an
/// error.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        log::warn!(
            "Config file {} not found. Using default configuration.",
            path.display()
        );
        return Ok(Config::default());
    }
    Config::load(path)
}

/// Load and validate the configuration, then load the dataset it names.
pub async fn load_all(config_path: &Path) -> Result<Runtime> {
    let config = load_config(config_path)?;
    build_runtime(config).await
}

/// Validate an already loaded configuration and load its dataset.
pub async fn build_runtime(config: Config) -> Result<Runtime> {
    config
        .validate()
        .map_err(|e| AppError::config(format!("Invalid configuration: {e}")))?;

    let params = config.search_params()?;
    let loaded = CsvJobSource::new(&config.data.csv_file).load().await?;

    let service = JobService::new(Arc::new(loaded.store), params);
    Ok(Runtime {
        config,
        service,
        report: loaded.report,
    })
}
