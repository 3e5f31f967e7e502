// src/models/mod.rs

//! Domain models for the job search application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod job;
mod location;

// Re-export all public types
pub use config::{
    Config, DataConfig, LoggingConfig, Ranking, SearchConfig, SearchParams, ServerConfig,
};
pub use job::{Job, JobSlot, PLACEHOLDER_ID, PLACEHOLDER_TITLE};
pub use location::Coordinates;

/// The two lists shown on the landing view.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NearbyJobs {
    /// Unfiltered sample of the dataset
    pub available: Vec<JobSlot>,
    /// Jobs within the nearby radius of the caller
    pub nearest: Vec<JobSlot>,
}
