//! Job dataset storage.
//!
//! The dataset is read once at startup into a [`JobStore`] and then shared
//! read-only between all requests:
//!
//! ```text
//! jobs.csv ──(JobSource::load)──> JobStore ──Arc──> JobService / HTTP handlers
//! ```
//!
//! Nothing mutates the store after it is built, so readers need no locking.
//! Reloading would mean building a fresh store and swapping the `Arc`.

pub mod csv;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::Job;

// Re-export for convenience
pub use self::csv::CsvJobSource;

/// Immutable mapping from job identifier to job.
#[derive(Debug, Clone, Default)]
pub struct JobStore {
    jobs: HashMap<String, Job>,
}

impl JobStore {
    /// Build a store from jobs with unique identifiers.
    pub fn from_jobs(jobs: impl IntoIterator<Item = Job>) -> Result<Self> {
        let mut map = HashMap::new();
        for job in jobs {
            if map.contains_key(&job.id) {
                return Err(AppError::validation(format!(
                    "duplicate job id '{}'",
                    job.id
                )));
            }
            map.insert(job.id.clone(), job);
        }
        Ok(Self { jobs: map })
    }

    /// Look up a job by identifier.
    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.get(id)
    }

    /// All jobs. The order is unspecified and may differ between stores
    /// holding the same jobs.
    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Summary of a dataset load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    /// Where the jobs came from (file path or description)
    pub source: String,
    /// Number of jobs in the store
    pub job_count: usize,
    /// Data rows dropped because they could not be parsed
    pub skipped_rows: usize,
    /// When loading finished
    pub loaded_at: DateTime<Utc>,
}

/// A store together with the report describing how it was built.
#[derive(Debug)]
pub struct LoadedJobs {
    pub store: JobStore,
    pub report: LoadReport,
}

/// Trait for job dataset backends.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Read every job from the backend into a fresh store.
    async fn load(&self) -> Result<LoadedJobs>;
}
