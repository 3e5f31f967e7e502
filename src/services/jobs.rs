// src/services/jobs.rs

//! Job service: the entry points used by the API and the CLI.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{Coordinates, Job, JobSlot, NearbyJobs, SearchParams};
use crate::services::{nearby, search};
use crate::storage::JobStore;

/// Read-only access to a loaded job store.
///
/// Cloning is cheap: the store is shared, never copied.
#[derive(Debug, Clone)]
pub struct JobService {
    store: Arc<JobStore>,
    params: SearchParams,
}

impl JobService {
    pub fn new(store: Arc<JobStore>, params: SearchParams) -> Self {
        Self { store, params }
    }

    pub fn store(&self) -> &JobStore {
        &self.store
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Same store, different search parameters.
    pub fn with_params(&self, params: SearchParams) -> Self {
        Self {
            store: Arc::clone(&self.store),
            params,
        }
    }

    /// Search by title around a point, with the configured count and radius.
    ///
    /// Fails only on malformed coordinates; no match is a list of placeholders.
    pub fn search(&self, title: &str, longitude: f64, latitude: f64) -> Result<Vec<JobSlot>> {
        let center = Coordinates::new(latitude, longitude)?;
        Ok(search::search(&self.store, title, center, &self.params))
    }

    /// Available and nearest lists for the landing view.
    pub fn load(&self, longitude: f64, latitude: f64) -> Result<NearbyJobs> {
        let center = Coordinates::new(latitude, longitude)?;
        Ok(nearby::load_nearby(
            &self.store,
            center,
            self.params.ranking(),
        ))
    }

    /// Look up a single job.
    pub fn find(&self, id: &str) -> Result<Job> {
        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(id))
    }
}
