// src/server/state.rs

//! Shared state handed to every request handler.

use crate::services::JobService;
use crate::storage::LoadReport;

/// Immutable application state, shared behind an `Arc`.
#[derive(Debug)]
pub struct AppState {
    pub service: JobService,
    pub report: LoadReport,
}

impl AppState {
    pub fn new(service: JobService, report: LoadReport) -> Self {
        Self { service, report }
    }
}
