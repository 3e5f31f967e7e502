// src/models/job.rs

//! Job posting and result slot data structures.

use serde::{Deserialize, Serialize, Serializer};

use crate::models::Coordinates;
use crate::utils::geo;

/// Identifier rendered for a placeholder slot.
pub const PLACEHOLDER_ID: &str = "#";

/// Title rendered for a placeholder slot.
pub const PLACEHOLDER_TITLE: &str = "No Job Found";

/// A job posting loaded from the dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    /// Unique identifier assigned at load time
    pub id: String,

    /// Title-cased job title
    pub title: String,

    /// Longitude in degrees
    pub longitude: f64,

    /// Latitude in degrees
    pub latitude: f64,
}

impl Job {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            longitude,
            latitude,
        }
    }

    /// The sentinel record shown in place of a missing result.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_ID, PLACEHOLDER_TITLE, 0.0, 0.0)
    }

    /// Great-circle distance in kilometers from `center` to this job.
    pub fn distance_from(&self, center: Coordinates) -> f64 {
        geo::distance_km(
            center.latitude,
            center.longitude,
            self.latitude,
            self.longitude,
        )
    }
}

/// One entry of a fixed-size result list.
///
/// Short result lists are padded with `Placeholder` so that every list has
/// the same length for display. Placeholders only turn into the sentinel
/// record (`"#"` / `"No Job Found"`) when serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum JobSlot {
    Found(Job),
    Placeholder,
}

impl JobSlot {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, JobSlot::Placeholder)
    }

    /// The job held by this slot, if any.
    pub fn job(&self) -> Option<&Job> {
        match self {
            JobSlot::Found(job) => Some(job),
            JobSlot::Placeholder => None,
        }
    }

    pub fn into_job(self) -> Option<Job> {
        match self {
            JobSlot::Found(job) => Some(job),
            JobSlot::Placeholder => None,
        }
    }

    /// The record to display for this slot.
    pub fn display_job(&self) -> Job {
        match self {
            JobSlot::Found(job) => job.clone(),
            JobSlot::Placeholder => Job::placeholder(),
        }
    }
}

impl From<Job> for JobSlot {
    fn from(job: Job) -> Self {
        JobSlot::Found(job)
    }
}

impl Serialize for JobSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JobSlot::Found(job) => job.serialize(serializer),
            JobSlot::Placeholder => Job::placeholder().serialize(serializer),
        }
    }
}
