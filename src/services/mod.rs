//! Service layer for the job search application.
//!
//! This module contains the business logic for:
//! - Title and proximity search (`search`)
//! - Landing view lists (`nearby`)
//! - Fixed-size result padding (`padding`)
//! - The entry points shared by API and CLI (`JobService`)

mod jobs;
pub mod nearby;
pub mod padding;
mod ranking;
pub mod search;

pub use jobs::JobService;
pub use nearby::{AVAILABLE_DISPLAY_SIZE, NEARBY_RADIUS_KM, NEAREST_DISPLAY_SIZE, load_nearby};
pub use padding::{pad, pad_to};
pub use search::{SEARCH_DISPLAY_SIZE, search};
