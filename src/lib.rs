// src/lib.rs

//! Geosearch: nearby job postings from a preloaded dataset.

pub mod config;
pub mod error;
pub mod models;
#[cfg(feature = "server")]
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;
