// src/storage/csv.rs

//! CSV file job source.
//!
//! Expected layout: a header row followed by `title,longitude,latitude`
//! records. Every kept row is given a random UUID and a title-cased title.
//! Rows whose coordinates do not parse are skipped and counted.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::Job;
use crate::storage::{JobSource, JobStore, LoadReport, LoadedJobs};
use crate::utils::text::{title_case, trim_quotes};

/// Reads jobs from a CSV file on the local filesystem.
#[derive(Debug, Clone)]
pub struct CsvJobSource {
    path: PathBuf,
}

impl CsvJobSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl JobSource for CsvJobSource {
    async fn load(&self) -> Result<LoadedJobs> {
        log::info!("Loading jobs from {}", self.path.display());

        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::config(format!(
                "failed to load the csv file {}: {e}",
                self.path.display()
            ))
        })?;

        let parsed = parse_jobs(&bytes)?;
        if parsed.skipped > 0 {
            log::warn!(
                "Skipped {} row(s) with invalid coordinates in {}",
                parsed.skipped,
                self.path.display()
            );
        }

        let store = JobStore::from_jobs(parsed.jobs)?;
        let report = LoadReport {
            source: self.path.display().to_string(),
            job_count: store.len(),
            skipped_rows: parsed.skipped,
            loaded_at: Utc::now(),
        };

        log::info!("Loaded {} jobs", report.job_count);
        Ok(LoadedJobs { store, report })
    }
}

/// Jobs decoded from CSV content.
#[derive(Debug)]
pub struct ParsedJobs {
    pub jobs: Vec<Job>,
    pub skipped: usize,
}

/// Decode CSV content into jobs.
///
/// Fails when the content has no data rows at all.
pub fn parse_jobs(content: &[u8]) -> Result<ParsedJobs> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let mut jobs = Vec::new();
    let mut rows = 0;
    let mut skipped = 0;

    for record in reader.records() {
        let record = record?;
        rows += 1;

        let (Some(title), Some(lng), Some(lat)) = (record.get(0), record.get(1), record.get(2))
        else {
            skipped += 1;
            continue;
        };
        let (Ok(longitude), Ok(latitude)) = (lng.trim().parse::<f64>(), lat.trim().parse::<f64>())
        else {
            skipped += 1;
            continue;
        };

        jobs.push(Job::new(
            Uuid::new_v4().to_string(),
            title_case(trim_quotes(title.trim())),
            longitude,
            latitude,
        ));
    }

    if rows == 0 {
        return Err(AppError::config("csv file has no jobs records"));
    }

    Ok(ParsedJobs { jobs, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
Title,Longitude,Latitude
senior baker,10.0,10.0
\"head chef\",-77.037,38.898
broken row,east,38.9
";

    #[test]
    fn test_parse_jobs() {
        let parsed = parse_jobs(SAMPLE.as_bytes()).unwrap();

        assert_eq!(parsed.jobs.len(), 2);
        assert_eq!(parsed.skipped, 1);

        let baker = &parsed.jobs[0];
        assert_eq!(baker.title, "Senior Baker");
        assert_eq!(baker.longitude, 10.0);
        assert_eq!(baker.latitude, 10.0);
        assert!(Uuid::parse_str(&baker.id).is_ok());

        assert_eq!(parsed.jobs[1].title, "Head Chef");
        assert_ne!(parsed.jobs[0].id, parsed.jobs[1].id);
    }

    #[test]
    fn test_header_only_is_error() {
        let result = parse_jobs(b"Title,Longitude,Latitude\n");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let parsed = parse_jobs(b"Title,Longitude,Latitude\nbaker,10.0\ncook,1,2\n").unwrap();
        assert_eq!(parsed.jobs.len(), 1);
        assert_eq!(parsed.skipped, 1);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("jobs.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let loaded = CsvJobSource::new(&path).load().await.unwrap();

        assert_eq!(loaded.store.len(), 2);
        assert_eq!(loaded.report.job_count, 2);
        assert_eq!(loaded.report.skipped_rows, 1);
        assert_eq!(loaded.report.source, path.display().to_string());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let source = CsvJobSource::new(tmp.path().join("nope.csv"));

        let result = source.load().await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
