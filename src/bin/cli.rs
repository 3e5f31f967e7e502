//! Geosearch CLI
//!
//! Local query entry point. For the HTTP API, use `geosearch-server`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use geosearch::{
    config::{Runtime, load_all},
    error::Result,
    models::{JobSlot, SearchParams},
};

/// geosearch - Nearby Job Finder
#[derive(Parser, Debug)]
#[command(name = "geosearch", version, about = "Find job postings near a location")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search jobs by title around a location
    Search {
        /// Title text to look for
        title: String,

        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Override the configured result count (1 to 5)
        #[arg(short, long)]
        number: Option<usize>,

        /// Override the configured radius in kilometers
        #[arg(short, long)]
        radius: Option<f64>,
    },

    /// Show available and nearest jobs for a location
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },

    /// Show a single job
    Get {
        /// Job identifier
        id: String,
    },

    /// Validate configuration and dataset
    Validate,

    /// Show dataset info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_slots(heading: &str, slots: &[JobSlot]) {
    println!("{heading}");
    for (i, slot) in slots.iter().enumerate() {
        match slot.job() {
            Some(job) => println!(
                "  {}. {} ({:.5}, {:.5}) [{}]",
                i + 1,
                job.title,
                job.latitude,
                job.longitude,
                job.id
            ),
            None => println!("  {}. -", i + 1),
        }
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Runtime {
        config,
        service,
        report,
    } = match load_all(&cli.config).await {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            return Err(e);
        }
    };

    match cli.command {
        Command::Search {
            title,
            lat,
            lng,
            number,
            radius,
        } => {
            let defaults = service.params();
            let params = SearchParams::new(
                number.unwrap_or(defaults.max_results()),
                radius.unwrap_or(defaults.radius_km()),
                defaults.ranking(),
            )?;
            let jobs = service.with_params(params).search(&title, lng, lat)?;
            print_slots(&format!("Jobs matching '{title}':"), &jobs);
        }

        Command::Nearby { lat, lng } => {
            let nearby = service.load(lng, lat)?;
            print_slots("Available jobs:", &nearby.available);
            print_slots("Nearest jobs:", &nearby.nearest);
        }

        Command::Get { id } => {
            let job = service.find(&id)?;
            println!("{}", serde_json::to_string_pretty(&job)?);
        }

        Command::Validate => {
            log::info!(
                "✓ Config OK (radius {} km, {} results, {:?} ranking)",
                config.search.radius_km,
                config.search.number,
                config.search.ranking
            );
            log::info!("✓ Dataset OK ({} jobs)", report.job_count);
            if report.skipped_rows > 0 {
                log::warn!("{} row(s) were skipped", report.skipped_rows);
            }
            log::info!("All validations passed!");
        }

        Command::Info => {
            log::info!("Dataset: {}", report.source);
            log::info!("Jobs loaded: {}", report.job_count);
            log::info!("Rows skipped: {}", report.skipped_rows);
            log::info!("Loaded at: {}", report.loaded_at);
            log::info!("API address: {}", config.server.address());
        }
    }

    Ok(())
}
