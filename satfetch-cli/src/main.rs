use std::{path::PathBuf, sync::Arc, time::Duration};

use clap::Parser;
use error::AppError;
use indicatif::MultiProgress;
use satfetch_engine::{BatchFetcher, FetcherConfig, ImageFetcher, MapType, load_records};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::fmt::writer::MakeWriterExt;

mod cli;
mod error;
mod utils;

use cli::CliArgs;
use utils::parse_dimensions;
use utils::progress::ProgressManager;

/// Environment variable holding the imagery API key.
const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

fn main() {
    if let Err(e) = bootstrap() {
        eprintln!("Error: {e}");
        // Log the full error for debugging
        error!(error = ?e, "Application failed");
        std::process::exit(1);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn bootstrap() -> Result<(), AppError> {
    // Parse command-line arguments
    let args = CliArgs::parse();

    // Setup logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("satfetch.log")?;

    let multi_writer = MakeWriterExt::and(std::io::stdout, log_file);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(multi_writer)
        .with_ansi(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Initialization(e.to_string()))?;

    info!("███████╗ █████╗ ████████╗███████╗███████╗████████╗ ██████╗██╗  ██╗");
    info!("██╔════╝██╔══██╗╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝██║  ██║");
    info!("███████╗███████║   ██║   █████╗  █████╗     ██║   ██║     ███████║");
    info!("╚════██║██╔══██║   ██║   ██╔══╝  ██╔══╝     ██║   ██║     ██╔══██║");
    info!("███████║██║  ██║   ██║   ██║     ███████╗   ██║   ╚██████╗██║  ██║");
    info!("╚══════╝╚═╝  ╚═╝   ╚═╝   ╚═╝     ╚══════╝   ╚═╝    ╚═════╝╚═╝  ╚═╝");
    info!("");
    info!("Satellite map image batch downloader");
    info!("==================================================================");

    // Load a .env file if present, then require the API key before anything
    // else happens
    dotenvy::dotenv().ok();
    let api_key = std::env::var(API_KEY_ENV).map_err(|_| AppError::MissingApiKey(API_KEY_ENV))?;

    // Output image size in pixels
    let (width, height) = parse_dimensions(&args.size)?;

    // Parse map type
    let map_type = match args.map_type.as_str() {
        "satellite" => MapType::Satellite,
        "roadmap" => MapType::Roadmap,
        "terrain" => MapType::Terrain,
        "hybrid" => MapType::Hybrid,
        _ => {
            return Err(AppError::InvalidInput(format!(
                "Invalid map type: '{}'",
                args.map_type
            )));
        }
    };

    // Create the fetcher configuration
    let config = {
        let mut builder = FetcherConfig::builder()
            .with_zoom(args.zoom)
            .with_size(width, height)
            .with_map_type(map_type)
            .with_scale(args.scale)
            .with_timeout(Duration::from_secs(args.timeout))
            .with_connect_timeout(Duration::from_secs(args.connect_timeout))
            .with_request_delay(Duration::from_millis(args.delay_ms));

        if let Some(endpoint) = args.endpoint.as_ref() {
            info!(endpoint = %endpoint, "Using custom imagery endpoint");
            builder = builder.with_endpoint(endpoint);
        }
        builder.build()
    };

    info!("{config}");

    // Load and validate the dataset before any network activity
    let records = load_records(&args.dataset)?;
    info!(
        dataset = %args.dataset.display(),
        records = records.len(),
        "Dataset loaded"
    );

    // Determine output directory
    let output_dir = args.output_dir.unwrap_or_else(|| PathBuf::from("./images"));

    // Create a progress manager based on show_progress flag
    let multi = MultiProgress::new();
    let progress_manager = if args.show_progress {
        ProgressManager::new(multi, records.len() as u64)
    } else {
        ProgressManager::new_disabled()
    };

    let fetcher = ImageFetcher::new(config, api_key)?;
    let batch = {
        let progress_manager = progress_manager.clone();
        BatchFetcher::new(fetcher, output_dir).with_progress(Arc::new(move |event| {
            progress_manager.handle_event(event);
        }))
    };

    let summary = batch.run(&records).await?;
    progress_manager.finish();

    println!("\n{summary}");
    info!(
        total = summary.total,
        downloaded = summary.downloaded,
        skipped = summary.skipped,
        failed = summary.failed,
        "Satellite image fetching completed"
    );

    Ok(())
}
