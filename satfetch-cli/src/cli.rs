use clap::Parser;
use std::path::PathBuf;

/// Define CLI arguments
#[derive(Parser)]
#[command(
    version,
    about = "Satellite map image batch-download tool",
    long_about = "Downloads static satellite map images for a list of geocoded records\n\
                  (id, latitude, longitude) and caches them on disk, one PNG per record.\n\
                  \n\
                  Records whose image file already exists are skipped without a network\n\
                  call, so interrupted or partially failed runs can simply be re-run.\n\
                  The imagery API key is read from the GOOGLE_MAPS_API_KEY environment\n\
                  variable (a .env file in the working directory is honored)."
)]
pub struct CliArgs {
    /// Input dataset to process
    #[arg(
        required = true,
        help = "Path to the CSV dataset with required columns: id, lat, long"
    )]
    pub dataset: PathBuf,

    /// Output directory for downloaded images
    #[arg(
        short,
        long,
        help = "Directory where image files will be saved (default: ./images)"
    )]
    pub output_dir: Option<PathBuf>,

    /// Map zoom level
    #[arg(short, long, default_value = "19", help = "Map zoom level")]
    pub zoom: u8,

    /// Output image size in pixels
    #[arg(
        short,
        long,
        default_value = "256x256",
        help = "Output image size in pixels as WIDTHxHEIGHT. Example: \"640x480\""
    )]
    pub size: String,

    /// Map rendering style (satellite, roadmap, terrain, hybrid)
    #[arg(
        long,
        default_value = "satellite",
        help = "Map rendering style",
        value_parser = ["satellite", "roadmap", "terrain", "hybrid"]
    )]
    pub map_type: String,

    /// Pixel density multiplier
    #[arg(long, default_value = "1", help = "Pixel density multiplier (1 or 2)")]
    pub scale: u8,

    /// Imagery endpoint base URL
    #[arg(
        long,
        help = "Override the static-map imagery endpoint base URL (mainly for testing)"
    )]
    pub endpoint: Option<String>,

    /// Overall timeout in seconds
    #[arg(
        long,
        default_value = "10",
        help = "Overall timeout in seconds for each HTTP request"
    )]
    pub timeout: u64,

    /// Connection timeout in seconds
    #[arg(
        long,
        default_value = "10",
        help = "Connection timeout in seconds (time to establish initial connection)"
    )]
    pub connect_timeout: u64,

    /// Pause between requests in milliseconds
    #[arg(
        long,
        default_value = "150",
        help = "Pause between consecutive requests in milliseconds, to respect API rate limits"
    )]
    pub delay_ms: u64,

    /// Show a progress bar
    #[arg(
        short = 'P',
        long = "progress",
        default_value = "false",
        help = "Show a progress bar while downloading"
    )]
    pub show_progress: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable detailed debug logging")]
    pub verbose: bool,
}
