//! mapstitch CLI - Command-line interface
//!
//! This binary provides a command-line interface to the mapstitch library:
//! it parses the requested region, derives the growth step for the target
//! zoom and latitude, plans the tile grid, and drives the download and
//! composition.

mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use mapstitch::config;
use mapstitch::geo::{self, GeoPoint, GrowthStep};
use mapstitch::grid::{self, GridRequest};
use mapstitch::logging;
use mapstitch::mosaic::{self, ComposeMode, ComposeOptions, FetchErrorPolicy};
use mapstitch::provider::{ReqwestClient, StaticMapProvider};
use mapstitch::style;
use mapstitch::zoom::{ZoomTable, BASE_ZOOM};

use error::CliError;

#[derive(Parser)]
#[command(name = "mapstitch", version = mapstitch::VERSION)]
#[command(about = "Download a grid of static-map tiles and stitch them into one image")]
struct Args {
    /// Path to store the final image at
    output: PathBuf,

    /// Center of the top-left tile as two decimal degrees
    #[arg(long, required = true, num_args = 2, value_names = ["LAT", "LON"],
          allow_negative_numbers = true)]
    start: Vec<f64>,

    /// Center of the bottom-right tile as two decimal degrees
    #[arg(long, num_args = 2, value_names = ["LAT", "LON"],
          allow_negative_numbers = true)]
    end: Option<Vec<f64>>,

    /// Grid width in tiles (with --height, instead of --end)
    #[arg(long)]
    width: Option<u32>,

    /// Grid height in tiles (with --width, instead of --end)
    #[arg(long)]
    height: Option<u32>,

    /// Zoom level
    #[arg(short, long, default_value_t = 16)]
    zoom: i32,

    /// Latitude degrees per tile before zoom and scale adjustment
    #[arg(long, default_value_t = geo::DEFAULT_STEP.lat, allow_negative_numbers = true)]
    lat_step: f64,

    /// Longitude degrees per tile before zoom adjustment
    #[arg(long, default_value_t = geo::DEFAULT_STEP.lon, allow_negative_numbers = true)]
    lon_step: f64,

    /// Path to a JSON map-style file
    #[arg(long)]
    style: Option<PathBuf>,

    /// Keep every fetched tile as a numbered PNG next to the output
    #[arg(long)]
    save_tiles: bool,

    /// Abort on the first failed tile fetch instead of leaving a gap
    #[arg(long)]
    fail_fast: bool,

    /// API key; falls back to the stored key file when omitted
    #[arg(long)]
    key: Option<String>,

    /// Persist the supplied API key for future runs
    #[arg(long, requires = "key")]
    store_key: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(err) = run(args) {
        err.exit();
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let start = GeoPoint::new(args.start[0], args.start[1]);
    let end = args.end.as_ref().map(|e| GeoPoint::new(e[0], e[1]));

    // Rescale the degrees-per-tile constants from their tuning zoom and
    // reference latitude to the requested zoom and start latitude
    let table = ZoomTable::builtin().map_err(CliError::ZoomTable)?;
    let ratio = table
        .ratio(args.zoom, BASE_ZOOM)
        .map_err(CliError::ZoomTable)?;
    let step = GrowthStep::new(
        args.lat_step * ratio / geo::scale_ratio(geo::REFERENCE_POINT, start),
        args.lon_step * ratio,
    );
    debug!(
        zoom = args.zoom,
        ratio,
        lat_step = step.lat,
        lon_step = step.lon,
        "derived growth step"
    );

    // Resolve the credential before any network activity
    let api_key = match args.key {
        Some(key) => {
            if args.store_key {
                config::save_api_key(&key).map_err(CliError::Credential)?;
                info!("API key stored");
            }
            key
        }
        None => config::load_api_key().map_err(CliError::Credential)?,
    };

    let style = match &args.style {
        Some(path) => {
            let rules = style::load(path).map_err(CliError::Style)?;
            style::encode(&rules)
        }
        None => String::new(),
    };

    let spec = grid::plan(&GridRequest {
        origin: start,
        step,
        rows: args.height,
        cols: args.width,
        end,
    })
    .map_err(CliError::Grid)?;
    info!(rows = spec.rows, cols = spec.cols, "planned grid");

    let client = ReqwestClient::new().map_err(CliError::Provider)?;
    let provider =
        StaticMapProvider::new(client, api_key, args.zoom).with_style(style);

    let options = ComposeOptions {
        mode: if args.save_tiles {
            ComposeMode::Staged {
                dir: staging_dir(&args.output),
            }
        } else {
            ComposeMode::Direct
        },
        crop: mosaic::DEFAULT_CROP,
        on_fetch_error: if args.fail_fast {
            FetchErrorPolicy::Abort
        } else {
            FetchErrorPolicy::Skip
        },
    };

    let canvas = mosaic::compose(&provider, &spec, &options).map_err(CliError::Compose)?;
    mosaic::save(&canvas, &args.output).map_err(CliError::Compose)?;

    let resolved = args
        .output
        .canonicalize()
        .unwrap_or_else(|_| args.output.clone());
    println!(
        "Map generation finished. Image saved at: {}",
        resolved.display()
    );

    Ok(())
}

/// Directory the staged tiles land in: next to the output file.
fn staging_dir(output: &Path) -> PathBuf {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
