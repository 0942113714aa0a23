use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::models::{CameraDestination, PointerPosition};
use crate::global_constants;

/// Builds the space station outreach page from NASA's public APIs
#[derive(Parser)]
#[command(name = "outreach-page")]
#[command(about = "Render NASA image galleries and station widgets into a static page", long_about = None)]
pub struct Cli {
    /// Settings file to read instead of the per-user one
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// City shown by the Spot the Station widget
    #[arg(long)]
    pub city: Option<String>,
    /// Region, e.g. Texas or New_York
    #[arg(long)]
    pub region: Option<String>,
    /// Country, e.g. United_States
    #[arg(long)]
    pub country: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the full page and write it to disk
    Render {
        /// Output file, defaults to the path in the settings
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Print the gallery markup for one search
    Gallery {
        /// Search phrase sent to the NASA Images API
        query: String,
        /// Maximum number of cards
        #[arg(short, long, default_value_t = global_constants::DEFAULT_GALLERY_LIMIT)]
        limit: usize,
    },
    /// Print the Spot the Station widget URL for a location
    WidgetUrl {
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Replay pointer moves over the tilt viewport and print the style applied each frame
    Tilt {
        /// Pointer position as x,y; repeat for a sequence of moves
        #[arg(long = "pointer", required = true, allow_hyphen_values = true, value_parser = parse_pointer)]
        pointers: Vec<PointerPosition>,
        /// Pointer moves that arrive between two animation frames
        #[arg(long, default_value_t = 1)]
        moves_per_frame: usize,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        /// Pointer leaves the viewport after the last move
        #[arg(long)]
        leave: bool,
    },
    /// Open the globe viewer, optionally move its camera, and report the reset flight
    Globe {
        /// Camera position as longitude,latitude,height_meters
        #[arg(long, allow_hyphen_values = true, value_parser = parse_camera_destination)]
        fly_to: Option<CameraDestination>,
        /// Press the reset button afterwards
        #[arg(long)]
        reset: bool,
    },
}

fn parse_coordinates<const N: usize>(value: &str) -> Result<[f64; N], String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in {:?}: {}", value, e))?;

    parts
        .try_into()
        .map_err(|parts: Vec<f64>| format!("expected {} comma-separated values, got {}", N, parts.len()))
}

fn parse_pointer(value: &str) -> Result<PointerPosition, String> {
    let [x, y] = parse_coordinates::<2>(value)?;
    Ok(PointerPosition::at(x, y))
}

fn parse_camera_destination(value: &str) -> Result<CameraDestination, String> {
    let [longitude, latitude, height_meters] = parse_coordinates::<3>(value)?;
    Ok(CameraDestination {
        longitude,
        latitude,
        height_meters,
    })
}
