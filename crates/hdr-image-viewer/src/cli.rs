//! Command line surface.

use std::path::PathBuf;

use clap::Parser;
use raster_image::TonemapOperator;

/// View LDR/HDR images with pan, zoom and live tonemap retuning.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Image files to view.
    #[arg(value_name = "IMAGE", required = true)]
    pub images: Vec<PathBuf>,

    /// Initial exposure in stops.
    #[arg(short, long)]
    pub exposure: Option<f32>,

    /// Initial gamma for the gamma operator.
    #[arg(short, long)]
    pub gamma: Option<f32>,

    /// Initial tonemap operator: none, srgb, gamma or filmic.
    #[arg(short, long)]
    pub tonemap: Option<TonemapOperator>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}
