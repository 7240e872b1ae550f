//! # HDR Image Viewer
//! Interactive viewer for LDR/HDR raster images with live tonemap retuning.

use clap::Parser;
use mimalloc::MiMalloc;
use tracing::{info, info_span, warn};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use cli::Args;
use config::Config;
use logger::setup_logger;
use raster_image::ToneParams;
use utilities::failure::Failure;
use viewer::Viewer;

mod cli;
mod config;
mod image_loader;
mod logger;
mod utilities;
mod viewer;

/// The Cargo package version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width reserved for the HUD beside the first image when sizing the window.
const HUD_WIDTH: f32 = 256.0;

fn main() {
    let args = Args::parse();

    // Set up logger
    let _logger_guards = setup_logger(args.debug);

    // Log application start
    let _span = info_span!("[Main Thread]").entered();
    info!("HDR Image Viewer v{VERSION}");

    // Load config
    let config = match Config::try_load_config() {
        Ok(Some(config)) => config,
        Ok(None) => {
            let config = Config::default();
            config.save();
            config
        }
        Err(error) => {
            warn!("Could not deserialize config file, using defaults:\n{error}");
            Config::default()
        }
    };

    // The command line overrides the config file.
    let tone = ToneParams {
        operator: args.tonemap.unwrap_or(config.tone.operator),
        exposure: args.exposure.unwrap_or(config.tone.exposure),
        gamma: args.gamma.unwrap_or(config.tone.gamma),
    };

    // Load and initially tonemap the images.
    let mut images = Vec::with_capacity(args.images.len());
    for path in &args.images {
        let mut image = image_loader::load_image(path)
            .log_and_panic(&format!("Could not load image {}", path.display()));

        tonemapper::apply(&mut image, tone);

        info!(
            "Loaded {} {}x{}@{}{}",
            path.display(),
            image.width,
            image.height,
            image.channels,
            if image.is_hdr() { " (hdr)" } else { "" },
        );

        images.push(image);
    }

    // Size the window to the first image plus the HUD, like the readouts
    // expect at 1:1 zoom.
    let inner_size = [
        images[0].width as f32 + HUD_WIDTH,
        images[0].height as f32,
    ];

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_title("hdr-image-viewer"),
        ..Default::default()
    };

    let viewer = Viewer::new(images, tone, config.background);

    eframe::run_native(
        "hdr-image-viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(viewer))),
    )
    .log_and_panic("Could not create the application window");
}
