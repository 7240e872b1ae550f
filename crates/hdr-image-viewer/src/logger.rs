//! Tracing logger setup.

use tracing::{
    Level,
    subscriber::{SetGlobalDefaultError, set_global_default},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;

use crate::utilities::directories::config_dir;

/// Set up a non-blocking logger on stdout plus a log file next to the
/// config. The guards must be held for the lifetime of the application.
pub fn setup_logger(debug: bool) -> Result<[WorkerGuard; 2], SetGlobalDefaultError> {
    let level = if debug { Level::TRACE } else { Level::INFO };

    let filter = tracing_subscriber::filter::Targets::new()
        .with_default(level)
        .with_target("winit", Level::WARN)
        .with_target("eframe", Level::WARN)
        .with_target("egui_glow", Level::WARN);

    // stdout logger
    let (std_writer, std_guard) = tracing_appender::non_blocking(std::io::stdout());
    let std_logger = tracing_subscriber::fmt::layer()
        .with_writer(std_writer)
        .with_ansi(false)
        .with_target(false);

    // file logger
    let file_appender = tracing_appender::rolling::never(config_dir(), "hdr-image-viewer.log");
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);
    let file_logger = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false);

    // Register loggers
    let collector = tracing_subscriber::registry()
        .with(std_logger)
        .with(file_logger)
        .with(filter);

    set_global_default(collector)?;

    Ok([std_guard, file_guard])
}
