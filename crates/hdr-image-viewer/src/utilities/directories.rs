//! Well-known directories.

use std::fs::create_dir_all;

use super::failure::{Failure, Ignore};

/// Path to the config directory, created on first use.
pub fn config_dir() -> std::path::PathBuf {
    let dir = dirs::config_dir()
        .log_and_panic("The config directory could not be retrieved")
        .join("hdr-image-viewer");

    create_dir_all(&dir)
        .report("Could not create the config directory")
        .ignore();

    dir
}
