//! User config file.

use std::{fs, path::PathBuf};

use raster_image::ToneParams;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::utilities::directories::config_dir;
use crate::utilities::failure::{Failure, Ignore};

const FILE_NAME: &str = "hdr-image-viewer.toml";

/// Defaults applied to freshly loaded images, overridable from the command
/// line.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Tone parameters applied on load.
    pub tone: ToneParams,

    /// Background level behind the image, `0.0..=1.0`.
    pub background: f32,
}

impl Config {
    /// Read the config file if one exists. A missing file is `Ok(None)`, an
    /// unparsable one is the error.
    pub fn try_load_config() -> Result<Option<Self>, toml::de::Error> {
        let contents = match fs::read_to_string(Self::file_path()) {
            Ok(contents) => contents,
            Err(error) => {
                if error.kind() == std::io::ErrorKind::NotFound {
                    return Ok(None);
                }

                warn!("Could not read the existing config file: {error}");
                return Ok(None);
            }
        };

        let config: Self = toml::from_str(&contents)?;

        Ok(Some(config))
    }

    /// Write the config file.
    pub fn save(&self) {
        let toml_string =
            toml::to_string_pretty(self).log_and_panic("Could not serialize the config file");

        fs::write(Self::file_path(), toml_string.as_bytes())
            .report("Could not save the config file")
            .ignore();
    }

    /// Path of the config file.
    pub fn file_path() -> PathBuf {
        config_dir().join(FILE_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tone: ToneParams::default(),
            background: 0.0,
        }
    }
}
