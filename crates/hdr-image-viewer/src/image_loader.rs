//! File decoding into [`RasterImage`].
//!
//! Format sniffing and codecs are delegated to the `image` crate. HDR
//! formats decode into linear radiance; everything else keeps its native
//! 8-bit channel layout.

use std::path::Path;

use image::DynamicImage;
use raster_image::RasterImage;
use thiserror::Error;
use tracing::debug;

/// Image loading error variants.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The file could not be opened or decoded.
    #[error(transparent)]
    Decode(#[from] image::ImageError),
}

/// Decode `path` into an owned image.
pub fn load_image(path: &Path) -> Result<RasterImage, LoadError> {
    let decoded = image::open(path)?;

    let image = match decoded {
        DynamicImage::ImageRgb32F(buffer) => {
            let (width, height) = buffer.dimensions();
            RasterImage::from_hdr(path.to_path_buf(), width, height, 3, buffer.into_raw())
        }
        DynamicImage::ImageRgba32F(buffer) => {
            let (width, height) = buffer.dimensions();
            RasterImage::from_hdr(path.to_path_buf(), width, height, 4, buffer.into_raw())
        }

        DynamicImage::ImageLuma8(buffer) => {
            let (width, height) = buffer.dimensions();
            RasterImage::from_ldr(path.to_path_buf(), width, height, 1, buffer.into_raw())
        }
        DynamicImage::ImageLumaA8(buffer) => {
            let (width, height) = buffer.dimensions();
            RasterImage::from_ldr(path.to_path_buf(), width, height, 2, buffer.into_raw())
        }
        DynamicImage::ImageRgb8(buffer) => {
            let (width, height) = buffer.dimensions();
            RasterImage::from_ldr(path.to_path_buf(), width, height, 3, buffer.into_raw())
        }
        DynamicImage::ImageRgba8(buffer) => {
            let (width, height) = buffer.dimensions();
            RasterImage::from_ldr(path.to_path_buf(), width, height, 4, buffer.into_raw())
        }

        // Deeper LDR layouts (16-bit PNG and friends) are narrowed to 8-bit,
        // keeping alpha when the source has it.
        other => {
            debug!(
                "Narrowing {:?} to 8-bit for {}",
                other.color(),
                path.display()
            );

            if other.color().has_alpha() {
                let buffer = other.to_rgba8();
                let (width, height) = buffer.dimensions();
                RasterImage::from_ldr(path.to_path_buf(), width, height, 4, buffer.into_raw())
            } else {
                let buffer = other.to_rgb8();
                let (width, height) = buffer.dimensions();
                RasterImage::from_ldr(path.to_path_buf(), width, height, 3, buffer.into_raw())
            }
        }
    };

    Ok(image)
}
