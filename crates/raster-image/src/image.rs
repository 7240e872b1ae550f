//! An owned LDR/HDR raster image.

use std::path::PathBuf;

use crate::sample::sample_color;
use crate::tone::ToneParams;

/// A decoded raster image owning its pixel buffers.
///
/// At least one buffer is present after load. When `hdr` is present, `ldr`
/// is derived from it by the tonemapper and is never authoritative on its
/// own; both buffers are released together when the image is dropped.
pub struct RasterImage {
    /// Pixel columns.
    pub width: u32,

    /// Pixel rows.
    pub height: u32,

    /// Interleaved samples per pixel, `1..=4`.
    pub channels: u32,

    /// Linear radiance, `width * height * channels` floats.
    pub hdr: Option<Vec<f32>>,

    /// Display bytes, `width * height * channels` values.
    pub ldr: Option<Vec<u8>>,

    /// Tone parameters last applied to `ldr`.
    pub tone: ToneParams,

    /// The file the image was decoded from.
    pub path: PathBuf,
}

impl RasterImage {
    /// Create an image from decoded HDR radiance. The display buffer starts
    /// empty and is derived by the first tonemap pass.
    ///
    /// # Panics
    ///
    /// Panics if `channels` is outside `1..=4` or the buffer length does not
    /// match the dimensions.
    pub fn from_hdr(path: PathBuf, width: u32, height: u32, channels: u32, hdr: Vec<f32>) -> Self {
        assert!(
            (1..=4).contains(&channels),
            "channel count must be 1..=4, got {channels}"
        );
        assert_eq!(
            hdr.len(),
            width as usize * height as usize * channels as usize,
            "HDR buffer does not match {width}x{height}x{channels}"
        );

        Self {
            width,
            height,
            channels,
            hdr: Some(hdr),
            ldr: None,
            tone: ToneParams::default(),
            path,
        }
    }

    /// Create an image from decoded 8-bit pixels.
    ///
    /// # Panics
    ///
    /// Panics if `channels` is outside `1..=4` or the buffer length does not
    /// match the dimensions.
    pub fn from_ldr(path: PathBuf, width: u32, height: u32, channels: u32, ldr: Vec<u8>) -> Self {
        assert!(
            (1..=4).contains(&channels),
            "channel count must be 1..=4, got {channels}"
        );
        assert_eq!(
            ldr.len(),
            width as usize * height as usize * channels as usize,
            "LDR buffer does not match {width}x{height}x{channels}"
        );

        Self {
            width,
            height,
            channels,
            hdr: None,
            ldr: Some(ldr),
            tone: ToneParams::default(),
            path,
        }
    }

    /// Whether the image carries HDR radiance.
    pub fn is_hdr(&self) -> bool {
        self.hdr.is_some()
    }

    /// Radiance at `(x, y)`, widened to four channels with an opaque alpha
    /// of `1.0`. The zero color when out of bounds or for LDR-only images.
    pub fn sample_hdr(&self, x: i32, y: i32) -> [f32; 4] {
        match self.hdr.as_deref() {
            Some(pixels) => sample_color(self.width, self.height, self.channels, pixels, x, y, 1.0),
            None => [0.0; 4],
        }
    }

    /// Display bytes at `(x, y)`, widened to four channels with an opaque
    /// alpha of `255`. The zero color when out of bounds or before the first
    /// tonemap pass.
    pub fn sample_ldr(&self, x: i32, y: i32) -> [u8; 4] {
        match self.ldr.as_deref() {
            Some(pixels) => sample_color(self.width, self.height, self.channels, pixels, x, y, 255),
            None => [0; 4],
        }
    }
}
