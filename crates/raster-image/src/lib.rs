//! Core data model for the viewer: an owned LDR/HDR raster image, its tone
//! parameters, and the pixel sampler used for cursor readouts.

pub mod image;
pub mod sample;
pub mod tone;

pub use image::RasterImage;
pub use sample::sample_color;
pub use tone::{ParseOperatorError, ToneParams, TonemapOperator};
