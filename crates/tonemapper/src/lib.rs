//! HDR -> display tonemapping.
//!
//! Derives an image's 8-bit display buffer from its linear radiance under a
//! selectable operator, exposure and gamma. The transform is pure and
//! allocation free; it is cheap enough to re-run over a full image on every
//! parameter change.

pub mod curve;

use raster_image::{RasterImage, ToneParams, TonemapOperator};
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::{ParallelSlice, ParallelSliceMut};

use crate::curve::{filmic, srgb_encode};

/// Overwrite `ldr` in place with the tonemapped rendition of `hdr`.
///
/// Per color channel: radiance is scaled by `2^exposure`, passed through the
/// operator's curve, clamped to `[0, 1]` and quantized to a rounded byte. A
/// fourth channel is alpha and is copied through unscaled.
///
/// # Panics
///
/// Panics if `channels` is outside `1..=4` or either buffer is not exactly
/// `width * height * channels` values. Both indicate a caller bug.
pub fn tonemap(
    width: u32,
    height: u32,
    channels: u32,
    hdr: &[f32],
    ldr: &mut [u8],
    params: ToneParams,
) {
    assert!(
        (1..=4).contains(&channels),
        "channel count must be 1..=4, got {channels}"
    );
    let length = width as usize * height as usize * channels as usize;
    assert_eq!(
        hdr.len(),
        length,
        "HDR buffer does not match {width}x{height}x{channels}"
    );
    assert_eq!(
        ldr.len(),
        length,
        "display buffer does not match {width}x{height}x{channels}"
    );

    let channels = channels as usize;
    let scale = params.exposure.exp2();
    let inverse_gamma = 1.0 / params.gamma;

    ldr.par_chunks_exact_mut(channels)
        .zip(hdr.par_chunks_exact(channels))
        .for_each(|(out, pixel)| {
            for (channel, (out, &value)) in out.iter_mut().zip(pixel).enumerate() {
                // A true fourth channel is alpha, untouched by exposure.
                if channels == 4 && channel == 3 {
                    *out = quantize(value);
                    continue;
                }

                let scaled = value * scale;
                let display = match params.operator {
                    TonemapOperator::None => scaled,
                    TonemapOperator::Srgb => srgb_encode(scaled),
                    TonemapOperator::Gamma => scaled.max(0.0).powf(inverse_gamma),
                    TonemapOperator::Filmic => filmic(scaled),
                };

                *out = quantize(display);
            }
        });
}

/// Re-derive `image.ldr` from its radiance under `params`, allocating the
/// display buffer on the first pass and recording the applied parameters.
/// LDR-only images are left untouched.
pub fn apply(image: &mut RasterImage, params: ToneParams) {
    let Some(hdr) = image.hdr.as_deref() else {
        return;
    };

    let length = hdr.len();
    let ldr = image.ldr.get_or_insert_with(|| vec![0; length]);

    tonemap(image.width, image.height, image.channels, hdr, ldr, params);
    image.tone = params;
}

#[inline]
fn quantize(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
