//! Tests for the image-level tonemap lifecycle.

use std::path::PathBuf;

use raster_image::{RasterImage, ToneParams, TonemapOperator};
use tonemapper::apply;

#[test]
fn first_pass_allocates_and_records() {
    let mut image = RasterImage::from_hdr(
        PathBuf::from("a.hdr"),
        2,
        1,
        3,
        vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    );
    let run = ToneParams {
        operator: TonemapOperator::Gamma,
        exposure: 0.0,
        gamma: 1.0,
    };

    apply(&mut image, run);

    assert_eq!(image.ldr.as_deref(), Some(&[255, 255, 255, 0, 0, 0][..]));
    assert_eq!(image.tone, run);
}

#[test]
fn retune_rewrites_the_display_buffer_in_place() {
    let mut image = RasterImage::from_hdr(PathBuf::from("a.hdr"), 1, 1, 3, vec![0.25, 0.25, 0.25]);

    apply(&mut image, ToneParams {
        operator: TonemapOperator::None,
        exposure: 0.0,
        gamma: 2.2,
    });
    assert_eq!(image.ldr.as_deref(), Some(&[64, 64, 64][..]));

    apply(&mut image, ToneParams {
        operator: TonemapOperator::None,
        exposure: 2.0,
        gamma: 2.2,
    });
    assert_eq!(image.ldr.as_deref(), Some(&[255, 255, 255][..]));
}

#[test]
fn ldr_only_image_is_untouched() {
    let mut image = RasterImage::from_ldr(PathBuf::from("a.png"), 1, 1, 1, vec![42]);
    let before = image.tone;

    apply(&mut image, ToneParams {
        operator: TonemapOperator::Filmic,
        exposure: 3.0,
        gamma: 1.0,
    });

    assert_eq!(image.ldr.as_deref(), Some(&[42][..]));
    assert_eq!(image.tone, before);
}
