//! Tests for the tonemap transform.

use raster_image::{ToneParams, TonemapOperator};
use tonemapper::tonemap;

fn params(operator: TonemapOperator, exposure: f32, gamma: f32) -> ToneParams {
    ToneParams {
        operator,
        exposure,
        gamma,
    }
}

#[test]
fn none_at_zero_exposure_is_clamp_and_quantize() {
    let hdr: Vec<f32> = (0..=100).map(|v| v as f32 / 100.0).collect();
    let mut ldr = vec![0u8; hdr.len()];

    tonemap(
        101,
        1,
        1,
        &hdr,
        &mut ldr,
        params(TonemapOperator::None, 0.0, 2.2),
    );

    for (&value, &byte) in hdr.iter().zip(&ldr) {
        let expected = (value * 255.0).round() as u8;
        assert!(
            byte.abs_diff(expected) <= 1,
            "{value} quantized to {byte}, expected about {expected}"
        );
    }
}

#[test]
fn gamma_one_scenario() {
    let hdr = [1.0f32, 1.0, 1.0, 0.0, 0.0, 0.0];
    let mut ldr = [0u8; 6];

    tonemap(
        2,
        1,
        3,
        &hdr,
        &mut ldr,
        params(TonemapOperator::Gamma, 0.0, 1.0),
    );

    assert_eq!(ldr, [255, 255, 255, 0, 0, 0]);
}

#[test]
fn exposure_scales_in_stops() {
    let hdr = [0.25f32];
    let mut ldr = [0u8; 1];

    tonemap(
        1,
        1,
        1,
        &hdr,
        &mut ldr,
        params(TonemapOperator::None, 1.0, 2.2),
    );
    assert_eq!(ldr, [128]);

    tonemap(
        1,
        1,
        1,
        &hdr,
        &mut ldr,
        params(TonemapOperator::None, 2.0, 2.2),
    );
    assert_eq!(ldr, [255]);
}

#[test]
fn output_never_wraps_for_wild_input() {
    let hdr = [-10.0f32, -0.2, 0.0, 0.5, 1.0, 7.5, 4096.0, f32::MAX];
    let mut ldr = [0u8; 8];

    for operator in TonemapOperator::ALL {
        for exposure in [-20.0, -1.0, 0.0, 1.0, 20.0] {
            tonemap(8, 1, 1, &hdr, &mut ldr, params(operator, exposure, 2.2));

            // Every byte is valid by type; negative input must land at zero
            // rather than wrap around to bright values.
            assert_eq!(ldr[0], 0, "{operator} at {exposure} stops");
            assert_eq!(ldr[1], 0, "{operator} at {exposure} stops");
        }
    }
}

#[test]
fn monotone_in_exposure() {
    let hdr: Vec<f32> = vec![0.0, 0.01, 0.18, 0.5, 1.0, 2.0, 16.0];
    let exposures: Vec<f32> = (-40..=40).map(|v| v as f32 / 2.0).collect();

    for operator in TonemapOperator::ALL {
        let mut previous = vec![0u8; hdr.len()];
        tonemap(
            hdr.len() as u32,
            1,
            1,
            &hdr,
            &mut previous,
            params(operator, exposures[0], 2.2),
        );

        for &exposure in &exposures[1..] {
            let mut current = vec![0u8; hdr.len()];
            tonemap(
                hdr.len() as u32,
                1,
                1,
                &hdr,
                &mut current,
                params(operator, exposure, 2.2),
            );

            for (index, (&before, &after)) in previous.iter().zip(&current).enumerate() {
                assert!(
                    after >= before,
                    "{operator} dimmed {} from {before} to {after} at {exposure} stops",
                    hdr[index]
                );
            }

            previous = current;
        }
    }
}

#[test]
fn identical_parameters_are_idempotent() {
    let hdr: Vec<f32> = (0..64).map(|v| (v as f32 * 0.37).sin().abs() * 3.0).collect();
    let run = params(TonemapOperator::Filmic, 1.5, 2.2);

    let mut first = vec![0u8; hdr.len()];
    tonemap(8, 2, 4, &hdr, &mut first, run);

    // Overwrites a stale buffer completely, no hidden state between calls.
    let mut second = vec![0xAAu8; hdr.len()];
    tonemap(8, 2, 4, &hdr, &mut second, run);

    assert_eq!(first, second);
}

#[test]
fn alpha_passes_through_unscaled() {
    let hdr = [4.0f32, 4.0, 4.0, 0.5];
    let mut ldr = [0u8; 4];

    tonemap(
        1,
        1,
        4,
        &hdr,
        &mut ldr,
        params(TonemapOperator::Srgb, -20.0, 2.2),
    );

    assert_eq!(ldr[3], 128, "alpha must ignore exposure");
}

#[test]
fn srgb_endpoints() {
    let hdr = [0.0f32, 0.002, 1.0, 100.0];
    let mut ldr = [0u8; 4];

    tonemap(
        4,
        1,
        1,
        &hdr,
        &mut ldr,
        params(TonemapOperator::Srgb, 0.0, 2.2),
    );

    assert_eq!(ldr[0], 0);
    // Linear segment: 0.002 * 12.92 * 255 = 6.59.
    assert!(ldr[1].abs_diff(7) <= 1);
    assert_eq!(ldr[2], 255);
    assert_eq!(ldr[3], 255);
}

#[test]
fn filmic_compresses_highlights_below_clipping() {
    let hdr = [0.0f32, 1.0, 10.0];
    let mut ldr = [0u8; 3];

    tonemap(
        3,
        1,
        1,
        &hdr,
        &mut ldr,
        params(TonemapOperator::Filmic, 0.0, 2.2),
    );

    assert_eq!(ldr[0], 0);
    // The shoulder rolls off below white at 1.0 but saturates far above it.
    assert!(ldr[1] < 255, "filmic must not clip at 1.0, got {}", ldr[1]);
    assert!(ldr[1] > 200);
    assert_eq!(ldr[2], 255);
}

#[test]
#[should_panic]
fn undersized_display_buffer_panics() {
    let hdr = [0.0f32; 12];
    let mut ldr = [0u8; 11];

    tonemap(
        2,
        2,
        3,
        &hdr,
        &mut ldr,
        params(TonemapOperator::Srgb, 0.0, 2.2),
    );
}
