//! The fixed transfer curves.

/// The piecewise sRGB transfer curve, linear below the threshold and a
/// `1/2.4` power segment above it. Input is clamped to `[0, 1]`.
#[inline]
pub fn srgb_encode(value: f32) -> f32 {
    let value = value.clamp(0.0, 1.0);

    if value <= 0.003_130_8 {
        value * 12.92
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

/// The ACES-fit filmic curve `x(ax + b) / (x(cx + d) + e)`, compressing
/// highlights into a perceptual roll-off. Negative input is floored at zero;
/// the curve is monotone on `[0, inf)` and the output is clamped to `[0, 1]`.
#[inline]
pub fn filmic(value: f32) -> f32 {
    const A: f32 = 2.51;
    const B: f32 = 0.03;
    const C: f32 = 2.43;
    const D: f32 = 0.59;
    const E: f32 = 0.14;

    let x = value.max(0.0);
    let display = (x * (A * x + B)) / (x * (C * x + D) + E);

    display.clamp(0.0, 1.0)
}
