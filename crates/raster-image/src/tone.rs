//! Tone parameters attached to each image.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// The transfer curve applied when deriving the display buffer from HDR
/// radiance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TonemapOperator {
    /// No curve, radiance is clamped and quantized directly.
    None,

    /// The piecewise sRGB transfer curve.
    #[default]
    Srgb,

    /// A plain `x^(1/gamma)` power curve.
    Gamma,

    /// A fixed filmic curve with a perceptual highlight roll-off.
    Filmic,
}

impl TonemapOperator {
    /// Every operator, in display order.
    pub const ALL: [Self; 4] = [Self::None, Self::Srgb, Self::Gamma, Self::Filmic];

    /// The operator's lowercase name, as used on the command line and in the
    /// config file.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Srgb => "srgb",
            Self::Gamma => "gamma",
            Self::Filmic => "filmic",
        }
    }
}

impl fmt::Display for TonemapOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TonemapOperator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "srgb" => Ok(Self::Srgb),
            "gamma" => Ok(Self::Gamma),
            "filmic" => Ok(Self::Filmic),
            _ => Err(ParseOperatorError(s.to_string())),
        }
    }
}

/// The name did not match any tonemap operator.
#[derive(Debug, Error)]
#[error("unknown tonemap operator '{0}', expected one of: none, srgb, gamma, filmic")]
pub struct ParseOperatorError(String);

/// Parameters consumed by the tonemapper when deriving an image's display
/// buffer. Mutated by the UI layer, recorded on the image once applied.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToneParams {
    /// The transfer curve.
    pub operator: TonemapOperator,

    /// Exposure in stops, radiance is scaled by `2^exposure`.
    pub exposure: f32,

    /// Gamma for the [`TonemapOperator::Gamma`] curve.
    pub gamma: f32,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            operator: TonemapOperator::Srgb,
            exposure: 0.0,
            gamma: 2.2,
        }
    }
}
