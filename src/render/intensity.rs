use serde::{Deserialize, Serialize};

use crate::session::DisplayParameters;

/// Which maximum intensities are divided by before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Global volume maximum; brightness is stable while scrolling.
    #[default]
    Volume,
    /// Maximum of the displayed slice only.
    Slice,
}

/// Normalization, gamma and contrast folded into one per-sample function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityTransform {
    scale: f32,
    gamma: f32,
    contrast: f32,
}

impl IntensityTransform {
    /// A non-positive `reference_max` leaves values unscaled.
    pub fn new(reference_max: f32, display: DisplayParameters) -> Self {
        let scale = if reference_max > 0.0 && reference_max.is_finite() {
            1.0 / reference_max
        } else {
            1.0
        };
        Self {
            scale,
            gamma: display.gamma(),
            contrast: display.contrast(),
        }
    }

    pub fn apply(&self, value: f32) -> f32 {
        let normalized = value * self.scale;
        let mut out = if normalized.is_nan() {
            0.0
        } else {
            normalized.clamp(0.0, 1.0)
        };
        if self.gamma != 1.0 {
            out = out.powf(self.gamma);
        }
        if self.contrast != 1.0 {
            out = ((out - 0.5) * self.contrast + 0.5).clamp(0.0, 1.0);
        }
        out
    }

    pub fn to_u8(&self, value: f32) -> u8 {
        quantize(self.apply(value))
    }
}

pub fn quantize(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
