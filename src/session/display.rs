use serde::{Deserialize, Serialize};

pub const DISPLAY_FACTOR_MAX: f32 = 2.0;

/// Brightness (gamma) and contrast (scale around mid-grey) shared by all planes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayParameters {
    brightness: f32,
    contrast: f32,
}

impl Default for DisplayParameters {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
        }
    }
}

impl DisplayParameters {
    pub fn new(brightness: f32, contrast: f32) -> Self {
        let mut parameters = Self::default();
        parameters.set_brightness(brightness);
        parameters.set_contrast(contrast);
        parameters
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn contrast(&self) -> f32 {
        self.contrast
    }

    pub fn set_brightness(&mut self, value: f32) {
        self.brightness = clamp_factor(value);
    }

    pub fn set_contrast(&mut self, value: f32) {
        self.contrast = clamp_factor(value);
    }

    /// Exponent applied to normalized intensities. A brightness of zero
    /// falls back to the identity exponent.
    pub fn gamma(&self) -> f32 {
        if self.brightness > 0.0 {
            1.0 / self.brightness
        } else {
            1.0
        }
    }

    pub fn is_identity(&self) -> bool {
        self.brightness == 1.0 && self.contrast == 1.0
    }

    /// Horizontal drag raises brightness, upward drag raises contrast.
    pub fn adjust(&mut self, dx: f32, dy: f32) {
        self.set_brightness(self.brightness + dx);
        self.set_contrast(self.contrast - dy);
    }
}

fn clamp_factor(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, DISPLAY_FACTOR_MAX)
    } else {
        1.0
    }
}

/// What a primary-button drag on a slice view does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Drag moves the crosshair, wheel scrolls slices.
    #[default]
    Pointer,
    /// Drag adjusts brightness/contrast, wheel zooms.
    Pan,
}

impl InteractionMode {
    pub fn toggled(self) -> Self {
        match self {
            InteractionMode::Pointer => InteractionMode::Pan,
            InteractionMode::Pan => InteractionMode::Pointer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InteractionMode::Pointer => "Pointer Mode",
            InteractionMode::Pan => "Hand Mode",
        }
    }
}

/// Pixel size of the surface a plane is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
