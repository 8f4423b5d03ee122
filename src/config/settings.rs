use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::formats::{LoadOptions, SortBy};
use crate::interaction::ControllerSettings;
use crate::render::{Interpolation, Normalization, RenderOptions};
use crate::session::ZoomLimits;

use super::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub cine_interval_ms: u64,
    pub zoom_speed: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub drag_sensitivity: f32,
    pub normalization: Normalization,
    pub interpolation: Interpolation,
    pub dicom_sort: SortBy,
    pub window_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            cine_interval_ms: 100,
            zoom_speed: 0.1,
            zoom_min: 0.1,
            zoom_max: 5.0,
            drag_sensitivity: 1.0,
            normalization: Normalization::Volume,
            interpolation: Interpolation::Bilinear,
            dicom_sort: SortBy::FileName,
            window_size: [1200.0, 800.0],
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cine_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "cine_interval_ms must be positive".to_string(),
            ));
        }
        if !(self.zoom_speed.is_finite() && self.zoom_speed > 0.0 && self.zoom_speed < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "zoom_speed must be in (0, 1), found {}",
                self.zoom_speed
            )));
        }
        if !(self.zoom_min.is_finite() && self.zoom_min > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "zoom_min must be positive, found {}",
                self.zoom_min
            )));
        }
        if !(self.zoom_max.is_finite() && self.zoom_max >= self.zoom_min) {
            return Err(ConfigError::Invalid(format!(
                "zoom_max ({}) must not be below zoom_min ({})",
                self.zoom_max, self.zoom_min
            )));
        }
        if !self.drag_sensitivity.is_finite() {
            return Err(ConfigError::Invalid(
                "drag_sensitivity must be finite".to_string(),
            ));
        }
        if self.window_size.iter().any(|size| !(size.is_finite() && *size > 0.0)) {
            return Err(ConfigError::Invalid(format!(
                "window_size must be positive, found {:?}",
                self.window_size
            )));
        }
        Ok(())
    }

    pub fn cine_interval(&self) -> Duration {
        Duration::from_millis(self.cine_interval_ms)
    }

    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits {
            min: self.zoom_min,
            max: self.zoom_max,
        }
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            zoom_speed: self.zoom_speed,
            drag_sensitivity: self.drag_sensitivity,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            normalization: self.normalization,
            interpolation: self.interpolation,
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            dicom_sort: self.dicom_sort,
        }
    }
}
