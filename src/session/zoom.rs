use serde::{Deserialize, Serialize};

use crate::mapping::CursorPosition;
use crate::model::{Plane, PlaneMap};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 0.1, max: 5.0 }
    }
}

impl ZoomLimits {
    pub fn clamp(&self, factor: f32) -> f32 {
        if factor.is_finite() {
            factor.clamp(self.min, self.max)
        } else {
            1.0_f32.clamp(self.min, self.max)
        }
    }
}

/// Global zoom factor plus the normalized image point each plane's viewport
/// is centered on.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    factor: f32,
    limits: ZoomLimits,
    centers: PlaneMap<CursorPosition>,
}

impl ZoomState {
    pub fn new(limits: ZoomLimits, centers: PlaneMap<CursorPosition>) -> Self {
        Self {
            factor: limits.clamp(1.0),
            limits,
            centers,
        }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    pub fn center(&self, plane: Plane) -> CursorPosition {
        self.centers[plane]
    }

    pub fn set_center(&mut self, plane: Plane, center: CursorPosition) {
        self.centers[plane] = center.clamped();
    }

    pub fn set_centers(&mut self, centers: PlaneMap<CursorPosition>) {
        for plane in Plane::ALL {
            self.set_center(plane, centers[plane]);
        }
    }

    /// Multiplies the zoom by `1 + speed * steps` and moves every plane's
    /// center toward its anchor so the anchor stays under the same screen
    /// point. Returns whether the factor changed.
    pub fn zoom_toward(
        &mut self,
        steps: f32,
        speed: f32,
        anchors: &PlaneMap<CursorPosition>,
    ) -> bool {
        let old = self.factor;
        let new = self.limits.clamp(old * (1.0 + speed * steps));
        if (new - old).abs() <= f32::EPSILON {
            return false;
        }
        for plane in Plane::ALL {
            let center = self.centers[plane];
            let anchor = anchors[plane];
            self.centers[plane] = CursorPosition::new(
                (center.x * old + anchor.x * (new - old)) / new,
                (center.y * old + anchor.y * (new - old)) / new,
            );
        }
        self.factor = new;
        true
    }
}
