//! Conversions between the focus voxel and per-plane (slice, cursor) pairs.
//!
//! Everything here is pure. Every other component that needs to relate one
//! plane to another goes through [`project`] and [`unproject`].

use serde::Serialize;

use crate::model::{Extents, Plane, PlaneMap, Voxel};

#[cfg(test)]
mod tests;

/// Normalized position inside a plane, `(0, 0)` at the top-left of the
/// displayed (already flipped) slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CursorPosition {
    pub x: f32,
    pub y: f32,
}

impl CursorPosition {
    pub const CENTER: CursorPosition = CursorPosition { x: 0.5, y: 0.5 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn clamped(self) -> Self {
        Self {
            x: clamp_unit(self.x),
            y: clamp_unit(self.y),
        }
    }
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

/// What a single plane shows for a given focus voxel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaneProjection {
    pub slice: usize,
    pub cursor: CursorPosition,
}

pub fn project(voxel: Voxel, extents: Extents, plane: Plane) -> PlaneProjection {
    let voxel = extents.clamp(voxel);
    match plane {
        Plane::Axial => PlaneProjection {
            slice: voxel.z,
            cursor: CursorPosition::new(
                normalize(voxel.x, extents.x),
                normalize(voxel.y, extents.y),
            ),
        },
        Plane::Sagittal => PlaneProjection {
            slice: voxel.x,
            cursor: CursorPosition::new(
                normalize(voxel.y, extents.y),
                1.0 - normalize(voxel.z, extents.z),
            ),
        },
        Plane::Coronal => PlaneProjection {
            slice: voxel.y,
            cursor: CursorPosition::new(
                normalize(voxel.x, extents.x),
                1.0 - normalize(voxel.z, extents.z),
            ),
        },
    }
}

pub fn project_all(voxel: Voxel, extents: Extents) -> PlaneMap<PlaneProjection> {
    PlaneMap::from_fn(|plane| project(voxel, extents, plane))
}

/// Recovers the voxel under `cursor` on `plane` while that plane shows `slice`.
pub fn unproject(plane: Plane, cursor: CursorPosition, slice: usize, extents: Extents) -> Voxel {
    let cursor = cursor.clamped();
    let voxel = match plane {
        Plane::Axial => Voxel::new(
            denormalize(cursor.x, extents.x),
            denormalize(cursor.y, extents.y),
            slice,
        ),
        Plane::Sagittal => Voxel::new(
            slice,
            denormalize(cursor.x, extents.y),
            denormalize(1.0 - cursor.y, extents.z),
        ),
        Plane::Coronal => Voxel::new(
            denormalize(cursor.x, extents.x),
            slice,
            denormalize(1.0 - cursor.y, extents.z),
        ),
    };
    extents.clamp(voxel)
}

fn normalize(index: usize, extent: usize) -> f32 {
    if extent <= 1 {
        return 0.0;
    }
    index.min(extent - 1) as f32 / (extent - 1) as f32
}

fn denormalize(value: f32, extent: usize) -> usize {
    if extent <= 1 {
        return 0;
    }
    let last = (extent - 1) as f32;
    (clamp_unit(value) * last).round() as usize
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
