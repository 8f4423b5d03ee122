use serde::Serialize;

use super::Plane;

/// Integer voxel coordinate, `x` along columns, `z` along the axial stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Voxel {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Voxel {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Coordinate along the axis `plane` slices through.
    pub fn depth(&self, plane: Plane) -> usize {
        match plane {
            Plane::Axial => self.z,
            Plane::Sagittal => self.x,
            Plane::Coronal => self.y,
        }
    }

    pub fn with_depth(mut self, plane: Plane, value: usize) -> Self {
        match plane {
            Plane::Axial => self.z = value,
            Plane::Sagittal => self.x = value,
            Plane::Coronal => self.y = value,
        }
        self
    }
}

/// Volume extents in (Z, Y, X) order, matching the array shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Extents {
    pub z: usize,
    pub y: usize,
    pub x: usize,
}

impl Extents {
    pub fn new(z: usize, y: usize, x: usize) -> Self {
        Self { z, y, x }
    }

    pub fn from_shape(shape: (usize, usize, usize)) -> Self {
        Self::new(shape.0, shape.1, shape.2)
    }

    /// Number of slices available for `plane`.
    pub fn depth(&self, plane: Plane) -> usize {
        match plane {
            Plane::Axial => self.z,
            Plane::Sagittal => self.x,
            Plane::Coronal => self.y,
        }
    }

    pub fn max_index(&self, plane: Plane) -> usize {
        self.depth(plane).saturating_sub(1)
    }

    /// In-plane (columns, rows) of the slice shown for `plane`, before any flip.
    pub fn plane_size(&self, plane: Plane) -> (usize, usize) {
        match plane {
            Plane::Axial => (self.x, self.y),
            Plane::Sagittal => (self.y, self.z),
            Plane::Coronal => (self.x, self.z),
        }
    }

    /// The midpoint voxel, `extent / 2` along every axis.
    pub fn center(&self) -> Voxel {
        Voxel::new(self.x / 2, self.y / 2, self.z / 2)
    }

    pub fn clamp(&self, voxel: Voxel) -> Voxel {
        Voxel::new(
            voxel.x.min(self.x.saturating_sub(1)),
            voxel.y.min(self.y.saturating_sub(1)),
            voxel.z.min(self.z.saturating_sub(1)),
        )
    }

    pub fn contains(&self, voxel: Voxel) -> bool {
        voxel.x < self.x && voxel.y < self.y && voxel.z < self.z
    }

    pub fn voxel_count(&self) -> usize {
        self.x * self.y * self.z
    }
}
