use crate::mapping::{self, CursorPosition, PlaneProjection};
use crate::model::{Extents, Plane, PlaneMap, Voxel};

/// Slice indices and crosshair positions of the three planes, all derived
/// from a single focus voxel.
///
/// The fields are private on purpose: the only way to move the crosshair is
/// [`FocusState::set_focus_voxel`] or [`FocusState::set_slice_index`], both of
/// which recompute every plane.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusState {
    extents: Extents,
    focus: Voxel,
    projections: PlaneMap<PlaneProjection>,
}

impl FocusState {
    pub fn new(extents: Extents) -> Self {
        let focus = extents.center();
        Self {
            extents,
            focus,
            projections: mapping::project_all(focus, extents),
        }
    }

    pub fn extents(&self) -> Extents {
        self.extents
    }

    pub fn focus(&self) -> Voxel {
        self.focus
    }

    pub fn slice(&self, plane: Plane) -> usize {
        self.projections[plane].slice
    }

    pub fn slices(&self) -> PlaneMap<usize> {
        self.projections.map(|_, projection| projection.slice)
    }

    pub fn cursor(&self, plane: Plane) -> CursorPosition {
        self.projections[plane].cursor
    }

    pub fn cursors(&self) -> PlaneMap<CursorPosition> {
        self.projections.map(|_, projection| projection.cursor)
    }

    /// Voxel obtained by decoding the stored slice and cursor of `plane`.
    pub fn decode(&self, plane: Plane) -> Voxel {
        let projection = self.projections[plane];
        mapping::unproject(plane, projection.cursor, projection.slice, self.extents)
    }

    pub fn set_focus_voxel(&mut self, voxel: Voxel) {
        self.focus = self.extents.clamp(voxel);
        self.projections = mapping::project_all(self.focus, self.extents);
    }

    /// Moves `plane` to slice `index` (clamped). The in-plane coordinates of
    /// that plane stay where they were; only the depth of the focus changes.
    pub fn set_slice_index(&mut self, plane: Plane, index: i64) {
        let max = self.extents.max_index(plane) as i64;
        let index = index.clamp(0, max) as usize;
        self.set_focus_voxel(self.focus.with_depth(plane, index));
    }

    pub fn step_slice(&mut self, plane: Plane, delta: i64) {
        let current = self.slice(plane) as i64;
        self.set_slice_index(plane, current.saturating_add(delta));
    }

    /// Moves the focus back to the midpoint of the volume.
    pub fn recenter(&mut self) {
        self.set_focus_voxel(self.extents.center());
    }
}
