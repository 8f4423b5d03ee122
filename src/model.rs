mod error;
mod plane;
mod volume;
mod voxel;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use plane::{Plane, PlaneMap};
pub use volume::{Spacing, Volume};
pub use voxel::{Extents, Voxel};
