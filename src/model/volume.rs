use std::path::{Path, PathBuf};

use ndarray::{Array3, ArrayD, ArrayView2, Axis, Ix3, s};
use serde::Serialize;

use super::{CoreError, Extents, Plane, Result, Voxel};

/// Physical voxel size in millimetres, when the source format records one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spacing {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Scalar intensities laid out as (Z, Y, X).
#[derive(Debug, Clone)]
pub struct Volume {
    data: Array3<f32>,
    min: f32,
    max: f32,
    spacing: Option<Spacing>,
    source: Option<PathBuf>,
}

impl Volume {
    pub fn new(data: Array3<f32>) -> Result<Self> {
        for (axis, size) in data.shape().iter().enumerate() {
            if *size == 0 {
                return Err(CoreError::ZeroSizedDimension { axis });
            }
        }
        let (min, max) = finite_min_max(data.iter().copied());
        Ok(Self {
            data,
            min,
            max,
            spacing: None,
            source: None,
        })
    }

    /// Builds a volume from an array of any rank whose trailing axes are
    /// (.., Y, X). Missing leading axes are added with size 1; extra leading
    /// axes are reduced to their first index. Returns the number of axes
    /// that had to be added or dropped.
    pub fn from_dyn(mut data: ArrayD<f32>) -> Result<(Self, usize)> {
        let mut adjusted = 0;
        while data.ndim() < 3 {
            data = data.insert_axis(Axis(0));
            adjusted += 1;
        }
        while data.ndim() > 3 {
            if data.shape()[0] == 0 {
                return Err(CoreError::ZeroSizedDimension { axis: 0 });
            }
            data = data.index_axis_move(Axis(0), 0);
            adjusted += 1;
        }
        let ndim = data.ndim();
        let data = data
            .into_dimensionality::<Ix3>()
            .map_err(|_| CoreError::Dimensionality { ndim })?;
        Ok((Self::new(data)?, adjusted))
    }

    pub fn with_spacing(mut self, spacing: Option<Spacing>) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_source(mut self, source: impl AsRef<Path>) -> Self {
        self.source = Some(source.as_ref().to_path_buf());
        self
    }

    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }

    /// (depth, height, width)
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    pub fn extents(&self) -> Extents {
        Extents::from_shape(self.data.dim())
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn spacing(&self) -> Option<Spacing> {
        self.spacing
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn value(&self, voxel: Voxel) -> Option<f32> {
        self.data.get((voxel.z, voxel.y, voxel.x)).copied()
    }

    /// The 2D cross-section for `plane` at `index` (clamped), rows first.
    ///
    /// Axial rows are Y and columns X; sagittal rows are Z and columns Y;
    /// coronal rows are Z and columns X. No display flip is applied here.
    pub fn slice(&self, plane: Plane, index: usize) -> ArrayView2<'_, f32> {
        let index = index.min(self.extents().max_index(plane));
        match plane {
            Plane::Axial => self.data.slice(s![index, .., ..]),
            Plane::Sagittal => self.data.slice(s![.., .., index]),
            Plane::Coronal => self.data.slice(s![.., index, ..]),
        }
    }

    /// Rotates every axial slice by 90 degrees counter-clockwise, so the
    /// shape (Z, Y, X) becomes (Z, X, Y).
    pub fn rotated_axial(&self) -> Self {
        let data = self
            .data
            .slice(s![.., .., ..;-1])
            .permuted_axes([0, 2, 1])
            .as_standard_layout()
            .to_owned();
        Self {
            data,
            min: self.min,
            max: self.max,
            spacing: self.spacing.map(|spacing| Spacing {
                x: spacing.y,
                y: spacing.x,
                z: spacing.z,
            }),
            source: self.source.clone(),
        }
    }

    /// Where `voxel` ends up after [`Volume::rotated_axial`].
    pub fn rotate_axial_voxel(&self, voxel: Voxel) -> Voxel {
        let width = self.extents().x;
        Voxel::new(voxel.y, width.saturating_sub(1).saturating_sub(voxel.x), voxel.z)
    }
}

fn finite_min_max(values: impl Iterator<Item = f32>) -> (f32, f32) {
    let mut bounds: Option<(f32, f32)> = None;
    for value in values.filter(|value| value.is_finite()) {
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }
    bounds.unwrap_or((0.0, 0.0))
}
