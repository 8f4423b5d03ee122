use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the three orthogonal cross-sections through a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    #[default]
    Axial,
    Sagittal,
    Coronal,
}

impl Plane {
    pub const ALL: [Plane; 3] = [Plane::Axial, Plane::Sagittal, Plane::Coronal];

    pub fn label(self) -> &'static str {
        match self {
            Plane::Axial => "Axial",
            Plane::Sagittal => "Sagittal",
            Plane::Coronal => "Coronal",
        }
    }

    /// Index into the (Z, Y, X) volume shape of the axis this plane slices through.
    pub fn depth_axis(self) -> usize {
        match self {
            Plane::Axial => 0,
            Plane::Sagittal => 2,
            Plane::Coronal => 1,
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Plane {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "axial" => Ok(Plane::Axial),
            "sagittal" => Ok(Plane::Sagittal),
            "coronal" => Ok(Plane::Coronal),
            other => Err(format!("unknown plane `{other}`")),
        }
    }
}

/// A value stored for each of the three planes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaneMap<T> {
    pub axial: T,
    pub sagittal: T,
    pub coronal: T,
}

impl<T> PlaneMap<T> {
    pub fn from_fn(mut f: impl FnMut(Plane) -> T) -> Self {
        Self {
            axial: f(Plane::Axial),
            sagittal: f(Plane::Sagittal),
            coronal: f(Plane::Coronal),
        }
    }

    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            axial: value.clone(),
            sagittal: value.clone(),
            coronal: value,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Plane, &T) -> U) -> PlaneMap<U> {
        PlaneMap {
            axial: f(Plane::Axial, &self.axial),
            sagittal: f(Plane::Sagittal, &self.sagittal),
            coronal: f(Plane::Coronal, &self.coronal),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Plane, &T)> {
        [
            (Plane::Axial, &self.axial),
            (Plane::Sagittal, &self.sagittal),
            (Plane::Coronal, &self.coronal),
        ]
        .into_iter()
    }
}

impl<T> Index<Plane> for PlaneMap<T> {
    type Output = T;

    fn index(&self, plane: Plane) -> &T {
        match plane {
            Plane::Axial => &self.axial,
            Plane::Sagittal => &self.sagittal,
            Plane::Coronal => &self.coronal,
        }
    }
}

impl<T> IndexMut<Plane> for PlaneMap<T> {
    fn index_mut(&mut self, plane: Plane) -> &mut T {
        match plane {
            Plane::Axial => &mut self.axial,
            Plane::Sagittal => &mut self.sagittal,
            Plane::Coronal => &mut self.coronal,
        }
    }
}
