//! Configuration handed to the 3D renderer, plus a CPU compositing renderer.

use image::{ImageBuffer, RgbaImage};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::model::Volume;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpacityPoint {
    pub value: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorPoint {
    pub value: f32,
    pub rgb: [f32; 3],
}

/// Piecewise-linear scalar → opacity and scalar → color maps over 8-bit input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferFunctions {
    pub opacity: Vec<OpacityPoint>,
    pub color: Vec<ColorPoint>,
}

impl Default for TransferFunctions {
    fn default() -> Self {
        Self {
            opacity: vec![
                OpacityPoint { value: 0.0, opacity: 0.0 },
                OpacityPoint { value: 80.0, opacity: 0.1 },
                OpacityPoint { value: 255.0, opacity: 0.2 },
            ],
            color: vec![
                ColorPoint { value: 0.0, rgb: [0.0, 0.0, 0.0] },
                ColorPoint { value: 64.0, rgb: [1.0, 0.0, 0.0] },
                ColorPoint { value: 128.0, rgb: [0.0, 0.0, 1.0] },
                ColorPoint { value: 192.0, rgb: [0.0, 1.0, 0.0] },
                ColorPoint { value: 255.0, rgb: [1.0, 1.0, 1.0] },
            ],
        }
    }
}

impl TransferFunctions {
    pub fn opacity_at(&self, value: f32) -> f32 {
        let points = self
            .opacity
            .iter()
            .map(|point| (point.value, [point.opacity, 0.0, 0.0]))
            .collect::<Vec<_>>();
        piecewise(&points, value)[0]
    }

    pub fn color_at(&self, value: f32) -> [f32; 3] {
        let points = self
            .color
            .iter()
            .map(|point| (point.value, point.rgb))
            .collect::<Vec<_>>();
        piecewise(&points, value)
    }

    /// RGBA for every byte value, alpha being the opacity.
    pub fn lookup_table(&self) -> Vec<[f32; 4]> {
        (0..=255_u16)
            .map(|value| {
                let value = f32::from(value);
                let [r, g, b] = self.color_at(value);
                [r, g, b, self.opacity_at(value)]
            })
            .collect()
    }
}

fn piecewise(points: &[(f32, [f32; 3])], value: f32) -> [f32; 3] {
    let Some(first) = points.first() else {
        return [0.0; 3];
    };
    if value <= first.0 {
        return first.1;
    }
    for pair in points.windows(2) {
        let (low, high) = (pair[0], pair[1]);
        if value <= high.0 {
            let span = high.0 - low.0;
            let t = if span > 0.0 { (value - low.0) / span } else { 1.0 };
            return [
                low.1[0] + (high.1[0] - low.1[0]) * t,
                low.1[1] + (high.1[1] - low.1[1]) * t,
                low.1[2] + (high.1[2] - low.1[2]) * t,
            ];
        }
    }
    points[points.len() - 1].1
}

/// Everything a 3D backend needs: 8-bit samples with X varying fastest,
/// extents in (X, Y, Z) order, and the transfer functions.
#[derive(Debug, Clone)]
pub struct VolumeRenderInput {
    pub bytes: Vec<u8>,
    pub extents: [usize; 3],
    pub transfer: TransferFunctions,
}

impl VolumeRenderInput {
    /// Scales intensities by the volume maximum into 0..=255.
    pub fn from_volume(volume: &Volume) -> Self {
        let max = volume.max();
        let scale = if max > 0.0 { 255.0 / max } else { 1.0 };
        let bytes = volume
            .data()
            .as_standard_layout()
            .iter()
            .map(|value| {
                if value.is_nan() {
                    0
                } else {
                    (value * scale).round().clamp(0.0, 255.0) as u8
                }
            })
            .collect();
        let extents = volume.extents();
        Self {
            bytes,
            extents: [extents.x, extents.y, extents.z],
            transfer: TransferFunctions::default(),
        }
    }
}

pub trait VolumeRenderer {
    /// Renders `input`, replacing whatever was rendered before.
    fn render(&mut self, input: &VolumeRenderInput);
    fn reset_camera(&mut self);
}

/// Direction the orthographic camera looks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewAxis {
    /// Looking along +Y, superior at the top.
    #[default]
    Anterior,
    /// Looking down the axial stack from the last slice.
    Superior,
    /// Looking along +X, superior at the top.
    Lateral,
}

impl ViewAxis {
    pub const ALL: [ViewAxis; 3] = [ViewAxis::Anterior, ViewAxis::Superior, ViewAxis::Lateral];

    pub fn label(self) -> &'static str {
        match self {
            ViewAxis::Anterior => "Anterior",
            ViewAxis::Superior => "Superior",
            ViewAxis::Lateral => "Lateral",
        }
    }
}

impl std::str::FromStr for ViewAxis {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "anterior" => Ok(ViewAxis::Anterior),
            "superior" => Ok(ViewAxis::Superior),
            "lateral" => Ok(ViewAxis::Lateral),
            other => Err(format!("unknown view axis `{other}`")),
        }
    }
}

/// Front-to-back alpha compositing along one volume axis.
#[derive(Debug, Clone, Default)]
pub struct CompositeRenderer {
    axis: ViewAxis,
    output: Option<RgbaImage>,
}

const OPAQUE_ENOUGH: f32 = 0.99;

impl CompositeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(&self) -> ViewAxis {
        self.axis
    }

    pub fn set_axis(&mut self, axis: ViewAxis) {
        self.axis = axis;
    }

    pub fn output(&self) -> Option<&RgbaImage> {
        self.output.as_ref()
    }

    pub fn clear(&mut self) {
        self.output = None;
    }
}

impl VolumeRenderer for CompositeRenderer {
    fn render(&mut self, input: &VolumeRenderInput) {
        self.output = Some(composite(input, self.axis));
    }

    fn reset_camera(&mut self) {
        self.axis = ViewAxis::default();
    }
}

fn composite(input: &VolumeRenderInput, axis: ViewAxis) -> RgbaImage {
    let [nx, ny, nz] = input.extents;
    let (width, height, depth) = match axis {
        ViewAxis::Anterior => (nx, nz, ny),
        ViewAxis::Superior => (nx, ny, nz),
        ViewAxis::Lateral => (ny, nz, nx),
    };
    if width == 0 || height == 0 || input.bytes.len() < nx * ny * nz {
        return RgbaImage::new(width as u32, height as u32);
    }
    let offset = |x: usize, y: usize, z: usize| (z * ny + y) * nx + x;
    let sample_index = |column: usize, row: usize, step: usize| match axis {
        ViewAxis::Anterior => offset(column, step, nz - 1 - row),
        ViewAxis::Superior => offset(column, row, nz - 1 - step),
        ViewAxis::Lateral => offset(step, column, nz - 1 - row),
    };
    let lut = input.transfer.lookup_table();

    let mut pixels = vec![0_u8; width * height * 4];
    pixels
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(row, line)| {
            for (column, rgba) in line.chunks_mut(4).enumerate() {
                let mut color = [0.0_f32; 3];
                let mut alpha = 0.0_f32;
                for step in 0..depth {
                    let [r, g, b, a] = lut[usize::from(input.bytes[sample_index(column, row, step)])];
                    let weight = (1.0 - alpha) * a;
                    color[0] += weight * r;
                    color[1] += weight * g;
                    color[2] += weight * b;
                    alpha += weight;
                    if alpha >= OPAQUE_ENOUGH {
                        break;
                    }
                }
                rgba[0] = (color[0].clamp(0.0, 1.0) * 255.0).round() as u8;
                rgba[1] = (color[1].clamp(0.0, 1.0) * 255.0).round() as u8;
                rgba[2] = (color[2].clamp(0.0, 1.0) * 255.0).round() as u8;
                rgba[3] = 255;
            }
        });
    ImageBuffer::from_raw(width as u32, height as u32, pixels).expect("buffer sized to projection")
}
