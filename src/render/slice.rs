use image::{GrayImage, ImageBuffer, Luma};
use ndarray::ArrayView2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::mapping::CursorPosition;
use crate::model::{Plane, Volume};
use crate::session::{DisplayParameters, ViewerSession};

use super::{IntensityTransform, Normalization, ViewportTransform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    Nearest,
    #[default]
    Bilinear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub normalization: Normalization,
    pub interpolation: Interpolation,
}

/// Crosshair position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crosshair {
    pub x: f32,
    pub y: f32,
}

/// A slice ready for display, tagged with the session generation it was
/// produced from.
#[derive(Debug, Clone)]
pub struct RenderedSlice {
    pub plane: Plane,
    pub slice: usize,
    pub generation: u64,
    pub image: GrayImage,
    pub crosshair: Crosshair,
}

/// Extracts the slice, applies normalization, brightness and contrast, and
/// flips it into display orientation.
///
/// Sagittal and coronal slices are flipped vertically so the superior end of
/// the volume is at the top; no horizontal flip is applied to either.
pub fn render_plane(
    volume: &Volume,
    plane: Plane,
    slice: usize,
    display: DisplayParameters,
    normalization: Normalization,
) -> GrayImage {
    let view = volume.slice(plane, slice);
    let reference = match normalization {
        Normalization::Volume => volume.max(),
        Normalization::Slice => slice_max(&view),
    };
    let transform = IntensityTransform::new(reference, display);
    let (rows, columns) = view.dim();
    let flip = matches!(plane, Plane::Sagittal | Plane::Coronal);

    let mut pixels = vec![0_u8; rows * columns];
    pixels
        .par_chunks_mut(columns.max(1))
        .enumerate()
        .for_each(|(row, line)| {
            let source_row = if flip { rows - 1 - row } else { row };
            for (column, pixel) in line.iter_mut().enumerate() {
                *pixel = transform.to_u8(view[[source_row, column]]);
            }
        });

    ImageBuffer::from_raw(columns as u32, rows as u32, pixels).expect("buffer sized to slice")
}

/// Crops and resamples a display-oriented slice into a viewport and places
/// the crosshair.
pub fn render_viewport(
    plane_image: &GrayImage,
    transform: &ViewportTransform,
    cursor: CursorPosition,
    interpolation: Interpolation,
) -> (GrayImage, Crosshair) {
    let viewport = transform.viewport();
    let width = viewport.width;
    let mut pixels = vec![0_u8; width as usize * viewport.height as usize];
    pixels
        .par_chunks_mut(width.max(1) as usize)
        .enumerate()
        .for_each(|(row, line)| {
            for (column, pixel) in line.iter_mut().enumerate() {
                let (x, y) = transform.source_coordinate(column as u32, row as u32);
                if !transform.contains_source(x, y) {
                    continue;
                }
                *pixel = match interpolation {
                    Interpolation::Nearest => nearest_sample(plane_image, x, y),
                    Interpolation::Bilinear => bilinear_sample(plane_image, x, y),
                };
            }
        });
    let image = ImageBuffer::from_raw(width, viewport.height, pixels)
        .expect("buffer sized to viewport");
    let (x, y) = transform.image_to_screen(cursor);
    (image, Crosshair { x, y })
}

/// Renders `plane` of the session's volume into that plane's viewport.
/// Returns `None` without a volume or when the viewport has no area.
pub fn render_session_plane(
    session: &ViewerSession,
    plane: Plane,
    options: RenderOptions,
) -> Option<RenderedSlice> {
    let loaded = session.loaded()?;
    let transform = plane_transform(session, plane)?;
    let slice = loaded.focus.slice(plane);
    let plane_image = render_plane(
        &loaded.volume,
        plane,
        slice,
        session.display(),
        options.normalization,
    );
    let (image, crosshair) = render_viewport(
        &plane_image,
        &transform,
        loaded.focus.cursor(plane),
        options.interpolation,
    );
    Some(RenderedSlice {
        plane,
        slice,
        generation: session.generation(),
        image,
        crosshair,
    })
}

/// Placement of `plane`'s slice in its viewport under the current zoom.
pub fn plane_transform(session: &ViewerSession, plane: Plane) -> Option<ViewportTransform> {
    let loaded = session.loaded()?;
    let (columns, rows) = loaded.volume.extents().plane_size(plane);
    ViewportTransform::new(
        (columns as u32, rows as u32),
        session.viewport(plane),
        loaded.zoom.factor(),
        loaded.zoom.center(plane),
    )
}

fn slice_max(view: &ArrayView2<'_, f32>) -> f32 {
    view.iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(0.0, f32::max)
}

fn pixel(image: &GrayImage, x: u32, y: u32) -> f32 {
    let Luma([value]) = *image.get_pixel(x, y);
    f32::from(value)
}

fn nearest_sample(image: &GrayImage, x: f32, y: f32) -> u8 {
    let (width, height) = image.dimensions();
    let column = (x.round().max(0.0) as u32).min(width - 1);
    let row = (y.round().max(0.0) as u32).min(height - 1);
    image.get_pixel(column, row).0[0]
}

#[inline]
fn bilinear_sample(image: &GrayImage, x: f32, y: f32) -> u8 {
    let (width, height) = image.dimensions();
    let x = x.clamp(0.0, (width - 1) as f32);
    let y = y.clamp(0.0, (height - 1) as f32);

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);

    let dx = x - x0 as f32;
    let dy = y - y0 as f32;

    let v0 = pixel(image, x0, y0).mul_add(1.0 - dx, pixel(image, x1, y0) * dx);
    let v1 = pixel(image, x0, y1).mul_add(1.0 - dx, pixel(image, x1, y1) * dx);

    v0.mul_add(1.0 - dy, v1 * dy).round().clamp(0.0, 255.0) as u8
}
