use std::path::Path;

use image::DynamicImage;
use ndarray::Array2;

use super::util::finish_volume;
use super::{Loaded, Result};

/// Reads a PNG/JPEG as a single-slice volume. Color images are reduced to
/// luma; 8- and 16-bit gray values are kept as stored.
pub(crate) fn read_raster_slice(path: &Path) -> Result<Loaded> {
    let image = image::open(path)?;
    let (width, height) = (image.width() as usize, image.height() as usize);
    let values: Vec<f32> = match image {
        DynamicImage::ImageLuma8(buffer) => buffer.into_raw().into_iter().map(f32::from).collect(),
        DynamicImage::ImageLuma16(buffer) => {
            buffer.into_raw().into_iter().map(f32::from).collect()
        }
        other => other.to_luma8().into_raw().into_iter().map(f32::from).collect(),
    };
    let data = Array2::from_shape_vec((height, width), values)
        .expect("shape checked")
        .into_dyn();
    finish_volume(data, path, None, Vec::new())
}
