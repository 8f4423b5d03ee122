use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use dicom::object::{DefaultDicomObject, open_file};
use dicom::pixeldata::{ConvertOptions, PixelDecoder, VoiLutOption};
use dicom_dictionary_std::tags;
use ndarray::{Array2, Array3, s};

use crate::model::Spacing;

use super::util::{finish_volume, valid_spacing};
use super::{IoError, LoadWarning, Loaded, Result, SortBy};

/// Reads every `.dcm` file in `directory` as one slice of a Z stack.
pub(crate) fn read_dicom_series(directory: &Path, sort_by: SortBy) -> Result<Loaded> {
    let mut paths = dicom_paths(directory)?;
    if paths.is_empty() {
        return Err(IoError::NoValidImages(directory.to_path_buf()));
    }
    paths.sort();
    tracing::info!(
        "reading {} DICOM file(s) from {}",
        paths.len(),
        directory.display()
    );

    let objects = paths
        .iter()
        .map(|path| open_file(path))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut skipped = 0;
    let mut slices = Vec::with_capacity(objects.len());
    for (path, object) in paths.iter().zip(&objects) {
        match decode_image(object) {
            Some(image) => slices.push((sort_key(object, sort_by), image)),
            None => {
                tracing::warn!("skipping undecodable DICOM file {}", path.display());
                skipped += 1;
            }
        }
    }
    if slices.is_empty() {
        return Err(IoError::NoValidImages(directory.to_path_buf()));
    }

    sort_slices(&mut slices, sort_by);
    let images = slices.into_iter().map(|(_, image)| image).collect::<Vec<_>>();
    let data = build_volume_array(&images)?;

    let mut warnings = Vec::new();
    if skipped > 0 {
        warnings.push(LoadWarning::SkippedFiles { count: skipped });
    }
    let spacing = spacing(&objects);
    if spacing.is_none() {
        warnings.push(LoadWarning::MissingSpacing);
    }
    finish_volume(data.into_dyn(), directory, spacing, warnings)
}

fn dicom_paths(directory: &Path) -> Result<Vec<PathBuf>> {
    Ok(fs::read_dir(directory)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|value| value.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("dcm"))
        })
        .collect())
}

fn sort_key(object: &DefaultDicomObject, sort_by: SortBy) -> Option<f32> {
    match sort_by {
        SortBy::FileName => None,
        SortBy::InstanceNumber => object
            .element(tags::INSTANCE_NUMBER)
            .ok()?
            .to_int::<i32>()
            .ok()
            .map(|number| number as f32),
        SortBy::ImagePositionPatient => object
            .element(tags::IMAGE_POSITION_PATIENT)
            .ok()?
            .to_multi_float32()
            .ok()?
            .get(2)
            .copied(),
    }
}

/// Paths are already in file-name order; the sort is stable so slices
/// without a key keep that order.
fn sort_slices(slices: &mut [(Option<f32>, Array2<f32>)], sort_by: SortBy) {
    if sort_by == SortBy::FileName {
        return;
    }
    slices.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    if sort_by == SortBy::ImagePositionPatient {
        slices.reverse();
    }
}

fn decode_image(object: &DefaultDicomObject) -> Option<Array2<f32>> {
    let pixel_data = object.decode_pixel_data().ok()?;
    let options = ConvertOptions::new().with_voi_lut(VoiLutOption::First);
    pixel_data
        .to_ndarray_with_options::<u16>(&options)
        .ok()
        .map(|array| array.slice_move(s![0, .., .., 0]).mapv(f32::from))
}

fn build_volume_array(images: &[Array2<f32>]) -> Result<Array3<f32>> {
    let expected = images[0].dim();
    if let Some(image) = images.iter().find(|image| image.dim() != expected) {
        return Err(IoError::InconsistentDimensions {
            expected,
            found: image.dim(),
        });
    }
    let (height, width) = expected;
    let mut volume = Array3::<f32>::zeros((images.len(), height, width));
    for (index, image) in images.iter().enumerate() {
        volume.slice_mut(s![index, .., ..]).assign(image);
    }
    Ok(volume)
}

/// Pixel spacing is (row, column), i.e. (y, x).
fn spacing(objects: &[DefaultDicomObject]) -> Option<Spacing> {
    objects.iter().find_map(|object| {
        let pixel_spacing = object
            .element(tags::PIXEL_SPACING)
            .ok()?
            .to_multi_float32()
            .ok()?;
        let thickness = object.element(tags::SLICE_THICKNESS).ok()?.to_float32().ok()?;
        valid_spacing(*pixel_spacing.get(1)?, *pixel_spacing.first()?, thickness)
    })
}
