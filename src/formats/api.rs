use std::fmt;
use std::path::Path;

use image::{EncodableLayout, ImageBuffer, ImageFormat, PixelWithColorType};
use serde::{Deserialize, Serialize};

use crate::model::Volume;

use super::dicom::read_dicom_series;
use super::nifti::read_nifti;
use super::raster::read_raster_slice;
use super::tiff::read_tiff_stack;
use super::util::{extension, is_gzipped_nifti};
use super::{IoError, Result};

/// Slice order for DICOM series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    FileName,
    InstanceNumber,
    ImagePositionPatient,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub dicom_sort: SortBy,
}

/// Non-fatal problems found while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadWarning {
    /// Fewer than three axes; leading size-1 axes were added.
    Padded { original_ndim: usize },
    /// More than three axes; only the first index of each extra axis is shown.
    ExtraAxesDropped { original_ndim: usize },
    /// Files that could not be decoded were skipped.
    SkippedFiles { count: usize },
    MissingSpacing,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::Padded { original_ndim } => write!(
                f,
                "data has {original_ndim} dimension(s) and appears to be incomplete; \
                 some features may not work as expected"
            ),
            LoadWarning::ExtraAxesDropped { original_ndim } => write!(
                f,
                "data has {original_ndim} dimensions; showing the first volume only"
            ),
            LoadWarning::SkippedFiles { count } => {
                write!(f, "{count} file(s) could not be decoded and were skipped")
            }
            LoadWarning::MissingSpacing => write!(f, "no voxel spacing recorded"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub volume: Volume,
    pub warnings: Vec<LoadWarning>,
}

/// Decodes a volume. Directories are read as DICOM series; files are
/// dispatched on their extension.
pub fn read_volume(path: impl AsRef<Path>, options: LoadOptions) -> Result<Loaded> {
    let path = path.as_ref();
    if path.is_dir() {
        return read_dicom_series(path, options.dicom_sort);
    }
    if is_gzipped_nifti(path) {
        return read_nifti(path);
    }
    let extension = extension(path)?;
    match extension.as_str() {
        "nii" => read_nifti(path),
        "tif" | "tiff" => read_tiff_stack(path),
        "png" | "jpg" | "jpeg" => read_raster_slice(path),
        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

pub fn supported_extensions() -> &'static [&'static str] {
    &["dcm", "nii", "nii.gz", "tif", "tiff", "png", "jpg", "jpeg"]
}

/// Writes a rendered image as PNG regardless of the path's extension.
pub fn save_png<P>(image: &ImageBuffer<P, Vec<P::Subpixel>>, path: impl AsRef<Path>) -> Result<()>
where
    P: PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
{
    image.save_with_format(path.as_ref(), ImageFormat::Png)?;
    Ok(())
}
