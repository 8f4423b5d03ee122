use std::path::PathBuf;

use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IoError>;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("unsupported volume format: {0}")]
    UnsupportedFormat(String),

    #[error("unsupported data layout for this format: {0}")]
    UnsupportedLayout(String),

    #[error("no valid DICOM images found in {}", .0.display())]
    NoValidImages(PathBuf),

    #[error("inconsistent image dimensions: expected {expected:?}, found {found:?}")]
    InconsistentDimensions {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decode/encode failure: {0}")]
    Image(#[from] image::ImageError),

    #[error("TIFF decode failure: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("DICOM read failure: {0}")]
    Dicom(#[from] dicom::object::ReadError),

    #[error("NIfTI read failure: {0}")]
    Nifti(#[from] nifti::NiftiError),

    #[error("volume construction failure: {0}")]
    Core(#[from] CoreError),
}
