use std::path::Path;

use nifti::volume::ndarray::IntoNdArray;
use nifti::{NiftiObject, ReaderOptions};

use super::util::{finish_volume, valid_spacing};
use super::{LoadWarning, Loaded, Result};

/// Reads `.nii` and `.nii.gz` files. NIfTI stores x fastest, so the axes are
/// reversed into (.., Z, Y, X).
pub(crate) fn read_nifti(path: &Path) -> Result<Loaded> {
    tracing::info!("reading NIfTI file {}", path.display());
    let object = ReaderOptions::new().read_file(path)?;
    let pixdim = object.header().pixdim;
    let data = object
        .into_volume()
        .into_ndarray::<f32>()?
        .reversed_axes()
        .as_standard_layout()
        .into_owned();

    let spacing = valid_spacing(pixdim[1], pixdim[2], pixdim[3]);
    let mut warnings = Vec::new();
    if spacing.is_none() && data.ndim() >= 3 {
        warnings.push(LoadWarning::MissingSpacing);
    }
    finish_volume(data, path, spacing, warnings)
}
