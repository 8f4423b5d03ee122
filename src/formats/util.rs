use std::path::Path;

use ndarray::ArrayD;

use crate::model::{Spacing, Volume};

use super::{IoError, LoadWarning, Loaded, Result};

pub(crate) fn extension(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(|value| value.to_ascii_lowercase())
        .ok_or_else(|| IoError::UnsupportedFormat(path.to_string_lossy().to_string()))?;
    Ok(ext)
}

pub(crate) fn is_gzipped_nifti(path: &Path) -> bool {
    path.file_name()
        .and_then(|value| value.to_str())
        .is_some_and(|name| name.to_ascii_lowercase().ends_with(".nii.gz"))
}

/// Spacing is only kept when every component is a positive finite size.
pub(crate) fn valid_spacing(x: f32, y: f32, z: f32) -> Option<Spacing> {
    [x, y, z]
        .iter()
        .all(|value| value.is_finite() && *value > 0.0)
        .then_some(Spacing { x, y, z })
}

/// Wraps decoded samples in a [`Volume`], recording any axis padding or
/// reduction as warnings.
pub(crate) fn finish_volume(
    data: ArrayD<f32>,
    path: &Path,
    spacing: Option<Spacing>,
    mut warnings: Vec<LoadWarning>,
) -> Result<Loaded> {
    let original_ndim = data.ndim();
    let (volume, _) = Volume::from_dyn(data)?;
    if original_ndim < 3 {
        warnings.push(LoadWarning::Padded { original_ndim });
    } else if original_ndim > 3 {
        warnings.push(LoadWarning::ExtraAxesDropped { original_ndim });
    }
    for warning in &warnings {
        tracing::warn!("{}: {}", path.display(), warning);
    }
    Ok(Loaded {
        volume: volume.with_spacing(spacing).with_source(path),
        warnings,
    })
}
