mod api;
mod dicom;
mod error;
mod nifti;
mod raster;
mod tiff;
mod util;


pub use api::{
    LoadOptions, LoadWarning, Loaded, SortBy, read_volume, save_png, supported_extensions,
};
pub use error::{IoError, Result};
