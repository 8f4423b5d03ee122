use std::path::Path;

use image::{EncodableLayout, ImageBuffer, PixelWithColorType};

use crate::formats::{LoadOptions, LoadWarning, Loaded, read_volume, save_png};
use crate::session::ViewerSession;

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct IoService {
    options: LoadOptions,
}

impl IoService {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> LoadOptions {
        self.options
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Result<Loaded> {
        Ok(read_volume(path, self.options)?)
    }

    /// Loads `path` and installs it in `session`. On failure the session
    /// keeps its previous volume and state.
    pub fn load_into(
        &self,
        session: &mut ViewerSession,
        path: impl AsRef<Path>,
    ) -> Result<Vec<LoadWarning>> {
        let path = path.as_ref();
        tracing::info!("loading {}", path.display());
        match read_volume(path, self.options) {
            Ok(Loaded { volume, warnings }) => {
                session.replace_volume(volume);
                Ok(warnings)
            }
            Err(error) => {
                tracing::error!("failed to load {}: {}", path.display(), error);
                Err(error.into())
            }
        }
    }

    pub fn write_png<P>(
        &self,
        path: impl AsRef<Path>,
        image: &ImageBuffer<P, Vec<P::Subpixel>>,
    ) -> Result<()>
    where
        P: PixelWithColorType,
        [P::Subpixel]: EncodableLayout,
    {
        save_png(image, path)?;
        Ok(())
    }
}
