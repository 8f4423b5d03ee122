use image::{RgbImage, RgbaImage};

use crate::model::{Plane, Volume};
use crate::render::{
    CompositeRenderer, RenderOptions, RenderedSlice, ViewAxis, VolumeRenderInput,
    VolumeRenderer, burn_crosshair, render_session_plane,
};
use crate::session::ViewerSession;

use super::{AppError, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderService {
    options: RenderOptions,
}

impl RenderService {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn render_slice(&self, session: &ViewerSession, plane: Plane) -> Result<RenderedSlice> {
        render_session_plane(session, plane, self.options).ok_or_else(|| {
            AppError::Render(format!(
                "{plane} view has no volume or an empty viewport"
            ))
        })
    }

    /// The slice as RGB, with the crosshair burned in when asked for.
    pub fn render_slice_rgb(
        &self,
        session: &ViewerSession,
        plane: Plane,
        crosshair: bool,
    ) -> Result<RgbImage> {
        let rendered = self.render_slice(session, plane)?;
        if crosshair {
            Ok(burn_crosshair(&rendered.image, rendered.crosshair))
        } else {
            Ok(image::DynamicImage::ImageLuma8(rendered.image).to_rgb8())
        }
    }

    pub fn render_volume(&self, volume: &Volume, axis: ViewAxis) -> Result<RgbaImage> {
        let mut renderer = CompositeRenderer::new();
        renderer.set_axis(axis);
        renderer.render(&VolumeRenderInput::from_volume(volume));
        renderer
            .output()
            .cloned()
            .ok_or_else(|| AppError::Render("volume renderer produced no image".to_string()))
    }
}
