use crate::mapping::CursorPosition;
use crate::session::ViewportSize;

/// Placement of a slice image inside a viewport.
///
/// The image is fitted to the viewport keeping its aspect ratio, scaled by
/// the zoom factor, and cropped to a viewport-sized window centered on
/// `center`. The window is clamped to the scaled image; along an axis where
/// the scaled image is smaller than the viewport it is centered instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    viewport: ViewportSize,
    image_width: f32,
    image_height: f32,
    scale: f32,
    origin_x: f32,
    origin_y: f32,
}

impl ViewportTransform {
    pub fn new(
        image_size: (u32, u32),
        viewport: ViewportSize,
        zoom: f32,
        center: CursorPosition,
    ) -> Option<Self> {
        if viewport.is_empty() || image_size.0 == 0 || image_size.1 == 0 || zoom <= 0.0 {
            return None;
        }
        let image_width = image_size.0 as f32;
        let image_height = image_size.1 as f32;
        let view_width = viewport.width as f32;
        let view_height = viewport.height as f32;
        let fit = (view_width / image_width).min(view_height / image_height);
        let scale = fit * zoom;
        Some(Self {
            viewport,
            image_width,
            image_height,
            scale,
            origin_x: window_origin(center.x, image_width * scale, view_width),
            origin_y: window_origin(center.y, image_height * scale, view_height),
        })
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Screen pixels per image pixel.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn scaled_size(&self) -> (f32, f32) {
        (self.image_width * self.scale, self.image_height * self.scale)
    }

    /// Normalized image position under a viewport pixel position. Not
    /// clamped, so points in the border map outside [0, 1].
    pub fn screen_to_image(&self, x: f32, y: f32) -> CursorPosition {
        let (scaled_width, scaled_height) = self.scaled_size();
        CursorPosition::new(
            (x + self.origin_x) / scaled_width,
            (y + self.origin_y) / scaled_height,
        )
    }

    /// Normalized image position shown at the middle of the viewport. Differs
    /// from the requested center when the window was clamped or the image
    /// was centered.
    pub fn effective_center(&self) -> CursorPosition {
        self.screen_to_image(
            self.viewport.width as f32 / 2.0,
            self.viewport.height as f32 / 2.0,
        )
    }

    pub fn image_to_screen(&self, position: CursorPosition) -> (f32, f32) {
        let (scaled_width, scaled_height) = self.scaled_size();
        (
            position.x * scaled_width - self.origin_x,
            position.y * scaled_height - self.origin_y,
        )
    }

    /// Continuous source-pixel coordinate sampled for the viewport pixel at
    /// (`column`, `row`), with pixel centers at integer + 0.5.
    pub fn source_coordinate(&self, column: u32, row: u32) -> (f32, f32) {
        (
            (column as f32 + 0.5 + self.origin_x) / self.scale - 0.5,
            (row as f32 + 0.5 + self.origin_y) / self.scale - 0.5,
        )
    }

    pub fn contains_source(&self, x: f32, y: f32) -> bool {
        x >= -0.5 && y >= -0.5 && x < self.image_width - 0.5 && y < self.image_height - 0.5
    }
}

fn window_origin(center: f32, scaled: f32, view: f32) -> f32 {
    if scaled <= view {
        return -(view - scaled) / 2.0;
    }
    let center = if center.is_finite() { center } else { 0.5 };
    (center * scaled - view / 2.0).clamp(0.0, scaled - view)
}
