use eframe::egui;

use crate::render::{CompositeRenderer, ViewAxis, VolumeRenderInput, VolumeRenderer};
use crate::session::ViewerSession;

/// The 3D quadrant. Re-renders only when the volume or camera axis changes.
pub(super) struct VolumeView {
    renderer: CompositeRenderer,
    texture: Option<egui::TextureHandle>,
    rendered: Option<(u64, ViewAxis)>,
}

impl VolumeView {
    pub(super) fn new() -> Self {
        Self {
            renderer: CompositeRenderer::new(),
            texture: None,
            rendered: None,
        }
    }

    pub(super) fn axis(&self) -> ViewAxis {
        self.renderer.axis()
    }

    pub(super) fn set_axis(&mut self, axis: ViewAxis) {
        self.renderer.set_axis(axis);
    }

    pub(super) fn reset_camera(&mut self) {
        self.renderer.reset_camera();
    }

    pub(super) fn show(&mut self, ui: &mut egui::Ui, rect: egui::Rect, session: &ViewerSession) {
        self.refresh(ui.ctx(), session);

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, egui::Color32::BLACK);
        if let (Some(texture), Some(image)) = (&self.texture, self.renderer.output()) {
            let (width, height) = image.dimensions();
            let scale = (rect.width() / width as f32).min(rect.height() / height as f32);
            let size = egui::vec2(width as f32 * scale, height as f32 * scale);
            painter.image(
                texture.id(),
                egui::Rect::from_center_size(rect.center(), size),
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        painter.text(
            rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!("3D  {}", self.axis().label()),
            egui::FontId::proportional(13.0),
            egui::Color32::from_gray(220),
        );
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(60)),
            egui::StrokeKind::Inside,
        );
        ui.allocate_rect(rect, egui::Sense::hover());
    }

    fn refresh(&mut self, ctx: &egui::Context, session: &ViewerSession) {
        let Some(volume) = session.volume() else {
            self.renderer.clear();
            self.texture = None;
            self.rendered = None;
            return;
        };
        let key = (session.generation(), self.renderer.axis());
        if self.rendered == Some(key) {
            return;
        }
        self.renderer.render(&VolumeRenderInput::from_volume(volume));
        let Some(image) = self.renderer.output() else {
            return;
        };
        let (width, height) = image.dimensions();
        let color = egui::ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            image.as_raw(),
        );
        if let Some(texture) = &mut self.texture {
            texture.set(color, egui::TextureOptions::LINEAR);
        } else {
            self.texture = Some(ctx.load_texture("volume-3d", color, egui::TextureOptions::LINEAR));
        }
        self.rendered = Some(key);
    }
}
