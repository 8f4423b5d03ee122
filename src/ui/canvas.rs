use eframe::egui;

use crate::interaction::{ScreenPoint, ViewEvent, ViewEventKind};
use crate::mapping::CursorPosition;
use crate::model::Plane;
use crate::render::{Crosshair, RenderOptions, render_session_plane};
use crate::session::{DisplayParameters, ViewerSession, ViewportSize};

/// Everything a slice image depends on; the texture is re-rendered when any
/// of it changes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FrameKey {
    generation: u64,
    slice: usize,
    cursor: CursorPosition,
    center: CursorPosition,
    zoom: f32,
    display: DisplayParameters,
    viewport: ViewportSize,
    options: RenderOptions,
}

impl FrameKey {
    fn of(session: &ViewerSession, plane: Plane, options: RenderOptions) -> Option<Self> {
        let loaded = session.loaded()?;
        Some(Self {
            generation: session.generation(),
            slice: loaded.focus.slice(plane),
            cursor: loaded.focus.cursor(plane),
            center: loaded.zoom.center(plane),
            zoom: loaded.zoom.factor(),
            display: session.display(),
            viewport: session.viewport(plane),
            options,
        })
    }
}

/// One slice view: its texture, crosshair and pointer bookkeeping.
pub(super) struct SliceCanvas {
    plane: Plane,
    texture: Option<egui::TextureHandle>,
    key: Option<FrameKey>,
    crosshair: Option<Crosshair>,
    hovered: bool,
}

impl SliceCanvas {
    pub(super) fn new(plane: Plane) -> Self {
        Self {
            plane,
            texture: None,
            key: None,
            crosshair: None,
            hovered: false,
        }
    }

    /// Paints the view into `rect` and returns the input it received.
    pub(super) fn show(
        &mut self,
        ui: &mut egui::Ui,
        rect: egui::Rect,
        session: &ViewerSession,
        options: RenderOptions,
    ) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        let size = ViewportSize::new(rect.width().max(0.0) as u32, rect.height().max(0.0) as u32);
        if session.viewport(self.plane) != size {
            events.push(self.event(ViewEventKind::Resize(size)));
        }

        self.refresh(ui.ctx(), session, options);
        self.paint(ui, rect, session);

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        self.collect_pointer(ui, rect, &response, &mut events);
        events
    }

    fn refresh(&mut self, ctx: &egui::Context, session: &ViewerSession, options: RenderOptions) {
        let key = FrameKey::of(session, self.plane, options);
        if key.is_none() {
            self.texture = None;
            self.crosshair = None;
            self.key = None;
            return;
        }
        if key == self.key {
            return;
        }
        let Some(rendered) = render_session_plane(session, self.plane, options) else {
            return;
        };
        let (width, height) = rendered.image.dimensions();
        let color = egui::ColorImage::from_gray(
            [width as usize, height as usize],
            rendered.image.as_raw(),
        );
        if let Some(texture) = &mut self.texture {
            texture.set(color, egui::TextureOptions::NEAREST);
        } else {
            self.texture = Some(ctx.load_texture(
                format!("slice-{}", self.plane),
                color,
                egui::TextureOptions::NEAREST,
            ));
        }
        self.crosshair = Some(rendered.crosshair);
        self.key = key;
    }

    fn paint(&self, ui: &egui::Ui, rect: egui::Rect, session: &ViewerSession) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, egui::Color32::BLACK);

        if let (Some(texture), Some(key)) = (&self.texture, &self.key) {
            let image_rect = egui::Rect::from_min_size(
                rect.min,
                egui::vec2(key.viewport.width as f32, key.viewport.height as f32),
            );
            painter.image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        if let Some(crosshair) = self.crosshair {
            let stroke = egui::Stroke::new(1.0, egui::Color32::RED);
            let x = rect.min.x + crosshair.x;
            let y = rect.min.y + crosshair.y;
            painter.line_segment([egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)], stroke);
            painter.line_segment([egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)], stroke);
        }

        let mut title = self.plane.label().to_string();
        if let Some(focus) = session.focus() {
            title.push_str(&format!(
                "  {}/{}",
                focus.slice(self.plane),
                focus.extents().max_index(self.plane)
            ));
        }
        painter.text(
            rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            title,
            egui::FontId::proportional(13.0),
            egui::Color32::from_gray(220),
        );
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(60)),
            egui::StrokeKind::Inside,
        );
    }

    fn collect_pointer(
        &mut self,
        ui: &egui::Ui,
        rect: egui::Rect,
        response: &egui::Response,
        events: &mut Vec<ViewEvent>,
    ) {
        let local = |pos: egui::Pos2| ScreenPoint::new(pos.x - rect.min.x, pos.y - rect.min.y);
        let primary = egui::PointerButton::Primary;

        if response.clicked_by(primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(self.event(ViewEventKind::Press(local(pos))));
                events.push(self.event(ViewEventKind::Release));
            }
        }
        if response.drag_started_by(primary) {
            if let Some(origin) = ui.input(|input| input.pointer.press_origin()) {
                events.push(self.event(ViewEventKind::Press(local(origin))));
            }
        }
        if response.dragged_by(primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(self.event(ViewEventKind::Drag(local(pos))));
            }
        }
        if response.drag_stopped_by(primary) {
            events.push(self.event(ViewEventKind::Release));
        }

        match response.hover_pos() {
            Some(pos) => {
                self.hovered = true;
                events.push(self.event(ViewEventKind::Move(local(pos))));
                let scroll = ui.input(|input| input.raw_scroll_delta.y);
                if scroll.abs() > f32::EPSILON {
                    events.push(self.event(ViewEventKind::Wheel {
                        steps: scroll.signum(),
                        point: Some(local(pos)),
                    }));
                }
            }
            None if self.hovered => {
                self.hovered = false;
                events.push(self.event(ViewEventKind::Leave));
            }
            None => {}
        }
    }

    fn event(&self, kind: ViewEventKind) -> ViewEvent {
        ViewEvent::new(self.plane, kind)
    }
}
