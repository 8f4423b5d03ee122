use crate::mapping;
use crate::model::{Plane, PlaneMap};
use crate::render::plane_transform;
use crate::session::{InteractionMode, ViewerSession};

use super::{KeyCommand, Redraw, ScreenPoint, ViewEvent, ViewEventKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    /// Relative zoom change per wheel notch.
    pub zoom_speed: f32,
    /// Brightness/contrast change for a drag across the whole viewport.
    pub drag_sensitivity: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            zoom_speed: 0.1,
            drag_sensitivity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    plane: Plane,
    last: ScreenPoint,
}

/// Turns view events into session updates. Holds only transient gesture
/// state; everything persistent lives in the [`ViewerSession`].
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    settings: ControllerSettings,
    hovered: Option<Plane>,
    last_focused: Plane,
    drag: Option<DragAnchor>,
}

impl InteractionController {
    pub fn new(settings: ControllerSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> ControllerSettings {
        self.settings
    }

    /// Hovered plane, or the last one that was hovered, or axial.
    pub fn focused_plane(&self) -> Plane {
        self.hovered.unwrap_or(self.last_focused)
    }

    pub fn handle(&mut self, session: &mut ViewerSession, event: ViewEvent) -> Redraw {
        let plane = event.source;
        match event.kind {
            ViewEventKind::Resize(size) => {
                if session.viewport(plane) == size {
                    return Redraw::None;
                }
                session.set_viewport(plane, size);
                Redraw::Slices
            }
            ViewEventKind::Move(_) => {
                self.hover(plane);
                Redraw::None
            }
            ViewEventKind::Leave => {
                if self.hovered == Some(plane) {
                    self.hovered = None;
                }
                Redraw::None
            }
            ViewEventKind::Release => {
                self.drag = None;
                Redraw::None
            }
            ViewEventKind::Press(point) => {
                self.hover(plane);
                match session.mode() {
                    InteractionMode::Pointer => self.move_focus(session, plane, point),
                    InteractionMode::Pan => {
                        self.drag = Some(DragAnchor { plane, last: point });
                        Redraw::None
                    }
                }
            }
            ViewEventKind::Drag(point) => match session.mode() {
                InteractionMode::Pointer => self.move_focus(session, plane, point),
                InteractionMode::Pan => self.adjust_display(session, plane, point),
            },
            ViewEventKind::Wheel { steps, point } => {
                self.hover(plane);
                if steps == 0.0 || !session.has_volume() {
                    return Redraw::None;
                }
                match session.mode() {
                    InteractionMode::Pointer => {
                        let delta = if steps > 0.0 { 1 } else { -1 };
                        step_slice(session, plane, delta)
                    }
                    InteractionMode::Pan => self.zoom(session, plane, steps, point),
                }
            }
        }
    }

    pub fn handle_key(&mut self, session: &mut ViewerSession, command: KeyCommand) -> Redraw {
        match command {
            KeyCommand::SliceUp => step_slice(session, self.focused_plane(), 1),
            KeyCommand::SliceDown => step_slice(session, self.focused_plane(), -1),
            KeyCommand::ToggleMode => {
                self.drag = None;
                let mode = session.toggle_mode();
                tracing::debug!("interaction mode is now {mode:?}");
                Redraw::Slices
            }
            KeyCommand::Reset => {
                self.drag = None;
                session.reset();
                Redraw::Slices
            }
            KeyCommand::CenterOnCrosshair => {
                session.center_on_crosshair();
                Redraw::Slices
            }
            KeyCommand::RotateAxial => {
                if !session.has_volume() {
                    return Redraw::None;
                }
                session.rotate_axial();
                Redraw::All
            }
        }
    }

    fn hover(&mut self, plane: Plane) {
        self.hovered = Some(plane);
        self.last_focused = plane;
    }

    fn move_focus(&mut self, session: &mut ViewerSession, plane: Plane, point: ScreenPoint) -> Redraw {
        let Some(transform) = plane_transform(session, plane) else {
            return Redraw::None;
        };
        let Some(focus) = session.focus_mut() else {
            return Redraw::None;
        };
        let position = transform.screen_to_image(point.x, point.y).clamped();
        let voxel = mapping::unproject(plane, position, focus.slice(plane), focus.extents());
        if voxel == focus.focus() {
            return Redraw::None;
        }
        focus.set_focus_voxel(voxel);
        Redraw::Slices
    }

    fn adjust_display(
        &mut self,
        session: &mut ViewerSession,
        plane: Plane,
        point: ScreenPoint,
    ) -> Redraw {
        let Some(anchor) = self.drag.filter(|anchor| anchor.plane == plane) else {
            self.drag = Some(DragAnchor { plane, last: point });
            return Redraw::None;
        };
        self.drag = Some(DragAnchor { plane, last: point });
        let viewport = session.viewport(plane);
        if viewport.is_empty() {
            return Redraw::None;
        }
        let sensitivity = self.settings.drag_sensitivity;
        let dx = (point.x - anchor.last.x) / viewport.width as f32 * sensitivity;
        let dy = (point.y - anchor.last.y) / viewport.height as f32 * sensitivity;
        let before = session.display();
        session.display_mut().adjust(dx, dy);
        if session.display() == before {
            Redraw::None
        } else {
            Redraw::Slices
        }
    }

    fn zoom(
        &mut self,
        session: &mut ViewerSession,
        source: Plane,
        steps: f32,
        point: Option<ScreenPoint>,
    ) -> Redraw {
        let source_size = session.viewport(source);
        let fraction = match point {
            Some(point) if !source_size.is_empty() => (
                point.x / source_size.width as f32,
                point.y / source_size.height as f32,
            ),
            _ => (0.5, 0.5),
        };
        let Some(zoom) = session.zoom() else {
            return Redraw::None;
        };
        // Zoom from the centers actually on screen, not the stored ones.
        let mut centers = PlaneMap::from_fn(|plane| zoom.center(plane));
        let mut anchors = centers;
        for plane in Plane::ALL {
            if let Some(transform) = plane_transform(session, plane) {
                let size = session.viewport(plane);
                centers[plane] = transform.effective_center();
                anchors[plane] = transform.screen_to_image(
                    fraction.0 * size.width as f32,
                    fraction.1 * size.height as f32,
                );
            }
        }
        let speed = self.settings.zoom_speed;
        let Some(zoom) = session.zoom_mut() else {
            return Redraw::None;
        };
        let before = zoom.clone();
        zoom.set_centers(centers);
        if zoom.zoom_toward(steps, speed, &anchors) {
            Redraw::Slices
        } else {
            *zoom = before;
            Redraw::None
        }
    }
}

fn step_slice(session: &mut ViewerSession, plane: Plane, delta: i64) -> Redraw {
    let Some(focus) = session.focus_mut() else {
        return Redraw::None;
    };
    let before = focus.slice(plane);
    focus.step_slice(plane, delta);
    if focus.slice(plane) == before {
        Redraw::None
    } else {
        Redraw::Slices
    }
}

