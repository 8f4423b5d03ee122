use std::path::{Path, PathBuf};
use std::time::Instant;

use eframe::egui;
use rfd::FileDialog;

use crate::cine::CinePlayer;
use crate::interaction::{InteractionController, KeyCommand, Redraw};
use crate::model::{Plane, PlaneMap};
use crate::runtime::AppContext;
use crate::session::ViewerSession;

use super::canvas::SliceCanvas;
use super::panel::{PanelAction, draw_controls};
use super::volume_view::VolumeView;

const VOLUME_EXTENSIONS: &[&str] = &["nii", "gz", "tif", "tiff", "png", "jpg", "jpeg"];

pub(super) struct MprApp {
    context: AppContext,
    session: ViewerSession,
    controller: InteractionController,
    cine: CinePlayer,
    canvases: PlaneMap<SliceCanvas>,
    volume_view: VolumeView,
    status: String,
    last_update: Option<Instant>,
}

impl MprApp {
    pub(super) fn new(
        _cc: &eframe::CreationContext<'_>,
        context: AppContext,
        startup_input: Option<PathBuf>,
    ) -> Self {
        let mut app = Self {
            session: context.new_session(),
            controller: context.new_controller(),
            cine: context.new_cine_player(),
            canvases: PlaneMap::from_fn(SliceCanvas::new),
            volume_view: VolumeView::new(),
            status: "Ready. Load a DICOM folder or a volume file, or drop one here.".to_string(),
            last_update: None,
            context,
        };
        if let Some(path) = startup_input {
            app.load(&path);
        }
        app
    }

    fn load(&mut self, path: &Path) {
        self.cine.pause();
        match self.context.io_service().load_into(&mut self.session, path) {
            Ok(warnings) if warnings.is_empty() => {
                self.status = format!("Loaded {}", path.display());
            }
            Ok(warnings) => {
                let messages = warnings
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                self.status = format!("Loaded {} with warnings: {messages}", path.display());
            }
            Err(error) => {
                self.status = format!("Failed to load {}: {error}", path.display());
            }
        }
    }

    fn apply_panel_action(&mut self, action: PanelAction) -> Redraw {
        match action {
            PanelAction::OpenDicomFolder => {
                if let Some(folder) = FileDialog::new().set_title("Select DICOM Folder").pick_folder() {
                    self.load(&folder);
                }
                Redraw::All
            }
            PanelAction::OpenFile => {
                if let Some(file) = FileDialog::new()
                    .set_title("Select Volume File")
                    .add_filter("Volumes", VOLUME_EXTENSIONS)
                    .pick_file()
                {
                    self.load(&file);
                }
                Redraw::All
            }
            PanelAction::ToggleMode => self.key(KeyCommand::ToggleMode),
            PanelAction::SetSlice(plane, index) => {
                if let Some(focus) = self.session.focus_mut() {
                    focus.set_slice_index(plane, i64::try_from(index).unwrap_or(i64::MAX));
                }
                Redraw::Slices
            }
            PanelAction::SetBrightness(value) => {
                self.session.display_mut().set_brightness(value);
                Redraw::Slices
            }
            PanelAction::SetContrast(value) => {
                self.session.display_mut().set_contrast(value);
                Redraw::Slices
            }
            PanelAction::Play => {
                self.cine.play(&self.session);
                Redraw::None
            }
            PanelAction::Pause => {
                self.cine.pause();
                Redraw::None
            }
            PanelAction::Stop => {
                self.cine.stop(&mut self.session);
                Redraw::Slices
            }
            PanelAction::ResetAll => self.key(KeyCommand::Reset),
            PanelAction::RotateViews => self.key(KeyCommand::RotateAxial),
            PanelAction::CenterOnCrosshair => self.key(KeyCommand::CenterOnCrosshair),
            PanelAction::SetViewAxis(axis) => {
                self.volume_view.set_axis(axis);
                Redraw::All
            }
            PanelAction::ResetCamera => {
                self.volume_view.reset_camera();
                Redraw::All
            }
        }
    }

    fn key(&mut self, command: KeyCommand) -> Redraw {
        self.controller.handle_key(&mut self.session, command)
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) -> Redraw {
        if ctx.wants_keyboard_input() {
            return Redraw::None;
        }
        let bindings = [
            (egui::Key::ArrowUp, KeyCommand::SliceUp),
            (egui::Key::PageUp, KeyCommand::SliceUp),
            (egui::Key::ArrowDown, KeyCommand::SliceDown),
            (egui::Key::PageDown, KeyCommand::SliceDown),
            (egui::Key::M, KeyCommand::ToggleMode),
            (egui::Key::R, KeyCommand::Reset),
            (egui::Key::C, KeyCommand::CenterOnCrosshair),
        ];
        let mut redraw = Redraw::None;
        for (key, command) in bindings {
            if ctx.input(|input| input.key_pressed(key)) {
                redraw = redraw.merge(self.key(command));
            }
        }
        if ctx.input(|input| input.key_pressed(egui::Key::Space)) {
            self.cine.toggle(&self.session);
        }
        redraw
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) -> Redraw {
        let dropped = ctx.input(|input| {
            input
                .raw
                .dropped_files
                .iter()
                .find_map(|file| file.path.clone())
        });
        match dropped {
            Some(path) => {
                self.load(&path);
                Redraw::All
            }
            None => Redraw::None,
        }
    }

    fn advance_cine(&mut self, ctx: &egui::Context) -> Redraw {
        let now = Instant::now();
        let elapsed = self
            .last_update
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.last_update = Some(now);

        let moved = self.cine.update(elapsed, &mut self.session);
        if let Some(wait) = self.cine.until_next_tick() {
            ctx.request_repaint_after(wait);
        }
        if moved { Redraw::Slices } else { Redraw::None }
    }

    fn draw_views(&mut self, ui: &mut egui::Ui) -> Redraw {
        let area = ui.available_rect_before_wrap();
        let half = area.size() / 2.0;
        let quadrant = |column: f32, row: f32| {
            egui::Rect::from_min_size(
                area.min + egui::vec2(column * half.x, row * half.y),
                half,
            )
            .shrink(1.0)
        };
        let rects = PlaneMap {
            axial: quadrant(0.0, 0.0),
            sagittal: quadrant(1.0, 0.0),
            coronal: quadrant(0.0, 1.0),
        };
        let options = self.context.render_service().options();

        let mut events = Vec::new();
        for plane in Plane::ALL {
            events.extend(self.canvases[plane].show(ui, rects[plane], &self.session, options));
        }
        self.volume_view.show(ui, quadrant(1.0, 1.0), &self.session);

        events.into_iter().fold(Redraw::None, |redraw, event| {
            redraw.merge(self.controller.handle(&mut self.session, event))
        })
    }
}

impl eframe::App for MprApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut redraw = self.handle_dropped_files(ctx);
        redraw = redraw.merge(self.handle_shortcuts(ctx));
        redraw = redraw.merge(self.advance_cine(ctx));

        let mut actions = Vec::new();
        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(230.0)
            .show(ctx, |ui| {
                draw_controls(
                    ui,
                    &self.session,
                    self.cine.state(),
                    self.volume_view.axis(),
                    &mut actions,
                );
            });
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.session.mode().label());
                ui.separator();
                ui.label(&self.status);
            });
        });
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                redraw = redraw.merge(self.draw_views(ui));
            });

        for action in actions {
            redraw = redraw.merge(self.apply_panel_action(action));
        }
        if redraw != Redraw::None {
            ctx.request_repaint();
        }
    }
}
