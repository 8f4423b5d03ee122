use eframe::egui;

use crate::cine::CineState;
use crate::model::Plane;
use crate::render::ViewAxis;
use crate::session::ViewerSession;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum PanelAction {
    OpenDicomFolder,
    OpenFile,
    ToggleMode,
    SetSlice(Plane, usize),
    SetBrightness(f32),
    SetContrast(f32),
    Play,
    Pause,
    Stop,
    ResetAll,
    RotateViews,
    CenterOnCrosshair,
    SetViewAxis(ViewAxis),
    ResetCamera,
}

pub(super) fn draw_controls(
    ui: &mut egui::Ui,
    session: &ViewerSession,
    cine: CineState,
    view_axis: ViewAxis,
    actions: &mut Vec<PanelAction>,
) {
    ui.heading("MPR Viewer");
    ui.horizontal_wrapped(|ui| {
        if ui.button("Load DICOM Folder").clicked() {
            actions.push(PanelAction::OpenDicomFolder);
        }
        if ui.button("Load File").clicked() {
            actions.push(PanelAction::OpenFile);
        }
    });
    ui.separator();

    let has_volume = session.has_volume();
    ui.add_enabled_ui(has_volume, |ui| {
        if ui.button(session.mode().label()).clicked() {
            actions.push(PanelAction::ToggleMode);
        }

        ui.label("Slices");
        if let Some(focus) = session.focus() {
            for plane in Plane::ALL {
                let mut value = focus.slice(plane);
                let max = focus.extents().max_index(plane);
                let slider = egui::Slider::new(&mut value, 0..=max)
                    .text(plane.label())
                    .clamping(egui::SliderClamping::Always);
                if ui.add(slider).changed() {
                    actions.push(PanelAction::SetSlice(plane, value));
                }
            }
        }
        ui.separator();

        let display = session.display();
        let mut brightness = (display.brightness() * 100.0).round() as i32;
        if ui
            .add(egui::Slider::new(&mut brightness, 0..=200).text("Brightness %"))
            .changed()
        {
            actions.push(PanelAction::SetBrightness(brightness as f32 / 100.0));
        }
        let mut contrast = (display.contrast() * 100.0).round() as i32;
        if ui
            .add(egui::Slider::new(&mut contrast, 0..=200).text("Contrast %"))
            .changed()
        {
            actions.push(PanelAction::SetContrast(contrast as f32 / 100.0));
        }
        ui.separator();

        ui.label(format!("Cine: {cine:?}"));
        ui.horizontal(|ui| {
            if ui
                .add_enabled(cine != CineState::Playing, egui::Button::new("Play"))
                .clicked()
            {
                actions.push(PanelAction::Play);
            }
            if ui
                .add_enabled(cine == CineState::Playing, egui::Button::new("Pause"))
                .clicked()
            {
                actions.push(PanelAction::Pause);
            }
            if ui.button("Stop").clicked() {
                actions.push(PanelAction::Stop);
            }
        });
        ui.separator();

        ui.horizontal_wrapped(|ui| {
            if ui.button("Reset All").clicked() {
                actions.push(PanelAction::ResetAll);
            }
            if ui.button("Rotate Views").clicked() {
                actions.push(PanelAction::RotateViews);
            }
            if ui.button("Center").clicked() {
                actions.push(PanelAction::CenterOnCrosshair);
            }
        });
        ui.separator();

        let mut axis = view_axis;
        egui::ComboBox::from_label("3D view")
            .selected_text(axis.label())
            .show_ui(ui, |ui| {
                for candidate in ViewAxis::ALL {
                    ui.selectable_value(&mut axis, candidate, candidate.label());
                }
            });
        if axis != view_axis {
            actions.push(PanelAction::SetViewAxis(axis));
        }
        if ui.button("Reset Camera").clicked() {
            actions.push(PanelAction::ResetCamera);
        }
    });

    if has_volume {
        ui.separator();
        ui.small("Wheel: slice (pointer) / zoom (hand)");
        ui.small("Drag: crosshair (pointer) / brightness+contrast (hand)");
        ui.small("Keys: Up/Down slice, M mode, R reset, C center, Space cine");
    }
}
