use ndarray::Array3;

use crate::model::{Plane, Volume, Voxel};
use crate::render::plane_transform;
use crate::session::{InteractionMode, ViewerSession, ViewportSize};

use super::{
    ControllerSettings, InteractionController, KeyCommand, Redraw, ScreenPoint, ViewEvent,
    ViewEventKind,
};

fn session() -> ViewerSession {
    let data = Array3::from_shape_fn((10, 20, 30), |(z, y, x)| (z + y + x) as f32);
    let mut session = ViewerSession::with_volume(Volume::new(data).expect("volume"));
    // Axial images are 30x20, so this viewport fits them at scale 10.
    session.set_viewport(Plane::Axial, ViewportSize::new(300, 200));
    session
}

fn event(plane: Plane, kind: ViewEventKind) -> ViewEvent {
    ViewEvent::new(plane, kind)
}

fn press(x: f32, y: f32) -> ViewEvent {
    event(Plane::Axial, ViewEventKind::Press(ScreenPoint::new(x, y)))
}

fn wheel(plane: Plane, steps: f32) -> ViewEvent {
    event(plane, ViewEventKind::Wheel { steps, point: None })
}

#[test]
fn pointer_press_moves_focus_and_other_slices() {
    let mut session = session();
    let mut controller = InteractionController::default();

    assert_eq!(controller.handle(&mut session, press(0.0, 0.0)), Redraw::Slices);
    let focus = session.focus().expect("focus");
    assert_eq!(focus.focus(), Voxel::new(0, 0, 5));
    assert_eq!(focus.slice(Plane::Sagittal), 0);
    assert_eq!(focus.slice(Plane::Coronal), 0);
    assert_eq!(focus.slice(Plane::Axial), 5);

    let drag = event(Plane::Axial, ViewEventKind::Drag(ScreenPoint::new(300.0, 200.0)));
    assert_eq!(controller.handle(&mut session, drag), Redraw::Slices);
    assert_eq!(session.focus().expect("focus").focus(), Voxel::new(29, 19, 5));
}

#[test]
fn clicks_outside_the_image_are_clamped() {
    let mut session = session();
    let mut controller = InteractionController::default();
    controller.handle(&mut session, press(-50.0, 500.0));
    assert_eq!(session.focus().expect("focus").focus(), Voxel::new(0, 19, 5));
}

#[test]
fn press_on_current_focus_needs_no_redraw() {
    let mut session = session();
    let mut controller = InteractionController::default();
    // Center of the image maps back to the starting focus.
    assert_eq!(controller.handle(&mut session, press(150.0, 100.0)), Redraw::None);
}

#[test]
fn pointer_wheel_steps_one_slice_per_event() {
    let mut session = session();
    let mut controller = InteractionController::default();

    controller.handle(&mut session, wheel(Plane::Axial, 1.0));
    assert_eq!(session.focus().expect("focus").slice(Plane::Axial), 6);
    controller.handle(&mut session, wheel(Plane::Axial, -3.0));
    assert_eq!(session.focus().expect("focus").slice(Plane::Axial), 5);
    assert_eq!(controller.handle(&mut session, wheel(Plane::Axial, 0.0)), Redraw::None);

    for _ in 0..20 {
        controller.handle(&mut session, wheel(Plane::Axial, 1.0));
    }
    assert_eq!(session.focus().expect("focus").slice(Plane::Axial), 9);
    assert_eq!(controller.handle(&mut session, wheel(Plane::Axial, 1.0)), Redraw::None);
}

#[test]
fn pan_drag_adjusts_brightness_and_contrast() {
    let mut session = session();
    let mut controller = InteractionController::default();
    controller.handle_key(&mut session, KeyCommand::ToggleMode);
    assert_eq!(session.mode(), InteractionMode::Pan);

    assert_eq!(controller.handle(&mut session, press(0.0, 0.0)), Redraw::None);
    let right = event(Plane::Axial, ViewEventKind::Drag(ScreenPoint::new(30.0, 0.0)));
    assert_eq!(controller.handle(&mut session, right), Redraw::Slices);
    assert!((session.display().brightness() - 1.1).abs() < 1e-5);
    assert!((session.display().contrast() - 1.0).abs() < 1e-6);

    let down = event(Plane::Axial, ViewEventKind::Drag(ScreenPoint::new(30.0, 20.0)));
    controller.handle(&mut session, down);
    assert!((session.display().contrast() - 0.9).abs() < 1e-5);

    // Focus is untouched in pan mode.
    assert_eq!(session.focus().expect("focus").focus(), Voxel::new(15, 10, 5));
}

#[test]
fn drag_sensitivity_scales_adjustment() {
    let mut session = session();
    let mut controller = InteractionController::new(ControllerSettings {
        zoom_speed: 0.1,
        drag_sensitivity: 2.0,
    });
    controller.handle_key(&mut session, KeyCommand::ToggleMode);
    controller.handle(&mut session, press(0.0, 0.0));
    let right = event(Plane::Axial, ViewEventKind::Drag(ScreenPoint::new(30.0, 0.0)));
    controller.handle(&mut session, right);
    assert!((session.display().brightness() - 1.2).abs() < 1e-5);
}

#[test]
fn pan_wheel_zooms_toward_pointer() {
    let mut session = session();
    let mut controller = InteractionController::default();
    controller.handle_key(&mut session, KeyCommand::ToggleMode);

    let point = ScreenPoint::new(75.0, 50.0);
    let before = plane_transform(&session, Plane::Axial)
        .expect("transform")
        .screen_to_image(point.x, point.y);
    let sagittal_center = session.zoom().expect("zoom").center(Plane::Sagittal);

    let zoom_in = event(
        Plane::Axial,
        ViewEventKind::Wheel {
            steps: 1.0,
            point: Some(point),
        },
    );
    assert_eq!(controller.handle(&mut session, zoom_in), Redraw::Slices);
    let zoom = session.zoom().expect("zoom");
    assert!((zoom.factor() - 1.1).abs() < 1e-5);
    // Planes without a viewport keep their center.
    let center = zoom.center(Plane::Sagittal);
    assert!((center.x - sagittal_center.x).abs() < 1e-6);
    assert!((center.y - sagittal_center.y).abs() < 1e-6);

    let after = plane_transform(&session, Plane::Axial)
        .expect("transform")
        .screen_to_image(point.x, point.y);
    assert!((after.x - before.x).abs() < 1e-4);
    assert!((after.y - before.y).abs() < 1e-4);
    assert_eq!(session.focus().expect("focus").slice(Plane::Axial), 5);
}

fn axial_point_under(session: &ViewerSession, point: ScreenPoint) -> (f32, f32) {
    let position = plane_transform(session, Plane::Axial)
        .expect("transform")
        .screen_to_image(point.x, point.y);
    (position.x, position.y)
}

#[test]
fn zoom_keeps_pointer_anchor_when_centered_on_off_center_crosshair() {
    let mut session = session();
    let mut controller = InteractionController::default();
    session
        .focus_mut()
        .expect("focus")
        .set_focus_voxel(Voxel::new(2, 2, 5));
    controller.handle_key(&mut session, KeyCommand::CenterOnCrosshair);
    controller.handle_key(&mut session, KeyCommand::ToggleMode);

    // At zoom 1 the image fills the viewport, so the stored center is not
    // what is on screen.
    let point = ScreenPoint::new(150.0, 100.0);
    let zoom_in = event(
        Plane::Axial,
        ViewEventKind::Wheel {
            steps: 1.0,
            point: Some(point),
        },
    );
    let before = axial_point_under(&session, point);
    assert_eq!(controller.handle(&mut session, zoom_in), Redraw::Slices);
    let after = axial_point_under(&session, point);
    assert!((after.0 - before.0).abs() < 1e-4, "{before:?} -> {after:?}");
    assert!((after.1 - before.1).abs() < 1e-4, "{before:?} -> {after:?}");
}

#[test]
fn zoom_keeps_pointer_anchor_when_window_is_clamped() {
    let mut session = session();
    let mut controller = InteractionController::default();
    controller.handle_key(&mut session, KeyCommand::ToggleMode);
    controller.handle(&mut session, wheel(Plane::Axial, 10.0));
    assert!((session.zoom().expect("zoom").factor() - 2.0).abs() < 1e-5);

    // The crosshair sits near the corner, so the window clamps to the edge.
    session
        .focus_mut()
        .expect("focus")
        .set_focus_voxel(Voxel::new(2, 2, 5));
    controller.handle_key(&mut session, KeyCommand::CenterOnCrosshair);

    let point = ScreenPoint::new(150.0, 100.0);
    let before = axial_point_under(&session, point);
    assert!((before.0 - 0.25).abs() < 1e-4);
    let zoom_in = event(
        Plane::Axial,
        ViewEventKind::Wheel {
            steps: 1.0,
            point: Some(point),
        },
    );
    controller.handle(&mut session, zoom_in);
    let after = axial_point_under(&session, point);
    assert!((after.0 - before.0).abs() < 1e-4, "{before:?} -> {after:?}");
    assert!((after.1 - before.1).abs() < 1e-4, "{before:?} -> {after:?}");
}

#[test]
fn pan_wheel_stops_at_zoom_limits() {
    let mut session = session();
    let mut controller = InteractionController::default();
    controller.handle_key(&mut session, KeyCommand::ToggleMode);
    for _ in 0..100 {
        controller.handle(&mut session, wheel(Plane::Axial, -1.0));
    }
    assert!((session.zoom().expect("zoom").factor() - 0.1).abs() < 1e-6);
    assert_eq!(controller.handle(&mut session, wheel(Plane::Axial, -1.0)), Redraw::None);
}

#[test]
fn keyboard_follows_hovered_plane() {
    let mut session = session();
    let mut controller = InteractionController::default();
    assert_eq!(controller.focused_plane(), Plane::Axial);

    let hover = event(Plane::Coronal, ViewEventKind::Move(ScreenPoint::new(1.0, 1.0)));
    controller.handle(&mut session, hover);
    controller.handle_key(&mut session, KeyCommand::SliceUp);
    assert_eq!(session.focus().expect("focus").slice(Plane::Coronal), 11);

    controller.handle(&mut session, event(Plane::Coronal, ViewEventKind::Leave));
    assert_eq!(controller.focused_plane(), Plane::Coronal);
    controller.handle_key(&mut session, KeyCommand::SliceDown);
    controller.handle_key(&mut session, KeyCommand::SliceDown);
    assert_eq!(session.focus().expect("focus").slice(Plane::Coronal), 9);
}

#[test]
fn resize_updates_viewport_once() {
    let mut session = session();
    let mut controller = InteractionController::default();
    let size = ViewportSize::new(64, 48);
    let resize = event(Plane::Sagittal, ViewEventKind::Resize(size));
    assert_eq!(controller.handle(&mut session, resize), Redraw::Slices);
    assert_eq!(session.viewport(Plane::Sagittal), size);
    assert_eq!(controller.handle(&mut session, resize), Redraw::None);
}

#[test]
fn reset_restores_defaults() {
    let mut session = session();
    let mut controller = InteractionController::default();
    controller.handle(&mut session, press(0.0, 0.0));
    controller.handle_key(&mut session, KeyCommand::ToggleMode);
    controller.handle(&mut session, wheel(Plane::Axial, 2.0));

    assert_eq!(controller.handle_key(&mut session, KeyCommand::Reset), Redraw::Slices);
    assert_eq!(session.mode(), InteractionMode::Pointer);
    assert_eq!(session.focus().expect("focus").focus(), Voxel::new(15, 10, 5));
    assert!((session.zoom().expect("zoom").factor() - 1.0).abs() < 1e-6);
}

#[test]
fn rotate_redraws_everything() {
    let mut session = session();
    let mut controller = InteractionController::default();
    let generation = session.generation();
    assert_eq!(controller.handle_key(&mut session, KeyCommand::RotateAxial), Redraw::All);
    assert!(session.generation() > generation);
    assert_eq!(session.volume().expect("volume").dim(), (10, 30, 20));
}

#[test]
fn events_without_volume_are_ignored() {
    let mut session = ViewerSession::default();
    let mut controller = InteractionController::default();
    assert_eq!(controller.handle(&mut session, press(10.0, 10.0)), Redraw::None);
    assert_eq!(controller.handle(&mut session, wheel(Plane::Axial, 1.0)), Redraw::None);
    assert_eq!(controller.handle_key(&mut session, KeyCommand::SliceUp), Redraw::None);
    assert_eq!(controller.handle_key(&mut session, KeyCommand::RotateAxial), Redraw::None);
}

#[test]
fn redraw_merge_keeps_the_wider_invalidation() {
    assert_eq!(Redraw::None.merge(Redraw::Slices), Redraw::Slices);
    assert_eq!(Redraw::All.merge(Redraw::Slices), Redraw::All);
}
