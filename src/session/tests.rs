use ndarray::Array3;

use crate::mapping::CursorPosition;
use crate::model::{Extents, Plane, PlaneMap, Volume, Voxel};

use super::{
    DisplayParameters, FocusState, InteractionMode, ViewerSession, ZoomLimits, ZoomState,
};

fn assert_consistent(state: &FocusState) {
    for plane in Plane::ALL {
        assert_eq!(state.decode(plane), state.focus(), "plane {plane} disagrees");
    }
}

fn volume(shape: (usize, usize, usize)) -> Volume {
    Volume::new(Array3::from_shape_fn(shape, |(z, y, x)| (z + y + x) as f32)).expect("volume")
}

#[test]
fn new_state_starts_at_documented_midpoint() {
    let state = FocusState::new(Extents::new(10, 20, 30));
    assert_eq!(state.focus(), Voxel::new(15, 10, 5));
    assert_eq!(state.slice(Plane::Axial), 5);
    assert_eq!(state.slice(Plane::Sagittal), 15);
    assert_eq!(state.slice(Plane::Coronal), 10);
    let cursor = state.cursor(Plane::Axial);
    assert!((cursor.x - 15.0 / 29.0).abs() < 1e-6);
    assert!((cursor.y - 10.0 / 19.0).abs() < 1e-6);
    assert_consistent(&state);
}

#[test]
fn set_focus_voxel_clamps_and_stays_consistent() {
    let mut state = FocusState::new(Extents::new(4, 5, 6));
    state.set_focus_voxel(Voxel::new(100, 2, 100));
    assert_eq!(state.focus(), Voxel::new(5, 2, 3));
    assert_consistent(&state);
    for z in 0..4 {
        for x in 0..6 {
            state.set_focus_voxel(Voxel::new(x, 4 - z.min(4), z));
            assert_consistent(&state);
        }
    }
}

#[test]
fn set_slice_index_clamps_both_ends() {
    let mut state = FocusState::new(Extents::new(10, 20, 30));
    state.set_slice_index(Plane::Sagittal, -5);
    assert_eq!(state.slice(Plane::Sagittal), 0);
    state.set_slice_index(Plane::Sagittal, 30 + 100);
    assert_eq!(state.slice(Plane::Sagittal), 29);
    state.set_slice_index(Plane::Axial, i64::MIN);
    assert_eq!(state.slice(Plane::Axial), 0);
    assert_consistent(&state);
}

#[test]
fn set_slice_index_preserves_own_cursor() {
    let mut state = FocusState::new(Extents::new(10, 20, 30));
    let before = state.cursor(Plane::Coronal);
    state.set_slice_index(Plane::Coronal, 3);
    assert_eq!(state.cursor(Plane::Coronal), before);
    assert_eq!(state.focus().y, 3);
    let axial = state.cursor(Plane::Axial);
    assert!((axial.y - 3.0 / 19.0).abs() < 1e-6);
    assert_consistent(&state);
}

#[test]
fn step_slice_saturates_at_bounds() {
    let mut state = FocusState::new(Extents::new(3, 3, 3));
    state.step_slice(Plane::Axial, 1);
    state.step_slice(Plane::Axial, 1);
    assert_eq!(state.slice(Plane::Axial), 2);
    state.step_slice(Plane::Axial, -10);
    assert_eq!(state.slice(Plane::Axial), 0);
}

#[test]
fn display_parameters_clamp_and_fallback() {
    let mut display = DisplayParameters::new(5.0, -1.0);
    assert_eq!(display.brightness(), 2.0);
    assert_eq!(display.contrast(), 0.0);
    display.set_brightness(0.0);
    assert_eq!(display.gamma(), 1.0);
    display.set_brightness(0.5);
    assert_eq!(display.gamma(), 2.0);
    display.adjust(0.25, 0.5);
    assert_eq!(display.brightness(), 0.75);
    assert_eq!(display.contrast(), 0.0);
    display.set_contrast(f32::NAN);
    assert_eq!(display.contrast(), 1.0);
}

#[test]
fn zoom_toward_anchor_respects_limits() {
    let centers = PlaneMap::splat(CursorPosition::CENTER);
    let mut zoom = ZoomState::new(ZoomLimits::default(), centers);
    let anchors = PlaneMap::splat(CursorPosition::new(1.0, 0.0));
    assert!(zoom.zoom_toward(1.0, 0.1, &anchors));
    assert!((zoom.factor() - 1.1).abs() < 1e-6);
    let center = zoom.center(Plane::Axial);
    assert!((center.x - (0.5 * 1.0 + 1.0 * 0.1) / 1.1).abs() < 1e-6);
    assert!((center.y - (0.5 / 1.1)).abs() < 1e-6);

    for _ in 0..200 {
        zoom.zoom_toward(1.0, 0.1, &anchors);
    }
    assert_eq!(zoom.factor(), 5.0);
    assert!(!zoom.zoom_toward(1.0, 0.1, &anchors));
    for _ in 0..200 {
        zoom.zoom_toward(-1.0, 0.5, &anchors);
    }
    assert!((zoom.factor() - 0.1).abs() < 1e-6);
}

#[test]
fn replacing_volume_rederives_all_state() {
    let mut session = ViewerSession::with_volume(volume((4, 4, 4)));
    let first_generation = session.generation();
    session
        .focus_mut()
        .expect("focus")
        .set_focus_voxel(Voxel::new(3, 3, 3));
    session
        .zoom_mut()
        .expect("zoom")
        .zoom_toward(5.0, 0.1, &PlaneMap::splat(CursorPosition::CENTER));

    session.replace_volume(volume((10, 20, 30)));
    assert_ne!(session.generation(), first_generation);
    let focus = session.focus().expect("focus");
    assert_eq!(focus.extents(), Extents::new(10, 20, 30));
    assert_eq!(focus.focus(), Voxel::new(15, 10, 5));
    assert_eq!(session.zoom().expect("zoom").factor(), 1.0);
}

#[test]
fn reset_restores_defaults_but_keeps_volume() {
    let mut session = ViewerSession::with_volume(volume((6, 6, 6)));
    session.set_mode(InteractionMode::Pan);
    session.display_mut().adjust(0.5, -0.5);
    session
        .focus_mut()
        .expect("focus")
        .set_focus_voxel(Voxel::new(0, 0, 0));
    session.reset();
    assert_eq!(session.mode(), InteractionMode::Pointer);
    assert_eq!(session.display(), DisplayParameters::default());
    assert_eq!(session.focus().expect("focus").focus(), Voxel::new(3, 3, 3));
    assert!(session.has_volume());
}

#[test]
fn axial_rotation_keeps_focus_on_same_voxel_value() {
    let data = Array3::from_shape_fn((2, 3, 5), |(z, y, x)| (z * 100 + y * 10 + x) as f32);
    let mut session = ViewerSession::with_volume(Volume::new(data).expect("volume"));
    session
        .focus_mut()
        .expect("focus")
        .set_focus_voxel(Voxel::new(4, 1, 1));
    let before = session
        .volume()
        .and_then(|volume| volume.value(Voxel::new(4, 1, 1)));
    let generation = session.generation();
    session.rotate_axial();
    assert_ne!(session.generation(), generation);
    let focus = session.focus().expect("focus").focus();
    assert_eq!(session.volume().expect("volume").dim(), (2, 5, 3));
    assert_eq!(session.volume().and_then(|volume| volume.value(focus)), before);
}
