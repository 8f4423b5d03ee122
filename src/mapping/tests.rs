use crate::model::{Extents, Plane, Voxel};

use super::{CursorPosition, project, project_all, unproject};

fn close(left: f32, right: f32) -> bool {
    (left - right).abs() < 1e-6
}

#[test]
fn example_volume_projects_to_documented_positions() {
    let extents = Extents::new(10, 20, 30);
    let focus = extents.center();
    assert_eq!(focus, Voxel::new(15, 10, 5));

    let projections = project_all(focus, extents);
    assert_eq!(projections.axial.slice, 5);
    assert_eq!(projections.sagittal.slice, 15);
    assert_eq!(projections.coronal.slice, 10);
    assert!(close(projections.axial.cursor.x, 15.0 / 29.0));
    assert!(close(projections.axial.cursor.y, 10.0 / 19.0));
    assert!(close(projections.sagittal.cursor.x, 10.0 / 19.0));
    assert!(close(projections.sagittal.cursor.y, 1.0 - 5.0 / 9.0));
    assert!(close(projections.coronal.cursor.x, 15.0 / 29.0));
    assert!(close(projections.coronal.cursor.y, 1.0 - 5.0 / 9.0));
}

#[test]
fn every_voxel_round_trips_through_every_plane() {
    let extents = Extents::new(4, 7, 5);
    for z in 0..extents.z {
        for y in 0..extents.y {
            for x in 0..extents.x {
                let voxel = Voxel::new(x, y, z);
                for plane in Plane::ALL {
                    let projection = project(voxel, extents, plane);
                    let decoded = unproject(plane, projection.cursor, projection.slice, extents);
                    assert_eq!(decoded, voxel, "plane {plane}");
                }
            }
        }
    }
}

#[test]
fn single_voxel_axes_do_not_divide_by_zero() {
    let extents = Extents::new(1, 1, 6);
    let voxel = Voxel::new(3, 0, 0);
    let projections = project_all(voxel, extents);
    assert!(close(projections.axial.cursor.y, 0.0));
    assert!(close(projections.sagittal.cursor.x, 0.0));
    assert!(close(projections.sagittal.cursor.y, 1.0));
    assert!(projections.coronal.cursor.x.is_finite());
    let decoded = unproject(
        Plane::Sagittal,
        CursorPosition::new(0.7, 0.2),
        projections.sagittal.slice,
        extents,
    );
    assert_eq!(decoded, voxel);
}

#[test]
fn sagittal_and_coronal_invert_vertical_axis() {
    let extents = Extents::new(11, 11, 11);
    let top = unproject(Plane::Coronal, CursorPosition::new(0.5, 0.0), 3, extents);
    let bottom = unproject(Plane::Coronal, CursorPosition::new(0.5, 1.0), 3, extents);
    assert_eq!(top.z, 10);
    assert_eq!(bottom.z, 0);
    let top = unproject(Plane::Sagittal, CursorPosition::new(0.0, 0.0), 4, extents);
    assert_eq!((top.x, top.y, top.z), (4, 0, 10));
}

#[test]
fn out_of_range_inputs_are_clamped() {
    let extents = Extents::new(3, 3, 3);
    let voxel = unproject(Plane::Axial, CursorPosition::new(-1.0, f32::NAN), 99, extents);
    assert_eq!(voxel, Voxel::new(0, 0, 2));
    let projection = project(Voxel::new(50, 1, 1), extents, Plane::Sagittal);
    assert_eq!(projection.slice, 2);
}
