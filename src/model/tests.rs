use ndarray::{Array, Array3, IxDyn};

use super::{CoreError, Extents, Plane, PlaneMap, Volume, Voxel};

fn ramp_volume(shape: (usize, usize, usize)) -> Volume {
    let data = Array3::from_shape_fn(shape, |(z, y, x)| (z * 100 + y * 10 + x) as f32);
    Volume::new(data).expect("volume")
}

#[test]
fn extents_follow_plane_depth_axes() {
    let extents = Extents::new(10, 20, 30);
    assert_eq!(extents.depth(Plane::Axial), 10);
    assert_eq!(extents.depth(Plane::Sagittal), 30);
    assert_eq!(extents.depth(Plane::Coronal), 20);
    assert_eq!(extents.center(), Voxel::new(15, 10, 5));
    assert_eq!(extents.clamp(Voxel::new(99, 99, 99)), Voxel::new(29, 19, 9));
}

#[test]
fn volume_rejects_zero_sized_axis() {
    let data = Array3::<f32>::zeros((0, 4, 4));
    match Volume::new(data) {
        Err(CoreError::ZeroSizedDimension { axis }) => assert_eq!(axis, 0),
        other => panic!("expected zero-size error, got {other:?}"),
    }
}

#[test]
fn volume_caches_finite_range() {
    let data = Array::from_shape_vec((1, 1, 4), vec![-2.0_f32, f32::NAN, 7.0, 3.0]).expect("shape");
    let volume = Volume::new(data).expect("volume");
    assert_eq!(volume.min(), -2.0);
    assert_eq!(volume.max(), 7.0);
}

#[test]
fn two_dimensional_data_is_padded_to_single_slice() {
    let data = Array::from_shape_vec(IxDyn(&[2, 3]), vec![0.0_f32; 6]).expect("shape");
    let (volume, adjusted) = Volume::from_dyn(data).expect("padded");
    assert_eq!(adjusted, 1);
    assert_eq!(volume.dim(), (1, 2, 3));
}

#[test]
fn four_dimensional_data_keeps_first_frame() {
    let data = Array::from_shape_fn(IxDyn(&[2, 2, 2, 2]), |index| index[0] as f32);
    let (volume, adjusted) = Volume::from_dyn(data).expect("reduced");
    assert_eq!(adjusted, 1);
    assert_eq!(volume.dim(), (2, 2, 2));
    assert_eq!(volume.max(), 0.0);
}

#[test]
fn slices_use_expected_axes() {
    let volume = ramp_volume((3, 4, 5));
    assert_eq!(volume.slice(Plane::Axial, 1).dim(), (4, 5));
    assert_eq!(volume.slice(Plane::Sagittal, 2).dim(), (3, 4));
    assert_eq!(volume.slice(Plane::Coronal, 3).dim(), (3, 5));
    assert_eq!(volume.slice(Plane::Sagittal, 2)[[1, 3]], 132.0);
    assert_eq!(volume.slice(Plane::Axial, 50).dim(), (4, 5));
}

#[test]
fn axial_rotation_tracks_voxels() {
    let volume = ramp_volume((2, 3, 4));
    let rotated = volume.rotated_axial();
    assert_eq!(rotated.dim(), (2, 4, 3));
    let voxel = Voxel::new(1, 2, 1);
    let moved = volume.rotate_axial_voxel(voxel);
    assert_eq!(volume.value(voxel), rotated.value(moved));
}

#[test]
fn plane_map_indexes_by_plane() {
    let mut map = PlaneMap::splat(0_usize);
    map[Plane::Coronal] = 7;
    assert_eq!(map.coronal, 7);
    let doubled = map.map(|_, value| value * 2);
    assert_eq!(doubled[Plane::Coronal], 14);
    assert_eq!("Sagittal".parse::<Plane>(), Ok(Plane::Sagittal));
}
