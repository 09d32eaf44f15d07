//! Scene Value-Source Tests
//!
//! Tests for:
//! - Camera: projection setup, view = inverse(world), combined transform
//! - Scene: camera matrix snapshot sync, eye-position binding helper

use glam::{Affine3A, Mat4, Vec3};

use norn::scene::{Camera, Scene};
use norn::shader::{PushedValue, RecordingInterface, UniformInterface};

const EPSILON: f32 = 1e-4;

fn approx_mat(a: &Mat4, b: &Mat4) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| (x - y).abs() < EPSILON)
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn camera_view_is_inverse_of_world() {
    let mut camera = Camera::new_perspective(60.0, 1.0, 0.1, 100.0);
    let world = Affine3A::from_translation(Vec3::new(0.0, 0.0, 10.0));

    camera.update_view_projection(&world);

    assert!(approx_mat(
        camera.view_matrix(),
        &Mat4::from(world).inverse()
    ));
}

#[test]
fn camera_combined_transform_is_projection_times_view() {
    let mut camera = Camera::new_perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
    camera.update_view_projection(&Affine3A::from_translation(Vec3::new(1.0, 2.0, 3.0)));

    let expected = *camera.projection_matrix() * *camera.view_matrix();
    assert!(approx_mat(camera.view_projection_matrix(), &expected));
}

#[test]
fn camera_world_position_tracks_transform() {
    let mut camera = Camera::new_perspective(60.0, 1.0, 0.1, 100.0);
    camera.update_view_projection(&Affine3A::from_translation(Vec3::new(7.0, 8.0, 9.0)));

    assert_eq!(camera.world_position(), Vec3::new(7.0, 8.0, 9.0));
}

// ============================================================================
// Scene Snapshot
// ============================================================================

#[test]
fn scene_syncs_matrices_from_active_camera() {
    let mut scene = Scene::new();
    let mut camera = Camera::new_perspective(60.0, 1.0, 0.1, 100.0);
    camera.update_view_projection(&Affine3A::from_translation(Vec3::new(0.0, 0.0, 5.0)));

    let view = *camera.view_matrix();
    let view_projection = *camera.view_projection_matrix();
    scene.set_active_camera(camera);

    assert!(approx_mat(scene.view_matrix(), &view));
    assert!(approx_mat(scene.view_projection_matrix(), &view_projection));
}

#[test]
fn scene_camera_transform_updates_snapshot() {
    let mut scene = Scene::new();
    scene.set_active_camera(Camera::new_perspective(60.0, 1.0, 0.1, 100.0));

    scene.set_camera_transform(&Affine3A::from_translation(Vec3::new(3.0, 0.0, 0.0)));

    assert_eq!(scene.eye_position(), Vec3::new(3.0, 0.0, 0.0));
}

#[test]
fn scene_binds_eye_position_through_helper() {
    let mut scene = Scene::new();
    scene.set_eye_position(Vec3::new(1.5, 2.5, 3.5));

    let mut recording = RecordingInterface::new();
    scene.bind_eye_position("eye", &mut recording);

    assert_eq!(
        recording.last_for("eye").unwrap().value,
        PushedValue::Float3(1.5, 2.5, 3.5)
    );
}

#[test]
fn recording_interface_records_in_push_order() {
    let mut recording = RecordingInterface::new();
    recording.set_float("a", 1.0);
    recording.set_float("b", 2.0);

    let pushes = recording.pushes();
    assert_eq!(pushes[0].name, "a");
    assert_eq!(pushes[1].name, "b");
}
