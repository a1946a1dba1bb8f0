use glam::{Mat4, Vec3, Vec4};
use super::*;

fn create_test_viewport() -> Vec4 {
    Vec4::new(0.0, 0.0, 1920.0, 1080.0)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_scene_camera_new() {
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);

    let camera = SceneCamera::new(view, proj, create_test_viewport());

    assert_eq!(*camera.world_to_view_matrix(), view);
    assert_eq!(*camera.projection_matrix(), proj);
    assert_eq!(camera.viewport().z, 1920.0);
    assert!(camera.clip_planes().is_empty());
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_set_world_to_view_matrix() {
    let mut camera = SceneCamera::new(Mat4::IDENTITY, Mat4::IDENTITY, create_test_viewport());

    let new_view = Mat4::look_at_rh(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y);
    camera.set_world_to_view_matrix(new_view);

    assert_eq!(*camera.world_to_view_matrix(), new_view);
}

#[test]
fn test_set_projection_matrix() {
    let mut camera = SceneCamera::new(Mat4::IDENTITY, Mat4::IDENTITY, create_test_viewport());

    let ortho = Mat4::orthographic_rh(-1.0, 1.0, -1.0, 1.0, 0.1, 10.0);
    camera.set_projection_matrix(ortho);

    assert_eq!(*camera.projection_matrix(), ortho);
}

#[test]
fn test_set_clip_planes() {
    let mut camera = SceneCamera::new(Mat4::IDENTITY, Mat4::IDENTITY, create_test_viewport());

    camera.set_clip_planes(vec![Vec4::new(0.0, 1.0, 0.0, 0.0), Vec4::new(1.0, 0.0, 0.0, -2.0)]);

    assert_eq!(camera.clip_planes().len(), 2);
    assert_eq!(camera.clip_planes()[1].w, -2.0);
}

#[test]
fn test_set_viewport() {
    let mut camera = SceneCamera::new(Mat4::IDENTITY, Mat4::IDENTITY, create_test_viewport());

    camera.set_viewport(Vec4::new(10.0, 20.0, 640.0, 480.0));

    assert_eq!(*camera.viewport(), Vec4::new(10.0, 20.0, 640.0, 480.0));
}
