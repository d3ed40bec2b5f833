// Host-side tests for the camera, viewport mapping and orbit controls.

use glam::{Vec2, Vec3};
use menu_core::*;

#[test]
fn viewport_aspect_follows_size() {
    assert_eq!(Viewport::new(800, 600).aspect(), 800.0 / 600.0);
    // Zero-sized surfaces never divide by zero.
    assert!(Viewport::new(0, 0).aspect().is_finite());
}

#[test]
fn pixels_map_to_ndc_with_y_up() {
    let vp = Viewport::new(800, 600);
    assert_eq!(vp.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
    assert_eq!(vp.to_ndc(800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(vp.to_ndc(400.0, 300.0), Vec2::ZERO);
    assert_eq!(vp.to_ndc(200.0, 150.0), Vec2::new(-0.5, 0.5));
}

#[test]
fn camera_starts_on_the_z_axis_looking_at_origin() {
    let cam = Camera::new(1.5);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, CAMERA_Z));
    assert_eq!(cam.target, Vec3::ZERO);
    assert!((cam.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
    assert_eq!((cam.znear, cam.zfar), (0.1, 1000.0));
}

#[test]
fn center_ray_points_at_the_origin() {
    let cam = Camera::new(800.0 / 600.0);
    let ray = cam.ray_from_ndc(Vec2::ZERO);
    assert_eq!(ray.origin, cam.eye);
    assert!(ray.dir.abs_diff_eq(Vec3::NEG_Z, 1e-4));
}

#[test]
fn ndc_ray_passes_through_projected_point() {
    let cam = Camera::new(800.0 / 600.0);
    let p = Vec3::new(1.0, 0.5, 0.0);
    let clip = cam.view_proj() * p.extend(1.0);
    let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);
    let ray = cam.ray_from_ndc(ndc);
    let t = (p - ray.origin).length();
    assert!(ray.at(t).abs_diff_eq(p, 1e-3));
}

#[test]
fn set_viewport_updates_aspect() {
    let mut cam = Camera::new(1.0);
    cam.set_viewport(Viewport::new(800, 600));
    assert_eq!(cam.aspect, 800.0 / 600.0);
}

#[test]
fn zoom_is_clamped_to_the_distance_range() {
    let mut cam = Camera::new(1.0);
    let mut controls = OrbitControls::new(&cam);
    assert!((controls.distance() - CAMERA_Z).abs() < 1e-5);

    for _ in 0..100 {
        controls.zoom_by_wheel(-1.0);
    }
    controls.update(&mut cam);
    assert_eq!(controls.distance(), ORBIT_MIN_DISTANCE);
    assert!((cam.eye.length() - ORBIT_MIN_DISTANCE).abs() < 1e-4);

    for _ in 0..100 {
        controls.zoom_by_wheel(1.0);
    }
    controls.update(&mut cam);
    assert_eq!(controls.distance(), ORBIT_MAX_DISTANCE);
}

#[test]
fn wheel_steps_are_applied_once() {
    let mut cam = Camera::new(1.0);
    let mut controls = OrbitControls::new(&cam);
    controls.zoom_by_wheel(1.0);
    controls.update(&mut cam);
    let after_one = controls.distance();
    assert!((after_one - CAMERA_Z / ORBIT_ZOOM_STEP).abs() < 1e-4);
    controls.update(&mut cam);
    assert_eq!(controls.distance(), after_one);
}

#[test]
fn drag_rotation_is_damped_and_settles() {
    let mut cam = Camera::new(1.0);
    let mut controls = OrbitControls::new(&cam);
    controls.rotate_by_pixels(100.0, 0.0, Viewport::new(800, 600));

    assert!(controls.update(&mut cam), "still settling after first frame");
    let first = cam.eye;
    assert!(first.x.abs() > 0.0);

    let mut settling = true;
    for _ in 0..200 {
        settling = controls.update(&mut cam);
    }
    assert!(!settling);
    assert!((cam.eye.length() - CAMERA_Z).abs() < 1e-3, "orbit keeps distance");
    // Damped: the first frame covers only part of the total swing.
    assert!(cam.eye.x.abs() > first.x.abs());
}

#[test]
fn vertical_drag_never_flips_over_the_pole() {
    let mut cam = Camera::new(1.0);
    let mut controls = OrbitControls::new(&cam);
    controls.rotate_by_pixels(0.0, 10_000.0, Viewport::new(800, 600));
    for _ in 0..50 {
        controls.update(&mut cam);
        assert!(cam.eye.is_finite());
        assert!(cam.eye.y <= CAMERA_Z + 1e-4);
    }
    assert!(cam.eye.y > 0.0);
}
