// Shared fixtures for the host-side scene tests.

#![allow(dead_code)]

use glam::Vec3;
use menu_core::*;

/// Default menu with each sphere's starting scale overridden.
pub fn config_with_scales(scales: [f32; 3]) -> MenuConfig {
    let mut config = MenuConfig::default();
    for (spec, scale) in config.spheres.iter_mut().zip(scales) {
        spec.initial_scale = scale;
    }
    config
}

pub fn build(config: &MenuConfig) -> SceneContext {
    build_scene(config, &mut BackdropRasterizer).expect("scene builds")
}

pub fn panel_by_label<'a>(scene: &'a SceneContext, label: &str) -> &'a Panel {
    scene
        .panels()
        .iter()
        .find(|p| p.label == label)
        .unwrap_or_else(|| panic!("no panel labelled {label:?}"))
}

pub fn panel_center(scene: &SceneContext, label: &str) -> Vec3 {
    let panel = panel_by_label(scene, label);
    Vec3::from(scene.panel_world_transform(panel).translation)
}

/// Ray from the default camera eye through the centre of a panel.
pub fn ray_from_eye(scene: &SceneContext, label: &str) -> Ray {
    let eye = Vec3::new(0.0, 0.0, CAMERA_Z);
    Ray::new(eye, panel_center(scene, label) - eye)
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
