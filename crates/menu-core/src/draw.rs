//! Per-frame draw data handed to the renderer.

use crate::scene::SceneContext;
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PanelInstance {
    pub model: [[f32; 4]; 4],
}

/// Everything the renderer needs for one frame. `panel_slots[i]` is the scene
/// panel index whose label texture belongs to `panels[i]`.
#[derive(Clone, Debug, Default)]
pub struct FrameSnapshot {
    pub uniforms: Uniforms,
    pub spheres: Vec<SphereInstance>,
    pub panels: Vec<PanelInstance>,
    pub panel_slots: Vec<usize>,
}

impl FrameSnapshot {
    pub fn capture(scene: &SceneContext, view_proj: Mat4) -> Self {
        let spheres = scene
            .spheres()
            .iter()
            .map(|s| SphereInstance {
                model: Mat4::from(s.wire_transform()).to_cols_array_2d(),
                color: Vec3::from(s.color_rgb).extend(1.0).to_array(),
            })
            .collect();
        let mut panels = Vec::new();
        let mut panel_slots = Vec::new();
        for p in scene.panels().iter().filter(|p| p.visible) {
            panels.push(PanelInstance {
                model: Mat4::from(scene.panel_world_transform(p)).to_cols_array_2d(),
            });
            panel_slots.push(p.id.0);
        }
        Self {
            uniforms: Uniforms {
                view_proj: view_proj.to_cols_array_2d(),
            },
            spheres,
            panels,
            panel_slots,
        }
    }
}
