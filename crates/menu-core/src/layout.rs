use crate::animation::AnimationToken;
use crate::config::{AngleIndexing, MenuConfig, PanelOrientation};
use crate::geometry::look_rotation;
use crate::label::{LabelRasterizer, LabelStyle};
use crate::scene::{Panel, PanelId, SceneContext, Sphere, SphereId};
use crate::MenuError;
use glam::{Quat, Vec3};
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Evenly spaced ring angle: `index * 2π / count`.
#[inline]
pub fn ring_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    index as f32 * (TAU / count as f32)
}

/// Point on a sphere of `radius` at `angle` around the XY ring.
#[inline]
pub fn ring_position(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
}

/// Ring tangent at `angle`: `(-sin a, cos a, 0)`.
#[inline]
pub fn ring_tangent(angle: f32) -> Vec3 {
    Vec3::new(-angle.sin(), angle.cos(), 0.0)
}

/// Panel rotation for a panel placed at `position` (sphere-local) and `angle`.
pub fn panel_rotation(orientation: PanelOrientation, position: Vec3, angle: f32) -> Quat {
    let look_target = match orientation {
        PanelOrientation::Radial => position * 2.0,
        PanelOrientation::Tangential => position + ring_tangent(angle),
    };
    look_rotation(look_target - position, Vec3::Y)
}

/// Build every sphere and panel described by `config`.
///
/// Label bitmaps are produced through `rasterizer`, one per item.
pub fn build_scene(
    config: &MenuConfig,
    rasterizer: &mut dyn LabelRasterizer,
) -> Result<SceneContext, MenuError> {
    config.validate()?;
    let anim = &config.animation;
    let style = LabelStyle::default();

    let mut spheres: Vec<Sphere> = config
        .spheres
        .iter()
        .enumerate()
        .map(|(i, spec)| Sphere {
            id: SphereId(i),
            radius: spec.radius,
            color_rgb: spec.color_rgb,
            panels: SmallVec::new(),
            scale: spec.initial_scale.clamp(anim.closed_scale, anim.open_scale),
            animation: None,
            token: AnimationToken::default(),
        })
        .collect();

    let mut per_sphere_count = vec![0usize; spheres.len()];
    for item in &config.items {
        per_sphere_count[item.sphere] += 1;
    }
    let total = config.items.len();

    let mut panels = Vec::with_capacity(total);
    for (index, item) in config.items.iter().enumerate() {
        let sphere = &mut spheres[item.sphere];
        let angle = match config.indexing {
            AngleIndexing::Global => ring_angle(index, total),
            AngleIndexing::PerSphere => ring_angle(sphere.panels.len(), per_sphere_count[item.sphere]),
        };
        let local_position = ring_position(sphere.radius, angle);
        let rotation = panel_rotation(config.orientation, local_position, angle);
        let bitmap = rasterizer.rasterize(&item.label, &style)?;
        let id = PanelId(panels.len());
        sphere.panels.push(id);
        log::debug!(
            "[layout] panel {:?} {:?} on sphere {} angle={:.3} pos=({:.2},{:.2},{:.2})",
            id,
            item.label,
            item.sphere,
            angle,
            local_position.x,
            local_position.y,
            local_position.z
        );
        panels.push(Panel {
            id,
            label: item.label.clone(),
            sphere: sphere.id,
            angle,
            local_position,
            rotation,
            visible: sphere.scale >= anim.open_threshold,
            bitmap,
        });
    }

    log::info!(
        "[layout] built {} spheres, {} panels ({:?}, {:?})",
        spheres.len(),
        panels.len(),
        config.orientation,
        config.indexing
    );

    Ok(SceneContext {
        spheres,
        panels,
        open_threshold: anim.open_threshold,
        closed_scale: anim.closed_scale,
        open_scale: anim.open_scale,
    })
}
