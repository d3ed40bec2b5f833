//! Scene context: the spheres and the panels they own.
//!
//! Spheres sit at the origin. A panel's placement is stored in its sphere's
//! local frame, so scaling a sphere carries its panels with it.

use crate::animation::{AnimationToken, ScaleAnimation};
use crate::label::LabelBitmap;
use glam::{Affine3A, Quat, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SphereId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SphereState {
    Closed,
    Animating,
    Open,
}

#[derive(Clone, Debug)]
pub struct Sphere {
    pub id: SphereId,
    pub radius: f32,
    pub color_rgb: [f32; 3],
    pub panels: SmallVec<[PanelId; 8]>,
    pub(crate) scale: f32,
    pub(crate) animation: Option<ScaleAnimation>,
    pub(crate) token: AnimationToken,
}

impl Sphere {
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// True while an animation holding the current token is in flight.
    pub fn is_animating(&self) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|a| a.token == self.token)
    }

    pub fn animation(&self) -> Option<&ScaleAnimation> {
        self.animation.as_ref()
    }

    pub fn token(&self) -> AnimationToken {
        self.token
    }

    /// Transform from sphere-local space to world space.
    pub fn transform(&self) -> Affine3A {
        Affine3A::from_scale(Vec3::splat(self.scale))
    }

    /// Transform for a unit wireframe sphere drawn at this sphere's size.
    pub fn wire_transform(&self) -> Affine3A {
        Affine3A::from_scale(Vec3::splat(self.scale * self.radius))
    }
}

#[derive(Clone, Debug)]
pub struct Panel {
    pub id: PanelId,
    pub label: String,
    pub sphere: SphereId,
    pub angle: f32,
    /// Position on the owning sphere's surface, in the sphere's local frame.
    pub local_position: Vec3,
    pub rotation: Quat,
    pub visible: bool,
    pub bitmap: LabelBitmap,
}

impl Panel {
    pub fn local_transform(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.rotation, self.local_position)
    }

    /// Outward-facing normal (local +Z) in the sphere's frame.
    pub fn normal(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

#[derive(Clone, Debug, Default)]
pub struct SceneContext {
    pub(crate) spheres: Vec<Sphere>,
    pub(crate) panels: Vec<Panel>,
    pub(crate) open_threshold: f32,
    pub(crate) closed_scale: f32,
    pub(crate) open_scale: f32,
}

impl SceneContext {
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn sphere(&self, id: SphereId) -> Option<&Sphere> {
        self.spheres.get(id.0)
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(id.0)
    }

    pub fn panels_of(&self, id: SphereId) -> impl Iterator<Item = &Panel> + '_ {
        self.sphere(id)
            .into_iter()
            .flat_map(move |s| s.panels.iter().filter_map(move |p| self.panel(*p)))
    }

    pub fn panel_world_transform(&self, panel: &Panel) -> Affine3A {
        match self.sphere(panel.sphere) {
            Some(s) => s.transform() * panel.local_transform(),
            None => panel.local_transform(),
        }
    }

    pub fn state(&self, id: SphereId) -> Option<SphereState> {
        let s = self.sphere(id)?;
        Some(if s.is_animating() {
            SphereState::Animating
        } else if s.scale >= self.open_threshold {
            SphereState::Open
        } else {
            SphereState::Closed
        })
    }

    /// Set a sphere's scale directly, clamped to the open/closed range.
    ///
    /// Any in-flight animation is invalidated (its token no longer matches and
    /// the next tick drops it). Panel visibility follows the same thresholds as
    /// an animation tick.
    pub fn set_sphere_scale(&mut self, id: SphereId, scale: f32) {
        let (min, max) = (self.closed_scale, self.open_scale);
        let Some(sphere) = self.spheres.get_mut(id.0) else {
            return;
        };
        sphere.scale = scale.clamp(min, max);
        sphere.token = sphere.token.next();
        let s = sphere.scale;
        if s >= self.open_threshold {
            self.set_panels_visible(id, true);
        } else if s <= min {
            self.set_panels_visible(id, false);
        }
    }

    pub(crate) fn set_panels_visible(&mut self, id: SphereId, visible: bool) {
        let Some(sphere) = self.spheres.get(id.0) else {
            return;
        };
        for pid in sphere.panels.iter() {
            if let Some(p) = self.panels.get_mut(pid.0) {
                p.visible = visible;
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.panels.clear();
        self.spheres.clear();
    }
}
