//! Static menu configuration.
//!
//! [`MenuConfig::default`] reproduces the stock three-sphere menu; callers may
//! build their own and run [`MenuConfig::validate`] before handing it to
//! [`crate::build_scene`].

use crate::constants::*;
use crate::error::MenuError;
use std::time::Duration;

/// How a panel is rotated once placed on its sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelOrientation {
    /// Panel normal points from the sphere center through the panel, outward.
    #[default]
    Radial,
    /// Panel looks at `position + (-sin a, cos a, 0)`; its normal follows the ring tangent.
    Tangential,
}

/// Which index space is used to spread panels around the ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleIndexing {
    /// One index over every menu item; spacing is `2π / items.len()`.
    Global,
    /// Index and count within the owning sphere; spacing is `2π / panels_on_sphere`.
    #[default]
    PerSphere,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SphereSpec {
    pub radius: f32,
    pub color_rgb: [f32; 3],
    pub initial_scale: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub label: String,
    /// Index into [`MenuConfig::spheres`].
    pub sphere: usize,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, sphere: usize) -> Self {
        Self {
            label: label.into(),
            sphere,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    pub duration: Duration,
    /// Minimum spacing between applied ticks.
    pub tick_interval: Duration,
    pub open_scale: f32,
    pub closed_scale: f32,
    pub open_threshold: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(ANIMATION_DURATION_MS),
            tick_interval: Duration::from_millis(ANIMATION_TICK_MS),
            open_scale: OPEN_SCALE,
            closed_scale: CLOSED_SCALE,
            open_threshold: OPEN_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuConfig {
    pub spheres: Vec<SphereSpec>,
    pub items: Vec<MenuItem>,
    pub orientation: PanelOrientation,
    pub indexing: AngleIndexing,
    pub animation: AnimationConfig,
    /// Hidden panels still take part in hit-testing so a closed sphere can be reopened.
    pub pick_hidden_panels: bool,
}

pub fn default_spheres() -> Vec<SphereSpec> {
    SPHERE_RADII
        .iter()
        .zip(SPHERE_COLORS.iter())
        .map(|(&radius, &color_rgb)| SphereSpec {
            radius,
            color_rgb,
            initial_scale: SPHERE_INITIAL_SCALE,
        })
        .collect()
}

pub fn default_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("SDXL", 0),
        MenuItem::new("Stable Diffusion v1.5", 1),
        MenuItem::new("Stable Diffusion v2.1", 2),
        MenuItem::new("Prompt Builder", 1),
        MenuItem::new("LORA", 2),
        MenuItem::new("Schedulers", 2),
    ]
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            spheres: default_spheres(),
            items: default_menu_items(),
            orientation: PanelOrientation::default(),
            indexing: AngleIndexing::default(),
            animation: AnimationConfig::default(),
            pick_hidden_panels: true,
        }
    }
}

impl MenuConfig {
    pub fn with_orientation(mut self, orientation: PanelOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_indexing(mut self, indexing: AngleIndexing) -> Self {
        self.indexing = indexing;
        self
    }

    pub fn validate(&self) -> Result<(), MenuError> {
        if self.spheres.is_empty() {
            return Err(MenuError::NoSpheres);
        }
        let (min, max) = (self.animation.closed_scale, self.animation.open_scale);
        for (i, s) in self.spheres.iter().enumerate() {
            if !(s.radius.is_finite() && s.radius > 0.0) {
                return Err(MenuError::InvalidRadius {
                    sphere: i,
                    radius: s.radius,
                });
            }
            if !(min..=max).contains(&s.initial_scale) {
                return Err(MenuError::ScaleOutOfRange {
                    sphere: i,
                    scale: s.initial_scale,
                    min,
                    max,
                });
            }
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.label.trim().is_empty() {
                return Err(MenuError::EmptyLabel { index });
            }
            if item.sphere >= self.spheres.len() {
                return Err(MenuError::UnknownSphere {
                    label: item.label.clone(),
                    sphere: item.sphere,
                    count: self.spheres.len(),
                });
            }
        }
        Ok(())
    }
}
