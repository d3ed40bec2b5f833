use thiserror::Error;

/// Errors raised while building the menu scene from a [`crate::MenuConfig`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MenuError {
    #[error("menu config has no spheres")]
    NoSpheres,
    #[error("menu item {label:?} targets sphere {sphere}, but only {count} spheres exist")]
    UnknownSphere {
        label: String,
        sphere: usize,
        count: usize,
    },
    #[error("menu item at index {index} has an empty label")]
    EmptyLabel { index: usize },
    #[error("sphere {sphere} has invalid radius {radius}")]
    InvalidRadius { sphere: usize, radius: f32 },
    #[error("sphere {sphere} initial scale {scale} is outside [{min}, {max}]")]
    ScaleOutOfRange {
        sphere: usize,
        scale: f32,
        min: f32,
        max: f32,
    },
    #[error("label rasterization failed for {label:?}: {reason}")]
    Label { label: String, reason: String },
}
