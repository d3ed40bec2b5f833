//! Camera description and damped orbit controls.
//!
//! These types avoid platform APIs; the front-ends feed them pointer deltas and
//! viewport sizes and read back view/projection matrices and picking rays.

use crate::constants::*;
use crate::geometry::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Render surface size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    /// Map pixel coordinates (origin top-left) to normalized device coordinates.
    pub fn to_ndc(&self, px: f32, py: f32) -> Vec2 {
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32;
        Vec2::new(px / w * 2.0 - 1.0, -(py / h) * 2.0 + 1.0)
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    /// World-space ray from the eye through an NDC point.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray::new(self.eye, p1 - self.eye)
    }
}

/// Orbit controls around `target` with exponential damping and a distance clamp.
///
/// Pointer and wheel input accumulate into pending deltas; [`OrbitControls::update`]
/// applies a `damping_factor` share of them to the camera once per frame.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_step: f32,
    radius: f32,
    theta: f32, // azimuth around +Y, 0 looks down -Z
    phi: f32,   // polar angle from +Y
    delta_theta: f32,
    delta_phi: f32,
    dolly: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(&Camera::new(1.0))
    }
}

impl OrbitControls {
    pub fn new(camera: &Camera) -> Self {
        let offset = camera.eye - camera.target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target: camera.target,
            damping_factor: ORBIT_DAMPING_FACTOR,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_step: ORBIT_ZOOM_STEP,
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            delta_theta: 0.0,
            delta_phi: 0.0,
            dolly: 1.0,
        }
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    /// Queue a rotation from a pointer drag of `(dx, dy)` pixels.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport: Viewport) {
        let h = viewport.height.max(1) as f32;
        self.delta_theta -= std::f32::consts::TAU * dx / h * self.rotate_speed;
        self.delta_phi -= std::f32::consts::TAU * dy / h * self.rotate_speed;
    }

    /// Queue a dolly from wheel input; positive `delta_y` moves away.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.dolly /= self.zoom_step;
        } else if delta_y < 0.0 {
            self.dolly *= self.zoom_step;
        }
    }

    /// Apply pending input to `camera`. Returns true while motion is still settling.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        self.theta += self.delta_theta * self.damping_factor;
        self.phi += self.delta_phi * self.damping_factor;
        self.phi = self.phi.clamp(ORBIT_POLAR_EPS, std::f32::consts::PI - ORBIT_POLAR_EPS);
        self.radius = (self.radius * self.dolly).clamp(self.min_distance, self.max_distance);

        let sin_phi = self.phi.sin();
        let offset = Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        );
        camera.eye = self.target + offset;
        camera.target = self.target;

        self.delta_theta *= 1.0 - self.damping_factor;
        self.delta_phi *= 1.0 - self.damping_factor;
        self.dolly = 1.0;
        self.delta_theta.abs() > 1e-5 || self.delta_phi.abs() > 1e-5
    }
}
