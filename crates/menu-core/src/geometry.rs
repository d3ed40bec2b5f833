use glam::{Affine3A, Mat3, Quat, Vec3};

/// World-space ray with a normalized direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Intersect a ray with a double-sided `width × height` rectangle lying in the
/// local XY plane of `transform`.
///
/// Returns the world-space distance along the ray to the hit point.
pub fn ray_quad(ray: &Ray, transform: &Affine3A, width: f32, height: f32) -> Option<f32> {
    let det = transform.matrix3.determinant();
    if det.abs() < 1e-12 {
        return None;
    }
    let inv = transform.inverse();
    // Direction is left unnormalized so the ray parameter is shared with world space.
    let o = inv.transform_point3(ray.origin);
    let d = inv.transform_vector3(ray.dir);
    if d.z.abs() < 1e-9 {
        return None;
    }
    let t = -o.z / d.z;
    if t < 0.0 {
        return None;
    }
    let p = o + d * t;
    let inside = p.x.abs() <= width * 0.5 && p.y.abs() <= height * 0.5;
    inside.then(|| (ray.at(t) - ray.origin).length())
}

/// Rotation that maps local +Z onto `forward`, keeping local +Y as close to
/// `up` as possible.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let z = forward.normalize_or_zero();
    if z == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let mut x = up.cross(z);
    if x.length_squared() < 1e-8 {
        // forward parallel to up: pick another reference axis
        let alt = if z.z.abs() < 0.999 { Vec3::Z } else { Vec3::X };
        x = alt.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

/// Line-list vertices for a unit wireframe sphere (latitude rings plus meridians).
pub fn wire_sphere_lines(width_segments: u32, height_segments: u32) -> Vec<[f32; 3]> {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let vertex = |u: u32, v: u32| -> [f32; 3] {
        let phi = u as f32 / ws as f32 * std::f32::consts::TAU;
        let theta = v as f32 / hs as f32 * std::f32::consts::PI;
        [
            -phi.cos() * theta.sin(),
            theta.cos(),
            phi.sin() * theta.sin(),
        ]
    };
    let mut out = Vec::with_capacity((ws * (hs - 1) * 2 + ws * hs * 2) as usize);
    // rings (poles excluded, they collapse to a point)
    for v in 1..hs {
        for u in 0..ws {
            out.push(vertex(u, v));
            out.push(vertex(u + 1, v));
        }
    }
    // meridians
    for u in 0..ws {
        for v in 0..hs {
            out.push(vertex(u, v));
            out.push(vertex(u, v + 1));
        }
    }
    out
}

/// Two triangles covering a `width × height` quad, as `[x, y, u, v]`.
pub fn panel_quad(width: f32, height: f32) -> [[f32; 4]; 6] {
    let (hw, hh) = (width * 0.5, height * 0.5);
    [
        [-hw, -hh, 0.0, 1.0],
        [hw, -hh, 1.0, 1.0],
        [hw, hh, 1.0, 0.0],
        [-hw, -hh, 0.0, 1.0],
        [hw, hh, 1.0, 0.0],
        [-hw, hh, 0.0, 0.0],
    ]
}
