// Shared scene/interaction tuning constants used by both web and native frontends.

// Spheres (geometric radius per sphere, innermost first)
pub const SPHERE_RADII: [f32; 3] = [1.0, 1.5, 2.0];
pub const SPHERE_COLORS: [[f32; 3]; 3] = [
    [0.0, 1.0, 0.0], // green
    [0.0, 0.0, 1.0], // blue
    [1.0, 0.0, 0.0], // red
];
pub const SPHERE_WIDTH_SEGMENTS: u32 = 32;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 32;
pub const SPHERE_INITIAL_SCALE: f32 = 1.0;

// Open/closed scale states
pub const CLOSED_SCALE: f32 = 0.1;
pub const OPEN_SCALE: f32 = 2.0;
pub const OPEN_THRESHOLD: f32 = 1.0; // at or above: panels visible

// Animation timing
pub const ANIMATION_DURATION_MS: u64 = 500;
pub const ANIMATION_TICK_MS: u64 = 16; // ~60 updates per second

// Panels
pub const PANEL_WIDTH: f32 = 0.4;
pub const PANEL_HEIGHT: f32 = 0.2;

// Label bitmap (offscreen canvas)
pub const LABEL_CANVAS_WIDTH: u32 = 256;
pub const LABEL_CANVAS_HEIGHT: u32 = 128;
pub const LABEL_FONT: &str = "20px Arial";
pub const LABEL_FONT_PX: f32 = 20.0; // pixel size of LABEL_FONT for non-CSS rasterizers
pub const LABEL_TEXT_ORIGIN: [f64; 2] = [10.0, 50.0];
pub const LABEL_BACKDROP_RGBA: [u8; 4] = [0, 0, 0, 128]; // rgba(0, 0, 0, 0.5)
pub const LABEL_BACKDROP_CSS: &str = "rgba(0, 0, 0, 0.5)";
pub const LABEL_TEXT_CSS: &str = "white";

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.25;
pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 10.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // dolly factor per wheel notch
pub const ORBIT_POLAR_EPS: f32 = 1e-6;

// Background clear color
pub const CLEAR_RGB: [f64; 3] = [0.0, 0.0, 0.0];

// Pointer travel (pixels) above which a press becomes an orbit drag instead of a click
pub const CLICK_DRAG_TOLERANCE_PX: f32 = 4.0;
