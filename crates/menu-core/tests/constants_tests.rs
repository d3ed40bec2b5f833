// Host-side tests for constants and their relationships.

use menu_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scale_thresholds_are_ordered() {
    assert!(CLOSED_SCALE > 0.0);
    assert!(CLOSED_SCALE < OPEN_THRESHOLD);
    assert!(OPEN_THRESHOLD < OPEN_SCALE);
    assert!((CLOSED_SCALE..=OPEN_SCALE).contains(&SPHERE_INITIAL_SCALE));
}

#[test]
fn spheres_are_nested() {
    assert_eq!(SPHERE_RADII.len(), SPHERE_COLORS.len());
    assert!(SPHERE_RADII.windows(2).all(|w| w[0] < w[1]));
    for c in SPHERE_COLORS {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn label_canvas_matches_panel_aspect() {
    let canvas = LABEL_CANVAS_WIDTH as f32 / LABEL_CANVAS_HEIGHT as f32;
    let panel = PANEL_WIDTH / PANEL_HEIGHT;
    assert!((canvas - panel).abs() < 1e-6);
    assert!(LABEL_TEXT_ORIGIN[0] < LABEL_CANVAS_WIDTH as f64);
    assert!(LABEL_TEXT_ORIGIN[1] < LABEL_CANVAS_HEIGHT as f64);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_and_camera_ranges_are_consistent() {
    assert!(ANIMATION_TICK_MS < ANIMATION_DURATION_MS);
    assert!(ORBIT_MIN_DISTANCE < CAMERA_Z && CAMERA_Z < ORBIT_MAX_DISTANCE);
    assert!(CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(ORBIT_DAMPING_FACTOR > 0.0 && ORBIT_DAMPING_FACTOR <= 1.0);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);
}

#[test]
fn animation_config_defaults_come_from_constants() {
    let cfg = AnimationConfig::default();
    assert_eq!(cfg.duration.as_millis() as u64, ANIMATION_DURATION_MS);
    assert_eq!(cfg.tick_interval.as_millis() as u64, ANIMATION_TICK_MS);
    assert_eq!(cfg.open_scale, OPEN_SCALE);
    assert_eq!(cfg.closed_scale, CLOSED_SCALE);
    assert_eq!(cfg.open_threshold, OPEN_THRESHOLD);
}
