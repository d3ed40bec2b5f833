// Host-side tests for the scale animation primitive.

use instant::Instant;
use menu_core::{AnimationToken, Direction, ScaleAnimation};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn opening(start: Instant) -> ScaleAnimation {
    ScaleAnimation::new(
        AnimationToken::default().next(),
        Direction::Open,
        start,
        0.1,
        2.0,
        ms(500),
        ms(16),
    )
}

#[test]
fn progress_is_clamped_to_one() {
    let t0 = Instant::now();
    let anim = opening(t0);
    assert_eq!(anim.progress(t0), 0.0);
    assert!((anim.progress(t0 + ms(250)) - 0.5).abs() < 1e-4);
    assert_eq!(anim.progress(t0 + ms(500)), 1.0);
    assert_eq!(anim.progress(t0 + ms(5_000)), 1.0);
}

#[test]
fn zero_duration_completes_immediately() {
    let t0 = Instant::now();
    let mut anim = opening(t0);
    anim.duration = Duration::ZERO;
    assert_eq!(anim.progress(t0), 1.0);
    assert_eq!(anim.scale_at(anim.progress(t0)), 2.0);
}

#[test]
fn scale_interpolates_from_captured_start() {
    let anim = opening(Instant::now());
    assert_eq!(anim.scale_at(0.0), 0.1);
    assert!((anim.scale_at(0.5) - 1.05).abs() < 1e-5);
    // Completion lands exactly on the target, no float drift.
    assert_eq!(anim.scale_at(1.0), 2.0);
}

#[test]
fn closing_scale_decreases_linearly() {
    let t0 = Instant::now();
    let anim = ScaleAnimation::new(
        AnimationToken::default(),
        Direction::Close,
        t0,
        2.0,
        0.1,
        ms(500),
        ms(16),
    );
    let quarter = anim.scale_at(anim.progress(t0 + ms(125)));
    assert!((quarter - 1.525).abs() < 1e-3);
    assert_eq!(anim.scale_at(anim.progress(t0 + ms(500))), 0.1);
}

#[test]
fn elapsed_before_start_is_zero() {
    let t0 = Instant::now();
    let anim = opening(t0 + ms(100));
    assert_eq!(anim.elapsed(t0), Duration::ZERO);
    assert_eq!(anim.progress(t0), 0.0);
}

#[test]
fn ticks_are_rate_limited() {
    let t0 = Instant::now();
    let mut anim = opening(t0);
    assert!(anim.accept_tick(t0), "first tick always runs");
    assert!(!anim.accept_tick(t0 + ms(5)));
    assert!(!anim.accept_tick(t0 + ms(15)));
    assert!(anim.accept_tick(t0 + ms(16)));
    assert!(!anim.accept_tick(t0 + ms(20)));
    assert!(anim.accept_tick(t0 + ms(40)));
}

#[test]
fn tokens_advance_monotonically() {
    let t = AnimationToken::default();
    assert_eq!(t.value(), 0);
    let t1 = t.next();
    let t2 = t1.next();
    assert_eq!(t1.value(), 1);
    assert!(t2 > t1);
    assert_ne!(t1, t2);
}
