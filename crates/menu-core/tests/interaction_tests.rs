// Host-side tests for picking and the open/close state machine.

mod common;

use common::*;
use glam::Vec3;
use instant::Instant;
use menu_core::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn panels_visible(scene: &SceneContext, sphere: usize) -> Vec<bool> {
    scene.panels_of(SphereId(sphere)).map(|p| p.visible).collect()
}

#[test]
fn clicking_a_closed_sphere_opens_it() {
    let config = config_with_scales([CLOSED_SCALE, 1.0, 1.0]);
    let mut scene = build(&config);
    let controller = InteractionController::new(&config);
    let t0 = Instant::now();

    let mut seen = Vec::new();
    let ray = ray_from_eye(&scene, "SDXL");
    let outcome = controller
        .on_click(&mut scene, &ray, t0, &mut |l: &str| seen.push(l.to_string()))
        .expect("hidden panel is still pickable");
    assert_eq!(outcome.sphere, SphereId(0));
    assert_eq!(outcome.label, "SDXL");
    assert_eq!(outcome.direction, Direction::Open);
    assert_eq!(seen, ["SDXL"]);
    assert_eq!(scene.state(SphereId(0)), Some(SphereState::Animating));

    // First tick sits at the start scale; an opening sphere at 0.1 must not settle.
    assert!(controller.tick(&mut scene, t0).is_empty());
    assert_eq!(scene.sphere(SphereId(0)).unwrap().scale(), CLOSED_SCALE);
    assert_eq!(panels_visible(&scene, 0), [false]);

    let events = controller.tick(&mut scene, t0 + ms(250));
    assert_eq!(events.as_slice(), [AnimationEvent::PanelsShown(SphereId(0))]);
    assert!(approx(scene.sphere(SphereId(0)).unwrap().scale(), 1.05));
    assert_eq!(panels_visible(&scene, 0), [true]);

    let events = controller.tick(&mut scene, t0 + ms(500));
    assert_eq!(
        events.as_slice(),
        [AnimationEvent::Finished(SphereId(0), SphereState::Open)]
    );
    assert_eq!(scene.sphere(SphereId(0)).unwrap().scale(), OPEN_SCALE);
    assert_eq!(scene.state(SphereId(0)), Some(SphereState::Open));
}

#[test]
fn clicking_an_open_sphere_closes_it_and_hides_panels() {
    let config = config_with_scales([OPEN_SCALE, 1.0, 1.0]);
    let mut scene = build(&config);
    let controller = InteractionController::new(&config);
    let t0 = Instant::now();

    let ray = ray_from_eye(&scene, "SDXL");
    let outcome = controller
        .on_click(&mut scene, &ray, t0, &mut |_: &str| {})
        .unwrap();
    assert_eq!(outcome.direction, Direction::Close);

    assert!(controller.tick(&mut scene, t0 + ms(250)).is_empty());
    assert_eq!(panels_visible(&scene, 0), [true]);

    let events = controller.tick(&mut scene, t0 + ms(500));
    assert_eq!(
        events.as_slice(),
        [
            AnimationEvent::PanelsHidden(SphereId(0)),
            AnimationEvent::Finished(SphereId(0), SphereState::Closed),
        ]
    );
    assert_eq!(scene.sphere(SphereId(0)).unwrap().scale(), CLOSED_SCALE);
    assert_eq!(panels_visible(&scene, 0), [false]);

    // Settled: later ticks do nothing.
    assert!(controller.tick(&mut scene, t0 + ms(600)).is_empty());
    assert!(!scene.sphere(SphereId(0)).unwrap().is_animating());
}

#[test]
fn scale_of_exactly_one_toggles_open() {
    let config = MenuConfig::default();
    let mut scene = build(&config);
    let controller = InteractionController::new(&config);
    let ray = ray_from_eye(&scene, "Prompt Builder");
    let outcome = controller
        .on_click(&mut scene, &ray, Instant::now(), &mut |_: &str| {})
        .unwrap();
    assert_eq!(outcome.sphere, SphereId(1));
    assert_eq!(outcome.direction, Direction::Open);
}

#[test]
fn closing_a_closed_sphere_is_idempotent() {
    let config = config_with_scales([CLOSED_SCALE, 1.0, 1.0]);
    let mut scene = build(&config);
    let controller = InteractionController::new(&config);
    let t0 = Instant::now();

    controller.close(&mut scene, SphereId(0), t0).unwrap();
    let events = controller.tick(&mut scene, t0);
    assert_eq!(
        events.as_slice(),
        [AnimationEvent::Finished(SphereId(0), SphereState::Closed)]
    );
    assert_eq!(scene.sphere(SphereId(0)).unwrap().scale(), CLOSED_SCALE);
    assert_eq!(panels_visible(&scene, 0), [false]);
}

#[test]
fn restarting_mid_flight_continues_from_the_current_scale() {
    let config = config_with_scales([CLOSED_SCALE, 1.0, 1.0]);
    let mut scene = build(&config);
    let controller = InteractionController::new(&config);
    let t0 = Instant::now();

    let first = controller.open(&mut scene, SphereId(0), t0).unwrap();
    controller.tick(&mut scene, t0 + ms(100));
    let mid = scene.sphere(SphereId(0)).unwrap().scale();
    assert!(approx(mid, 0.48));

    let second = controller
        .close(&mut scene, SphereId(0), t0 + ms(100))
        .unwrap();
    assert!(second > first);
    let sphere = scene.sphere(SphereId(0)).unwrap();
    let anim = sphere.animation().unwrap();
    assert_eq!(anim.token, sphere.token());
    assert_eq!(anim.direction, Direction::Close);
    assert_eq!(anim.start_scale, mid);

    controller.tick(&mut scene, t0 + ms(350));
    let s = scene.sphere(SphereId(0)).unwrap().scale();
    assert!(s < mid && s > CLOSED_SCALE);

    let events = controller.tick(&mut scene, t0 + ms(600));
    assert!(events.contains(&AnimationEvent::Finished(SphereId(0), SphereState::Closed)));
}

#[test]
fn direct_scale_change_invalidates_the_running_animation() {
    let config = config_with_scales([CLOSED_SCALE, 1.0, 1.0]);
    let mut scene = build(&config);
    let controller = InteractionController::new(&config);
    let t0 = Instant::now();

    controller.open(&mut scene, SphereId(0), t0).unwrap();
    scene.set_sphere_scale(SphereId(0), OPEN_SCALE);
    assert_eq!(scene.state(SphereId(0)), Some(SphereState::Open));
    assert_eq!(panels_visible(&scene, 0), [true]);

    let events = controller.tick(&mut scene, t0 + ms(100));
    assert_eq!(events.as_slice(), [AnimationEvent::Stale(SphereId(0))]);
    let sphere = scene.sphere(SphereId(0)).unwrap();
    assert!(sphere.animation().is_none());
    assert_eq!(sphere.scale(), OPEN_SCALE);
}

#[test]
fn ticks_closer_than_the_interval_are_skipped() {
    let config = config_with_scales([CLOSED_SCALE, 1.0, 1.0]);
    let mut scene = build(&config);
    let controller = InteractionController::new(&config);
    let t0 = Instant::now();

    controller.open(&mut scene, SphereId(0), t0).unwrap();
    controller.tick(&mut scene, t0 + ms(100));
    let before = scene.sphere(SphereId(0)).unwrap().scale();
    controller.tick(&mut scene, t0 + ms(105));
    assert_eq!(scene.sphere(SphereId(0)).unwrap().scale(), before);
}

#[test]
fn other_spheres_are_untouched() {
    let config = config_with_scales([CLOSED_SCALE, 1.0, OPEN_SCALE]);
    let mut scene = build(&config);
    let controller = InteractionController::new(&config);
    let t0 = Instant::now();

    let ray = ray_from_eye(&scene, "SDXL");
    controller.on_click(&mut scene, &ray, t0, &mut |_: &str| {});
    controller.tick(&mut scene, t0 + ms(500));
    assert_eq!(scene.sphere(SphereId(1)).unwrap().scale(), 1.0);
    assert_eq!(scene.sphere(SphereId(2)).unwrap().scale(), OPEN_SCALE);
    assert!(!scene.sphere(SphereId(1)).unwrap().is_animating());
}

#[test]
fn a_miss_changes_nothing() {
    let config = MenuConfig::default();
    let mut scene = build(&config);
    let controller = InteractionController::new(&config);
    let mut calls = 0;
    let ray = Ray::new(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::NEG_Z);
    let outcome = controller.on_click(&mut scene, &ray, Instant::now(), &mut |_: &str| calls += 1);
    assert!(outcome.is_none());
    assert_eq!(calls, 0);
    assert!(scene.spheres().iter().all(|s| !s.is_animating()));
}

#[test]
fn nearest_panel_along_the_ray_wins() {
    let scene = build(&MenuConfig::default());
    let ray = Ray::new(Vec3::new(4.0, 0.0, 0.0), Vec3::NEG_X);
    let hit = pick_panel(&scene, &ray, false).unwrap();
    assert_eq!(scene.panel(hit.panel).unwrap().label, "Stable Diffusion v2.1");
    assert!(approx(hit.distance, 2.0));

    let ray = Ray::new(Vec3::new(-4.0, 0.0, 0.0), Vec3::X);
    let hit = pick_panel(&scene, &ray, false).unwrap();
    assert_eq!(scene.panel(hit.panel).unwrap().label, "Prompt Builder");
    assert_eq!(hit.sphere, SphereId(1));
    assert!(approx(hit.distance, 2.5));
}

#[test]
fn hidden_panels_are_only_hit_when_requested() {
    let scene = build(&config_with_scales([CLOSED_SCALE; 3]));
    let ray = Ray::new(Vec3::new(4.0, 0.0, 0.0), Vec3::NEG_X);
    assert!(pick_panel(&scene, &ray, false).is_none());
    let hit = pick_panel(&scene, &ray, true).unwrap();
    assert_eq!(scene.panel(hit.panel).unwrap().label, "Stable Diffusion v2.1");
    assert!(approx(hit.distance, 3.8));
}

#[test]
fn notification_text_names_the_label() {
    assert_eq!(notification_text("LORA"), "Clicked on LORA");
}
