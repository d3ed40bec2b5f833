//! Click handling and the per-sphere open/close state machine.

use crate::animation::{AnimationToken, Direction, ScaleAnimation};
use crate::config::{AnimationConfig, MenuConfig};
use crate::constants::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::geometry::{ray_quad, Ray};
use crate::scene::{PanelId, SceneContext, SphereId, SphereState};
use instant::Instant;
use smallvec::SmallVec;

/// Receives the "clicked on <label>" notification. Fire-and-forget.
pub trait Notifier {
    fn notify(&mut self, label: &str);
}

impl<F: FnMut(&str)> Notifier for F {
    fn notify(&mut self, label: &str) {
        self(label)
    }
}

pub fn notification_text(label: &str) -> String {
    format!("Clicked on {label}")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelHit {
    pub panel: PanelId,
    pub sphere: SphereId,
    pub distance: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClickOutcome {
    pub panel: PanelId,
    pub sphere: SphereId,
    pub label: String,
    pub direction: Direction,
    pub token: AnimationToken,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationEvent {
    PanelsShown(SphereId),
    PanelsHidden(SphereId),
    Finished(SphereId, SphereState),
    Stale(SphereId),
}

/// Nearest panel along `ray` across every sphere.
pub fn pick_panel(scene: &SceneContext, ray: &Ray, include_hidden: bool) -> Option<PanelHit> {
    let mut best: Option<PanelHit> = None;
    for panel in scene.panels() {
        if !panel.visible && !include_hidden {
            continue;
        }
        let xf = scene.panel_world_transform(panel);
        if let Some(t) = ray_quad(ray, &xf, PANEL_WIDTH, PANEL_HEIGHT) {
            match best {
                Some(b) if t >= b.distance => {}
                _ => {
                    best = Some(PanelHit {
                        panel: panel.id,
                        sphere: panel.sphere,
                        distance: t,
                    })
                }
            }
        }
    }
    best
}

#[derive(Clone, Debug)]
pub struct InteractionController {
    animation: AnimationConfig,
    pick_hidden: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&MenuConfig::default())
    }
}

impl InteractionController {
    pub fn new(config: &MenuConfig) -> Self {
        Self {
            animation: config.animation.clone(),
            pick_hidden: config.pick_hidden_panels,
        }
    }

    /// Hit-test `ray` and toggle the owning sphere of the nearest panel.
    ///
    /// A sphere with scale above 1 closes, anything else opens. Misses are no-ops.
    pub fn on_click(
        &self,
        scene: &mut SceneContext,
        ray: &Ray,
        now: Instant,
        notifier: &mut dyn Notifier,
    ) -> Option<ClickOutcome> {
        let hit = pick_panel(scene, ray, self.pick_hidden)?;
        let scale = scene.sphere(hit.sphere)?.scale();
        let direction = if scale > self.animation.open_threshold {
            Direction::Close
        } else {
            Direction::Open
        };
        let token = self.start_animation(scene, hit.sphere, direction, now)?;
        let label = scene.panel(hit.panel)?.label.clone();
        log::info!(
            "[click] {:?} on sphere {} at t={:.2}: {:?} from scale {:.2}",
            label,
            hit.sphere.0,
            hit.distance,
            direction,
            scale
        );
        notifier.notify(&label);
        Some(ClickOutcome {
            panel: hit.panel,
            sphere: hit.sphere,
            label,
            direction,
            token,
        })
    }

    pub fn open(&self, scene: &mut SceneContext, sphere: SphereId, now: Instant) -> Option<AnimationToken> {
        self.start_animation(scene, sphere, Direction::Open, now)
    }

    pub fn close(&self, scene: &mut SceneContext, sphere: SphereId, now: Instant) -> Option<AnimationToken> {
        self.start_animation(scene, sphere, Direction::Close, now)
    }

    /// Replace the sphere's animation slot. The previous animation, if any, is
    /// invalidated by the token bump.
    pub fn start_animation(
        &self,
        scene: &mut SceneContext,
        sphere: SphereId,
        direction: Direction,
        now: Instant,
    ) -> Option<AnimationToken> {
        let s = scene.spheres.get_mut(sphere.0)?;
        let target = match direction {
            Direction::Open => self.animation.open_scale,
            Direction::Close => self.animation.closed_scale,
        };
        if s.animation.is_some() {
            log::debug!("[anim] sphere {} restarted mid-flight", sphere.0);
        }
        s.token = s.token.next();
        s.animation = Some(ScaleAnimation::new(
            s.token,
            direction,
            now,
            s.scale,
            target,
            self.animation.duration,
            self.animation.tick_interval,
        ));
        Some(s.token)
    }

    /// Advance every in-flight animation to `now`. Called once per frame.
    pub fn tick(&self, scene: &mut SceneContext, now: Instant) -> SmallVec<[AnimationEvent; 4]> {
        let cfg = &self.animation;
        let mut events = SmallVec::new();
        for i in 0..scene.spheres.len() {
            let id = SphereId(i);
            let mut visibility = None;
            {
                let sphere = &mut scene.spheres[i];
                let Some(anim) = sphere.animation.as_mut() else {
                    continue;
                };
                if anim.token != sphere.token {
                    sphere.animation = None;
                    events.push(AnimationEvent::Stale(id));
                    continue;
                }
                if !anim.accept_tick(now) {
                    continue;
                }
                let progress = anim.progress(now);
                let mut scale = anim
                    .scale_at(progress)
                    .clamp(cfg.closed_scale, cfg.open_scale);
                let mut done = progress >= 1.0;
                if scale >= cfg.open_threshold {
                    visibility = Some(true);
                } else if scale <= cfg.closed_scale && anim.direction == Direction::Close {
                    scale = cfg.closed_scale;
                    visibility = Some(false);
                    done = true;
                }
                sphere.scale = scale;
                log::trace!("[anim] sphere {} progress={:.3} scale={:.3}", i, progress, scale);
                if done {
                    sphere.animation = None;
                }
            }
            if let Some(visible) = visibility {
                let changed = scene
                    .panels_of(id)
                    .any(|p| p.visible != visible);
                scene.set_panels_visible(id, visible);
                if changed {
                    events.push(if visible {
                        AnimationEvent::PanelsShown(id)
                    } else {
                        AnimationEvent::PanelsHidden(id)
                    });
                }
            }
            if !scene.spheres[i].is_animating() {
                if let Some(state) = scene.state(id) {
                    log::info!(
                        "[anim] sphere {} settled {:?} at scale {:.2}",
                        i,
                        state,
                        scene.spheres[i].scale
                    );
                    events.push(AnimationEvent::Finished(id, state));
                }
            }
        }
        events
    }
}
