//! Top-level application context shared by the web and native front-ends.
//!
//! `MenuApp` owns the scene, camera, orbit controls and interaction controller;
//! platform code forwards input events and calls [`MenuApp::frame`] once per
//! display refresh.

use crate::camera::{Camera, OrbitControls, Viewport};
use crate::config::MenuConfig;
use crate::constants::CLICK_DRAG_TOLERANCE_PX;
use crate::draw::FrameSnapshot;
use crate::error::MenuError;
use crate::interaction::{AnimationEvent, ClickOutcome, InteractionController, Notifier};
use crate::label::LabelRasterizer;
use crate::layout::build_scene;
use crate::scene::SceneContext;
use instant::Instant;
use smallvec::SmallVec;

pub struct MenuApp {
    pub config: MenuConfig,
    pub scene: SceneContext,
    pub camera: Camera,
    pub controls: OrbitControls,
    pub controller: InteractionController,
    viewport: Viewport,
    gesture: Option<Gesture>,
}

#[derive(Clone, Copy, Debug)]
struct Gesture {
    last: (f32, f32),
    travel: f32,
}

impl MenuApp {
    pub fn init(
        config: MenuConfig,
        rasterizer: &mut dyn LabelRasterizer,
        viewport: Viewport,
    ) -> Result<Self, MenuError> {
        let scene = build_scene(&config, rasterizer)?;
        let camera = Camera::new(viewport.aspect());
        let controls = OrbitControls::new(&camera);
        let controller = InteractionController::new(&config);
        log::info!(
            "[app] init viewport={}x{} spheres={} panels={}",
            viewport.width,
            viewport.height,
            scene.spheres().len(),
            scene.panels().len()
        );
        Ok(Self {
            config,
            scene,
            camera,
            controls,
            controller,
            viewport,
            gesture: None,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// New render surface size; the camera aspect follows it exactly.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.camera.set_viewport(self.viewport);
        log::debug!("[app] resize {}x{} aspect={:.3}", width, height, self.camera.aspect);
    }

    /// Pointer click at pixel `(px, py)` relative to the render surface.
    pub fn click(
        &mut self,
        px: f32,
        py: f32,
        now: Instant,
        notifier: &mut dyn Notifier,
    ) -> Option<ClickOutcome> {
        let ndc = self.viewport.to_ndc(px, py);
        let ray = self.camera.ray_from_ndc(ndc);
        self.controller.on_click(&mut self.scene, &ray, now, notifier)
    }

    /// Primary button pressed at `(px, py)`: starts a potential click or orbit drag.
    pub fn pointer_down(&mut self, px: f32, py: f32) {
        self.gesture = Some(Gesture {
            last: (px, py),
            travel: 0.0,
        });
    }

    /// Pointer moved; while the button is held this orbits the camera.
    pub fn pointer_move(&mut self, px: f32, py: f32) {
        let Some(g) = self.gesture.as_mut() else {
            return;
        };
        let (dx, dy) = (px - g.last.0, py - g.last.1);
        g.travel += (dx * dx + dy * dy).sqrt();
        g.last = (px, py);
        self.controls.rotate_by_pixels(dx, dy, self.viewport);
    }

    /// Button released. A press that barely moved counts as a click on the panel
    /// under the pointer; a real drag only orbits.
    pub fn pointer_up(
        &mut self,
        px: f32,
        py: f32,
        now: Instant,
        notifier: &mut dyn Notifier,
    ) -> Option<ClickOutcome> {
        let g = self.gesture.take()?;
        if g.travel > CLICK_DRAG_TOLERANCE_PX {
            return None;
        }
        self.click(px, py, now, notifier)
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.controls.zoom_by_wheel(delta_y);
    }

    /// Per-frame step: orbit damping, animation ticks, draw data.
    pub fn frame(&mut self, now: Instant) -> (FrameSnapshot, SmallVec<[AnimationEvent; 4]>) {
        self.controls.update(&mut self.camera);
        let events = self.controller.tick(&mut self.scene, now);
        let snapshot = FrameSnapshot::capture(&self.scene, self.camera.view_proj());
        (snapshot, events)
    }

    /// Drop in-flight animations and release the scene.
    pub fn teardown(&mut self) {
        self.scene.clear();
        self.gesture = None;
        log::info!("[app] teardown");
    }
}
