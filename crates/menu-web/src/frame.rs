use instant::Instant;
use menu_core::{AnimationEvent, MenuApp};
use menu_render::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: Rc<RefCell<MenuApp>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<Renderer<'static>>,
}

impl FrameContext {
    /// One display refresh: orbit damping, animation ticks and the draw call
    /// all run here, so animations need no timer of their own.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let (snapshot, events) = self.app.borrow_mut().frame(now);
        for ev in &events {
            if let AnimationEvent::Stale(s) = ev {
                log::debug!("[frame] dropped stale animation on sphere {}", s.0);
            }
        }

        if let Some(g) = &mut self.gpu {
            g.resize(self.canvas.width(), self.canvas.height());
            match g.render(&snapshot) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<Renderer<'static>> {
    let instance = wgpu::Instance::default();
    let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
        Ok(s) => s,
        Err(e) => {
            log::error!("WebGPU surface error: {:?}", e);
            return None;
        }
    };
    match Renderer::new(&instance, surface, canvas.width(), canvas.height()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
