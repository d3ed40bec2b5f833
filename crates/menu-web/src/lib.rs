#![cfg(target_arch = "wasm32")]
use menu_core::{MenuApp, MenuConfig, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod label;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("menu-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Canvas internal pixel size tracks CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    let viewport = Viewport::new(canvas.width(), canvas.height());

    // Labels are drawn on a separate offscreen canvas so WebGPU can own #app-canvas
    let mut rasterizer = label::CanvasLabelRasterizer::new(&document)?;
    let app = MenuApp::init(MenuConfig::default(), &mut rasterizer, viewport)?;
    let app = Rc::new(RefCell::new(app));

    let mut gpu = frame::init_gpu(&canvas).await;
    if let Some(g) = gpu.as_mut() {
        g.upload_labels(&app.borrow().scene);
    }

    events::wire_canvas_resize(&canvas, app.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        app: app.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
