use crate::dom;
use crate::input;
use instant::Instant;
use menu_core::{notification_text, MenuApp};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub app: Rc<RefCell<MenuApp>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("failed to add {} listener: {:?}", event, e);
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let pos = input::event_canvas_px(&ev, &w2.canvas);
        _ = w2.canvas.set_pointer_capture(ev.pointer_id());
        w2.app.borrow_mut().pointer_down(pos.x, pos.y);
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::event_canvas_px(&ev, &w2.canvas);
        w2.app.borrow_mut().pointer_move(pos.x, pos.y);
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointerup", move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let pos = input::event_canvas_px(&ev, &w2.canvas);
        _ = w2.canvas.release_pointer_capture(ev.pointer_id());
        let mut clicked: Option<String> = None;
        let outcome = w2.app.borrow_mut().pointer_up(
            pos.x,
            pos.y,
            Instant::now(),
            &mut |label: &str| clicked = Some(label.to_string()),
        );
        if outcome.is_some() {
            ev.prevent_default();
        }
        // Alert only after the app borrow is released; it blocks the event loop.
        if let Some(label) = clicked {
            dom::alert(&notification_text(&label));
        }
    });
}

fn wire_wheel(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        w2.app.borrow_mut().wheel(input::wheel_direction(&ev));
    });
}

/// Keep the canvas backing store and the camera aspect in step with the window.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, app: Rc<RefCell<MenuApp>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas_resize = canvas.clone();
    listen(&window, "resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas_resize);
        app.borrow_mut()
            .resize(canvas_resize.width(), canvas_resize.height());
    });
}
