use instant::Instant;
use label::FontLabelRasterizer;
use menu_core::{notification_text, MenuApp, MenuConfig, Viewport};
use menu_render::Renderer;
use winit::{
    event::*,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

mod label;

const WINDOW_TITLE: &str = "Sphere Menu (native)";

// No blocking dialog natively: the clicked label goes to the log and title bar.
fn notify_clicked(window: &Window, label: &str) {
    let msg = notification_text(label);
    log::info!("{msg}");
    window.set_title(&format!("{WINDOW_TITLE} - {msg}"));
}

fn scroll_direction(delta: MouseScrollDelta) -> f32 {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(p) => p.y as f32,
    };
    // winit reports scroll-up as positive; the app treats positive as "move away"
    -y
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;
    let size = window.inner_size();
    let viewport = Viewport::new(size.width.max(1), size.height.max(1));

    let mut app = MenuApp::init(MenuConfig::default(), &mut FontLabelRasterizer::new()?, viewport)?;

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(&window)?;
    let mut renderer = pollster::block_on(Renderer::new(
        &instance,
        surface,
        viewport.width,
        viewport.height,
    ))?;
    renderer.upload_labels(&app.scene);

    let window = &window;
    let mut cursor = (0.0_f32, 0.0_f32);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                app.teardown();
                elwt.exit();
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    app.resize(size.width, size.height);
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = (position.x as f32, position.y as f32);
                app.pointer_move(cursor.0, cursor.1);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => app.pointer_down(cursor.0, cursor.1),
                ElementState::Released => {
                    let mut clicked: Option<String> = None;
                    app.pointer_up(
                        cursor.0,
                        cursor.1,
                        Instant::now(),
                        &mut |label: &str| clicked = Some(label.to_string()),
                    );
                    if let Some(label) = clicked {
                        notify_clicked(window, &label);
                    }
                }
            },
            WindowEvent::MouseWheel { delta, .. } => app.wheel(scroll_direction(delta)),
            WindowEvent::RedrawRequested => {
                let (snapshot, _events) = app.frame(Instant::now());
                match renderer.render(&snapshot) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        renderer.reconfigure()
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("surface out of memory");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("render error: {:?}", e),
                }
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
