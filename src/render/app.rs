//! Application window and event loop handler.
//!
//! Bridges winit events to the renderer. Everything runs on the event-loop
//! thread; each user interaction mutates the layout state within a single
//! frame, so consumers only ever see complete snapshots.

use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::render::renderer::Renderer;

pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: None,
            renderer: None,
        }
    }

    /// Runs the application event loop (blocking).
    pub fn run() {
        let event_loop = winit::event_loop::EventLoop::new().unwrap();
        event_loop.set_control_flow(winit::event_loop::ControlFlow::Poll);

        let mut app = App::new();
        let _ = event_loop.run_app(&mut app);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            log::info!("RENDER: Creating window...");
            let win_attr = winit::window::Window::default_attributes()
                .with_title("menuforge")
                .with_inner_size(winit::dpi::LogicalSize::new(1440.0, 840.0));

            let window = Arc::new(event_loop.create_window(win_attr).unwrap());
            self.window = Some(window.clone());

            log::info!("RENDER: Initializing WGPU...");
            let renderer = pollster::block_on(Renderer::new(window.clone()));
            self.renderer = Some(renderer);

            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(renderer), Some(window)) = (self.renderer.as_mut(), self.window.as_ref()) {
            renderer.handle_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("RENDER: Close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(renderer), Some(window)) =
                    (self.renderer.as_mut(), self.window.as_ref())
                {
                    match renderer.render(window) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.resize(window.inner_size());
                        }
                        Err(err) => log::error!("RENDER: Surface error: {err:?}"),
                    }
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
