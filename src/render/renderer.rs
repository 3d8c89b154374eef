//! Per-frame orchestration: layout state, editor UI, egui draw submission.

use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::event::WindowEvent;
use winit::window::Window;

use crate::export::ExportCache;
use crate::render::context::RenderContext;
use crate::render::ui::UiOverlay;
use crate::state::MenuLayout;
use crate::views::components::editor::MenuEditorLayout;

pub struct Renderer {
    pub ctx: RenderContext,
    ui: UiOverlay,
    layout: MenuLayout,
    editor: MenuEditorLayout,
    exports: ExportCache,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> Self {
        let ctx = RenderContext::new(window.clone()).await;
        let ui = UiOverlay::new(window, &ctx.device, ctx.config.format);
        let layout = MenuLayout::new();
        let exports = ExportCache::new(&layout);

        Self {
            ctx,
            ui,
            layout,
            editor: MenuEditorLayout::new(),
            exports,
        }
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.ui.handle_input(window, event)
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Main Encoder"),
            });

        self.ui.begin_frame(window);
        let ctx_egui = self.ui.ctx.clone();

        self.editor
            .show(&ctx_egui, &mut self.layout, &self.exports);

        // Coalesced export recomputation; keep frames coming while a rebuild
        // is armed so the debounce deadline is actually observed.
        self.exports.poll(&self.layout, Instant::now());
        if self.exports.pending() {
            ctx_egui.request_repaint_after(Duration::from_millis(50));
        }

        self.ui.end_frame_and_draw(&self.ctx, &mut encoder, &view);

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
