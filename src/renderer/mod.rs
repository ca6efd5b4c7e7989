//! wgpu-based renderer for Grid Snake.
//!
//! The board and HUD are painted by egui; this module owns the surface,
//! clears it to the board background and hands the frame to an egui
//! callback. It reads `BoardScene` snapshots and never mutates the game.

pub mod gpu;
pub mod metrics;
pub mod palette;
pub mod scene;

use std::sync::Arc;
use winit::window::Window;

use crate::core::error::Result;
use gpu::GpuContext;

/// Main renderer struct.
pub struct Renderer {
    ctx: GpuContext,
    clear_color: wgpu::Color,
    metrics: RenderMetrics,
}

impl Renderer {
    /// Create a new renderer for the given window.
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let ctx = GpuContext::new(window).await?;
        Ok(Self {
            ctx,
            clear_color: palette::BACKGROUND.to_wgpu(),
            metrics: RenderMetrics::new(),
        })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.ctx.device
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.ctx.format()
    }

    /// Handle window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.ctx.resize(width, height);
    }

    /// Get current surface size.
    pub fn size(&self) -> (u32, u32) {
        self.ctx.size()
    }

    pub fn metrics(&self) -> &RenderMetrics {
        &self.metrics
    }

    /// Clear the surface and let `paint` record the egui pass on top.
    pub fn render_with_egui<F>(&mut self, paint: F) -> std::result::Result<(), wgpu::SurfaceError>
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        self.metrics.begin_frame();

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let _clear_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        paint(&self.ctx.device, &self.ctx.queue, &mut encoder, &view);

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        self.metrics.end_frame();
        Ok(())
    }
}

// Re-export commonly used types
pub use metrics::RenderMetrics;
pub use palette::Color;
pub use scene::{BoardLayout, BoardScene, CellQuad, Overlay, PieceKind, Segment};
