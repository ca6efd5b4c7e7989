//! Window and event loop.
//!
//! Single-threaded and timer driven: the loop sleeps until the tick
//! deadline, advances the game one step, requests a redraw and schedules
//! the next deadline from the game's current interval. Key presses are
//! handled between ticks.

use std::sync::Arc;
use std::time::Instant;

use egui_wgpu::ScreenDescriptor;
use egui_winit::State as EguiWinitState;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::game::{Game, TickClock, TickOutcome};
use crate::renderer::{BoardLayout, Renderer};
use crate::ui::{self, Action};

/// Log average frame time every this many frames
const METRICS_LOG_EVERY: u64 = 600;

/// Everything needed to paint a frame
struct Frame {
    window: Arc<Window>,
    renderer: Renderer,
    egui_ctx: egui::Context,
    egui_state: EguiWinitState,
    egui_renderer: egui_wgpu::Renderer,
    layout: BoardLayout,
    hud_height: f32,
}

impl Frame {
    fn redraw(&mut self, game: &Game) -> std::result::Result<(), wgpu::SurfaceError> {
        let scene = self.layout.scene(game);
        let status = ui::status_line(game);

        let raw_input = self.egui_state.take_egui_input(&self.window);
        self.egui_ctx.begin_frame(raw_input);
        ui::board::draw(&self.egui_ctx, &scene, &status, self.hud_height);
        let full_output = self.egui_ctx.end_frame();

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);
        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let (width, height) = self.renderer.size();
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let egui_renderer = &mut self.egui_renderer;
        let textures_delta = full_output.textures_delta;
        self.renderer.render_with_egui(|device, queue, encoder, view| {
            for (id, image_delta) in &textures_delta.set {
                egui_renderer.update_texture(device, queue, *id, image_delta);
            }

            egui_renderer.update_buffers(device, queue, encoder, &paint_jobs, &screen_descriptor);

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep the cleared background
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
                egui_renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }
        })?;

        let metrics = self.renderer.metrics();
        if metrics.frames % METRICS_LOG_EVERY == 0 {
            tracing::debug!(
                frames = metrics.frames,
                avg_ms = metrics.avg_frame_time_ms(),
                last_ms = metrics.last_frame_time_ms(),
                "Frame timing"
            );
        }
        Ok(())
    }
}

/// Open the window and play until it is closed
pub fn run(config: GameConfig) -> Result<()> {
    let mut game = Game::new(config)?;
    let config = game.config().clone();
    let (window_width, window_height) = config.window_size_px();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(ui::window_title(&game))
            .with_inner_size(LogicalSize::new(window_width, window_height))
            .with_resizable(false)
            .build(&event_loop)?,
    );

    let renderer = pollster::block_on(Renderer::new(window.clone()))?;

    let egui_ctx = egui::Context::default();
    let egui_state = EguiWinitState::new(
        egui_ctx.clone(),
        egui::ViewportId::ROOT,
        &window,
        None,
        None,
    );
    let egui_renderer =
        egui_wgpu::Renderer::new(renderer.device(), renderer.surface_format(), None, 1);

    let mut frame = Frame {
        window: window.clone(),
        renderer,
        egui_ctx,
        egui_state,
        egui_renderer,
        layout: BoardLayout::new(game.grid(), config.cell_size),
        hud_height: config.hud_height as f32,
    };

    tracing::info!(
        width = config.grid_width,
        height = config.grid_height,
        interval_ms = config.speed_start_ms,
        "Game started"
    );

    let mut clock = TickClock::start(Instant::now(), game.tick_interval());

    event_loop.run(move |event, elwt| match event {
        Event::NewEvents(StartCause::Init) => window.request_redraw(),

        Event::WindowEvent { ref event, .. } => {
            let egui_consumed = frame.egui_state.on_window_event(&window, event).consumed;

            match event {
                WindowEvent::CloseRequested => elwt.exit(),

                WindowEvent::Resized(size) => {
                    frame.renderer.resize(size.width, size.height);
                    window.request_redraw();
                }

                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } if !egui_consumed && key_event.state == ElementState::Pressed => {
                    let PhysicalKey::Code(code) = key_event.physical_key else {
                        return;
                    };
                    let Some(action) = Action::from_key(code) else {
                        return;
                    };
                    // Held arrows may repeat; pause and restart fire once per press
                    if key_event.repeat && !matches!(action, Action::Move(_)) {
                        return;
                    }

                    match action {
                        Action::Quit => elwt.exit(),
                        Action::Restart => {
                            action.apply(&mut game);
                            clock.reschedule(Instant::now(), game.tick_interval());
                            window.set_title(&ui::window_title(&game));
                            window.request_redraw();
                        }
                        _ => {
                            if action.apply(&mut game) {
                                window.request_redraw();
                            }
                        }
                    }
                }

                WindowEvent::RedrawRequested => match frame.redraw(&game) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let (w, h) = frame.renderer.size();
                        frame.renderer.resize(w, h);
                        window.request_redraw();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        tracing::error!("Out of GPU memory!");
                        elwt.exit();
                    }
                    Err(e) => {
                        tracing::warn!("Render error: {:?}", e);
                    }
                },

                _ => {}
            }
        }

        Event::AboutToWait => {
            let now = Instant::now();
            if clock.due(now) {
                let outcome = game.tick();
                if outcome.changed_board() {
                    window.request_redraw();
                }
                if let TickOutcome::Ate { sped_up: true, .. } = outcome {
                    tracing::info!(
                        score = game.score(),
                        interval_ms = game.tick_interval().as_millis() as u64,
                        "Speed up"
                    );
                }
                if matches!(outcome, TickOutcome::Ate { .. } | TickOutcome::Ended(_)) {
                    window.set_title(&ui::window_title(&game));
                }
                clock.reschedule(now, game.tick_interval());
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(clock.deadline()));
        }

        _ => {}
    })?;

    Ok(())
}
