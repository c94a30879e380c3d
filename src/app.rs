//! Native application implementing winit ApplicationHandler
//!
//! Runs the game loop: exactly one simulation tick and one render per
//! frame, capped at [`crate::consts::TARGET_FPS`].

use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

use crate::platform::{FrameLimiter, KeyboardState};
use crate::renderer::{DrawList, RenderError, RenderState, draw_game};
use crate::settings::Settings;
use crate::sim::{GameState, Side, tick};

pub const WINDOW_TITLE: &str = "Ray Pong";

pub struct PongApp {
    // Core state
    pub state: GameState,
    pub settings: Settings,

    // Systems
    keyboard: KeyboardState,
    limiter: FrameLimiter,
    /// Set when the limiter lets a frame through; consumed by the next redraw
    frame_due: bool,

    // Rendering
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    draw_list: DrawList,

    /// Fatal error that ended the loop
    error: Option<RenderError>,
}

impl PongApp {
    pub fn new(settings: Settings, seed: u64) -> Self {
        let state = GameState::new(seed);
        log::info!("Game initialized with seed: {}", state.seed);

        Self {
            state,
            limiter: FrameLimiter::default(),
            settings,
            keyboard: KeyboardState::new(),
            frame_due: false,
            window: None,
            render_state: None,
            draw_list: DrawList::new(),
            error: None,
        }
    }

    /// Fatal error recorded while running, if any
    pub fn take_error(&mut self) -> Option<RenderError> {
        self.error.take()
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RenderError> {
        let bounds = self.state.bounds;
        let mut window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(bounds.width as u32, bounds.height as u32));

        if self.settings.fullscreen {
            window_attrs = window_attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| RenderError::WindowCreation(e.to_string()))?,
        );
        log::info!("Window created ({}x{})", bounds.width, bounds.height);

        let render_state =
            pollster::block_on(RenderState::new(window.clone(), bounds, &self.settings))?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: RenderError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    /// Advance the simulation if a frame is due, then draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame_due {
            self.frame_due = false;
            let report = tick(&mut self.state, &self.keyboard.tick_input());
            if let Some(side) = report.scored {
                log::info!(
                    "{:?} scores: {} - {}",
                    side,
                    self.state.score.get(Side::Opponent),
                    self.state.score.get(Side::Player)
                );
            }
        }

        draw_game(&self.state, &mut self.draw_list);

        let Some(render_state) = &mut self.render_state else {
            return;
        };
        match render_state.render(&self.draw_list) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => log::warn!("Surface timeout, skipping frame"),
            Err(e) => self.fail(event_loop, e.into()),
        }
    }
}

impl ApplicationHandler for PongApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.initialize(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(new_size.width, new_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                self.keyboard.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if key_code == KeyCode::Escape && event.state == ElementState::Pressed {
                        event_loop.exit();
                        return;
                    }
                    self.keyboard.process_key(key_code, event.state);
                }
            }

            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.limiter.poll(Instant::now()) {
            self.frame_due = true;
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        if let Some(deadline) = self.limiter.deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!(
            "Shutting down after {} ticks (final score {} - {})",
            self.state.time_ticks,
            self.state.score.get(Side::Opponent),
            self.state.score.get(Side::Player)
        );
        // Release GPU resources while the window is still alive
        self.render_state = None;
        self.window = None;
    }
}
