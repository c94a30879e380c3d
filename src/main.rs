//! Ray Pong entry point
//!
//! Loads settings, seeds the simulation and runs the native event loop.

use anyhow::{Context, Result};
use ray_pong::{PongApp, Settings};
use winit::event_loop::EventLoop;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Ray Pong starting...");

    let settings = Settings::load();
    let seed = settings.resolve_seed();

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = PongApp::new(settings, seed);
    event_loop
        .run_app(&mut app)
        .context("Event loop terminated abnormally")?;

    if let Some(error) = app.take_error() {
        return Err(error).context("Fatal rendering error");
    }

    log::info!("Ray Pong exited cleanly");
    Ok(())
}
