//! Rendering module
//!
//! The game describes each frame through the [`Canvas`] trait. [`DrawList`]
//! turns those calls into triangles, and [`RenderState`] uploads them and
//! draws through wgpu.

pub mod draw_list;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use draw_list::DrawList;
pub use pipeline::{RenderError, RenderState};
pub use scene::draw_game;
pub use vertex::{Color, Vertex, colors};

use glam::Vec2;

use crate::sim::Rect;

/// Primitive drawing surface, in field coordinates (origin top-left, y down)
pub trait Canvas {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    /// Draw `text` with its top-left corner at `pos`
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
    /// Width `text` would occupy at `size`
    fn measure_text(&self, text: &str, size: f32) -> f32;
}
