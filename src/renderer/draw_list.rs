//! Triangle list built from canvas draw calls

use glam::Vec2;

use super::vertex::{Color, Vertex, colors};
use super::{Canvas, shapes, text};
use crate::sim::Rect;

/// Segments used for circles
const CIRCLE_SEGMENTS: u32 = 48;
/// Stroke width for lines
const LINE_THICKNESS: f32 = 1.0;

/// Collects one frame's geometry in field coordinates
#[derive(Debug, Clone)]
pub struct DrawList {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            vertices: Vec::new(),
        }
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.vertices.extend(shapes::rect(&rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.vertices
            .extend(shapes::line(from, to, LINE_THICKNESS, color));
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        for rect in text::layout(text, pos, size) {
            self.fill_rect(rect, color);
        }
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text::measure(text, size)
    }
}
