//! Frame layout: what gets drawn where

use glam::Vec2;

use super::Canvas;
use super::vertex::colors;
use crate::consts::{SCORE_FONT_SIZE, SCORE_TOP};
use crate::sim::{GameState, Side};

/// Issue the draw calls for one frame
pub fn draw_game<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    let bounds = state.bounds;
    let mid_x = bounds.width / 2.0;

    canvas.clear(colors::BACKGROUND);
    canvas.line(
        Vec2::new(mid_x, 0.0),
        Vec2::new(mid_x, bounds.height),
        colors::FOREGROUND,
    );

    canvas.fill_circle(state.ball.pos, state.ball.radius, colors::FOREGROUND);
    canvas.fill_rect(state.player.rect(), colors::FOREGROUND);
    canvas.fill_rect(state.opponent.rect(), colors::FOREGROUND);

    // Opponent points in the left half, player points in the right half
    let quarter = bounds.width / 4.0;
    let opponent = state.score.get(Side::Opponent).to_string();
    let player = state.score.get(Side::Player).to_string();
    draw_centered_text(canvas, &opponent, quarter);
    draw_centered_text(canvas, &player, 3.0 * quarter);
}

fn draw_centered_text<C: Canvas + ?Sized>(canvas: &mut C, text: &str, center_x: f32) {
    let width = canvas.measure_text(text, SCORE_FONT_SIZE);
    canvas.text(
        text,
        Vec2::new(center_x - width / 2.0, SCORE_TOP),
        SCORE_FONT_SIZE,
        colors::FOREGROUND,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Color;
    use crate::renderer::text;
    use crate::sim::Rect;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Rect(Rect),
        Circle(Vec2, f32),
        Line(Vec2, Vec2),
        Text(String, Vec2, f32),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Canvas for Recorder {
        fn clear(&mut self, _color: Color) {
            self.calls.push(Call::Clear);
        }
        fn fill_rect(&mut self, rect: Rect, _color: Color) {
            self.calls.push(Call::Rect(rect));
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Color) {
            self.calls.push(Call::Circle(center, radius));
        }
        fn line(&mut self, from: Vec2, to: Vec2, _color: Color) {
            self.calls.push(Call::Line(from, to));
        }
        fn text(&mut self, text: &str, pos: Vec2, size: f32, _color: Color) {
            self.calls.push(Call::Text(text.to_string(), pos, size));
        }
        fn measure_text(&self, text: &str, size: f32) -> f32 {
            text::measure(text, size)
        }
    }

    #[test]
    fn test_draw_order() {
        let state = GameState::new(1);
        let mut rec = Recorder::default();
        draw_game(&state, &mut rec);

        assert_eq!(rec.calls.len(), 7);
        assert_eq!(rec.calls[0], Call::Clear);
        assert_eq!(
            rec.calls[1],
            Call::Line(Vec2::new(960.0, 0.0), Vec2::new(960.0, 1080.0))
        );
        assert_eq!(rec.calls[2], Call::Circle(state.ball.pos, state.ball.radius));
        assert_eq!(rec.calls[3], Call::Rect(state.player.rect()));
        assert_eq!(rec.calls[4], Call::Rect(state.opponent.rect()));
    }

    #[test]
    fn test_scores_centered_in_halves() {
        let mut state = GameState::new(1);
        state.score.opponent = 3;
        state.score.player = 12;

        let mut rec = Recorder::default();
        draw_game(&state, &mut rec);

        // "3" is 40 wide at size 80, "12" is 88
        assert_eq!(
            rec.calls[5],
            Call::Text("3".into(), Vec2::new(480.0 - 20.0, 20.0), 80.0)
        );
        assert_eq!(
            rec.calls[6],
            Call::Text("12".into(), Vec2::new(1440.0 - 44.0, 20.0), 80.0)
        );
    }
}
