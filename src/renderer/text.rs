//! Seven-segment text face
//!
//! Digits built from rectangles, no font assets. `-` lights the middle
//! segment; any other character is blank but still takes up a cell.

use glam::Vec2;

use crate::sim::Rect;

/// Cell width as a fraction of font size
const CELL_WIDTH: f32 = 0.5;
/// Segment thickness as a fraction of font size
const STROKE: f32 = 0.1;
/// Gap between cells as a fraction of font size
const SPACING: f32 = 0.1;

// Segment bits
const A: u8 = 1 << 0; // top
const B: u8 = 1 << 1; // top right
const C: u8 = 1 << 2; // bottom right
const D: u8 = 1 << 3; // bottom
const E: u8 = 1 << 4; // bottom left
const F: u8 = 1 << 5; // top left
const G: u8 = 1 << 6; // middle

/// Lit segments for a character
pub fn segments(ch: char) -> u8 {
    match ch {
        '0' => A | B | C | D | E | F,
        '1' => B | C,
        '2' => A | B | G | E | D,
        '3' => A | B | G | C | D,
        '4' => F | G | B | C,
        '5' => A | F | G | C | D,
        '6' => A | F | G | E | C | D,
        '7' => A | B | C,
        '8' => A | B | C | D | E | F | G,
        '9' => A | B | C | D | F | G,
        '-' => G,
        _ => 0,
    }
}

/// Width of `text` at `size`
pub fn measure(text: &str, size: f32) -> f32 {
    let n = text.chars().count();
    if n == 0 {
        return 0.0;
    }
    n as f32 * CELL_WIDTH * size + (n - 1) as f32 * SPACING * size
}

/// Rectangles making up `text` with its top-left corner at `origin`
pub fn layout(text: &str, origin: Vec2, size: f32) -> Vec<Rect> {
    let w = CELL_WIDTH * size;
    let h = size;
    let t = STROKE * size;
    let advance = w + SPACING * size;

    let mut rects = Vec::new();
    for (i, ch) in text.chars().enumerate() {
        let lit = segments(ch);
        let x = origin.x + i as f32 * advance;
        let y = origin.y;

        let cell = [
            (A, Rect::new(x, y, w, t)),
            (B, Rect::new(x + w - t, y, t, h / 2.0)),
            (C, Rect::new(x + w - t, y + h / 2.0, t, h / 2.0)),
            (D, Rect::new(x, y + h - t, w, t)),
            (E, Rect::new(x, y + h / 2.0, t, h / 2.0)),
            (F, Rect::new(x, y, t, h / 2.0)),
            (G, Rect::new(x, y + h / 2.0 - t / 2.0, w, t)),
        ];
        rects.extend(
            cell.into_iter()
                .filter(|(bit, _)| lit & bit != 0)
                .map(|(_, r)| r),
        );
    }
    rects
}
