use crate::render::canvas::Canvas;
use crate::text::engine::{DrawText, TextEngine};

/// Font-free engine that lays glyphs out on a fixed advance and draws each as a solid box.
///
/// Useful for tests and debugging: output depends only on character count and size, so layout
/// arithmetic can be checked without a font on the machine.
#[derive(Clone, Copy, Debug)]
pub struct BoxTextEngine {
    dpi: u32,
}

impl BoxTextEngine {
    /// Create an engine converting points to pixels at `dpi`.
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    fn px(&self, size_pt: u32) -> i32 {
        (size_pt * self.dpi / 72) as i32
    }

    /// Horizontal advance of every glyph at `size_pt`.
    pub fn advance(&self, size_pt: u32) -> i32 {
        (self.px(size_pt) * 3 + 4) / 5
    }

    /// Height of a glyph box above the baseline.
    pub fn box_height(&self, size_pt: u32) -> i32 {
        self.px(size_pt) * 7 / 10
    }
}

impl TextEngine for BoxTextEngine {
    fn measure(&mut self, text: &str, size_pt: u32) -> i32 {
        text.chars().count() as i32 * self.advance(size_pt)
    }

    fn draw_text(&mut self, canvas: &mut Canvas, cmd: &DrawText) {
        let adv = self.advance(cmd.size_pt);
        let h = self.box_height(cmd.size_pt);
        for (i, ch) in cmd.text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x0 = cmd.x + i as i32 * adv;
            for y in (cmd.y - h)..cmd.y {
                for x in x0..(x0 + adv - 1) {
                    canvas.cover(x, y, 255);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/boxes.rs"]
mod tests;
