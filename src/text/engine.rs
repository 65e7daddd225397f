use crate::render::canvas::Canvas;

/// A single string to rasterize at a baseline origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawText {
    /// Text to draw.
    pub text: String,
    /// Point size.
    pub size_pt: u32,
    /// Pen x in pixels.
    pub x: i32,
    /// Baseline y in pixels.
    pub y: i32,
}

/// Measures and rasterizes text for frame rendering.
///
/// Both operations must be pure functions of their inputs (and the engine's font): the same
/// arguments always measure to the same width and produce the same pixels. Implementations may
/// keep scratch buffers or caches internally, hence `&mut self`.
pub trait TextEngine {
    /// Ceiling of the advance width of `text` at `size_pt`, in pixels.
    ///
    /// Widths must agree with the pen advances `draw_text` uses. Engines whose hinting only
    /// snaps outlines vertically (as `vello_cpu` does) measure unhinted advances, since hinting
    /// leaves the horizontal advances untouched.
    fn measure(&mut self, text: &str, size_pt: u32) -> i32;

    /// Rasterize `cmd` into `canvas` as opaque black ink (see [`Canvas::cover`]).
    ///
    /// Pixels outside the canvas are clipped.
    fn draw_text(&mut self, canvas: &mut Canvas, cmd: &DrawText);
}

impl<T: TextEngine + ?Sized> TextEngine for &mut T {
    fn measure(&mut self, text: &str, size_pt: u32) -> i32 {
        (**self).measure(text, size_pt)
    }

    fn draw_text(&mut self, canvas: &mut Canvas, cmd: &DrawText) {
        (**self).draw_text(canvas, cmd)
    }
}

impl<T: TextEngine + ?Sized> TextEngine for Box<T> {
    fn measure(&mut self, text: &str, size_pt: u32) -> i32 {
        (**self).measure(text, size_pt)
    }

    fn draw_text(&mut self, canvas: &mut Canvas, cmd: &DrawText) {
        (**self).draw_text(canvas, cmd)
    }
}
