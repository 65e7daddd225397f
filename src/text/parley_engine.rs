use std::borrow::Cow;

use crate::foundation::error::{TminusError, TminusResult};
use crate::render::canvas::Canvas;
use crate::text::engine::{DrawText, TextEngine};
use crate::text::font::LoadedFont;

/// Brush carried through Parley layouts. Text is always laid out as plain ink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InkBrush;

/// Text engine shaping with Parley and rasterizing with `vello_cpu`.
///
/// Glyphs are shaped at `size_pt * dpi / 72` pixels and drawn hinted. `vello_cpu` hints on the
/// vertical axis only, so the shaped (unhinted) advances used by [`TextEngine::measure`] are the
/// same advances the glyphs are drawn at. Every draw renders into a
/// scratch pixmap the size of the canvas, whose alpha is then composited into the palette canvas.
pub struct ParleyTextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<InkBrush>,
    family_name: String,
    dpi: u32,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl ParleyTextEngine {
    /// Register `font` and allocate render scratch for a `width`×`height` canvas.
    pub fn new(font: &LoadedFont, dpi: u32, width: u32, height: u32) -> TminusResult<Self> {
        if dpi == 0 {
            return Err(TminusError::validation("dpi must be > 0"));
        }
        let w = u16::try_from(width)
            .map_err(|_| TminusError::validation("canvas width exceeds u16::MAX"))?;
        let h = u16::try_from(height)
            .map_err(|_| TminusError::validation("canvas height exceeds u16::MAX"))?;

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes.to_vec()),
            None,
        );
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| TminusError::font("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TminusError::font("registered font family has no name"))?
            .to_string();
        tracing::debug!(family = %family_name, index = font.index, "registered font");

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            dpi,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// Family name the font registered under.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    fn size_px(&self, size_pt: u32) -> f32 {
        size_pt as f32 * self.dpi as f32 / 72.0
    }

    pub(crate) fn layout(&mut self, text: &str, size_pt: u32) -> parley::Layout<InkBrush> {
        let size_px = self.size_px(size_pt);
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(InkBrush));

        let mut layout: parley::Layout<InkBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

impl TextEngine for ParleyTextEngine {
    fn measure(&mut self, text: &str, size_pt: u32) -> i32 {
        if text.is_empty() {
            return 0;
        }
        self.layout(text, size_pt).width().ceil() as i32
    }

    fn draw_text(&mut self, canvas: &mut Canvas, cmd: &DrawText) {
        if cmd.text.is_empty() {
            return;
        }
        let layout = self.layout(&cmd.text, cmd.size_pt);

        self.ctx.reset();
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 255));
        for line in layout.lines() {
            // Shift so the line's baseline lands on the requested pen y.
            let dy = f64::from(cmd.y) - f64::from(line.metrics().baseline);
            self.ctx
                .set_transform(vello_cpu::kurbo::Affine::translate((f64::from(cmd.x), dy)));
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                // Draw with the face the run was shaped with so glyph ids line up.
                self.ctx
                    .glyph_run(run.run().font())
                    .font_size(run.run().font_size())
                    .hint(true)
                    .fill_glyphs(glyphs);
            }
        }
        self.ctx.flush();
        self.pixmap.data_as_u8_slice_mut().fill(0);
        self.ctx.render_to_pixmap(&mut self.pixmap);

        let w = usize::from(self.pixmap.width());
        for (i, px) in self.pixmap.data_as_u8_slice().chunks_exact(4).enumerate() {
            let alpha = px[3];
            if alpha == 0 {
                continue;
            }
            canvas.cover((i % w) as i32, (i / w) as i32, alpha);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/parley_engine.rs"]
mod tests;
