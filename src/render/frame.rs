use chrono::TimeDelta;

use crate::config::CountdownConfig;
use crate::foundation::error::TminusResult;
use crate::layout::group::LayoutCursor;
use crate::render::canvas::{Canvas, Palette};
use crate::text::engine::TextEngine;
use crate::time::breakdown::{TimeBreakdown, decompose, step_back};

/// One rendered tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedFrame {
    /// The finished raster.
    pub canvas: Canvas,
    /// `true` when the remaining duration had run out; drawn in the muted color.
    pub expired: bool,
    /// The breakdown that was drawn.
    pub breakdown: TimeBreakdown,
}

/// Renders countdown frames with a fixed configuration and text engine.
pub struct FrameRenderer<E> {
    cfg: CountdownConfig,
    engine: E,
}

impl<E: TextEngine> FrameRenderer<E> {
    /// Validate `cfg` and bind it to `engine`.
    pub fn new(cfg: CountdownConfig, engine: E) -> TminusResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg, engine })
    }

    /// The bound configuration.
    pub fn config(&self) -> &CountdownConfig {
        &self.cfg
    }

    /// Render the frame shown while `remaining` is left.
    ///
    /// The displayed breakdown is for `remaining` minus one tick; expiry is judged on
    /// `remaining` itself, so the final (muted) frame is the one rendered at zero.
    pub fn render_frame(&mut self, remaining: TimeDelta) -> RenderedFrame {
        let expired = remaining <= TimeDelta::zero();
        let palette = Palette {
            background: self.cfg.background,
            foreground: if expired {
                self.cfg.muted
            } else {
                self.cfg.foreground
            },
        };
        let mut canvas = Canvas::new(self.cfg.width, self.cfg.height, palette);

        let breakdown = decompose(step_back(remaining));
        let mut cursor = LayoutCursor::start(&self.cfg);
        for field in &breakdown.fields() {
            let group = cursor.place(&mut self.engine, &self.cfg, field);
            self.engine.draw_text(&mut canvas, &group.label);
            self.engine.draw_text(&mut canvas, &group.value);
        }

        RenderedFrame {
            canvas,
            expired,
            breakdown,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
