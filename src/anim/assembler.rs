use chrono::TimeDelta;

use crate::anim::sequence::AnimationSequence;
use crate::config::CountdownConfig;
use crate::foundation::error::TminusResult;
use crate::render::frame::FrameRenderer;
use crate::text::engine::TextEngine;
use crate::time::breakdown::step_back;

/// Drives the tick loop: one rendered frame per tick until expiry or the frame budget.
pub struct AnimationAssembler<E> {
    renderer: FrameRenderer<E>,
}

impl<E: TextEngine> AnimationAssembler<E> {
    /// Build an assembler from a validated config and a text engine.
    pub fn new(cfg: CountdownConfig, engine: E) -> TminusResult<Self> {
        Ok(Self {
            renderer: FrameRenderer::new(cfg, engine)?,
        })
    }

    /// Render the countdown starting with `remaining` left.
    ///
    /// At most `max_frames` frames are produced. The loop stops right after the first expired
    /// frame, which is therefore always last; a non-positive `remaining` yields exactly that one
    /// frame.
    #[tracing::instrument(skip(self, remaining), fields(remaining_s = remaining.num_seconds()))]
    pub fn assemble(&mut self, mut remaining: TimeDelta) -> AnimationSequence {
        let cfg = self.renderer.config();
        let max_frames = cfg.max_frames;
        let delay_ms = cfg.frame_delay_ms;
        let mut seq = AnimationSequence::new(cfg.looping);

        for i in 0..max_frames {
            let frame = self.renderer.render_frame(remaining);
            remaining = step_back(remaining);
            tracing::debug!(
                frame = i,
                expired = frame.expired,
                breakdown = %frame.breakdown,
                "rendered frame"
            );

            let expired = frame.expired;
            seq.append_frame(frame.canvas, delay_ms, expired);
            if expired {
                break;
            }
        }

        tracing::info!(
            frames = seq.len(),
            expired = seq.ends_expired(),
            "assembled countdown"
        );
        seq
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/assembler.rs"]
mod tests;
