//! Immutable render configuration.
//!
//! Every layout constant lives here and is threaded into the renderer and assembler at
//! construction. Defaults reproduce the classic 580×150 countdown strip.

use std::path::Path;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{TminusError, TminusResult};

/// Layout, palette, and timing parameters for a countdown animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountdownConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Left edge of the first group.
    pub margin_left: i32,
    /// Vertical origin of every group; the value baseline sits `value_size_pt` below it.
    pub top: i32,
    /// Point size of the numeric value.
    pub value_size_pt: u32,
    /// Point size of the label under the value.
    pub label_size_pt: u32,
    /// Extra gap between the value and label baselines.
    pub value_label_padding: i32,
    /// Gap added after each group when advancing the cursor.
    pub group_padding: i32,
    /// Rendering resolution used to convert points to pixels.
    pub dpi: u32,
    /// Upper bound on emitted frames.
    pub max_frames: u32,
    /// Display time of each frame in milliseconds.
    pub frame_delay_ms: u32,
    /// Palette entry 0.
    pub background: Rgb8,
    /// Palette entry 1 while the countdown is running.
    pub foreground: Rgb8,
    /// Palette entry 1 on the expired frame.
    pub muted: Rgb8,
    /// Loop the animation forever.
    pub looping: bool,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            width: 580,
            height: 150,
            margin_left: 50,
            top: 50,
            value_size_pt: 25,
            label_size_pt: 15,
            value_label_padding: 20,
            group_padding: 50,
            dpi: 150,
            max_frames: 30,
            frame_delay_ms: 1000,
            background: Rgb8::WHITE,
            foreground: Rgb8::BLACK,
            muted: Rgb8::new(210, 210, 210),
            looping: true,
        }
    }
}

impl CountdownConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> TminusResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let cfg: Self = serde_json::from_slice(&bytes).map_err(|e| {
            TminusError::validation(format!("parse config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every field is within the range the renderer can honor.
    pub fn validate(&self) -> TminusResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TminusError::validation("canvas width and height must be > 0"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(TminusError::validation(format!(
                "canvas dimensions must be <= {}",
                u16::MAX
            )));
        }
        if self.value_size_pt == 0 || self.label_size_pt == 0 {
            return Err(TminusError::validation("font sizes must be > 0"));
        }
        if self.dpi == 0 {
            return Err(TminusError::validation("dpi must be > 0"));
        }
        if self.max_frames == 0 {
            return Err(TminusError::validation("max_frames must be > 0"));
        }
        if self.frame_delay_ms == 0 || self.frame_delay_ms % 10 != 0 {
            return Err(TminusError::validation(
                "frame_delay_ms must be a positive multiple of 10",
            ));
        }
        Ok(())
    }

    /// Convert a point size to pixels at the configured DPI.
    pub fn px_for_pt(&self, size_pt: u32) -> f32 {
        size_pt as f32 * self.dpi as f32 / 72.0
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
