use crate::render::canvas::Canvas;

/// A canvas with its display time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Frame raster.
    pub canvas: Canvas,
    /// How long the frame is shown, in milliseconds.
    pub delay_ms: u32,
    /// Whether this is the terminal muted frame.
    pub expired: bool,
}

/// Ordered animation frames. Append-only while being assembled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationSequence {
    frames: Vec<AnimationFrame>,
    looping: bool,
}

impl AnimationSequence {
    /// Empty sequence.
    pub fn new(looping: bool) -> Self {
        Self {
            frames: Vec::new(),
            looping,
        }
    }

    /// Append a frame at the end.
    pub fn append_frame(&mut self, canvas: Canvas, delay_ms: u32, expired: bool) {
        self.frames.push(AnimationFrame {
            canvas,
            delay_ms,
            expired,
        });
    }

    /// Frames in display order.
    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when no frame has been appended.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Loop forever when played back.
    pub fn looping(&self) -> bool {
        self.looping
    }

    /// `true` when the last frame is the expired frame.
    pub fn ends_expired(&self) -> bool {
        self.frames.last().is_some_and(|f| f.expired)
    }

    /// Total playback time of one loop in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.delay_ms)).sum()
    }
}
