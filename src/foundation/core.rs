/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend `self` toward `src` by `coverage / 255` (source-over with an opaque source).
    pub fn blend_toward(self, src: Rgb8, coverage: u8) -> Self {
        fn mix(dst: u8, src: u8, a: u8) -> u8 {
            let a = u32::from(a);
            let v = u32::from(src) * a + u32::from(dst) * (255 - a);
            ((v + 127) / 255) as u8
        }

        Self {
            r: mix(self.r, src.r, coverage),
            g: mix(self.g, src.g, coverage),
            b: mix(self.b, src.b, coverage),
        }
    }

    /// Squared euclidean distance in RGB space.
    pub fn dist_sq(self, other: Rgb8) -> u32 {
        let d = |a: u8, b: u8| {
            let v = i32::from(a) - i32::from(b);
            (v * v) as u32
        };
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }

    /// Expand to straight RGBA8 with full alpha.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
