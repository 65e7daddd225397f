use crate::foundation::core::Rgb8;

/// Two-entry palette: index 0 is the background, index 1 the foreground.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    /// Index 0.
    pub background: Rgb8,
    /// Index 1.
    pub foreground: Rgb8,
}

impl Palette {
    /// Background palette index.
    pub const BACKGROUND: u8 = 0;
    /// Foreground palette index.
    pub const FOREGROUND: u8 = 1;

    /// Color for a palette index. Out-of-range indices map to the foreground.
    pub fn color(&self, idx: u8) -> Rgb8 {
        if idx == Self::BACKGROUND {
            self.background
        } else {
            self.foreground
        }
    }

    /// Index of the entry closest to `c`. Ties resolve to the lower index.
    pub fn nearest(&self, c: Rgb8) -> u8 {
        if c.dist_sq(self.foreground) < c.dist_sq(self.background) {
            Self::FOREGROUND
        } else {
            Self::BACKGROUND
        }
    }
}

/// Fixed-size palette-indexed raster holding one animation frame.
///
/// Pixels are stored row-major, one palette index per pixel. A fresh canvas is all background.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Canvas {
    width: u32,
    height: u32,
    palette: Palette,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Color of the ink text is drawn with before palette quantization.
    pub const INK: Rgb8 = Rgb8::BLACK;

    /// Allocate a background-filled canvas.
    pub fn new(width: u32, height: u32, palette: Palette) -> Self {
        let len = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            palette,
            pixels: vec![Palette::BACKGROUND; len],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The canvas palette.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Palette indices, row-major.
    pub fn indices(&self) -> &[u8] {
        &self.pixels
    }

    /// Palette index at `(x, y)`, or `None` outside the canvas.
    pub fn index_at(&self, x: i32, y: i32) -> Option<u8> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Number of pixels set to the foreground entry.
    pub fn foreground_count(&self) -> usize {
        self.pixels
            .iter()
            .filter(|&&p| p == Palette::FOREGROUND)
            .count()
    }

    /// Composite [`Canvas::INK`] at `coverage / 255` over the pixel and re-quantize to the palette.
    ///
    /// Coordinates outside the canvas are ignored.
    pub fn cover(&mut self, x: i32, y: i32, coverage: u8) {
        if coverage == 0 {
            return;
        }
        let Some(i) = self.offset(x, y) else {
            return;
        };
        let dst = self.palette.color(self.pixels[i]);
        self.pixels[i] = self.palette.nearest(dst.blend_toward(Self::INK, coverage));
    }

    /// Expand to straight RGBA8, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let bg = self.palette.background.to_rgba8();
        let fg = self.palette.foreground.to_rgba8();
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &p in &self.pixels {
            out.extend_from_slice(if p == Palette::BACKGROUND { &bg } else { &fg });
        }
        out
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
