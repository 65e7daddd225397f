use std::io::Write;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::anim::sequence::AnimationSequence;
use crate::foundation::error::{TminusError, TminusResult};

/// Encode `seq` as an animated GIF into `w`, preserving frame order and per-frame delays.
pub fn encode_gif<W: Write>(seq: &AnimationSequence, w: W) -> TminusResult<()> {
    if seq.is_empty() {
        return Err(TminusError::validation("cannot encode an empty animation"));
    }

    let mut enc = GifEncoder::new(w);
    if seq.looping() {
        enc.set_repeat(Repeat::Infinite)
            .map_err(|e| TminusError::encode(format!("set gif repeat: {e}")))?;
    }

    for (i, f) in seq.frames().iter().enumerate() {
        let img = RgbaImage::from_raw(f.canvas.width(), f.canvas.height(), f.canvas.to_rgba8())
            .ok_or_else(|| TminusError::encode(format!("frame {i} has a short pixel buffer")))?;
        let frame = Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(f.delay_ms, 1));
        enc.encode_frame(frame)
            .map_err(|e| TminusError::encode(format!("encode frame {i}: {e}")))?;
    }
    Ok(())
}

/// Encode `seq` to a GIF file at `path`, creating parent directories as needed.
pub fn write_gif(seq: &AnimationSequence, path: impl AsRef<Path>) -> TminusResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    let mut out = std::io::BufWriter::new(file);
    encode_gif(seq, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
