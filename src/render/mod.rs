/// Palette-indexed frame raster.
pub mod canvas;
/// Per-tick frame rendering.
pub mod frame;
