/// Tick loop driving the frame renderer.
pub mod assembler;
/// Ordered frames with display timing.
pub mod sequence;
