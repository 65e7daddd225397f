//! Output encoders for assembled animations.

/// Animated GIF output via the `image` crate.
pub mod gif;
