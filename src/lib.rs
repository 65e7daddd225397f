//! tminus renders an animated countdown to a target instant as a looping GIF.
//!
//! The pipeline runs leaves-first:
//!
//! - [`decompose`] turns the remaining duration into a [`TimeBreakdown`]
//! - [`place_group`] lays out each value over its label using a [`TextEngine`] for widths
//! - [`FrameRenderer`] rasterizes one two-color [`Canvas`] per tick
//! - [`AnimationAssembler`] runs the tick loop and collects an [`AnimationSequence`]
//! - [`write_gif`] encodes the sequence
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Tick loop and animation sequence.
pub mod anim;
/// Render configuration.
pub mod config;
/// Output encoders.
pub mod encode;
/// Group layout.
pub mod layout;
/// Canvas and frame rendering.
pub mod render;
/// Text measurement and rasterization.
pub mod text;
/// Durations and target instants.
pub mod time;

pub use crate::foundation::core::Rgb8;
pub use crate::foundation::error::{TminusError, TminusResult};

pub use crate::anim::assembler::AnimationAssembler;
pub use crate::anim::sequence::{AnimationFrame, AnimationSequence};
pub use crate::config::CountdownConfig;
pub use crate::encode::gif::{encode_gif, write_gif};
pub use crate::layout::group::{GroupPlacement, LayoutCursor, place_group};
pub use crate::render::canvas::{Canvas, Palette};
pub use crate::render::frame::{FrameRenderer, RenderedFrame};
pub use crate::text::boxes::BoxTextEngine;
pub use crate::text::engine::{DrawText, TextEngine};
pub use crate::text::font::{EMBEDDED_FAMILY, EMBEDDED_FONT, FontSource, LoadedFont};
pub use crate::text::parley_engine::ParleyTextEngine;
pub use crate::time::breakdown::{DisplayField, TimeBreakdown, decompose};
pub use crate::time::target::{CountdownTarget, now_utc, parse_date, parse_time};
