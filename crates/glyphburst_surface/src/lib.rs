//! # Glyphburst Surface
//!
//! The vocabulary spoken across the presentation boundary.
//!
//! The effect itself is windowing-agnostic: each tick it produces a
//! [`Frame`] of [`RenderCommand`]s, and the host (a winit window, a canvas,
//! a test harness) decides what a circle or a glyph looks like on its
//! surface. Text measurement flows the other way: the host hands the
//! simulation a [`TextMeasurer`] so glyph layout can match whatever font
//! rasterizer actually draws the frame.
//!
//! ## Boundary Rules
//!
//! 1. **No GPU, no windowing** - this crate must stay host-neutral
//! 2. **Commands are retained mode** - a frame is complete and self-contained
//! 3. **Colors carry their own alpha** - opacity is baked in by the producer

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

mod color;
mod command;
mod font;
mod math;
mod metrics;

pub use color::Color;
pub use command::{Frame, RenderCommand};
pub use font::{FontFamily, FontSpec, FontWeight};
pub use math::Vec2;
pub use metrics::{SerifMetrics, TextMeasurer};
