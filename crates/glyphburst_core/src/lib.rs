//! # Glyphburst Core
//!
//! Everything that *happens* in the effect lives here: a click becomes a
//! [`TextExplosion`] that travels across the surface, detonates into
//! [`FlyingGlyph`]s and [`Particle`]s, fades, and is pruned by the owning
//! [`ExplosionField`].
//!
//! ## Design Rules
//!
//! 1. **Deterministic** - all randomness flows through [`EffectRng`]; a seeded
//!    field replays the exact same frames for the same click script.
//! 2. **Clock-agnostic** - nothing in here reads a wall clock. Callers pass
//!    elapsed time into [`ExplosionField::update`], so tests can drive the
//!    simulation with synthetic timestamps.
//! 3. **No presentation** - drawing emits [`glyphburst_surface`] commands;
//!    this crate never touches a pixel.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

mod config;
mod error;
mod explosion;
mod fade;
mod field;
mod glyph;
mod particle;
mod rng;

pub use config::{EffectConfig, SpeedRange};
pub use error::{ConfigError, ConfigResult};
pub use explosion::{Phase, TextExplosion};
pub use field::ExplosionField;
pub use glyph::FlyingGlyph;
pub use particle::Particle;
pub use rng::EffectRng;
