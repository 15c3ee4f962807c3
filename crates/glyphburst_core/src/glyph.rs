//! # Flying Glyphs
//!
//! After detonation every character of the label becomes an independent
//! glyph with its own hue and trajectory. Glyphs fade half as fast as
//! sparks, so they are what the eye tracks as the burst dies down, and
//! their fade-out defines the lifetime of the whole explosion.

use glyphburst_surface::{Color, FontSpec, Frame, RenderCommand, Vec2};

use crate::fade;

/// One character of an exploded label, flying on its own trajectory.
#[derive(Debug, Clone)]
pub struct FlyingGlyph {
    ch: char,
    position: Vec2,
    velocity: Vec2,
    opacity: f32,
    color: Color,
    font: FontSpec,
    fade_rate: f32,
}

impl FlyingGlyph {
    /// Creates a glyph at full opacity.
    #[must_use]
    pub const fn new(
        ch: char,
        position: Vec2,
        velocity: Vec2,
        color: Color,
        font: FontSpec,
        fade_rate: f32,
    ) -> Self {
        Self {
            ch,
            position,
            velocity,
            opacity: 1.0,
            color,
            font,
            fade_rate,
        }
    }

    /// Advances one tick: drift by velocity, then fade.
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.opacity = fade::step(self.opacity, self.fade_rate);
    }

    /// Emits this glyph at its current baseline position, alpha scaled by
    /// remaining opacity.
    pub fn draw(&self, frame: &mut Frame) {
        frame.push(RenderCommand::Glyph {
            ch: self.ch,
            baseline: self.position,
            font: self.font,
            color: self.color.with_alpha(self.opacity),
        });
    }

    /// The character this glyph renders.
    #[must_use]
    pub const fn ch(&self) -> char {
        self.ch
    }

    /// Current baseline position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Velocity in surface units per tick.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Remaining opacity in `[0, 1]`.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether this glyph has fully faded.
    #[must_use]
    pub fn is_faded(&self) -> bool {
        self.opacity == 0.0
    }
}
