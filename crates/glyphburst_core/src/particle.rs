//! # Sparks
//!
//! The plain yellow dots a detonation throws out. Sparks are fire-and-forget:
//! direction, speed, color, and fade rate are fixed at creation, after which
//! a spark just drifts and dims.

use glyphburst_surface::{Color, Frame, RenderCommand, Vec2};

use crate::fade;

/// A single spark thrown out by a detonation.
#[derive(Debug, Clone)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    opacity: f32,
    color: Color,
    size: f32,
    fade_rate: f32,
}

impl Particle {
    /// Creates a spark at full opacity.
    #[must_use]
    pub const fn new(
        position: Vec2,
        velocity: Vec2,
        color: Color,
        size: f32,
        fade_rate: f32,
    ) -> Self {
        Self {
            position,
            velocity,
            opacity: 1.0,
            color,
            size,
            fade_rate,
        }
    }

    /// Advances one tick: drift by velocity, then fade.
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.opacity = fade::step(self.opacity, self.fade_rate);
    }

    /// Emits this spark as a filled circle with alpha scaled by remaining
    /// opacity. Fully faded sparks still emit (invisibly), matching the
    /// draw-everything-alive contract of the owning explosion.
    pub fn draw(&self, frame: &mut Frame) {
        frame.push(RenderCommand::Circle {
            center: self.position,
            radius: self.size / 2.0,
            color: self.color.with_alpha(self.opacity),
        });
    }

    /// Current position.
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

    /// Whether this spark has fully faded.
    #[must_use]
    pub fn is_faded(&self) -> bool {
        self.opacity == 0.0
    }
}
