//! # The Text Explosion
//!
//! The unit the field owns: one label that slides from the surface center to
//! a click point, detonates on arrival, and burns out as its glyphs fade.
//!
//! ```text
//!  spawn              arrival                  last glyph dark
//!    |    Traveling      |        Exploded          |
//!    o------------------>o------------------------->o  pruned by field
//!    label slides        glyphs + sparks
//!    origin -> dest      drift and fade
//! ```
//!
//! Travel position is a pure function of elapsed wall time, so a fixed
//! timestamp always produces the same label position. Randomness enters
//! only at detonation, when trajectories and hues are drawn.

use std::time::Duration;

use glyphburst_surface::{Color, Frame, RenderCommand, TextMeasurer, Vec2};

use crate::config::EffectConfig;
use crate::glyph::FlyingGlyph;
use crate::particle::Particle;
use crate::rng::EffectRng;

/// Lifecycle phase of a [`TextExplosion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The label is in flight from origin to destination.
    Traveling,
    /// The label has detonated; glyphs and sparks are fading.
    Exploded,
}

/// One traveling label and, after detonation, its debris.
///
/// Text metrics are measured exactly once, at spawn. The stored label width
/// centers the traveling label and seeds the glyph layout at detonation, so
/// the measurer is never consulted again after construction.
#[derive(Debug, Clone)]
pub struct TextExplosion {
    text: String,
    origin: Vec2,
    destination: Vec2,
    position: Vec2,
    spawned_at: Duration,
    advances: Vec<f32>,
    label_width: f32,
    phase: Phase,
    glyphs: Vec<FlyingGlyph>,
    particles: Vec<Particle>,
}

impl TextExplosion {
    /// Creates a label in flight, measuring its text with `measurer`.
    ///
    /// `spawned_at` is the session-relative timestamp of the click that
    /// spawned it; travel progress is measured against it.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        origin: Vec2,
        destination: Vec2,
        spawned_at: Duration,
        config: &EffectConfig,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let text = text.into();
        let advances: Vec<f32> = text
            .chars()
            .map(|ch| measurer.advance(ch, config.font))
            .collect();
        let label_width = advances.iter().sum();
        Self {
            text,
            origin,
            destination,
            position: origin,
            spawned_at,
            advances,
            label_width,
            phase: Phase::Traveling,
            glyphs: Vec::new(),
            particles: Vec::new(),
        }
    }

    /// Advances the explosion to session time `now`.
    ///
    /// While traveling, the position is re-derived from elapsed time each
    /// tick. Arrival at or past the travel time snaps the label onto its
    /// destination and detonates it, exactly once. After detonation every
    /// glyph and spark advances one tick.
    pub fn update(&mut self, now: Duration, config: &EffectConfig, rng: &mut EffectRng) {
        match self.phase {
            Phase::Traveling => {
                let elapsed = now.saturating_sub(self.spawned_at);
                let travel = config.travel_time();
                if elapsed >= travel {
                    self.position = self.destination;
                    self.explode(config, rng);
                } else {
                    let t = elapsed.as_secs_f32() / travel.as_secs_f32();
                    self.position = self.origin.lerp(self.destination, t);
                }
            }
            Phase::Exploded => {
                for glyph in &mut self.glyphs {
                    glyph.update();
                }
                for spark in &mut self.particles {
                    spark.update();
                }
            }
        }
    }

    /// Bursts the label into per-character glyphs and a ring of sparks.
    ///
    /// Glyphs are laid out left to right along the measured advances,
    /// centered on the destination x, each with a random hue and trajectory.
    /// Sparks all start at the destination point.
    fn explode(&mut self, config: &EffectConfig, rng: &mut EffectRng) {
        self.phase = Phase::Exploded;
        self.glyphs.reserve(self.advances.len());
        let mut pen_x = self.destination.x - self.label_width / 2.0;
        for (ch, advance) in self.text.chars().zip(self.advances.iter().copied()) {
            let velocity = Vec2::from_angle(rng.angle()) * rng.speed(config.glyph_speed);
            let color = Color::from_hsv(rng.hue(), 1.0, 1.0);
            self.glyphs.push(FlyingGlyph::new(
                ch,
                Vec2::new(pen_x, self.destination.y),
                velocity,
                color,
                config.font,
                config.glyph_fade,
            ));
            pen_x += advance;
        }
        self.particles.reserve(config.particle_count);
        for _ in 0..config.particle_count {
            let velocity = Vec2::from_angle(rng.angle()) * rng.speed(config.particle_speed);
            self.particles.push(Particle::new(
                self.destination,
                velocity,
                config.particle_color,
                config.particle_size,
                config.particle_fade,
            ));
        }
        tracing::trace!(
            "Detonated '{}': {} glyphs, {} sparks",
            self.text,
            self.glyphs.len(),
            self.particles.len()
        );
    }

    /// Emits this explosion into `frame`.
    ///
    /// In flight the whole label is drawn as one run of text, centered on
    /// the current position. After detonation the glyphs are drawn first,
    /// then the sparks on top.
    pub fn draw(&self, frame: &mut Frame, config: &EffectConfig) {
        match self.phase {
            Phase::Traveling => {
                frame.push(RenderCommand::Text {
                    text: self.text.clone(),
                    baseline: Vec2::new(self.position.x - self.label_width / 2.0, self.position.y),
                    font: config.font,
                    color: config.label_color,
                });
            }
            Phase::Exploded => {
                for glyph in &self.glyphs {
                    glyph.draw(frame);
                }
                for spark in &self.particles {
                    spark.draw(frame);
                }
            }
        }
    }

    /// Whether this explosion has burned out and can be pruned.
    ///
    /// True once the label has detonated and every glyph has fully faded.
    /// Spark opacity is deliberately not consulted: under the default rates
    /// sparks fade twice as fast as glyphs, so they are long dark before the
    /// last glyph goes out. A config that fades sparks *slower* than glyphs
    /// will see its remaining sparks cut off at the prune instead of fading
    /// to nothing.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Exploded && self.glyphs.iter().all(FlyingGlyph::is_faded)
    }

    /// The label text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current label position (centerpoint while traveling).
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// The click point this explosion travels toward.
    #[must_use]
    pub const fn destination(&self) -> Vec2 {
        self.destination
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Measured width of the whole label.
    #[must_use]
    pub const fn label_width(&self) -> f32 {
        self.label_width
    }

    /// Flying glyphs, in label order. Empty until detonation.
    #[must_use]
    pub fn glyphs(&self) -> &[FlyingGlyph] {
        &self.glyphs
    }

    /// Sparks. Empty until detonation.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
