//! # The Explosion Field
//!
//! Owns every live explosion plus everything they share: the configuration,
//! the random stream, and the text measurer. Hosts talk to the simulation
//! through exactly three calls per session: [`ExplosionField::spawn`] on a
//! click, [`ExplosionField::update`] then [`ExplosionField::render`] on each
//! tick.
//!
//! Finished explosions are pruned inside `render`, during the same pass that
//! draws the survivors. `Vec::retain` keeps that traversal removal-safe.

use std::time::Duration;

use glyphburst_surface::{Frame, RenderCommand, TextMeasurer, Vec2};

use crate::config::EffectConfig;
use crate::explosion::TextExplosion;
use crate::rng::EffectRng;

/// The whole simulation: all live explosions and their shared services.
pub struct ExplosionField {
    config: EffectConfig,
    rng: EffectRng,
    measurer: Box<dyn TextMeasurer>,
    explosions: Vec<TextExplosion>,
}

impl ExplosionField {
    /// Creates an empty field.
    ///
    /// The random stream is seeded from `config.seed`, or from the clock
    /// when no seed is configured. Either way the seed is logged so a run
    /// can be replayed.
    #[must_use]
    pub fn new(config: EffectConfig, measurer: Box<dyn TextMeasurer>) -> Self {
        let rng = match config.seed {
            Some(seed) => EffectRng::seeded(seed),
            None => EffectRng::from_clock(),
        };
        tracing::info!("Explosion field ready (seed: {})", rng.seed());
        Self {
            config,
            rng,
            measurer,
            explosions: Vec::new(),
        }
    }

    /// Spawns the configured label flying toward `destination`.
    ///
    /// `now` is the session-relative timestamp of the triggering click.
    pub fn spawn(&mut self, destination: Vec2, now: Duration) {
        let text = self.config.spawn_text.clone();
        self.spawn_label(text, destination, now);
    }

    /// Spawns an arbitrary label flying toward `destination`.
    pub fn spawn_label(&mut self, text: impl Into<String>, destination: Vec2, now: Duration) {
        let text = text.into();
        tracing::debug!(
            "Spawned '{}' heading to ({:.0}, {:.0})",
            text,
            destination.x,
            destination.y
        );
        self.explosions.push(TextExplosion::new(
            text,
            self.config.spawn_origin(),
            destination,
            now,
            &self.config,
            self.measurer.as_ref(),
        ));
    }

    /// Advances every live explosion to session time `now`, in spawn order.
    pub fn update(&mut self, now: Duration) {
        for explosion in &mut self.explosions {
            explosion.update(now, &self.config, &mut self.rng);
        }
    }

    /// Rebuilds `frame` for the current state: a clear, then every live
    /// explosion in spawn order. Finished explosions are pruned by the same
    /// traversal and emit nothing.
    pub fn render(&mut self, frame: &mut Frame) {
        frame.begin();
        frame.push(RenderCommand::Clear {
            color: self.config.background,
        });
        let config = &self.config;
        let before = self.explosions.len();
        self.explosions.retain(|explosion| {
            if explosion.is_finished() {
                return false;
            }
            explosion.draw(frame, config);
            true
        });
        let pruned = before - self.explosions.len();
        if pruned > 0 {
            tracing::trace!(
                "Pruned {} finished explosion(s), {} live",
                pruned,
                self.explosions.len()
            );
        }
    }

    /// Number of live explosions.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.explosions.len()
    }

    /// Whether the field has nothing left to animate.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.explosions.is_empty()
    }

    /// The live explosions, in spawn order.
    #[must_use]
    pub fn explosions(&self) -> &[TextExplosion] {
        &self.explosions
    }

    /// The configuration this field runs under.
    #[must_use]
    pub const fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// The seed of the random stream, for replaying a session.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

#[cfg(test)]
mod tests {
    use glyphburst_surface::SerifMetrics;

    use super::*;
    use crate::explosion::Phase;

    fn seeded_field(seed: u64) -> ExplosionField {
        let config = EffectConfig {
            seed: Some(seed),
            ..EffectConfig::default()
        };
        ExplosionField::new(config, Box::new(SerifMetrics))
    }

    #[test]
    fn test_spawn_uses_configured_text_and_center_origin() {
        let mut field = seeded_field(1);
        field.spawn(Vec2::new(100.0, 100.0), Duration::ZERO);
        assert_eq!(field.live_count(), 1);
        let explosion = &field.explosions()[0];
        assert_eq!(explosion.text(), "glyphburst");
        assert_eq!(explosion.position(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_explosions_update_against_their_own_spawn_times() {
        let mut field = seeded_field(2);
        field.spawn_label("first", Vec2::new(0.0, 300.0), Duration::ZERO);
        field.spawn_label("second", Vec2::new(0.0, 300.0), Duration::from_millis(1000));
        field.update(Duration::from_millis(1000));
        let explosions = field.explosions();
        // Halfway along for the old one, still at the origin for the new one
        assert_eq!(explosions[0].position(), Vec2::new(200.0, 300.0));
        assert_eq!(explosions[1].position(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_render_on_idle_field_emits_only_clear() {
        let mut field = seeded_field(3);
        let mut frame = Frame::new();
        field.render(&mut frame);
        assert!(field.is_idle());
        match frame.commands() {
            [RenderCommand::Clear { color }] => {
                assert_eq!(*color, field.config().background);
            }
            other => panic!("expected a lone clear, got {other:?}"),
        }
    }

    #[test]
    fn test_render_draws_traveling_label_after_clear() {
        let mut field = seeded_field(4);
        field.spawn(Vec2::new(100.0, 100.0), Duration::ZERO);
        field.update(Duration::from_millis(500));
        let mut frame = Frame::new();
        field.render(&mut frame);
        assert_eq!(frame.command_count(), 2);
        assert!(matches!(
            frame.commands()[0],
            RenderCommand::Clear { .. }
        ));
        assert!(matches!(frame.commands()[1], RenderCommand::Text { .. }));
        assert_eq!(field.live_count(), 1);
    }

    #[test]
    fn test_render_prunes_burned_out_explosions() {
        let mut field = seeded_field(5);
        field.spawn(Vec2::new(100.0, 100.0), Duration::ZERO);
        let travel = field.config().travel_time();
        let tick = field.config().tick_period();
        field.update(travel);
        assert_eq!(field.explosions()[0].phase(), Phase::Exploded);
        // 50 post-detonation ticks at 0.02 fade per tick
        let mut now = travel;
        for _ in 0..50 {
            now += tick;
            field.update(now);
        }
        let mut frame = Frame::new();
        field.render(&mut frame);
        assert_eq!(field.live_count(), 0);
        assert!(field.is_idle());
        assert_eq!(frame.command_count(), 1);
    }

    #[test]
    fn test_prune_keeps_younger_siblings_alive() {
        let mut field = seeded_field(6);
        field.spawn_label("old", Vec2::new(100.0, 100.0), Duration::ZERO);
        let travel = field.config().travel_time();
        let tick = field.config().tick_period();
        // Second label spawns the instant the first detonates
        field.spawn_label("young", Vec2::new(700.0, 500.0), travel);
        field.update(travel);
        assert_eq!(field.explosions()[0].phase(), Phase::Exploded);
        let mut now = travel;
        for _ in 0..50 {
            now += tick;
            field.update(now);
        }
        let mut frame = Frame::new();
        field.render(&mut frame);
        assert_eq!(field.live_count(), 1);
        assert_eq!(field.explosions()[0].text(), "young");
    }

    #[test]
    fn test_same_seed_and_script_replays_identical_frames() {
        let script = [
            (Vec2::new(120.0, 80.0), Duration::ZERO),
            (Vec2::new(640.0, 480.0), Duration::from_millis(90)),
        ];
        let run = |seed: u64| {
            let mut field = seeded_field(seed);
            for (destination, at) in script {
                field.spawn(destination, at);
            }
            let tick = field.config().tick_period();
            let mut frames = Vec::new();
            let mut now = Duration::ZERO;
            for _ in 0..120 {
                now += tick;
                field.update(now);
                let mut frame = Frame::new();
                field.render(&mut frame);
                frames.push(frame.commands().to_vec());
            }
            frames
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    fn test_field_reports_configured_seed() {
        let field = seeded_field(42);
        assert_eq!(field.seed(), 42);
    }
}
