//! # Effect Driver
//!
//! The single thread that owns the simulation.
//!
//! ```text
//! Tick N:
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ 1. DRAIN INPUT                                                  │
//! │    ├─ PointerClick  -> field.spawn(click point, elapsed)        │
//! │    └─ CloseRequested -> stop before the next tick               │
//! │                                                                 │
//! │ 2. WAIT FOR TICK (crossbeam ticker, 30 ms period)               │
//! │                                                                 │
//! │ 3. UPDATE  (field.update(elapsed))                              │
//! │    └─ travel progress, detonations, fades                       │
//! │                                                                 │
//! │ 4. RENDER  (field.render(frame))                                │
//! │    └─ clear + live explosions, finished ones pruned             │
//! │                                                                 │
//! │ 5. PRESENT (sink.present(frame))                                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input handling and tick work run strictly in turn on this one thread,
//! so a click can never observe a half-updated field.

use std::time::{Duration, Instant};

use crossbeam_channel::tick;
use glyphburst_core::ExplosionField;
use glyphburst_surface::{Frame, Vec2};

use crate::events::{EventReceiver, SurfaceEvent};
use crate::sink::FrameSink;

/// Timing record for one tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickStats {
    /// Tick number, starting at 1.
    pub tick: u64,
    /// Simulation update time in microseconds.
    pub update_us: u64,
    /// Frame build time in microseconds.
    pub render_us: u64,
    /// Whole tick including present, in microseconds.
    pub total_us: u64,
    /// Commands in the presented frame.
    pub commands: usize,
    /// Live explosions after the tick.
    pub live: usize,
}

/// Running totals over a session of ticks.
#[derive(Clone, Debug)]
pub struct TickStatsAccumulator {
    /// Ticks recorded.
    pub ticks_recorded: u64,
    /// Sum of whole-tick times.
    pub total_us_sum: u64,
    /// Sum of update times.
    pub update_us_sum: u64,
    /// Sum of frame build times.
    pub render_us_sum: u64,
    /// Sum of per-frame command counts.
    pub commands_sum: u64,
    /// Fastest tick seen.
    pub min_tick_us: u64,
    /// Slowest tick seen.
    pub max_tick_us: u64,
    /// Ticks whose work exceeded the tick period.
    pub ticks_over_budget: u64,
    /// Most explosions alive at once.
    pub peak_live: usize,
    /// Tick budget in microseconds.
    pub budget_us: u64,
}

impl TickStatsAccumulator {
    /// Creates an accumulator judging ticks against `budget`.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            ticks_recorded: 0,
            total_us_sum: 0,
            update_us_sum: 0,
            render_us_sum: 0,
            commands_sum: 0,
            min_tick_us: u64::MAX,
            max_tick_us: 0,
            ticks_over_budget: 0,
            peak_live: 0,
            budget_us: micros(budget),
        }
    }

    /// Records one tick.
    pub fn record(&mut self, stats: TickStats) {
        self.ticks_recorded += 1;
        self.total_us_sum += stats.total_us;
        self.update_us_sum += stats.update_us;
        self.render_us_sum += stats.render_us;
        self.commands_sum += stats.commands as u64;
        self.min_tick_us = self.min_tick_us.min(stats.total_us);
        self.max_tick_us = self.max_tick_us.max(stats.total_us);
        self.peak_live = self.peak_live.max(stats.live);
        if stats.total_us > self.budget_us {
            self.ticks_over_budget += 1;
        }
    }

    /// Average tick work in milliseconds.
    #[must_use]
    pub fn avg_tick_ms(&self) -> f64 {
        if self.ticks_recorded == 0 {
            return 0.0;
        }
        (self.total_us_sum as f64 / self.ticks_recorded as f64) / 1000.0
    }

    /// Fraction of ticks whose work exceeded the budget.
    #[must_use]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.ticks_recorded == 0 {
            return 0.0;
        }
        self.ticks_over_budget as f64 / self.ticks_recorded as f64
    }

    /// Prints a summary of the session.
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════════════════╗");
        println!("║                     TICK STATISTICS SUMMARY                      ║");
        println!("╚══════════════════════════════════════════════════════════════════╝");
        if self.ticks_recorded == 0 {
            println!();
            println!("  No ticks recorded.");
            return;
        }
        println!();
        println!("┌─ TIMING ───────────────────────────────────────────────────────┐");
        println!("│ Ticks Recorded:     {}", self.ticks_recorded);
        println!("│ Average Tick Work:  {:.3} ms", self.avg_tick_ms());
        println!("│ Min Tick:           {:.3} ms", self.min_tick_us as f64 / 1000.0);
        println!("│ Max Tick:           {:.3} ms", self.max_tick_us as f64 / 1000.0);
        println!("└────────────────────────────────────────────────────────────────┘");
        println!();
        println!("┌─ BUDGET ───────────────────────────────────────────────────────┐");
        println!("│ Tick Budget:        {:.3} ms", self.budget_us as f64 / 1000.0);
        println!(
            "│ Over Budget:        {} ticks ({:.1}%)",
            self.ticks_over_budget,
            self.over_budget_ratio() * 100.0
        );
        println!("└────────────────────────────────────────────────────────────────┘");
        println!();
        println!("┌─ EFFECT ───────────────────────────────────────────────────────┐");
        println!("│ Peak Live:          {} explosion(s)", self.peak_live);
        println!(
            "│ Avg Commands:       {:.1} per frame",
            self.commands_sum as f64 / self.ticks_recorded as f64
        );
        println!("└────────────────────────────────────────────────────────────────┘");
    }
}

/// The tick loop: input in, frames out, everything in one place.
pub struct EffectDriver<S: FrameSink> {
    field: ExplosionField,
    input: EventReceiver,
    sink: S,
    frame: Frame,
    epoch: Instant,
    stats: TickStatsAccumulator,
}

impl<S: FrameSink> EffectDriver<S> {
    /// Creates a driver around an existing field.
    ///
    /// The tick budget for statistics comes from the field's configuration.
    #[must_use]
    pub fn new(field: ExplosionField, input: EventReceiver, sink: S) -> Self {
        let budget = field.config().tick_period();
        Self {
            field,
            input,
            sink,
            frame: Frame::new(),
            epoch: Instant::now(),
            stats: TickStatsAccumulator::new(budget),
        }
    }

    /// Runs until the host sends [`SurfaceEvent::CloseRequested`].
    ///
    /// Session time starts at zero when this is called; every spawn and
    /// update timestamp is measured from here.
    pub fn run(&mut self) {
        let period = self.field.config().tick_period();
        self.epoch = Instant::now();
        tracing::info!(
            "Effect driver running ({} ms tick, seed {})",
            self.field.config().tick_ms,
            self.field.seed()
        );
        let ticker = tick(period);
        loop {
            if self.drain_input() {
                break;
            }
            if ticker.recv().is_err() {
                break;
            }
            self.step(self.epoch.elapsed());
        }
        tracing::info!(
            "Effect driver stopped after {} ticks",
            self.stats.ticks_recorded
        );
    }

    /// Applies every pending host event. Returns true on a close request.
    fn drain_input(&mut self) -> bool {
        let mut close = false;
        for event in self.input.drain() {
            match event {
                SurfaceEvent::PointerClick { x, y } => {
                    self.field.spawn(Vec2::new(x, y), self.epoch.elapsed());
                }
                SurfaceEvent::CloseRequested => {
                    tracing::info!("Close requested by host");
                    close = true;
                }
            }
        }
        close
    }

    /// One tick of work: update, render, present, record.
    fn step(&mut self, now: Duration) {
        let tick_start = Instant::now();

        let update_start = Instant::now();
        self.field.update(now);
        let update_us = micros(update_start.elapsed());

        let render_start = Instant::now();
        self.field.render(&mut self.frame);
        let render_us = micros(render_start.elapsed());

        self.sink.present(&self.frame);

        let stats = TickStats {
            tick: self.stats.ticks_recorded + 1,
            update_us,
            render_us,
            total_us: micros(tick_start.elapsed()),
            commands: self.frame.command_count(),
            live: self.field.live_count(),
        };
        self.stats.record(stats);

        if stats.total_us > self.stats.budget_us {
            tracing::warn!(
                "Tick {} ran long: {:.2} ms of work against a {:.2} ms budget",
                stats.tick,
                stats.total_us as f64 / 1000.0,
                self.stats.budget_us as f64 / 1000.0
            );
        }
    }

    /// The simulation this driver owns.
    #[must_use]
    pub const fn field(&self) -> &ExplosionField {
        &self.field
    }

    /// The frame sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Statistics for the session so far.
    #[must_use]
    pub const fn stats(&self) -> &TickStatsAccumulator {
        &self.stats
    }
}

fn micros(duration: Duration) -> u64 {
    duration.as_micros() as u64
}

#[cfg(test)]
mod tests {
    use glyphburst_core::EffectConfig;
    use glyphburst_surface::SerifMetrics;

    use super::*;
    use crate::events::EventBus;
    use crate::sink::CountingSink;

    fn seeded_driver(capacity: usize) -> (crate::events::EventSender, EffectDriver<CountingSink>) {
        let config = EffectConfig {
            seed: Some(7),
            ..EffectConfig::default()
        };
        let field = ExplosionField::new(config, Box::new(SerifMetrics));
        let (sender, receiver) = EventBus::create_pair(capacity);
        (sender, EffectDriver::new(field, receiver, CountingSink::new()))
    }

    #[test]
    fn test_click_then_step_presents_traveling_label() {
        let (sender, mut driver) = seeded_driver(8);
        sender.send(SurfaceEvent::PointerClick { x: 100.0, y: 100.0 });
        assert!(!driver.drain_input());
        driver.step(Duration::from_millis(30));

        assert_eq!(driver.field().live_count(), 1);
        assert_eq!(driver.sink().frames(), 1);
        // Clear plus the traveling label
        assert_eq!(driver.sink().last_frame_commands(), 2);
        assert_eq!(driver.stats().ticks_recorded, 1);
    }

    #[test]
    fn test_step_without_input_presents_clear_only_frames() {
        let (_sender, mut driver) = seeded_driver(8);
        driver.step(Duration::from_millis(30));
        driver.step(Duration::from_millis(60));
        assert_eq!(driver.sink().frames(), 2);
        assert_eq!(driver.sink().last_frame_commands(), 1);
        assert!(driver.field().is_idle());
    }

    #[test]
    fn test_drain_reports_close_and_still_applies_clicks() {
        let (sender, mut driver) = seeded_driver(8);
        sender.send(SurfaceEvent::PointerClick { x: 10.0, y: 20.0 });
        sender.send(SurfaceEvent::CloseRequested);
        assert!(driver.drain_input());
        assert_eq!(driver.field().live_count(), 1);
    }

    #[test]
    fn test_accumulator_tracks_extremes_and_budget() {
        let mut acc = TickStatsAccumulator::new(Duration::from_millis(30));
        for (total_us, live) in [(1_000, 1), (45_000, 3), (2_000, 2)] {
            acc.record(TickStats {
                tick: acc.ticks_recorded + 1,
                update_us: total_us / 2,
                render_us: total_us / 2,
                total_us,
                commands: 10,
                live,
            });
        }
        assert_eq!(acc.ticks_recorded, 3);
        assert_eq!(acc.min_tick_us, 1_000);
        assert_eq!(acc.max_tick_us, 45_000);
        assert_eq!(acc.ticks_over_budget, 1);
        assert_eq!(acc.peak_live, 3);
        assert_eq!(acc.commands_sum, 30);
        assert!(acc.avg_tick_ms() > 0.0);
    }
}
