//! # Glyphburst Headless
//!
//! Runs a scripted click session with no window and no GPU: clicks go in
//! over the real event channel, frames come out through a counting sink,
//! and the session ends with a tick statistics summary.
//!
//! ## Usage
//!
//! ```bash
//! # Default configuration
//! ./glyphburst_headless
//!
//! # With a config file
//! ./glyphburst_headless effect.toml
//! ```

use std::thread;
use std::time::Duration;

use glyphburst::core::{EffectConfig, ExplosionField};
use glyphburst::surface::SerifMetrics;
use glyphburst::{CountingSink, EffectDriver, EventBus, SurfaceEvent, INPUT_QUEUE_CAPACITY};

/// Scripted click points as fractions of the surface size.
const CLICK_SCRIPT: [(f32, f32); 5] = [
    (0.15, 0.20),
    (0.80, 0.30),
    (0.50, 0.75),
    (0.25, 0.80),
    (0.70, 0.60),
];

/// Pause between scripted clicks.
const CLICK_GAP: Duration = Duration::from_millis(650);

/// Time after the last click for travel and fade-out to finish.
const DRAIN_TIME: Duration = Duration::from_millis(4200);

fn main() {
    println!("═══════════════════════════════════════════════════════════════════");
    println!("                       GLYPHBURST v0.1.0");
    println!("                        HEADLESS MODE");
    println!("═══════════════════════════════════════════════════════════════════");
    println!();
    println!("  GPU:      NOT LOADED ✓");
    println!("  Window:   NOT LOADED ✓");
    println!();

    // === CONFIGURATION ===
    let config = match std::env::args().nth(1) {
        Some(path) => match EffectConfig::from_toml(&path) {
            Ok(config) => {
                println!("  Config:   {path} ✓");
                config
            }
            Err(e) => {
                eprintln!("  ✗ FATAL: {e}");
                std::process::exit(1);
            }
        },
        None => {
            println!("  Config:   built-in defaults");
            EffectConfig::default()
        }
    };
    let surface_width = config.surface_width;
    let surface_height = config.surface_height;
    let tick_ms = config.tick_ms;

    // === INITIALIZATION ===
    let field = ExplosionField::new(config, Box::new(SerifMetrics));
    println!("  Seed:     {}", field.seed());
    println!("  Tick:     {tick_ms} ms");
    println!();

    let (sender, receiver) = EventBus::create_pair(INPUT_QUEUE_CAPACITY);
    let mut driver = EffectDriver::new(field, receiver, CountingSink::new());

    // === CLICK SCRIPT ===
    let producer = thread::spawn(move || {
        for (i, (fx, fy)) in CLICK_SCRIPT.iter().enumerate() {
            let x = fx * surface_width;
            let y = fy * surface_height;
            if sender.send_blocking(SurfaceEvent::PointerClick { x, y }) {
                println!("   🟢 Click {} at ({x:.0}, {y:.0})", i + 1);
            }
            thread::sleep(CLICK_GAP);
        }
        thread::sleep(DRAIN_TIME);
        sender.send_blocking(SurfaceEvent::CloseRequested);
        println!("   🔴 Close requested");
    });

    // === DRIVE ===
    println!("═══════════════════════════════════════════════════════════════════");
    println!("                       SESSION RUNNING");
    println!("═══════════════════════════════════════════════════════════════════");
    println!();
    driver.run();
    if producer.join().is_err() {
        eprintln!("   ⚠ Click script thread panicked");
    }

    // === SUMMARY ===
    println!();
    println!(
        "   📊 Frames presented: {} | Commands emitted: {} | Live at exit: {}",
        driver.sink().frames(),
        driver.sink().commands(),
        driver.field().live_count()
    );
    println!();
    driver.stats().print_summary();
}
