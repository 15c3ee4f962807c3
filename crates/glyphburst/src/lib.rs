//! # Glyphburst
//!
//! The application layer of the moving text-explosion effect.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                          GLYPHBURST                              │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  ┌───────────┐   SurfaceEvent    ┌───────────────────────────┐   │
//! │  │   Host    │──────────────────>│       EffectDriver        │   │
//! │  │ (window,  │  bounded channel  │                           │   │
//! │  │  script)  │                   │  drain input -> spawn     │   │
//! │  └───────────┘                   │  tick  -> update, render  │   │
//! │        ^                         └────────────┬──────────────┘   │
//! │        │                                      │ Frame            │
//! │        │            ┌───────────┐             │                  │
//! │        └────────────│ FrameSink │<────────────┘                  │
//! │        pixels       └───────────┘                                │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All simulation state lives on the driver thread. Hosts interact only
//! through the event channel and the frames handed to their sink, so click
//! handling and tick handling can never interleave.
//!
//! ## Modules
//!
//! - `events`: host-to-driver event plumbing
//! - `driver`: the tick loop and its statistics
//! - `sink`: where finished frames go

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod driver;
pub mod events;
pub mod sink;

// Re-export the lower layers
pub use glyphburst_core as core;
pub use glyphburst_surface as surface;

// Re-export commonly used types
pub use driver::{EffectDriver, TickStats, TickStatsAccumulator};
pub use events::{EventBus, EventReceiver, EventSender, SurfaceEvent, INPUT_QUEUE_CAPACITY};
pub use sink::{CountingSink, FrameSink};
