//! # Surface Event Plumbing
//!
//! Host-to-driver communication for the effect.
//!
//! ```text
//! ┌─────────────┐      ┌─────────────┐      ┌─────────────┐
//! │    Host     │─────>│   Event     │─────>│   Driver    │
//! │ (clicks,    │      │   Channel   │      │ (spawns,    │
//! │  shutdown)  │      │  (bounded)  │      │  shutdown)  │
//! └─────────────┘      └─────────────┘      └─────────────┘
//! ```
//!
//! The channel is bounded and sends never block: a host stuck behind a slow
//! driver drops clicks instead of freezing its own input loop. At the default
//! capacity that would take hundreds of clicks inside one 30 ms tick.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Default input queue capacity, plenty for human-speed clicking.
pub const INPUT_QUEUE_CAPACITY: usize = 256;

/// Events a host surface can feed the driver.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    /// The pointer was clicked at surface coordinates `(x, y)`.
    ///
    /// Spawns the configured label flying from the surface center toward
    /// the click point.
    PointerClick {
        /// Click x in surface units.
        x: f32,
        /// Click y in surface units.
        y: f32,
    },

    /// The host wants the driver to finish its current pass and stop.
    CloseRequested,
}

/// Event bus between one host and one driver.
///
/// Pre-allocates a bounded channel so memory cannot grow behind a stalled
/// consumer.
pub struct EventBus {
    sender: Sender<SurfaceEvent>,
    receiver: Receiver<SurfaceEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    ///
    /// `capacity` is the maximum number of undelivered events before sends
    /// start reporting failure. Use [`INPUT_QUEUE_CAPACITY`] unless there is
    /// a reason not to.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple producers).
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }

    /// Creates a paired sender and receiver in one call.
    #[must_use]
    pub fn create_pair(capacity: usize) -> (EventSender, EventReceiver) {
        let bus = Self::new(capacity);
        (bus.sender(), bus.receiver())
    }
}

/// Handle for feeding events to the driver.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<SurfaceEvent>,
}

impl EventSender {
    /// Sends an event without blocking.
    ///
    /// Returns `false` if the queue is full (the event is dropped) or the
    /// driver is gone.
    #[inline]
    pub fn send(&self, event: SurfaceEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => false,
        }
    }

    /// Sends an event, blocking until the queue has room.
    ///
    /// Use for events that must not be dropped, like [`SurfaceEvent::CloseRequested`].
    #[inline]
    pub fn send_blocking(&self, event: SurfaceEvent) -> bool {
        self.sender.send(event).is_ok()
    }
}

/// Handle for the driver to consume events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<SurfaceEvent>,
}

impl EventReceiver {
    /// Takes every pending event without blocking.
    #[inline]
    pub fn drain(&self) -> Vec<SurfaceEvent> {
        let mut events = Vec::with_capacity(16);
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Takes one pending event without blocking.
    #[inline]
    pub fn try_recv(&self) -> Option<SurfaceEvent> {
        self.receiver.try_recv().ok()
    }

    /// Number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Whether any events are pending.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}
