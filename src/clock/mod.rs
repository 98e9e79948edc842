//! Clock: Timer channels for frame pacing and deferred start.
//!
//! Both timers are plain crossbeam receivers, so they compose with input
//! channels in a single `select!`:
//!
//! ```ignore
//! loop {
//!     select! {
//!         recv(frames.receiver()) -> now => {
//!             marquee.tick(now?);
//!             redraw();
//!         }
//!         recv(start.receiver()) -> _ => {
//!             marquee.start();
//!         }
//!     }
//! }
//! ```

use crossbeam_channel::{after, never, tick, Receiver};
use std::time::{Duration, Instant};

/// Periodic frame ticks.
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    rx: Receiver<Instant>,
}

impl FrameClock {
    /// Tick every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            rx: tick(interval),
        }
    }

    /// Tick `fps` times per second (at least once).
    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }

    /// Time between ticks.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Receiver yielding the instant of each tick.
    ///
    /// Ticks that are not received in time are dropped, not queued.
    pub const fn receiver(&self) -> &Receiver<Instant> {
        &self.rx
    }
}

/// A fire-once timer for starting a marquee after the first layout pass.
#[derive(Debug)]
pub struct StartTimer {
    rx: Receiver<Instant>,
}

impl StartTimer {
    /// Fire once after `delay`.
    pub fn after(delay: Duration) -> Self {
        Self { rx: after(delay) }
    }

    /// A timer that never fires (nothing scheduled).
    pub fn idle() -> Self {
        Self { rx: never() }
    }

    /// Receiver yielding the firing instant.
    pub const fn receiver(&self) -> &Receiver<Instant> {
        &self.rx
    }
}

impl Default for StartTimer {
    fn default() -> Self {
        Self::idle()
    }
}
