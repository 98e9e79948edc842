//! Declarative animation requests and the timeline that samples them.
//!
//! A request describes a property change (`from` → `to`) over a duration.
//! The host never steps frames for the widget: it records the request with
//! its start instant and evaluates the offset whenever it draws.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Timing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    /// Constant speed.
    #[default]
    Linear,
    /// Quadratic acceleration from rest.
    EaseIn,
    /// Quadratic deceleration to rest.
    EaseOut,
    /// Accelerate, then decelerate.
    EaseInOut,
}

impl Curve {
    /// Map progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// How many times an animation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Run once and hold the final value.
    Once,
    /// Restart from `from` every time `to` is reached.
    #[default]
    Forever,
}

/// A single declarative offset animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRequest {
    /// Offset at progress 0.
    pub from: f32,
    /// Offset at progress 1.
    pub to: f32,
    /// Length of one cycle. Zero means the change is instant.
    pub duration: Duration,
    /// Wait before the first cycle starts.
    pub delay: Duration,
    /// Timing curve.
    pub curve: Curve,
    /// Repeat mode.
    pub repeat: Repeat,
}

impl AnimationRequest {
    /// A linear, infinitely repeating scroll from 0 to `to`.
    pub const fn looping(to: f32, duration: Duration, delay: Duration) -> Self {
        Self {
            from: 0.0,
            to,
            duration,
            delay,
            curve: Curve::Linear,
            repeat: Repeat::Forever,
        }
    }

    /// Evaluate the animated value `elapsed` after the request was issued.
    #[allow(clippy::cast_possible_truncation)]
    pub fn sample(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return self.from;
        };
        if self.duration.is_zero() {
            return self.to;
        }

        let raw = active.as_secs_f64() / self.duration.as_secs_f64();
        let progress = match self.repeat {
            Repeat::Forever => raw.fract(),
            Repeat::Once => raw.min(1.0),
        };
        let eased = self.curve.apply(progress as f32);
        (self.to - self.from).mul_add(eased, self.from)
    }
}

/// Handle to a running animation, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub u64);

impl std::fmt::Display for AnimationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "anim#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Running {
    request: AnimationRequest,
    started_at: Instant,
}

/// Timeline of running animations.
#[derive(Debug, Default)]
pub struct Animator {
    running: HashMap<AnimationId, Running>,
    next_id: u64,
}

impl Animator {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a request starting at `now`.
    pub fn start(&mut self, request: AnimationRequest, now: Instant) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        self.running.insert(id, Running { request, started_at: now });
        id
    }

    /// Stop an animation. Returns `false` if it was not running.
    pub fn cancel(&mut self, id: AnimationId) -> bool {
        self.running.remove(&id).is_some()
    }

    /// Stop every animation.
    pub fn cancel_all(&mut self) {
        self.running.clear();
    }

    /// Sample an animation at `now`; `None` once cancelled.
    pub fn sample(&self, id: AnimationId, now: Instant) -> Option<f32> {
        self.running
            .get(&id)
            .map(|r| r.request.sample(now.saturating_duration_since(r.started_at)))
    }

    /// Get the request behind a running animation.
    pub fn request(&self, id: AnimationId) -> Option<&AnimationRequest> {
        self.running.get(&id).map(|r| &r.request)
    }

    /// Number of running animations.
    pub fn len(&self) -> usize {
        self.running.len()
    }

    /// Check if nothing is running.
    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }
}
