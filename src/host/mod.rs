//! Host collaborators: everything the marquee needs from its environment.
//!
//! The widget does not own a view tree or a frame loop. It describes its
//! content as a [`ScrollContent`] and its motion as an [`AnimationRequest`],
//! and hands both to a [`MarqueeHost`]. [`TerminalHost`] is the bundled
//! implementation that composites into a [`Buffer`](crate::Buffer).

mod animation;
mod terminal;

pub use animation::{AnimationId, AnimationRequest, Animator, Curve, Repeat};
pub use terminal::TerminalHost;

use crate::buffer::{Modifiers, Rgb};
use crate::text::TextSize;
use std::time::Instant;
use thiserror::Error;

/// One label inside the scrollable area.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Text shown by the label.
    pub text: String,
    /// Left edge in content coordinates.
    pub origin_x: f32,
    /// Measured size of `text`.
    pub size: TextSize,
    /// Text color.
    pub fg: Rgb,
    /// Label background.
    pub bg: Rgb,
    /// Style modifiers.
    pub modifiers: Modifiers,
}

/// The scrollable area and the labels placed inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollContent {
    /// Labels, in content coordinates.
    pub runs: Vec<TextRun>,
    /// Total horizontal extent of the scrollable area.
    pub content_width: f32,
    /// Background behind the labels.
    pub background: Rgb,
}

/// Failures reported by a host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// An animation was requested with nothing attached to move.
    #[error("no content is attached to animate")]
    NoContent,
    /// The referenced animation is not running on this host.
    #[error("animation {0} is not running")]
    UnknownAnimation(AnimationId),
}

/// The environment a marquee is mounted in.
pub trait MarqueeHost {
    /// Currently visible width. Zero or less means layout has not happened.
    fn viewport_width(&self) -> f32;

    /// Remove every attached label and the scrollable area.
    fn detach_all_content(&mut self);

    /// Mount the scrollable area, replacing nothing: callers detach first.
    fn attach_content(&mut self, content: ScrollContent) -> Result<(), HostError>;

    /// Start animating the scroll offset of the attached content.
    fn animate(&mut self, request: AnimationRequest) -> Result<AnimationId, HostError>;

    /// Stop an animation started by [`animate`](Self::animate).
    fn cancel_animation(&mut self, id: AnimationId);

    /// Bring the host's timeline up to `now` before an animation is requested.
    ///
    /// Hosts that stamp animations with their own frame clock override this.
    fn sync_clock(&mut self, _now: Instant) {}

    /// Background shown while no content is attached.
    fn set_idle_background(&mut self, _background: Rgb) {}
}
