//! # Flywheel Marquee
//!
//! A seamless auto-scrolling marquee text widget for terminal UIs.
//!
//! The marquee repeats a short string until it covers twice the visible
//! width, lays two identical copies back to back and asks its host for a
//! linear, endlessly repeating scroll of exactly one copy. The host owns the
//! frame loop; the widget only describes content and motion.
//!
//! ## Core Concepts
//!
//! - **Host collaborator**: [`MarqueeHost`] supplies the viewport width,
//!   mounts content and runs declarative animations
//! - **Measurement**: [`TextMeasurer`] turns text and font into a
//!   ceil-rounded size
//! - **Deferred start**: starting before layout waits instead of failing
//! - **Terminal host**: [`TerminalHost`] composites into a [`Buffer`] that
//!   [`Presenter`] flushes with crossterm
//!
//! ## Example
//!
//! ```rust,ignore
//! use marquee::{Buffer, MarqueeConfig, MarqueeWidget, Rect, TerminalHost, Widget};
//!
//! let host = TerminalHost::new(Rect::new(0, 0, 40, 1));
//! let mut marquee = MarqueeWidget::new(host, MarqueeConfig::new("Now playing: ... "));
//! marquee.start();
//!
//! let mut buffer = Buffer::new(40, 1);
//! marquee.tick(std::time::Instant::now());
//! marquee.render(&mut buffer);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod clock;
pub mod host;
pub mod layout;
pub mod marquee;
pub mod terminal;
pub mod text;
pub mod widget;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, Modifiers, Rgb};
pub use clock::{FrameClock, StartTimer};
pub use host::{AnimationId, AnimationRequest, Animator, Curve, HostError, MarqueeHost, Repeat, ScrollContent, TerminalHost, TextRun};
pub use layout::Rect;
pub use marquee::{
    ConfigError, LoopTarget, MarqueeColors, MarqueeConfig, MarqueeError, MarqueeState, MarqueeWidget,
    RepeatStrategy, Repetition, StartOutcome,
};
pub use terminal::Presenter;
pub use text::{CellMeasurer, FontDescriptor, MonospaceMeasurer, TextMeasurer, TextSize};
pub use widget::Widget;
